use futures::future::BoxFuture;
use sqlx::{
    SqlitePool,
    sqlite::{SqlitePoolOptions, SqliteQueryResult},
};
use tracing::debug;

use super::{
    config::SqliteConfig,
    error::{SqliteDaoError, SqliteResult},
    models::GameRow,
};
use crate::dao::{
    game_store::GameStore,
    models::{GameEntity, GameScoreEntity, NewGameEntity},
    storage::StorageResult,
};

const GAMES_TABLE_NAME: &str = "games";

const CREATE_GAMES_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS games (
        id INTEGER PRIMARY KEY,
        player1_lastName TEXT,
        player1_firstName TEXT,
        player1_pointsNeeded INTEGER,
        player2_lastName TEXT,
        player2_firstName TEXT,
        player2_pointsNeeded INTEGER,
        turnsTaken INTEGER,
        pointsPlayer1 INTEGER,
        pointsPlayer2 INTEGER,
        state TEXT,
        createdAt TEXT
    )
"#;

const INSERT_GAME: &str = r#"
    INSERT INTO games (
        player1_lastName, player1_firstName, player1_pointsNeeded,
        player2_lastName, player2_firstName, player2_pointsNeeded,
        turnsTaken, pointsPlayer1, pointsPlayer2, state, createdAt
    ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
"#;

const UPDATE_GAME_SCORE: &str = r#"
    UPDATE games
    SET pointsPlayer1 = ?, pointsPlayer2 = ?, state = ?, turnsTaken = ?
    WHERE id = ?
"#;

// Column affinity does not stop other writers from storing REAL or TEXT values in the
// numeric columns, so every column is cast to the type it is read as. NULL stays NULL.
const SELECT_ALL_GAMES: &str = r#"
    SELECT
        id,
        CAST(player1_lastName AS TEXT) AS player1_lastName,
        CAST(player1_firstName AS TEXT) AS player1_firstName,
        CAST(player1_pointsNeeded AS INTEGER) AS player1_pointsNeeded,
        CAST(player2_lastName AS TEXT) AS player2_lastName,
        CAST(player2_firstName AS TEXT) AS player2_firstName,
        CAST(player2_pointsNeeded AS INTEGER) AS player2_pointsNeeded,
        CAST(turnsTaken AS INTEGER) AS turnsTaken,
        CAST(pointsPlayer1 AS INTEGER) AS pointsPlayer1,
        CAST(pointsPlayer2 AS INTEGER) AS pointsPlayer2,
        CAST(state AS TEXT) AS state,
        CAST(createdAt AS TEXT) AS createdAt
    FROM games
"#;

/// SQLite-backed [`GameStore`] holding a single shared connection.
#[derive(Clone)]
pub struct SqliteGameStore {
    pool: SqlitePool,
}

impl SqliteGameStore {
    /// Open the database and make sure the `games` table exists.
    pub async fn connect(config: SqliteConfig) -> SqliteResult<Self> {
        let options = config.connect_options()?;

        // A single long-lived connection: statements are serialised by SQLite itself and an
        // in-memory database lives exactly as long as that connection.
        let pool = SqlitePoolOptions::new()
            .min_connections(1)
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await
            .map_err(|source| SqliteDaoError::Open {
                location: config.location.to_string(),
                source,
            })?;

        let store = Self { pool };
        store.ensure_schema().await?;
        debug!(location = %config.location, "SQLite game store ready");
        Ok(store)
    }

    async fn ensure_schema(&self) -> SqliteResult<()> {
        sqlx::query(CREATE_GAMES_TABLE)
            .execute(&self.pool)
            .await
            .map_err(|source| SqliteDaoError::EnsureSchema {
                table: GAMES_TABLE_NAME,
                source,
            })?;
        Ok(())
    }

    async fn create_game(&self, game: NewGameEntity) -> SqliteResult<i64> {
        let NewGameEntity {
            player1,
            player2,
            score,
            created_at,
        } = game;

        let result: SqliteQueryResult = sqlx::query(INSERT_GAME)
            .bind(player1.last_name)
            .bind(player1.first_name)
            .bind(player1.points_needed)
            .bind(player2.last_name)
            .bind(player2.first_name)
            .bind(player2.points_needed)
            .bind(score.turns_taken)
            .bind(score.points_player1)
            .bind(score.points_player2)
            .bind(score.state.as_str())
            .bind(created_at)
            .execute(&self.pool)
            .await
            .map_err(|source| SqliteDaoError::InsertGame { source })?;

        Ok(result.last_insert_rowid())
    }

    async fn update_game(&self, id: i64, score: GameScoreEntity) -> SqliteResult<u64> {
        let result = sqlx::query(UPDATE_GAME_SCORE)
            .bind(score.points_player1)
            .bind(score.points_player2)
            .bind(score.state.as_str())
            .bind(score.turns_taken)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|source| SqliteDaoError::UpdateGame { id, source })?;

        Ok(result.rows_affected())
    }

    async fn list_games(&self) -> SqliteResult<Vec<GameEntity>> {
        let rows = sqlx::query_as::<_, GameRow>(SELECT_ALL_GAMES)
            .fetch_all(&self.pool)
            .await
            .map_err(|source| SqliteDaoError::ListGames { source })?;

        rows.into_iter().map(GameEntity::try_from).collect()
    }

    async fn ping(&self) -> SqliteResult<()> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(|source| SqliteDaoError::HealthPing { source })?;
        Ok(())
    }

    /// Flush and close the underlying connection.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

impl GameStore for SqliteGameStore {
    fn create_game(&self, game: NewGameEntity) -> BoxFuture<'static, StorageResult<i64>> {
        let store = self.clone();
        Box::pin(async move { store.create_game(game).await.map_err(Into::into) })
    }

    fn update_game(
        &self,
        id: i64,
        score: GameScoreEntity,
    ) -> BoxFuture<'static, StorageResult<u64>> {
        let store = self.clone();
        Box::pin(async move { store.update_game(id, score).await.map_err(Into::into) })
    }

    fn list_games(&self) -> BoxFuture<'static, StorageResult<Vec<GameEntity>>> {
        let store = self.clone();
        Box::pin(async move { store.list_games().await.map_err(Into::into) })
    }

    fn health_check(&self) -> BoxFuture<'static, StorageResult<()>> {
        let store = self.clone();
        Box::pin(async move { store.ping().await.map_err(Into::into) })
    }
}
