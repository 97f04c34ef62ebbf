use sqlx::FromRow;

use crate::dao::{
    game_store::sqlite::error::SqliteDaoError,
    models::{GameEntity, GameState},
};

/// Raw `games` row. Every column but `id` may be NULL in databases written by older
/// clients, and `state` is kept as text until it is checked.
#[derive(Debug, FromRow)]
pub struct GameRow {
    pub id: i64,
    #[sqlx(rename = "player1_lastName")]
    pub player1_last_name: Option<String>,
    #[sqlx(rename = "player1_firstName")]
    pub player1_first_name: Option<String>,
    #[sqlx(rename = "player1_pointsNeeded")]
    pub player1_points_needed: Option<i64>,
    #[sqlx(rename = "player2_lastName")]
    pub player2_last_name: Option<String>,
    #[sqlx(rename = "player2_firstName")]
    pub player2_first_name: Option<String>,
    #[sqlx(rename = "player2_pointsNeeded")]
    pub player2_points_needed: Option<i64>,
    #[sqlx(rename = "turnsTaken")]
    pub turns_taken: Option<i64>,
    #[sqlx(rename = "pointsPlayer1")]
    pub points_player1: Option<i64>,
    #[sqlx(rename = "pointsPlayer2")]
    pub points_player2: Option<i64>,
    pub state: Option<String>,
    #[sqlx(rename = "createdAt")]
    pub created_at: Option<String>,
}

impl TryFrom<GameRow> for GameEntity {
    type Error = SqliteDaoError;

    fn try_from(row: GameRow) -> Result<Self, Self::Error> {
        let state = row
            .state
            .map(GameState::try_from)
            .transpose()
            .map_err(|source| SqliteDaoError::UnknownState { id: row.id, source })?;

        Ok(Self {
            id: row.id,
            player1_last_name: row.player1_last_name,
            player1_first_name: row.player1_first_name,
            player1_points_needed: row.player1_points_needed,
            player2_last_name: row.player2_last_name,
            player2_first_name: row.player2_first_name,
            player2_points_needed: row.player2_points_needed,
            turns_taken: row.turns_taken,
            points_player1: row.points_player1,
            points_player2: row.points_player2,
            state,
            created_at: row.created_at,
        })
    }
}
