use time::OffsetDateTime;
use tracing::{error, info, warn};

use crate::{
    dao::{
        models::{GameScoreEntity, NewGameEntity},
        storage::StorageError,
    },
    dto::{
        format_timestamp,
        game::{CreateGameRequest, GameIdResponse, GameRecord, UpdateGameRequest},
    },
    error::ServiceError,
    state::SharedState,
};

const CREATE_FAILED: &str = "Error creating game";
const UPDATE_FAILED: &str = "Error updating game";
const LIST_FAILED: &str = "Error fetching games";

/// Persist a new game with zeroed scores in the `ongoing` state.
pub async fn create_game(
    state: &SharedState,
    request: CreateGameRequest,
) -> Result<GameIdResponse, ServiceError> {
    let CreateGameRequest { player1, player2 } = request;
    let game = NewGameEntity {
        player1: player1.into(),
        player2: player2.into(),
        score: GameScoreEntity::default(),
        created_at: format_timestamp(OffsetDateTime::now_utc()),
    };

    let id = state
        .game_store()
        .create_game(game)
        .await
        .map_err(storage_failure(CREATE_FAILED))?;

    info!(id, "game created");
    Ok(GameIdResponse { id })
}

/// Replace the scores, state and turn counter of game `id`.
///
/// An unknown id is reported as success unless the configuration asks to reject it.
pub async fn update_game(
    state: &SharedState,
    id: i64,
    request: UpdateGameRequest,
) -> Result<GameIdResponse, ServiceError> {
    let score: GameScoreEntity = request.into();
    let affected = state
        .game_store()
        .update_game(id, score)
        .await
        .map_err(storage_failure(UPDATE_FAILED))?;

    if affected == 0 {
        if state.config().reject_unknown_game_updates {
            return Err(ServiceError::NotFound(format!("game `{id}` not found")));
        }
        warn!(id, "update matched no game");
    } else {
        info!(id, state = %score.state, turns = score.turns_taken, "game updated");
    }

    Ok(GameIdResponse { id })
}

/// Every stored game in storage order.
pub async fn list_games(state: &SharedState) -> Result<Vec<GameRecord>, ServiceError> {
    let games = state
        .game_store()
        .list_games()
        .await
        .map_err(storage_failure(LIST_FAILED))?;

    Ok(games.into_iter().map(Into::into).collect())
}

fn storage_failure(message: &'static str) -> impl FnOnce(StorageError) -> ServiceError {
    move |source| {
        error!(error = ?source, "{message}");
        ServiceError::Storage { message, source }
    }
}
