use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{get, put},
};

use crate::{
    dto::game::{CreateGameRequest, GameIdResponse, GameRecord, UpdateGameRequest},
    error::AppError,
    services::game_service,
    state::SharedState,
};

/// Routes exposing game records: create, update scores, list.
pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/api/games", get(list_games).post(create_game))
        .route("/api/games/{id}", put(update_game))
}

/// Create a game between two players and return its identifier.
#[utoipa::path(
    post,
    path = "/api/games",
    tag = "games",
    request_body = CreateGameRequest,
    responses(
        (status = 201, description = "Game created", body = GameIdResponse),
        (status = 500, description = "Storage failure", body = String, content_type = "text/plain")
    )
)]
pub async fn create_game(
    State(state): State<SharedState>,
    Json(payload): Json<CreateGameRequest>,
) -> Result<(StatusCode, Json<GameIdResponse>), AppError> {
    let created = game_service::create_game(&state, payload).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Replace the running score, state and turn count of a game.
#[utoipa::path(
    put,
    path = "/api/games/{id}",
    tag = "games",
    params(("id" = i64, Path, description = "Identifier of the game to update")),
    request_body = UpdateGameRequest,
    responses(
        (status = 200, description = "Game updated", body = GameIdResponse),
        (status = 404, description = "Unknown game (only when unknown updates are rejected)"),
        (status = 500, description = "Storage failure", body = String, content_type = "text/plain")
    )
)]
pub async fn update_game(
    State(state): State<SharedState>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateGameRequest>,
) -> Result<Json<GameIdResponse>, AppError> {
    let updated = game_service::update_game(&state, id, payload).await?;
    Ok(Json(updated))
}

/// List every stored game using the flat table layout.
#[utoipa::path(
    get,
    path = "/api/games",
    tag = "games",
    responses(
        (status = 200, description = "All games", body = [GameRecord]),
        (status = 500, description = "Storage failure", body = String, content_type = "text/plain")
    )
)]
pub async fn list_games(
    State(state): State<SharedState>,
) -> Result<Json<Vec<GameRecord>>, AppError> {
    Ok(Json(game_service::list_games(&state).await?))
}
