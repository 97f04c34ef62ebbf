use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::dao::models::{GameEntity, GameScoreEntity, GameState, PlayerEntity};

/// One side of a game, as supplied when the game is created.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlayerInput {
    pub last_name: String,
    pub first_name: String,
    /// Points this player needs to win. Any integer is accepted.
    pub points_needed: i64,
}

/// Payload used to create a new game between two players.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateGameRequest {
    pub player1: PlayerInput,
    pub player2: PlayerInput,
}

/// Full replacement of a game's running score and state.
///
/// Counters are stored as sent; only their JSON type is checked.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateGameRequest {
    pub points_player1: i64,
    pub points_player2: i64,
    pub state: GameState,
    pub turns_taken: i64,
}

/// Identifier of the game a request created or modified.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct GameIdResponse {
    pub id: i64,
}

/// Stored game exactly as laid out in the `games` table (players are not re-nested).
///
/// Columns left empty in storage are rendered as `null`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct GameRecord {
    pub id: i64,
    #[serde(rename = "player1_lastName")]
    pub player1_last_name: Option<String>,
    #[serde(rename = "player1_firstName")]
    pub player1_first_name: Option<String>,
    #[serde(rename = "player1_pointsNeeded")]
    pub player1_points_needed: Option<i64>,
    #[serde(rename = "player2_lastName")]
    pub player2_last_name: Option<String>,
    #[serde(rename = "player2_firstName")]
    pub player2_first_name: Option<String>,
    #[serde(rename = "player2_pointsNeeded")]
    pub player2_points_needed: Option<i64>,
    #[serde(rename = "turnsTaken")]
    pub turns_taken: Option<i64>,
    #[serde(rename = "pointsPlayer1")]
    pub points_player1: Option<i64>,
    #[serde(rename = "pointsPlayer2")]
    pub points_player2: Option<i64>,
    pub state: Option<GameState>,
    /// ISO-8601 UTC timestamp with millisecond precision.
    #[serde(rename = "createdAt")]
    pub created_at: Option<String>,
}

impl From<PlayerInput> for PlayerEntity {
    fn from(player: PlayerInput) -> Self {
        Self {
            last_name: player.last_name,
            first_name: player.first_name,
            points_needed: player.points_needed,
        }
    }
}

impl From<UpdateGameRequest> for GameScoreEntity {
    fn from(request: UpdateGameRequest) -> Self {
        Self {
            points_player1: request.points_player1,
            points_player2: request.points_player2,
            state: request.state,
            turns_taken: request.turns_taken,
        }
    }
}

impl From<GameEntity> for GameRecord {
    fn from(entity: GameEntity) -> Self {
        Self {
            id: entity.id,
            player1_last_name: entity.player1_last_name,
            player1_first_name: entity.player1_first_name,
            player1_points_needed: entity.player1_points_needed,
            player2_last_name: entity.player2_last_name,
            player2_first_name: entity.player2_first_name,
            player2_points_needed: entity.player2_points_needed,
            turns_taken: entity.turns_taken,
            points_player1: entity.points_player1,
            points_player2: entity.points_player2,
            state: entity.state,
            created_at: entity.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn create_request_reads_camel_case_players() {
        let request: CreateGameRequest = serde_json::from_value(json!({
            "player1": {"lastName": "Doe", "firstName": "Jane", "pointsNeeded": 11},
            "player2": {"lastName": "", "firstName": "", "pointsNeeded": -3}
        }))
        .unwrap();

        assert_eq!(request.player1.last_name, "Doe");
        assert_eq!(request.player1.first_name, "Jane");
        assert_eq!(request.player2.points_needed, -3);
    }

    #[test]
    fn create_request_requires_both_players() {
        let result = serde_json::from_value::<CreateGameRequest>(json!({
            "player1": {"lastName": "Doe", "firstName": "Jane", "pointsNeeded": 11}
        }));
        assert!(result.is_err());
    }

    #[test]
    fn update_request_rejects_unknown_state() {
        let result = serde_json::from_value::<UpdateGameRequest>(json!({
            "pointsPlayer1": 1, "pointsPlayer2": 2, "state": "abandoned", "turnsTaken": 3
        }));
        assert!(result.is_err());
    }

    #[test]
    fn update_request_accepts_any_integer_counters() {
        let request: UpdateGameRequest = serde_json::from_value(json!({
            "pointsPlayer1": 5, "pointsPlayer2": -1, "state": "ongoing", "turnsTaken": -8
        }))
        .unwrap();

        let score: GameScoreEntity = request.into();
        assert_eq!(score.points_player2, -1);
        assert_eq!(score.turns_taken, -8);
    }

    #[test]
    fn update_request_rejects_fractional_counters() {
        let result = serde_json::from_value::<UpdateGameRequest>(json!({
            "pointsPlayer1": 1.5, "pointsPlayer2": 0, "state": "ongoing", "turnsTaken": 0
        }));
        assert!(result.is_err());
    }

    #[test]
    fn record_serializes_with_column_names() {
        let record = GameRecord {
            id: 1,
            player1_last_name: Some("Doe".into()),
            player1_first_name: Some("Jane".into()),
            player1_points_needed: Some(11),
            player2_last_name: Some("Roe".into()),
            player2_first_name: Some("Sam".into()),
            player2_points_needed: Some(11),
            turns_taken: Some(8),
            points_player1: Some(5),
            points_player2: Some(3),
            state: Some(GameState::MaxedTurns),
            created_at: Some("2026-10-19T08:15:30.123Z".into()),
        };

        assert_eq!(
            serde_json::to_value(record).unwrap(),
            json!({
                "id": 1,
                "player1_lastName": "Doe",
                "player1_firstName": "Jane",
                "player1_pointsNeeded": 11,
                "player2_lastName": "Roe",
                "player2_firstName": "Sam",
                "player2_pointsNeeded": 11,
                "turnsTaken": 8,
                "pointsPlayer1": 5,
                "pointsPlayer2": 3,
                "state": "maxedTurns",
                "createdAt": "2026-10-19T08:15:30.123Z"
            })
        );
    }

    #[test]
    fn empty_columns_serialize_as_null() {
        let record: GameRecord = GameEntity {
            id: 5,
            player1_last_name: None,
            player1_first_name: None,
            player1_points_needed: None,
            player2_last_name: None,
            player2_first_name: None,
            player2_points_needed: None,
            turns_taken: None,
            points_player1: Some(2),
            points_player2: None,
            state: None,
            created_at: None,
        }
        .into();

        let value = serde_json::to_value(record).unwrap();
        assert_eq!(value.as_object().unwrap().len(), 12);
        assert_eq!(value["pointsPlayer1"], 2);
        assert!(value["player1_lastName"].is_null());
        assert!(value["state"].is_null());
        assert!(value["createdAt"].is_null());
    }
}
