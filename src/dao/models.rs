use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

/// Outcome/status of a game, as reported by the client.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub enum GameState {
    /// Game still in progress.
    #[default]
    Ongoing,
    /// Both players finished level.
    Draw,
    /// The turn limit was reached before anyone won.
    MaxedTurns,
    /// Player one reached their target.
    PlayerOneWon,
    /// Player two reached their target.
    PlayerTwoWon,
}

impl GameState {
    /// Text stored in the `state` column.
    pub fn as_str(self) -> &'static str {
        match self {
            GameState::Ongoing => "ongoing",
            GameState::Draw => "draw",
            GameState::MaxedTurns => "maxedTurns",
            GameState::PlayerOneWon => "playerOneWon",
            GameState::PlayerTwoWon => "playerTwoWon",
        }
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raised when a stored `state` value is not one of the known variants.
#[derive(Debug, Error)]
#[error("unknown game state `{0}`")]
pub struct UnknownGameState(pub String);

impl FromStr for GameState {
    type Err = UnknownGameState;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "ongoing" => Ok(GameState::Ongoing),
            "draw" => Ok(GameState::Draw),
            "maxedTurns" => Ok(GameState::MaxedTurns),
            "playerOneWon" => Ok(GameState::PlayerOneWon),
            "playerTwoWon" => Ok(GameState::PlayerTwoWon),
            other => Err(UnknownGameState(other.to_owned())),
        }
    }
}

impl TryFrom<String> for GameState {
    type Error = UnknownGameState;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Player fields as stored inline in a game row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerEntity {
    /// Family name.
    pub last_name: String,
    /// Given name.
    pub first_name: String,
    /// Points this player needs to win.
    pub points_needed: i64,
}

/// Row inserted when a game is created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewGameEntity {
    /// Stored in the `player1_*` columns.
    pub player1: PlayerEntity,
    /// Stored in the `player2_*` columns.
    pub player2: PlayerEntity,
    /// Initial scores and state.
    pub score: GameScoreEntity,
    /// ISO-8601 creation timestamp, written once.
    pub created_at: String,
}

/// Mutable part of a game row, replaced wholesale on update.
///
/// The default value is the state of a freshly created game.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GameScoreEntity {
    /// Current points of player one.
    pub points_player1: i64,
    /// Current points of player two.
    pub points_player2: i64,
    /// Reported outcome so far.
    pub state: GameState,
    /// Turns played so far.
    pub turns_taken: i64,
}

/// Full `games` row as returned by a table scan.
///
/// Columns other than `id` are optional: rows written by other clients may leave them NULL,
/// and they are reported as such rather than failing the whole listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameEntity {
    /// Primary key assigned by the database.
    pub id: i64,
    /// `player1_lastName` column.
    pub player1_last_name: Option<String>,
    /// `player1_firstName` column.
    pub player1_first_name: Option<String>,
    /// `player1_pointsNeeded` column.
    pub player1_points_needed: Option<i64>,
    /// `player2_lastName` column.
    pub player2_last_name: Option<String>,
    /// `player2_firstName` column.
    pub player2_first_name: Option<String>,
    /// `player2_pointsNeeded` column.
    pub player2_points_needed: Option<i64>,
    /// `turnsTaken` column.
    pub turns_taken: Option<i64>,
    /// `pointsPlayer1` column.
    pub points_player1: Option<i64>,
    /// `pointsPlayer2` column.
    pub points_player2: Option<i64>,
    /// `state` column, checked against the known states.
    pub state: Option<GameState>,
    /// `createdAt` column, never rewritten after insert.
    pub created_at: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stored_text_matches_wire_name() {
        for state in [
            GameState::Ongoing,
            GameState::Draw,
            GameState::MaxedTurns,
            GameState::PlayerOneWon,
            GameState::PlayerTwoWon,
        ] {
            assert_eq!(state.as_str().parse::<GameState>().unwrap(), state);
            assert_eq!(
                serde_json::to_value(state).unwrap(),
                serde_json::Value::String(state.as_str().into())
            );
        }
    }

    #[test]
    fn unknown_state_is_rejected() {
        let err = "finished".parse::<GameState>().unwrap_err();
        assert_eq!(err.to_string(), "unknown game state `finished`");
        assert!(serde_json::from_str::<GameState>("\"Ongoing\"").is_err());
    }
}
