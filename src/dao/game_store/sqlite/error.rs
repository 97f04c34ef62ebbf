//! Error types shared by the SQLite storage implementation.

use sqlx::Error as SqlxError;
use thiserror::Error;

use crate::dao::models::UnknownGameState;

/// Convenient result alias returning [`SqliteDaoError`] failures.
pub type SqliteResult<T> = Result<T, SqliteDaoError>;

/// Failures that can occur while interacting with SQLite.
#[derive(Debug, Error)]
pub enum SqliteDaoError {
    /// Connection options could not be built for the database location.
    #[error("invalid SQLite options for `{location}`")]
    InvalidOptions {
        location: String,
        #[source]
        source: SqlxError,
    },
    /// The database could not be opened.
    #[error("failed to open SQLite database `{location}`")]
    Open {
        location: String,
        #[source]
        source: SqlxError,
    },
    /// Creating the `games` table failed.
    #[error("failed to ensure table `{table}`")]
    EnsureSchema {
        table: &'static str,
        #[source]
        source: SqlxError,
    },
    #[error("failed to insert game")]
    InsertGame {
        #[source]
        source: SqlxError,
    },
    #[error("failed to update game `{id}`")]
    UpdateGame {
        id: i64,
        #[source]
        source: SqlxError,
    },
    #[error("failed to list games")]
    ListGames {
        #[source]
        source: SqlxError,
    },
    /// A stored row carries a `state` outside the known set.
    #[error("game `{id}` has an unreadable state")]
    UnknownState {
        id: i64,
        #[source]
        source: UnknownGameState,
    },
    /// Liveness probe against the database failed.
    #[error("SQLite health check failed")]
    HealthPing {
        #[source]
        source: SqlxError,
    },
}
