//! SQLite implementation of [`GameStore`](super::GameStore), one row per game.

mod config;
mod error;
mod models;
mod store;

pub use config::{SqliteConfig, SqliteLocation};
pub use error::{SqliteDaoError, SqliteResult};
pub use store::SqliteGameStore;

use crate::dao::storage::StorageError;

impl From<SqliteDaoError> for StorageError {
    fn from(err: SqliteDaoError) -> Self {
        StorageError::unavailable(err.to_string(), err)
    }
}
