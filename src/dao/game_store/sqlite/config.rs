use std::{fmt, path::PathBuf, str::FromStr};

use sqlx::sqlite::SqliteConnectOptions;

use super::error::{SqliteDaoError, SqliteResult};

const IN_MEMORY_URL: &str = "sqlite::memory:";

/// Where the SQLite database lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SqliteLocation {
    /// File on disk, created when missing.
    File(PathBuf),
    /// Private in-memory database, gone once the store is dropped.
    Memory,
}

impl fmt::Display for SqliteLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SqliteLocation::File(path) => write!(f, "{}", path.display()),
            SqliteLocation::Memory => f.write_str(":memory:"),
        }
    }
}

/// Runtime configuration describing which SQLite database to open.
#[derive(Debug, Clone)]
pub struct SqliteConfig {
    pub location: SqliteLocation,
}

impl SqliteConfig {
    /// Open (or create) the database stored at `path`.
    pub fn file(path: impl Into<PathBuf>) -> Self {
        Self {
            location: SqliteLocation::File(path.into()),
        }
    }

    /// Use a throwaway in-memory database.
    pub fn in_memory() -> Self {
        Self {
            location: SqliteLocation::Memory,
        }
    }

    pub(super) fn connect_options(&self) -> SqliteResult<SqliteConnectOptions> {
        match &self.location {
            SqliteLocation::File(path) => Ok(SqliteConnectOptions::new()
                .filename(path)
                .create_if_missing(true)),
            SqliteLocation::Memory => SqliteConnectOptions::from_str(IN_MEMORY_URL).map_err(
                |source| SqliteDaoError::InvalidOptions {
                    location: self.location.to_string(),
                    source,
                },
            ),
        }
    }
}
