//! Application-level configuration loading: listening port, database file and update policy.

use std::{
    env, fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use serde::Deserialize;
use tracing::{info, warn};

/// Default location on disk where the server looks for the JSON configuration.
const DEFAULT_CONFIG_PATH: &str = "config/app.json";
/// Environment variable that overrides [`DEFAULT_CONFIG_PATH`].
const CONFIG_PATH_ENV: &str = "GAME_RECORDS_CONFIG_PATH";
const PORT_ENV: &str = "PORT";
const DATABASE_PATH_ENV: &str = "DATABASE_PATH";

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_DATABASE_PATH: &str = "games.db";

#[derive(Debug, Clone, PartialEq, Eq)]
/// Immutable runtime configuration shared across the application.
pub struct AppConfig {
    /// TCP port the HTTP server binds on all interfaces.
    pub port: u16,
    /// SQLite database file, created on first start.
    pub database_path: PathBuf,
    /// When set, updating a game id that does not exist answers 404 instead of succeeding.
    pub reject_unknown_game_updates: bool,
}

impl AppConfig {
    /// Load the configuration from disk and the environment, falling back to built-in defaults.
    pub fn load() -> Self {
        let mut config = Self::load_from(&resolve_config_path());
        config.apply_env_overrides(
            env::var(PORT_ENV).ok().as_deref(),
            env::var_os(DATABASE_PATH_ENV).map(PathBuf::from),
        );
        config
    }

    /// Read the JSON configuration stored at `path`.
    pub fn load_from(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(contents) => match serde_json::from_str::<RawConfig>(&contents) {
                Ok(raw) => {
                    let app_config: Self = raw.into();
                    info!(
                        path = %path.display(),
                        port = app_config.port,
                        database = %app_config.database_path.display(),
                        "loaded configuration"
                    );
                    app_config
                }
                Err(err) => {
                    warn!(
                        path = %path.display(),
                        error = %err,
                        "failed to parse config; falling back to defaults"
                    );
                    Self::default()
                }
            },
            Err(err) if err.kind() == ErrorKind::NotFound => {
                info!(
                    path = %path.display(),
                    "config file not found; using built-in defaults"
                );
                Self::default()
            }
            Err(err) => {
                warn!(
                    path = %path.display(),
                    error = %err,
                    "failed to read config; falling back to defaults"
                );
                Self::default()
            }
        }
    }

    fn apply_env_overrides(&mut self, port: Option<&str>, database_path: Option<PathBuf>) {
        if let Some(value) = port {
            match value.parse::<u16>() {
                Ok(port) => self.port = port,
                Err(err) => warn!(value, error = %err, "ignoring invalid {PORT_ENV}"),
            }
        }

        if let Some(path) = database_path.filter(|path| !path.as_os_str().is_empty()) {
            self.database_path = path;
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            database_path: PathBuf::from(DEFAULT_DATABASE_PATH),
            reject_unknown_game_updates: false,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
/// JSON representation of the configuration file located at [`DEFAULT_CONFIG_PATH`].
struct RawConfig {
    port: Option<u16>,
    database_path: Option<PathBuf>,
    reject_unknown_game_updates: Option<bool>,
}

impl From<RawConfig> for AppConfig {
    fn from(value: RawConfig) -> Self {
        let defaults = Self::default();
        Self {
            port: value.port.unwrap_or(defaults.port),
            database_path: value.database_path.unwrap_or(defaults.database_path),
            reject_unknown_game_updates: value
                .reject_unknown_game_updates
                .unwrap_or(defaults.reject_unknown_game_updates),
        }
    }
}

/// Resolve the configuration path taking the environment override into account.
fn resolve_config_path() -> PathBuf {
    env::var_os(CONFIG_PATH_ENV)
        .map(PathBuf::from)
        .filter(|path| !path.as_os_str().is_empty())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH))
}

#[cfg(test)]
mod tests {
    use std::time::{SystemTime, UNIX_EPOCH};

    use super::*;

    fn write_temp_config(contents: &str) -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        let path = env::temp_dir().join(format!(
            "game-records-config-{}-{nanos}.json",
            std::process::id()
        ));
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn missing_file_yields_defaults() {
        let config = AppConfig::load_from(Path::new("/nonexistent/game-records/app.json"));
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.port, 3000);
        assert_eq!(config.database_path, PathBuf::from("games.db"));
        assert!(!config.reject_unknown_game_updates);
    }

    #[test]
    fn partial_file_keeps_remaining_defaults() {
        let path = write_temp_config(r#"{ "reject_unknown_game_updates": true }"#);
        let config = AppConfig::load_from(&path);
        fs::remove_file(&path).unwrap();

        assert!(config.reject_unknown_game_updates);
        assert_eq!(config.port, 3000);
    }

    #[test]
    fn malformed_file_yields_defaults() {
        let path = write_temp_config("{ port: ");
        let config = AppConfig::load_from(&path);
        fs::remove_file(&path).unwrap();

        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn env_overrides_win_over_file_values() {
        let mut config = AppConfig {
            port: 8080,
            database_path: PathBuf::from("from-file.db"),
            reject_unknown_game_updates: false,
        };

        config.apply_env_overrides(Some("9000"), Some(PathBuf::from("/var/lib/games.db")));
        assert_eq!(config.port, 9000);
        assert_eq!(config.database_path, PathBuf::from("/var/lib/games.db"));

        config.apply_env_overrides(Some("not-a-port"), Some(PathBuf::new()));
        assert_eq!(config.port, 9000);
        assert_eq!(config.database_path, PathBuf::from("/var/lib/games.db"));
    }
}
