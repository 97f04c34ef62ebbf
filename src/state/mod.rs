//! Shared application state handed to every axum handler.

use std::sync::Arc;

use crate::{config::AppConfig, dao::game_store::GameStore};

/// Reference-counted handle to [`AppState`], used as the router state.
pub type SharedState = Arc<AppState>;

/// Central application state: the storage handle every request shares, plus runtime config.
pub struct AppState {
    game_store: Arc<dyn GameStore>,
    config: AppConfig,
}

impl AppState {
    /// Construct a new [`AppState`] wrapped in an [`Arc`] so it can be cloned cheaply.
    pub fn new(game_store: Arc<dyn GameStore>, config: AppConfig) -> SharedState {
        Arc::new(Self { game_store, config })
    }

    /// Handle to the installed game store.
    pub fn game_store(&self) -> &Arc<dyn GameStore> {
        &self.game_store
    }

    /// Runtime configuration loaded at startup.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }
}
