pub mod sqlite;

use crate::dao::models::{GameEntity, GameScoreEntity, NewGameEntity};
use crate::dao::storage::StorageResult;
use futures::future::BoxFuture;

/// Abstraction over the persistence layer for game records.
pub trait GameStore: Send + Sync {
    /// Insert a new game row and return the identifier assigned by the backend.
    fn create_game(&self, game: NewGameEntity) -> BoxFuture<'static, StorageResult<i64>>;
    /// Overwrite the scores, state and turn counter of a game, returning the affected row count.
    fn update_game(&self, id: i64, score: GameScoreEntity)
    -> BoxFuture<'static, StorageResult<u64>>;
    /// Every stored game, in backend order.
    fn list_games(&self) -> BoxFuture<'static, StorageResult<Vec<GameEntity>>>;
    /// Cheap round trip proving the backend still answers.
    fn health_check(&self) -> BoxFuture<'static, StorageResult<()>>;
}
