//! Outbound Ports (Driven Ports / SPI)
//!
//! The store that holds the list. Whether it is an in-memory vector, a
//! local file or a remote synced collection is invisible to the engine.

use crate::domain::entities::{PositionChange, TodoItem};
use crate::domain::errors::StoreError;
use crate::domain::value_objects::{ItemId, Position};
use async_trait::async_trait;

/// Persistent home of one ordered list.
#[async_trait]
pub trait ListStore: Send + Sync {
    /// Current list in ascending position order.
    async fn load(&self) -> Result<Vec<TodoItem>, StoreError>;

    /// Add a new item. Fails with `DuplicateId` if the id exists.
    async fn insert(&self, item: TodoItem) -> Result<(), StoreError>;

    /// Single-record position write (ordinary moves).
    async fn update_position(&self, id: &ItemId, position: Position) -> Result<(), StoreError>;

    /// Bulk position write (rebalances).
    ///
    /// Either every change is applied or none is.
    async fn update_positions(&self, changes: &[PositionChange]) -> Result<(), StoreError>;

    async fn set_completed(&self, id: &ItemId, completed: bool) -> Result<(), StoreError>;

    async fn set_content(&self, id: &ItemId, content: &str) -> Result<(), StoreError>;

    /// Remove items. Unknown ids are ignored; survivors keep their
    /// positions.
    async fn remove(&self, ids: &[ItemId]) -> Result<(), StoreError>;
}
