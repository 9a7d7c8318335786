//! In-memory list store
//!
//! Stands in for a remote synced collection: after every successful write
//! it can push the whole list to a snapshot feed.

use super::records;
use crate::domain::entities::{sort_by_position, PositionChange, TodoItem};
use crate::domain::errors::{FeedError, StoreError};
use crate::domain::value_objects::{ItemId, Position};
use crate::feed::{ListSnapshot, SnapshotPublisher};
use crate::ports::outbound::ListStore;
use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::RwLock;
use tracing::{debug, warn};

struct StoreState {
    items: Vec<TodoItem>,
    version: u64,
}

/// `ListStore` held in a `tokio::sync::RwLock`.
pub struct InMemoryListStore {
    state: RwLock<StoreState>,
    publisher: Option<SnapshotPublisher>,
    reject_writes: AtomicBool,
}

impl InMemoryListStore {
    pub fn new() -> Self {
        Self::with_items(Vec::new())
    }

    /// Store seeded with `items` at version 0.
    pub fn with_items(items: Vec<TodoItem>) -> Self {
        Self {
            state: RwLock::new(StoreState { items, version: 0 }),
            publisher: None,
            reject_writes: AtomicBool::new(false),
        }
    }

    /// Publish a snapshot after every successful write.
    pub fn with_publisher(mut self, publisher: SnapshotPublisher) -> Self {
        self.publisher = Some(publisher);
        self
    }

    /// While set, every write fails with `StoreError::Unavailable`.
    pub fn set_reject_writes(&self, reject: bool) {
        self.reject_writes.store(reject, Ordering::SeqCst);
    }

    /// Number of successful writes so far
    pub async fn version(&self) -> u64 {
        self.state.read().await.version
    }

    /// Current list as a snapshot, without bumping the version.
    pub async fn snapshot(&self) -> ListSnapshot {
        let state = self.state.read().await;
        ListSnapshot::new(state.version, state.items.clone())
    }

    async fn write<F>(&self, op: &'static str, edit: F) -> Result<(), StoreError>
    where
        F: FnOnce(&mut Vec<TodoItem>) -> Result<(), StoreError> + Send,
    {
        if self.reject_writes.load(Ordering::SeqCst) {
            warn!(op, "Write rejected, store unavailable");
            return Err(StoreError::Unavailable("writes rejected".to_string()));
        }

        let mut state = self.state.write().await;
        edit(&mut state.items)?;
        state.version += 1;
        debug!(op, version = state.version, "Store write committed");

        // Published under the lock so snapshots arrive in version order.
        // Publishing never waits, so the edit and its snapshot commit together.
        if let Some(publisher) = &self.publisher {
            let snapshot = ListSnapshot::new(state.version, state.items.clone());
            if let Err(FeedError::Closed) = publisher.publish(snapshot) {
                debug!(version = state.version, "Snapshot consumer gone, not published");
            }
        }
        Ok(())
    }
}

impl Default for InMemoryListStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ListStore for InMemoryListStore {
    async fn load(&self) -> Result<Vec<TodoItem>, StoreError> {
        let mut items = self.state.read().await.items.clone();
        sort_by_position(&mut items);
        Ok(items)
    }

    async fn insert(&self, item: TodoItem) -> Result<(), StoreError> {
        self.write("insert", |items| records::insert(items, item))
            .await
    }

    async fn update_position(&self, id: &ItemId, position: Position) -> Result<(), StoreError> {
        self.write("update_position", |items| {
            records::set_position(items, id, position)
        })
        .await
    }

    async fn update_positions(&self, changes: &[PositionChange]) -> Result<(), StoreError> {
        if changes.is_empty() {
            return Ok(());
        }
        self.write("update_positions", |items| {
            records::set_positions(items, changes)
        })
        .await
    }

    async fn set_completed(&self, id: &ItemId, completed: bool) -> Result<(), StoreError> {
        self.write("set_completed", |items| {
            records::set_completed(items, id, completed)
        })
        .await
    }

    async fn set_content(&self, id: &ItemId, content: &str) -> Result<(), StoreError> {
        self.write("set_content", |items| {
            records::set_content(items, id, content)
        })
        .await
    }

    async fn remove(&self, ids: &[ItemId]) -> Result<(), StoreError> {
        self.write("remove", |items| {
            records::remove(items, ids);
            Ok(())
        })
        .await
    }
}
