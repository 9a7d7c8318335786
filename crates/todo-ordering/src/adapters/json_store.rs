//! JSON file list store
//!
//! The list is a single JSON array on disk. Writes go to a temp file that
//! is renamed over the original, so a crash leaves either the old or the
//! new list.

use super::records;
use crate::domain::entities::{sort_by_position, PositionChange, TodoItem};
use crate::domain::errors::StoreError;
use crate::domain::value_objects::{ItemId, Position};
use crate::ports::outbound::ListStore;
use async_trait::async_trait;
use std::ffi::OsString;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;
use tracing::{debug, info};

/// `ListStore` persisted to a JSON file.
///
/// A missing file reads as an empty list. Writes are serialized through an
/// internal lock; the file is not guarded against other processes.
pub struct JsonFileListStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl JsonFileListStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_items(&self) -> Result<Vec<TodoItem>, StoreError> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "No list file yet, starting empty");
                return Ok(Vec::new());
            }
            Err(err) => return Err(err.into()),
        };
        Ok(serde_json::from_slice(&bytes)?)
    }

    async fn write_items(&self, items: &[TodoItem]) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }

        let bytes = serde_json::to_vec_pretty(items)?;

        // Write atomically via temp file
        let temp_path = self.temp_path();
        tokio::fs::write(&temp_path, &bytes).await?;
        tokio::fs::rename(&temp_path, &self.path).await?;

        debug!(
            path = %self.path.display(),
            items = items.len(),
            bytes = bytes.len(),
            "List file written"
        );
        Ok(())
    }

    /// Sibling of the list file with `.tmp` appended to the full name, so
    /// it never coincides with the list file itself.
    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(OsString::from)
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    /// Read, edit and write back under the lock.
    async fn modify<F>(&self, edit: F) -> Result<(), StoreError>
    where
        F: FnOnce(&mut Vec<TodoItem>) -> Result<(), StoreError> + Send,
    {
        let _guard = self.lock.lock().await;
        let mut items = self.read_items().await?;
        edit(&mut items)?;
        sort_by_position(&mut items);
        self.write_items(&items).await
    }
}

#[async_trait]
impl ListStore for JsonFileListStore {
    async fn load(&self) -> Result<Vec<TodoItem>, StoreError> {
        let _guard = self.lock.lock().await;
        let mut items = self.read_items().await?;
        sort_by_position(&mut items);
        Ok(items)
    }

    async fn insert(&self, item: TodoItem) -> Result<(), StoreError> {
        self.modify(|items| records::insert(items, item)).await
    }

    async fn update_position(&self, id: &ItemId, position: Position) -> Result<(), StoreError> {
        self.modify(|items| records::set_position(items, id, position))
            .await
    }

    async fn update_positions(&self, changes: &[PositionChange]) -> Result<(), StoreError> {
        if changes.is_empty() {
            return Ok(());
        }
        self.modify(|items| records::set_positions(items, changes))
            .await?;
        info!(changed = changes.len(), path = %self.path.display(), "Rebalance persisted");
        Ok(())
    }

    async fn set_completed(&self, id: &ItemId, completed: bool) -> Result<(), StoreError> {
        self.modify(|items| records::set_completed(items, id, completed))
            .await
    }

    async fn set_content(&self, id: &ItemId, content: &str) -> Result<(), StoreError> {
        self.modify(|items| records::set_content(items, id, content))
            .await
    }

    async fn remove(&self, ids: &[ItemId]) -> Result<(), StoreError> {
        self.modify(|items| {
            records::remove(items, ids);
            Ok(())
        })
        .await
    }
}
