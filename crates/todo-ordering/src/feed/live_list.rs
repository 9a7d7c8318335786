//! Consumer-side working copy of the list

use super::snapshot::ListSnapshot;
use crate::domain::entities::TodoItem;
use crate::domain::value_objects::ListFilter;
use std::sync::Arc;
use tracing::debug;

/// The list as last delivered by the feed.
///
/// Drag computations run against this copy. It is only ever replaced
/// whole.
#[derive(Clone, Debug)]
pub struct LiveList {
    version: Option<u64>,
    items: Arc<[TodoItem]>,
}

impl Default for LiveList {
    fn default() -> Self {
        Self {
            version: None,
            items: Arc::from(Vec::new()),
        }
    }
}

impl LiveList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the working copy with `snapshot` if it is newer.
    ///
    /// Returns whether the copy changed.
    pub fn apply(&mut self, snapshot: &ListSnapshot) -> bool {
        if self.version.is_some_and(|current| snapshot.version <= current) {
            debug!(
                version = snapshot.version,
                current = ?self.version,
                "Ignoring stale snapshot"
            );
            return false;
        }
        self.version = Some(snapshot.version);
        self.items = Arc::clone(&snapshot.items);
        true
    }

    pub fn version(&self) -> Option<u64> {
        self.version
    }

    pub fn items(&self) -> &[TodoItem] {
        &self.items
    }

    pub fn view(&self, filter: ListFilter) -> Vec<&TodoItem> {
        self.items
            .iter()
            .filter(|item| filter.admits(item.completed))
            .collect()
    }

    pub fn items_left(&self) -> usize {
        self.items.iter().filter(|item| !item.completed).count()
    }
}
