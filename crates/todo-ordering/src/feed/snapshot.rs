//! Immutable list snapshots

use crate::domain::entities::{sort_by_position, TodoItem};
use crate::domain::value_objects::ListFilter;
use std::sync::Arc;

/// The whole list at one store version, in ascending position order.
#[derive(Clone, Debug, PartialEq)]
pub struct ListSnapshot {
    pub version: u64,
    pub items: Arc<[TodoItem]>,
}

impl ListSnapshot {
    /// Build a snapshot; `items` are sorted on the way in.
    pub fn new(version: u64, mut items: Vec<TodoItem>) -> Self {
        sort_by_position(&mut items);
        Self {
            version,
            items: items.into(),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Items admitted by `filter`, in display order.
    pub fn view(&self, filter: ListFilter) -> impl Iterator<Item = &TodoItem> {
        self.items
            .iter()
            .filter(move |item| filter.admits(item.completed))
    }
}
