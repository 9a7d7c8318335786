//! Inbound Ports (Driving Ports / API)

use crate::domain::entities::{MoveOutcome, NewItemPosition, PositionChange, Positioned, TodoItem};
use crate::domain::errors::OrderingError;
use crate::domain::value_objects::{ItemId, ListFilter, Placement, Position};
use async_trait::async_trait;

/// Pure ordering computations.
///
/// Stateless: every call is a function of the list passed in. Lists must be
/// in ascending position order.
pub trait OrderingApi {
    /// Key for a new item at the start or end of the list.
    fn new_item_position<T: Positioned>(&self, items: &[T], placement: Placement)
        -> NewItemPosition;

    /// Key for `dragged` dropped onto `target`.
    fn move_position<T: Positioned>(
        &self,
        items: &[T],
        dragged: &ItemId,
        target: &ItemId,
    ) -> MoveOutcome;

    /// Drop planned in the view selected by `visible`, committed against
    /// the full list.
    fn filtered_move_position<T, F>(
        &self,
        items: &[T],
        visible: F,
        dragged: &ItemId,
        target: &ItemId,
    ) -> MoveOutcome
    where
        T: Positioned,
        F: Fn(&T) -> bool;

    /// Commit a key computed in a filtered view (`view_order` is the visible
    /// order after the drop) against the full list.
    fn reconcile_filtered_move<T: Positioned>(
        &self,
        items: &[T],
        view_order: &[ItemId],
        dragged: &ItemId,
        new_position: Position,
    ) -> MoveOutcome;

    /// Evenly respaced keys for the list as displayed.
    fn rebalance<T: Positioned>(&self, items: &[T]) -> Vec<PositionChange>;
}

/// Store-backed to-do list operations.
///
/// Every call reads a fresh list from the store; nothing is cached between
/// calls. Callers issue one mutation at a time per list.
#[async_trait]
pub trait TodoListApi: Send + Sync {
    /// Create a todo. Content is trimmed and must not be empty.
    async fn create_todo(
        &self,
        content: &str,
        placement: Placement,
    ) -> Result<TodoItem, OrderingError>;

    /// Drop `dragged` onto `target` in the unfiltered list.
    async fn move_todo(&self, dragged: &ItemId, target: &ItemId)
        -> Result<MoveOutcome, OrderingError>;

    /// Drop `dragged` onto `target` while `filter` is shown.
    async fn move_todo_in_view(
        &self,
        filter: ListFilter,
        dragged: &ItemId,
        target: &ItemId,
    ) -> Result<MoveOutcome, OrderingError>;

    /// Flip completion; returns the new state.
    async fn toggle_completed(&self, id: &ItemId) -> Result<bool, OrderingError>;

    async fn rename_todo(&self, id: &ItemId, content: &str) -> Result<(), OrderingError>;

    async fn delete_todo(&self, id: &ItemId) -> Result<(), OrderingError>;

    /// Remove every completed todo; returns how many were removed.
    async fn clear_completed(&self) -> Result<usize, OrderingError>;

    /// Items visible under `filter`, in display order.
    async fn list(&self, filter: ListFilter) -> Result<Vec<TodoItem>, OrderingError>;

    /// Number of todos not yet completed.
    async fn items_left(&self) -> Result<usize, OrderingError>;
}
