//! Todo List Service
//!
//! Main service implementing `OrderingApi` and `TodoListApi`.
//!
//! The service keeps no list state of its own. Every operation loads the
//! current list from the store, computes against it, and writes back the
//! result. A failed write returns an error and leaves nothing committed, so
//! the caller can revert its visual order or retry against a fresh list.

use crate::algorithms::{
    position_for_filtered_move, position_for_move, position_for_new_item, rebalance,
    reconcile_filtered_move,
};
use crate::config::OrderingConfig;
use crate::domain::entities::{
    apply_changes, sort_by_position, MoveOutcome, NewItemPosition, PositionChange, Positioned,
    TodoItem,
};
use crate::domain::errors::{OrderingError, StoreError};
use crate::domain::invariants::{invariant_unique_ids, invariant_unique_positions};
use crate::domain::value_objects::{ItemId, ListFilter, Placement, Position};
use crate::ports::inbound::{OrderingApi, TodoListApi};
use crate::ports::outbound::ListStore;
use async_trait::async_trait;

use tracing::{debug, info, warn};

/// Todo List Service
///
/// Orchestrates each mutation:
/// 1. Load and sort the list
/// 2. Repair duplicate positions if a previous writer left any
/// 3. Compute new position(s) with the ordering engine
/// 4. Persist one record, a bulk rebalance, or nothing
pub struct TodoListService<S: ListStore> {
    store: S,
    config: OrderingConfig,
}

impl<S: ListStore> TodoListService<S> {
    /// Create a new service with default config
    pub fn new(store: S) -> Self {
        Self {
            store,
            config: OrderingConfig::default(),
        }
    }

    /// Create a new service with custom config
    pub fn with_config(store: S, config: OrderingConfig) -> Result<Self, OrderingError> {
        config.validate()?;
        Ok(Self { store, config })
    }

    pub fn config(&self) -> &OrderingConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Load the list in display order.
    ///
    /// Duplicate ids are rejected. Duplicate positions are repaired by a
    /// persisted rebalance (ties ordered by id).
    async fn load_list(&self) -> Result<Vec<TodoItem>, OrderingError> {
        let mut items = self.store.load().await?;
        sort_by_position(&mut items);

        if !invariant_unique_ids(&items) {
            return Err(OrderingError::MalformedList(
                "store returned duplicate item ids".to_string(),
            ));
        }

        if !invariant_unique_positions(&items) {
            let changes = rebalance(&items, &self.config);
            warn!(
                item_count = items.len(),
                changed = changes.len(),
                "Duplicate positions in stored list, rebalancing"
            );
            self.store.update_positions(&changes).await?;
            items = apply_changes(&items, &changes);
        }

        Ok(items)
    }

    /// Write the records a move outcome names.
    async fn persist(&self, outcome: &MoveOutcome) -> Result<(), OrderingError> {
        match outcome {
            MoveOutcome::Unchanged(reason) => {
                debug!(?reason, "Move is a no-op, nothing written");
            }
            MoveOutcome::Moved(change) => {
                self.store
                    .update_position(&change.id, change.position)
                    .await?;
                info!(
                    id = %change.id,
                    position = %change.position,
                    "Item moved"
                );
            }
            MoveOutcome::Rebalanced(changes) => {
                warn!(
                    changed = changes.len(),
                    gap = self.config.gap,
                    "Neighbor range collapsed, rebalancing list"
                );
                self.store.update_positions(changes).await?;
            }
        }
        Ok(())
    }

    fn find<'a>(items: &'a [TodoItem], id: &ItemId) -> Result<&'a TodoItem, OrderingError> {
        items
            .iter()
            .find(|item| &item.id == id)
            .ok_or_else(|| OrderingError::NotFound(id.clone()))
    }
}

fn clean_content(content: &str) -> Result<&str, OrderingError> {
    let trimmed = content.trim();
    if trimmed.is_empty() {
        return Err(OrderingError::EmptyContent);
    }
    Ok(trimmed)
}

/// Map a store-side "not found" to the domain error.
fn not_found_as_domain(err: StoreError) -> OrderingError {
    match err {
        StoreError::NotFound(id) => OrderingError::NotFound(id),
        other => OrderingError::Store(other),
    }
}

impl<S: ListStore> OrderingApi for TodoListService<S> {
    fn new_item_position<T: Positioned>(
        &self,
        items: &[T],
        placement: Placement,
    ) -> NewItemPosition {
        position_for_new_item(items, placement, &self.config)
    }

    fn move_position<T: Positioned>(
        &self,
        items: &[T],
        dragged: &ItemId,
        target: &ItemId,
    ) -> MoveOutcome {
        position_for_move(items, dragged, target, &self.config)
    }

    fn filtered_move_position<T, F>(
        &self,
        items: &[T],
        visible: F,
        dragged: &ItemId,
        target: &ItemId,
    ) -> MoveOutcome
    where
        T: Positioned,
        F: Fn(&T) -> bool,
    {
        position_for_filtered_move(items, visible, dragged, target, &self.config)
    }

    fn reconcile_filtered_move<T: Positioned>(
        &self,
        items: &[T],
        view_order: &[ItemId],
        dragged: &ItemId,
        new_position: Position,
    ) -> MoveOutcome {
        reconcile_filtered_move(items, view_order, dragged, new_position, &self.config)
    }

    fn rebalance<T: Positioned>(&self, items: &[T]) -> Vec<PositionChange> {
        rebalance(items, &self.config)
    }
}

#[async_trait]
impl<S: ListStore> TodoListApi for TodoListService<S> {
    async fn create_todo(
        &self,
        content: &str,
        placement: Placement,
    ) -> Result<TodoItem, OrderingError> {
        let content = clean_content(content)?;
        let items = self.load_list().await?;

        let placed = self.new_item_position(&items, placement);
        if placed.requires_rebalance() {
            warn!(
                changed = placed.rebalanced.len(),
                "No room at list boundary, rebalancing before insert"
            );
            self.store.update_positions(&placed.rebalanced).await?;
        }

        let item = TodoItem::new(content, placed.position);
        self.store.insert(item.clone()).await?;

        info!(
            id = %item.id,
            position = %item.position,
            ?placement,
            "Todo created"
        );
        Ok(item)
    }

    async fn move_todo(
        &self,
        dragged: &ItemId,
        target: &ItemId,
    ) -> Result<MoveOutcome, OrderingError> {
        let items = self.load_list().await?;
        let outcome = self.move_position(&items, dragged, target);
        self.persist(&outcome).await?;
        Ok(outcome)
    }

    async fn move_todo_in_view(
        &self,
        filter: ListFilter,
        dragged: &ItemId,
        target: &ItemId,
    ) -> Result<MoveOutcome, OrderingError> {
        let items = self.load_list().await?;
        let outcome = self.filtered_move_position(
            &items,
            |item: &TodoItem| filter.admits(item.completed),
            dragged,
            target,
        );
        debug!(?filter, dragged = %dragged, target = %target, "Filtered move computed");
        self.persist(&outcome).await?;
        Ok(outcome)
    }

    async fn toggle_completed(&self, id: &ItemId) -> Result<bool, OrderingError> {
        let items = self.load_list().await?;
        let completed = !Self::find(&items, id)?.completed;

        self.store
            .set_completed(id, completed)
            .await
            .map_err(not_found_as_domain)?;

        info!(id = %id, completed, "Todo toggled");
        Ok(completed)
    }

    async fn rename_todo(&self, id: &ItemId, content: &str) -> Result<(), OrderingError> {
        let content = clean_content(content)?;
        self.store
            .set_content(id, content)
            .await
            .map_err(not_found_as_domain)?;

        info!(id = %id, "Todo renamed");
        Ok(())
    }

    async fn delete_todo(&self, id: &ItemId) -> Result<(), OrderingError> {
        let items = self.load_list().await?;
        Self::find(&items, id)?;

        self.store.remove(std::slice::from_ref(id)).await?;

        info!(id = %id, "Todo deleted");
        Ok(())
    }

    async fn clear_completed(&self) -> Result<usize, OrderingError> {
        let items = self.load_list().await?;
        let done: Vec<ItemId> = items
            .iter()
            .filter(|item| item.completed)
            .map(|item| item.id.clone())
            .collect();

        if done.is_empty() {
            return Ok(0);
        }

        self.store.remove(&done).await?;

        info!(removed = done.len(), "Cleared completed todos");
        Ok(done.len())
    }

    async fn list(&self, filter: ListFilter) -> Result<Vec<TodoItem>, OrderingError> {
        let items = self.load_list().await?;
        Ok(items
            .into_iter()
            .filter(|item| filter.admits(item.completed))
            .collect())
    }

    async fn items_left(&self) -> Result<usize, OrderingError> {
        let items = self.load_list().await?;
        Ok(items.iter().filter(|item| !item.completed).count())
    }
}
