//! Core entities for list ordering

use super::value_objects::{ItemId, Position};
use serde::{Deserialize, Serialize};

/// The engine's view of a list element.
///
/// Anything with a stable id and a position can be ordered; payload fields
/// are never read.
pub trait Positioned {
    fn id(&self) -> &ItemId;
    fn position(&self) -> Position;
}

impl<T: Positioned + ?Sized> Positioned for &T {
    fn id(&self) -> &ItemId {
        (**self).id()
    }

    fn position(&self) -> Position {
        (**self).position()
    }
}

/// Bare `(id, position)` pair.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderKey {
    pub id: ItemId,
    pub position: Position,
}

impl OrderKey {
    pub fn new(id: impl Into<ItemId>, position: Position) -> Self {
        Self {
            id: id.into(),
            position,
        }
    }
}

impl Positioned for OrderKey {
    fn id(&self) -> &ItemId {
        &self.id
    }

    fn position(&self) -> Position {
        self.position
    }
}

/// A task in the list
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TodoItem {
    /// Unique identifier
    pub id: ItemId,
    /// Task text
    pub content: String,
    /// Completion status
    pub completed: bool,
    /// Sort key; ascending order is display order
    pub position: Position,
}

impl TodoItem {
    /// New, not yet completed item with a generated id
    pub fn new(content: impl Into<String>, position: Position) -> Self {
        Self::with_id(ItemId::generate(), content, position)
    }

    pub fn with_id(id: impl Into<ItemId>, content: impl Into<String>, position: Position) -> Self {
        Self {
            id: id.into(),
            content: content.into(),
            completed: false,
            position,
        }
    }

    pub fn completed(mut self, completed: bool) -> Self {
        self.completed = completed;
        self
    }
}

impl Positioned for TodoItem {
    fn id(&self) -> &ItemId {
        &self.id
    }

    fn position(&self) -> Position {
        self.position
    }
}

/// New position for one item
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PositionChange {
    pub id: ItemId,
    pub position: Position,
}

impl PositionChange {
    pub fn new(id: ItemId, position: Position) -> Self {
        Self { id, position }
    }
}

/// Why a move request did nothing
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoOpReason {
    /// Dragged id equals target id
    SameItem,
    /// Dragged id not in the list (or not in the visible view)
    UnknownDragged,
    /// Target id not in the list (or not in the visible view)
    UnknownTarget,
}

/// Result of a move computation
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Nothing to write
    Unchanged(NoOpReason),
    /// Exactly one record changes
    Moved(PositionChange),
    /// Neighbor range collapsed; every listed record changes together
    Rebalanced(Vec<PositionChange>),
}

impl MoveOutcome {
    /// Records to persist
    pub fn changes(&self) -> &[PositionChange] {
        match self {
            MoveOutcome::Unchanged(_) => &[],
            MoveOutcome::Moved(change) => std::slice::from_ref(change),
            MoveOutcome::Rebalanced(changes) => changes,
        }
    }

    pub fn is_unchanged(&self) -> bool {
        matches!(self, MoveOutcome::Unchanged(_))
    }

    pub fn is_rebalanced(&self) -> bool {
        matches!(self, MoveOutcome::Rebalanced(_))
    }
}

/// Position for an item about to be created
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewItemPosition {
    /// Key for the new item
    pub position: Position,
    /// Changes to existing items that must be written first; empty unless
    /// the list had to be rebalanced to make room
    pub rebalanced: Vec<PositionChange>,
}

impl NewItemPosition {
    pub fn requires_rebalance(&self) -> bool {
        !self.rebalanced.is_empty()
    }
}

/// Copy of `items` with `changes` applied, sorted by position.
///
/// Changes for ids not present in `items` are ignored.
pub fn apply_changes<T>(items: &[T], changes: &[PositionChange]) -> Vec<T>
where
    T: Positioned + Clone + Repositionable,
{
    let mut out: Vec<T> = items.to_vec();
    for change in changes {
        if let Some(item) = out.iter_mut().find(|i| i.id() == &change.id) {
            item.set_position(change.position);
        }
    }
    sort_by_position(&mut out);
    out
}

/// Records whose position can be overwritten.
pub trait Repositionable {
    fn set_position(&mut self, position: Position);
}

impl Repositionable for TodoItem {
    fn set_position(&mut self, position: Position) {
        self.position = position;
    }
}

impl Repositionable for OrderKey {
    fn set_position(&mut self, position: Position) {
        self.position = position;
    }
}

/// Sort ascending by position; ties broken by id so the result is
/// deterministic even for malformed input.
pub fn sort_by_position<T: Positioned>(items: &mut [T]) {
    items.sort_by(|a, b| {
        a.position()
            .cmp(&b.position())
            .then_with(|| a.id().cmp(b.id()))
    });
}
