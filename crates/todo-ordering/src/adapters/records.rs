//! Record edits shared by the store adapters.
//!
//! Every function checks its preconditions before touching the list, so a
//! failed call leaves `items` unchanged.

use crate::domain::entities::{PositionChange, TodoItem};
use crate::domain::errors::StoreError;
use crate::domain::value_objects::{ItemId, Position};
use std::collections::HashSet;

fn find_mut<'a>(items: &'a mut [TodoItem], id: &ItemId) -> Result<&'a mut TodoItem, StoreError> {
    items
        .iter_mut()
        .find(|item| &item.id == id)
        .ok_or_else(|| StoreError::NotFound(id.clone()))
}

pub(crate) fn insert(items: &mut Vec<TodoItem>, item: TodoItem) -> Result<(), StoreError> {
    if items.iter().any(|existing| existing.id == item.id) {
        return Err(StoreError::DuplicateId(item.id));
    }
    items.push(item);
    Ok(())
}

pub(crate) fn set_position(
    items: &mut [TodoItem],
    id: &ItemId,
    position: Position,
) -> Result<(), StoreError> {
    find_mut(items, id)?.position = position;
    Ok(())
}

pub(crate) fn set_positions(
    items: &mut [TodoItem],
    changes: &[PositionChange],
) -> Result<(), StoreError> {
    let known: HashSet<&ItemId> = items.iter().map(|item| &item.id).collect();
    if let Some(missing) = changes.iter().find(|c| !known.contains(&c.id)) {
        return Err(StoreError::NotFound(missing.id.clone()));
    }

    for change in changes {
        find_mut(items, &change.id)?.position = change.position;
    }
    Ok(())
}

pub(crate) fn set_completed(
    items: &mut [TodoItem],
    id: &ItemId,
    completed: bool,
) -> Result<(), StoreError> {
    find_mut(items, id)?.completed = completed;
    Ok(())
}

pub(crate) fn set_content(items: &mut [TodoItem], id: &ItemId, content: &str) -> Result<(), StoreError> {
    find_mut(items, id)?.content = content.to_string();
    Ok(())
}

/// Returns how many items were removed.
pub(crate) fn remove(items: &mut Vec<TodoItem>, ids: &[ItemId]) -> usize {
    let doomed: HashSet<&ItemId> = ids.iter().collect();
    let before = items.len();
    items.retain(|item| !doomed.contains(&item.id));
    before - items.len()
}
