//! Moves made inside a filtered view
//!
//! When only active or only completed items are shown, a drop is planned
//! against the visible items but must be committed against the full list.
//! Hidden items keep their positions; only the dragged item's key changes,
//! unless the full list has to be rebalanced.

use super::moves::{index_of, plan_move, settle, without};
use crate::config::OrderingConfig;
use crate::domain::entities::{MoveOutcome, NoOpReason, Positioned};
use crate::domain::value_objects::{ItemId, Position};
use tracing::warn;

/// Plan a drop in the view selected by `visible` and commit it against
/// `full`.
///
/// `full` must be in ascending position order. Ids that are not visible are
/// treated as absent, so dropping onto a hidden item is a no-op.
pub fn position_for_filtered_move<T, F>(
    full: &[T],
    visible: F,
    dragged: &ItemId,
    target: &ItemId,
    config: &OrderingConfig,
) -> MoveOutcome
where
    T: Positioned,
    F: Fn(&T) -> bool,
{
    let view: Vec<&T> = full.iter().filter(|item| visible(item)).collect();

    let plan = match plan_move(&view, dragged, target, config) {
        Ok(plan) => plan,
        Err(reason) => return MoveOutcome::Unchanged(reason),
    };

    // Visible order after the drop
    let mut view_order: Vec<ItemId> = without(&view, plan.dragged_idx)
        .into_iter()
        .map(|item| item.id().clone())
        .collect();
    view_order.insert(plan.slot().min(view_order.len()), dragged.clone());

    let candidate = plan
        .candidate
        .unwrap_or_else(|| view[plan.target_idx].position());

    reconcile_filtered_move(full, &view_order, dragged, candidate, config)
}

/// Commit a position computed in a filtered view against the full list.
///
/// `view_order` is the visible order *after* the drop. The dragged item is
/// kept between its visible predecessor and successor; among the hidden
/// items in that span its slot follows `new_position`. A key that collides
/// with a hidden item is replaced by the midpoint of the real neighbors, and
/// if that also collapses the full list is rebalanced.
pub fn reconcile_filtered_move<T: Positioned>(
    full: &[T],
    view_order: &[ItemId],
    dragged: &ItemId,
    new_position: Position,
    config: &OrderingConfig,
) -> MoveOutcome {
    let Some(dragged_full_idx) = index_of(full, dragged) else {
        return MoveOutcome::Unchanged(NoOpReason::UnknownDragged);
    };
    let Some(view_idx) = view_order.iter().position(|id| id == dragged) else {
        return MoveOutcome::Unchanged(NoOpReason::UnknownDragged);
    };

    let others: Vec<&T> = without(full, dragged_full_idx);

    let predecessor = view_order[..view_idx]
        .iter()
        .rev()
        .find_map(|id| index_of(&others, id));
    let successor = view_order[view_idx + 1..]
        .iter()
        .find_map(|id| index_of(&others, id));

    let low = predecessor.map_or(0, |i| i + 1);
    let mut high = successor.unwrap_or(others.len());
    if high < low {
        warn!(
            dragged = %dragged,
            "View order disagrees with list order; placing after visible predecessor"
        );
        high = low;
    }

    let natural = others.partition_point(|o| o.position() < new_position);
    let slot = natural.clamp(low, high);

    settle(&others, dragged, slot, Some(new_position), config)
}
