//! Drag-and-drop moves
//!
//! A drop of `dragged` onto `target` lands the dragged item next to the
//! target, on the side the drag came from:
//!
//! ```text
//! target first            -> target - gap            (before target)
//! target last             -> target + gap            (after target)
//! moving forward (down)   -> mid(target, next)       (after target)
//! moving backward (up)    -> mid(target, previous)   (before target)
//! ```
//!
//! If the computed key does not fall strictly inside its bounding
//! neighbors, or lies closer than `epsilon` to one of them, the whole list is
//! rebalanced with the dragged item in its intended slot.

use super::placement::clears;
use super::rebalance::renumber;
use crate::config::OrderingConfig;
use crate::domain::entities::{MoveOutcome, NoOpReason, PositionChange, Positioned};
use crate::domain::value_objects::{DropSide, ItemId, Position};

/// Where a drop wants the dragged item to go, before checking the result
/// against the list.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct MovePlan {
    pub dragged_idx: usize,
    pub target_idx: usize,
    pub side: DropSide,
    /// `None` when the key overflowed
    pub candidate: Option<Position>,
}

impl MovePlan {
    /// Slot of the dragged item among the *other* items.
    pub fn slot(&self) -> usize {
        // Removing the dragged item shifts the target left if it came after
        let target = if self.dragged_idx < self.target_idx {
            self.target_idx - 1
        } else {
            self.target_idx
        };
        match self.side {
            DropSide::Before => target,
            DropSide::After => target + 1,
        }
    }
}

/// Compute the new position for `dragged` dropped onto `target`.
///
/// `items` must be in ascending position order. Unknown ids and a drop onto
/// itself yield `MoveOutcome::Unchanged`.
pub fn position_for_move<T: Positioned>(
    items: &[T],
    dragged: &ItemId,
    target: &ItemId,
    config: &OrderingConfig,
) -> MoveOutcome {
    let plan = match plan_move(items, dragged, target, config) {
        Ok(plan) => plan,
        Err(reason) => return MoveOutcome::Unchanged(reason),
    };

    let others: Vec<&T> = without(items, plan.dragged_idx);
    settle(&others, dragged, plan.slot(), plan.candidate, config)
}

/// Apply the drop rules without checking for range collapse.
pub(crate) fn plan_move<T: Positioned>(
    items: &[T],
    dragged: &ItemId,
    target: &ItemId,
    config: &OrderingConfig,
) -> Result<MovePlan, NoOpReason> {
    if dragged == target {
        return Err(NoOpReason::SameItem);
    }
    let dragged_idx = index_of(items, dragged).ok_or(NoOpReason::UnknownDragged)?;
    let target_idx = index_of(items, target).ok_or(NoOpReason::UnknownTarget)?;

    let anchor = items[target_idx].position();
    let last_idx = items.len() - 1;

    let (side, candidate) = if target_idx == 0 {
        (DropSide::Before, anchor.offset(-config.gap))
    } else if target_idx == last_idx {
        (DropSide::After, anchor.offset(config.gap))
    } else if dragged_idx < target_idx {
        let next = items.get(target_idx + 1).map(|n| n.position());
        (
            DropSide::After,
            next.map(|n| Position::midpoint(anchor, n))
                .or_else(|| anchor.offset(config.gap)),
        )
    } else {
        let previous = items.get(target_idx - 1).map(|p| p.position());
        (
            DropSide::Before,
            previous
                .map(|p| Position::midpoint(anchor, p))
                .or_else(|| anchor.offset(-config.gap)),
        )
    };

    Ok(MovePlan {
        dragged_idx,
        target_idx,
        side,
        candidate,
    })
}

/// Check `candidate` against the neighbors around `slot` in `others` (the
/// list without the dragged item).
///
/// Falls back once to the midpoint of the actual neighbors. That retry only
/// differs from `candidate` when the candidate was computed against a
/// filtered view with hidden items in between. If neither fits, the list is
/// rebalanced with the dragged item at `slot`.
pub(crate) fn settle<T: Positioned>(
    others: &[&T],
    dragged: &ItemId,
    slot: usize,
    candidate: Option<Position>,
    config: &OrderingConfig,
) -> MoveOutcome {
    let slot = slot.min(others.len());
    let lower = slot.checked_sub(1).map(|i| others[i].position());
    let upper = others.get(slot).map(|o| o.position());

    if let Some(position) = candidate.filter(|c| fits(lower, *c, upper, config.epsilon)) {
        return MoveOutcome::Moved(PositionChange::new(dragged.clone(), position));
    }

    let retry = match (lower, upper) {
        (Some(l), Some(u)) => Some(Position::midpoint(l, u)),
        (Some(l), None) => l.offset(config.gap),
        (None, Some(u)) => u.offset(-config.gap),
        (None, None) => Some(Position::from_finite(config.base)),
    };
    if let Some(position) = retry.filter(|r| fits(lower, *r, upper, config.epsilon)) {
        return MoveOutcome::Moved(PositionChange::new(dragged.clone(), position));
    }

    MoveOutcome::Rebalanced(rebalance_with(others, dragged, slot, candidate, config))
}

/// Renumber `others` with `dragged` inserted at `slot`.
fn rebalance_with<T: Positioned>(
    others: &[&T],
    dragged: &ItemId,
    slot: usize,
    dragged_position: Option<Position>,
    config: &OrderingConfig,
) -> Vec<PositionChange> {
    // The dragged item's old key is irrelevant; any value that differs from
    // its new slot forces it into the change set.
    let dragged_entry = (
        dragged,
        dragged_position.unwrap_or(Position::from_finite(f64::MAX)),
    );

    let order = others[..slot]
        .iter()
        .map(|o| (o.id(), o.position()))
        .chain(std::iter::once(dragged_entry))
        .chain(others[slot..].iter().map(|o| (o.id(), o.position())));

    let mut changes = renumber(order, config);
    if !changes.iter().any(|c| &c.id == dragged) {
        // The dragged key happened to equal its new slot value; it still
        // has to be written because it was never persisted there.
        changes.push(PositionChange::new(
            dragged.clone(),
            super::rebalance::slot_position(slot, config),
        ));
    }
    changes
}

/// `candidate` sits strictly between the bounds, at least `epsilon` from
/// each.
fn fits(lower: Option<Position>, candidate: Position, upper: Option<Position>, epsilon: f64) -> bool {
    let above_lower = lower.map_or(true, |l| candidate > l && clears(candidate, l, epsilon));
    let below_upper = upper.map_or(true, |u| candidate < u && clears(candidate, u, epsilon));
    above_lower && below_upper
}

pub(crate) fn index_of<T: Positioned>(items: &[T], id: &ItemId) -> Option<usize> {
    items.iter().position(|i| i.id() == id)
}

pub(crate) fn without<T: Positioned>(items: &[T], skip: usize) -> Vec<&T> {
    items
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != skip)
        .map(|(_, item)| item)
        .collect()
}
