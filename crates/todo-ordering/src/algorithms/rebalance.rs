//! Rebalancing
//!
//! Renumbers a list `index * gap` (0-based) in display order. This is the
//! only computation that changes more than one item's position.

use crate::config::OrderingConfig;
use crate::domain::entities::{PositionChange, Positioned};
use crate::domain::value_objects::{ItemId, Position};

/// Evenly respace `items`, which must already be in display order.
///
/// Returns only the entries whose position actually changes.
pub fn rebalance<T: Positioned>(items: &[T], config: &OrderingConfig) -> Vec<PositionChange> {
    renumber(items.iter().map(|i| (i.id(), i.position())), config)
}

/// Core of `rebalance`, over `(id, current position)` pairs in the
/// intended display order.
pub(crate) fn renumber<'a, I>(order: I, config: &OrderingConfig) -> Vec<PositionChange>
where
    I: IntoIterator<Item = (&'a ItemId, Position)>,
{
    order
        .into_iter()
        .enumerate()
        .filter_map(|(index, (id, current))| {
            let target = slot_position(index, config);
            (current != target).then(|| PositionChange::new(id.clone(), target))
        })
        .collect()
}

/// Position of the `index`-th item after a rebalance.
pub(crate) fn slot_position(index: usize, config: &OrderingConfig) -> Position {
    Position::from_finite(index as f64 * config.gap)
}
