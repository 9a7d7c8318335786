//! Positions for newly created items

use super::rebalance::{rebalance, slot_position};
use crate::config::OrderingConfig;
use crate::domain::entities::{NewItemPosition, Positioned};
use crate::domain::value_objects::{Placement, Position};

/// Compute the key for a new item at either end of `items`.
///
/// `items` must be in ascending position order. An empty list yields
/// `config.base`; otherwise the key is one `gap` beyond the current
/// boundary. If that key cannot be represented distinctly from the boundary
/// (or lies within `epsilon` of it), the existing list is rebalanced and the
/// key is computed against the rebalanced layout.
pub fn position_for_new_item<T: Positioned>(
    items: &[T],
    placement: Placement,
    config: &OrderingConfig,
) -> NewItemPosition {
    let (Some(first), Some(last)) = (items.first(), items.last()) else {
        return NewItemPosition {
            position: Position::from_finite(config.base),
            rebalanced: Vec::new(),
        };
    };

    let candidate = match placement {
        Placement::Prepend => first
            .position()
            .offset(-config.gap)
            .filter(|p| clears(*p, first.position(), config.epsilon)),
        Placement::Append => last
            .position()
            .offset(config.gap)
            .filter(|p| clears(*p, last.position(), config.epsilon)),
    };

    if let Some(position) = candidate {
        return NewItemPosition {
            position,
            rebalanced: Vec::new(),
        };
    }

    let rebalanced = rebalance(items, config);
    let position = match placement {
        Placement::Prepend => Position::from_finite(-config.gap),
        Placement::Append => slot_position(items.len(), config),
    };

    NewItemPosition {
        position,
        rebalanced,
    }
}

/// `candidate` differs from `bound` by at least `epsilon` and is not equal
/// to it.
pub(crate) fn clears(candidate: Position, bound: Position, epsilon: f64) -> bool {
    candidate != bound && (candidate.value() - bound.value()).abs() >= epsilon
}
