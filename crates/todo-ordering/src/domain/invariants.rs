//! Domain invariants for list ordering
//!
//! Positions are finite by construction (`Position`), so only the
//! relational invariants need checking.

use super::entities::Positioned;
use super::errors::OrderingError;
use std::collections::HashSet;

/// INVARIANT-1: Unique Positions
/// No two items in one list share a position.
pub fn invariant_unique_positions<T: Positioned>(items: &[T]) -> bool {
    let mut positions: Vec<_> = items.iter().map(|i| i.position()).collect();
    positions.sort();
    positions.windows(2).all(|w| w[0] != w[1])
}

/// INVARIANT-2: Display Order
/// The slice is in strictly ascending position order.
pub fn invariant_ascending<T: Positioned>(items: &[T]) -> bool {
    items.windows(2).all(|w| w[0].position() < w[1].position())
}

/// INVARIANT-3: Unique Ids
pub fn invariant_unique_ids<T: Positioned>(items: &[T]) -> bool {
    let mut seen = HashSet::with_capacity(items.len());
    items.iter().all(|i| seen.insert(i.id()))
}

/// All invariants at once, naming the first one violated.
pub fn check_list<T: Positioned>(items: &[T]) -> Result<(), OrderingError> {
    if !invariant_unique_ids(items) {
        return Err(OrderingError::MalformedList("duplicate item ids".to_string()));
    }
    if !invariant_unique_positions(items) {
        return Err(OrderingError::MalformedList(
            "duplicate positions".to_string(),
        ));
    }
    if !invariant_ascending(items) {
        return Err(OrderingError::MalformedList(
            "items not in ascending position order".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::OrderKey;
    use crate::domain::value_objects::Position;

    fn key(id: &str, p: f64) -> OrderKey {
        OrderKey::new(id, Position::new(p).unwrap())
    }

    #[test]
    fn test_well_formed_list() {
        let list = vec![key("a", -5.0), key("b", 0.0), key("c", 0.5)];
        assert!(check_list(&list).is_ok());
    }

    #[test]
    fn test_empty_list_is_well_formed() {
        let list: Vec<OrderKey> = vec![];
        assert!(check_list(&list).is_ok());
    }

    #[test]
    fn test_duplicate_positions() {
        let list = vec![key("a", 1.0), key("b", 1.0)];
        assert!(!invariant_unique_positions(&list));
        assert!(!invariant_ascending(&list));
        assert!(matches!(
            check_list(&list),
            Err(OrderingError::MalformedList(_))
        ));
    }

    #[test]
    fn test_unsorted_but_unique() {
        let list = vec![key("a", 2.0), key("b", 1.0)];
        assert!(invariant_unique_positions(&list));
        assert!(!invariant_ascending(&list));
    }

    #[test]
    fn test_duplicate_ids() {
        let list = vec![key("a", 1.0), key("a", 2.0)];
        assert!(!invariant_unique_ids(&list));
    }
}
