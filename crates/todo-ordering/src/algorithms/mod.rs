//! Algorithms module for list ordering
//!
//! Contains:
//! - New-item placement at either end
//! - Drag-and-drop moves with range-collapse detection
//! - Filtered-view reconciliation
//! - Rebalancing

pub mod filtered;
pub mod moves;
pub mod placement;
pub mod rebalance;

pub use filtered::{position_for_filtered_move, reconcile_filtered_move};
pub use moves::position_for_move;
pub use placement::position_for_new_item;
pub use rebalance::rebalance;
