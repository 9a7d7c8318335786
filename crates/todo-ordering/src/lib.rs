//! # Todo Ordering
//!
//! Fractional ordering for a drag-and-drop todo list. Every item carries a
//! floating-point position; a move rewrites one key, never the whole list,
//! until the gap between neighbors collapses and the list is rebalanced.
//!
//! ## Architecture
//!
//! - **Domain**: Core entities (TodoItem, PositionChange, MoveOutcome) and invariants
//! - **Algorithms**: New-item placement, directional moves, filtered-view reconciliation, rebalance
//! - **Ports**: Inbound (OrderingApi, TodoListApi) and Outbound (ListStore)
//! - **Application**: Service orchestration against a store
//! - **Adapters**: In-memory and JSON file stores
//! - **Feed**: Whole-list snapshots pushed to a single consumer
//!
//! ## Positions
//!
//! | Operation | Key |
//! |-----------|-----|
//! | First item | `base` (1024) |
//! | Prepend | first − `gap` |
//! | Append | last + `gap` |
//! | Drop onto first / last | target ∓ `gap` |
//! | Drop forward / backward | midpoint with the next / previous neighbor |
//! | Rebalance | `index × gap` |

pub mod adapters;
pub mod algorithms;
pub mod application;
pub mod config;
pub mod domain;
pub mod feed;
pub mod ports;

pub use adapters::{InMemoryListStore, JsonFileListStore};
pub use algorithms::{
    position_for_filtered_move, position_for_move, position_for_new_item, rebalance,
    reconcile_filtered_move,
};
pub use application::service::TodoListService;
pub use config::OrderingConfig;
pub use domain::entities::*;
pub use domain::errors::{FeedError, OrderingError, StoreError};
pub use domain::invariants::check_list;
pub use domain::value_objects::*;
pub use feed::{snapshot_channel, ListSnapshot, LiveList, SnapshotPublisher, SnapshotSubscription};
pub use ports::inbound::{OrderingApi, TodoListApi};
pub use ports::outbound::ListStore;
