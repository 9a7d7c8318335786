//! Error types for list ordering
//!
//! Engine no-ops (unknown ids, dropping an item onto itself) are not errors;
//! they come back as `MoveOutcome::Unchanged`.

use thiserror::Error;

use super::value_objects::ItemId;

/// Errors surfaced by the ordering service and domain constructors
#[derive(Debug, Error)]
pub enum OrderingError {
    /// Configuration values out of range
    #[error("Invalid ordering config: {0}")]
    InvalidConfig(String),

    /// NaN or infinite position value
    #[error("Position must be finite, got {0}")]
    NonFinitePosition(f64),

    /// Todo text was blank after trimming
    #[error("Todo content must not be empty")]
    EmptyContent,

    /// Item id not present in the list
    #[error("Item not found: {0}")]
    NotFound(ItemId),

    /// List read from a store violates an ordering invariant
    #[error("Malformed list: {0}")]
    MalformedList(String),

    /// Persistence failed; nothing was committed
    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

/// Errors from list store adapters
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Item not found in store: {0}")]
    NotFound(ItemId),

    #[error("Duplicate item id: {0}")]
    DuplicateId(ItemId),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Backend refused or could not take the write
    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

/// Errors from the snapshot feed
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FeedError {
    /// The other end of the channel was dropped
    #[error("Snapshot feed closed")]
    Closed,
}
