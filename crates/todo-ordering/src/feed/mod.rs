//! # Snapshot Feed
//!
//! Push channel from the list store to one consumer. Each message is the
//! whole list at one version; consumers replace their copy, never patch it.

pub mod channel;
pub mod live_list;
pub mod snapshot;

pub use channel::{
    snapshot_channel, SnapshotPublisher, SnapshotSubscription, DEFAULT_SNAPSHOT_CAPACITY,
};
pub use live_list::LiveList;
pub use snapshot::ListSnapshot;
