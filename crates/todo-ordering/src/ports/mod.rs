//! Ports module for list ordering
//!
//! Defines inbound (API) and outbound (SPI) port traits.

pub mod inbound;
pub mod outbound;

pub use inbound::{OrderingApi, TodoListApi};
pub use outbound::ListStore;
