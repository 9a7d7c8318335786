//! Application layer: use cases wired to the store.

pub mod service;

pub use service::TodoListService;
