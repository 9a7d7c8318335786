//! Adapters (Driven Side)
//!
//! Concrete `ListStore` implementations.

pub mod json_store;
pub mod memory_store;
mod records;

pub use json_store::JsonFileListStore;
pub use memory_store::InMemoryListStore;
