//! # Todo Ordering Test Suite
//!
//! Cross-module flows that need more than one crate or more than one layer
//! of `todo-ordering` at a time.
//!
//! ## Structure
//!
//! ```text
//! tests/
//! ├── benches/          # Engine benchmarks (criterion)
//! └── src/integration/
//!     ├── flows.rs       # Service + in-memory store + snapshot feed
//!     └── persistence.rs # Service + JSON file store
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p todo-tests
//! cargo test -p todo-tests integration::flows
//!
//! # Benchmarks
//! cargo bench -p todo-tests
//! ```

pub mod integration;
