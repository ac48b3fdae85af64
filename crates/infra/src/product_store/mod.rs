//! Product list persistence boundary.
//!
//! The catalog treats storage as a black box that loads and saves the whole
//! product list. Implementations here cover tests (in-memory) and the local
//! data directory (a JSON file).

pub mod in_memory;
pub mod json_file;
pub mod r#trait;

pub use in_memory::InMemoryProductStore;
pub use json_file::JsonFileProductStore;
pub use r#trait::{ProductStore, StoreError};
