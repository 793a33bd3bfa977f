//! File-based task storage
//!
//! Implements `TaskStore` using a JSON file.

mod store;

pub use store::FileTaskStore;
