//! Port traits (interfaces) for external dependencies
//!
//! The dispatcher depends only on these traits, never on a concrete store.
//! Implementations live in the `adapters` module; tests supply their own.

mod task_store;

pub use task_store::TaskStore;
