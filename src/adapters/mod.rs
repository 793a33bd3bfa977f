//! Adapter implementations for port traits
//!
//! Concrete `TaskStore` implementations:
//!
//! - `memory` - process-local store, the default
//! - `file/` - JSON document on disk

pub mod file;
pub mod memory;
mod table;

pub use file::FileTaskStore;
pub use memory::MemoryTaskStore;
