//! Business logic services
//!
//! Pure logic that operates on domain models, no I/O.
//!
//! - [`validator`] - Validate request bodies before they reach the store

pub mod validator;

pub use validator::{ValidationError, Validator};
