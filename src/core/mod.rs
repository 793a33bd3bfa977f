//! Core domain logic for taskgate
//!
//! This module contains pure business logic with no I/O dependencies.
//! Persistence is abstracted through port traits.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (Task, `CreateTask`, `UpdateTask`)
//! - `services/` - Request validation
//! - `ports/` - Trait definitions for external dependencies

pub mod models;
pub mod ports;
pub mod services;
