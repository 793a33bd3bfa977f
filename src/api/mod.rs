//! HTTP-agnostic API layer
//!
//! Turns normalized gateway requests into normalized responses. Nothing in
//! here knows about a particular HTTP server or serverless runtime.
//!
//! ## Design
//!
//! - **Explicit route table**: `(method, template)` pairs matched in a fixed order
//! - **Operations return `Result<ApiResponse, ApiError>`**: errors are mapped once, in
//!   [`Dispatcher::dispatch`]
//! - **Errors carry HTTP semantics**: `ApiError` knows its status code, and its
//!   detail never reaches the response body

mod error;
mod handlers;
pub mod routes;
mod types;

pub use error::{ApiError, ErrorCode};
pub use handlers::{DEFAULT_LOCATION_PREFIX, Dispatcher};
pub use routes::{Route, RouteMatch, match_route};
pub use types::{ALLOW_HEADERS, ALLOW_ORIGIN, ApiRequest, ApiResponse, CONTENT_TYPE, LOCATION};
