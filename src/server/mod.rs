//! HTTP server adapters
//!
//! Translate between an HTTP server and the HTTP-agnostic API layer.
//!
//! Currently supported:
//! - `tiny_http` - Lightweight local server standing in for the gateway

#[cfg(feature = "server")]
pub mod tiny_http;
