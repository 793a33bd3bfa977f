//! Command implementations

mod config;
mod invoke;
#[cfg(feature = "server")]
mod serve;

pub use config::show_config;
pub use invoke::invoke;
#[cfg(feature = "server")]
pub use serve::serve;
