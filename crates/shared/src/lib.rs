//! Shared library for the MyAnimeList list tools.
//!
//! This crate provides the pieces every binary needs:
//! - Configuration management
//! - Logging infrastructure
//! - List entry models and the status vocabulary

pub mod config;
pub mod logging;
pub mod models;
pub mod status;

// Re-export commonly used types
pub use config::Config;
pub use logging::LogConfig;
pub use models::*;
pub use status::{SeriesStatus, UserStatus};

/// Common result type using anyhow::Error
pub type Result<T> = anyhow::Result<T>;
