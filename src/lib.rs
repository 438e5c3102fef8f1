//! DCC Updates: latest-updates feed for the CannaConnect compliance hub
//!
//! This crate fetches the CannaConnect compliance hub page, extracts the
//! announcements listed under its "Latest updates" section, and serves them
//! as JSON over a single HTTP route.

pub mod config;
pub mod server;
pub mod updates;

use thiserror::Error;

/// Main error type for DCC Updates operations
#[derive(Debug, Error)]
pub enum UpdatesError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The source page answered with a non-success status
    #[error("Fetch failed: {status} {reason}")]
    Fetch { status: u16, reason: String },

    /// The request could not be completed at all
    #[error("Network error for {url}: {source}")]
    Network { url: String, source: reqwest::Error },

    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// Result type alias for DCC Updates operations
pub type Result<T> = std::result::Result<T, UpdatesError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::Config;
pub use updates::{extract_updates, fetch_html, UpdateItem};
