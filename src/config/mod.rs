//! Configuration module for DCC Updates
//!
//! This module handles loading, parsing, and validating the optional TOML
//! configuration file. Running without a file yields [`Config::default`].
//!
//! # Example
//!
//! ```no_run
//! use dcc_updates::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("config.toml")).unwrap();
//! println!("Scraping: {}", config.source.url);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{
    Config, CtaScope, ExtractionRules, ServerConfig, SourceConfig, UserAgentConfig,
    DEFAULT_PORT, DEFAULT_SOURCE_URL,
};

// Re-export parser functions
pub use parser::{load_config, load_optional_config, parse_config};
pub use validation::validate;
