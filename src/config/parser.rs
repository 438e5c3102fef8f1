use crate::config::types::Config;
use crate::config::validation::validate;
use crate::updates::normalize_text;
use crate::ConfigError;
use std::path::Path;

/// Loads and parses a configuration file from the given path
///
/// # Arguments
///
/// * `path` - Path to the TOML configuration file
///
/// # Returns
///
/// * `Ok(Config)` - Successfully loaded and validated configuration
/// * `Err(ConfigError)` - Failed to load, parse, or validate the configuration
///
/// # Example
///
/// ```no_run
/// use std::path::Path;
/// use dcc_updates::config::load_config;
///
/// let config = load_config(Path::new("config.toml")).unwrap();
/// println!("Port: {}", config.server.port);
/// ```
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    parse_config(&content)
}

/// Loads the configuration file if one was given, otherwise the defaults
pub fn load_optional_config(path: Option<&Path>) -> Result<Config, ConfigError> {
    match path {
        Some(path) => load_config(path),
        None => {
            let config = Config::default();
            validate(&config)?;
            Ok(config)
        }
    }
}

/// Parses configuration from TOML text, normalizes it, and validates it
///
/// CTA keywords are lower-cased and whitespace-collapsed here since link
/// text is compared in that form.
pub fn parse_config(content: &str) -> Result<Config, ConfigError> {
    let mut config: Config = toml::from_str(content)?;

    config.extraction.section_level = config.extraction.section_level.trim().to_lowercase();
    config.extraction.item_level = config.extraction.item_level.trim().to_lowercase();
    for keyword in &mut config.extraction.cta_keywords {
        *keyword = normalize_text(&keyword.to_lowercase());
    }

    validate(&config)?;

    Ok(config)
}
