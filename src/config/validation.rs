use crate::config::types::{Config, ExtractionRules, ServerConfig, SourceConfig, UserAgentConfig};
use crate::ConfigError;
use url::Url;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_server_config(&config.server)?;
    validate_source_config(&config.source)?;
    validate_user_agent_config(&config.user_agent)?;
    validate_extraction_rules(&config.extraction)?;
    Ok(())
}

/// Validates server configuration
fn validate_server_config(config: &ServerConfig) -> Result<(), ConfigError> {
    if config.port == 0 {
        return Err(ConfigError::Validation(
            "port must be between 1 and 65535, got 0".to_string(),
        ));
    }

    Ok(())
}

/// Validates the source page URL
fn validate_source_config(config: &SourceConfig) -> Result<(), ConfigError> {
    let url = Url::parse(&config.url)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid source url '{}': {}", config.url, e)))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ConfigError::InvalidUrl(format!(
            "Source url '{}' must use HTTP or HTTPS scheme",
            config.url
        )));
    }

    Ok(())
}

/// Validates user agent configuration
fn validate_user_agent_config(config: &UserAgentConfig) -> Result<(), ConfigError> {
    // Name: non-empty, product-token characters only
    if config.name.is_empty() {
        return Err(ConfigError::Validation(
            "user-agent name cannot be empty".to_string(),
        ));
    }

    if !config
        .name
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_' || c == '.')
    {
        return Err(ConfigError::Validation(format!(
            "user-agent name must contain only alphanumerics, '-', '_' or '.', got '{}'",
            config.name
        )));
    }

    if config.version.is_empty() || config.version.chars().any(char::is_whitespace) {
        return Err(ConfigError::Validation(format!(
            "user-agent version must be non-empty without whitespace, got '{}'",
            config.version
        )));
    }

    Ok(())
}

/// Validates section/item matching rules
fn validate_extraction_rules(rules: &ExtractionRules) -> Result<(), ConfigError> {
    if rules.section_heading.trim().is_empty() {
        return Err(ConfigError::Validation(
            "section-heading cannot be empty".to_string(),
        ));
    }

    let section_depth = heading_depth(&rules.section_level).ok_or_else(|| {
        ConfigError::Validation(format!(
            "section-level must be one of h1..h6, got '{}'",
            rules.section_level
        ))
    })?;

    let item_depth = heading_depth(&rules.item_level).ok_or_else(|| {
        ConfigError::Validation(format!(
            "item-level must be one of h1..h6, got '{}'",
            rules.item_level
        ))
    })?;

    if item_depth <= section_depth {
        return Err(ConfigError::Validation(format!(
            "item-level ({}) must be deeper than section-level ({})",
            rules.item_level, rules.section_level
        )));
    }

    if rules.cta_keywords.is_empty() {
        return Err(ConfigError::Validation(
            "cta-keywords must contain at least one keyword".to_string(),
        ));
    }

    if rules.cta_keywords.iter().any(|k| k.trim().is_empty()) {
        return Err(ConfigError::Validation(
            "cta-keywords cannot contain empty keywords".to_string(),
        ));
    }

    Ok(())
}

/// Returns the numeric depth of a heading tag name (`h1` -> 1)
fn heading_depth(tag: &str) -> Option<u8> {
    match tag {
        "h1" => Some(1),
        "h2" => Some(2),
        "h3" => Some(3),
        "h4" => Some(4),
        "h5" => Some(5),
        "h6" => Some(6),
        _ => None,
    }
}
