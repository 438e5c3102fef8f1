use serde::Deserialize;

/// Page the service reads its updates from
pub const DEFAULT_SOURCE_URL: &str =
    "https://www.cannabis.ca.gov/licensees/cannaconnect-compliance-hub/";

/// Port used when neither the CLI, `PORT`, nor the config file sets one
pub const DEFAULT_PORT: u16 = 3000;

/// Main configuration structure for DCC Updates
///
/// Every table is optional; missing values fall back to the defaults that
/// reproduce the hub page's current layout.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub source: SourceConfig,
    #[serde(rename = "user-agent")]
    pub user_agent: UserAgentConfig,
    pub extraction: ExtractionRules,
}

/// HTTP listener configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Port to listen on
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { port: DEFAULT_PORT }
    }
}

/// Where the updates are scraped from
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    /// Absolute URL of the page holding the updates section
    pub url: String,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_SOURCE_URL.to_string(),
        }
    }
}

/// User agent identification configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UserAgentConfig {
    /// Product token sent before the slash
    pub name: String,

    /// Version sent after the slash
    pub version: String,
}

impl UserAgentConfig {
    /// Formats the header value as `name/version`
    pub fn header_value(&self) -> String {
        format!("{}/{}", self.name, self.version)
    }
}

impl Default for UserAgentConfig {
    fn default() -> Self {
        Self {
            name: "dcc-cannaconnect-action".to_string(),
            version: "1.0".to_string(),
        }
    }
}

/// Which links are searched for an item's call-to-action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CtaScope {
    /// Anywhere inside the item heading's parent container
    #[default]
    Parent,
    /// Only between the item heading and the next item heading
    Following,
}

/// Matching rules for locating the updates section and its items
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ExtractionRules {
    /// Exact trimmed text of the heading that opens the section
    #[serde(rename = "section-heading")]
    pub section_heading: String,

    /// Tag name of section headings (`h1`..`h6`)
    #[serde(rename = "section-level")]
    pub section_level: String,

    /// Tag name of item headings (`h1`..`h6`)
    #[serde(rename = "item-level")]
    pub item_level: String,

    /// Lower-case substrings that mark a link as a call-to-action
    #[serde(rename = "cta-keywords")]
    pub cta_keywords: Vec<String>,

    #[serde(rename = "cta-scope")]
    pub cta_scope: CtaScope,
}

impl Default for ExtractionRules {
    fn default() -> Self {
        Self {
            section_heading: "Latest updates".to_string(),
            section_level: "h2".to_string(),
            item_level: "h3".to_string(),
            cta_keywords: vec!["view".to_string(), "learn more".to_string()],
            cta_scope: CtaScope::Parent,
        }
    }
}
