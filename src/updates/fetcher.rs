//! HTTP fetcher implementation
//!
//! One GET per call, no retries. Redirects and timeouts are left to the
//! transport defaults.

use crate::config::UserAgentConfig;
use crate::UpdatesError;
use reqwest::Client;

/// Builds an HTTP client with proper configuration
///
/// # Arguments
///
/// * `config` - The user agent configuration
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
///
/// # Example
///
/// ```no_run
/// use dcc_updates::config::UserAgentConfig;
/// use dcc_updates::updates::build_http_client;
///
/// let client = build_http_client(&UserAgentConfig::default()).unwrap();
/// ```
pub fn build_http_client(config: &UserAgentConfig) -> Result<Client, reqwest::Error> {
    // Format: name/version
    Client::builder()
        .user_agent(config.header_value())
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches a page and returns its body as text
///
/// | Condition | Result |
/// |-----------|--------|
/// | 2xx | `Ok(body)` |
/// | Any other status | `UpdatesError::Fetch` with status and reason |
/// | Connect/DNS/body read failure | `UpdatesError::Network` |
pub async fn fetch_html(client: &Client, url: &str) -> Result<String, UpdatesError> {
    tracing::debug!("Fetching {}", url);

    let response = client.get(url).send().await.map_err(|source| {
        tracing::warn!("Request to {} failed: {}", url, source);
        UpdatesError::Network {
            url: url.to_string(),
            source,
        }
    })?;

    let status = response.status();
    if !status.is_success() {
        tracing::warn!("{} answered with status {}", url, status);
        return Err(UpdatesError::Fetch {
            status: status.as_u16(),
            reason: status.canonical_reason().unwrap_or_default().to_string(),
        });
    }

    let body = response.text().await.map_err(|source| UpdatesError::Network {
        url: url.to_string(),
        source,
    })?;

    tracing::debug!("Fetched {} bytes from {}", body.len(), url);
    Ok(body)
}
