//! Updates module: fetching the hub page and extracting its announcements
//!
//! This module contains the two steps behind the latest-updates route:
//! - HTTP fetching of the source page with an identifying user agent
//! - Section-bounded HTML extraction of update items

mod extractor;
mod fetcher;

pub use extractor::{extract_updates, normalize_text, UpdateItem};
pub use fetcher::{build_http_client, fetch_html};

use crate::config::ExtractionRules;
use crate::UpdatesError;
use reqwest::Client;

/// Fetches the source page and extracts its latest updates
///
/// # Arguments
///
/// * `client` - The HTTP client to use
/// * `source_url` - The page to scrape; copied into every item's `source_page`
/// * `rules` - Section and item matching rules
///
/// # Returns
///
/// * `Ok(Vec<UpdateItem>)` - Extracted items, possibly empty
/// * `Err(UpdatesError)` - The page could not be fetched
pub async fn latest_updates(
    client: &Client,
    source_url: &str,
    rules: &ExtractionRules,
) -> Result<Vec<UpdateItem>, UpdatesError> {
    let html = fetch_html(client, source_url).await?;
    let items = extract_updates(&html, rules, source_url);
    tracing::info!("Extracted {} update(s) from {}", items.len(), source_url);
    Ok(items)
}
