//! HTML extractor for the "Latest updates" section
//!
//! The hub page has no stable ids or classes around its updates, so items are
//! located structurally:
//! - the section heading is found by its exact trimmed text
//! - the section body runs until the next heading of the same level
//! - each item heading inside the body carries a link, followed by a
//!   description element and optionally a call-to-action link
//!
//! Extraction never fails. A page that changed shape yields no items.

use crate::config::{CtaScope, ExtractionRules};
use scraper::{ElementRef, Html, Selector};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// One announcement from the updates section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateItem {
    /// Normalized text of the item heading's link
    pub title: String,

    /// The heading link's `href`, unresolved
    pub url: String,

    /// Normalized text of the element following the heading
    pub description: Option<String>,

    /// Text of the call-to-action link, if one was found
    pub cta_text: Option<String>,

    /// Target of the call-to-action link
    pub cta_url: Option<String>,

    /// Page the item was scraped from
    pub source_page: String,
}

/// Compiled selectors for one set of extraction rules
struct Matchers {
    section: Selector,
    item: Selector,
    link: Selector,
}

impl Matchers {
    fn compile(rules: &ExtractionRules) -> Option<Self> {
        Some(Self {
            section: Selector::parse(&rules.section_level).ok()?,
            item: Selector::parse(&rules.item_level).ok()?,
            link: Selector::parse("a[href]").ok()?,
        })
    }
}

/// Extracts update items from the section named by `rules`
///
/// # Arguments
///
/// * `html` - The page HTML
/// * `rules` - Section label, heading levels and CTA matching rules
/// * `source_page` - Copied into every item's `source_page`
///
/// # Returns
///
/// Items in document order, de-duplicated on `(title, url)` with the first
/// occurrence kept. Empty when the section or its items are missing.
///
/// # Example
///
/// ```
/// use dcc_updates::config::ExtractionRules;
/// use dcc_updates::updates::extract_updates;
///
/// let html = r#"<h2>Latest updates</h2><h3><a href="/a">Alpha</a></h3><p>Desc A</p><h2>Quick actions</h2>"#;
/// let items = extract_updates(html, &ExtractionRules::default(), "https://example.com/");
/// assert_eq!(items.len(), 1);
/// assert_eq!(items[0].title, "Alpha");
/// ```
pub fn extract_updates(html: &str, rules: &ExtractionRules, source_page: &str) -> Vec<UpdateItem> {
    let Some(matchers) = Matchers::compile(rules) else {
        tracing::warn!(
            "Unusable heading levels '{}'/'{}', skipping extraction",
            rules.section_level,
            rules.item_level
        );
        return Vec::new();
    };

    let document = Html::parse_document(html);

    let Some(section_heading) =
        find_section_heading(&document, &matchers.section, &rules.section_heading)
    else {
        tracing::debug!("Section '{}' not found", rules.section_heading);
        return Vec::new();
    };

    let body = collect_section_body(section_heading, &matchers.section);
    tracing::debug!(
        "Section '{}' spans {} element(s)",
        rules.section_heading,
        body.len()
    );

    let items = select_within(&body, &matchers.item)
        .into_iter()
        .filter_map(|heading| {
            parse_item(
                heading,
                section_heading,
                &body,
                &matchers,
                rules,
                source_page,
            )
        })
        .collect();

    dedupe(items)
}

/// Collapses every whitespace run to one space and trims the ends
pub fn normalize_text(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Concatenated text of an element and its descendants
fn element_text(element: ElementRef) -> String {
    element.text().collect()
}

/// First section-level heading whose trimmed text equals `label` exactly
fn find_section_heading<'a>(
    document: &'a Html,
    section: &Selector,
    label: &str,
) -> Option<ElementRef<'a>> {
    document
        .select(section)
        .find(|heading| element_text(*heading).trim() == label)
}

/// Element siblings after `heading` up to the next section-level heading
fn collect_section_body<'a>(heading: ElementRef<'a>, section: &Selector) -> Vec<ElementRef<'a>> {
    heading
        .next_siblings()
        .filter_map(ElementRef::wrap)
        .take_while(|element| !section.matches(element))
        .collect()
}

/// Roots and their descendants matching `selector`, in document order
fn select_within<'a>(roots: &[ElementRef<'a>], selector: &Selector) -> Vec<ElementRef<'a>> {
    roots
        .iter()
        .flat_map(|root| {
            std::iter::once(*root)
                .filter(|element| selector.matches(element))
                .chain(root.select(selector))
        })
        .collect()
}

/// Builds an item from a heading, or `None` if it carries no link
fn parse_item(
    heading: ElementRef,
    section_heading: ElementRef,
    body: &[ElementRef],
    matchers: &Matchers,
    rules: &ExtractionRules,
    source_page: &str,
) -> Option<UpdateItem> {
    let link = heading.select(&matchers.link).next()?;
    let url = link.value().attr("href")?.to_string();
    let title = normalize_text(&element_text(link));

    let description = next_element_in_section(heading, body)
        .map(|sibling| normalize_text(&element_text(sibling)))
        .filter(|text| !text.is_empty());

    let scope = match rules.cta_scope {
        CtaScope::Parent => parent_scope(heading, section_heading, body),
        CtaScope::Following => following_scope(heading, matchers),
    };

    let (cta_text, cta_url) = match find_cta(&scope, &matchers.link, &rules.cta_keywords) {
        Some((text, href)) => (Some(text), Some(href)),
        None => (None, None),
    };

    Some(UpdateItem {
        title,
        url,
        description,
        cta_text,
        cta_url,
        source_page: source_page.to_string(),
    })
}

/// Element following `heading` without leaving the section body
///
/// A heading that is itself a body element has no successor past the last
/// body element, even though the closing section heading follows it in the
/// document. Nested headings only see siblings inside their body element.
fn next_element_in_section<'a>(
    heading: ElementRef<'a>,
    body: &[ElementRef<'a>],
) -> Option<ElementRef<'a>> {
    match body.iter().position(|element| *element == heading) {
        Some(index) => body.get(index + 1).copied(),
        None => heading.next_siblings().find_map(ElementRef::wrap),
    }
}

/// Elements searched for a CTA under [`CtaScope::Parent`]
///
/// A heading sitting directly in the section shares its parent with the
/// section heading; its container is then the section body, not the whole
/// parent.
fn parent_scope<'a>(
    heading: ElementRef<'a>,
    section_heading: ElementRef<'a>,
    body: &[ElementRef<'a>],
) -> Vec<ElementRef<'a>> {
    let Some(parent) = heading.parent() else {
        return Vec::new();
    };

    if section_heading.parent().map(|p| p.id()) == Some(parent.id()) {
        return body.to_vec();
    }

    parent.children().filter_map(ElementRef::wrap).collect()
}

/// Elements searched for a CTA under [`CtaScope::Following`]
fn following_scope<'a>(heading: ElementRef<'a>, matchers: &Matchers) -> Vec<ElementRef<'a>> {
    heading
        .next_siblings()
        .filter_map(ElementRef::wrap)
        .take_while(|element| {
            !matchers.item.matches(element) && !matchers.section.matches(element)
        })
        .collect()
}

/// First link in `scope` whose lower-cased text contains any keyword
fn find_cta(scope: &[ElementRef], link: &Selector, keywords: &[String]) -> Option<(String, String)> {
    select_within(scope, link).into_iter().find_map(|candidate| {
        let text = normalize_text(&element_text(candidate));
        let lowered = text.to_lowercase();
        if !keywords.iter().any(|keyword| lowered.contains(keyword.as_str())) {
            return None;
        }
        let href = candidate.value().attr("href")?;
        Some((text, href.to_string()))
    })
}

/// Drops repeated `(title, url)` pairs, keeping the first
fn dedupe(items: Vec<UpdateItem>) -> Vec<UpdateItem> {
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert((item.title.clone(), item.url.clone())))
        .collect()
}
