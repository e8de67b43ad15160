use std::collections::HashSet;

use ena_core::HeadlineCandidate;
use scraper::{ElementRef, Html, Selector};
use tracing::{info, warn};
use url::Url;

/// Tried in order; earlier selectors claim a link first.
pub const HEADLINE_SELECTORS: [&str; 9] = [
    "h2 a",
    "h3 a",
    ".feed-post-link",
    ".post-title a",
    "a[href*=\"/economia/\"]",
    "a[href*=\"/mundo/\"]",
    "a[href*=\"/politica/\"]",
    ".highlight-title a",
    ".chamada-principal a",
];

/// Titles this short are navigation labels, not headlines.
pub const MIN_TITLE_CHARS: usize = 20;

pub const DEFAULT_MAX_CANDIDATES: usize = 30;

/// Pull (title, link) pairs out of a page, one per distinct link.
pub fn extract_headlines(html: &str, base: &Url, max: usize) -> Vec<HeadlineCandidate> {
    let document = Html::parse_document(html);
    let mut seen = HashSet::new();
    let mut headlines = Vec::new();

    'selectors: for raw in HEADLINE_SELECTORS {
        let selector = match Selector::parse(raw) {
            Ok(selector) => selector,
            Err(e) => {
                warn!("Skipping invalid selector {}: {:?}", raw, e);
                continue;
            }
        };

        for element in document.select(&selector) {
            if headlines.len() >= max {
                break 'selectors;
            }

            let Some(title) = element_title(&element) else {
                continue;
            };
            if title.chars().count() <= MIN_TITLE_CHARS {
                continue;
            }
            let Some(link) = element
                .value()
                .attr("href")
                .and_then(|href| resolve_link(base, href))
            else {
                continue;
            };

            if seen.insert(link.clone()) {
                headlines.push(HeadlineCandidate::new(title, link));
            }
        }
    }

    info!("📰 {} headlines found", headlines.len());
    headlines
}

/// Visible text first, then the `title` attribute, then `alt`.
fn element_title(element: &ElementRef<'_>) -> Option<String> {
    let text = element.text().collect::<Vec<_>>().join(" ");
    let text = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if !text.is_empty() {
        return Some(text);
    }

    ["title", "alt"]
        .iter()
        .filter_map(|attr| element.value().attr(attr))
        .map(str::trim)
        .find(|value| !value.is_empty())
        .map(str::to_string)
}

/// Absolute http(s) links pass through; anything else is joined onto `base`.
pub fn resolve_link(base: &Url, href: &str) -> Option<String> {
    let href = href.trim();
    if href.is_empty() {
        return None;
    }

    let url = base.join(href).ok()?;
    matches!(url.scheme(), "http" | "https").then(|| url.to_string())
}
