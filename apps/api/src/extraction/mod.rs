//! Text extractor: turns a job page's HTML into plain text for the prompt.
//!
//! Order of attempts: matching site profiles, then generic content
//! containers, then the whole body. Script and style elements are removed
//! before any text is read.

pub mod sites;
pub mod text;

use scraper::{Html, Selector};
use tracing::{debug, warn};

pub use sites::{default_site_profiles, SiteProfile};

use crate::extraction::sites::GENERIC_SELECTORS;
use crate::extraction::text::{normalize_whitespace, truncate_chars};

/// Character budget for extracted text.
pub const DEFAULT_MAX_CHARS: usize = 8000;

#[derive(Debug, Clone)]
pub struct TextExtractor {
    sites: Vec<SiteProfile>,
    generic_selectors: Vec<&'static str>,
    max_chars: usize,
}

impl Default for TextExtractor {
    fn default() -> Self {
        Self::new(default_site_profiles(), DEFAULT_MAX_CHARS)
    }
}

impl TextExtractor {
    /// `sites` are consulted in order, before the generic containers.
    pub fn new(sites: Vec<SiteProfile>, max_chars: usize) -> Self {
        Self {
            sites,
            generic_selectors: GENERIC_SELECTORS.to_vec(),
            max_chars,
        }
    }

    pub fn max_chars(&self) -> usize {
        self.max_chars
    }

    /// Extracts normalized plain text, never longer than `max_chars`.
    /// Empty or content-free HTML yields an empty string.
    pub fn extract(&self, html: &str) -> String {
        let mut document = Html::parse_document(html);
        strip_noise(&mut document);

        let mut content = String::new();

        for profile in self.sites.iter().filter(|p| p.applies_to(html)) {
            content = collect_blocks(&document, &profile.selectors);
            if !content.is_empty() {
                debug!("Extracted {} chars with site profile '{}'", content.len(), profile.name);
                break;
            }
        }

        if content.is_empty() {
            content = collect_blocks(&document, &self.generic_selectors);
        }

        if content.is_empty() {
            content = body_text(&document);
        }

        truncate_chars(&normalize_whitespace(&content), self.max_chars)
    }
}

fn strip_noise(document: &mut Html) {
    let Ok(selector) = Selector::parse("script, style") else {
        return;
    };
    let ids: Vec<_> = document.select(&selector).map(|el| el.id()).collect();
    for id in ids {
        if let Some(mut node) = document.tree.get_mut(id) {
            node.detach();
        }
    }
}

/// Text of the first element matching each selector, as blank-line separated
/// blocks. Blank matches are skipped.
fn collect_blocks(document: &Html, selectors: &[&str]) -> String {
    let mut content = String::new();
    for selector_str in selectors {
        let selector = match Selector::parse(selector_str) {
            Ok(selector) => selector,
            Err(e) => {
                warn!("Skipping invalid selector '{selector_str}': {e:?}");
                continue;
            }
        };
        if let Some(element) = document.select(&selector).next() {
            let text = element.text().collect::<String>();
            let text = text.trim();
            if !text.is_empty() {
                content.push_str(text);
                content.push_str("\n\n");
            }
        }
    }
    content
}

fn body_text(document: &Html) -> String {
    if let Ok(selector) = Selector::parse("body") {
        if let Some(body) = document.select(&selector).next() {
            return body.text().collect();
        }
    }
    document.root_element().text().collect()
}
