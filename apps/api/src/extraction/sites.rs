//! Site profiles: which pages get site-specific selectors, and which selectors.
//!
//! Profiles are tried in list order. Adding a site means appending a profile;
//! the extraction loop itself does not change.

use std::fmt;

/// Decides from the raw HTML whether a profile applies.
pub type SitePredicate = fn(&str) -> bool;

#[derive(Clone)]
pub struct SiteProfile {
    pub name: &'static str,
    pub matches: SitePredicate,
    /// CSS selectors in priority order. The first element matching each
    /// selector contributes one text block.
    pub selectors: Vec<&'static str>,
}

impl SiteProfile {
    pub fn new(name: &'static str, matches: SitePredicate, selectors: Vec<&'static str>) -> Self {
        Self {
            name,
            matches,
            selectors,
        }
    }

    pub fn applies_to(&self, html: &str) -> bool {
        (self.matches)(html)
    }
}

impl fmt::Debug for SiteProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SiteProfile")
            .field("name", &self.name)
            .field("selectors", &self.selectors)
            .finish()
    }
}

fn is_linkedin_job(html: &str) -> bool {
    html.contains("linkedin.com/jobs")
}

pub fn linkedin() -> SiteProfile {
    SiteProfile::new(
        "linkedin",
        is_linkedin_job,
        vec![
            "div.jobs-description__content",
            "div.jobs-description-content__text",
            "div.jobs-box__html-content",
            // title and company
            "div.jobs-unified-top-card__primary-description",
            // location
            "div.jobs-unified-top-card__subtitle-primary-grouping",
        ],
    )
}

/// Built-in site profiles, highest priority first.
pub fn default_site_profiles() -> Vec<SiteProfile> {
    vec![linkedin()]
}

/// Content-container selectors used when no site profile yields text.
pub const GENERIC_SELECTORS: &[&str] = &[
    "main",
    "article",
    "div[role=\"main\"]",
    "div.content",
    "div.main-content",
    "div.job-description",
    "div.description",
];
