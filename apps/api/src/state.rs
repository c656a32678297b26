use std::sync::Arc;

use crate::extraction::TextExtractor;
use crate::fetcher::PageFetcher;
use crate::llm_client::LlmClient;

/// Shared application state injected into all route handlers via Axum extractors.
/// Nothing in here is mutated after startup.
#[derive(Clone)]
pub struct AppState {
    pub llm: LlmClient,
    pub fetcher: PageFetcher,
    pub extractor: Arc<TextExtractor>,
}
