//! Job posting pipeline: source text → prompt → LLM → `JobPosting`.
//!
//! Steps run strictly in sequence; each request is independent.

use std::sync::Arc;

use tracing::{debug, info};

use crate::errors::AppError;
use crate::extraction::TextExtractor;
use crate::fetcher::PageFetcher;
use crate::job_parser::models::{JobPosting, JobSource};
use crate::job_parser::prompts::{build_job_posting_prompt, JOB_POSTING_FIELDS};
use crate::llm_client::LlmClient;

/// Resolves the text that goes into the prompt. URLs are fetched and run
/// through the extractor; inline content is used untouched.
pub async fn resolve_job_text(
    source: &JobSource,
    fetcher: &PageFetcher,
    extractor: &Arc<TextExtractor>,
) -> Result<String, AppError> {
    match source {
        JobSource::Url(url) => {
            info!("Fetching job posting from {url}");
            let page = fetcher.fetch(url).await?;
            let html_len = page.body.len();
            let text = extract_blocking(Arc::clone(extractor), page.body).await?;
            info!(
                "Extracted {} chars from {} (status {}, {} bytes of HTML)",
                text.chars().count(),
                page.url,
                page.status,
                html_len
            );
            Ok(text)
        }
        JobSource::Content(content) => {
            info!("Using inline job posting content ({} chars)", content.chars().count());
            Ok(content.clone())
        }
    }
}

/// HTML parsing and selector passes are CPU-bound; run them on the blocking pool.
async fn extract_blocking(
    extractor: Arc<TextExtractor>,
    html: String,
) -> Result<String, AppError> {
    tokio::task::spawn_blocking(move || extractor.extract(&html))
        .await
        .map_err(|e| {
            AppError::Internal(anyhow::anyhow!("spawn_blocking failed in extraction: {e}"))
        })
}

/// Parses a job posting with a single LLM call.
pub async fn parse_job(
    source: &JobSource,
    fetcher: &PageFetcher,
    extractor: &Arc<TextExtractor>,
    llm: &LlmClient,
) -> Result<JobPosting, AppError> {
    let text = resolve_job_text(source, fetcher, extractor).await?;
    let prompt = build_job_posting_prompt(&text);

    debug!(
        "Calling {} with a {} char prompt",
        llm.model(),
        prompt.chars().count()
    );
    let posting: JobPosting = llm.call_json(&prompt).await?;

    info!(
        "Parsed job posting: title={}, company={}, requirements={}",
        posting.display_field("title"),
        posting.display_field("company"),
        posting.requirements().len()
    );
    for field in JOB_POSTING_FIELDS {
        debug!("{field}: {}", posting.display_field(field));
    }

    Ok(posting)
}
