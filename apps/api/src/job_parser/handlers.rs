//! Axum route handlers for job posting parsing.

use axum::{extract::rejection::JsonRejection, extract::State, Json};

use crate::errors::AppError;
use crate::job_parser::models::{JobPosting, ParseJobRequest};
use crate::job_parser::parser::parse_job;
use crate::state::AppState;

/// POST /parse-job
///
/// Body: `{"url": "..."}` or `{"content": "..."}`. Returns the object the
/// model produced, without schema enforcement.
pub async fn handle_parse_job(
    State(state): State<AppState>,
    payload: Result<Json<ParseJobRequest>, JsonRejection>,
) -> Result<Json<JobPosting>, AppError> {
    let Json(request) = payload.map_err(|e| AppError::Input(e.body_text()))?;
    let source = request.into_source()?;

    let posting = parse_job(&source, &state.fetcher, &state.extractor, &state.llm).await?;

    Ok(Json(posting))
}
