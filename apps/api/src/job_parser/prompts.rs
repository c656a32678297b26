//! Prompt Builder for job posting extraction.

/// Field names the model is asked to return.
pub const JOB_POSTING_FIELDS: [&str; 5] = ["company", "title", "location", "description", "salary"];

/// Job posting prompt template. Replace `{job_posting_text}` before sending.
pub const JOB_POSTING_PROMPT_TEMPLATE: &str = r#"Please analyze this job posting and extract the following information in valid JSON format:
{
    "company": "company name",
    "title": "job title",
    "location": "job location",
    "description": "summarize the job description in one to two sentences",
    "salary": "salary information if available, just a number or range"
}

Job Posting:
{job_posting_text}

Please provide only the valid JSON response, no additional text. Also ensure that the salary value is a string and not a raw integer or range"#;

/// Embeds the posting text verbatim into the extraction prompt.
/// The text is inserted once and never re-scanned, so placeholder-like
/// sequences inside it survive untouched.
pub fn build_job_posting_prompt(job_posting_text: &str) -> String {
    JOB_POSTING_PROMPT_TEMPLATE.replace("{job_posting_text}", job_posting_text)
}
