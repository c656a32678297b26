use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::errors::AppError;

/// Placeholder shown for fields the model left out or blank.
pub const MISSING_FIELD: &str = "N/A";

/// Body of POST /parse-job. Exactly one of `url` / `content` is expected;
/// `url` wins when both are present.
#[derive(Debug, Default, Deserialize)]
pub struct ParseJobRequest {
    #[serde(default)]
    pub url: Option<String>,
    /// Raw posting text. Non-string JSON values are stringified.
    #[serde(default)]
    pub content: Option<Value>,
}

/// Where the posting text comes from.
#[derive(Debug, Clone, PartialEq)]
pub enum JobSource {
    /// Fetched and run through the text extractor.
    Url(String),
    /// Sent to the prompt as-is.
    Content(String),
}

impl ParseJobRequest {
    pub fn into_source(self) -> Result<JobSource, AppError> {
        if let Some(url) = self.url.filter(|u| !u.trim().is_empty()) {
            return Ok(JobSource::Url(url.trim().to_string()));
        }
        match self.content.and_then(coerce_content) {
            Some(content) => Ok(JobSource::Content(content)),
            None => Err(AppError::Input(
                "Either URL or content must be provided".to_string(),
            )),
        }
    }
}

fn coerce_content(value: Value) -> Option<String> {
    let text = match value {
        Value::Null => return None,
        Value::String(s) => s,
        other => other.to_string(),
    };
    (!text.trim().is_empty()).then_some(text)
}

/// Structured posting as returned by the model.
///
/// The shape is not enforced: fields may be missing or carry non-string
/// values (a numeric salary, say). Defaults only apply at display time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JobPosting(pub Map<String, Value>);

impl JobPosting {
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    /// String entries of the optional `requirements` list, in order.
    pub fn requirements(&self) -> Vec<&str> {
        self.get("requirements")
            .and_then(Value::as_array)
            .map(|items| items.iter().filter_map(Value::as_str).collect())
            .unwrap_or_default()
    }

    /// Display form of a field: strings as-is, scalars stringified,
    /// string lists comma-joined, and `N/A` for anything absent or blank.
    pub fn display_field(&self, field: &str) -> String {
        let rendered = match self.get(field) {
            None | Some(Value::Null) => String::new(),
            Some(Value::String(s)) => s.trim().to_string(),
            Some(Value::Array(items)) => items
                .iter()
                .map(|item| match item {
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                })
                .collect::<Vec<_>>()
                .join(", "),
            Some(other) => other.to_string(),
        };
        if rendered.is_empty() {
            MISSING_FIELD.to_string()
        } else {
            rendered
        }
    }
}
