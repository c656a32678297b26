//! Retrieval of job pages by URL.

use std::time::Duration;

use reqwest::{Client, StatusCode};
use thiserror::Error;
use tracing::instrument;

const MAX_BODY_SIZE: u64 = 5 * 1024 * 1024; // 5MB
const USER_AGENT: &str = concat!("jobparse/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("invalid url: {0}")]
    InvalidUrl(String),

    #[error("http error {status}")]
    Http { status: StatusCode },

    #[error("body too large ({0} bytes)")]
    BodyTooLarge(u64),

    #[error("transport error: {0}")]
    Transport(String),
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) => Self::Http { status },
            None => Self::Transport(err.to_string()),
        }
    }
}

#[derive(Debug)]
pub struct FetchedPage {
    pub url: String,
    pub status: StatusCode,
    /// Body decoded as UTF-8; invalid sequences are replaced, never rejected.
    pub body: String,
}

#[derive(Clone)]
pub struct PageFetcher {
    client: Client,
}

impl PageFetcher {
    pub fn new(timeout: Duration) -> Result<Self, FetchError> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()?;
        Ok(Self { client })
    }

    #[instrument(skip_all, fields(url = %url))]
    pub async fn fetch(&self, url: &str) -> Result<FetchedPage, FetchError> {
        let parsed = reqwest::Url::parse(url).map_err(|e| FetchError::InvalidUrl(e.to_string()))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(FetchError::InvalidUrl(format!(
                "unsupported scheme '{}'",
                parsed.scheme()
            )));
        }

        let mut response = self.client.get(parsed).send().await?;

        if let Some(content_length) = response.content_length() {
            if content_length > MAX_BODY_SIZE {
                return Err(FetchError::BodyTooLarge(content_length));
            }
        }

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Http { status });
        }

        let final_url = response.url().to_string();

        // Content-Length may be missing (chunked) or wrong; stop reading at the cap.
        let mut bytes = Vec::new();
        while let Some(chunk) = response.chunk().await? {
            bytes.extend_from_slice(&chunk);
            if bytes.len() as u64 > MAX_BODY_SIZE {
                return Err(FetchError::BodyTooLarge(bytes.len() as u64));
            }
        }

        Ok(FetchedPage {
            url: final_url,
            status,
            body: String::from_utf8_lossy(&bytes).into_owned(),
        })
    }
}
