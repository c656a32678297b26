use std::str::FromStr;

use anyhow::{Context, Result};

use crate::llm_client::{LlmConfig, DEFAULT_API_URL, DEFAULT_MODEL, DEFAULT_TEMPERATURE};

/// Application configuration loaded from environment variables.
/// Only malformed values abort startup; a missing API key is tolerated and
/// surfaces as an LLM call error on first use.
#[derive(Debug, Clone)]
pub struct Config {
    pub groq_api_key: String,
    pub llm_api_url: String,
    pub llm_model: String,
    pub llm_temperature: f32,
    pub llm_json_mode: bool,
    pub llm_timeout_secs: u64,
    pub fetch_timeout_secs: u64,
    pub max_content_chars: usize,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            groq_api_key: std::env::var("GROQ_API_KEY").unwrap_or_default(),
            llm_api_url: env_or("LLM_API_URL", DEFAULT_API_URL),
            llm_model: env_or("LLM_MODEL", DEFAULT_MODEL),
            llm_temperature: parse_env("LLM_TEMPERATURE", DEFAULT_TEMPERATURE)?,
            llm_json_mode: parse_env("LLM_JSON_MODE", true)?,
            llm_timeout_secs: parse_env("LLM_TIMEOUT_SECS", 60)?,
            fetch_timeout_secs: parse_env("FETCH_TIMEOUT_SECS", 30)?,
            max_content_chars: parse_env(
                "MAX_CONTENT_CHARS",
                crate::extraction::DEFAULT_MAX_CHARS,
            )?,
            port: parse_env("PORT", 3000)?,
            rust_log: env_or("RUST_LOG", "info"),
        })
    }

    /// The slice of configuration the LLM client needs.
    pub fn llm(&self) -> LlmConfig {
        LlmConfig {
            api_key: self.groq_api_key.clone(),
            api_url: self.llm_api_url.clone(),
            model: self.llm_model.clone(),
            temperature: self.llm_temperature,
            json_mode: self.llm_json_mode,
            timeout_secs: self.llm_timeout_secs,
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("Environment variable '{key}' has an invalid value: {raw}")),
        Err(_) => Ok(default),
    }
}
