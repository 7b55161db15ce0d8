use std::str::FromStr;
use std::time::Duration;

use anyhow::{ensure, Context, Result};

use crate::application::{cover_letter, jd_analyzer, resume_advisor};
use crate::llm_client::ollama::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
use crate::llm_client::DEFAULT_MODEL;

/// Assistant configuration loaded from environment variables.
/// Every variable is optional; malformed values are rejected.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub ollama_base_url: String,
    pub model: String,
    pub request_timeout: Duration,
    pub analyzer_temperature: f32,
    pub suggestion_temperature: f32,
    pub cover_letter_temperature: f32,
    pub rust_log: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            ollama_base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            request_timeout: DEFAULT_TIMEOUT,
            analyzer_temperature: jd_analyzer::TEMPERATURE,
            suggestion_temperature: resume_advisor::TEMPERATURE,
            cover_letter_temperature: cover_letter::TEMPERATURE,
            rust_log: "info".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from an arbitrary key lookup. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Config::default();

        let timeout_secs =
            parse_or(&lookup, "LLM_TIMEOUT_SECS", defaults.request_timeout.as_secs())?;
        ensure!(timeout_secs > 0, "LLM_TIMEOUT_SECS must be greater than zero");

        let model = lookup("ASSISTANT_MODEL").unwrap_or(defaults.model);

        Ok(Config {
            ollama_base_url: lookup("OLLAMA_BASE_URL").unwrap_or(defaults.ollama_base_url),
            model: model.trim().to_string(),
            request_timeout: Duration::from_secs(timeout_secs),
            analyzer_temperature: temperature(
                &lookup,
                "ANALYZER_TEMPERATURE",
                defaults.analyzer_temperature,
            )?,
            suggestion_temperature: temperature(
                &lookup,
                "SUGGESTION_TEMPERATURE",
                defaults.suggestion_temperature,
            )?,
            cover_letter_temperature: temperature(
                &lookup,
                "COVER_LETTER_TEMPERATURE",
                defaults.cover_letter_temperature,
            )?,
            rust_log: lookup("RUST_LOG").unwrap_or(defaults.rust_log),
        })
    }
}

fn parse_or<T, F>(lookup: &F, key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("{key} must be a valid {}", std::any::type_name::<T>())),
        None => Ok(default),
    }
}

fn temperature<F>(lookup: &F, key: &str, default: f32) -> Result<f32>
where
    F: Fn(&str) -> Option<String>,
{
    let value: f32 = parse_or(lookup, key, default)?;
    ensure!(
        (0.0..=1.0).contains(&value),
        "{key} must be between 0.0 and 1.0, got {value}"
    );
    Ok(value)
}
