//! LLM Client — the model backend boundary for the assistant.
//!
//! Handlers never speak HTTP themselves. They hold an `Arc<dyn TextGenerator>`,
//! hand it a finished prompt and get text back. `OllamaClient` is the
//! production backend; tests substitute stubs.

use std::time::Duration;

use async_trait::async_trait;
use serde::de::{DeserializeOwned, IgnoredAny};
use thiserror::Error;
use tracing::warn;

use crate::errors::AppError;

pub mod ollama;
pub mod prompts;
#[cfg(test)]
pub(crate) mod stub;

pub use ollama::OllamaClient;

/// Model used when nothing else is configured.
pub const DEFAULT_MODEL: &str = "mistral";

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Connection failed: {0}")]
    Connection(String),

    #[error("Request timed out after {0:?}")]
    Timeout(Duration),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Malformed backend response: {0}")]
    Envelope(#[from] serde_json::Error),

    #[error("LLM returned empty content")]
    EmptyContent,

    #[error("Invalid model settings: {0}")]
    InvalidSettings(String),
}

/// Model identifier plus sampling parameters a backend is bound to.
///
/// Only obtainable through [`ModelSettings::new`], so every instance carries
/// a non-blank model and a temperature in `0.0..=1.0`.
///
/// ```compile_fail
/// let settings = job_assistant::ModelSettings {
///     model: String::new(),
///     temperature: 5.0,
///     json_mode: false,
/// };
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ModelSettings {
    model: String,
    temperature: f32,
    json_mode: bool,
}

impl ModelSettings {
    pub fn new(model: impl Into<String>, temperature: f32) -> Result<Self, LlmError> {
        let model = model.into();
        if model.trim().is_empty() {
            return Err(LlmError::InvalidSettings(
                "model identifier cannot be empty".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&temperature) {
            return Err(LlmError::InvalidSettings(format!(
                "temperature must be between 0.0 and 1.0, got {temperature}"
            )));
        }
        Ok(Self {
            model,
            temperature,
            json_mode: false,
        })
    }

    /// Ask the backend to constrain output to a JSON object.
    pub fn with_json_mode(mut self) -> Self {
        self.json_mode = true;
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn temperature(&self) -> f32 {
        self.temperature
    }

    pub fn json_mode(&self) -> bool {
        self.json_mode
    }
}

/// The one capability handlers need from a model: prompt in, completion out.
///
/// Implementations make a single attempt per call.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, LlmError>;
}

/// Parses a completion into `T`, tolerating code fences and chatter around
/// the JSON object. Any schema mismatch becomes `AppError::Parse`.
pub fn parse_structured<T: DeserializeOwned>(
    raw: &str,
    schema: &'static str,
) -> Result<T, AppError> {
    let candidate = extract_json_object(strip_json_fences(raw));

    serde_json::from_str(candidate).map_err(|e| {
        warn!("Completion does not match {schema}: {e}");
        AppError::Parse {
            schema,
            message: e.to_string(),
        }
    })
}

/// Strips ```json ... ``` or ``` ... ``` code fences from LLM output.
fn strip_json_fences(text: &str) -> &str {
    let text = text.trim();
    let inner = text
        .strip_prefix("```json")
        .or_else(|| text.strip_prefix("```"));

    match inner {
        Some(stripped) => {
            let stripped = stripped.trim_start();
            stripped
                .strip_suffix("```")
                .map(|s| s.trim())
                .unwrap_or(stripped)
        }
        None => text,
    }
}

/// Narrows text to the first complete JSON object it contains.
///
/// Braces in the surrounding prose (e.g. an echoed `{placeholder}`) are
/// skipped: each `{` is tried until one starts a well-formed value.
fn extract_json_object(text: &str) -> &str {
    for (start, _) in text.match_indices('{') {
        let mut values =
            serde_json::Deserializer::from_str(&text[start..]).into_iter::<IgnoredAny>();
        if let Some(Ok(_)) = values.next() {
            return &text[start..start + values.byte_offset()];
        }
    }
    text
}
