//! Ollama backend — talks to a local `ollama serve` over its HTTP API.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::{LlmError, ModelSettings, TextGenerator};

pub const DEFAULT_BASE_URL: &str = "http://localhost:11434";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(120);
const GENERATE_PATH: &str = "/api/generate";

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    format: Option<&'a str>,
    options: GenerateOptions,
}

#[derive(Debug, Serialize)]
struct GenerateOptions {
    temperature: f32,
}

#[derive(Debug, Deserialize)]
pub struct GenerateResponse {
    pub response: String,
    #[serde(default)]
    pub done: bool,
    pub prompt_eval_count: Option<u32>,
    pub eval_count: Option<u32>,
}

#[derive(Debug, Deserialize)]
struct OllamaError {
    error: String,
}

/// Non-streaming client for Ollama's `/api/generate`, bound to one model and
/// temperature. Cloning is cheap; clones share the connection pool.
#[derive(Debug, Clone)]
pub struct OllamaClient {
    client: Client,
    base_url: String,
    settings: ModelSettings,
    timeout: Duration,
}

impl OllamaClient {
    pub fn new(
        base_url: impl Into<String>,
        settings: ModelSettings,
        timeout: Duration,
    ) -> Result<Self, LlmError> {
        let client = Client::builder()
            .build()
            .map_err(|e| LlmError::InvalidSettings(format!("failed to build HTTP client: {e}")))?;
        Ok(Self::with_client(client, base_url, settings, timeout))
    }

    /// Reuses an existing `reqwest::Client`, e.g. one shared by several handlers.
    pub fn with_client(
        client: Client,
        base_url: impl Into<String>,
        settings: ModelSettings,
        timeout: Duration,
    ) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            settings,
            timeout,
        }
    }

    pub fn settings(&self) -> &ModelSettings {
        &self.settings
    }

    fn endpoint(&self) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), GENERATE_PATH)
    }

    /// Makes a single call to Ollama, returning the full response object.
    pub async fn call(&self, prompt: &str) -> Result<GenerateResponse, LlmError> {
        let request_body = GenerateRequest {
            model: self.settings.model(),
            prompt,
            stream: false,
            format: self.settings.json_mode().then_some("json"),
            options: GenerateOptions {
                temperature: self.settings.temperature(),
            },
        };

        debug!(
            "Calling Ollama: model={}, temperature={}, prompt_chars={}",
            self.settings.model(),
            self.settings.temperature(),
            prompt.len()
        );

        let response = self
            .client
            .post(self.endpoint())
            .timeout(self.timeout)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| self.classify(e))?;

        let status = response.status();
        let body = response.text().await.map_err(|e| self.classify(e))?;

        if !status.is_success() {
            let message = serde_json::from_str::<OllamaError>(&body)
                .map(|e| e.error)
                .unwrap_or(body);
            warn!("Ollama returned {}: {}", status, message);
            return Err(LlmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let generated: GenerateResponse = serde_json::from_str(&body)?;

        if !generated.done {
            warn!("Ollama reported an unfinished generation for a non-streaming request");
        }
        debug!(
            "Ollama call succeeded: prompt_tokens={:?}, output_tokens={:?}",
            generated.prompt_eval_count, generated.eval_count
        );

        Ok(generated)
    }

    fn classify(&self, error: reqwest::Error) -> LlmError {
        if error.is_timeout() {
            LlmError::Timeout(self.timeout)
        } else if error.is_connect() {
            LlmError::Connection(error.to_string())
        } else {
            LlmError::Http(error)
        }
    }
}

#[async_trait]
impl TextGenerator for OllamaClient {
    async fn generate(&self, prompt: &str) -> Result<String, LlmError> {
        let generated = self.call(prompt).await?;
        if generated.response.trim().is_empty() {
            return Err(LlmError::EmptyContent);
        }
        Ok(generated.response)
    }
}
