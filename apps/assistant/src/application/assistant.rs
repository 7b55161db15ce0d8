//! Assistant — bundles the three handlers and runs them end to end.
//!
//! Flow: analyze JD → resume suggestions → cover letter.
//! The first failing step aborts the run; no partial packet is returned.

use std::sync::Arc;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::application::{CoverLetterGenerator, JobDescriptionAnalyzer, ResumeSuggestionGenerator};
use crate::config::Config;
use crate::errors::AppError;
use crate::llm_client::{LlmError, ModelSettings, OllamaClient};
use crate::models::{JobDetails, ResumeSuggestions};

/// Everything needed to prepare one application.
#[derive(Debug, Clone, Deserialize)]
pub struct ApplicationRequest {
    pub candidate_name: String,
    pub company_name: String,
    pub job_description: String,
    pub resume: String,
    pub key_achievements: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApplicationPacket {
    pub job_details: JobDetails,
    pub suggestions: ResumeSuggestions,
    pub cover_letter: String,
}

#[derive(Clone)]
pub struct Assistant {
    pub analyzer: JobDescriptionAnalyzer,
    pub suggestions: ResumeSuggestionGenerator,
    pub cover_letters: CoverLetterGenerator,
}

impl Assistant {
    pub fn new(
        analyzer: JobDescriptionAnalyzer,
        suggestions: ResumeSuggestionGenerator,
        cover_letters: CoverLetterGenerator,
    ) -> Self {
        Self {
            analyzer,
            suggestions,
            cover_letters,
        }
    }

    /// Builds Ollama-backed handlers that share one HTTP connection pool.
    pub fn from_config(config: &Config) -> Result<Self, AppError> {
        let client = Client::builder()
            .build()
            .map_err(|e| LlmError::InvalidSettings(format!("failed to build HTTP client: {e}")))?;

        let backend = |temperature: f32, json_mode: bool| -> Result<OllamaClient, AppError> {
            let mut settings = ModelSettings::new(config.model.as_str(), temperature)?;
            if json_mode {
                settings = settings.with_json_mode();
            }
            Ok(OllamaClient::with_client(
                client.clone(),
                config.ollama_base_url.as_str(),
                settings,
                config.request_timeout,
            ))
        };

        let assistant = Self::new(
            JobDescriptionAnalyzer::new(Arc::new(backend(config.analyzer_temperature, true)?)),
            ResumeSuggestionGenerator::new(Arc::new(backend(config.suggestion_temperature, true)?)),
            CoverLetterGenerator::new(Arc::new(backend(config.cover_letter_temperature, false)?)),
        );

        info!(
            "Assistant initialized (model: {}, backend: {})",
            config.model, config.ollama_base_url
        );
        Ok(assistant)
    }

    /// Analyzes the posting, critiques the resume against it, then drafts a
    /// cover letter addressed to the analyzed job title.
    pub async fn prepare_application(
        &self,
        request: &ApplicationRequest,
    ) -> Result<ApplicationPacket, AppError> {
        let job_details = self
            .analyzer
            .analyze(&request.job_description)
            .await
            .inspect_err(|e| warn!("[{}] job description analysis failed: {e}", e.code()))?;

        let suggestions = self
            .suggestions
            .generate_suggestions(&job_details, &request.resume)
            .await
            .inspect_err(|e| warn!("[{}] resume suggestions failed: {e}", e.code()))?;

        let cover_letter = self
            .cover_letters
            .generate(
                &request.candidate_name,
                &job_details.job_title,
                &request.company_name,
                &request.key_achievements,
                &job_details.requirements_summary(),
            )
            .await
            .inspect_err(|e| warn!("[{}] cover letter generation failed: {e}", e.code()))?;

        info!(
            "Application prepared for {} at {}",
            request.candidate_name, request.company_name
        );

        Ok(ApplicationPacket {
            job_details,
            suggestions,
            cover_letter,
        })
    }
}
