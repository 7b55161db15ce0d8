//! Cover Letter Generator — free-text output, no schema applied.

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, info};

use crate::application::prompts::COVER_LETTER_TEMPLATE;
use crate::errors::AppError;
use crate::llm_client::prompts::render_template;
use crate::llm_client::{
    LlmError, ModelSettings, OllamaClient, TextGenerator,
};

/// Higher: varied, natural phrasing.
pub const TEMPERATURE: f32 = 0.7;

#[derive(Clone)]
pub struct CoverLetterGenerator {
    llm: Arc<dyn TextGenerator>,
}

impl CoverLetterGenerator {
    pub fn new(llm: Arc<dyn TextGenerator>) -> Self {
        Self { llm }
    }

    pub fn ollama(
        base_url: &str,
        model: &str,
        temperature: f32,
        timeout: Duration,
    ) -> Result<Self, AppError> {
        let settings = ModelSettings::new(model, temperature)?;
        let client = OllamaClient::new(base_url, settings, timeout)?;
        Ok(Self::new(Arc::new(client)))
    }

    /// Generates a professional cover letter and returns the model's text as-is.
    pub async fn generate(
        &self,
        candidate_name: &str,
        job_title: &str,
        company_name: &str,
        key_achievements: &str,
        job_requirements: &str,
    ) -> Result<String, AppError> {
        let prompt = render_template(
            COVER_LETTER_TEMPLATE,
            &[
                ("candidate_name", candidate_name),
                ("job_title", job_title),
                ("company_name", company_name),
                ("key_achievements", key_achievements),
                ("job_requirements", job_requirements),
            ],
        );
        debug!("Generating cover letter for {job_title} at {company_name}");

        let letter = self.llm.generate(&prompt).await?;
        if letter.trim().is_empty() {
            return Err(LlmError::EmptyContent.into());
        }

        info!(
            "Cover letter generated ({} words)",
            letter.split_whitespace().count()
        );
        Ok(letter)
    }
}
