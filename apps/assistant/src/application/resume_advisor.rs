//! Resume Suggestion Generator — compares a resume against analyzed job details.

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, info};

use crate::application::prompts::RESUME_SUGGESTIONS_TEMPLATE;
use crate::errors::AppError;
use crate::llm_client::prompts::{format_instructions, render_template};
use crate::llm_client::{
    parse_structured, ModelSettings, OllamaClient, TextGenerator,
};
use crate::models::{JobDetails, ResumeSuggestions};

/// Moderate: consistent gaps, some freedom in phrasing.
pub const TEMPERATURE: f32 = 0.5;

#[derive(Clone)]
pub struct ResumeSuggestionGenerator {
    llm: Arc<dyn TextGenerator>,
}

impl ResumeSuggestionGenerator {
    pub fn new(llm: Arc<dyn TextGenerator>) -> Self {
        Self { llm }
    }

    pub fn ollama(
        base_url: &str,
        model: &str,
        temperature: f32,
        timeout: Duration,
    ) -> Result<Self, AppError> {
        let settings = ModelSettings::new(model, temperature)?.with_json_mode();
        let client = OllamaClient::new(base_url, settings, timeout)?;
        Ok(Self::new(Arc::new(client)))
    }

    /// Generates tailored resume improvement suggestions for one job.
    pub async fn generate_suggestions(
        &self,
        job_details: &JobDetails,
        current_resume: &str,
    ) -> Result<ResumeSuggestions, AppError> {
        let prompt = build_prompt(job_details, current_resume);
        debug!(
            "Generating resume suggestions for {:?} ({} resume chars)",
            job_details.job_title,
            current_resume.len()
        );

        let raw = self.llm.generate(&prompt).await?;
        let suggestions: ResumeSuggestions =
            parse_structured(&raw, ResumeSuggestions::SCHEMA_NAME)?;

        info!(
            "Resume suggestions ready: {} missing skills, {} improvement points",
            suggestions.missing_skills.len(),
            suggestions.improvement_points.len()
        );
        Ok(suggestions)
    }
}

fn build_prompt(job_details: &JobDetails, current_resume: &str) -> String {
    let required_skills = job_details.required_skills.join(", ");
    let experience = job_details.experience_required.to_string();
    let tools = job_details.tools.join(", ");
    let instructions = format_instructions::<ResumeSuggestions>();

    render_template(
        RESUME_SUGGESTIONS_TEMPLATE,
        &[
            ("job_title", job_details.job_title.as_str()),
            ("required_skills", required_skills.as_str()),
            ("experience_required", experience.as_str()),
            ("tools", tools.as_str()),
            ("current_resume", current_resume),
            ("format_instructions", instructions.as_str()),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::stub::StubGenerator;

    const SAMPLE_RESUME: &str = r#"
        JOHN DOE
        Python Developer at Tech Corp (3 years): REST APIs with Flask, MySQL.
        Skills: Python, JavaScript, Flask, Django, MySQL, Git
    "#;

    fn job() -> JobDetails {
        JobDetails {
            job_title: "Senior Python Developer".to_string(),
            required_skills: vec!["Python".to_string(), "FastAPI".to_string()],
            experience_required: 5,
            tools: vec!["Docker".to_string(), "AWS".to_string()],
            soft_skills: vec!["Leadership".to_string()],
        }
    }

    #[tokio::test]
    async fn test_generate_suggestions_parses_response() {
        let stub = Arc::new(StubGenerator::replying(
            r#"Here you go:
            {
                "missing_skills": ["FastAPI", "AWS"],
                "improvement_points": ["Mention Docker usage in production"],
                "overall_fit_summary": "65% - solid Python base"
            }"#,
        ));
        let generator = ResumeSuggestionGenerator::new(stub.clone());

        let suggestions = generator
            .generate_suggestions(&job(), SAMPLE_RESUME)
            .await
            .unwrap();
        assert_eq!(suggestions.missing_skills, vec!["FastAPI", "AWS"]);
        assert_eq!(
            suggestions.improvement_points,
            vec!["Mention Docker usage in production"]
        );
        assert_eq!(suggestions.overall_fit_summary, "65% - solid Python base");
    }

    #[tokio::test]
    async fn test_prompt_presents_job_requirements_and_resume() {
        let stub = Arc::new(StubGenerator::replying(
            r#"{"missing_skills": [], "improvement_points": [], "overall_fit_summary": "90%"}"#,
        ));
        let generator = ResumeSuggestionGenerator::new(stub.clone());
        generator
            .generate_suggestions(&job(), SAMPLE_RESUME)
            .await
            .unwrap();

        let prompt = &stub.prompts()[0];
        assert!(prompt.contains("- Title: Senior Python Developer"));
        assert!(prompt.contains("- Skills needed: Python, FastAPI"));
        assert!(prompt.contains("- Experience: 5 years"));
        assert!(prompt.contains("- Tools: Docker, AWS"));
        assert!(prompt.contains("Python Developer at Tech Corp"));
        assert!(prompt.contains("\"overall_fit_summary\""));
    }

    #[tokio::test]
    async fn test_empty_lists_are_accepted() {
        let stub = Arc::new(StubGenerator::replying(
            r#"{"missing_skills": [], "improvement_points": [], "overall_fit_summary": "100%"}"#,
        ));
        let suggestions = ResumeSuggestionGenerator::new(stub)
            .generate_suggestions(&job(), SAMPLE_RESUME)
            .await
            .unwrap();
        assert!(suggestions.missing_skills.is_empty());
        assert!(suggestions.improvement_points.is_empty());
    }

    #[tokio::test]
    async fn test_missing_field_is_parse_error() {
        let stub = Arc::new(StubGenerator::replying(
            r#"{"missing_skills": ["AWS"], "overall_fit_summary": "40%"}"#,
        ));
        let err = ResumeSuggestionGenerator::new(stub)
            .generate_suggestions(&job(), SAMPLE_RESUME)
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            AppError::Parse {
                schema: "ResumeSuggestions",
                ..
            }
        ));
    }

    #[tokio::test]
    async fn test_backend_failure_is_backend_error() {
        let stub = Arc::new(StubGenerator::failing());
        let err = ResumeSuggestionGenerator::new(stub)
            .generate_suggestions(&job(), SAMPLE_RESUME)
            .await
            .unwrap_err();
        assert!(err.is_backend());
    }
}
