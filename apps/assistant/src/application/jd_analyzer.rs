//! Job Description Analyzer — extracts a `JobDetails` record from raw posting text.

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, info};

use crate::application::prompts::JD_ANALYSIS_TEMPLATE;
use crate::errors::AppError;
use crate::llm_client::prompts::{format_instructions, render_template};
use crate::llm_client::{
    parse_structured, ModelSettings, OllamaClient, TextGenerator,
};
use crate::models::JobDetails;

/// Low: extraction should be repeatable.
pub const TEMPERATURE: f32 = 0.3;

#[derive(Clone)]
pub struct JobDescriptionAnalyzer {
    llm: Arc<dyn TextGenerator>,
}

impl JobDescriptionAnalyzer {
    pub fn new(llm: Arc<dyn TextGenerator>) -> Self {
        Self { llm }
    }

    /// Analyzer backed by its own Ollama client in JSON mode.
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

    /// Analyzes a job description and returns structured job details.
    pub async fn analyze(&self, job_description: &str) -> Result<JobDetails, AppError> {
        let prompt = build_prompt(job_description);
        debug!(
            "Analyzing job description ({} chars)",
            job_description.len()
        );

        let raw = self.llm.generate(&prompt).await?;
        let details: JobDetails = parse_structured(&raw, JobDetails::SCHEMA_NAME)?;

        info!(
            "Job description analyzed: title={:?}, skills={}, tools={}, experience={}y",
            details.job_title,
            details.required_skills.len(),
            details.tools.len(),
            details.experience_required
        );
        Ok(details)
    }
}

fn build_prompt(job_description: &str) -> String {
    let instructions = format_instructions::<JobDetails>();
    render_template(
        JD_ANALYSIS_TEMPLATE,
        &[
            ("job_description", job_description),
            ("format_instructions", instructions.as_str()),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::ollama::DEFAULT_TIMEOUT;
    use crate::llm_client::stub::StubGenerator;

    const SAMPLE_JD: &str = r#"
        Senior Python Developer
        We are looking for a Senior Python Developer with 5+ years of experience.
        Required Skills: Python (Django, FastAPI, Flask), PostgreSQL and Redis,
        Docker and Kubernetes, AWS (EC2, S3, Lambda), RESTful API design.
        Soft Skills: Strong communication, team player, problem-solving.
    "#;

    const WELL_FORMED: &str = r#"{
        "job_title": "Senior Python Developer",
        "required_skills": ["Python", "Django", "FastAPI", "PostgreSQL"],
        "experience_required": 5,
        "tools": ["Docker", "Kubernetes", "AWS"],
        "soft_skills": ["Communication", "Problem-solving"]
    }"#;

    fn analyzer(stub: &Arc<StubGenerator>) -> JobDescriptionAnalyzer {
        JobDescriptionAnalyzer::new(stub.clone())
    }

    #[tokio::test]
    async fn test_analyze_returns_stub_values_exactly() {
        let stub = Arc::new(StubGenerator::replying(WELL_FORMED));
        let details = analyzer(&stub).analyze(SAMPLE_JD).await.unwrap();

        assert_eq!(details.job_title, "Senior Python Developer");
        assert_eq!(details.experience_required, 5);
        assert_eq!(
            details.required_skills,
            vec!["Python", "Django", "FastAPI", "PostgreSQL"]
        );
        assert_eq!(details.tools, vec!["Docker", "Kubernetes", "AWS"]);
        assert_eq!(details.soft_skills, vec!["Communication", "Problem-solving"]);
    }

    #[tokio::test]
    async fn test_analyze_prompt_embeds_description_and_schema() {
        let stub = Arc::new(StubGenerator::replying(WELL_FORMED));
        analyzer(&stub).analyze(SAMPLE_JD).await.unwrap();

        let prompts = stub.prompts();
        assert_eq!(prompts.len(), 1);
        assert!(prompts[0].contains("5+ years of experience"));
        assert!(prompts[0].contains("\"experience_required\""));
        assert!(!prompts[0].contains("{job_description}"));
        assert!(!prompts[0].contains("{format_instructions}"));
    }

    #[tokio::test]
    async fn test_analyze_rejects_non_numeric_experience() {
        let stub = Arc::new(StubGenerator::replying(
            r#"{
                "job_title": "Senior Python Developer",
                "required_skills": [],
                "experience_required": "five",
                "tools": [],
                "soft_skills": []
            }"#,
        ));
        let err = analyzer(&stub).analyze(SAMPLE_JD).await.unwrap_err();
        assert!(matches!(err, AppError::Parse { schema: "JobDetails", .. }));
    }

    #[tokio::test]
    async fn test_analyze_rejects_numeric_string_experience() {
        let stub = Arc::new(StubGenerator::replying(
            r#"{"job_title": "Dev", "required_skills": [], "experience_required": "5",
                "tools": [], "soft_skills": []}"#,
        ));
        let err = analyzer(&stub).analyze(SAMPLE_JD).await.unwrap_err();
        assert!(err.is_parse());
    }

    #[tokio::test]
    async fn test_analyze_rejects_missing_field() {
        let stub = Arc::new(StubGenerator::replying(
            r#"{"job_title": "Dev", "required_skills": [], "experience_required": 2, "tools": []}"#,
        ));
        let err = analyzer(&stub).analyze(SAMPLE_JD).await.unwrap_err();
        assert!(err.is_parse());
    }

    #[tokio::test]
    async fn test_analyze_surfaces_backend_failure() {
        let stub = Arc::new(StubGenerator::failing());
        let err = analyzer(&stub).analyze(SAMPLE_JD).await.unwrap_err();
        assert!(err.is_backend());
        assert!(!err.is_parse());
    }

    #[test]
    fn test_ollama_constructor_rejects_bad_temperature() {
        let result = JobDescriptionAnalyzer::ollama(
            "http://localhost:11434",
            "mistral",
            2.0,
            DEFAULT_TIMEOUT,
        );
        assert!(matches!(result, Err(AppError::Backend(_))));
    }

    #[test]
    fn test_ollama_constructor_accepts_defaults() {
        let analyzer = JobDescriptionAnalyzer::ollama(
            "http://localhost:11434",
            "mistral",
            TEMPERATURE,
            DEFAULT_TIMEOUT,
        );
        assert!(analyzer.is_ok());
    }
}
