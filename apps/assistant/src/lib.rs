//! Job application assistant.
//!
//! Turns job postings, resumes and candidate highlights into structured
//! analysis and cover letters by prompting a locally hosted language model.
//! Every model call goes through [`llm_client::TextGenerator`].

pub mod application;
pub mod config;
pub mod errors;
pub mod llm_client;
pub mod models;
pub mod telemetry;

pub use application::{
    ApplicationPacket, ApplicationRequest, Assistant, CoverLetterGenerator,
    JobDescriptionAnalyzer, ResumeSuggestionGenerator,
};
pub use config::Config;
pub use errors::AppError;
pub use llm_client::{LlmError, ModelSettings, OllamaClient, TextGenerator};
pub use models::{JobDetails, ResumeSuggestions};
