// Job application features: JD analysis, resume suggestions, cover letters.
// All LLM calls go through llm_client — nothing here speaks HTTP.

pub mod assistant;
pub mod cover_letter;
pub mod jd_analyzer;
pub mod prompts;
pub mod resume_advisor;

pub use assistant::{ApplicationPacket, ApplicationRequest, Assistant};
pub use cover_letter::CoverLetterGenerator;
pub use jd_analyzer::JobDescriptionAnalyzer;
pub use resume_advisor::ResumeSuggestionGenerator;
