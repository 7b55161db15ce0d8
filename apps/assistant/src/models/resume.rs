use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Resume improvement suggestions for one job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ResumeSuggestions {
    /// Skills to add to resume
    pub missing_skills: Vec<String>,
    /// Specific improvements to resume
    pub improvement_points: Vec<String>,
    /// Overall fit assessment (0-100%)
    pub overall_fit_summary: String,
}

impl ResumeSuggestions {
    pub const SCHEMA_NAME: &'static str = "ResumeSuggestions";
}
