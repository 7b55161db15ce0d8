use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Structured details extracted from a job description.
///
/// Every field is required on the wire. Lists may be empty but never absent,
/// and `experience_required` rejects negative or non-numeric values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct JobDetails {
    /// The job title
    pub job_title: String,
    /// List of required technical skills
    pub required_skills: Vec<String>,
    /// Years of experience required
    pub experience_required: u32,
    /// Tools and technologies mentioned
    pub tools: Vec<String>,
    /// Required soft skills
    pub soft_skills: Vec<String>,
}

impl JobDetails {
    pub const SCHEMA_NAME: &'static str = "JobDetails";

    /// Required skills followed by tools, first occurrence wins, comma-joined.
    pub fn requirements_summary(&self) -> String {
        let mut seen: Vec<&str> = Vec::new();
        for item in self.required_skills.iter().chain(&self.tools) {
            let item = item.trim();
            if !item.is_empty() && !seen.iter().any(|s| s.eq_ignore_ascii_case(item)) {
                seen.push(item);
            }
        }
        seen.join(", ")
    }
}
