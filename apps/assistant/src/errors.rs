use thiserror::Error;

use crate::llm_client::LlmError;

/// Error returned by every assistant operation.
///
/// Exactly two things can go wrong on a call: the model backend fails, or the
/// model answers with text that does not fit the expected record.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Backend error: {0}")]
    Backend(#[from] LlmError),

    #[error("Parse error ({schema}): {message}")]
    Parse {
        schema: &'static str,
        message: String,
    },
}

impl AppError {
    /// Stable machine-readable code, used in logs.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Backend(_) => "BACKEND_ERROR",
            AppError::Parse { .. } => "PARSE_ERROR",
        }
    }

    pub fn is_backend(&self) -> bool {
        matches!(self, AppError::Backend(_))
    }

    pub fn is_parse(&self) -> bool {
        matches!(self, AppError::Parse { .. })
    }
}
