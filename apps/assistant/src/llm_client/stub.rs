//! In-memory `TextGenerator` used by unit tests.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use super::{LlmError, TextGenerator};

/// Replies from a script, then falls back to a fixed reply. `None` entries
/// simulate a refused connection. Every prompt is recorded.
pub(crate) struct StubGenerator {
    script: Mutex<VecDeque<Option<String>>>,
    fallback: Option<String>,
    prompts: Mutex<Vec<String>>,
}

impl StubGenerator {
    pub(crate) fn replying(reply: &str) -> Self {
        Self::build(Vec::new(), Some(reply.to_string()))
    }

    pub(crate) fn failing() -> Self {
        Self::build(Vec::new(), None)
    }

    pub(crate) fn scripted(replies: Vec<Option<&str>>) -> Self {
        let script = replies
            .into_iter()
            .map(|r| r.map(str::to_string))
            .collect();
        Self::build(script, None)
    }

    fn build(script: Vec<Option<String>>, fallback: Option<String>) -> Self {
        Self {
            script: Mutex::new(script.into()),
            fallback,
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl TextGenerator for StubGenerator {
    async fn generate(&self, prompt: &str) -> Result<String, LlmError> {
        self.prompts.lock().unwrap().push(prompt.to_string());

        let reply = match self.script.lock().unwrap().pop_front() {
            Some(scripted) => scripted,
            None => self.fallback.clone(),
        };

        reply.ok_or_else(|| LlmError::Connection("connection refused".to_string()))
    }
}
