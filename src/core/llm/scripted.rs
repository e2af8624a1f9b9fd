use std::sync::Mutex;

use async_trait::async_trait;

use super::{CompletionBackend, LlmError};

/// Test backend that echoes prompts or fails on demand.
pub(crate) struct ScriptedBackend {
    reply: Option<String>,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedBackend {
    /// Answer every prompt with `reply`.
    pub(crate) fn replying(reply: impl Into<String>) -> Self {
        Self {
            reply: Some(reply.into()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// Fail every prompt with an API error.
    pub(crate) fn failing() -> Self {
        Self {
            reply: None,
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// Prompts received so far.
    pub(crate) fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl CompletionBackend for ScriptedBackend {
    async fn complete(&self, prompt: &str) -> Result<String, LlmError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        match &self.reply {
            Some(reply) => Ok(reply.clone()),
            None => Err(LlmError::Api {
                status: 503,
                message: "backend unavailable".to_string(),
            }),
        }
    }
}
