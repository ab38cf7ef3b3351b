//! Deterministic `GenerationService` stand-ins for tests.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use super::{GenerationService, LlmError};

/// One recorded call: (model, prompt).
pub type RecordedCall = (String, String);

/// Returns the same reply for every call and records what it was asked.
#[derive(Clone)]
pub struct MockGenerationService {
    reply: Option<String>,
    calls: Arc<Mutex<Vec<RecordedCall>>>,
}

impl MockGenerationService {
    pub fn replying(reply: impl Into<String>) -> Self {
        Self {
            reply: Some(reply.into()),
            calls: Arc::default(),
        }
    }

    /// Fails every call with an authentication-style API error.
    pub fn failing() -> Self {
        Self {
            reply: None,
            calls: Arc::default(),
        }
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl GenerationService for MockGenerationService {
    async fn generate(&self, model: &str, prompt: &str) -> Result<String, LlmError> {
        self.calls
            .lock()
            .unwrap()
            .push((model.to_string(), prompt.to_string()));
        match &self.reply {
            Some(reply) => Ok(reply.clone()),
            None => Err(LlmError::Api {
                status: 403,
                message: "API key not valid.".to_string(),
            }),
        }
    }
}
