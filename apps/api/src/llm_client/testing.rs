//! Deterministic stand-in for the Gemini backend.

use std::sync::Mutex;

use async_trait::async_trait;

use super::{GenerationRequest, GenerativeModel, LlmError};

enum StubReply {
    Text(String),
    Fail { status: u16, message: String },
}

/// Returns a canned reply and records every request it receives.
pub struct StubModel {
    reply: StubReply,
    requests: Mutex<Vec<GenerationRequest>>,
}

impl StubModel {
    pub fn replying(text: &str) -> Self {
        Self {
            reply: StubReply::Text(text.to_string()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(status: u16, message: &str) -> Self {
        Self {
            reply: StubReply::Fail {
                status,
                message: message.to_string(),
            },
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn requests(&self) -> Vec<GenerationRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl GenerativeModel for StubModel {
    async fn generate(&self, request: &GenerationRequest) -> Result<String, LlmError> {
        self.requests.lock().unwrap().push(request.clone());
        match &self.reply {
            StubReply::Text(text) => Ok(text.clone()),
            StubReply::Fail { status, message } => Err(LlmError::Api {
                status: *status,
                message: message.clone(),
            }),
        }
    }

    fn model_name(&self) -> &str {
        "stub"
    }
}
