//! Mock LLM service implementation
//!
//! Minimal mock used by `LlmServiceFactory` when provider is `"mock"`.
//! Returns deterministic responses for testing.

use crate::{CompletionRequest, CompletionResponse, LlmError, LlmService};

/// Mock LLM service for testing
#[derive(Debug, Clone, Default)]
pub struct MockLlmService {
    failing: bool,
}

impl MockLlmService {
    /// Create a new mock LLM service
    pub fn new() -> Self {
        Self { failing: false }
    }

    /// Mock that fails every completion, for exercising failure handling
    /// without a live backend
    pub fn failing() -> Self {
        Self { failing: true }
    }
}

#[async_trait::async_trait]
impl LlmService for MockLlmService {
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, LlmError> {
        tracing::info!("Mock LLM service processing completion request");

        if self.failing {
            return Err(LlmError::Request("Mock generation failure".to_string()));
        }

        let model = if request.model.is_empty() {
            "mock-model".to_string()
        } else {
            request.model
        };

        // Echo the system prompt and the last user turn so tests can assert
        // on persona grounding without a live backend
        let last_message = request
            .messages
            .last()
            .map(|m| m.content.as_str())
            .unwrap_or("empty");

        let content = match &request.system_prompt {
            Some(system) => format!("[{}] Mock reply to: {}", system, last_message),
            None => format!("Mock reply to: {}", last_message),
        };

        let input_tokens = request
            .messages
            .iter()
            .map(|m| m.content.len() as i32 / 4)
            .sum::<i32>();
        let output_tokens = content.len() as i32 / 4;

        Ok(CompletionResponse {
            content,
            model,
            input_tokens,
            output_tokens,
            stop_reason: "stop".to_string(),
        })
    }

    fn default_model(&self) -> &str {
        "mock-model"
    }
}
