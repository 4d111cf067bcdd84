//! Text-generation service abstraction for Fixline
//!
//! The generation backend is a black box behind the `LlmService` trait:
//! one system prompt, a list of chat turns, one completion back. The
//! orchestrating caller owns retry policy (there is none here) and treats
//! every call as long-latency.

pub mod mock;
pub mod openai;

pub use mock::MockLlmService;
pub use openai::OpenAiService;

/// Role of a chat turn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LlmRole {
    User,
    Assistant,
}

/// One chat turn
#[derive(Debug, Clone)]
pub struct LlmMessage {
    pub role: LlmRole,
    pub content: String,
}

/// Completion request
#[derive(Debug, Clone)]
pub struct CompletionRequest {
    /// Model to use; empty string selects the service default
    pub model: String,
    pub system_prompt: Option<String>,
    pub messages: Vec<LlmMessage>,
    pub max_tokens: Option<u32>,
}

/// Completion response
#[derive(Debug, Clone)]
pub struct CompletionResponse {
    pub content: String,
    pub model: String,
    pub input_tokens: i32,
    pub output_tokens: i32,
    pub stop_reason: String,
}

/// Errors surfaced by generation backends
#[derive(Debug, thiserror::Error)]
pub enum LlmError {
    #[error("Request failed: {0}")]
    Request(String),

    #[error("Invalid response: {0}")]
    Response(String),

    #[error("Request timed out")]
    Timeout,

    #[error("Rate limit exceeded")]
    RateLimit,
}

/// Generation service configuration
#[derive(Debug, Clone)]
pub struct LlmConfig {
    pub api_key: String,
    pub default_model: String,
    pub max_tokens: u32,
    pub base_url: Option<String>,
}

impl LlmConfig {
    pub fn new(api_key: String, default_model: String) -> Self {
        Self {
            api_key,
            default_model,
            max_tokens: 1024,
            base_url: None,
        }
    }
}

/// Text-generation service boundary
#[async_trait::async_trait]
pub trait LlmService: Send + Sync {
    /// Run one completion. No retry or backoff; failures surface as-is.
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, LlmError>;

    /// Model used when the request does not name one
    fn default_model(&self) -> &str;
}

/// Factory selecting a generation backend by provider name
pub struct LlmServiceFactory;

impl LlmServiceFactory {
    /// Create a service for the given provider ("openai" or "mock";
    /// "mock-failing" yields a mock whose completions always fail)
    pub fn create(provider: &str, config: LlmConfig) -> Result<Box<dyn LlmService>, LlmError> {
        match provider {
            "openai" => Ok(Box::new(OpenAiService::new(config)?)),
            "mock" => Ok(Box::new(MockLlmService::new())),
            "mock-failing" => Ok(Box::new(MockLlmService::failing())),
            other => Err(LlmError::Request(format!(
                "Unknown LLM provider: {}",
                other
            ))),
        }
    }
}
