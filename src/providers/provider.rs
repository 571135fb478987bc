use async_trait::async_trait;
use thiserror::Error;

use crate::models::chat::{ChatCompletion, ChatCompletionRequest};

#[derive(Debug, Clone, Error)]
pub enum ProviderError {
    #[error("Provider unavailable: {0}")]
    Unavailable(String),

    #[error("HTTP error {status}: {body}")]
    HttpError { status: u16, body: String },

    #[error("Timeout: {0}")]
    Timeout(String),

    #[error("Parse error: {0}")]
    ParseError(String),
}

impl From<reqwest::Error> for ProviderError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            ProviderError::Timeout(e.to_string())
        } else {
            ProviderError::Unavailable(e.to_string())
        }
    }
}

/// A hosted chat completion endpoint. One call, one response, no retries.
#[async_trait]
pub trait Provider: Send + Sync {
    fn key(&self) -> String;

    async fn chat_completions(
        &self,
        payload: ChatCompletionRequest,
    ) -> Result<ChatCompletion, ProviderError>;
}
