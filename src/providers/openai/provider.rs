use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, info};

use crate::config::models::Provider as ProviderConfig;
use crate::models::chat::{ChatCompletion, ChatCompletionRequest};
use crate::providers::provider::{Provider, ProviderError};

pub struct OpenAIProvider {
    config: ProviderConfig,
    api_key: String,
    http_client: Client,
}

impl OpenAIProvider {
    pub fn new(config: &ProviderConfig, api_key: String) -> Result<Self, ProviderError> {
        let mut builder = Client::builder();
        if let Some(seconds) = config.timeout_seconds {
            builder = builder.timeout(Duration::from_secs(seconds));
        }
        let http_client = builder.build()?;

        Ok(Self {
            config: config.clone(),
            api_key,
            http_client,
        })
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/chat/completions",
            self.config.api_base.trim_end_matches('/')
        )
    }
}

#[async_trait]
impl Provider for OpenAIProvider {
    fn key(&self) -> String {
        self.config.key.clone()
    }

    async fn chat_completions(
        &self,
        payload: ChatCompletionRequest,
    ) -> Result<ChatCompletion, ProviderError> {
        let url = self.endpoint();
        debug!(
            url = %url,
            model = %payload.model,
            messages = payload.messages.len(),
            "Sending chat completion request"
        );

        let response = self
            .http_client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&payload)
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.text().await?;

        if !(200..300).contains(&status) {
            return Err(ProviderError::HttpError { status, body });
        }

        let completion: ChatCompletion =
            serde_json::from_str(&body).map_err(|e| ProviderError::ParseError(e.to_string()))?;

        info!(
            provider = %self.config.key,
            prompt_tokens = completion.usage.prompt_tokens,
            completion_tokens = completion.usage.completion_tokens,
            total_tokens = completion.usage.total_tokens,
            "Chat completion received"
        );

        Ok(completion)
    }
}
