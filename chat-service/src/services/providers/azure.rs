//! Azure OpenAI chat provider implementation.
//!
//! Talks to the deployment-scoped chat-completions endpoint. The same
//! shared client serves any number of deployments concurrently; nothing
//! here is mutated after construction.

use super::{ChatMessage, ChatProvider, ProviderError};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

/// Fixed cap on generated length, applied uniformly to every call.
const MAX_COMPLETION_TOKENS: u32 = 1000;

/// Header carrying the API credential.
const API_KEY_HEADER: &str = "api-key";

/// Azure OpenAI connection settings.
#[derive(Debug, Clone)]
pub struct AzureOpenAiConfig {
    pub endpoint: String,
    pub api_key: String,
    pub api_version: String,
}

/// Azure OpenAI chat provider.
pub struct AzureChatProvider {
    config: AzureOpenAiConfig,
    client: Client,
}

impl AzureChatProvider {
    pub fn new(config: AzureOpenAiConfig) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(120))
            .build()
            .expect("Failed to create HTTP client");

        Self { config, client }
    }

    /// Build the chat-completions URL for the given deployment.
    fn completions_url(&self, deployment: &str) -> String {
        format!(
            "{}/openai/deployments/{}/chat/completions?api-version={}",
            self.config.endpoint.trim_end_matches('/'),
            deployment,
            self.config.api_version
        )
    }
}

#[async_trait]
impl ChatProvider for AzureChatProvider {
    async fn complete(
        &self,
        deployment: &str,
        messages: &[ChatMessage],
    ) -> Result<String, ProviderError> {
        if deployment.is_empty() {
            return Err(ProviderError::NotConfigured(
                "Deployment name is empty".to_string(),
            ));
        }

        let request = ChatCompletionsRequest {
            messages,
            max_completion_tokens: MAX_COMPLETION_TOKENS,
        };

        let url = self.completions_url(deployment);

        tracing::debug!(
            deployment = %deployment,
            message_count = messages.len(),
            "Sending request to Azure OpenAI"
        );

        let response = self
            .client
            .post(&url)
            .header(API_KEY_HEADER, &self.config.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| ProviderError::NetworkError(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();

            if status.as_u16() == 429 {
                return Err(ProviderError::RateLimited);
            }

            return Err(ProviderError::ApiError {
                status: status.as_u16(),
                message: error_text,
            });
        }

        let api_response: ChatCompletionsResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::InvalidResponse(e.to_string()))?;

        // A missing choice or null content is a valid empty completion.
        Ok(api_response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .unwrap_or_default())
    }
}

// ============================================================================
// Azure OpenAI API Request/Response Types
// ============================================================================

#[derive(Debug, Serialize)]
struct ChatCompletionsRequest<'a> {
    messages: &'a [ChatMessage],
    max_completion_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionsResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    #[serde(default)]
    content: Option<String>,
}
