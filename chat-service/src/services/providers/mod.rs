//! Chat completion provider abstractions and implementations.
//!
//! This module provides a trait-based abstraction for chat completion
//! providers, allowing easy swapping between backends (Azure OpenAI, mock).

pub mod azure;
pub mod mock;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error type for provider operations.
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("Provider not configured: {0}")]
    NotConfigured(String),

    #[error("API error {status}: {message}")]
    ApiError { status: u16, message: String },

    #[error("Rate limited")]
    RateLimited,

    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// Role of a chat message author.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

/// One role-tagged message of a conversation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }
}

/// Trait for chat completion providers.
#[async_trait]
pub trait ChatProvider: Send + Sync {
    /// Perform one chat completion against the named deployment.
    ///
    /// An empty string is a valid completion result, not an error.
    async fn complete(
        &self,
        deployment: &str,
        messages: &[ChatMessage],
    ) -> Result<String, ProviderError>;
}
