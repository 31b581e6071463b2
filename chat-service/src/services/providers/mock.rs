//! Mock provider implementation for testing.

use super::{ChatMessage, ChatProvider, ProviderError};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

/// Scripted behavior for one deployment.
#[derive(Debug, Clone)]
pub enum MockBehavior {
    /// Echo the last message's content back.
    Echo,
    /// Answer with a fixed reply.
    Reply(String),
    /// Fail with an upstream API error.
    Fail(String),
}

/// Mock chat provider for testing.
///
/// Unscripted deployments echo with no latency. Calls are counted across
/// all deployments so tests can assert that validation short-circuits
/// before any provider call.
pub struct MockChatProvider {
    scripted: HashMap<String, (MockBehavior, Duration)>,
    calls: AtomicUsize,
}

impl MockChatProvider {
    pub fn new() -> Self {
        Self {
            scripted: HashMap::new(),
            calls: AtomicUsize::new(0),
        }
    }

    /// Script a behavior and artificial latency for one deployment.
    pub fn script(mut self, deployment: &str, behavior: MockBehavior, delay: Duration) -> Self {
        self.scripted
            .insert(deployment.to_string(), (behavior, delay));
        self
    }

    /// Number of completion calls received so far.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Default for MockChatProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ChatProvider for MockChatProvider {
    async fn complete(
        &self,
        deployment: &str,
        messages: &[ChatMessage],
    ) -> Result<String, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        let (behavior, delay) = self
            .scripted
            .get(deployment)
            .cloned()
            .unwrap_or((MockBehavior::Echo, Duration::ZERO));

        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }

        match behavior {
            MockBehavior::Echo => Ok(messages
                .last()
                .map(|m| m.content.clone())
                .unwrap_or_default()),
            MockBehavior::Reply(text) => Ok(text),
            MockBehavior::Fail(message) => Err(ProviderError::ApiError {
                status: 500,
                message,
            }),
        }
    }
}
