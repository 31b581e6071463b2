use serde::{Deserialize, Serialize};
use validator::Validate;

/// Abstract role name for a configured deployment.
///
/// The original UI sends provider-specific labels; they are accepted as
/// aliases so existing clients keep working.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelTarget {
    #[default]
    #[serde(alias = "gpt")]
    Primary,
    #[serde(alias = "grok")]
    Secondary,
}

/// Single-target chat request.
#[derive(Debug, Deserialize, Validate)]
pub struct ChatRequest {
    #[validate(length(min = 1, message = "Message is required"))]
    pub message: String,
    #[serde(default)]
    pub model: ModelTarget,
}

/// Dual-target chat request; both deployments receive the same prompt.
#[derive(Debug, Deserialize, Validate)]
pub struct ChatBothRequest {
    #[validate(length(min = 1, message = "Message is required"))]
    pub message: String,
}

/// One deployment's answer.
#[derive(Debug, Serialize)]
pub struct ModelAnswer {
    pub model: String,
    pub response: String,
}

/// Combined answer of the dual-target call, always primary then secondary.
#[derive(Debug, Serialize)]
pub struct ChatBothResponse {
    pub primary: ModelAnswer,
    pub secondary: ModelAnswer,
}
