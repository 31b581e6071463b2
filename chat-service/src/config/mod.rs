use crate::models::ModelTarget;
use serde::Deserialize;
use service_core::config as core_config;
use service_core::error::AppError;
use std::env;

/// API version pinned against the upstream chat-completions surface.
const DEFAULT_API_VERSION: &str = "2024-10-21";

#[derive(Debug, Clone, Deserialize)]
pub struct ChatConfig {
    #[serde(flatten)]
    pub common: core_config::Config,
    pub azure: AzureConfig,
    pub deployments: DeploymentConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AzureConfig {
    pub endpoint: String,
    pub api_key: String,
    pub api_version: String,
}

/// The two statically configured deployment targets.
#[derive(Debug, Clone, Deserialize)]
pub struct DeploymentConfig {
    pub primary: String,
    pub secondary: String,
}

impl DeploymentConfig {
    /// Resolve the deployment name for an abstract target.
    pub fn for_target(&self, target: ModelTarget) -> &str {
        match target {
            ModelTarget::Primary => &self.primary,
            ModelTarget::Secondary => &self.secondary,
        }
    }
}

impl ChatConfig {
    /// Load configuration from the environment, failing fast when a
    /// required setting is absent or blank.
    pub fn load() -> Result<Self, AppError> {
        let common_config = core_config::Config::load()?;

        Ok(ChatConfig {
            common: common_config,
            azure: AzureConfig {
                endpoint: get_env("AZURE_OPENAI_ENDPOINT", None)?,
                api_key: get_env("AZURE_OPENAI_API_KEY", None)?,
                api_version: get_env("AZURE_OPENAI_API_VERSION", Some(DEFAULT_API_VERSION))?,
            },
            deployments: DeploymentConfig {
                primary: get_env("AZURE_OPENAI_DEPLOYMENT_PRIMARY", None)?,
                secondary: get_env("AZURE_OPENAI_DEPLOYMENT_SECONDARY", None)?,
            },
        })
    }
}

/// A set-but-blank variable counts as missing; a blank deployment name
/// would produce a meaningless remote call later.
fn get_env(key: &str, default: Option<&str>) -> Result<String, AppError> {
    match env::var(key) {
        Ok(val) if !val.trim().is_empty() => Ok(val),
        _ => match default {
            Some(def) => Ok(def.to_string()),
            None => Err(AppError::ConfigError(anyhow::anyhow!(
                "{} is required but not set",
                key
            ))),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_env_missing_required_fails() {
        assert!(get_env("CHAT_TEST_UNSET_REQUIRED", None).is_err());
    }

    #[test]
    fn get_env_blank_required_fails() {
        env::set_var("CHAT_TEST_BLANK_REQUIRED", "   ");
        assert!(get_env("CHAT_TEST_BLANK_REQUIRED", None).is_err());
    }

    #[test]
    fn get_env_missing_with_default_falls_back() {
        let value = get_env("CHAT_TEST_UNSET_DEFAULTED", Some("fallback")).unwrap();
        assert_eq!(value, "fallback");
    }

    #[test]
    fn get_env_set_value_wins_over_default() {
        env::set_var("CHAT_TEST_SET_DEFAULTED", "explicit");
        let value = get_env("CHAT_TEST_SET_DEFAULTED", Some("fallback")).unwrap();
        assert_eq!(value, "explicit");
    }

    #[test]
    fn deployment_table_resolves_targets() {
        let deployments = DeploymentConfig {
            primary: "gpt-4o".to_string(),
            secondary: "grok-3".to_string(),
        };
        assert_eq!(deployments.for_target(ModelTarget::Primary), "gpt-4o");
        assert_eq!(deployments.for_target(ModelTarget::Secondary), "grok-3");
    }
}
