use chat_service::config::{AzureConfig, ChatConfig, DeploymentConfig};
use chat_service::services::providers::ChatProvider;
use chat_service::startup::Application;
use service_core::config::Config as CoreConfig;
use std::sync::Arc;

pub const TEST_ENDPOINT: &str = "https://example.openai.azure.com";
pub const PRIMARY_DEPLOYMENT: &str = "gpt-test";
pub const SECONDARY_DEPLOYMENT: &str = "grok-test";

pub struct TestApp {
    pub address: String,
    pub port: u16,
}

impl TestApp {
    /// Spawn the app on a random port with the given provider.
    pub async fn spawn(provider: Arc<dyn ChatProvider>) -> Self {
        let config = ChatConfig {
            common: CoreConfig { port: 0 },
            azure: AzureConfig {
                endpoint: TEST_ENDPOINT.to_string(),
                api_key: "test-api-key".to_string(),
                api_version: "2024-10-21".to_string(),
            },
            deployments: DeploymentConfig {
                primary: PRIMARY_DEPLOYMENT.to_string(),
                secondary: SECONDARY_DEPLOYMENT.to_string(),
            },
        };

        let app = Application::with_provider(config, provider)
            .await
            .expect("Failed to build test application");

        let port = app.port();
        let address = format!("http://127.0.0.1:{}", port);

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        // Wait for the server to be ready by polling the health endpoint
        let client = reqwest::Client::new();
        let health_url = format!("{}/api/health", address);
        for _ in 0..50 {
            if client.get(&health_url).send().await.is_ok() {
                break;
            }
            tokio::time::sleep(std::time::Duration::from_millis(20)).await;
        }

        TestApp { address, port }
    }
}
