//! Application startup and lifecycle management.

use crate::config::ChatConfig;
use crate::handlers;
use crate::services::providers::azure::{AzureChatProvider, AzureOpenAiConfig};
use crate::services::providers::ChatProvider;
use axum::{
    routing::{get, post},
    Router,
};
use service_core::error::AppError;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Shared application state. Read-only after startup; safely shared by
/// any number of in-flight requests.
#[derive(Clone)]
pub struct AppState {
    pub config: ChatConfig,
    pub provider: Arc<dyn ChatProvider>,
}

/// Application container for managing server lifecycle.
pub struct Application {
    port: u16,
    listener: TcpListener,
    state: AppState,
}

impl Application {
    /// Build the application with the given configuration, wiring the
    /// Azure OpenAI provider.
    pub async fn build(config: ChatConfig) -> Result<Self, AppError> {
        let provider = AzureChatProvider::new(AzureOpenAiConfig {
            endpoint: config.azure.endpoint.clone(),
            api_key: config.azure.api_key.clone(),
            api_version: config.azure.api_version.clone(),
        });

        tracing::info!(
            endpoint = %config.azure.endpoint,
            primary = %config.deployments.primary,
            secondary = %config.deployments.secondary,
            "Initialized Azure OpenAI chat provider"
        );

        Self::with_provider(config, Arc::new(provider)).await
    }

    /// Build with an injected provider; integration tests pass mocks here.
    pub async fn with_provider(
        config: ChatConfig,
        provider: Arc<dyn ChatProvider>,
    ) -> Result<Self, AppError> {
        let state = AppState {
            config: config.clone(),
            provider,
        };

        // Bind the listener (port 0 = random port for testing)
        let addr = SocketAddr::from(([0, 0, 0, 0], config.common.port));
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!("chat-service listening on port {}", port);

        Ok(Self {
            port,
            listener,
            state,
        })
    }

    /// Get the port the server is listening on.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Run the application until stopped.
    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        let router = build_router(self.state);
        axum::serve(self.listener, router).await
    }
}

/// Build the HTTP router: the gateway routes plus CORS and tracing layers.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/chat", post(handlers::chat))
        .route("/api/chat/both", post(handlers::chat_both))
        .route("/api/health", get(handlers::health_check))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
