//! Server Implementation
//!
//! HTTP 服务器启动和管理

use crate::core::{Config, ServerState};
use crate::utils::AppError;
use axum::{Router, middleware};
use std::net::SocketAddr;
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;

/// HTTP 请求日志中间件
async fn log_request(
    request: http::Request<axum::body::Body>,
    next: middleware::Next,
) -> http::Response<axum::body::Body> {
    let method = request.method().clone();
    let uri = request.uri().clone();

    let response = next.run(request).await;

    let status = response.status();

    tracing::info!(target: "http_access", "{} {} {}", method, uri, status);

    response
}

/// Build the Axum router (without state)
pub fn build_app() -> Router<ServerState> {
    Router::<ServerState>::new()
        // Core APIs
        .merge(crate::api::health::router())
        .merge(crate::api::images::router())
        // Intake + event APIs
        .merge(crate::api::inquiries::router())
        .merge(crate::api::events::router())
        // Catalog APIs
        .merge(crate::api::vendors::router())
}

/// Build the full application with state and middleware attached
pub fn build_app_with_state(state: ServerState) -> Router {
    build_app()
        .with_state(state)
        // Tower HTTP 中间件
        .layer(CorsLayer::permissive())
        .layer(CompressionLayer::new())
        // HTTP 请求日志中间件
        .layer(middleware::from_fn(log_request))
}

/// HTTP Server
pub struct Server {
    config: Config,
    state: Option<ServerState>,
}

impl Server {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            state: None,
        }
    }

    /// Create server with existing state (for sharing with tests/tools)
    pub fn with_state(config: Config, state: ServerState) -> Self {
        Self {
            config,
            state: Some(state),
        }
    }

    pub async fn run(&self) -> Result<(), AppError> {
        let state = match &self.state {
            Some(s) => s.clone(),
            None => ServerState::initialize(&self.config).await?,
        };

        let app = build_app_with_state(state);

        let addr = SocketAddr::from(([0, 0, 0, 0], self.config.http_port));
        tracing::info!("🌸 Bloom server listening on {}", addr);

        let handle = axum_server::Handle::new();

        // Graceful shutdown on ctrl-c (10s grace period)
        let handle_clone = handle.clone();
        tokio::spawn(async move {
            let _ = tokio::signal::ctrl_c().await;
            tracing::info!("Shutting down...");
            handle_clone.graceful_shutdown(Some(std::time::Duration::from_secs(10)));
        });

        axum_server::bind(addr)
            .handle(handle)
            .serve(app.into_make_service())
            .await
            .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

        Ok(())
    }
}
