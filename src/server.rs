// ABOUTME: HTTP server assembly binding routes, static assets, and middleware
// ABOUTME: Owns the listen/serve lifecycle for the single-port API
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 DiabEat

//! HTTP server assembly
//!
//! The router is an explicit value built from the configuration at startup:
//! API routes first, with the static intake page as the fallback service so
//! `GET /` serves `index.html`.

use crate::config::environment::ServerConfig;
use crate::routes::{HealthRoutes, RecommendationRoutes};
use anyhow::{Context, Result};
use axum::Router;
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};
use tracing::info;

/// HTTP server for the recommendation API
pub struct HttpServer {
    config: Arc<ServerConfig>,
}

impl HttpServer {
    /// Create a new server from loaded configuration
    #[must_use]
    pub fn new(config: Arc<ServerConfig>) -> Self {
        Self { config }
    }

    /// Build the application router
    ///
    /// Exposed separately from [`run`](Self::run) so integration tests can
    /// drive the router without binding a socket.
    #[must_use]
    pub fn router(&self) -> Router {
        // The intake page is a self-contained single-page client; permissive
        // CORS keeps programmatic callers simple too.
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);

        Router::new()
            .merge(HealthRoutes::routes())
            .merge(RecommendationRoutes::routes())
            .fallback_service(ServeDir::new(&self.config.static_dir))
            .layer(TraceLayer::new_for_http())
            .layer(cors)
    }

    /// Bind and serve until the process is stopped
    ///
    /// # Errors
    ///
    /// Returns an error if the listener fails to bind or the server
    /// terminates unexpectedly.
    pub async fn run(self) -> Result<()> {
        let addr = format!("{}:{}", self.config.host, self.config.http_port);
        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .with_context(|| format!("failed to bind {addr}"))?;

        info!("HTTP server listening on http://{}", addr);

        axum::serve(listener, self.router())
            .await
            .context("HTTP server terminated")?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::environment::{Environment, LogLevel};
    use std::path::PathBuf;

    #[test]
    fn test_router_builds_from_config() {
        let config = ServerConfig {
            http_port: 8080,
            host: "127.0.0.1".into(),
            static_dir: PathBuf::from("static"),
            log_level: LogLevel::Info,
            environment: Environment::Testing,
        };

        // Router construction must not panic (route collisions do).
        let server = HttpServer::new(Arc::new(config));
        let _router = server.router();
    }
}
