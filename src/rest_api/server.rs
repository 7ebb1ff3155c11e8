//! # REST API HTTP Server
//!
//! Axum-based HTTP server wrapping the book routes with CORS and
//! request tracing.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::repository::BookRepository;

use super::config::HttpServerConfig;
use super::routes::{book_routes, AppState};

/// HTTP server for the book API.
pub struct RestServer {
    config: HttpServerConfig,
    router: Router,
}

impl RestServer {
    /// Create a server over the given repository.
    pub fn new(repo: Arc<dyn BookRepository>, config: HttpServerConfig) -> Self {
        let router = Self::build_router(repo, &config);
        Self { config, router }
    }

    fn build_router(repo: Arc<dyn BookRepository>, config: &HttpServerConfig) -> Router {
        let state = Arc::new(AppState::new(repo));

        let cors = if config.cors_origins.is_empty() {
            // If no origins configured, use permissive for development
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        } else {
            use tower_http::cors::AllowOrigin;
            let origins: Vec<_> = config
                .cors_origins
                .iter()
                .filter_map(|s| s.parse().ok())
                .collect();

            CorsLayer::new()
                .allow_origin(AllowOrigin::list(origins))
                .allow_methods(Any)
                .allow_headers(Any)
        };

        book_routes(state)
            .layer(cors)
            .layer(TraceLayer::new_for_http())
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Bind and serve until the process exits.
    pub async fn start(self) -> Result<(), std::io::Error> {
        let addr: SocketAddr = self.config.socket_addr().parse().map_err(|e| {
            std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("invalid socket address {}: {}", self.config.socket_addr(), e),
            )
        })?;

        info!(%addr, "starting book API server");
        info!("endpoints: /api/books, /api/books/{{id}}, /health");

        let listener = TcpListener::bind(addr).await?;
        axum::serve(listener, self.router).await?;

        Ok(())
    }
}
