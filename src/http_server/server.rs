//! # HTTP Server
//!
//! Builds the quote router with its middleware and serves it.

use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::config::HttpServerConfig;
use super::quote_routes::{quote_routes, QuoteState};
use crate::quotes::QuoteStore;

/// HTTP Server for the quote API
pub struct HttpServer {
    config: HttpServerConfig,
    store: Arc<QuoteStore>,
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server with default configuration
    pub fn new() -> Self {
        Self::with_config(HttpServerConfig::default())
    }

    /// Create a new HTTP server with custom configuration
    pub fn with_config(config: HttpServerConfig) -> Self {
        let store = match config.seed {
            Some(seed) => QuoteStore::with_seed(seed),
            None => QuoteStore::new(),
        };
        Self::with_store(config, Arc::new(store))
    }

    /// Create a new HTTP server around an existing store
    pub fn with_store(config: HttpServerConfig, store: Arc<QuoteStore>) -> Self {
        let router = Self::build_router(&config, Arc::clone(&store));
        Self {
            config,
            store,
            router,
        }
    }

    /// Build the router with all endpoints and middleware
    fn build_router(config: &HttpServerConfig, store: Arc<QuoteStore>) -> Router {
        let quote_state = Arc::new(QuoteState::with_store(store));

        let cors = if config.cors_origins.is_empty() {
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        } else {
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

        quote_routes(quote_state).layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the backing store
    pub fn store(&self) -> Arc<QuoteStore> {
        Arc::clone(&self.store)
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Bind and serve until Ctrl-C
    pub async fn start(self) -> Result<(), std::io::Error> {
        let addr = self
            .config
            .bind_addr()
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string()))?;

        let listener = TcpListener::bind(addr).await?;
        tracing::info!(%addr, "quote service listening");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("quote service stopped");
        Ok(())
    }
}

impl Default for HttpServer {
    fn default() -> Self {
        Self::new()
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
