//! # HTTP Server
//!
//! Combines the endpoint routers, CORS, and request tracing into the
//! served application.

use std::io;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::store::AirportStore;

use super::airport_routes::{airport_routes, AirportState};
use super::config::ServerConfig;
use super::docs_routes::docs_routes;
use super::health_routes::health_routes;

/// HTTP server over an airport store
pub struct HttpServer {
    config: ServerConfig,
    router: Router,
}

impl HttpServer {
    /// Create a server over the given store with default configuration
    pub fn new(store: AirportStore) -> Self {
        Self::with_config(ServerConfig::default(), store)
    }

    /// Create a server with custom configuration
    pub fn with_config(config: ServerConfig, store: AirportStore) -> Self {
        let router = Self::build_router(&config, store);
        Self { config, router }
    }

    /// Build the combined router with all endpoints
    fn build_router(config: &ServerConfig, store: AirportStore) -> Router {
        let airport_state = Arc::new(AirportState::new(store));

        // Permissive CORS unless origins are configured
        let cors = if config.cors_origins.is_empty() {
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

        Router::new()
            .merge(health_routes())
            .merge(docs_routes())
            .merge(airport_routes(airport_state))
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

    /// Start the HTTP server (async)
    pub async fn start(self) -> Result<(), io::Error> {
        let addr: SocketAddr = self
            .config
            .socket_addr()
            .parse()
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;

        tracing::info!(%addr, "starting aerodex HTTP server");
        tracing::info!("airport API at http://{}/airports", addr);
        tracing::info!("API docs at http://{}/api-docs", addr);
        tracing::info!("health check at http://{}/health", addr);

        let listener = TcpListener::bind(addr).await?;
        axum::serve(listener, self.router).await?;

        Ok(())
    }
}
