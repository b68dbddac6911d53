//! # HTTP Server Module
//!
//! Axum transport over the airport store: route handlers, configuration,
//! generated API docs, and the combined server.

pub mod airport_routes;
pub mod config;
pub mod docs_routes;
pub mod health_routes;
pub mod server;

pub use airport_routes::AirportState;
pub use config::{ConfigError, ServerConfig};
pub use server::HttpServer;
