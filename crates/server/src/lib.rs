//! HTTP adapter that serves sitemap documents.
//!
//! Each route runs a generator and renders its document with
//! [`sitemap_core::generate_document`]. A successful render is returned with
//! the format's MIME type; any failure becomes an empty `500` response.

pub mod config;
pub mod demo;
pub mod routes;

pub use config::{ConfigError, ServerConfig};
pub use routes::{Generator, document_response, document_route, router};

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Sets the logging level from `RUST_LOG`, falling back to `default_log_settings`.
pub fn setup_logging(default_log_settings: &str) {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| default_log_settings.into()))
        .with(tracing_subscriber::fmt::layer())
        .init()
}
