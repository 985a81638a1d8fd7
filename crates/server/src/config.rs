use std::net::{AddrParseError, SocketAddr};
use std::num::ParseIntError;

use thiserror::Error;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid port: {0}")]
    InvalidPort(#[from] ParseIntError),

    #[error("Invalid hostname: {0}")]
    InvalidHostname(#[from] AddrParseError),
}

/// Listen address plus the public base URL written into demo documents.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub addr: SocketAddr,
    pub base_url: String,
}

impl ServerConfig {
    /// Reads `HOST`, `PORT` and `SITEMAP_BASE_URL`.
    ///
    /// Defaults to `127.0.0.1:8080` and `http://localhost:<port>`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(
            std::env::var("HOST").ok(),
            std::env::var("PORT").ok(),
            std::env::var("SITEMAP_BASE_URL").ok(),
        )
    }

    pub fn from_vars(
        host: Option<String>, port: Option<String>, base_url: Option<String>,
    ) -> Result<Self, ConfigError> {
        let host = host.unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = match port {
            Some(p) => p.parse::<u16>()?,
            None => DEFAULT_PORT,
        };
        let addr = format!("{}:{}", host, port).parse::<SocketAddr>()?;
        let base_url = base_url
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or_else(|| format!("http://localhost:{}", port));

        Ok(Self { addr, base_url })
    }
}
