//! Server configuration
//!
//! This module provides the bind configuration for the mock HTTP service
//! and its default port assignment.

use crate::error::{Result, ServerError};
use std::net::SocketAddr;

/// Default bind settings
pub mod ports {
    /// Default HTTP port of the mock instrument service
    pub const DEFAULT_HTTP: u16 = 5000;

    /// Default host (all interfaces)
    pub const DEFAULT_HOST: &str = "0.0.0.0";
}

/// HTTP server bind configuration
///
/// # Example
///
/// ```
/// use server::config::ServerConfig;
///
/// // All interfaces on the default port
/// let config = ServerConfig::default();
///
/// // Loopback only, ephemeral port
/// let config = ServerConfig::new("127.0.0.1", 0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Host to bind to (e.g., "0.0.0.0" or "127.0.0.1")
    pub host: String,
    /// HTTP port, 0 asks the OS for an ephemeral port
    pub http_port: u16,
}

impl ServerConfig {
    /// Create a new server config
    pub fn new(host: impl Into<String>, http_port: u16) -> Self {
        Self {
            host: host.into(),
            http_port,
        }
    }

    /// Get the HTTP socket address
    pub fn http_addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.host, self.http_port)
            .parse()
            .map_err(|_| ServerError::InvalidAddress(format!("{}:{}", self.host, self.http_port)))
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self::new(ports::DEFAULT_HOST, ports::DEFAULT_HTTP)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_config_default() {
        let config = ServerConfig::default();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.http_port, 5000);
        assert_eq!(config.http_addr().unwrap().to_string(), "0.0.0.0:5000");
    }

    #[test]
    fn test_server_config_invalid_host() {
        let config = ServerConfig::new("not a host", 5000);
        assert!(matches!(
            config.http_addr(),
            Err(ServerError::InvalidAddress(addr)) if addr == "not a host:5000"
        ));
    }
}
