//! Port validation utilities
//!
//! Checking a port before binding is racy: another process can take the port
//! in between. These checks give early feedback; the actual bind decides.

use tokio::net::TcpListener;
use tracing::{debug, error, info};

use crate::config::ServerConfig;
use crate::error::{Result, ServerError};

/// Validate that the configured HTTP port is available
pub async fn validate_port_available(config: &ServerConfig) -> Result<()> {
    let addr = config.http_addr()?;
    debug!(%addr, "Checking HTTP port");

    match TcpListener::bind(addr).await {
        Ok(listener) => {
            let local_addr = listener
                .local_addr()
                .map_err(|e| ServerError::bind(addr.to_string(), e))?;

            // Release the port for the real bind
            drop(listener);

            info!("HTTP port {} is available ({})", config.http_port, local_addr);
            Ok(())
        }
        Err(e) => {
            error!("HTTP port {} is NOT available: {}", config.http_port, e);
            Err(ServerError::port_in_use(config.http_port, e.to_string()))
        }
    }
}
