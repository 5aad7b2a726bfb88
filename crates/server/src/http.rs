//! HTTP server implementation using Axum
//!
//! [`HttpServer`] owns the bind configuration and the Axum application built
//! from a [`RouteTable`]. It runs until a [`CancellationToken`] is cancelled,
//! either by the caller ([`HttpServer::spawn`]) or by Ctrl+C
//! ([`HttpServer::run_until_ctrl_c`]).

use axum::Router;
use parking_lot::RwLock;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{error, info, warn};

use crate::app::build_router;
use crate::config::ServerConfig;
use crate::error::{Result, ServerError};
use crate::routing::RouteTable;

/// HTTP server for a route table
///
/// Clones share the running state, so a clone kept before [`spawn`](Self::spawn)
/// can observe the bound address.
///
/// ```ignore
/// let server = HttpServer::from_table(ServerConfig::default(), table);
/// server.run_until_ctrl_c().await?;
/// ```
#[derive(Clone)]
pub struct HttpServer {
    config: ServerConfig,
    router: Router,
    running: Arc<AtomicBool>,
    bound_addr: Arc<RwLock<Option<SocketAddr>>>,
}

impl HttpServer {
    /// Create a server for an already built Axum application
    pub fn new(config: ServerConfig, router: Router) -> Self {
        Self {
            config,
            router,
            running: Arc::new(AtomicBool::new(false)),
            bound_addr: Arc::new(RwLock::new(None)),
        }
    }

    /// Create a server dispatching through a route table
    pub fn from_table(config: ServerConfig, table: RouteTable) -> Self {
        if table.is_empty() {
            warn!("Route table is empty; every request will get 404");
        } else {
            info!(routes = table.len(), "Route table loaded");
        }
        Self::new(config, build_router(table))
    }

    /// Address the listener is bound to, while running
    pub fn address(&self) -> Option<SocketAddr> {
        *self.bound_addr.read()
    }

    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }

    /// Serve until `shutdown` is cancelled, then drain in-flight requests
    pub async fn run(&self, shutdown: CancellationToken) -> Result<()> {
        let addr = self.config.http_addr()?;

        let listener = TcpListener::bind(&addr)
            .await
            .map_err(|e| ServerError::bind(addr.to_string(), e))?;
        let local_addr = listener.local_addr().map_err(ServerError::Io)?;

        *self.bound_addr.write() = Some(local_addr);
        self.running.store(true, Ordering::SeqCst);
        info!(%local_addr, "HTTP server listening");

        let result = axum::serve(listener, self.router.clone())
            .with_graceful_shutdown(async move {
                shutdown.cancelled().await;
                info!("HTTP server received shutdown signal");
            })
            .await;

        self.running.store(false, Ordering::SeqCst);
        *self.bound_addr.write() = None;

        match result {
            Ok(()) => {
                info!("HTTP server shutdown complete");
                Ok(())
            }
            Err(e) => {
                error!(%e, "HTTP server error");
                Err(ServerError::Io(e))
            }
        }
    }

    /// Run on a background task; cancel the returned token to stop it
    pub fn spawn(self) -> (JoinHandle<Result<()>>, CancellationToken) {
        let token = CancellationToken::new();
        let shutdown = token.clone();
        let handle = tokio::spawn(async move { self.run(shutdown).await });
        (handle, token)
    }

    /// Serve until Ctrl+C (SIGINT)
    pub async fn run_until_ctrl_c(self) -> Result<()> {
        let token = CancellationToken::new();
        let watcher = cancel_on_ctrl_c(token.clone());

        let result = self.run(token).await;
        watcher.abort();
        result
    }
}

fn cancel_on_ctrl_c(token: CancellationToken) -> JoinHandle<()> {
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                info!("Received Ctrl+C, shutting down");
                token.cancel();
            }
            Err(e) => warn!(%e, "Unable to listen for Ctrl+C"),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{Method, StatusCode};
    use axum::response::IntoResponse;
    use std::time::Duration;

    fn ephemeral() -> ServerConfig {
        ServerConfig::new("127.0.0.1", 0)
    }

    #[tokio::test]
    async fn test_spawned_server_stops_on_cancel() {
        let table = RouteTable::new()
            .route(Method::GET, "/ping", |_| StatusCode::NO_CONTENT.into_response())
            .unwrap();
        let server = HttpServer::from_table(ephemeral(), table);
        let probe = server.clone();
        assert!(!probe.is_running());

        let (handle, token) = server.spawn();

        tokio::time::sleep(Duration::from_millis(100)).await;
        assert!(probe.is_running());
        assert_ne!(probe.address().unwrap().port(), 0);

        token.cancel();

        let result = tokio::time::timeout(Duration::from_secs(5), handle)
            .await
            .expect("server should stop within timeout");
        assert!(result.unwrap().is_ok());
        assert!(!probe.is_running());
        assert!(probe.address().is_none());
    }

    #[tokio::test]
    async fn test_bind_conflict_is_reported() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();

        let server = HttpServer::from_table(ServerConfig::new("127.0.0.1", port), RouteTable::new());
        let result = server.run(CancellationToken::new()).await;

        assert!(matches!(result, Err(ServerError::BindError { .. })));
        assert!(!server.is_running());
    }

    #[tokio::test]
    async fn test_invalid_host_fails_before_binding() {
        let server = HttpServer::from_table(ServerConfig::new("not a host", 0), RouteTable::new());
        let result = server.run(CancellationToken::new()).await;

        assert!(matches!(result, Err(ServerError::InvalidAddress(_))));
        assert!(server.address().is_none());
    }
}
