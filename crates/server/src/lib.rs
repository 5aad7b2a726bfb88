//! Server infrastructure for labmock
//!
//! This crate provides the HTTP side of the mock instrument service: an
//! explicit route table, the Axum adapter that dispatches through it, and the
//! HTTP server with graceful shutdown.
//!
//! # Architecture
//!
//! Routes are registered once at startup into a [`RouteTable`] and matched in
//! registration order. [`build_router`] turns the table into an Axum router
//! whose single fallback handler consults the table, so unmatched paths and
//! methods get deterministic `404`/`405` responses.
//!
//! [`HttpServer`] runs the application until a `CancellationToken` from
//! `tokio_util` is cancelled, either through `spawn()` or on Ctrl+C with
//! `run_until_ctrl_c()`.
//!
//! # Quick Start
//!
//! ```ignore
//! use server::{HttpServer, RouteTable, ServerConfig};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let table = RouteTable::new().route(Method::GET, "/ping/{id}", ping)?;
//!     let server = HttpServer::from_table(ServerConfig::default(), table);
//!
//!     server.run_until_ctrl_c().await?;
//!     Ok(())
//! }
//! ```
//!
//! # Modules
//!
//! - [`config`] - Bind configuration and default port
//! - [`routing`] - Route table and path templates
//! - [`app`] - Axum adapter for the route table
//! - [`http`] - HTTP server lifecycle
//! - [`port_validator`] - Pre-bind port checks

// Core modules
pub mod config;
pub mod error;

// Routing and HTTP
pub mod app;
pub mod http;
pub mod port_validator;
pub mod routing;

// Re-exports for convenience
pub use app::build_router;
pub use config::{ports, ServerConfig};
pub use error::{Result, ServerError};
pub use http::HttpServer;
pub use port_validator::validate_port_available;
pub use routing::{PathParams, RouteMatch, RouteTable};
