//! Observability infrastructure for labmock
//!
//! Structured logging via `tracing`, with pretty, JSON and compact output.
//!
//! # Quick Start
//!
//! ```ignore
//! use observability::{init_logging, LogFormat};
//!
//! init_logging("labmock", LogFormat::Pretty, "info")?;
//! ```

pub mod logging;

pub use logging::{check_filter, init_logging, LogFormat};
