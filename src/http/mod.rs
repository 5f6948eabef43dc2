//! HTTP server module.
//!
//! Owns the listening socket lifecycle: bind the configured address, log the
//! startup line, and serve until the process is terminated. There is no
//! graceful shutdown sequence; an external signal is the only way to stop.

mod server;

pub use server::{HttpServer, ServerError};
