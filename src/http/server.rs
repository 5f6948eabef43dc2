//! HTTP server startup logic.

use std::io;
use std::net::SocketAddr;

use axum::Router;
use tokio::net::TcpListener;

use crate::config::HttpServerConfig;

/// Server startup error
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Invalid bind address '{addr}': {source}")]
    Addr {
        addr: String,
        source: std::net::AddrParseError,
    },

    #[error("Failed to bind {addr}: {source}")]
    Bind { addr: SocketAddr, source: io::Error },

    #[error("Server error: {0}")]
    Serve(#[from] io::Error),
}

/// A bound HTTP server, holding the listening socket.
///
/// Construction is two-step: [`HttpServer::bind`] reserves the socket and
/// fails fast if the address is unavailable, after which [`HttpServer::serve`]
/// runs the accept loop until process termination. The split lets tests bind
/// port 0 and read the ephemeral address before serving.
#[derive(Debug)]
pub struct HttpServer {
    listener: TcpListener,
    addr: SocketAddr,
}

impl HttpServer {
    /// Bind the configured address.
    ///
    /// On success the socket is listening and the startup line is written
    /// exactly once. A bind failure (port in use, permission denied, invalid
    /// address) is returned to the caller; there is no retry and no fallback
    /// port.
    pub async fn bind(config: &HttpServerConfig) -> Result<Self, ServerError> {
        let addr: SocketAddr = format!("{}:{}", config.host, config.port)
            .parse()
            .map_err(|source| ServerError::Addr {
                addr: format!("{}:{}", config.host, config.port),
                source,
            })?;

        let listener = TcpListener::bind(addr)
            .await
            .map_err(|source| ServerError::Bind { addr, source })?;

        // Port 0 asks the OS for an ephemeral port; report the real one.
        let addr = listener.local_addr().map_err(ServerError::Serve)?;
        tracing::info!("Running on http://{}", addr);

        Ok(Self { listener, addr })
    }

    /// The address the listener is actually bound to.
    pub fn local_addr(&self) -> SocketAddr {
        self.addr
    }

    /// Serve the router on the bound socket.
    ///
    /// Connection handling is delegated entirely to axum/tokio. This future
    /// only resolves on a fatal server error; in normal operation the process
    /// is terminated externally while it is pending.
    pub async fn serve(self, app: Router) -> Result<(), ServerError> {
        axum::serve(self.listener, app).await?;
        Ok(())
    }
}
