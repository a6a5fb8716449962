//! # Directory-Listing File Server
//!
//! An HTTP server that serves the files below a root directory and
//! renders directory listings as HTML, with an inline
//! `<audio controls preload="none">` player for every `.wav` entry so
//! recordings can be auditioned straight from the browser.
//!
//! ## Behavior
//!
//! | Request | Response |
//! |---------|----------|
//! | directory | HTML listing with audio players for `.wav` files |
//! | file | streamed bytes with an extension-derived content type |
//! | missing path, traversal attempt, unreadable directory | 404 |
//!
//! The server binds `0.0.0.0`, making it reachable from other machines
//! on the local network — the usual workflow is auditioning results on
//! a laptop while they are produced on a workstation.

mod listing;
mod router;

pub use listing::{Entry, render_listing};
pub use router::{content_type, router};

use std::net::SocketAddr;
use std::path::PathBuf;

/// Default listening port.
pub const DEFAULT_PORT: u16 = 8080;

/// Server configuration.
#[derive(Debug, Clone)]
pub struct ServeConfig {
    /// Directory to serve.
    pub root: PathBuf,
    /// TCP port to listen on.
    pub port: u16,
}

impl ServeConfig {
    /// Configuration serving `root` on the default port.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            port: DEFAULT_PORT,
        }
    }
}

/// Error types for the file server.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The listening socket could not be bound.
    #[error("failed to bind {addr}: {source}")]
    Bind {
        /// The address that could not be bound.
        addr: SocketAddr,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The server loop terminated with an error.
    #[error("server error: {0}")]
    Serve(#[source] std::io::Error),
}

/// Convenience result type for server operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Run the file server until terminated.
///
/// Binds `0.0.0.0:port`, logs the listen address, and serves the
/// directory listing app forever.
pub async fn serve(config: ServeConfig) -> Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| Error::Bind { addr, source })?;

    tracing::info!("listening on http://{addr}, serving {}", config.root.display());

    axum::serve(listener, router(config.root))
        .await
        .map_err(Error::Serve)
}
