//! Host startup errors.

use std::net::SocketAddr;

#[derive(Debug, thiserror::Error)]
pub enum HostError {
    /// `PORT` is set but is not a valid port number.
    #[error("invalid PORT value: {0:?}")]
    InvalidPort(String),

    /// The `[package.metadata.leptos]` section or `LEPTOS_*` overrides are unusable.
    #[error("leptos configuration: {0}")]
    Leptos(String),

    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("server failed: {0}")]
    Serve(#[from] std::io::Error),
}
