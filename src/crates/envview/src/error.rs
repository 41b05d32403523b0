//! Error types for the envview service.

use std::net::SocketAddr;
use thiserror::Error;

/// Result type for service operations.
pub type Result<T> = std::result::Result<T, ServerError>;

/// Errors that can occur while configuring or running the service.
#[derive(Debug, Error)]
pub enum ServerError {
    /// Invalid configuration value.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Configuration file could not be read.
    #[error("Failed to read config file: {0}")]
    ConfigRead(#[source] std::io::Error),

    /// Configuration file is not valid TOML.
    #[error("Failed to parse TOML: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// The listening socket could not be bound.
    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    /// The server stopped with an I/O error.
    #[error("Server error: {0}")]
    Serve(#[source] std::io::Error),

    /// The structured rendering failed.
    #[error("Render error: {0}")]
    Render(#[from] envtree::EnvTreeError),
}
