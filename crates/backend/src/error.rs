//! Server lifecycle error types.

use thiserror::Error;

/// Errors that can stop the server from starting or running.
#[derive(Debug, Error)]
pub enum ServerError {
    /// The listen address could not be bound.
    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    /// The accept loop failed while serving.
    #[error("Server error: {0}")]
    Serve(#[source] std::io::Error),
}

/// Convenience type alias for server results.
pub type Result<T> = std::result::Result<T, ServerError>;
