//! Error types for product API operations.

use thiserror::Error;

use crate::http::TransportError;

/// Errors that can occur while fetching or serving a product.
#[derive(Debug, Error)]
pub enum ProductError {
    /// The product identifier is missing or not a non-negative integer.
    #[error("Invalid product id: {0}")]
    Validation(String),

    /// The upstream could not be reached (network, timeout, cancellation).
    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    /// The upstream answered with a client or server error status.
    #[error("received {status} status code calling products API")]
    UpstreamStatus { status: u16 },

    /// The upstream body is not a well-formed product payload.
    #[error("Failed to decode product: {0}")]
    Decode(#[from] serde_json::Error),

    /// Configuration is missing or incomplete.
    #[error("Configuration error: {0}")]
    Config(String),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// The HTTP server could not bind or stopped with an I/O error.
    #[error("Server error: {0}")]
    Server(#[from] std::io::Error),
}

/// Coarse classification of a [`ProductError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    Transport,
    UpstreamStatus,
    Decode,
    Config,
    Server,
}

impl ProductError {
    /// The kind tag of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ProductError::Validation(_) => ErrorKind::Validation,
            ProductError::Transport(_) => ErrorKind::Transport,
            ProductError::UpstreamStatus { .. } => ErrorKind::UpstreamStatus,
            ProductError::Decode(_) => ErrorKind::Decode,
            ProductError::Config(_) | ProductError::Url(_) => ErrorKind::Config,
            ProductError::Server(_) => ErrorKind::Server,
        }
    }

    /// The upstream status code, if this error came from one.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            ProductError::UpstreamStatus { status } => Some(*status),
            _ => None,
        }
    }
}

/// Result type alias for product operations.
pub type Result<T> = core::result::Result<T, ProductError>;
