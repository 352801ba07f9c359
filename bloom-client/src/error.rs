//! Client error types

use thiserror::Error;

/// Errors surfaced by the wizard client
#[derive(Debug, Error)]
pub enum ClientError {
    /// Configuration problem (bad base URL, missing event id)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Transport-level failure (network, TLS)
    #[error("Network error: {0}")]
    Network(String),

    /// The server rejected the save (4xx/5xx with an error envelope)
    #[error("Save rejected ({code}): {message}")]
    Rejected { code: u16, message: String },

    /// Response body could not be decoded
    #[error("Protocol error: {0}")]
    Protocol(String),
}
