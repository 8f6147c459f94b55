//! Error types shared by the signer, the spot data loader and the store.

use reqwest::StatusCode;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// The MAC provider rejected the signing key.
    #[error("cryptographic operation failed: {0}")]
    Crypto(String),

    /// Connection, DNS, TLS or body read failure.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Response body was not valid JSON.
    #[error("failed to parse response body: {0}")]
    Parse(#[from] serde_json::Error),

    /// Response arrived with a non-success status.
    #[error("failed to load spot data: HTTP {status}")]
    ApiStatus { status: StatusCode },

    #[error("invalid configuration: {0}")]
    Config(String),
}
