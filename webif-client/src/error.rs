//! Error types for the web interface client

use thiserror::Error;

/// Errors that can occur while talking to the web interface
#[derive(Debug, Error)]
pub enum WebifError {
    /// Connection refused, DNS failure, timeout or any other transport problem
    #[error("Network/HTTP error: {0}")]
    Network(String),

    /// The box answered with something other than HTTP 200
    #[error("HTTP status {code}")]
    Status { code: u16, body: String },

    /// The response body could not be read
    #[error("Failed to read response body: {0}")]
    Io(String),
}

impl WebifError {
    /// HTTP status code, if the box answered at all
    pub fn status_code(&self) -> Option<u16> {
        match self {
            WebifError::Status { code, .. } => Some(*code),
            _ => None,
        }
    }
}
