//! Error types for the remote fetch client.

use thiserror::Error;

/// Errors that can occur while fetching from the remote catalog.
#[derive(Error, Debug)]
pub enum ClientError {
    /// Response status outside the success range
    #[error("remote error: status {status} from {url}")]
    Remote {
        /// HTTP status code
        status: u16,
        /// Requested URL
        url: String,
    },

    /// Response body is not the expected JSON
    #[error("failed to parse response from {url}: {message}")]
    Parse {
        /// Requested URL
        url: String,
        /// Parser message
        message: String,
    },

    /// Network error
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Internal error
    #[error("internal error: {0}")]
    Internal(String),
}

impl ClientError {
    /// HTTP status carried by a [`ClientError::Remote`].
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Remote { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Message shown in place of the list or detail, e.g. `Error 404`.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Remote { status, .. } => format!("Error {status}"),
            Self::Parse { .. } => "Error parsing response".to_string(),
            Self::Network(_) | Self::Internal(_) => "Error fetching data".to_string(),
        }
    }
}

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;
