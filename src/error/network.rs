//! Network-related error types.
//!
//! [`NetworkError`] is the transport failure as seen by a workflow: it keeps
//! the URL that failed and offers an operator-facing message.

use std::fmt;

use crate::traits::HttpError;

/// Network-specific error variants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NetworkError {
    /// Connection to the backend failed.
    ConnectionFailed { url: String, message: String },

    /// Request timed out.
    Timeout { url: String, message: String },

    /// The configured base URL produced an unusable request URL.
    InvalidUrl { url: String, message: String },

    /// Generic network error.
    Other { url: String, message: String },
}

impl NetworkError {
    /// The URL of the request that failed.
    pub fn url(&self) -> &str {
        match self {
            NetworkError::ConnectionFailed { url, .. }
            | NetworkError::Timeout { url, .. }
            | NetworkError::InvalidUrl { url, .. }
            | NetworkError::Other { url, .. } => url,
        }
    }

    /// Get a user-friendly error message.
    pub fn user_message(&self) -> String {
        match self {
            NetworkError::ConnectionFailed { .. } => {
                "Unable to reach the dashboard backend. Is it running?".to_string()
            }
            NetworkError::Timeout { .. } => {
                "The backend did not answer in time. Please try again.".to_string()
            }
            NetworkError::InvalidUrl { url, .. } => {
                format!("The backend URL '{}' is not valid.", url)
            }
            NetworkError::Other { message, .. } => format!("Network error: {}", message),
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            NetworkError::ConnectionFailed { .. } => "E_NET_CONN",
            NetworkError::Timeout { .. } => "E_NET_TIMEOUT",
            NetworkError::InvalidUrl { .. } => "E_NET_URL",
            NetworkError::Other { .. } => "E_NET_OTHER",
        }
    }
}

impl fmt::Display for NetworkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NetworkError::ConnectionFailed { url, message } => {
                write!(f, "connection to '{}' failed: {}", url, message)
            }
            NetworkError::Timeout { url, message } => {
                write!(f, "request to '{}' timed out: {}", url, message)
            }
            NetworkError::InvalidUrl { url, message } => {
                write!(f, "invalid URL '{}': {}", url, message)
            }
            NetworkError::Other { url, message } => {
                write!(f, "request to '{}' failed: {}", url, message)
            }
        }
    }
}

impl std::error::Error for NetworkError {}

/// Classify a transport error for the request made to `url`.
pub fn classify_http_error(err: HttpError, url: &str) -> NetworkError {
    let url = url.to_string();
    match err {
        HttpError::ConnectionFailed(message) => NetworkError::ConnectionFailed { url, message },
        HttpError::Timeout(message) => NetworkError::Timeout { url, message },
        HttpError::InvalidUrl(message) => NetworkError::InvalidUrl { url, message },
        HttpError::Other(message) => NetworkError::Other { url, message },
    }
}
