//! Error types for the credential lifecycle.
//!
//! | Kind | Origin | Surfaced as |
//! |------|--------|-------------|
//! | `EmptySubmission` | local, no network call | warning status |
//! | `Network` | transport failure | "Connection error" status |
//! | `Protocol` | malformed or unexpected JSON | error status |
//! | `ValidationRejected` | backend refused to run the checks | error status |
//! | `PersistFailure` | backend refused the save | error status |
//! | `DeletionDenied` | operator cancelled | nothing, the workflow aborts |
//!
//! None of these is fatal: every workflow leaves the client re-triable.

mod network;

pub use network::{classify_http_error, NetworkError};

use crate::domain::lifecycle::{LifecycleEvent, LifecycleState};

/// Result alias for lifecycle operations.
pub type LifecycleResult<T> = Result<T, LifecycleError>;

/// Errors produced by the credential lifecycle workflows.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LifecycleError {
    #[error("no credentials entered")]
    EmptySubmission,

    #[error("network error: {0}")]
    Network(#[from] NetworkError),

    #[error("unexpected response from {endpoint}: {message}")]
    Protocol { endpoint: String, message: String },

    #[error("validation rejected: {message}")]
    ValidationRejected { message: String },

    #[error("save failed: {message}")]
    PersistFailure { message: String },

    #[error("deletion cancelled by operator")]
    DeletionDenied,

    #[error("another credential operation is still in progress")]
    Busy,

    #[error("invalid lifecycle transition from {from:?} on {event:?}")]
    InvalidTransition {
        from: LifecycleState,
        event: LifecycleEvent,
    },
}

impl LifecycleError {
    /// Build a protocol error for `endpoint`.
    pub fn protocol(endpoint: &str, message: impl Into<String>) -> Self {
        LifecycleError::Protocol {
            endpoint: endpoint.to_string(),
            message: message.into(),
        }
    }

    /// Text shown in the status region for this error.
    pub fn status_message(&self) -> String {
        match self {
            LifecycleError::EmptySubmission => "⚠️ Please enter at least one credential".to_string(),
            LifecycleError::Network(e) => format!("❌ Connection error: {}", e),
            LifecycleError::Protocol { message, .. } => format!("❌ {}", message),
            LifecycleError::ValidationRejected { message }
            | LifecycleError::PersistFailure { message } => format!("❌ {}", message),
            LifecycleError::DeletionDenied => String::new(),
            LifecycleError::Busy => "⏳ Please wait for the current operation to finish".to_string(),
            LifecycleError::InvalidTransition { .. } => format!("❌ {}", self),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_network_error_converts_with_from() {
        let net = NetworkError::Timeout {
            url: "http://h/validate-credentials".to_string(),
            message: "operation timed out".to_string(),
        };
        let err: LifecycleError = net.into();
        assert!(matches!(err, LifecycleError::Network(_)));
        assert!(err.status_message().starts_with("❌ Connection error:"));
    }

    #[test]
    fn test_empty_submission_message_is_a_warning() {
        assert_eq!(
            LifecycleError::EmptySubmission.status_message(),
            "⚠️ Please enter at least one credential"
        );
    }

    #[test]
    fn test_deletion_denied_is_silent() {
        assert!(LifecycleError::DeletionDenied.status_message().is_empty());
        assert!(!LifecycleError::Busy.status_message().is_empty());
    }

    #[test]
    fn test_protocol_display_names_endpoint() {
        let err = LifecycleError::protocol("/save-credentials", "missing status field");
        assert_eq!(
            err.to_string(),
            "unexpected response from /save-credentials: missing status field"
        );
        assert_eq!(err.status_message(), "❌ missing status field");
    }
}
