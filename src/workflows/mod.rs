//! Credential workflows.
//!
//! Each workflow talks to the backend through [`BackendClient`] and reports
//! progress as [`AppMessage`]s on the application channel. The application
//! state applies those messages in arrival order; workflows never touch it
//! directly.
//!
//! [`BackendClient`]: crate::api::BackendClient
//! [`AppMessage`]: crate::app::AppMessage

pub mod deletion;
pub mod persistence;
pub mod reconciler;
pub mod submit;
pub mod validation;

use std::time::Duration;
use tokio::sync::mpsc;

use crate::app::AppMessage;
use crate::domain::{LifecycleEvent, OperationStatus};
use crate::error::LifecycleError;

pub use deletion::{DeleteResult, PendingConfirmation};
pub use reconciler::{ReconcilerHandle, StatusMap};
pub use submit::SubmitOutcome;

/// How long a save success message stays up.
pub const SAVE_SUCCESS_CLEAR: Duration = Duration::from_secs(5);

/// How long a delete success message stays up.
pub const DELETE_SUCCESS_CLEAR: Duration = Duration::from_secs(3);

/// A status to show, with an optional auto-clear delay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusUpdate {
    pub status: OperationStatus,
    pub clear_after: Option<Duration>,
}

impl StatusUpdate {
    /// Shown until replaced.
    pub fn sticky(status: OperationStatus) -> Self {
        Self {
            status,
            clear_after: None,
        }
    }

    /// Cleared after `delay`.
    pub fn timed(status: OperationStatus, delay: Duration) -> Self {
        Self {
            status,
            clear_after: Some(delay),
        }
    }

    /// Error status for `err`, shown until replaced.
    pub fn failure(err: &LifecycleError) -> Self {
        Self::sticky(OperationStatus::error(err.status_message()))
    }
}

/// Thin wrapper over the application channel used by workflows.
///
/// Sends are fire-and-forget: a closed channel means the UI is shutting
/// down and there is no one left to tell.
#[derive(Debug, Clone)]
pub struct EventSink {
    tx: mpsc::UnboundedSender<AppMessage>,
}

impl EventSink {
    pub fn new(tx: mpsc::UnboundedSender<AppMessage>) -> Self {
        Self { tx }
    }

    pub fn send(&self, message: AppMessage) -> bool {
        self.tx.send(message).is_ok()
    }

    pub fn status(&self, update: StatusUpdate) {
        self.send(AppMessage::Status(update));
    }

    pub fn lifecycle(&self, event: LifecycleEvent) {
        self.send(AppMessage::Lifecycle(event));
    }

    pub fn is_closed(&self) -> bool {
        self.tx.is_closed()
    }
}
