//! AppMessage enum for async communication within the application.

use crate::domain::LifecycleEvent;
use crate::error::LifecycleResult;
use crate::workflows::{DeleteResult, StatusMap, StatusUpdate, SubmitOutcome};

/// Messages posted by background tasks to the UI loop.
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// Replace the status region
    Status(StatusUpdate),
    /// Advance the submit lifecycle
    Lifecycle(LifecycleEvent),
    /// The submit pipeline finished
    SubmitFinished(SubmitOutcome),
    /// Fresh masked status from `/check-credentials`
    StatusLoaded(StatusMap),
    /// A confirmed delete finished
    DeleteFinished {
        exchange: String,
        result: LifecycleResult<DeleteResult>,
    },
    /// Backend reachability changed
    ConnectionStatus(bool),
}
