//! Persisting a validated submission.

use super::{StatusUpdate, SAVE_SUCCESS_CLEAR};
use crate::api::wire::is_success_status;
use crate::api::{BackendClient, SAVE_CREDENTIALS_PATH};
use crate::domain::{CredentialSubmission, OperationStatus};
use crate::error::{LifecycleError, LifecycleResult};

pub const DEFAULT_SAVE_ERROR: &str = "Error saving credentials";
pub const DEFAULT_SAVE_SUCCESS: &str = "Credentials saved";

/// Store `submission` on the backend and return its confirmation message.
///
/// Success needs both a 2xx status and `status: "success"` in the body.
/// Anything else the backend answers is [`LifecycleError::PersistFailure`].
pub async fn persist(
    backend: &BackendClient,
    submission: &CredentialSubmission,
) -> LifecycleResult<String> {
    let reply = backend.save_credentials(submission).await?;
    let http_ok = reply.is_http_success();
    let body = reply.body;

    let Some(status) = body.status.as_deref() else {
        return Err(LifecycleError::protocol(
            SAVE_CREDENTIALS_PATH,
            format!("{}: response has no status", DEFAULT_SAVE_ERROR),
        ));
    };

    let ok = http_ok && is_success_status(Some(status));
    let message = body.message.filter(|m| !m.is_empty()).unwrap_or_else(|| {
        if ok {
            DEFAULT_SAVE_SUCCESS.to_string()
        } else {
            DEFAULT_SAVE_ERROR.to_string()
        }
    });

    if ok {
        tracing::info!(fields = submission.len(), "Credentials saved");
        Ok(message)
    } else {
        tracing::warn!(http_status = reply.http_status, status = %status, message = %message, "Save refused by backend");
        Err(LifecycleError::PersistFailure { message })
    }
}

pub fn saving_status() -> StatusUpdate {
    StatusUpdate::sticky(OperationStatus::success("✅ All credentials valid! Saving..."))
}

pub fn saved_status(message: &str) -> StatusUpdate {
    StatusUpdate::timed(
        OperationStatus::success(format!(
            "✅ {}\n🔒 Credentials encrypted and saved!",
            message
        )),
        SAVE_SUCCESS_CLEAR,
    )
}
