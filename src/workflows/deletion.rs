//! Confirmed deletion of one exchange's stored credentials.

use tokio::task::JoinHandle;

use super::{EventSink, StatusUpdate, DELETE_SUCCESS_CLEAR};
use crate::api::wire::is_success_status;
use crate::api::BackendClient;
use crate::app::AppMessage;
use crate::domain::OperationStatus;
use crate::error::{LifecycleError, LifecycleResult};

pub const DEFAULT_DELETE_ERROR: &str = "Error deleting credentials";

/// A delete waiting for the operator's answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingConfirmation {
    pub exchange: String,
}

impl PendingConfirmation {
    pub fn new(exchange: impl Into<String>) -> Self {
        Self {
            exchange: exchange.into(),
        }
    }

    pub fn prompt(&self) -> String {
        format!(
            "Delete {} credentials? This cannot be undone.",
            self.exchange.to_uppercase()
        )
    }

    /// Settle the confirmation. Yields the exchange to delete, or
    /// [`LifecycleError::DeletionDenied`] if the operator declined.
    pub fn resolve(self, confirmed: bool) -> LifecycleResult<String> {
        if confirmed {
            Ok(self.exchange)
        } else {
            tracing::debug!(exchange = %self.exchange, "Deletion cancelled");
            Err(LifecycleError::DeletionDenied)
        }
    }
}

/// Outcome of a delete call that reached the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteResult {
    pub ok: bool,
    pub message: String,
}

/// Ask the backend to delete `exchange`.
///
/// Success needs a 2xx status and `status: "success"`; a body with only a
/// `message` is a failure carrying that message.
pub async fn delete(backend: &BackendClient, exchange: &str) -> LifecycleResult<DeleteResult> {
    let reply = backend.delete_credentials(exchange).await?;
    let ok = reply.is_http_success() && is_success_status(reply.body.status.as_deref());

    if ok {
        tracing::info!(exchange = %exchange, "Credentials deleted");
        return Ok(DeleteResult {
            ok,
            message: format!("{} credentials deleted successfully!", exchange.to_uppercase()),
        });
    }

    let message = reply
        .body
        .message
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| DEFAULT_DELETE_ERROR.to_string());
    tracing::warn!(exchange = %exchange, http_status = reply.http_status, message = %message, "Delete refused by backend");
    Ok(DeleteResult { ok, message })
}

pub fn deleting_status(exchange: &str) -> StatusUpdate {
    StatusUpdate::sticky(OperationStatus::info(format!(
        "🗑️ Deleting {} credentials...",
        exchange
    )))
}

pub fn deleted_status(exchange: &str) -> StatusUpdate {
    StatusUpdate::timed(
        OperationStatus::success(format!(
            "✅ {} credentials deleted successfully!",
            exchange.to_uppercase()
        )),
        DELETE_SUCCESS_CLEAR,
    )
}

pub fn delete_failed_status(message: &str) -> StatusUpdate {
    StatusUpdate::sticky(OperationStatus::error(format!("❌ {}", message)))
}

/// Run a confirmed delete in the background and post the result.
pub fn spawn_delete(backend: BackendClient, exchange: String, events: EventSink) -> JoinHandle<()> {
    tokio::spawn(async move {
        events.status(deleting_status(&exchange));
        let result = delete(&backend, &exchange).await;
        if let Err(e) = &result {
            tracing::warn!(exchange = %exchange, error = %e, "Delete request failed");
        }
        events.send(AppMessage::DeleteFinished { exchange, result });
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::{MockHttpClient, MockResponse};
    use serde_json::json;
    use std::sync::Arc;

    const URL: &str = "http://mock/delete-credentials";

    async fn run(response: MockResponse) -> LifecycleResult<DeleteResult> {
        let mock = MockHttpClient::new();
        mock.set_response(URL, response);
        delete(&BackendClient::new(Arc::new(mock), "http://mock"), "binance").await
    }

    #[test]
    fn test_prompt_uses_upper_case_exchange() {
        assert_eq!(
            PendingConfirmation::new("binance").prompt(),
            "Delete BINANCE credentials? This cannot be undone."
        );
    }

    #[test]
    fn test_resolve() {
        assert_eq!(
            PendingConfirmation::new("okx").resolve(true),
            Ok("okx".to_string())
        );
        assert_eq!(
            PendingConfirmation::new("okx").resolve(false),
            Err(LifecycleError::DeletionDenied)
        );
    }

    #[tokio::test]
    async fn test_delete_success() {
        let result = run(MockResponse::json(200, json!({"status": "success"}))).await.unwrap();
        assert!(result.ok);
        assert_eq!(result.message, "BINANCE credentials deleted successfully!");
    }

    #[tokio::test]
    async fn test_delete_message_only_is_failure() {
        let result = run(MockResponse::json(200, json!({"message": "not found"}))).await.unwrap();
        assert_eq!(
            result,
            DeleteResult {
                ok: false,
                message: "not found".to_string()
            }
        );

        let result = run(MockResponse::json(500, json!({}))).await.unwrap();
        assert_eq!(result.message, DEFAULT_DELETE_ERROR);
    }

    #[test]
    fn test_deleted_status_clears_after_three_seconds() {
        let update = deleted_status("binance");
        assert_eq!(update.clear_after, Some(DELETE_SUCCESS_CLEAR));
        assert_eq!(update.status.message, "✅ BINANCE credentials deleted successfully!");
    }
}
