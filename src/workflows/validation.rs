//! Validation of a submission against the exchanges.

use super::StatusUpdate;
use crate::api::wire::{decode_verdicts, is_success_status};
use crate::api::{BackendClient, VALIDATE_CREDENTIALS_PATH};
use crate::domain::{CredentialSubmission, OperationStatus, VerdictSet};
use crate::error::{LifecycleError, LifecycleResult};

/// Message used when the backend reports a failure without one.
pub const DEFAULT_VALIDATION_ERROR: &str = "Validation error";

/// Post `submission` to the validate endpoint and return one verdict per
/// exchange.
///
/// A reply without a `status` field is a protocol error. A backend that
/// refuses to run the checks at all yields
/// [`LifecycleError::ValidationRejected`]. Malformed per-exchange results are
/// skipped, which the save gate then treats as a failed verdict.
pub async fn validate(
    backend: &BackendClient,
    submission: &CredentialSubmission,
) -> LifecycleResult<VerdictSet> {
    let reply = backend.validate_credentials(submission).await?;
    let body = reply.body;

    let Some(status) = body.status.as_deref() else {
        return Err(LifecycleError::protocol(
            VALIDATE_CREDENTIALS_PATH,
            format!("{}: response has no status", DEFAULT_VALIDATION_ERROR),
        ));
    };

    if is_success_status(Some(status)) {
        let verdicts = decode_verdicts(body.results.unwrap_or_default());
        tracing::info!(
            exchanges = submission.exchanges().len(),
            verdicts = verdicts.len(),
            "Validation finished"
        );
        Ok(verdicts)
    } else {
        let message = body
            .message
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| DEFAULT_VALIDATION_ERROR.to_string());
        tracing::warn!(status = %status, message = %message, "Validation refused by backend");
        Err(LifecycleError::ValidationRejected { message })
    }
}

pub fn validating_status() -> StatusUpdate {
    StatusUpdate::sticky(OperationStatus::info(
        "🔍 Validating credentials with exchanges...",
    ))
}

/// Per-exchange verdict lines; success only when the gate passes.
pub fn verdict_status(verdicts: &VerdictSet, submission: &CredentialSubmission) -> StatusUpdate {
    let summary = verdicts.summary_for(submission);
    let status = if verdicts.all_valid_for(submission) {
        OperationStatus::success(summary)
    } else {
        OperationStatus::error(summary)
    };
    StatusUpdate::sticky(status)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::{MockHttpClient, MockResponse};
    use crate::domain::{FieldKey, FieldKind, StatusKind, ValidationVerdict};
    use serde_json::json;
    use std::sync::Arc;

    const URL: &str = "http://mock/validate-credentials";

    fn setup(response: MockResponse) -> BackendClient {
        let mock = MockHttpClient::new();
        mock.set_response(URL, response);
        BackendClient::new(Arc::new(mock), "http://mock")
    }

    fn binance() -> CredentialSubmission {
        let mut s = CredentialSubmission::new();
        s.insert(&FieldKey::new("binance", FieldKind::ApiKey), "abc");
        s
    }

    #[tokio::test]
    async fn test_success_yields_verdicts() {
        let backend = setup(MockResponse::json(
            200,
            json!({"status": "success", "results": {"binance": {"valid": true, "message": "OK"}}}),
        ));
        let verdicts = validate(&backend, &binance()).await.unwrap();
        assert_eq!(verdicts.get("binance"), Some(&ValidationVerdict::pass("OK")));
    }

    #[tokio::test]
    async fn test_error_status_is_global_failure_with_default_message() {
        let backend = setup(MockResponse::json(400, json!({"status": "error"})));
        let err = validate(&backend, &binance()).await.unwrap_err();
        assert_eq!(
            err,
            LifecycleError::ValidationRejected {
                message: "Validation error".to_string()
            }
        );
        assert_eq!(err.status_message(), "❌ Validation error");
    }

    #[tokio::test]
    async fn test_missing_status_is_protocol_error() {
        let backend = setup(MockResponse::json(200, json!({"results": {}})));
        let err = validate(&backend, &binance()).await.unwrap_err();
        assert!(matches!(err, LifecycleError::Protocol { .. }));
    }

    #[test]
    fn test_verdict_status_kind_follows_gate() {
        let submission = binance();
        let mut verdicts = VerdictSet::new();
        verdicts.insert("binance", ValidationVerdict::fail("Invalid key"));
        let update = verdict_status(&verdicts, &submission);
        assert_eq!(update.status.kind, StatusKind::Error);
        assert_eq!(update.status.message, "❌ binance: Invalid key");

        verdicts.insert("binance", ValidationVerdict::pass("OK"));
        assert_eq!(verdict_status(&verdicts, &submission).status.kind, StatusKind::Success);
    }
}
