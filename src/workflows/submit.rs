//! The submit pipeline: validate, gate, persist.
//!
//! The submission is moved into the pipeline and dropped when it returns.
//! The save endpoint is only called after every submitted exchange has a
//! passing verdict.

use tokio::task::JoinHandle;

use super::persistence::{persist, saved_status, saving_status};
use super::validation::{validate, validating_status, verdict_status};
use super::{EventSink, StatusUpdate};
use crate::api::BackendClient;
use crate::app::AppMessage;
use crate::domain::{CredentialSubmission, LifecycleEvent, VerdictSet};
use crate::error::LifecycleError;

/// How a submit ended.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Validated and stored
    Saved { verdicts: VerdictSet },
    /// Validated, but the save was refused or never reached the backend
    SaveFailed {
        verdicts: VerdictSet,
        error: LifecycleError,
    },
    /// At least one exchange failed validation, or validation was refused
    Rejected { verdicts: Option<VerdictSet> },
    /// Validation never produced an answer
    Errored(LifecycleError),
}

impl SubmitOutcome {
    pub fn is_saved(&self) -> bool {
        matches!(self, SubmitOutcome::Saved { .. })
    }
}

/// Run the whole pipeline, reporting each step on `events`.
pub async fn submit_credentials(
    backend: &BackendClient,
    submission: CredentialSubmission,
    events: &EventSink,
) -> SubmitOutcome {
    events.status(validating_status());

    let verdicts = match validate(backend, &submission).await {
        Ok(verdicts) => verdicts,
        Err(e @ LifecycleError::ValidationRejected { .. }) => {
            events.status(StatusUpdate::failure(&e));
            events.lifecycle(LifecycleEvent::VerdictsRejected);
            return SubmitOutcome::Rejected { verdicts: None };
        }
        Err(e) => {
            tracing::warn!(error = %e, "Validation request failed");
            events.status(StatusUpdate::failure(&e));
            events.lifecycle(LifecycleEvent::ValidationErrored);
            return SubmitOutcome::Errored(e);
        }
    };

    events.status(verdict_status(&verdicts, &submission));
    if !verdicts.all_valid_for(&submission) {
        tracing::info!(verdicts = verdicts.len(), "Save skipped, not every exchange passed validation");
        events.lifecycle(LifecycleEvent::VerdictsRejected);
        return SubmitOutcome::Rejected {
            verdicts: Some(verdicts),
        };
    }

    events.lifecycle(LifecycleEvent::VerdictsAccepted);
    events.status(saving_status());
    events.lifecycle(LifecycleEvent::SaveStarted);

    match persist(backend, &submission).await {
        Ok(message) => {
            events.status(saved_status(&message));
            events.lifecycle(LifecycleEvent::SaveSucceeded);
            SubmitOutcome::Saved { verdicts }
        }
        Err(e) => {
            if !matches!(e, LifecycleError::PersistFailure { .. }) {
                tracing::warn!(error = %e, "Save request failed");
            }
            events.status(StatusUpdate::failure(&e));
            events.lifecycle(LifecycleEvent::SaveFailed);
            SubmitOutcome::SaveFailed { verdicts, error: e }
        }
    }
}

/// Run the pipeline in the background and post the outcome when done.
pub fn spawn_submit(
    backend: BackendClient,
    submission: CredentialSubmission,
    events: EventSink,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let outcome = submit_credentials(&backend, submission, &events).await;
        events.send(AppMessage::SubmitFinished(outcome));
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::{MockHttpClient, MockResponse};
    use crate::domain::{FieldKey, FieldKind, StatusKind};
    use crate::traits::HttpError;
    use serde_json::json;
    use std::sync::Arc;
    use tokio::sync::mpsc;

    fn drain(rx: &mut mpsc::UnboundedReceiver<AppMessage>) -> Vec<AppMessage> {
        let mut out = Vec::new();
        while let Ok(m) = rx.try_recv() {
            out.push(m);
        }
        out
    }

    fn lifecycle_events(messages: &[AppMessage]) -> Vec<LifecycleEvent> {
        messages
            .iter()
            .filter_map(|m| match m {
                AppMessage::Lifecycle(e) => Some(*e),
                _ => None,
            })
            .collect()
    }

    fn submission() -> CredentialSubmission {
        let mut s = CredentialSubmission::new();
        s.insert(&FieldKey::new("binance", FieldKind::ApiKey), "abc");
        s.insert(&FieldKey::new("binance", FieldKind::ApiSecret), "xyz");
        s
    }

    #[tokio::test]
    async fn test_all_valid_saves() {
        let mock = MockHttpClient::new();
        mock.set_response(
            "http://mock/validate-credentials",
            MockResponse::json(200, json!({"status": "success", "results": {"binance": {"valid": true, "message": "OK"}}})),
        );
        mock.set_response(
            "http://mock/save-credentials",
            MockResponse::json(200, json!({"status": "success", "message": "Saved"})),
        );
        let backend = BackendClient::new(Arc::new(mock.clone()), "http://mock");
        let (tx, mut rx) = mpsc::unbounded_channel();

        let outcome = submit_credentials(&backend, submission(), &EventSink::new(tx)).await;
        assert!(outcome.is_saved());
        assert_eq!(mock.requests_to("/save-credentials").len(), 1);

        let messages = drain(&mut rx);
        assert_eq!(
            lifecycle_events(&messages),
            vec![
                LifecycleEvent::VerdictsAccepted,
                LifecycleEvent::SaveStarted,
                LifecycleEvent::SaveSucceeded
            ]
        );
    }

    #[tokio::test]
    async fn test_rejected_never_calls_save() {
        let mock = MockHttpClient::new();
        mock.set_response(
            "http://mock/validate-credentials",
            MockResponse::json(200, json!({"status": "success", "results": {"binance": {"valid": false, "message": "Invalid key"}}})),
        );
        let backend = BackendClient::new(Arc::new(mock.clone()), "http://mock");
        let (tx, mut rx) = mpsc::unbounded_channel();

        let outcome = submit_credentials(&backend, submission(), &EventSink::new(tx)).await;
        assert!(matches!(outcome, SubmitOutcome::Rejected { verdicts: Some(_) }));
        assert!(mock.requests_to("/save-credentials").is_empty());
        assert_eq!(
            lifecycle_events(&drain(&mut rx)),
            vec![LifecycleEvent::VerdictsRejected]
        );
    }

    #[tokio::test]
    async fn test_transport_error_reports_connection_error() {
        let mock = MockHttpClient::new();
        mock.set_default_response(MockResponse::Error(HttpError::Timeout("timed out".into())));
        let backend = BackendClient::new(Arc::new(mock.clone()), "http://mock");
        let (tx, mut rx) = mpsc::unbounded_channel();

        let outcome = submit_credentials(&backend, submission(), &EventSink::new(tx)).await;
        assert!(matches!(outcome, SubmitOutcome::Errored(LifecycleError::Network(_))));
        assert!(mock.requests_to("/save-credentials").is_empty());

        let messages = drain(&mut rx);
        let last_status = messages
            .iter()
            .rev()
            .find_map(|m| match m {
                AppMessage::Status(u) => Some(u.status.clone()),
                _ => None,
            })
            .unwrap();
        assert_eq!(last_status.kind, StatusKind::Error);
        assert!(last_status.message.starts_with("❌ Connection error:"));
    }
}
