//! Status reconciliation: pull masked status from the backend and project it
//! onto the form.
//!
//! The backend is the source of truth. A refresh overwrites every field it
//! reports as stored, including a raw value the operator is typing into that
//! field. Refresh failures are logged and leave the display alone.

use std::collections::BTreeMap;
use std::time::Duration;
use tokio::task::JoinHandle;

use super::EventSink;
use crate::api::wire::{decode_statuses, is_success_status};
use crate::api::{BackendClient, CHECK_CREDENTIALS_PATH};
use crate::app::AppMessage;
use crate::domain::{CredentialForm, MaskedCredentialStatus};
use crate::error::{LifecycleError, LifecycleResult};

/// Exchange id → masked status, as last reported by the backend.
pub type StatusMap = BTreeMap<String, MaskedCredentialStatus>;

/// Fetch the masked status of every exchange.
pub async fn refresh(backend: &BackendClient) -> LifecycleResult<StatusMap> {
    let reply = backend.check_credentials().await?;
    let body = reply.body;

    if !is_success_status(body.status.as_deref()) {
        let message = body
            .message
            .unwrap_or_else(|| format!("status {:?}", body.status));
        return Err(LifecycleError::protocol(CHECK_CREDENTIALS_PATH, message));
    }

    Ok(decode_statuses(body.credentials.unwrap_or_default()))
}

/// Project `statuses` onto `form`. Returns the number of fields updated.
///
/// Exchanges the form does not know are skipped. Applying the same map twice
/// leaves the form as it was after the first application.
pub fn apply(form: &mut CredentialForm, statuses: &StatusMap) -> usize {
    let mut updated = 0;
    for (exchange, status) in statuses {
        if form.has_exchange(exchange) {
            updated += form.apply_masked(exchange, status);
        }
    }
    updated
}

/// Refresh once and post the result. Failures are only logged.
pub async fn refresh_and_report(backend: &BackendClient, events: &EventSink) -> bool {
    match refresh(backend).await {
        Ok(statuses) => {
            tracing::debug!(exchanges = statuses.len(), "Credential status refreshed");
            events.send(AppMessage::StatusLoaded(statuses))
        }
        Err(e) => {
            tracing::warn!(error = %e, "Credential status refresh failed");
            !events.is_closed()
        }
    }
}

/// One-shot background refresh.
pub fn spawn_refresh(backend: BackendClient, events: EventSink) -> JoinHandle<()> {
    tokio::spawn(async move {
        refresh_and_report(&backend, &events).await;
    })
}

/// Owns the periodic refresh task.
///
/// The task runs only between [`start`](Self::start) and
/// [`stop`](Self::stop); dropping the handle stops it. The first refresh
/// happens immediately on start.
#[derive(Debug)]
pub struct ReconcilerHandle {
    backend: BackendClient,
    events: EventSink,
    interval: Duration,
    task: Option<JoinHandle<()>>,
}

impl ReconcilerHandle {
    pub fn new(backend: BackendClient, events: EventSink, interval: Duration) -> Self {
        Self {
            backend,
            events,
            interval,
            task: None,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn is_running(&self) -> bool {
        self.task.as_ref().is_some_and(|t| !t.is_finished())
    }

    /// Start polling. Does nothing if already running.
    pub fn start(&mut self) {
        if self.is_running() {
            return;
        }
        let backend = self.backend.clone();
        let events = self.events.clone();
        let period = self.interval;

        self.task = Some(tokio::spawn(async move {
            tracing::info!(interval_secs = period.as_secs(), "Status reconciler started");
            let mut interval = tokio::time::interval(period);
            interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);

            loop {
                interval.tick().await;
                if !refresh_and_report(&backend, &events).await {
                    tracing::debug!("Message channel closed, stopping status reconciler");
                    break;
                }
            }
        }));
    }

    /// Stop polling. In-flight requests are abandoned.
    pub fn stop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
            tracing::info!("Status reconciler stopped");
        }
    }
}

impl Drop for ReconcilerHandle {
    fn drop(&mut self) {
        self.stop();
    }
}
