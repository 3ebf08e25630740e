//! Application state and its reducer.
//!
//! [`CredentialState`] is the only writer of the form, the lifecycle state,
//! the masked status map and the status region. Its methods never perform
//! I/O; anything that needs the network is returned as an [`Effect`] for the
//! runtime to execute.

use chrono::{DateTime, Local};
use std::time::Instant;

use super::messages::AppMessage;
use crate::domain::{
    CredentialForm, CredentialSubmission, FieldKey, LifecycleEvent, LifecycleState,
    OperationStatus, StatusPresenter,
};
use crate::error::LifecycleError;
use crate::workflows::deletion::{delete_failed_status, deleted_status};
use crate::workflows::{reconciler, PendingConfirmation, StatusMap, StatusUpdate};

/// Work the runtime must start on behalf of the state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Fetch `/check-credentials` once
    RefreshStatus,
    /// Run the validate → save pipeline
    Submit(CredentialSubmission),
    /// Delete one exchange's credentials
    Delete(String),
}

/// An edit to a single field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldEdit {
    Push(char),
    Pop,
    Set(String),
}

#[derive(Debug, Clone)]
pub struct CredentialState {
    pub form: CredentialForm,
    pub lifecycle: LifecycleState,
    pub statuses: StatusMap,
    pub pending_delete: Option<PendingConfirmation>,
    pub presenter: StatusPresenter,
    pub last_refresh: Option<DateTime<Local>>,
    pub connected: Option<bool>,
}

impl CredentialState {
    pub fn new<I, S>(exchanges: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            form: CredentialForm::new(exchanges),
            lifecycle: LifecycleState::Idle,
            statuses: StatusMap::new(),
            pending_delete: None,
            presenter: StatusPresenter::new(),
            last_refresh: None,
            connected: None,
        }
    }

    pub fn status(&self) -> &OperationStatus {
        self.presenter.current()
    }

    /// Apply a lifecycle event, logging and ignoring invalid transitions.
    fn transition(&mut self, event: LifecycleEvent) {
        match self.lifecycle.apply(event) {
            Ok(next) => {
                if next != self.lifecycle {
                    tracing::debug!(from = ?self.lifecycle, to = ?next, event = ?event, "Lifecycle transition");
                }
                self.lifecycle = next;
            }
            Err(e) => tracing::warn!(error = %e, "Ignoring lifecycle event"),
        }
    }

    fn show(&mut self, update: StatusUpdate, now: Instant) {
        match update.clear_after {
            Some(delay) => self.presenter.show_for(update.status, delay, now),
            None => self.presenter.show(update.status),
        }
    }

    /// Edit one field. Returns whether the field exists.
    pub fn edit(&mut self, key: &FieldKey, edit: FieldEdit) -> bool {
        let changed = match edit {
            FieldEdit::Push(c) => self.form.push_char(key, c),
            FieldEdit::Pop => self.form.pop_char(key),
            FieldEdit::Set(value) => self.form.set_value(key, value),
        };
        if changed {
            self.transition(LifecycleEvent::OperatorEdit);
        }
        changed
    }

    /// Collect the form and start the submit pipeline.
    ///
    /// An empty form never reaches the network. A submit while a previous one
    /// is still running is ignored.
    pub fn submit(&mut self) -> Vec<Effect> {
        if self.lifecycle.is_busy() {
            tracing::debug!(state = ?self.lifecycle, "Submit ignored while busy");
            return Vec::new();
        }

        let submission = self.form.collect_submission();
        if submission.is_empty() {
            self.transition(LifecycleEvent::EmptySubmit);
            self.presenter.show(OperationStatus::error(
                LifecycleError::EmptySubmission.status_message(),
            ));
            return Vec::new();
        }

        tracing::info!(fields = submission.len(), exchanges = submission.exchanges().len(), "Submitting credentials");
        self.transition(LifecycleEvent::Submit);
        vec![Effect::Submit(submission)]
    }

    /// Ask for confirmation before deleting `exchange`.
    pub fn request_delete(&mut self, exchange: &str) -> bool {
        if !self.form.has_exchange(exchange) {
            return false;
        }
        self.pending_delete = Some(PendingConfirmation::new(exchange));
        true
    }

    /// Answer the pending confirmation.
    pub fn resolve_delete(&mut self, confirmed: bool) -> Vec<Effect> {
        let Some(pending) = self.pending_delete.take() else {
            return Vec::new();
        };
        match pending.resolve(confirmed) {
            Ok(exchange) => vec![Effect::Delete(exchange)],
            Err(_) => Vec::new(),
        }
    }

    pub fn refresh(&self) -> Vec<Effect> {
        vec![Effect::RefreshStatus]
    }

    /// Fold one background message into the state.
    pub fn apply_message(&mut self, message: AppMessage, now: Instant) -> Vec<Effect> {
        match message {
            AppMessage::Status(update) => {
                self.show(update, now);
                Vec::new()
            }
            AppMessage::Lifecycle(event) => {
                self.transition(event);
                Vec::new()
            }
            AppMessage::SubmitFinished(outcome) => {
                if outcome.is_saved() {
                    self.form.clear_values();
                    vec![Effect::RefreshStatus]
                } else {
                    Vec::new()
                }
            }
            AppMessage::StatusLoaded(statuses) => {
                let updated = reconciler::apply(&mut self.form, &statuses);
                tracing::trace!(fields = updated, "Masked status applied");
                self.statuses = statuses;
                self.last_refresh = Some(Local::now());
                Vec::new()
            }
            AppMessage::DeleteFinished { exchange, result } => match result {
                Ok(result) if result.ok => {
                    self.form.clear_exchange(&exchange);
                    self.statuses.remove(&exchange);
                    self.show(deleted_status(&exchange), now);
                    vec![Effect::RefreshStatus]
                }
                Ok(result) => {
                    self.show(delete_failed_status(&result.message), now);
                    Vec::new()
                }
                Err(e) => {
                    self.show(StatusUpdate::failure(&e), now);
                    Vec::new()
                }
            },
            AppMessage::ConnectionStatus(connected) => {
                self.connected = Some(connected);
                Vec::new()
            }
        }
    }

    /// Expire the status region. A cleared save success returns the
    /// lifecycle to `Idle`.
    pub fn tick(&mut self, now: Instant) -> bool {
        let cleared = self.presenter.tick(now);
        if cleared {
            self.transition(LifecycleEvent::StatusCleared);
        }
        cleared
    }
}
