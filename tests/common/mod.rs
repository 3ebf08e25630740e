//! Common test utilities for integration tests.
//!
//! [`Harness`] drives a [`CredentialState`] against a scripted backend the
//! same way the app runtime does: effects are executed by the real workflow
//! tasks and every message they post is folded back into the state.
//!
//! # Example
//!
//! ```ignore
//! let mut h = Harness::new(&["binance"], MockBackendConfig::new().build());
//! h.type_into("binance", FieldKind::ApiKey, "key");
//! h.submit().await;
//! ```
#![allow(dead_code)]

pub mod mocks;

pub use mocks::*;

use arbkeys::app::{AppMessage, CredentialState, Effect, FieldEdit};
use arbkeys::domain::{FieldKey, FieldKind, LifecycleState, OperationStatus};
use arbkeys::workflows::deletion::spawn_delete;
use arbkeys::workflows::reconciler::spawn_refresh;
use arbkeys::workflows::submit::spawn_submit;
use arbkeys::workflows::EventSink;
use serde_json::{json, Value};
use std::collections::VecDeque;
use std::time::Instant;
use tokio::sync::mpsc;

pub struct Harness {
    pub state: CredentialState,
    pub http: MockHttpClient,
    pub backend: BackendClient,
    /// Every message posted by a workflow, in arrival order
    pub messages: Vec<AppMessage>,
    /// Every distinct status shown, in order
    pub shown: Vec<OperationStatus>,
    /// Lifecycle state after each applied message
    pub states: Vec<LifecycleState>,
    events: EventSink,
    rx: mpsc::UnboundedReceiver<AppMessage>,
}

impl Harness {
    pub fn new(exchanges: &[&str], (http, backend): (MockHttpClient, BackendClient)) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            state: CredentialState::new(exchanges.iter().copied()),
            http,
            backend,
            messages: Vec::new(),
            shown: Vec::new(),
            states: Vec::new(),
            events: EventSink::new(tx),
            rx,
        }
    }

    pub fn type_into(&mut self, exchange: &str, kind: FieldKind, text: &str) {
        let key = FieldKey::new(exchange, kind);
        for c in text.chars() {
            assert!(self.state.edit(&key, FieldEdit::Push(c)), "unknown field {}", key);
        }
    }

    pub fn value(&self, exchange: &str, kind: FieldKind) -> String {
        self.field(exchange, kind).value.clone()
    }

    pub fn placeholder(&self, exchange: &str, kind: FieldKind) -> String {
        self.field(exchange, kind).placeholder.clone()
    }

    fn field(&self, exchange: &str, kind: FieldKind) -> &arbkeys::domain::CredentialField {
        self.state
            .form
            .field(&FieldKey::new(exchange, kind))
            .expect("field exists")
    }

    pub async fn submit(&mut self) {
        let effects = self.state.submit();
        self.run(effects).await;
    }

    pub async fn refresh(&mut self) {
        let effects = self.state.refresh();
        self.run(effects).await;
    }

    pub async fn confirm_delete(&mut self, exchange: &str) {
        assert!(self.state.request_delete(exchange));
        let effects = self.state.resolve_delete(true);
        self.run(effects).await;
    }

    /// Execute effects to completion, including follow-up effects.
    pub async fn run(&mut self, effects: Vec<Effect>) {
        let mut queue: VecDeque<Effect> = effects.into();
        while let Some(effect) = queue.pop_front() {
            let task = match effect {
                Effect::RefreshStatus => spawn_refresh(self.backend.clone(), self.events.clone()),
                Effect::Submit(submission) => {
                    spawn_submit(self.backend.clone(), submission, self.events.clone())
                }
                Effect::Delete(exchange) => {
                    spawn_delete(self.backend.clone(), exchange, self.events.clone())
                }
            };
            task.await.expect("workflow task panicked");

            while let Ok(message) = self.rx.try_recv() {
                self.messages.push(message.clone());
                queue.extend(self.state.apply_message(message, Instant::now()));
                self.states.push(self.state.lifecycle);
                let status = self.state.status().clone();
                if self.shown.last() != Some(&status) {
                    self.shown.push(status);
                }
            }
        }
    }

    /// Every request body sent so far, as raw text.
    pub fn sent_bodies(&self) -> Vec<String> {
        self.http
            .get_requests()
            .into_iter()
            .filter_map(|r| r.body)
            .collect()
    }
}

/// `/check-credentials` body with one exchange holding a masked API key.
pub fn stored_key(exchange: &str, masked: &str) -> Value {
    json!({
        "status": "success",
        "credentials": {
            exchange: {
                "has_api_key": true,
                "api_key_masked": masked,
                "has_api_secret": false,
                "has_password": false
            }
        }
    })
}

/// `/check-credentials` body with nothing stored.
pub fn nothing_stored() -> Value {
    json!({"status": "success", "credentials": {}})
}
