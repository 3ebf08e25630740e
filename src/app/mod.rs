//! Application runtime.
//!
//! [`App`] owns the [`CredentialState`], the backend client, the message
//! channel and the two timers. The UI loop in `main` is its only caller, so
//! every mutation happens on one task.

mod handlers;
mod messages;
mod navigation;
pub mod state;

pub use handlers::{map_key, Action};
pub use messages::AppMessage;
pub use state::{CredentialState, Effect, FieldEdit};

use std::time::Instant;
use tokio::sync::mpsc;

use crate::api::BackendClient;
use crate::config::ClientConfig;
use crate::domain::FieldKey;
use crate::health::HealthMonitorHandle;
use crate::workflows::deletion::spawn_delete;
use crate::workflows::reconciler::spawn_refresh;
use crate::workflows::submit::spawn_submit;
use crate::workflows::{EventSink, ReconcilerHandle};

/// Which screen is displayed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Credentials,
    Overview,
}

impl Screen {
    pub fn title(&self) -> &'static str {
        match self {
            Screen::Credentials => "Credentials",
            Screen::Overview => "Overview",
        }
    }
}

/// Main application state
pub struct App {
    pub state: CredentialState,
    pub screen: Screen,
    /// Index into the form's display-ordered keys
    pub focus: usize,
    pub should_quit: bool,
    /// Taken by the UI loop
    pub message_rx: Option<mpsc::UnboundedReceiver<AppMessage>>,
    /// Incremented on every UI tick
    pub tick_count: u64,
    config: ClientConfig,
    backend: BackendClient,
    events: EventSink,
    reconciler: ReconcilerHandle,
    health: Option<HealthMonitorHandle>,
}

impl App {
    /// Create an app talking to the configured backend over reqwest.
    pub fn new(config: ClientConfig) -> Self {
        let backend = BackendClient::from_config(&config);
        Self::with_backend(config, backend)
    }

    /// Create an app over an explicit backend client.
    pub fn with_backend(config: ClientConfig, backend: BackendClient) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        let events = EventSink::new(tx);
        let reconciler = ReconcilerHandle::new(backend.clone(), events.clone(), config.poll_interval);

        Self {
            state: CredentialState::new(config.exchanges.iter().cloned()),
            screen: Screen::default(),
            focus: 0,
            should_quit: false,
            message_rx: Some(rx),
            tick_count: 0,
            config,
            backend,
            events,
            reconciler,
            health: None,
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn backend(&self) -> &BackendClient {
        &self.backend
    }

    /// Sender for posting messages into this app's channel.
    pub fn events(&self) -> EventSink {
        self.events.clone()
    }

    pub fn reconciler_running(&self) -> bool {
        self.reconciler.is_running()
    }

    /// Start background timers. Must run inside a tokio runtime.
    pub fn start(&mut self) {
        tracing::info!(url = %self.backend.base_url(), exchanges = self.config.exchanges.len(), "Starting");
        self.health = Some(HealthMonitorHandle::start(
            self.backend.clone(),
            self.events.clone(),
            self.config.poll_interval,
        ));
        self.activate_screen(self.screen);
    }

    /// Stop background timers.
    pub fn shutdown(&mut self) {
        self.reconciler.stop();
        if let Some(mut health) = self.health.take() {
            health.stop();
        }
    }

    /// The field currently focused, if any.
    pub fn focused_key(&self) -> Option<FieldKey> {
        self.state.form.keys().get(self.focus).cloned()
    }

    /// Exchange of the focused field.
    pub fn focused_exchange(&self) -> Option<String> {
        self.focused_key().map(|k| k.exchange)
    }

    /// Fold a background message into the state and run any follow-up work.
    pub fn handle_message(&mut self, message: AppMessage) {
        let effects = self.state.apply_message(message, Instant::now());
        self.run_effects(effects);
    }

    /// Per-frame housekeeping.
    pub fn tick(&mut self) {
        self.tick_count = self.tick_count.wrapping_add(1);
        self.state.tick(Instant::now());
    }

    pub(crate) fn run_effects(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::RefreshStatus => {
                    spawn_refresh(self.backend.clone(), self.events.clone());
                }
                Effect::Submit(submission) => {
                    spawn_submit(self.backend.clone(), submission, self.events.clone());
                }
                Effect::Delete(exchange) => {
                    tracing::info!(exchange = %exchange, "Deleting credentials");
                    spawn_delete(self.backend.clone(), exchange, self.events.clone());
                }
            }
        }
    }
}

impl Drop for App {
    fn drop(&mut self) {
        self.shutdown();
    }
}
