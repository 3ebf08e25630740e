//! Backend connection monitor.
//!
//! Polls `/health` on a fixed interval and reports Connected/Disconnected
//! whenever the answer changes.

use std::time::Duration;
use tokio::task::JoinHandle;

use crate::api::BackendClient;
use crate::app::AppMessage;
use crate::workflows::EventSink;

/// Probe the backend once. Transport errors count as disconnected.
pub async fn check_connection(backend: &BackendClient) -> bool {
    match backend.health().await {
        Ok(healthy) => healthy,
        Err(e) => {
            tracing::debug!(error = %e, code = e.error_code(), "Health check failed");
            false
        }
    }
}

/// Owns the health polling task. Dropping the handle stops it.
#[derive(Debug)]
pub struct HealthMonitorHandle {
    task: Option<JoinHandle<()>>,
}

impl HealthMonitorHandle {
    /// Spawn the monitor. The first probe runs immediately.
    pub fn start(backend: BackendClient, events: EventSink, period: Duration) -> Self {
        let task = tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
            let mut last: Option<bool> = None;

            loop {
                interval.tick().await;
                let connected = check_connection(&backend).await;
                if last == Some(connected) {
                    continue;
                }
                if connected {
                    tracing::info!(url = %backend.base_url(), "Backend connected");
                } else {
                    tracing::warn!(url = %backend.base_url(), "Backend unreachable");
                }
                last = Some(connected);
                if !events.send(AppMessage::ConnectionStatus(connected)) {
                    break;
                }
            }
        });
        Self { task: Some(task) }
    }

    pub fn is_running(&self) -> bool {
        self.task.as_ref().is_some_and(|t| !t.is_finished())
    }

    pub fn stop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

impl Drop for HealthMonitorHandle {
    fn drop(&mut self) {
        self.stop();
    }
}
