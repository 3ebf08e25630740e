//! Masked credential status and the transient operation status region.

use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

use super::exchange::FieldKind;

/// Server-held truth about one exchange's stored secrets.
///
/// Only masked text ever reaches the client. Missing booleans decode as
/// `false`; missing or `null` masked strings as `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MaskedCredentialStatus {
    pub has_api_key: bool,
    pub has_api_secret: bool,
    pub has_password: bool,
    pub api_key_masked: Option<String>,
    pub api_secret_masked: Option<String>,
    pub password_masked: Option<String>,
}

impl MaskedCredentialStatus {
    /// Whether the backend holds a value for `kind`.
    pub fn has(&self, kind: FieldKind) -> bool {
        match kind {
            FieldKind::ApiKey => self.has_api_key,
            FieldKind::ApiSecret => self.has_api_secret,
            FieldKind::Password => self.has_password,
        }
    }

    /// Masked display text for `kind`, if any.
    pub fn masked(&self, kind: FieldKind) -> Option<&str> {
        match kind {
            FieldKind::ApiKey => self.api_key_masked.as_deref(),
            FieldKind::ApiSecret => self.api_secret_masked.as_deref(),
            FieldKind::Password => self.password_masked.as_deref(),
        }
    }

    /// Number of stored fields.
    pub fn stored_count(&self) -> usize {
        FieldKind::ALL.iter().filter(|k| self.has(**k)).count()
    }
}

/// Visual class of the status region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusKind {
    #[default]
    None,
    Info,
    Success,
    Error,
}

/// The single transient status message.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OperationStatus {
    pub message: String,
    pub kind: StatusKind,
}

impl OperationStatus {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: StatusKind::Info,
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: StatusKind::Success,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: StatusKind::Error,
        }
    }

    pub fn none() -> Self {
        Self::default()
    }

    pub fn is_none(&self) -> bool {
        self.kind == StatusKind::None && self.message.is_empty()
    }
}

/// Owns the status region and its auto-clear deadline.
///
/// Every write replaces the previous status and its deadline.
#[derive(Debug, Clone, Default)]
pub struct StatusPresenter {
    current: OperationStatus,
    clear_at: Option<Instant>,
}

impl StatusPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> &OperationStatus {
        &self.current
    }

    pub fn clear_at(&self) -> Option<Instant> {
        self.clear_at
    }

    /// Show a status until the next write.
    pub fn show(&mut self, status: OperationStatus) {
        self.current = status;
        self.clear_at = None;
    }

    /// Show a status and clear it once `delay` has elapsed from `now`.
    pub fn show_for(&mut self, status: OperationStatus, delay: Duration, now: Instant) {
        self.current = status;
        self.clear_at = Some(now + delay);
    }

    pub fn clear(&mut self) {
        self.current = OperationStatus::none();
        self.clear_at = None;
    }

    /// Clear the status if its deadline has passed. Returns true if it did.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.clear_at {
            Some(deadline) if now >= deadline => {
                self.clear();
                true
            }
            _ => false,
        }
    }
}
