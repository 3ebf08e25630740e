//! Credential lifecycle state machine.
//!
//! ```text
//! Idle ──submit──▶ Validating ──all valid──▶ ReadyToSave ──▶ Saving ──ok──▶ Saved
//!  ▲                 │   │                                     │              │
//!  │      any invalid│   │transport/protocol error      failure│   status clear
//!  │                 ▼   ▼                                     ▼              │
//!  └──edit/submit── Rejected  Idle             edit/submit── SaveFailed       │
//!  └──────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The save endpoint is reachable only through `ReadyToSave`, which only a
//! fully passing verdict set can enter.

use crate::error::{LifecycleError, LifecycleResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LifecycleState {
    #[default]
    Idle,
    Validating,
    Rejected,
    ReadyToSave,
    Saving,
    Saved,
    SaveFailed,
}

/// Inputs that drive the state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleEvent {
    /// Operator submitted a non-empty form
    Submit,
    /// Operator submitted a form with nothing in it
    EmptySubmit,
    VerdictsAccepted,
    VerdictsRejected,
    /// Validate call failed at the transport or protocol level
    ValidationErrored,
    SaveStarted,
    SaveSucceeded,
    SaveFailed,
    /// Operator changed a field
    OperatorEdit,
    /// The success status timed out
    StatusCleared,
}

impl LifecycleState {
    /// A validate or save call is in flight; the submit trigger is disabled.
    pub fn is_busy(&self) -> bool {
        matches!(
            self,
            LifecycleState::Validating | LifecycleState::ReadyToSave | LifecycleState::Saving
        )
    }

    /// Short label for the submit control.
    pub fn label(&self) -> &'static str {
        match self {
            LifecycleState::Idle => "Idle",
            LifecycleState::Validating => "🔍 Validating...",
            LifecycleState::Rejected => "Rejected",
            LifecycleState::ReadyToSave => "Ready to save",
            LifecycleState::Saving => "⏳ Saving...",
            LifecycleState::Saved => "Saved",
            LifecycleState::SaveFailed => "Save failed",
        }
    }

    /// Compute the next state for `event`.
    ///
    /// Events that do not apply to the current state yield
    /// [`LifecycleError::InvalidTransition`]; a submit while busy yields
    /// [`LifecycleError::Busy`].
    pub fn apply(self, event: LifecycleEvent) -> LifecycleResult<LifecycleState> {
        use LifecycleEvent as E;
        use LifecycleState as S;

        let next = match (self, event) {
            (s, E::Submit | E::EmptySubmit) if s.is_busy() => return Err(LifecycleError::Busy),
            (_, E::Submit) => S::Validating,
            (_, E::EmptySubmit) => S::Idle,

            (S::Validating, E::VerdictsAccepted) => S::ReadyToSave,
            (S::Validating, E::VerdictsRejected) => S::Rejected,
            (S::Validating, E::ValidationErrored) => S::Idle,

            (S::ReadyToSave, E::SaveStarted) => S::Saving,
            (S::Saving, E::SaveSucceeded) => S::Saved,
            (S::Saving, E::SaveFailed) => S::SaveFailed,

            (S::Rejected | S::SaveFailed, E::OperatorEdit) => S::Idle,
            (s, E::OperatorEdit) => s,

            (S::Saved, E::StatusCleared) => S::Idle,
            (s, E::StatusCleared) => s,

            (from, event) => return Err(LifecycleError::InvalidTransition { from, event }),
        };
        Ok(next)
    }
}
