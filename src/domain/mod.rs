//! Domain types for the credential lifecycle.
//!
//! - [`exchange`] - exchange ids, field kinds and composite keys
//! - [`form`] - the in-memory credential form
//! - [`submission`] - the batch of raw values sent at one submit
//! - [`verdict`] - validation verdicts and the save gate
//! - [`status`] - masked server status and the operation status region
//! - [`lifecycle`] - the submit state machine

pub mod exchange;
pub mod form;
pub mod lifecycle;
pub mod status;
pub mod submission;
pub mod verdict;

pub use exchange::{FieldKey, FieldKind};
pub use form::{CredentialField, CredentialForm};
pub use lifecycle::{LifecycleEvent, LifecycleState};
pub use status::{MaskedCredentialStatus, OperationStatus, StatusKind, StatusPresenter};
pub use submission::CredentialSubmission;
pub use verdict::{ValidationVerdict, VerdictSet};
