//! JSON bodies exchanged with the dashboard backend.
//!
//! Decoding is permissive: every field is optional and unknown fields are
//! ignored. Per-exchange entries are decoded one at a time so a single
//! malformed exchange does not sink the whole response.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

use crate::domain::{MaskedCredentialStatus, ValidationVerdict, VerdictSet};

/// The only `status` value the backend uses for success.
pub const STATUS_SUCCESS: &str = "success";

/// `GET /check-credentials`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CheckCredentialsBody {
    pub status: Option<String>,
    pub message: Option<String>,
    pub credentials: Option<BTreeMap<String, Value>>,
}

/// `POST /validate-credentials`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ValidateBody {
    pub status: Option<String>,
    pub message: Option<String>,
    pub results: Option<BTreeMap<String, Value>>,
}

/// `POST /save-credentials` and `POST /delete-credentials`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct OutcomeBody {
    pub status: Option<String>,
    pub message: Option<String>,
}

/// Request body for `POST /delete-credentials`.
#[derive(Debug, Clone, Serialize)]
pub struct DeleteRequest<'a> {
    pub exchange: &'a str,
}

/// Whether a `status` field reads `"success"`.
pub fn is_success_status(status: Option<&str>) -> bool {
    status == Some(STATUS_SUCCESS)
}

/// Decode the `credentials` map of a check response.
pub fn decode_statuses(raw: BTreeMap<String, Value>) -> BTreeMap<String, MaskedCredentialStatus> {
    raw.into_iter()
        .filter_map(|(exchange, value)| {
            match serde_json::from_value::<MaskedCredentialStatus>(value) {
                Ok(status) => Some((exchange, status)),
                Err(e) => {
                    tracing::warn!(exchange = %exchange, error = %e, "Skipping malformed credential status");
                    None
                }
            }
        })
        .collect()
}

/// Decode the `results` map of a validate response.
pub fn decode_verdicts(raw: BTreeMap<String, Value>) -> VerdictSet {
    raw.into_iter()
        .filter_map(|(exchange, value)| {
            match serde_json::from_value::<ValidationVerdict>(value) {
                Ok(verdict) => Some((exchange, verdict)),
                Err(e) => {
                    tracing::warn!(exchange = %exchange, error = %e, "Skipping malformed verdict");
                    None
                }
            }
        })
        .collect()
}
