//! Per-exchange validation verdicts and the save gate.

use serde::Deserialize;
use std::collections::BTreeMap;

use super::submission::CredentialSubmission;

/// Message used when the backend returned no verdict for a submitted exchange.
pub const MISSING_VERDICT_MESSAGE: &str = "no validation result returned";

/// Outcome of validating one exchange's credentials.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ValidationVerdict {
    pub valid: bool,
    pub message: String,
}

impl ValidationVerdict {
    pub fn pass(message: impl Into<String>) -> Self {
        Self {
            valid: true,
            message: message.into(),
        }
    }

    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            valid: false,
            message: message.into(),
        }
    }

    fn marker(&self) -> &'static str {
        if self.valid {
            "✅"
        } else {
            "❌"
        }
    }
}

/// All verdicts produced by one validate call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VerdictSet {
    verdicts: BTreeMap<String, ValidationVerdict>,
}

impl VerdictSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, exchange: impl Into<String>, verdict: ValidationVerdict) {
        self.verdicts.insert(exchange.into(), verdict);
    }

    pub fn get(&self, exchange: &str) -> Option<&ValidationVerdict> {
        self.verdicts.get(exchange)
    }

    pub fn is_empty(&self) -> bool {
        self.verdicts.is_empty()
    }

    pub fn len(&self) -> usize {
        self.verdicts.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &ValidationVerdict)> {
        self.verdicts.iter()
    }

    /// The save gate: every exchange in `submission` has a passing verdict.
    ///
    /// An exchange with no verdict at all counts as failed. Verdicts for
    /// exchanges outside the submission are not consulted.
    pub fn all_valid_for(&self, submission: &CredentialSubmission) -> bool {
        let exchanges = submission.exchanges();
        !exchanges.is_empty()
            && exchanges
                .iter()
                .all(|e| self.verdicts.get(e).is_some_and(|v| v.valid))
    }

    /// One line per exchange, pass/fail marker first.
    ///
    /// Lists every returned verdict plus a failure line for each submitted
    /// exchange the backend skipped, so the operator sees all outcomes at
    /// once.
    pub fn summary_for(&self, submission: &CredentialSubmission) -> String {
        let mut lines: Vec<String> = self
            .verdicts
            .iter()
            .map(|(exchange, v)| format!("{} {}: {}", v.marker(), exchange, v.message))
            .collect();

        for exchange in submission.exchanges() {
            if !self.verdicts.contains_key(&exchange) {
                lines.push(format!("❌ {}: {}", exchange, MISSING_VERDICT_MESSAGE));
            }
        }

        lines.join("\n")
    }
}

impl FromIterator<(String, ValidationVerdict)> for VerdictSet {
    fn from_iter<T: IntoIterator<Item = (String, ValidationVerdict)>>(iter: T) -> Self {
        Self {
            verdicts: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::exchange::{FieldKey, FieldKind};

    fn submission(entries: &[(&str, FieldKind, &str)]) -> CredentialSubmission {
        let mut s = CredentialSubmission::new();
        for (exchange, kind, value) in entries {
            s.insert(&FieldKey::new(*exchange, *kind), value);
        }
        s
    }

    #[test]
    fn test_gate_passes_when_every_submitted_exchange_is_valid() {
        let s = submission(&[
            ("binance", FieldKind::ApiKey, "abc"),
            ("okx", FieldKind::ApiKey, "def"),
        ]);
        let verdicts: VerdictSet = [
            ("binance".to_string(), ValidationVerdict::pass("OK")),
            ("okx".to_string(), ValidationVerdict::pass("OK")),
        ]
        .into_iter()
        .collect();
        assert!(verdicts.all_valid_for(&s));
    }

    #[test]
    fn test_gate_fails_on_any_invalid_or_missing_verdict() {
        let s = submission(&[
            ("binance", FieldKind::ApiKey, "abc"),
            ("okx", FieldKind::ApiKey, "def"),
        ]);

        let mut one_bad = VerdictSet::new();
        one_bad.insert("binance", ValidationVerdict::pass("OK"));
        one_bad.insert("okx", ValidationVerdict::fail("Invalid key"));
        assert!(!one_bad.all_valid_for(&s));

        let mut missing = VerdictSet::new();
        missing.insert("binance", ValidationVerdict::pass("OK"));
        assert!(!missing.all_valid_for(&s));
    }

    #[test]
    fn test_gate_ignores_verdicts_for_unsubmitted_exchanges() {
        let s = submission(&[("binance", FieldKind::ApiKey, "abc")]);
        let mut verdicts = VerdictSet::new();
        verdicts.insert("binance", ValidationVerdict::pass("OK"));
        verdicts.insert("kraken", ValidationVerdict::fail("nope"));
        assert!(verdicts.all_valid_for(&s));
    }

    #[test]
    fn test_gate_never_passes_empty_submission() {
        let verdicts = VerdictSet::new();
        assert!(!verdicts.all_valid_for(&CredentialSubmission::new()));
    }

    #[test]
    fn test_summary_lists_every_exchange() {
        let s = submission(&[
            ("binance", FieldKind::ApiKey, "abc"),
            ("kraken", FieldKind::ApiKey, "bad"),
            ("okx", FieldKind::ApiKey, "x"),
        ]);
        let mut verdicts = VerdictSet::new();
        verdicts.insert("binance", ValidationVerdict::pass("OK"));
        verdicts.insert("kraken", ValidationVerdict::fail("Invalid key"));

        assert_eq!(
            verdicts.summary_for(&s),
            "✅ binance: OK\n❌ kraken: Invalid key\n❌ okx: no validation result returned"
        );
    }
}
