//! The batch of raw credential values collected at one submit.

use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use super::exchange::FieldKey;

/// Composite key → trimmed raw value.
///
/// The submission is moved into the in-flight save task and dropped when it
/// completes; nothing else keeps a copy. `Debug` prints keys only.
#[derive(Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CredentialSubmission {
    entries: BTreeMap<String, String>,
}

impl CredentialSubmission {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a field value. Blank values are skipped and the value is trimmed.
    ///
    /// Returns whether the entry was kept.
    pub fn insert(&mut self, key: &FieldKey, value: &str) -> bool {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return false;
        }
        self.entries.insert(key.composite(), trimmed.to_string());
        true
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Composite keys in the submission, sorted.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Value stored under a composite key.
    pub fn get(&self, composite: &str) -> Option<&str> {
        self.entries.get(composite).map(String::as_str)
    }

    /// Every exchange that has at least one entry.
    pub fn exchanges(&self) -> BTreeSet<String> {
        self.entries
            .keys()
            .filter_map(|k| FieldKey::parse_composite(k))
            .map(|k| k.exchange)
            .collect()
    }

    /// JSON request body shared by the validate and save endpoints.
    pub fn to_json(&self) -> String {
        serde_json::to_string(&self.entries).unwrap_or_else(|_| "{}".to_string())
    }
}

impl fmt::Debug for CredentialSubmission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CredentialSubmission")
            .field("keys", &self.entries.keys().collect::<Vec<_>>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::exchange::FieldKind;

    #[test]
    fn test_blank_values_are_skipped_and_values_trimmed() {
        let mut submission = CredentialSubmission::new();
        assert!(!submission.insert(&FieldKey::new("binance", FieldKind::ApiKey), "   "));
        assert!(submission.insert(&FieldKey::new("binance", FieldKind::ApiSecret), "  xyz \n"));

        assert_eq!(submission.len(), 1);
        assert_eq!(submission.get("binance_api_secret"), Some("xyz"));
        assert_eq!(submission.get("binance_api_key"), None);
    }

    #[test]
    fn test_exchanges_are_derived_from_keys() {
        let mut submission = CredentialSubmission::new();
        submission.insert(&FieldKey::new("binance", FieldKind::ApiKey), "a");
        submission.insert(&FieldKey::new("binance", FieldKind::ApiSecret), "b");
        submission.insert(&FieldKey::new("kucoin", FieldKind::Password), "c");

        let exchanges: Vec<_> = submission.exchanges().into_iter().collect();
        assert_eq!(exchanges, vec!["binance".to_string(), "kucoin".to_string()]);
    }

    #[test]
    fn test_json_body_is_flat_object() {
        let mut submission = CredentialSubmission::new();
        submission.insert(&FieldKey::new("binance", FieldKind::ApiKey), "abc");
        submission.insert(&FieldKey::new("binance", FieldKind::ApiSecret), "xyz");

        let body: serde_json::Value = serde_json::from_str(&submission.to_json()).unwrap();
        assert_eq!(
            body,
            serde_json::json!({"binance_api_key": "abc", "binance_api_secret": "xyz"})
        );
    }

    #[test]
    fn test_debug_never_prints_values() {
        let mut submission = CredentialSubmission::new();
        submission.insert(&FieldKey::new("binance", FieldKind::ApiSecret), "super-secret-value");

        let debug = format!("{:?}", submission);
        assert!(debug.contains("binance_api_secret"));
        assert!(!debug.contains("super-secret-value"));
    }
}
