//! In-memory credential form.
//!
//! Holds the raw values the operator is typing plus the display state the
//! reconciler writes (placeholder and the "credentialed" marker). Raw values
//! never come from the backend; they only leave the form inside a
//! [`CredentialSubmission`].

use std::collections::BTreeMap;

use super::exchange::{FieldKey, FieldKind};
use super::status::MaskedCredentialStatus;
use super::submission::CredentialSubmission;

/// Prefix put in front of server-produced masked values.
pub const MASKED_PREFIX: &str = "🔐";

/// Shown when the backend reports a stored field but sends no masked text.
pub const MASKED_FALLBACK: &str = "••••";

/// One input of the form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CredentialField {
    /// Raw text typed by the operator
    pub value: String,
    /// Placeholder shown while `value` is empty
    pub placeholder: String,
    /// The backend holds a stored secret for this field
    pub credentialed: bool,
}

impl CredentialField {
    fn blank(kind: FieldKind) -> Self {
        Self {
            value: String::new(),
            placeholder: default_placeholder(kind),
            credentialed: false,
        }
    }
}

/// Placeholder for a field with nothing stored.
pub fn default_placeholder(kind: FieldKind) -> String {
    format!("Enter {}", kind.label())
}

/// Placeholder for a field the backend reports as stored.
pub fn masked_placeholder(masked: Option<&str>) -> String {
    let shown = masked.filter(|m| !m.is_empty()).unwrap_or(MASKED_FALLBACK);
    format!("{} {}", MASKED_PREFIX, shown)
}

/// The full set of per-exchange, per-kind fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CredentialForm {
    exchanges: Vec<String>,
    fields: BTreeMap<FieldKey, CredentialField>,
}

impl CredentialForm {
    /// Build a blank form with every field kind for each exchange.
    pub fn new<I, S>(exchanges: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut form = Self {
            exchanges: Vec::new(),
            fields: BTreeMap::new(),
        };
        for exchange in exchanges {
            let exchange = exchange.into();
            if form.exchanges.contains(&exchange) {
                continue;
            }
            for kind in FieldKind::ALL {
                form.fields
                    .insert(FieldKey::new(exchange.clone(), kind), CredentialField::blank(kind));
            }
            form.exchanges.push(exchange);
        }
        form
    }

    /// Exchanges in display order.
    pub fn exchanges(&self) -> &[String] {
        &self.exchanges
    }

    pub fn has_exchange(&self, exchange: &str) -> bool {
        self.exchanges.iter().any(|e| e == exchange)
    }

    /// Field keys in display order (exchange order, then kind order).
    pub fn keys(&self) -> Vec<FieldKey> {
        self.exchanges
            .iter()
            .flat_map(|e| FieldKind::ALL.into_iter().map(move |k| FieldKey::new(e.clone(), k)))
            .collect()
    }

    pub fn field(&self, key: &FieldKey) -> Option<&CredentialField> {
        self.fields.get(key)
    }

    /// Replace a field's raw value. Unknown keys are ignored.
    pub fn set_value(&mut self, key: &FieldKey, value: impl Into<String>) -> bool {
        match self.fields.get_mut(key) {
            Some(field) => {
                field.value = value.into();
                true
            }
            None => false,
        }
    }

    pub fn push_char(&mut self, key: &FieldKey, c: char) -> bool {
        match self.fields.get_mut(key) {
            Some(field) => {
                field.value.push(c);
                true
            }
            None => false,
        }
    }

    pub fn pop_char(&mut self, key: &FieldKey) -> bool {
        match self.fields.get_mut(key) {
            Some(field) => field.value.pop().is_some(),
            None => false,
        }
    }

    /// Collect every non-blank field into a submission.
    pub fn collect_submission(&self) -> CredentialSubmission {
        let mut submission = CredentialSubmission::new();
        for (key, field) in &self.fields {
            submission.insert(key, &field.value);
        }
        submission
    }

    /// Whether any field still holds raw text.
    pub fn has_raw_values(&self) -> bool {
        self.fields.values().any(|f| !f.value.is_empty())
    }

    /// Drop every raw value, keeping placeholders and markers.
    pub fn clear_values(&mut self) {
        for field in self.fields.values_mut() {
            field.value.clear();
        }
    }

    /// Reset every field of one exchange: values, placeholders and markers.
    ///
    /// Returns the number of fields reset.
    pub fn clear_exchange(&mut self, exchange: &str) -> usize {
        let mut cleared = 0;
        for (key, field) in self.fields.iter_mut() {
            if key.exchange == exchange {
                *field = CredentialField::blank(key.kind);
                cleared += 1;
            }
        }
        cleared
    }

    /// Overwrite the display state of every field the backend reports as
    /// stored for `exchange`.
    ///
    /// Fields reported absent are left alone. Any raw value in a reported
    /// field is discarded, including one the operator is typing right now.
    /// Returns the number of fields updated.
    pub fn apply_masked(&mut self, exchange: &str, status: &MaskedCredentialStatus) -> usize {
        let mut updated = 0;
        for kind in FieldKind::ALL {
            if !status.has(kind) {
                continue;
            }
            if let Some(field) = self.fields.get_mut(&FieldKey::new(exchange, kind)) {
                field.placeholder = masked_placeholder(status.masked(kind));
                field.value.clear();
                field.credentialed = true;
                updated += 1;
            }
        }
        updated
    }
}
