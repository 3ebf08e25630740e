//! Exchange identifiers and credential field kinds.

use std::fmt;

/// The kind of secret a credential field holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldKind {
    ApiKey,
    ApiSecret,
    Password,
}

impl FieldKind {
    /// All field kinds in display order.
    pub const ALL: [FieldKind; 3] = [FieldKind::ApiKey, FieldKind::ApiSecret, FieldKind::Password];

    /// Wire name used in composite keys and status payloads.
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldKind::ApiKey => "api_key",
            FieldKind::ApiSecret => "api_secret",
            FieldKind::Password => "password",
        }
    }

    /// Human label for the form.
    pub fn label(&self) -> &'static str {
        match self {
            FieldKind::ApiKey => "API Key",
            FieldKind::ApiSecret => "API Secret",
            FieldKind::Password => "Passphrase",
        }
    }

    /// Parse a wire name. Unknown names yield `None`.
    pub fn parse(name: &str) -> Option<Self> {
        FieldKind::ALL.into_iter().find(|k| k.as_str() == name)
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identifies one credential field: `(exchange, kind)`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FieldKey {
    pub exchange: String,
    pub kind: FieldKind,
}

impl FieldKey {
    pub fn new(exchange: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            exchange: exchange.into(),
            kind,
        }
    }

    /// The `"<exchange>_<field kind>"` key used on the wire.
    pub fn composite(&self) -> String {
        format!("{}_{}", self.exchange, self.kind.as_str())
    }

    /// Parse a composite key.
    ///
    /// Matching is done on the field-kind suffix, so exchange ids that
    /// themselves contain underscores still parse.
    pub fn parse_composite(key: &str) -> Option<Self> {
        FieldKind::ALL.into_iter().find_map(|kind| {
            let exchange = key.strip_suffix(kind.as_str())?.strip_suffix('_')?;
            if exchange.is_empty() {
                None
            } else {
                Some(FieldKey::new(exchange, kind))
            }
        })
    }
}

impl fmt::Display for FieldKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.exchange, self.kind.as_str())
    }
}

/// Check that an exchange id is a short lowercase alphanumeric key.
pub fn is_valid_exchange_id(id: &str) -> bool {
    !id.is_empty()
        && id
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_' || c == '-')
}
