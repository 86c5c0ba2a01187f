//! Form Fields - Keys and Collected Values

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Keys of the contact form, as they appear in submitted form data.
///
/// Ordering follows the visual order of the form, which is also the order
/// errors are reported in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FieldKey {
    FirstName,
    LastName,
    Email,
    QueryType,
    Message,
    Consent,
}

impl FieldKey {
    pub const ALL: [FieldKey; 6] = [
        FieldKey::FirstName,
        FieldKey::LastName,
        FieldKey::Email,
        FieldKey::QueryType,
        FieldKey::Message,
        FieldKey::Consent,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FieldKey::FirstName => "first-name",
            FieldKey::LastName => "last-name",
            FieldKey::Email => "email",
            FieldKey::QueryType => "query-type",
            FieldKey::Message => "message",
            FieldKey::Consent => "consent",
        }
    }

    pub fn parse(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.as_str() == key)
    }

    /// Id of the input element backing this key.
    ///
    /// The query type is spread over several radios and has no single input.
    pub fn input_id(&self) -> Option<&'static str> {
        match self {
            FieldKey::FirstName => Some("first-name"),
            FieldKey::LastName => Some("last-name"),
            FieldKey::Email => Some("email-address"),
            FieldKey::Message => Some("message"),
            FieldKey::Consent => Some("consent"),
            FieldKey::QueryType => None,
        }
    }

    pub fn error_text_id(&self) -> &'static str {
        match self {
            FieldKey::FirstName => "first-name-error-text",
            FieldKey::LastName => "last-name-error-text",
            FieldKey::Email => "email-error-text",
            FieldKey::QueryType => "query-error-text",
            FieldKey::Message => "message-error-text",
            FieldKey::Consent => "consent-error-text",
        }
    }

    /// Text fields that must not be blank.
    pub fn is_required_text(&self) -> bool {
        matches!(
            self,
            FieldKey::FirstName | FieldKey::LastName | FieldKey::Email | FieldKey::Message
        )
    }

    /// Fields whose input gets the error border. Same set as the required
    /// text fields; radios and the checkbox only show error text.
    pub fn has_border(&self) -> bool {
        self.is_required_text()
    }
}

impl fmt::Display for FieldKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Name/value pairs gathered from the form on submit.
///
/// Mirrors browser form data: unknown names are carried along and ignored by
/// validation, and `query-type` is absent when no radio is checked.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormData(BTreeMap<String, String>);

impl FormData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn get(&self, key: FieldKey) -> Option<&str> {
        self.0.get(key.as_str()).map(String::as_str)
    }

    pub fn contains(&self, key: FieldKey) -> bool {
        self.0.contains_key(key.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FormData {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}
