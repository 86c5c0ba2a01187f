//! Validation System - Rules Produce Errors, the Validator Collects Them
//!
//! Validation failures are data. Nothing in here returns `Err`.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::OnceLock;

use crate::config::Messages;
use crate::fields::{FieldKey, FormData};

/// Accepts a deliberately narrow address shape: optional `.`/`_` in the local
/// part, letters with at most one `_` in the domain, and `.com` only.
/// Kept as shipped; the empty local part and underscore domains are accepted.
const EMAIL_PATTERN: &str = r"^[a-zA-Z0-9]*[._]?[a-zA-Z0-9]*@[a-zA-Z]*_?[a-zA-Z]*\.com$";

// EMAIL_PATTERN is a constant checked by `test_email_pattern_compiles`.
fn email_regex() -> &'static Regex {
    static EMAIL_RE: OnceLock<Regex> = OnceLock::new();
    EMAIL_RE.get_or_init(|| Regex::new(EMAIL_PATTERN).expect("email pattern is valid"))
}

pub fn is_valid_email(value: &str) -> bool {
    email_regex().is_match(value)
}

pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    Required,
    InvalidFormat,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorEntry {
    pub kind: ErrorKind,
    pub message: String,
}

impl ErrorEntry {
    pub fn required(message: impl Into<String>) -> Self {
        Self { kind: ErrorKind::Required, message: message.into() }
    }

    pub fn invalid_format(message: impl Into<String>) -> Self {
        Self { kind: ErrorKind::InvalidFormat, message: message.into() }
    }
}

/// Invalid fields of one submit attempt. A key is present exactly when that
/// field is invalid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ErrorMap(BTreeMap<FieldKey, ErrorEntry>);

impl ErrorMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keeps the first error recorded for a field.
    pub fn insert(&mut self, key: FieldKey, entry: ErrorEntry) {
        self.0.entry(key).or_insert(entry);
    }

    pub fn get(&self, key: FieldKey) -> Option<&ErrorEntry> {
        self.0.get(&key)
    }

    pub fn contains(&self, key: FieldKey) -> bool {
        self.0.contains_key(&key)
    }

    pub fn keys(&self) -> impl Iterator<Item = FieldKey> + '_ {
        self.0.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (FieldKey, &ErrorEntry)> {
        self.0.iter().map(|(k, v)| (*k, v))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Validation rule trait - checks one field value
pub trait ValidationRule {
    fn name(&self) -> &'static str;
    fn validate(&self, key: FieldKey, value: &str, messages: &Messages) -> Option<ErrorEntry>;
}

// --- Concrete Rules ---

pub struct RequiredRule;

impl ValidationRule for RequiredRule {
    fn name(&self) -> &'static str { "required" }

    fn validate(&self, key: FieldKey, value: &str, messages: &Messages) -> Option<ErrorEntry> {
        if key.is_required_text() && is_blank(value) {
            Some(ErrorEntry::required(messages.required.clone()))
        } else {
            None
        }
    }
}

pub struct EmailFormatRule;

impl ValidationRule for EmailFormatRule {
    fn name(&self) -> &'static str { "email_format" }

    fn validate(&self, key: FieldKey, value: &str, messages: &Messages) -> Option<ErrorEntry> {
        // The pattern runs on the raw value; surrounding spaces fail it.
        if key != FieldKey::Email || is_valid_email(value) {
            return None;
        }
        Some(ErrorEntry::invalid_format(messages.invalid_email.clone()))
    }
}

/// Validator runs the rules in order; the first failing rule wins per field.
pub struct Validator {
    rules: Vec<Box<dyn ValidationRule>>,
    messages: Messages,
}

impl Validator {
    pub fn new(messages: Messages) -> Self {
        Self {
            rules: vec![Box::new(RequiredRule), Box::new(EmailFormatRule)],
            messages,
        }
    }

    pub fn messages(&self) -> &Messages {
        &self.messages
    }

    pub fn validate_field(&self, key: FieldKey, value: &str) -> Option<ErrorEntry> {
        // Presence of these two is checked against the whole submission.
        if matches!(key, FieldKey::QueryType | FieldKey::Consent) {
            return None;
        }
        self.rules
            .iter()
            .find_map(|rule| rule.validate(key, value, &self.messages))
    }

    /// Builds a fresh error map for one submit attempt.
    pub fn validate_submission(&self, fields: &FormData, consent_checked: bool) -> ErrorMap {
        let mut errors = ErrorMap::new();

        if !consent_checked {
            errors.insert(
                FieldKey::Consent,
                ErrorEntry::required(self.messages.consent_required.clone()),
            );
        }
        if !fields.contains(FieldKey::QueryType) {
            errors.insert(
                FieldKey::QueryType,
                ErrorEntry::required(self.messages.query_required.clone()),
            );
        }

        for (name, value) in fields.iter() {
            let Some(key) = FieldKey::parse(name) else {
                continue;
            };
            if let Some(entry) = self.validate_field(key, value) {
                tracing::debug!(field = %key, kind = ?entry.kind, "field rejected");
                errors.insert(key, entry);
            }
        }

        errors
    }
}

impl Default for Validator {
    fn default() -> Self {
        Self::new(Messages::default())
    }
}
