//! Form Configuration
//!
//! Loaded from JSON; every key is optional and falls back to the behaviour of
//! the shipped form.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Config must declare at least one query type")]
    NoQueryTypes,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormConfig {
    /// Clear a field's error as soon as the user corrects it, instead of
    /// waiting for the next submit.
    #[serde(default = "default_true")]
    pub live_clear: bool,
    #[serde(default = "default_query_types")]
    pub query_types: Vec<QueryTypeOption>,
    #[serde(default)]
    pub messages: Messages,
}

fn default_true() -> bool { true }

fn default_query_types() -> Vec<QueryTypeOption> {
    vec![
        QueryTypeOption {
            value: "general".to_string(),
            label: "General Enquiry".to_string(),
        },
        QueryTypeOption {
            value: "support".to_string(),
            label: "Support Request".to_string(),
        },
    ]
}

/// One radio of the query type group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryTypeOption {
    pub value: String,
    pub label: String,
}

/// User-facing error texts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Messages {
    #[serde(default = "default_required")]
    pub required: String,
    #[serde(default = "default_invalid_email")]
    pub invalid_email: String,
    #[serde(default = "default_consent_required")]
    pub consent_required: String,
    #[serde(default = "default_query_required")]
    pub query_required: String,
}

fn default_required() -> String { "This field is required".to_string() }
fn default_invalid_email() -> String { "Email address format is not valid".to_string() }
fn default_consent_required() -> String {
    "To submit this form, please consent to being contacted".to_string()
}
fn default_query_required() -> String { "Please select a query type".to_string() }

impl Default for Messages {
    fn default() -> Self {
        Self {
            required: default_required(),
            invalid_email: default_invalid_email(),
            consent_required: default_consent_required(),
            query_required: default_query_required(),
        }
    }
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            live_clear: true,
            query_types: default_query_types(),
            messages: Messages::default(),
        }
    }
}

impl FormConfig {
    pub fn from_json(content: &str) -> Result<Self, ConfigError> {
        let config: FormConfig = serde_json::from_str(content)?;
        if config.query_types.is_empty() {
            return Err(ConfigError::NoQueryTypes);
        }
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Load from `path` if given, otherwise use the built-in defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }
}
