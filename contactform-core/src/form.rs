//! Contact Form - Event Handlers Over One Context
//!
//! Every submit goes through validation. There is no path to the success
//! panel that skips it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;
use std::path::Path;

use crate::config::{ConfigError, FormConfig};
use crate::dom::{Document, DomError};
use crate::fields::{FieldKey, FormData};
use crate::render::{input_handler, render, show_success};
use crate::selector::QuerySelector;
use crate::validation::{ErrorMap, Validator};

#[cfg(feature = "test-hooks")]
use std::sync::atomic::{AtomicU32, Ordering};

#[cfg(feature = "test-hooks")]
static VALIDATION_CALL_COUNT: AtomicU32 = AtomicU32::new(0);

#[cfg(feature = "test-hooks")]
pub fn get_validation_call_count() -> u32 {
    VALIDATION_CALL_COUNT.load(Ordering::SeqCst)
}

#[cfg(feature = "test-hooks")]
pub fn reset_validation_call_count() {
    VALIDATION_CALL_COUNT.store(0, Ordering::SeqCst);
}

#[derive(Debug, Error)]
pub enum ContactFormError {
    #[error("Markup mismatch: {0}")]
    Dom(#[from] DomError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Keyup on non-text field: {0}")]
    NotTextField(FieldKey),
}

/// User interactions the form reacts to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FormEvent {
    /// Focus lands on a query radio (tab or click).
    Focus { index: usize },
    /// Click on a query radio: focus, then check.
    ClickOption { index: usize },
    /// The user typed into a text field; `value` is the field content after
    /// the key went up.
    Keyup { field: FieldKey, value: String },
    /// Click on the consent checkbox.
    ClickConsent,
    Submit,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmissionReceipt {
    pub id: String,
    pub submitted_at: DateTime<Utc>,
    pub query_type: String,
    pub fields: FormData,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SubmitOutcome {
    Rejected { errors: ErrorMap },
    Accepted { receipt: SubmissionReceipt },
}

impl SubmitOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, SubmitOutcome::Accepted { .. })
    }

    pub fn errors(&self) -> Option<&ErrorMap> {
        match self {
            SubmitOutcome::Rejected { errors } => Some(errors),
            SubmitOutcome::Accepted { .. } => None,
        }
    }
}

/// Page state plus everything the handlers need; replaces module globals.
pub struct ContactForm {
    config: FormConfig,
    document: Document,
    validator: Validator,
    selector: QuerySelector,
}

impl ContactForm {
    pub fn new(config: FormConfig) -> Self {
        Self {
            document: Document::contact_form(&config.query_types),
            validator: Validator::new(config.messages.clone()),
            selector: QuerySelector::new(),
            config,
        }
    }

    /// Builds the form from a JSON config file, or the defaults when no path
    /// is given.
    pub fn from_config_file(path: Option<&Path>) -> Result<Self, ContactFormError> {
        Ok(Self::new(FormConfig::load_or_default(path)?))
    }

    pub fn config(&self) -> &FormConfig {
        &self.config
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn document_mut(&mut self) -> &mut Document {
        &mut self.document
    }

    pub fn validator(&self) -> &Validator {
        &self.validator
    }

    pub fn selector(&self) -> &QuerySelector {
        &self.selector
    }

    /// Validate a detached submission without touching the page.
    pub fn validate(&self, fields: &FormData, consent_checked: bool) -> ErrorMap {
        #[cfg(feature = "test-hooks")]
        VALIDATION_CALL_COUNT.fetch_add(1, Ordering::SeqCst);

        self.validator.validate_submission(fields, consent_checked)
    }

    /// Submit handler. Default submission is always suppressed; the outcome
    /// is rendered into the page and returned.
    pub fn handle_submit(&mut self) -> Result<SubmitOutcome, ContactFormError> {
        let fields = self.document.form_data()?;
        let consent_checked = self.document.consent_checked()?;

        let errors = self.validate(&fields, consent_checked);

        if !errors.is_empty() {
            tracing::info!(
                fields = ?errors.keys().map(|k| k.as_str()).collect::<Vec<_>>(),
                "submission rejected"
            );
            render(&mut self.document, &errors)?;
            return Ok(SubmitOutcome::Rejected { errors });
        }

        show_success(&mut self.document)?;

        let receipt = SubmissionReceipt {
            id: Uuid::new_v4().to_string(),
            submitted_at: Utc::now(),
            query_type: fields.get(FieldKey::QueryType).unwrap_or_default().to_string(),
            fields,
        };
        tracing::info!(id = %receipt.id, query_type = %receipt.query_type, "submission accepted");
        Ok(SubmitOutcome::Accepted { receipt })
    }

    pub fn handle_focus(&mut self, index: usize) -> Result<(), ContactFormError> {
        self.selector.select(&mut self.document, index)?;
        Ok(())
    }

    pub fn handle_option_click(&mut self, index: usize) -> Result<(), ContactFormError> {
        self.handle_focus(index)?;
        self.document.check_query_option(index)?;
        Ok(())
    }

    /// Only text inputs take keystrokes; radios and the checkbox have their
    /// own handlers.
    pub fn handle_keyup(&mut self, field: FieldKey, value: &str) -> Result<(), ContactFormError> {
        if !field.is_required_text() {
            return Err(ContactFormError::NotTextField(field));
        }
        self.document.set_value(field, value)?;
        if self.config.live_clear && input_handler(&mut self.document, field)? {
            tracing::debug!(field = %field, "error cleared on input");
        }
        Ok(())
    }

    pub fn handle_consent_click(&mut self) -> Result<(), ContactFormError> {
        let consent = self.document.input_mut(FieldKey::Consent)?;
        consent.checked = !consent.checked;
        if self.config.live_clear && input_handler(&mut self.document, FieldKey::Consent)? {
            tracing::debug!("consent error cleared");
        }
        Ok(())
    }

    /// Routes an event to its handler. Returns the outcome for submits.
    pub fn dispatch(&mut self, event: &FormEvent) -> Result<Option<SubmitOutcome>, ContactFormError> {
        tracing::debug!(?event, "dispatch");
        match event {
            FormEvent::Focus { index } => self.handle_focus(*index)?,
            FormEvent::ClickOption { index } => self.handle_option_click(*index)?,
            FormEvent::Keyup { field, value } => self.handle_keyup(*field, value)?,
            FormEvent::ClickConsent => self.handle_consent_click()?,
            FormEvent::Submit => return self.handle_submit().map(Some),
        }
        Ok(None)
    }
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new(FormConfig::default())
    }
}
