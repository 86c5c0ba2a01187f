//! Contact Form Core - Validation and Feedback for the Contact Form
//!
//! # Ground Rules
//! 1. Every submit is validated
//! 2. One fresh error map per attempt
//! 3. Rendering only adds error state; corrections clear it
//! 4. Selection lives in state, not in styles

pub mod config;
pub mod fields;
pub mod validation;
pub mod style;
pub mod dom;
pub mod render;
pub mod selector;
pub mod form;

pub use config::{ConfigError, FormConfig, Messages, QueryTypeOption};
pub use fields::{FieldKey, FormData};
pub use validation::{is_valid_email, ErrorEntry, ErrorKind, ErrorMap, ValidationRule, Validator};
pub use dom::{Document, DomError, Element};
pub use selector::QuerySelector;
pub use form::{ContactForm, ContactFormError, FormEvent, SubmissionReceipt, SubmitOutcome};

pub const ENGINE_VERSION: &str = env!("CARGO_PKG_VERSION");
