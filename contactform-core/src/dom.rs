//! Element Model
//!
//! The slice of the page the form script reads and writes. Markup is owned
//! elsewhere; this only tracks per-element state.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

use crate::config::QueryTypeOption;
use crate::fields::{FieldKey, FormData};
use crate::style::{Display, InlineStyle, NEUTRAL_BORDER};

pub const FORM_ID: &str = "form";
pub const SUCCESS_PANEL_ID: &str = "success-message-container";
pub const QUERY_OPTION_CLASS: &str = "query-option";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomError {
    #[error("Element not found: #{0}")]
    ElementNotFound(String),

    #[error("Query option {0} out of range")]
    OptionOutOfRange(usize),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Element {
    pub id: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub classes: Vec<String>,
    #[serde(default)]
    pub style: InlineStyle,
    #[serde(default)]
    pub text_content: String,
    #[serde(default)]
    pub value: String,
    #[serde(default)]
    pub checked: bool,
}

impl Element {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into(), ..Default::default() }
    }

    fn with_class(mut self, class: &str) -> Self {
        self.classes.push(class.to_string());
        self
    }

    fn with_border(mut self, border: &str) -> Self {
        self.style.border = Some(border.to_string());
        self
    }

    fn hidden(mut self) -> Self {
        self.style.display = Some(Display::None);
        self
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }
}

/// A `.query-option` container and the radio inside it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryOption {
    pub container: Element,
    pub radio: Element,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    elements: BTreeMap<String, Element>,
    query_options: Vec<QueryOption>,
    scroll_y: u32,
}

impl Document {
    /// Builds the contact form page with one option per query type.
    pub fn contact_form(query_types: &[QueryTypeOption]) -> Self {
        let mut elements = BTreeMap::new();
        let mut add = |element: Element| {
            elements.insert(element.id.clone(), element);
        };

        add(Element::new(FORM_ID));
        for key in FieldKey::ALL {
            if let Some(input_id) = key.input_id() {
                let input = Element::new(input_id);
                add(if key.has_border() { input.with_border(NEUTRAL_BORDER) } else { input });
            }
            add(Element::new(key.error_text_id()).hidden());
        }
        add(Element::new(SUCCESS_PANEL_ID).hidden());

        let query_options = query_types
            .iter()
            .enumerate()
            .map(|(index, option)| {
                let mut radio = Element::new(format!("query-type-{}", index));
                radio.value = option.value.clone();
                QueryOption {
                    container: Element::new(format!("query-option-{}", index))
                        .with_class(QUERY_OPTION_CLASS)
                        .with_border(NEUTRAL_BORDER),
                    radio,
                    label: option.label.clone(),
                }
            })
            .collect();

        Self { elements, query_options, scroll_y: 0 }
    }

    pub fn get(&self, id: &str) -> Result<&Element, DomError> {
        self.elements
            .get(id)
            .ok_or_else(|| DomError::ElementNotFound(id.to_string()))
    }

    pub fn get_mut(&mut self, id: &str) -> Result<&mut Element, DomError> {
        self.elements
            .get_mut(id)
            .ok_or_else(|| DomError::ElementNotFound(id.to_string()))
    }

    pub fn input(&self, key: FieldKey) -> Result<&Element, DomError> {
        let id = key
            .input_id()
            .ok_or_else(|| DomError::ElementNotFound(key.as_str().to_string()))?;
        self.get(id)
    }

    pub fn input_mut(&mut self, key: FieldKey) -> Result<&mut Element, DomError> {
        let id = key
            .input_id()
            .ok_or_else(|| DomError::ElementNotFound(key.as_str().to_string()))?;
        self.get_mut(id)
    }

    pub fn error_text(&self, key: FieldKey) -> Result<&Element, DomError> {
        self.get(key.error_text_id())
    }

    pub fn error_text_mut(&mut self, key: FieldKey) -> Result<&mut Element, DomError> {
        self.get_mut(key.error_text_id())
    }

    pub fn query_options(&self) -> &[QueryOption] {
        &self.query_options
    }

    pub fn query_option(&self, index: usize) -> Result<&QueryOption, DomError> {
        self.query_options
            .get(index)
            .ok_or(DomError::OptionOutOfRange(index))
    }

    pub fn query_option_mut(&mut self, index: usize) -> Result<&mut QueryOption, DomError> {
        self.query_options
            .get_mut(index)
            .ok_or(DomError::OptionOutOfRange(index))
    }

    /// Checks one radio of the group and unchecks the rest.
    pub fn check_query_option(&mut self, index: usize) -> Result<(), DomError> {
        self.query_option(index)?;
        for (i, option) in self.query_options.iter_mut().enumerate() {
            option.radio.checked = i == index;
        }
        Ok(())
    }

    pub fn set_value(&mut self, key: FieldKey, value: &str) -> Result<(), DomError> {
        self.input_mut(key)?.value = value.to_string();
        Ok(())
    }

    pub fn consent_checked(&self) -> Result<bool, DomError> {
        Ok(self.input(FieldKey::Consent)?.checked)
    }

    /// Name/value pairs the browser would submit. The checkbox is left out;
    /// its state is read separately.
    pub fn form_data(&self) -> Result<FormData, DomError> {
        let mut data = FormData::new();
        for key in [FieldKey::FirstName, FieldKey::LastName, FieldKey::Email, FieldKey::Message] {
            data.insert(key.as_str(), self.input(key)?.value.clone());
        }
        if let Some(checked) = self.query_options.iter().find(|o| o.radio.checked) {
            data.insert(FieldKey::QueryType.as_str(), checked.radio.value.clone());
        }
        Ok(data)
    }

    pub fn scroll_y(&self) -> u32 {
        self.scroll_y
    }

    pub fn scroll_to(&mut self, y: u32) {
        self.scroll_y = y;
    }
}
