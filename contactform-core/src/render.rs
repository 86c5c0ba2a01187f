//! Feedback Rendering
//!
//! Writes validation results into the element model. Rendering is additive:
//! fields without an error keep whatever state they already show.

use crate::dom::{Document, DomError, SUCCESS_PANEL_ID};
use crate::fields::FieldKey;
use crate::style::{Display, ERROR_BORDER, NEUTRAL_BORDER};
use crate::validation::{is_blank, ErrorMap};

pub fn render(doc: &mut Document, errors: &ErrorMap) -> Result<(), DomError> {
    for (key, entry) in errors.iter() {
        if key.has_border() {
            doc.input_mut(key)?.style.border = Some(ERROR_BORDER.to_string());
        }
        let error_text = doc.error_text_mut(key)?;
        error_text.style.display = Some(Display::Block);
        error_text.text_content = entry.message.clone();
    }
    Ok(())
}

pub fn show_success(doc: &mut Document) -> Result<(), DomError> {
    doc.get_mut(SUCCESS_PANEL_ID)?.style.display = Some(Display::Flex);
    doc.scroll_to(0);
    Ok(())
}

/// Live correction after a failed submit.
///
/// Text inputs are checked on keyup, the checkbox on click. Returns whether an
/// error indicator was cleared.
pub fn input_handler(doc: &mut Document, key: FieldKey) -> Result<bool, DomError> {
    match key {
        FieldKey::Consent => {
            if !doc.input(key)?.checked || !doc.error_text(key)?.style.is_visible() {
                return Ok(false);
            }
            doc.error_text_mut(key)?.style.display = Some(Display::None);
            Ok(true)
        }
        key if key.has_border() => {
            let input = doc.input(key)?;
            if is_blank(&input.value) || !input.style.has_error_border() {
                return Ok(false);
            }
            doc.input_mut(key)?.style.border = Some(NEUTRAL_BORDER.to_string());
            doc.error_text_mut(key)?.style.display = Some(Display::None);
            Ok(true)
        }
        // Radios clear their error through the selector on focus.
        _ => Ok(false),
    }
}
