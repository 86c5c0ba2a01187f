//! Query Type Selector
//!
//! Highlights the focused query option. The selected index is held here, not
//! read back from element styles.

use crate::dom::{Document, DomError};
use crate::fields::FieldKey;
use crate::style::{Display, NEUTRAL_BORDER, SELECTED_BACKGROUND, SELECTED_BORDER};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuerySelector {
    selected: Option<usize>,
}

impl QuerySelector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn is_selected(&self) -> bool {
        self.selected.is_some()
    }

    /// Runs on focus, so tabbing through the radios moves the highlight even
    /// though nothing gets checked.
    pub fn select(&mut self, doc: &mut Document, index: usize) -> Result<(), DomError> {
        doc.query_option(index)?;

        let error_text = doc.error_text_mut(FieldKey::QueryType)?;
        if error_text.style.is_visible() {
            error_text.style.display = Some(Display::None);
        }

        if self.is_selected() {
            self.reset(doc)?;
        }

        let container = &mut doc.query_option_mut(index)?.container;
        container.style.background_color = Some(SELECTED_BACKGROUND.to_string());
        container.style.border = Some(SELECTED_BORDER.to_string());
        self.selected = Some(index);
        tracing::debug!(index, "query option selected");
        Ok(())
    }

    /// Clears the highlighted option. Returns the index that was cleared, or
    /// `None` when nothing was selected.
    pub fn reset(&mut self, doc: &mut Document) -> Result<Option<usize>, DomError> {
        let Some(index) = self.selected else {
            return Ok(None);
        };
        let container = &mut doc.query_option_mut(index)?.container;
        container.style.background_color = None;
        container.style.border = Some(NEUTRAL_BORDER.to_string());
        self.selected = None;
        Ok(Some(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FormConfig;
    use crate::render::render;
    use crate::validation::{ErrorEntry, ErrorMap};

    fn document() -> Document {
        Document::contact_form(&FormConfig::default().query_types)
    }

    #[test]
    fn test_select_moves_highlight() {
        let mut doc = document();
        let mut selector = QuerySelector::new();

        selector.select(&mut doc, 0).unwrap();
        assert!(selector.is_selected());
        assert!(doc.query_option(0).unwrap().container.style.is_highlighted());

        selector.select(&mut doc, 1).unwrap();
        assert!(selector.is_selected());
        assert_eq!(selector.selected(), Some(1));

        let first = &doc.query_option(0).unwrap().container.style;
        assert!(!first.is_highlighted());
        assert_eq!(first.border.as_deref(), Some(NEUTRAL_BORDER));
        let second = &doc.query_option(1).unwrap().container.style;
        assert!(second.is_highlighted());
        assert_eq!(second.border.as_deref(), Some(SELECTED_BORDER));
    }

    #[test]
    fn test_reselect_same_option_keeps_highlight() {
        let mut doc = document();
        let mut selector = QuerySelector::new();
        selector.select(&mut doc, 1).unwrap();
        selector.select(&mut doc, 1).unwrap();
        assert!(doc.query_option(1).unwrap().container.style.is_highlighted());
    }

    #[test]
    fn test_reset_without_selection_is_noop() {
        let mut doc = document();
        let mut selector = QuerySelector::new();
        assert_eq!(selector.reset(&mut doc).unwrap(), None);
    }

    #[test]
    fn test_select_hides_query_error() {
        let mut doc = document();
        let mut errors = ErrorMap::new();
        errors.insert(FieldKey::QueryType, ErrorEntry::required("Pick one"));
        render(&mut doc, &errors).unwrap();

        let mut selector = QuerySelector::new();
        selector.select(&mut doc, 0).unwrap();
        assert!(!doc.error_text(FieldKey::QueryType).unwrap().style.is_visible());
    }

    #[test]
    fn test_select_out_of_range_leaves_state() {
        let mut doc = document();
        let mut selector = QuerySelector::new();
        selector.select(&mut doc, 0).unwrap();
        assert_eq!(selector.select(&mut doc, 9), Err(DomError::OptionOutOfRange(9)));
        assert_eq!(selector.selected(), Some(0));
    }
}
