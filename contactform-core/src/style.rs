//! Visual Contract
//!
//! Inline style values the validator writes. The stylesheet itself lives with
//! the markup; these are the only values script code is allowed to set.

use serde::{Deserialize, Serialize};

/// Border applied to an input that failed validation.
pub const ERROR_BORDER: &str = "1px solid hsl(0, 66%, 54%)";

/// Border of an input or option in its resting state.
pub const NEUTRAL_BORDER: &str = "1px solid hsl(186, 15%, 59%)";

/// Border of the highlighted query option.
pub const SELECTED_BORDER: &str = "1px solid hsl(169, 82%, 27%)";

/// Background of the highlighted query option.
pub const SELECTED_BACKGROUND: &str = "lightgray";

/// CSS `display` values toggled by the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Display {
    None,
    Block,
    Flex,
}

impl Display {
    pub fn as_css(&self) -> &'static str {
        match self {
            Display::None => "none",
            Display::Block => "block",
            Display::Flex => "flex",
        }
    }
}

/// Inline `style` attribute of an element.
///
/// `None` means the property is not set inline and the stylesheet decides.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineStyle {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display: Option<Display>,
}

impl InlineStyle {
    /// Error text and panels start hidden by the stylesheet; only an explicit
    /// `block`/`flex` counts as visible.
    pub fn is_visible(&self) -> bool {
        matches!(self.display, Some(Display::Block) | Some(Display::Flex))
    }

    pub fn has_error_border(&self) -> bool {
        self.border.as_deref() == Some(ERROR_BORDER)
    }

    pub fn is_highlighted(&self) -> bool {
        self.background_color.as_deref() == Some(SELECTED_BACKGROUND)
    }
}
