//! Render description handed to the host UI.

use super::style::Style;
use serde::Serialize;

/// Keyboard layout requested from the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum KeyboardType {
    PhonePad,
}

/// Everything the host needs to draw the input.
///
/// Styles are already merged: defaults first, then caller overrides.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PhoneInputView {
    pub container_style: Style,
    pub content_container_style: Style,
    /// Present only when flags are enabled and one is resolved.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flag: Option<FlagView>,
    pub input: TextFieldView,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorView>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FlagView {
    pub glyph: String,
    pub style: Style,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextFieldView {
    pub value: String,
    pub placeholder: String,
    pub placeholder_color: String,
    pub editable: bool,
    pub auto_focus: bool,
    pub focused: bool,
    pub max_length: usize,
    pub keyboard_type: KeyboardType,
    pub auto_correct: bool,
    pub style: Style,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorView {
    pub message: String,
    pub style: Style,
}
