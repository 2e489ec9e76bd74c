//! Per-widget display state.

use crate::decompose::Decomposition;
use crate::errors::InputError;

/// Display state re-derived on every keystroke.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputState {
    formatted_value: String,
    flag: Option<String>,
    error: Option<InputError>,
}

impl InputState {
    /// State showing `value` with no flag and no error.
    pub fn with_value(value: impl Into<String>) -> Self {
        Self {
            formatted_value: value.into(),
            ..Self::default()
        }
    }

    /// Text currently shown in the field.
    pub fn formatted_value(&self) -> &str {
        &self.formatted_value
    }

    /// Resolved flag glyph.
    pub fn flag(&self) -> Option<&str> {
        self.flag.as_deref()
    }

    pub fn error(&self) -> Option<&InputError> {
        self.error.as_ref()
    }

    pub fn has_error(&self) -> bool {
        self.error.is_some()
    }

    /// Show a successfully interpreted text.
    pub(crate) fn apply(&mut self, decomposition: &Decomposition<'_>) {
        self.error = None;
        self.flag = decomposition.flag().map(str::to_string);
        self.formatted_value = decomposition.display().to_string();
    }

    /// Show raw text alongside an inline error.
    pub(crate) fn reject(&mut self, raw: &str, error: InputError) {
        self.error = Some(error);
        self.flag = None;
        self.formatted_value = raw.to_string();
    }
}
