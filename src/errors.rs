//! Error types surfaced by the phone input.

use thiserror::Error;

/// Message shown when the caller supplies no custom error text.
pub const DEFAULT_MISSING_COUNTRY_CODE_MESSAGE: &str =
    "Please include the country code (e.g., +1)";

/// Errors produced while interpreting typed text.
///
/// These are advisory: the widget renders the message inline and keeps
/// reporting the raw text to the change handler.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    /// Non-empty text that does not start with '+'.
    #[error("{message}")]
    MissingCountryCode {
        /// Text to display under the field.
        message: String,
    },
}

impl InputError {
    /// Missing country code with the default message.
    pub fn missing_country_code() -> Self {
        Self::MissingCountryCode {
            message: DEFAULT_MISSING_COUNTRY_CODE_MESSAGE.to_string(),
        }
    }

    /// Replace the message with caller supplied text.
    ///
    /// An empty override keeps the current message.
    pub fn with_message(self, message: Option<&str>) -> Self {
        match (self, message) {
            (Self::MissingCountryCode { .. }, Some(m)) if !m.is_empty() => {
                Self::MissingCountryCode {
                    message: m.to_string(),
                }
            }
            (err, _) => err,
        }
    }

    /// The text to display.
    pub fn message(&self) -> &str {
        match self {
            Self::MissingCountryCode { message } => message,
        }
    }
}
