//! Core types for phone number input.

use serde::{Deserialize, Deserializer, Serialize, Serializer, de};
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;
use thiserror::Error;

/// Longest dial code, in digits, that prefix matching will consider.
pub const MAX_DIAL_CODE_LEN: usize = 4;

// =============================================================================
// DialCode
// =============================================================================

/// Error when parsing a dial code.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DialCodeError {
    /// Dial code contains non-digit characters.
    #[error("dial code must contain only digits")]
    NonDigit,
    /// Dial code is empty.
    #[error("dial code cannot be empty")]
    Empty,
    /// Dial code is longer than [`MAX_DIAL_CODE_LEN`] digits.
    #[error("dial code must be at most {MAX_DIAL_CODE_LEN} digits")]
    TooLong,
}

/// Country dial code (e.g., "1" for USA, "380" for Ukraine).
///
/// Dial codes are stored without the leading '+' sign and hold between
/// 1 and [`MAX_DIAL_CODE_LEN`] ASCII digits.
///
/// # Example
///
/// ```rust
/// use phone_input::DialCode;
///
/// let dc = DialCode::new("+380").unwrap();
/// assert_eq!(dc.to_string(), "380");
///
/// let dc = DialCode::new("1").unwrap();
/// assert_eq!(dc.to_string(), "1");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DialCode(String);

impl DialCode {
    /// Create a new DialCode from a string.
    ///
    /// The input can include a leading '+' which will be stripped.
    pub fn new(s: impl AsRef<str>) -> Result<Self, DialCodeError> {
        let n = s.as_ref().trim().trim_start_matches('+');
        if n.is_empty() {
            return Err(DialCodeError::Empty);
        }
        if !n.chars().all(|c| c.is_ascii_digit()) {
            return Err(DialCodeError::NonDigit);
        }
        if n.len() > MAX_DIAL_CODE_LEN {
            return Err(DialCodeError::TooLong);
        }
        Ok(Self(n.to_string()))
    }

    /// Get the dial code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of digits in the code.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; a dial code holds at least one digit.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether `other` starts with this code and is strictly longer.
    pub fn is_proper_prefix_of(&self, other: &DialCode) -> bool {
        other.0.len() > self.0.len() && other.0.starts_with(&self.0)
    }
}

impl FromStr for DialCode {
    type Err = DialCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl Display for DialCode {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for DialCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl<'de> Deserialize<'de> for DialCode {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(d)?;
        DialCode::new(raw).map_err(de::Error::custom)
    }
}

impl Serialize for DialCode {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&self.0)
    }
}

// =============================================================================
// ChangeResult
// =============================================================================

/// Decomposed phone number reported to the change handler on every keystroke.
///
/// When `country_code` is present, `full_number` is `+<code>` followed by the
/// remaining number (separated by a single space when it is non-empty).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeResult {
    /// The number as displayed in the field.
    pub full_number: String,
    /// Resolved dial code, without '+'.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country_code: Option<DialCode>,
    /// Digits after the dial code, trimmed of surrounding whitespace.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remaining_number: Option<String>,
}

impl ChangeResult {
    /// A result with no resolved dial code.
    pub fn unresolved(full_number: impl Into<String>) -> Self {
        Self {
            full_number: full_number.into(),
            country_code: None,
            remaining_number: None,
        }
    }

    /// A result with a resolved dial code; `full_number` is derived.
    pub fn resolved(country_code: DialCode, remaining_number: impl Into<String>) -> Self {
        let remaining_number = remaining_number.into();
        let full_number = format!("+{country_code} {remaining_number}")
            .trim()
            .to_string();
        Self {
            full_number,
            country_code: Some(country_code),
            remaining_number: Some(remaining_number),
        }
    }

    /// Whether a dial code was resolved.
    pub fn has_country_code(&self) -> bool {
        self.country_code.is_some()
    }
}

impl Display for ChangeResult {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.full_number)
    }
}
