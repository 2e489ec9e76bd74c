//! Splitting typed text into dial code and remaining number.

use crate::country_codes::{CountryCodeEntry, CountryCodeTable};
use crate::errors::InputError;
use crate::types::ChangeResult;

/// Outcome of interpreting one piece of typed text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decomposition<'t> {
    /// Matched table entry, if any.
    pub entry: Option<&'t CountryCodeEntry>,
    /// The value reported to the change handler.
    pub result: ChangeResult,
}

impl Decomposition<'_> {
    /// Text the field should display.
    pub fn display(&self) -> &str {
        &self.result.full_number
    }

    /// Digits after the dial code, trimmed. Present only with `entry`.
    pub fn remaining_number(&self) -> Option<&str> {
        self.result.remaining_number.as_deref()
    }

    /// Flag glyph of the matched entry.
    pub fn flag(&self) -> Option<&str> {
        self.entry.map(CountryCodeEntry::flag)
    }

    pub fn to_change_result(&self) -> ChangeResult {
        self.result.clone()
    }
}

/// Interpret `text` against `table`.
///
/// Non-empty text without a leading '+' is rejected with
/// [`InputError::MissingCountryCode`]. Otherwise the shortest table key
/// among the first 1 to 4 characters after '+' is taken as the dial code;
/// when none matches the text is passed through unchanged.
///
/// # Example
///
/// ```rust
/// use phone_input::{CountryCodeTable, decompose};
///
/// let table = CountryCodeTable::from_pairs([("44", "🇬🇧")]).unwrap();
/// let d = decompose("+442071234567", &table).unwrap();
/// assert_eq!(d.display(), "+44 2071234567");
/// assert_eq!(d.flag(), Some("🇬🇧"));
/// ```
pub fn decompose<'t>(
    text: &str,
    table: &'t CountryCodeTable,
) -> Result<Decomposition<'t>, InputError> {
    let Some(digits) = text.strip_prefix('+') else {
        if text.is_empty() {
            return Ok(unmatched(text));
        }
        return Err(InputError::missing_country_code());
    };

    let Some(entry) = table.resolve_prefix(digits) else {
        return Ok(unmatched(text));
    };

    let remaining = digits[entry.dial_code().len()..].trim();

    Ok(Decomposition {
        entry: Some(entry),
        result: ChangeResult::resolved(entry.dial_code().clone(), remaining),
    })
}

fn unmatched(text: &str) -> Decomposition<'static> {
    Decomposition {
        entry: None,
        result: ChangeResult::unresolved(text),
    }
}
