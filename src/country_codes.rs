//! Dial code to flag mapping.

use crate::types::{DialCode, DialCodeError, MAX_DIAL_CODE_LEN};
use keshvar::Country;
use once_cell::sync::Lazy;
use serde::Deserialize;
use std::collections::HashMap;
use thiserror::Error;

/// Error when building a country code table.
#[derive(Debug, Error)]
pub enum CountryTableError {
    /// Table JSON could not be parsed.
    #[error("invalid country code table JSON: {0}")]
    Json(#[from] serde_json::Error),
    /// An entry carries a malformed dial code.
    #[error("invalid dial code '{dial_code}': {source}")]
    InvalidDialCode {
        dial_code: String,
        #[source]
        source: DialCodeError,
    },
    /// The same dial code appears twice.
    #[error("duplicate dial code +{dial_code}")]
    DuplicateDialCode { dial_code: DialCode },
    /// An entry has no flag glyph.
    #[error("dial code +{dial_code} has an empty flag")]
    EmptyFlag { dial_code: DialCode },
}

/// Raw JSON entry for country dial code data.
#[derive(Debug, Deserialize)]
struct CountryDialCodeEntry {
    #[serde(default)]
    name: Option<String>,
    flag: String,
    #[serde(default)]
    code: Option<String>,
    dial_code: String,
}

/// Dial codes JSON embedded at compile time.
static DIAL_CODES_JSON: &str = include_str!("../assets/country_dial_codes.json");

static BUILTIN: Lazy<CountryCodeTable> = Lazy::new(|| {
    CountryCodeTable::from_json(DIAL_CODES_JSON).expect("country_dial_codes.json is invalid")
});

/// A single dial code with its flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountryCodeEntry {
    dial_code: DialCode,
    flag: String,
    name: Option<String>,
    alpha2: Option<String>,
}

impl CountryCodeEntry {
    /// Create an entry from a dial code and flag glyph.
    pub fn new(dial_code: DialCode, flag: impl Into<String>) -> Self {
        Self {
            dial_code,
            flag: flag.into(),
            name: None,
            alpha2: None,
        }
    }

    /// Attach a display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Attach an ISO 3166-1 alpha-2 code.
    pub fn with_alpha2(mut self, alpha2: impl Into<String>) -> Self {
        self.alpha2 = Some(alpha2.into().to_uppercase());
        self
    }

    pub fn dial_code(&self) -> &DialCode {
        &self.dial_code
    }

    /// Flag emoji for this dial code.
    pub fn flag(&self) -> &str {
        &self.flag
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn alpha2(&self) -> Option<&str> {
        self.alpha2.as_deref()
    }

    /// ISO country for this entry, if the alpha-2 code is known to keshvar.
    ///
    /// Shared dial codes (e.g. "1" for USA and Canada) resolve to the
    /// country whose flag the table shows.
    pub fn country(&self) -> Option<Country> {
        let alpha2 = self.alpha2.as_deref()?;
        Country::try_from(alpha2).ok()
    }
}

/// Immutable mapping from dial code prefix to flag glyph.
///
/// Lookups use shortest-prefix matching: when both "1" and "12" are keys,
/// text starting with "12" resolves to "1". See [`shadowed_codes`] for the
/// keys this makes unreachable.
///
/// [`shadowed_codes`]: CountryCodeTable::shadowed_codes
#[derive(Debug, Clone, Default)]
pub struct CountryCodeTable {
    entries: Vec<CountryCodeEntry>,
    by_code: HashMap<String, usize>,
}

impl CountryCodeTable {
    /// The bundled table, parsed once on first use.
    pub fn builtin() -> &'static CountryCodeTable {
        &BUILTIN
    }

    /// Build a table from JSON of the form
    /// `[{"name": "...", "flag": "...", "code": "US", "dial_code": "+1"}]`.
    ///
    /// `name` and `code` are optional.
    pub fn from_json(json: &str) -> Result<Self, CountryTableError> {
        let raw: Vec<CountryDialCodeEntry> = serde_json::from_str(json)?;

        let mut entries = Vec::with_capacity(raw.len());
        for entry in raw {
            let dial_code =
                DialCode::new(&entry.dial_code).map_err(|source| {
                    CountryTableError::InvalidDialCode {
                        dial_code: entry.dial_code.clone(),
                        source,
                    }
                })?;
            let mut parsed = CountryCodeEntry::new(dial_code, entry.flag);
            if let Some(name) = entry.name {
                parsed = parsed.with_name(name);
            }
            if let Some(code) = entry.code {
                parsed = parsed.with_alpha2(code);
            }
            entries.push(parsed);
        }

        Self::from_entries(entries)
    }

    /// Build a table from `(dial code, flag)` pairs.
    pub fn from_pairs<I, C, F>(pairs: I) -> Result<Self, CountryTableError>
    where
        I: IntoIterator<Item = (C, F)>,
        C: AsRef<str>,
        F: Into<String>,
    {
        let mut entries = Vec::new();
        for (code, flag) in pairs {
            let code = code.as_ref();
            let dial_code =
                DialCode::new(code).map_err(|source| CountryTableError::InvalidDialCode {
                    dial_code: code.to_string(),
                    source,
                })?;
            entries.push(CountryCodeEntry::new(dial_code, flag));
        }
        Self::from_entries(entries)
    }

    /// Build a table from entries, rejecting duplicates and empty flags.
    pub fn from_entries(
        entries: impl IntoIterator<Item = CountryCodeEntry>,
    ) -> Result<Self, CountryTableError> {
        let mut table = Self::default();
        for entry in entries {
            if entry.flag.trim().is_empty() {
                return Err(CountryTableError::EmptyFlag {
                    dial_code: entry.dial_code,
                });
            }
            let key = entry.dial_code.as_str().to_string();
            if table.by_code.contains_key(&key) {
                return Err(CountryTableError::DuplicateDialCode {
                    dial_code: entry.dial_code,
                });
            }
            table.by_code.insert(key, table.entries.len());
            table.entries.push(entry);
        }

        #[cfg(feature = "tracing")]
        {
            tracing::debug!(entries = table.len(), "built country code table");
            for (shorter, longer) in table.shadowed_codes() {
                tracing::warn!(
                    %shorter,
                    %longer,
                    "dial code +{longer} is unreachable: +{shorter} always matches first"
                );
            }
        }

        Ok(table)
    }

    /// Entry for an exact dial code (without '+').
    pub fn get(&self, code: &str) -> Option<&CountryCodeEntry> {
        self.by_code.get(code).map(|&i| &self.entries[i])
    }

    /// Flag glyph for an exact dial code (without '+').
    pub fn flag(&self, code: &str) -> Option<&str> {
        self.get(code).map(CountryCodeEntry::flag)
    }

    pub fn contains(&self, code: &str) -> bool {
        self.by_code.contains_key(code)
    }

    /// Shortest key that prefixes `digits`, scanning 1 to
    /// [`MAX_DIAL_CODE_LEN`] characters.
    ///
    /// `digits` is the text after the leading '+'.
    pub fn resolve_prefix(&self, digits: &str) -> Option<&CountryCodeEntry> {
        digits
            .char_indices()
            .map(|(i, c)| i + c.len_utf8())
            .take(MAX_DIAL_CODE_LEN)
            .find_map(|end| self.get(&digits[..end]))
    }

    /// Pairs `(shorter, longer)` where `longer` can never be resolved
    /// because `shorter` is one of its prefixes.
    pub fn shadowed_codes(&self) -> Vec<(&DialCode, &DialCode)> {
        let mut shadowed = Vec::new();
        for entry in &self.entries {
            let code = entry.dial_code.as_str();
            if let Some(shorter) = (1..code.len()).find_map(|end| self.get(&code[..end])) {
                shadowed.push((&shorter.dial_code, &entry.dial_code));
            }
        }
        shadowed
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &CountryCodeEntry> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a CountryCodeTable {
    type Item = &'a CountryCodeEntry;
    type IntoIter = std::slice::Iter<'a, CountryCodeEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
