//! # Phone Input
//!
//! A headless phone number input with dial code detection.
//!
//! The widget takes the raw text of a phone field on every keystroke,
//! detects the international dial code after the leading `+`, resolves a
//! flag emoji for it, and reports the decomposed number to a change
//! handler. Drawing is left to the host UI, which renders the
//! [`PhoneInputView`] the widget describes.
//!
//! ## Quick Start
//!
//! ```rust
//! use phone_input::{ChangeResult, PhoneInput, PhoneInputConfig};
//!
//! let config = PhoneInputConfig::builder()
//!     .placeholder("Your phone")
//!     .auto_focus(true)
//!     .build();
//!
//! let mut input = PhoneInput::new(config, |result: &ChangeResult| {
//!     println!("{} ({:?})", result.full_number, result.country_code);
//! });
//! input.mount();
//!
//! let result = input.handle_text_change("+380501234567").unwrap();
//! assert_eq!(result.country_code.unwrap().as_str(), "380");
//! assert_eq!(result.remaining_number.as_deref(), Some("501234567"));
//! assert_eq!(input.view().flag.unwrap().glyph, "🇺🇦");
//! ```
//!
//! ## Dial code matching
//!
//! The first one to four characters after `+` are tried in order of
//! increasing length and the first table key found wins. With both "1" and
//! "12" in a table, "+123" resolves to "1";
//! [`CountryCodeTable::shadowed_codes`] lists keys made unreachable this way.
//!
//! ## Architecture
//!
//! ```text
//! PhoneInput<H>          (state, focus, view)
//!         │
//!         ▼
//!   decompose()          (pure prefix matching)
//!         │
//!         ▼
//! CountryCodeTable       (dial code -> flag)
//! ```
//!
//! ## Features
//!
//! - `tracing` - tracing instrumentation (enabled by default)

pub mod country_codes;
pub mod decompose;
pub mod errors;
pub mod input;
pub mod types;

// Re-export commonly used types at the crate root
pub use country_codes::{CountryCodeEntry, CountryCodeTable, CountryTableError};
pub use decompose::{Decomposition, decompose};
pub use errors::{DEFAULT_MISSING_COUNTRY_CODE_MESSAGE, InputError};
pub use input::{
    ChangeHandler, ConfigError, InputState, PhoneInput, PhoneInputConfig, PhoneInputConfigBuilder,
    PhoneInputView, Style,
};
pub use types::{ChangeResult, DialCode, DialCodeError, MAX_DIAL_CODE_LEN};
