//! Change handler trait definition.

use crate::types::ChangeResult;

/// Receives the decomposed number after every accepted keystroke.
///
/// Implemented for any `FnMut(&ChangeResult)`, so a closure is usually
/// all a caller needs:
///
/// ```rust
/// use phone_input::{PhoneInput, PhoneInputConfig};
///
/// let mut last = None;
/// let mut input = PhoneInput::new(PhoneInputConfig::default(), |r: &phone_input::ChangeResult| {
///     last = Some(r.full_number.clone());
/// });
/// input.handle_text_change("+44123");
/// drop(input);
/// assert_eq!(last.as_deref(), Some("+44 123"));
/// ```
pub trait ChangeHandler {
    /// Called with the result for the latest text.
    fn on_change(&mut self, result: &ChangeResult);
}

impl<F> ChangeHandler for F
where
    F: FnMut(&ChangeResult),
{
    fn on_change(&mut self, result: &ChangeResult) {
        self(result)
    }
}
