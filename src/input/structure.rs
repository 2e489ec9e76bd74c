//! Main widget implementation.

use super::config::PhoneInputConfig;
use super::state::InputState;
use super::style::Style;
use super::traits::ChangeHandler;
use super::view::{ErrorView, FlagView, KeyboardType, PhoneInputView, TextFieldView};
use crate::country_codes::CountryCodeTable;
use crate::decompose::decompose;
use crate::errors::InputError;
use crate::types::ChangeResult;
use std::fmt::{self, Debug, Formatter};

#[cfg(feature = "tracing")]
use tracing::{debug, trace};

type Callback = Box<dyn FnMut()>;

/// Headless phone number input.
///
/// Owns the display state for one rendered field and re-derives it from
/// the raw text on every change. The host UI forwards text changes and
/// focus events, and draws whatever [`view`](PhoneInput::view) returns.
///
/// # Type Parameters
///
/// - `H`: the change handler, usually a closure
///
/// # Example
///
/// ```rust
/// use phone_input::{ChangeResult, PhoneInput, PhoneInputConfig};
///
/// let mut input = PhoneInput::new(PhoneInputConfig::default(), |_: &ChangeResult| {});
///
/// let result = input.handle_text_change("+442071234567").unwrap();
/// assert_eq!(result.full_number, "+44 2071234567");
/// assert_eq!(input.flag(), Some("🇬🇧"));
///
/// input.handle_text_change("2071234567");
/// assert!(input.error().is_some());
/// ```
pub struct PhoneInput<'t, H: ChangeHandler> {
    config: PhoneInputConfig,
    table: &'t CountryCodeTable,
    state: InputState,
    handler: H,
    on_focus: Option<Callback>,
    on_blur: Option<Callback>,
    focused: bool,
}

impl<H: ChangeHandler> PhoneInput<'static, H> {
    /// Create an input backed by the bundled country code table.
    pub fn new(config: PhoneInputConfig, handler: H) -> Self {
        Self::with_table(config, CountryCodeTable::builtin(), handler)
    }
}

impl<'t, H: ChangeHandler> PhoneInput<'t, H> {
    /// Create an input backed by a custom table.
    pub fn with_table(config: PhoneInputConfig, table: &'t CountryCodeTable, handler: H) -> Self {
        let state = InputState::with_value(config.value.clone().unwrap_or_default());
        Self {
            config,
            table,
            state,
            handler,
            on_focus: None,
            on_blur: None,
            focused: false,
        }
    }

    /// Set the callback invoked when the field gains focus.
    pub fn on_focus(mut self, callback: impl FnMut() + 'static) -> Self {
        self.on_focus = Some(Box::new(callback));
        self
    }

    /// Set the callback invoked when the field loses focus.
    pub fn on_blur(mut self, callback: impl FnMut() + 'static) -> Self {
        self.on_blur = Some(Box::new(callback));
        self
    }

    /// Called once the host has placed the field on screen.
    pub fn mount(&mut self) {
        if self.config.auto_focus {
            self.focus();
        }
    }

    /// Interpret new raw text from the host field.
    ///
    /// Returns the reported result, or `None` when the field is disabled.
    /// Ignored text leaves the state untouched and does not reach the handler.
    ///
    /// `max_length` is not checked here; the host field enforces it, and the
    /// formatted display may be longer than the raw text it came from.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "phone_input.text_change", skip_all, fields(len = text.len()))
    )]
    pub fn handle_text_change(&mut self, text: &str) -> Option<ChangeResult> {
        if self.config.disabled {
            #[cfg(feature = "tracing")]
            trace!("ignoring text change on disabled input");
            return None;
        }

        let result = match decompose(text, self.table) {
            Ok(decomposition) => {
                #[cfg(feature = "tracing")]
                {
                    match decomposition.entry {
                        Some(entry) => debug!(dial_code = %entry.dial_code(), "resolved dial code"),
                        None => trace!("no dial code in text"),
                    }
                }

                self.state.apply(&decomposition);
                decomposition.to_change_result()
            }
            Err(err) => {
                let err = err.with_message(self.config.error_text.as_deref());

                #[cfg(feature = "tracing")]
                debug!(error = %err, "text rejected");

                self.state.reject(text, err);
                ChangeResult::unresolved(text)
            }
        };

        self.handler.on_change(&result);
        Some(result)
    }

    /// Give the field focus; the callback fires only on a change.
    pub fn focus(&mut self) {
        if self.focused {
            return;
        }
        self.focused = true;
        if let Some(callback) = self.on_focus.as_mut() {
            callback();
        }
    }

    /// Remove focus; the callback fires only on a change.
    pub fn blur(&mut self) {
        if !self.focused {
            return;
        }
        self.focused = false;
        if let Some(callback) = self.on_blur.as_mut() {
            callback();
        }
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Text currently shown in the field.
    pub fn value(&self) -> &str {
        self.state.formatted_value()
    }

    /// Resolved flag glyph, regardless of `disable_flags`.
    pub fn flag(&self) -> Option<&str> {
        self.state.flag()
    }

    pub fn error(&self) -> Option<&InputError> {
        self.state.error()
    }

    pub fn state(&self) -> &InputState {
        &self.state
    }

    pub fn table(&self) -> &'t CountryCodeTable {
        self.table
    }

    /// Get reference to the input configuration.
    pub fn config(&self) -> &PhoneInputConfig {
        &self.config
    }

    /// Get mutable reference to the input configuration.
    ///
    /// Changes apply to the next event and the next [`view`](Self::view);
    /// current state is kept.
    pub fn config_mut(&mut self) -> &mut PhoneInputConfig {
        &mut self.config
    }

    /// Get reference to the change handler.
    pub fn handler(&self) -> &H {
        &self.handler
    }

    /// Consume the input, dropping its state and returning the handler.
    pub fn unmount(self) -> H {
        self.handler
    }

    /// Describe the field for the host to draw.
    pub fn view(&self) -> PhoneInputView {
        let config = &self.config;

        let flag = match self.state.flag() {
            Some(glyph) if !config.disable_flags => Some(FlagView {
                glyph: glyph.to_string(),
                style: Style::default_flag().merged(&config.flag_style),
            }),
            _ => None,
        };

        let error = self.state.error().map(|err| ErrorView {
            message: err.message().to_string(),
            style: Style::default_error_text().merged(&config.error_text_style),
        });

        PhoneInputView {
            container_style: Style::default_container().merged(&config.container_style),
            content_container_style: Style::default_content_container()
                .merged(&config.content_container_style),
            flag,
            input: TextFieldView {
                value: self.state.formatted_value().to_string(),
                placeholder: config.placeholder_text().to_string(),
                placeholder_color: config.placeholder_text_color().to_string(),
                editable: !config.disabled,
                auto_focus: config.auto_focus,
                focused: self.focused,
                max_length: config.max_length,
                keyboard_type: KeyboardType::PhonePad,
                auto_correct: false,
                style: Style::default_input().merged(&config.input_style),
            },
            error,
        }
    }
}

impl<H: ChangeHandler> Debug for PhoneInput<'_, H> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("PhoneInput")
            .field("config", &self.config)
            .field("state", &self.state)
            .field("focused", &self.focused)
            .field("table_len", &self.table.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::DEFAULT_MISSING_COUNTRY_CODE_MESSAGE;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    fn recording_input(
        config: PhoneInputConfig,
    ) -> (
        PhoneInput<'static, impl ChangeHandler>,
        Rc<RefCell<Vec<ChangeResult>>>,
    ) {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&calls);
        let input = PhoneInput::new(config, move |r: &ChangeResult| {
            sink.borrow_mut().push(r.clone())
        });
        (input, calls)
    }

    #[test]
    fn test_initial_value_is_not_interpreted() {
        let (input, calls) = recording_input(PhoneInputConfig::default().with_value("+44123"));
        assert_eq!(input.value(), "+44123");
        assert_eq!(input.flag(), None);
        assert!(calls.borrow().is_empty());
    }

    #[test]
    fn test_missing_plus_default_message() {
        let (mut input, calls) = recording_input(PhoneInputConfig::default());
        let result = input.handle_text_change("5551234").unwrap();

        assert_eq!(result, ChangeResult::unresolved("5551234"));
        assert_eq!(input.value(), "5551234");
        assert_eq!(input.flag(), None);
        assert_eq!(
            input.error().map(InputError::message),
            Some(DEFAULT_MISSING_COUNTRY_CODE_MESSAGE)
        );
        assert_eq!(calls.borrow().len(), 1);
    }

    #[test]
    fn test_missing_plus_custom_message() {
        let (mut input, _) =
            recording_input(PhoneInputConfig::default().with_error_text("Needs a +"));
        input.handle_text_change("1");
        assert_eq!(input.error().map(InputError::message), Some("Needs a +"));
    }

    #[test]
    fn test_error_cleared_by_plus() {
        let (mut input, _) = recording_input(PhoneInputConfig::default());
        input.handle_text_change("4");
        assert!(input.error().is_some());
        input.handle_text_change("+4");
        assert!(input.error().is_none());
    }

    #[test]
    fn test_error_clears_flag() {
        let (mut input, _) = recording_input(PhoneInputConfig::default());
        input.handle_text_change("+44");
        assert_eq!(input.flag(), Some("🇬🇧"));
        input.handle_text_change("44");
        assert_eq!(input.flag(), None);
    }

    #[test]
    fn test_empty_text_reports_empty_number() {
        let (mut input, calls) = recording_input(PhoneInputConfig::default());
        input.handle_text_change("+4");
        let result = input.handle_text_change("").unwrap();
        assert_eq!(result, ChangeResult::unresolved(""));
        assert!(input.error().is_none());
        assert_eq!(calls.borrow().len(), 2);
    }

    #[test]
    fn test_disabled_ignores_text() {
        let (mut input, calls) = recording_input(PhoneInputConfig::default().with_disabled(true));
        assert!(input.handle_text_change("+44").is_none());
        assert_eq!(input.value(), "");
        assert!(calls.borrow().is_empty());
        assert!(!input.view().input.editable);
    }

    #[test]
    fn test_max_length_is_left_to_the_host() {
        let (mut input, calls) =
            recording_input(PhoneInputConfig::builder().max_length(5).build());
        assert!(input.handle_text_change("+4412").is_some());
        assert!(input.handle_text_change("+44123").is_some());
        assert_eq!(input.value(), "+44 123");
        assert_eq!(input.view().input.max_length, 5);
        assert_eq!(calls.borrow().len(), 2);
    }

    #[test]
    fn test_zero_max_length_still_handles_text() {
        let config = PhoneInputConfig::builder().max_length(0).build();
        assert!(config.validate().is_ok());

        let (mut input, calls) = recording_input(config);
        let result = input.handle_text_change("+44").unwrap();
        assert_eq!(result.full_number, "+44");
        assert_eq!(calls.borrow().len(), 1);
    }

    #[test]
    fn test_focus_and_blur_callbacks() {
        let focus_count = Rc::new(Cell::new(0));
        let blur_count = Rc::new(Cell::new(0));
        let (f, b) = (Rc::clone(&focus_count), Rc::clone(&blur_count));

        let mut input = PhoneInput::new(PhoneInputConfig::default(), |_: &ChangeResult| {})
            .on_focus(move || f.set(f.get() + 1))
            .on_blur(move || b.set(b.get() + 1));

        input.blur();
        assert_eq!(blur_count.get(), 0);

        input.focus();
        input.focus();
        assert!(input.is_focused());
        assert_eq!(focus_count.get(), 1);

        input.blur();
        assert!(!input.is_focused());
        assert_eq!(blur_count.get(), 1);
    }

    #[test]
    fn test_mount_auto_focus() {
        let mut input = PhoneInput::new(
            PhoneInputConfig::builder().auto_focus(true).build(),
            |_: &ChangeResult| {},
        );
        assert!(!input.is_focused());
        input.mount();
        assert!(input.is_focused());

        let mut input = PhoneInput::new(PhoneInputConfig::default(), |_: &ChangeResult| {});
        input.mount();
        assert!(!input.is_focused());
    }

    #[test]
    fn test_view_flag_visibility() {
        let (mut input, _) = recording_input(PhoneInputConfig::default());
        assert!(input.view().flag.is_none());

        input.handle_text_change("+44");
        let view = input.view();
        assert_eq!(view.flag.as_ref().map(|f| f.glyph.as_str()), Some("🇬🇧"));

        input.config_mut().disable_flags = true;
        assert!(input.view().flag.is_none());
        assert_eq!(input.flag(), Some("🇬🇧"));
    }

    #[test]
    fn test_view_error_and_styles() {
        let config = PhoneInputConfig::builder()
            .error_text_style(Style {
                font_size: Some(14.0),
                ..Style::default()
            })
            .build();
        let (mut input, _) = recording_input(config);
        input.handle_text_change("7");

        let view = input.view();
        let error = view.error.unwrap();
        assert_eq!(error.message, DEFAULT_MISSING_COUNTRY_CODE_MESSAGE);
        assert_eq!(error.style.font_size, Some(14.0));
        assert_eq!(error.style.color.as_deref(), Some("#E97E70"));

        assert_eq!(view.input.value, "7");
        assert_eq!(view.input.placeholder, "Enter Your Phone Number");
        assert_eq!(view.input.placeholder_color, "#c1c1c1");
        assert_eq!(view.input.max_length, 20);
        assert_eq!(view.input.keyboard_type, KeyboardType::PhonePad);
        assert!(!view.input.auto_correct);
        assert_eq!(view.input.style.background_color.as_deref(), Some("#2D2D2D"));
    }

    #[test]
    fn test_unmount_returns_handler() {
        let mut seen = Vec::new();
        let mut input = PhoneInput::new(PhoneInputConfig::default(), |r: &ChangeResult| {
            seen.push(r.full_number.clone())
        });
        input.handle_text_change("+1555");
        drop(input.unmount());
        assert_eq!(seen, vec!["+1 555".to_string()]);
    }
}
