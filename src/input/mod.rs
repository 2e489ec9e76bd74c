//! Phone input widget.

mod config;
mod state;
mod structure;
mod style;
mod traits;
mod view;

pub use config::{
    ConfigError, DEFAULT_MAX_LENGTH, DEFAULT_PLACEHOLDER, DEFAULT_PLACEHOLDER_COLOR,
    PhoneInputConfig, PhoneInputConfigBuilder,
};
pub use state::InputState;
pub use structure::PhoneInput;
pub use style::{Align, Dimension, FlexDirection, Style};
pub use traits::ChangeHandler;
pub use view::{ErrorView, FlagView, KeyboardType, PhoneInputView, TextFieldView};
