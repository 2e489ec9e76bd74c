//! Input configuration types.

use super::style::Style;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Placeholder shown when none (or an empty one) is configured.
pub const DEFAULT_PLACEHOLDER: &str = "Enter Your Phone Number";
/// Placeholder color used when none is configured.
pub const DEFAULT_PLACEHOLDER_COLOR: &str = "#c1c1c1";
/// Longest text, in characters, the host field lets the user type.
pub const DEFAULT_MAX_LENGTH: usize = 20;

/// Error returned by [`PhoneInputConfig::validate`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A `#`-prefixed color that is not 3, 4, 6 or 8 hex digits.
    #[error("invalid hex color '{color}' in {field}")]
    InvalidColor { field: &'static str, color: String },
}

/// Configuration for a [`PhoneInput`](super::PhoneInput).
///
/// Deserializes from camelCase JSON; every field is optional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PhoneInputConfig {
    /// Text shown before the first keystroke. Not interpreted.
    pub value: Option<String>,
    pub placeholder: Option<String>,
    pub placeholder_color: Option<String>,
    /// Focus the field when it is mounted.
    pub auto_focus: bool,
    /// Make the field read-only.
    pub disabled: bool,
    /// Never render the flag.
    pub disable_flags: bool,
    /// Replaces the default missing country code message.
    pub error_text: Option<String>,
    /// Passed to the host field, which stops accepting keystrokes past it.
    pub max_length: usize,
    pub container_style: Style,
    pub content_container_style: Style,
    pub input_style: Style,
    pub flag_style: Style,
    pub error_text_style: Style,
}

impl Default for PhoneInputConfig {
    fn default() -> Self {
        Self {
            value: None,
            placeholder: None,
            placeholder_color: None,
            auto_focus: false,
            disabled: false,
            disable_flags: false,
            error_text: None,
            max_length: DEFAULT_MAX_LENGTH,
            container_style: Style::default(),
            content_container_style: Style::default(),
            input_style: Style::default(),
            flag_style: Style::default(),
            error_text_style: Style::default(),
        }
    }
}

impl PhoneInputConfig {
    /// Create a new builder for PhoneInputConfig.
    ///
    /// # Example
    ///
    /// ```rust
    /// use phone_input::PhoneInputConfig;
    ///
    /// let config = PhoneInputConfig::builder()
    ///     .placeholder("Phone")
    ///     .error_text("Start with +")
    ///     .disable_flags(true)
    ///     .build();
    ///
    /// assert_eq!(config.placeholder_text(), "Phone");
    /// assert!(config.disable_flags);
    /// ```
    pub fn builder() -> PhoneInputConfigBuilder {
        PhoneInputConfigBuilder::default()
    }

    /// Parse a configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Create a new config with an initial value.
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Create a new config with a custom error text.
    pub fn with_error_text(mut self, text: impl Into<String>) -> Self {
        self.error_text = Some(text.into());
        self
    }

    /// Create a new config with the disabled flag set.
    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Effective placeholder; an empty string counts as unset.
    pub fn placeholder_text(&self) -> &str {
        match self.placeholder.as_deref() {
            Some(p) if !p.is_empty() => p,
            _ => DEFAULT_PLACEHOLDER,
        }
    }

    /// Effective placeholder color; any explicit value is kept.
    pub fn placeholder_text_color(&self) -> &str {
        self.placeholder_color
            .as_deref()
            .unwrap_or(DEFAULT_PLACEHOLDER_COLOR)
    }

    /// Check the configuration for values the field cannot honor.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(color) = self.placeholder_color.as_deref() {
            check_color("placeholder_color", color)?;
        }
        let styles = [
            ("container_style", &self.container_style),
            ("content_container_style", &self.content_container_style),
            ("input_style", &self.input_style),
            ("flag_style", &self.flag_style),
            ("error_text_style", &self.error_text_style),
        ];
        for (field, style) in styles {
            for color in style.colors() {
                check_color(field, color)?;
            }
        }
        Ok(())
    }
}

fn check_color(field: &'static str, color: &str) -> Result<(), ConfigError> {
    let Some(hex) = color.strip_prefix('#') else {
        return Ok(());
    };
    let valid = matches!(hex.len(), 3 | 4 | 6 | 8) && hex.chars().all(|c| c.is_ascii_hexdigit());
    if valid {
        Ok(())
    } else {
        Err(ConfigError::InvalidColor {
            field,
            color: color.to_string(),
        })
    }
}

/// Builder for PhoneInputConfig.
#[derive(Debug, Clone, Default)]
pub struct PhoneInputConfigBuilder {
    config: PhoneInputConfig,
}

impl PhoneInputConfigBuilder {
    /// Create a new builder with default values.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.config.value = Some(value.into());
        self
    }

    pub fn placeholder(mut self, text: impl Into<String>) -> Self {
        self.config.placeholder = Some(text.into());
        self
    }

    pub fn placeholder_color(mut self, color: impl Into<String>) -> Self {
        self.config.placeholder_color = Some(color.into());
        self
    }

    pub fn auto_focus(mut self, auto_focus: bool) -> Self {
        self.config.auto_focus = auto_focus;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.config.disabled = disabled;
        self
    }

    pub fn disable_flags(mut self, disable_flags: bool) -> Self {
        self.config.disable_flags = disable_flags;
        self
    }

    pub fn error_text(mut self, text: impl Into<String>) -> Self {
        self.config.error_text = Some(text.into());
        self
    }

    /// Default: 20 characters
    pub fn max_length(mut self, max_length: usize) -> Self {
        self.config.max_length = max_length;
        self
    }

    pub fn container_style(mut self, style: Style) -> Self {
        self.config.container_style = style;
        self
    }

    pub fn content_container_style(mut self, style: Style) -> Self {
        self.config.content_container_style = style;
        self
    }

    pub fn input_style(mut self, style: Style) -> Self {
        self.config.input_style = style;
        self
    }

    pub fn flag_style(mut self, style: Style) -> Self {
        self.config.flag_style = style;
        self
    }

    pub fn error_text_style(mut self, style: Style) -> Self {
        self.config.error_text_style = style;
        self
    }

    /// Build the PhoneInputConfig.
    pub fn build(self) -> PhoneInputConfig {
        self.config
    }
}
