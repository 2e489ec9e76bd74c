//! Style properties for the rendered parts of the input.

use serde::{Deserialize, Serialize};

/// Main axis of a container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FlexDirection {
    Row,
    Column,
}

/// Cross axis alignment of a container's children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Align {
    FlexStart,
    Center,
    FlexEnd,
    Stretch,
}

/// A length in points or a percentage string such as `"100%"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Dimension {
    Points(f32),
    Percent(String),
}

impl Dimension {
    /// `"100%"`.
    pub fn full() -> Self {
        Dimension::Percent("100%".to_string())
    }
}

/// Sparse set of style properties.
///
/// Unset properties fall through to the defaults when merged; see
/// [`Style::merged`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Style {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flex_direction: Option<FlexDirection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub align_items: Option<Align>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flex: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<Dimension>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    /// Text color.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_width: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding_vertical: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding_horizontal: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin_top: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin_right: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f32>,
    /// CSS-style weight, e.g. `"600"` or `"bold"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<String>,
}

macro_rules! merge_fields {
    ($base:expr, $over:expr; $($field:ident),+ $(,)?) => {
        Style {
            $($field: $over.$field.clone().or_else(|| $base.$field.clone()),)+
        }
    };
}

impl Style {
    /// Apply `overrides` on top of `self`; every property set in
    /// `overrides` wins.
    pub fn merged(&self, overrides: &Style) -> Style {
        merge_fields!(self, overrides;
            flex_direction,
            align_items,
            flex,
            width,
            height,
            background_color,
            color,
            border_radius,
            border_width,
            padding_vertical,
            padding_horizontal,
            margin_top,
            margin_right,
            font_size,
            font_weight,
        )
    }

    /// Colors set on this style, for validation.
    pub(crate) fn colors(&self) -> impl Iterator<Item = &str> {
        [self.background_color.as_deref(), self.color.as_deref()]
            .into_iter()
            .flatten()
    }

    /// Outer column holding the field row and the error text.
    pub fn default_container() -> Self {
        Style {
            flex_direction: Some(FlexDirection::Column),
            align_items: Some(Align::FlexStart),
            width: Some(Dimension::full()),
            ..Style::default()
        }
    }

    /// Row holding the flag and the text field.
    pub fn default_content_container() -> Self {
        Style {
            flex_direction: Some(FlexDirection::Row),
            align_items: Some(Align::Center),
            height: Some(48.0),
            width: Some(Dimension::full()),
            ..Style::default()
        }
    }

    pub fn default_input() -> Self {
        Style {
            background_color: Some("#2D2D2D".to_string()),
            border_radius: Some(7.0),
            color: Some("#FFFFFF".to_string()),
            padding_vertical: Some(7.0),
            height: Some(48.0),
            border_width: Some(1.0),
            padding_horizontal: Some(18.0),
            font_size: Some(16.0),
            font_weight: Some("600".to_string()),
            flex: Some(1.0),
            ..Style::default()
        }
    }

    pub fn default_flag() -> Self {
        Style {
            font_size: Some(24.0),
            margin_right: Some(10.0),
            ..Style::default()
        }
    }

    pub fn default_error_text() -> Self {
        Style {
            color: Some("#E97E70".to_string()),
            margin_top: Some(0.0),
            font_size: Some(12.0),
            ..Style::default()
        }
    }
}
