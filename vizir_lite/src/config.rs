// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Style configuration.
//!
//! Every field has a default, so a partial JSON config block deserializes. Closed enums
//! (orientation, alignment, ...) reject unknown values at this boundary rather than inside the
//! encoders.

extern crate alloc;

use alloc::string::String;
use core::str::FromStr;

use serde::{Deserialize, Serialize};
use vizir_marks::{Property, StackOffset, Value};

use crate::field::DEFAULT_BAND_WIDTH;
use crate::{Error, MarkKind};

/// Top-level configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
    /// Mark style defaults.
    pub mark: MarkConfig,
    /// Scale defaults.
    pub scale: ScaleConfig,
    /// Default number format for quantitative text.
    pub number_format: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            mark: MarkConfig::default(),
            scale: ScaleConfig::default(),
            number_format: String::from("s"),
        }
    }
}

/// Scale defaults.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ScaleConfig {
    /// Pixel width of one ordinal band.
    pub band_width: f64,
}

impl Default for ScaleConfig {
    fn default() -> Self {
        Self {
            band_width: DEFAULT_BAND_WIDTH,
        }
    }
}

/// Area (and path sort) orientation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orient {
    /// Values run along y; the baseline is horizontal.
    Vertical,
    /// Values run along x; the baseline is vertical.
    Horizontal,
}

impl Orient {
    /// Returns the orientation name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Vertical => "vertical",
            Self::Horizontal => "horizontal",
        }
    }
}

impl FromStr for Orient {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "vertical" => Ok(Self::Vertical),
            "horizontal" => Ok(Self::Horizontal),
            other => Err(Error::InvalidOrient(String::from(other))),
        }
    }
}

/// Stacking mode for bar and area marks.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StackMode {
    /// Stack from a zero baseline.
    #[default]
    Zero,
    /// Center stacks.
    Center,
    /// Normalize stacks to `[0, 1]`.
    Normalize,
    /// Never stack.
    None,
}

impl StackMode {
    /// Returns the stack offset, or `None` when stacking is disabled.
    pub const fn offset(self) -> Option<StackOffset> {
        match self {
            Self::Zero => Some(StackOffset::Zero),
            Self::Center => Some(StackOffset::Center),
            Self::Normalize => Some(StackOffset::Normalize),
            Self::None => None,
        }
    }
}

/// Path interpolation method.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Interpolate {
    /// Straight segments.
    Linear,
    /// Closed straight segments.
    LinearClosed,
    /// Step function, vertical then horizontal.
    Step,
    /// Step ending at each point.
    StepBefore,
    /// Step starting at each point.
    StepAfter,
    /// B-spline.
    Basis,
    /// Open B-spline.
    BasisOpen,
    /// Closed B-spline.
    BasisClosed,
    /// Cardinal spline.
    Cardinal,
    /// Open cardinal spline.
    CardinalOpen,
    /// Closed cardinal spline.
    CardinalClosed,
    /// Bundle spline.
    Bundle,
    /// Monotone cubic.
    Monotone,
}

impl Interpolate {
    /// Returns the method name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::LinearClosed => "linear-closed",
            Self::Step => "step",
            Self::StepBefore => "step-before",
            Self::StepAfter => "step-after",
            Self::Basis => "basis",
            Self::BasisOpen => "basis-open",
            Self::BasisClosed => "basis-closed",
            Self::Cardinal => "cardinal",
            Self::CardinalOpen => "cardinal-open",
            Self::CardinalClosed => "cardinal-closed",
            Self::Bundle => "bundle",
            Self::Monotone => "monotone",
        }
    }
}

/// Horizontal text alignment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    /// Left.
    Left,
    /// Center.
    Center,
    /// Right.
    Right,
}

impl Align {
    /// Returns the alignment name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Center => "center",
            Self::Right => "right",
        }
    }
}

/// Vertical text baseline.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Baseline {
    /// Top.
    Top,
    /// Middle.
    Middle,
    /// Bottom.
    Bottom,
}

impl Baseline {
    /// Returns the baseline name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Middle => "middle",
            Self::Bottom => "bottom",
        }
    }
}

/// Font weight.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontWeight {
    /// Normal.
    Normal,
    /// Bold.
    Bold,
}

impl FontWeight {
    /// Returns the weight name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Bold => "bold",
        }
    }
}

/// Font style.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontStyle {
    /// Upright.
    Normal,
    /// Italic.
    Italic,
}

impl FontStyle {
    /// Returns the style name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Italic => "italic",
        }
    }
}

/// Mark style defaults.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MarkConfig {
    /// Fill (`true`) or stroke (`false`) marks; defaults per mark kind, see
    /// [`MarkConfig::is_filled`].
    pub filled: Option<bool>,
    /// Default mark color, used when the color channel is unbound.
    pub color: String,
    /// Literal fill copied onto text marks.
    pub fill: Option<String>,
    /// Mark opacity.
    pub opacity: Option<f64>,
    /// Stroke width for stroked marks.
    pub stroke_width: f64,
    /// Orientation of area marks and of path sorting.
    pub orient: Option<Orient>,
    /// Path interpolation.
    pub interpolate: Option<Interpolate>,
    /// Path interpolation tension.
    pub tension: Option<f64>,
    /// Sort key for line paths (`-` prefix for descending).
    pub sort_line_by: Option<String>,
    /// Stacking mode for bar and area marks.
    pub stacked: StackMode,
    /// Default symbol size, used when the size channel is unbound.
    pub size: f64,
    /// Default symbol shape, used when the shape channel is unbound.
    pub shape: String,
    /// Default text, used when the text channel is unbound.
    pub text: String,
    /// Font size, used when the size channel is unbound.
    pub font_size: f64,
    /// Number format overriding the model's for quantitative text.
    pub format: Option<String>,
    /// Text angle.
    pub angle: Option<f64>,
    /// Text alignment.
    pub align: Option<Align>,
    /// Text baseline.
    pub baseline: Option<Baseline>,
    /// Horizontal text offset.
    pub dx: Option<f64>,
    /// Vertical text offset.
    pub dy: Option<f64>,
    /// Font family.
    pub font: Option<String>,
    /// Font weight.
    pub font_weight: Option<FontWeight>,
    /// Font style.
    pub font_style: Option<FontStyle>,
    /// Polar radius for text.
    pub radius: Option<f64>,
    /// Polar angle for text.
    pub theta: Option<f64>,
}

impl Default for MarkConfig {
    fn default() -> Self {
        Self {
            filled: None,
            color: String::from("#4682b4"),
            fill: None,
            opacity: None,
            stroke_width: 2.0,
            orient: None,
            interpolate: None,
            tension: None,
            sort_line_by: None,
            stacked: StackMode::Zero,
            size: 30.0,
            shape: String::from("circle"),
            text: String::from("Abc"),
            font_size: 10.0,
            format: None,
            angle: None,
            align: None,
            baseline: None,
            dx: None,
            dy: None,
            font: None,
            font_weight: None,
            font_style: None,
            radius: None,
            theta: None,
        }
    }
}

impl MarkConfig {
    /// Returns whether marks of `kind` are filled rather than stroked.
    ///
    /// Unless configured, points and lines are stroked and everything else is filled.
    pub fn is_filled(&self, kind: MarkKind) -> bool {
        self.filled
            .unwrap_or(!matches!(kind, MarkKind::Point | MarkKind::Line))
    }

    /// Returns the configured literal for a property, if one is defined.
    ///
    /// Only properties with an optional style setting are answered here; defaults that feed
    /// channel fallbacks (color, size, shape, text, font size) are exposed through the fields.
    pub fn value(&self, property: Property) -> Option<Value> {
        let str_value = |s: &'static str| Some(Value::from(s));
        match property {
            Property::Opacity => self.opacity.map(Value::from),
            Property::Orient => self.orient.and_then(|o| str_value(o.as_str())),
            Property::Interpolate => self.interpolate.and_then(|i| str_value(i.as_str())),
            Property::Tension => self.tension.map(Value::from),
            Property::Angle => self.angle.map(Value::from),
            Property::Align => self.align.and_then(|a| str_value(a.as_str())),
            Property::Baseline => self.baseline.and_then(|b| str_value(b.as_str())),
            Property::Dx => self.dx.map(Value::from),
            Property::Dy => self.dy.map(Value::from),
            Property::Fill => self.fill.as_deref().map(Value::from),
            Property::Font => self.font.as_deref().map(Value::from),
            Property::FontWeight => self.font_weight.and_then(|w| str_value(w.as_str())),
            Property::FontStyle => self.font_style.and_then(|s| str_value(s.as_str())),
            Property::Radius => self.radius.map(Value::from),
            Property::Theta => self.theta.map(Value::from),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use serde_json::json;

    use super::*;

    #[test]
    fn partial_config_deserializes_with_defaults() {
        let config: Config = serde_json::from_value(json!({
            "mark": {"orient": "horizontal", "interpolate": "step-after", "opacity": 0.5}
        }))
        .unwrap();
        assert_eq!(config.mark.orient, Some(Orient::Horizontal));
        assert_eq!(config.mark.interpolate, Some(Interpolate::StepAfter));
        assert_eq!(config.mark.stroke_width, 2.0);
        assert_eq!(config.scale.band_width, DEFAULT_BAND_WIDTH);
        assert_eq!(config.number_format, "s");
    }

    #[test]
    fn unknown_orientation_is_rejected_at_the_boundary() {
        let parsed: Result<Config, _> =
            serde_json::from_value(json!({"mark": {"orient": "diagonal"}}));
        assert!(parsed.is_err());
        assert_eq!(
            "diagonal".parse::<Orient>(),
            Err(Error::InvalidOrient("diagonal".into()))
        );
        assert_eq!("vertical".parse::<Orient>(), Ok(Orient::Vertical));
    }

    #[test]
    fn style_values_are_only_reported_when_set() {
        let mut mark = MarkConfig::default();
        assert_eq!(mark.value(Property::Interpolate), None);
        assert_eq!(mark.value(Property::Opacity), None);
        mark.interpolate = Some(Interpolate::Monotone);
        mark.font_weight = Some(FontWeight::Bold);
        assert_eq!(
            mark.value(Property::Interpolate),
            Some(Value::from("monotone"))
        );
        assert_eq!(mark.value(Property::FontWeight), Some(Value::from("bold")));
        assert_eq!(mark.value(Property::X), None);
    }

    #[test]
    fn points_and_lines_default_to_stroked() {
        let mark = MarkConfig::default();
        assert!(!mark.is_filled(MarkKind::Point));
        assert!(!mark.is_filled(MarkKind::Line));
        assert!(mark.is_filled(MarkKind::Bar));
        let mark = MarkConfig {
            filled: Some(true),
            ..MarkConfig::default()
        };
        assert!(mark.is_filled(MarkKind::Point));
    }
}
