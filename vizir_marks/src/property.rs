// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Visual properties and their bindings.

extern crate alloc;

use alloc::collections::BTreeMap;
use alloc::collections::btree_map;
use alloc::string::String;
use core::fmt;

use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};

use crate::Value;

/// A visual property name.
///
/// The declaration order is the serialization order of a [`PropertyMap`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Property {
    /// Left edge (or center, for symbols and text).
    X,
    /// Top edge (or center, for symbols and text).
    Y,
    /// Right edge.
    X2,
    /// Bottom edge.
    Y2,
    /// Horizontal center.
    Xc,
    /// Vertical center.
    Yc,
    /// Width.
    Width,
    /// Height.
    Height,
    /// Symbol area.
    Size,
    /// Symbol shape.
    Shape,
    /// Fill paint.
    Fill,
    /// Stroke paint.
    Stroke,
    /// Stroke width.
    StrokeWidth,
    /// Opacity.
    Opacity,
    /// Font size.
    FontSize,
    /// Text content.
    Text,
    /// Area orientation.
    Orient,
    /// Text rotation angle.
    Angle,
    /// Horizontal text alignment.
    Align,
    /// Vertical text baseline.
    Baseline,
    /// Horizontal text offset.
    Dx,
    /// Vertical text offset.
    Dy,
    /// Font family.
    Font,
    /// Font weight.
    FontWeight,
    /// Font style.
    FontStyle,
    /// Polar text radius.
    Radius,
    /// Polar text angle.
    Theta,
    /// Path interpolation.
    Interpolate,
    /// Path interpolation tension.
    Tension,
}

impl Property {
    /// Returns the property name as written in the output specification.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::X => "x",
            Self::Y => "y",
            Self::X2 => "x2",
            Self::Y2 => "y2",
            Self::Xc => "xc",
            Self::Yc => "yc",
            Self::Width => "width",
            Self::Height => "height",
            Self::Size => "size",
            Self::Shape => "shape",
            Self::Fill => "fill",
            Self::Stroke => "stroke",
            Self::StrokeWidth => "strokeWidth",
            Self::Opacity => "opacity",
            Self::FontSize => "fontSize",
            Self::Text => "text",
            Self::Orient => "orient",
            Self::Angle => "angle",
            Self::Align => "align",
            Self::Baseline => "baseline",
            Self::Dx => "dx",
            Self::Dy => "dy",
            Self::Font => "font",
            Self::FontWeight => "fontWeight",
            Self::FontStyle => "fontStyle",
            Self::Radius => "radius",
            Self::Theta => "theta",
            Self::Interpolate => "interpolate",
            Self::Tension => "tension",
        }
    }
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A dimension of the enclosing group mark.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupDim {
    /// The group width.
    Width,
    /// The group height.
    Height,
}

/// How a single visual property obtains its value.
///
/// Each variant is one binding kind, so a property can never be both scale-bound and literal.
#[derive(Clone, Debug, PartialEq)]
pub enum Binding {
    /// `{scale, field, offset?}`: a data field mapped through a named scale.
    Scaled {
        /// Scale name.
        scale: String,
        /// Data field name.
        field: String,
        /// Pixel offset applied after scaling.
        offset: Option<f64>,
    },
    /// `{scale, value}`: a literal mapped through a named scale.
    ScaledValue {
        /// Scale name.
        scale: String,
        /// Domain value.
        value: Value,
    },
    /// `{field}`: a raw data field, not scaled.
    Field {
        /// Data field name.
        field: String,
    },
    /// `{value, offset?}`: a literal.
    Value {
        /// The literal.
        value: Value,
        /// Pixel offset added to the literal.
        offset: Option<f64>,
    },
    /// `{field: {group}, offset?}`: a dimension of the enclosing group.
    Group {
        /// Which group dimension.
        group: GroupDim,
        /// Pixel offset added to the dimension.
        offset: Option<f64>,
    },
    /// `{template}`: a text template evaluated per datum.
    Template(String),
}

impl Binding {
    /// Creates a `{scale, field}` binding.
    pub fn scaled(scale: impl Into<String>, field: impl Into<String>) -> Self {
        Self::Scaled {
            scale: scale.into(),
            field: field.into(),
            offset: None,
        }
    }

    /// Creates a `{scale, value}` binding.
    pub fn scaled_value(scale: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::ScaledValue {
            scale: scale.into(),
            value: value.into(),
        }
    }

    /// Creates a raw `{field}` binding.
    pub fn field(field: impl Into<String>) -> Self {
        Self::Field {
            field: field.into(),
        }
    }

    /// Creates a literal `{value}` binding.
    pub fn value(value: impl Into<Value>) -> Self {
        Self::Value {
            value: value.into(),
            offset: None,
        }
    }

    /// Creates a `{field: {group}}` binding.
    pub fn group(group: GroupDim) -> Self {
        Self::Group {
            group,
            offset: None,
        }
    }

    /// Creates a `{template}` binding.
    pub fn template(template: impl Into<String>) -> Self {
        Self::Template(template.into())
    }

    /// Sets the pixel offset.
    ///
    /// Only scaled-field, literal and group bindings carry an offset; other kinds are returned
    /// unchanged.
    pub fn with_offset(mut self, new_offset: f64) -> Self {
        match &mut self {
            Self::Scaled { offset, .. } | Self::Value { offset, .. } | Self::Group { offset, .. } => {
                *offset = Some(new_offset);
            }
            Self::ScaledValue { .. } | Self::Field { .. } | Self::Template(_) => {}
        }
        self
    }

    /// Returns the scale name for scale-bound bindings.
    pub fn scale(&self) -> Option<&str> {
        match self {
            Self::Scaled { scale, .. } | Self::ScaledValue { scale, .. } => Some(scale),
            _ => None,
        }
    }

    /// Returns the data field name for field bindings (scaled or raw).
    pub fn field_name(&self) -> Option<&str> {
        match self {
            Self::Scaled { field, .. } | Self::Field { field } => Some(field),
            _ => None,
        }
    }

    /// Returns the literal for `{value}` and `{scale, value}` bindings.
    pub fn literal(&self) -> Option<&Value> {
        match self {
            Self::Value { value, .. } | Self::ScaledValue { value, .. } => Some(value),
            _ => None,
        }
    }

    /// Returns the pixel offset, if any.
    pub fn offset(&self) -> Option<f64> {
        match self {
            Self::Scaled { offset, .. } | Self::Value { offset, .. } | Self::Group { offset, .. } => {
                *offset
            }
            _ => None,
        }
    }
}

#[derive(Serialize)]
struct GroupRef {
    group: GroupDim,
}

impl Serialize for Binding {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        match self {
            Self::Scaled {
                scale,
                field,
                offset,
            } => {
                map.serialize_entry("scale", scale)?;
                map.serialize_entry("field", field)?;
                if let Some(offset) = offset {
                    map.serialize_entry("offset", offset)?;
                }
            }
            Self::ScaledValue { scale, value } => {
                map.serialize_entry("scale", scale)?;
                map.serialize_entry("value", value)?;
            }
            Self::Field { field } => {
                map.serialize_entry("field", field)?;
            }
            Self::Value { value, offset } => {
                map.serialize_entry("value", value)?;
                if let Some(offset) = offset {
                    map.serialize_entry("offset", offset)?;
                }
            }
            Self::Group { group, offset } => {
                map.serialize_entry("field", &GroupRef { group: *group })?;
                if let Some(offset) = offset {
                    map.serialize_entry("offset", offset)?;
                }
            }
            Self::Template(template) => {
                map.serialize_entry("template", template)?;
            }
        }
        map.end()
    }
}

/// An ordered map from [`Property`] to [`Binding`].
///
/// Keys are unique: inserting an existing key replaces its binding.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct PropertyMap(BTreeMap<Property, Binding>);

impl PropertyMap {
    /// Creates an empty map.
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Inserts a binding, returning the one it replaced.
    pub fn insert(&mut self, property: Property, binding: Binding) -> Option<Binding> {
        self.0.insert(property, binding)
    }

    /// Chainable [`PropertyMap::insert`].
    #[must_use]
    pub fn with(mut self, property: Property, binding: Binding) -> Self {
        self.0.insert(property, binding);
        self
    }

    /// Merges `other` into `self`.
    ///
    /// Property groups produced by encoders are disjoint; on overlap `other` wins.
    #[must_use]
    pub fn merge(mut self, other: Self) -> Self {
        for (property, binding) in other.0 {
            let replaced = self.0.insert(property, binding);
            debug_assert!(replaced.is_none(), "property `{property}` bound twice");
        }
        self
    }

    /// Returns the binding for `property`.
    pub fn get(&self, property: Property) -> Option<&Binding> {
        self.0.get(&property)
    }

    /// Returns `true` if `property` is bound.
    pub fn contains(&self, property: Property) -> bool {
        self.0.contains_key(&property)
    }

    /// Returns the number of bound properties.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if no property is bound.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates bound properties in key order.
    pub fn iter(&self) -> btree_map::Iter<'_, Property, Binding> {
        self.0.iter()
    }

    /// Iterates bound property names in key order.
    pub fn keys(&self) -> impl Iterator<Item = Property> + '_ {
        self.0.keys().copied()
    }
}

impl FromIterator<(Property, Binding)> for PropertyMap {
    fn from_iter<I: IntoIterator<Item = (Property, Binding)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Extend<(Property, Binding)> for PropertyMap {
    fn extend<I: IntoIterator<Item = (Property, Binding)>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}

impl<'a> IntoIterator for &'a PropertyMap {
    type Item = (&'a Property, &'a Binding);
    type IntoIter = btree_map::Iter<'a, Property, Binding>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
