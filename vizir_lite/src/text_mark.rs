// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Text mark encoding.

extern crate alloc;

use alloc::format;

use vizir_marks::{Binding, GroupDim, Property, PropertyMap};

use crate::binding::{fallback, half_band, mid, scaled};
use crate::field::FieldType;
use crate::mixins::{apply_marks_config, opacity};
use crate::point_mark::centered;
use crate::{Channel, Error, FieldOptions, MarkEncoder, Model, Result};

/// Offset from the right edge of the group for right-aligned numeric text.
pub const TEXT_RIGHT_OFFSET: f64 = -5.0;

const STYLE_KEYS: [Property; 11] = [
    Property::Angle,
    Property::Align,
    Property::Baseline,
    Property::Dx,
    Property::Dy,
    Property::Fill,
    Property::Font,
    Property::FontWeight,
    Property::FontStyle,
    Property::Radius,
    Property::Theta,
];

/// Encoder for `text` marks.
///
/// Quantitative text without an x position is right-aligned against the group edge, so a
/// table of numbers lines up.
#[derive(Clone, Copy, Debug, Default)]
pub struct TextMark;

impl TextMark {
    /// A group-sized rect filled by the color channel, drawn behind the text.
    pub fn background(model: &dyn Model) -> Result<PropertyMap> {
        Ok(PropertyMap::new()
            .with(Property::X, Binding::value(0.0))
            .with(Property::Y, Binding::value(0.0))
            .with(Property::Width, Binding::group(GroupDim::Width))
            .with(Property::Height, Binding::group(GroupDim::Height))
            .with(
                Property::Fill,
                scaled(model, Channel::Color, FieldOptions::default())?,
            ))
    }
}

impl MarkEncoder for TextMark {
    fn properties(&self, model: &dyn Model) -> Result<PropertyMap> {
        let config = &model.config().mark;
        let font_size = if model.has(Channel::Size) {
            scaled(model, Channel::Size, FieldOptions::default())?
        } else {
            Binding::value(config.font_size)
        };
        let map = PropertyMap::new()
            .with(Property::X, x(model)?)
            .with(Property::Y, centered(model, Channel::Y)?)
            .with(Property::FontSize, font_size)
            .with(Property::Text, text(model)?)
            .merge(opacity(config));
        Ok(apply_marks_config(map, config, &STYLE_KEYS))
    }
}

fn is_quantitative_text(model: &dyn Model) -> bool {
    model.has(Channel::Text) && model.field_def(Channel::Text).kind == FieldType::Quantitative
}

fn x(model: &dyn Model) -> Result<Binding> {
    if model.has(Channel::X) {
        mid(model, Channel::X)
    } else if is_quantitative_text(model) {
        Ok(Binding::group(GroupDim::Width).with_offset(TEXT_RIGHT_OFFSET))
    } else {
        Ok(half_band(model, Channel::X))
    }
}

fn text(model: &dyn Model) -> Result<Binding> {
    if !model.has(Channel::Text) {
        return fallback(model, Channel::Text);
    }
    if is_quantitative_text(model) {
        let field = model
            .field(Channel::Text, FieldOptions::datum())
            .ok_or(Error::MissingField(Channel::Text))?;
        let number_format = model
            .config()
            .mark
            .format
            .as_deref()
            .unwrap_or_else(|| model.number_format(Channel::Text));
        Ok(Binding::template(format!(
            "{{{{{field} | number:'{number_format}'}}}}"
        )))
    } else {
        model
            .field(Channel::Text, FieldOptions::default())
            .map(Binding::field)
            .ok_or(Error::MissingField(Channel::Text))
    }
}
