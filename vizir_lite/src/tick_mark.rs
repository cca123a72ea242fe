// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tick mark encoding.

use vizir_marks::{Binding, Property, PropertyMap};

use crate::binding::{bound_or_fallback, half_band, mid};
use crate::mixins::opacity;
use crate::{Channel, MarkEncoder, Model, Result};

/// A tick on a dimension is shifted back by `band_width / TICK_OFFSET_DIVISOR`.
pub const TICK_OFFSET_DIVISOR: f64 = 3.0;

/// A tick spanning a band is `band_width / TICK_BAND_DIVISOR` long.
pub const TICK_BAND_DIVISOR: f64 = 1.5;

/// Thickness of a tick across a continuous axis.
pub const TICK_THICKNESS: f64 = 1.0;

/// Encoder for `tick` marks (`rect`): short strokes spanning part of a band.
#[derive(Clone, Copy, Debug, Default)]
pub struct TickMark;

impl MarkEncoder for TickMark {
    fn properties(&self, model: &dyn Model) -> Result<PropertyMap> {
        Ok(PropertyMap::new()
            .with(Property::X, position(model, Channel::X)?)
            .with(Property::Y, position(model, Channel::Y)?)
            .with(Property::Width, extent(model, Channel::X))
            .with(Property::Height, extent(model, Channel::Y))
            .with(Property::Fill, bound_or_fallback(model, Channel::Color)?)
            .merge(opacity(&model.config().mark)))
    }
}

fn position(model: &dyn Model, channel: Channel) -> Result<Binding> {
    if !model.has(channel) {
        return Ok(half_band(model, channel));
    }
    let binding = mid(model, channel)?;
    Ok(if model.is_dimension(channel) {
        binding.with_offset(-model.band_width(channel) / TICK_OFFSET_DIVISOR)
    } else {
        binding
    })
}

fn extent(model: &dyn Model, channel: Channel) -> Binding {
    if !model.has(channel) || model.is_dimension(channel) {
        Binding::value(model.band_width(channel) / TICK_BAND_DIVISOR)
    } else {
        Binding::value(TICK_THICKNESS)
    }
}
