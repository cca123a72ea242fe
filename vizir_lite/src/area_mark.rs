// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Area mark encoding.

use vizir_marks::{Binding, GroupDim, Property, PropertyMap};

use crate::binding::{mid, scaled};
use crate::mixins::{apply_marks_config, color_mixins, opacity};
use crate::{Channel, Error, FieldOptions, MarkEncoder, Model, Orient, Result, Suffix};

/// Encoder for `area` marks.
///
/// A vertical area (the default) fills between `y` and the baseline `y2`; a horizontal one
/// between `x` and `x2`. Exactly one of `x2`/`y2` is emitted.
#[derive(Clone, Copy, Debug, Default)]
pub struct AreaMark;

impl MarkEncoder for AreaMark {
    fn properties(&self, model: &dyn Model) -> Result<PropertyMap> {
        let config = &model.config().mark;
        let horizontal = config.orient == Some(Orient::Horizontal);

        let mut map = apply_marks_config(PropertyMap::new(), config, &[Property::Orient]);
        let x_edge = Binding::value(0.0);
        let y_edge = Binding::group(GroupDim::Height);
        map.insert(Property::X, edge(model, Channel::X, x_edge.clone())?);
        map.insert(Property::Y, edge(model, Channel::Y, y_edge.clone())?);
        if horizontal {
            map.insert(Property::X2, baseline(model, Channel::X, x_edge)?);
        } else {
            map.insert(Property::Y2, baseline(model, Channel::Y, y_edge)?);
        }

        let map = map
            .merge(color_mixins(model)?)
            .merge(opacity(config));
        Ok(apply_marks_config(
            map,
            config,
            &[Property::Interpolate, Property::Tension],
        ))
    }
}

fn stacked_on(model: &dyn Model, channel: Channel) -> bool {
    model.stack().is_some_and(|s| s.field_channel == channel)
}

/// The moving edge of the area along `channel`.
fn edge(model: &dyn Model, channel: Channel, unbound: Binding) -> Result<Binding> {
    if stacked_on(model, channel) {
        scaled(model, channel, FieldOptions::stacked(Suffix::Start))
    } else if model.is_measure(channel) {
        scaled(model, channel, FieldOptions::default())
    } else if model.is_dimension(channel) {
        mid(model, channel)
    } else {
        Ok(unbound)
    }
}

/// The baseline edge: stack end, scaled zero, or the group edge when unbound.
fn baseline(model: &dyn Model, channel: Channel, unbound: Binding) -> Result<Binding> {
    if stacked_on(model, channel) {
        scaled(model, channel, FieldOptions::stacked(Suffix::End))
    } else if model.has(channel) {
        let scale = model.scale(channel).ok_or(Error::MissingScale(channel))?;
        Ok(Binding::scaled_value(scale, 0.0))
    } else {
        Ok(unbound)
    }
}
