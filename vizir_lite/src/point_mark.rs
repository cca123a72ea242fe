// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Point mark encoding, shared with circle and square marks.

use vizir_marks::{Binding, Property, PropertyMap};

use crate::binding::{bound_or_fallback, half_band, mid};
use crate::mixins::{color_mixins, opacity};
use crate::{Channel, MarkEncoder, Model, Result};

/// Encoder for `point` marks (`symbol`, shape from the shape channel).
#[derive(Clone, Copy, Debug, Default)]
pub struct PointMark;

impl MarkEncoder for PointMark {
    fn properties(&self, model: &dyn Model) -> Result<PropertyMap> {
        Ok(symbol_position(model)?
            .with(Property::Size, bound_or_fallback(model, Channel::Size)?)
            .with(Property::Shape, bound_or_fallback(model, Channel::Shape)?)
            .merge(color_mixins(model)?)
            .merge(opacity(&model.config().mark)))
    }
}

/// Centers a symbol: the bin midpoint when bound, half a band otherwise.
pub(crate) fn centered(model: &dyn Model, channel: Channel) -> Result<Binding> {
    if model.has(channel) {
        mid(model, channel)
    } else {
        Ok(half_band(model, channel))
    }
}

fn symbol_position(model: &dyn Model) -> Result<PropertyMap> {
    Ok(PropertyMap::new()
        .with(Property::X, centered(model, Channel::X)?)
        .with(Property::Y, centered(model, Channel::Y)?))
}

/// Properties of a symbol with a fixed `shape` that is always filled.
pub(crate) fn fixed_symbol(model: &dyn Model, shape: &'static str) -> Result<PropertyMap> {
    Ok(symbol_position(model)?
        .with(Property::Size, bound_or_fallback(model, Channel::Size)?)
        .with(Property::Shape, Binding::value(shape))
        .with(Property::Fill, bound_or_fallback(model, Channel::Color)?)
        .merge(opacity(&model.config().mark)))
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;
    use crate::{FieldDef, MarkKind, UnitModel};

    #[test]
    fn unbound_positions_center_in_the_band() {
        let model = UnitModel::builder(MarkKind::Point).build().unwrap();
        let props = PointMark.properties(&model).unwrap();
        assert_eq!(props.get(Property::X), Some(&Binding::value(10.5)));
        assert_eq!(props.get(Property::Y), Some(&Binding::value(10.5)));
        assert_eq!(props.get(Property::Shape), Some(&Binding::value("circle")));
        assert_eq!(props.get(Property::Size), Some(&Binding::value(30.0)));
        assert!(props.contains(Property::Stroke));
    }

    #[test]
    fn bound_channels_use_bin_midpoints_and_scales() {
        let model = UnitModel::builder(MarkKind::Point)
            .encode(Channel::X, FieldDef::quantitative("a").with_bin())
            .encode(Channel::Y, FieldDef::quantitative("b"))
            .encode(Channel::Shape, FieldDef::nominal("s"))
            .build()
            .unwrap();
        let props = PointMark.properties(&model).unwrap();
        assert_eq!(props.get(Property::X), Some(&Binding::scaled("x", "bin_a_mid")));
        assert_eq!(props.get(Property::Y), Some(&Binding::scaled("y", "b")));
        assert_eq!(props.get(Property::Shape), Some(&Binding::scaled("shape", "s")));
    }
}
