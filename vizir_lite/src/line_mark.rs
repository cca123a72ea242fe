// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Line mark encoding.

use vizir_marks::{Binding, GroupDim, Property, PropertyMap};

use crate::binding::{bound_or_fallback, mid};
use crate::mixins::{apply_marks_config, opacity};
use crate::{Channel, MarkEncoder, Model, Result};

/// Encoder for `line` marks.
///
/// Color always strokes the line; unbound positions sit at the left edge and the bottom.
#[derive(Clone, Copy, Debug, Default)]
pub struct LineMark;

impl MarkEncoder for LineMark {
    fn properties(&self, model: &dyn Model) -> Result<PropertyMap> {
        let config = &model.config().mark;
        let x = if model.has(Channel::X) {
            mid(model, Channel::X)?
        } else {
            Binding::value(0.0)
        };
        let y = if model.has(Channel::Y) {
            mid(model, Channel::Y)?
        } else {
            Binding::group(GroupDim::Height)
        };
        let map = PropertyMap::new()
            .with(Property::X, x)
            .with(Property::Y, y)
            .with(Property::Stroke, bound_or_fallback(model, Channel::Color)?)
            .with(Property::StrokeWidth, Binding::value(config.stroke_width))
            .merge(opacity(config));
        Ok(apply_marks_config(
            map,
            config,
            &[Property::Interpolate, Property::Tension],
        ))
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;
    use crate::{Config, FieldDef, Interpolate, MarkKind, UnitModel};

    #[test]
    fn unbound_line_hugs_the_axes() {
        let model = UnitModel::builder(MarkKind::Line).build().unwrap();
        let props = LineMark.properties(&model).unwrap();
        assert_eq!(props.get(Property::X), Some(&Binding::value(0.0)));
        assert_eq!(
            props.get(Property::Y),
            Some(&Binding::group(GroupDim::Height))
        );
        assert_eq!(props.get(Property::Stroke), Some(&Binding::value("#4682b4")));
        assert_eq!(props.get(Property::StrokeWidth), Some(&Binding::value(2.0)));
        assert!(!props.contains(Property::Fill));
    }

    #[test]
    fn interpolation_flows_from_config() {
        let mut config = Config::default();
        config.mark.interpolate = Some(Interpolate::Monotone);
        config.mark.tension = Some(0.5);
        let model = UnitModel::builder(MarkKind::Line)
            .encode(Channel::X, FieldDef::temporal("t"))
            .encode(Channel::Y, FieldDef::quantitative("v"))
            .config(config)
            .build()
            .unwrap();
        let props = LineMark.properties(&model).unwrap();
        assert_eq!(props.get(Property::X), Some(&Binding::scaled("x", "t")));
        assert_eq!(
            props.get(Property::Interpolate),
            Some(&Binding::value("monotone"))
        );
        assert_eq!(props.get(Property::Tension), Some(&Binding::value(0.5)));
    }
}
