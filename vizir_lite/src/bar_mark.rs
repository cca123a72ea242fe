// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bar mark encoding.

use vizir_marks::{Binding, GroupDim, Property, PropertyMap};

use crate::binding::scaled;
use crate::mixins::{color_mixins, opacity};
use crate::{Channel, FieldOptions, MarkEncoder, Model, Result, Suffix};

/// Pixels trimmed from a band so adjacent bars do not touch.
pub const BAND_INSET: f64 = 1.0;

/// Width of bars placed on a continuous x scale.
pub const BAR_CONTINUOUS_THICKNESS: f64 = 2.0;

/// Encoder for `bar` marks (`rect`).
///
/// Bars span from a zero baseline to the measure. The baseline is `0` on x and the group
/// height on y, since y grows downwards.
#[derive(Clone, Copy, Debug, Default)]
pub struct BarMark;

impl MarkEncoder for BarMark {
    fn properties(&self, model: &dyn Model) -> Result<PropertyMap> {
        Ok(x_position(model)?
            .merge(y_position(model)?)
            .merge(color_mixins(model)?)
            .merge(opacity(&model.config().mark)))
    }
}

fn stacked_on(model: &dyn Model, channel: Channel) -> bool {
    model.stack().is_some_and(|s| s.field_channel == channel)
}

fn stacked_range(
    model: &dyn Model,
    channel: Channel,
    start: Property,
    end: Property,
) -> Result<PropertyMap> {
    Ok(PropertyMap::new()
        .with(
            start,
            scaled(model, channel, FieldOptions::stacked(Suffix::Start))?,
        )
        .with(end, scaled(model, channel, FieldOptions::stacked(Suffix::End))?))
}

fn binned(model: &dyn Model, channel: Channel) -> bool {
    model.has(channel) && model.field_def(channel).bin
}

/// The bin's extent, with the start nudged inwards by the inset.
fn binned_range(
    model: &dyn Model,
    channel: Channel,
    start: Property,
    end: Property,
) -> Result<PropertyMap> {
    let start_binding =
        scaled(model, channel, FieldOptions::bin(Suffix::Start))?.with_offset(BAND_INSET);
    Ok(PropertyMap::new()
        .with(start, start_binding)
        .with(end, scaled(model, channel, FieldOptions::bin(Suffix::End))?))
}

fn x_position(model: &dyn Model) -> Result<PropertyMap> {
    if stacked_on(model, Channel::X) {
        return stacked_range(model, Channel::X, Property::X, Property::X2);
    }
    if binned(model, Channel::X) {
        return binned_range(model, Channel::X, Property::X, Property::X2);
    }

    let mut map = PropertyMap::new();
    if model.is_measure(Channel::X) {
        map.insert(Property::X, scaled(model, Channel::X, FieldOptions::default())?);
        if !model.has(Channel::Y) || model.is_dimension(Channel::Y) {
            map.insert(Property::X2, Binding::value(0.0));
        }
    } else if model.has(Channel::X) {
        map.insert(Property::Xc, scaled(model, Channel::X, FieldOptions::default())?);
    } else {
        map.insert(Property::X, Binding::value(0.0).with_offset(BAND_INSET));
    }

    if !map.contains(Property::X2) {
        let width = if !model.has(Channel::X) || model.is_ordinal_scale(Channel::X) {
            band_thickness(model, Channel::X)?
        } else {
            Binding::value(BAR_CONTINUOUS_THICKNESS)
        };
        map.insert(Property::Width, width);
    }
    Ok(map)
}

fn y_position(model: &dyn Model) -> Result<PropertyMap> {
    let baseline = || Binding::group(GroupDim::Height).with_offset(-BAND_INSET);

    let mut map = if stacked_on(model, Channel::Y) {
        stacked_range(model, Channel::Y, Property::Y, Property::Y2)?
    } else if binned(model, Channel::Y) {
        binned_range(model, Channel::Y, Property::Y, Property::Y2)?
    } else if model.is_measure(Channel::Y) {
        let map = PropertyMap::new().with(
            Property::Y,
            scaled(model, Channel::Y, FieldOptions::default())?,
        );
        if !model.has(Channel::X) || model.is_dimension(Channel::X) {
            map.with(Property::Y2, baseline())
        } else {
            map
        }
    } else if model.has(Channel::Y) {
        PropertyMap::new().with(
            Property::Yc,
            scaled(model, Channel::Y, FieldOptions::default())?,
        )
    } else {
        PropertyMap::new().with(Property::Y2, baseline())
    };

    map.insert(Property::Height, band_thickness(model, Channel::Y)?);
    Ok(map)
}

/// The size channel when bound, else one band of `channel` minus the inset.
fn band_thickness(model: &dyn Model, channel: Channel) -> Result<Binding> {
    if model.has(Channel::Size) {
        scaled(model, Channel::Size, FieldOptions::default())
    } else {
        Ok(Binding::value(model.band_width(channel) - BAND_INSET))
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;
    use crate::{AggregateOp, FieldDef, MarkKind, UnitModel};

    fn bar() -> crate::UnitModelBuilder {
        UnitModel::builder(MarkKind::Bar)
    }

    #[test]
    fn horizontal_measure_starts_at_zero() {
        let model = bar()
            .encode(Channel::X, FieldDef::quantitative("v"))
            .encode(Channel::Y, FieldDef::nominal("k"))
            .build()
            .unwrap();
        let props = BarMark.properties(&model).unwrap();
        assert_eq!(props.get(Property::X), Some(&Binding::scaled("x", "v")));
        assert_eq!(props.get(Property::X2), Some(&Binding::value(0.0)));
        assert!(!props.contains(Property::Width));
        assert_eq!(props.get(Property::Yc), Some(&Binding::scaled("y", "k")));
        assert_eq!(props.get(Property::Height), Some(&Binding::value(20.0)));
    }

    #[test]
    fn binned_x_spans_the_bin() {
        let model = bar()
            .encode(Channel::X, FieldDef::quantitative("v").with_bin())
            .encode(Channel::Y, FieldDef::count())
            .build()
            .unwrap();
        let props = BarMark.properties(&model).unwrap();
        assert_eq!(
            props.get(Property::X),
            Some(&Binding::scaled("x", "bin_v_start").with_offset(1.0))
        );
        assert_eq!(props.get(Property::X2), Some(&Binding::scaled("x", "bin_v_end")));
        assert!(!props.contains(Property::Width));
        assert_eq!(props.get(Property::Y), Some(&Binding::scaled("y", "count")));
        assert_eq!(
            props.get(Property::Y2),
            Some(&Binding::group(GroupDim::Height).with_offset(-1.0))
        );
    }

    #[test]
    fn size_channel_sets_thickness() {
        let model = bar()
            .encode(Channel::X, FieldDef::ordinal("k"))
            .encode(
                Channel::Y,
                FieldDef::quantitative("v").with_aggregate(AggregateOp::Sum),
            )
            .encode(Channel::Size, FieldDef::quantitative("w"))
            .build()
            .unwrap();
        let props = BarMark.properties(&model).unwrap();
        assert_eq!(props.get(Property::Width), Some(&Binding::scaled("size", "w")));
        assert_eq!(props.get(Property::Height), Some(&Binding::scaled("size", "w")));
    }

    #[test]
    fn stacked_x_uses_start_and_end() {
        let model = bar()
            .encode(
                Channel::X,
                FieldDef::quantitative("v").with_aggregate(AggregateOp::Sum),
            )
            .encode(Channel::Y, FieldDef::nominal("k"))
            .encode(Channel::Color, FieldDef::nominal("c"))
            .build()
            .unwrap();
        let props = BarMark.properties(&model).unwrap();
        assert_eq!(
            props.get(Property::X),
            Some(&Binding::scaled("x", "sum_v_start"))
        );
        assert_eq!(props.get(Property::X2), Some(&Binding::scaled("x", "sum_v_end")));
        assert_eq!(props.get(Property::Fill), Some(&Binding::scaled("color", "c")));
    }

    #[test]
    fn time_unit_y_keeps_band_height() {
        let model = bar()
            .encode(Channel::X, FieldDef::quantitative("v"))
            .encode(
                Channel::Y,
                FieldDef::temporal("d").with_time_unit("month"),
            )
            .build()
            .unwrap();
        let props = BarMark.properties(&model).unwrap();
        assert_eq!(props.get(Property::Yc), Some(&Binding::scaled("y", "month_d")));
        assert_eq!(props.get(Property::Height), Some(&Binding::value(20.0)));
    }

    #[test]
    fn binned_y_spans_the_bin_with_band_height() {
        let model = bar()
            .encode(Channel::X, FieldDef::quantitative("v"))
            .encode(Channel::Y, FieldDef::quantitative("w").with_bin())
            .build()
            .unwrap();
        let props = BarMark.properties(&model).unwrap();
        assert_eq!(
            props.get(Property::Y),
            Some(&Binding::scaled("y", "bin_w_start").with_offset(1.0))
        );
        assert_eq!(props.get(Property::Y2), Some(&Binding::scaled("y", "bin_w_end")));
        assert_eq!(props.get(Property::Height), Some(&Binding::value(20.0)));
    }

    #[test]
    fn unbound_positions_fill_the_band() {
        let model = bar().build().unwrap();
        let props = BarMark.properties(&model).unwrap();
        assert_eq!(
            props.get(Property::X),
            Some(&Binding::value(0.0).with_offset(1.0))
        );
        assert_eq!(props.get(Property::Width), Some(&Binding::value(20.0)));
        assert_eq!(
            props.get(Property::Y2),
            Some(&Binding::group(GroupDim::Height).with_offset(-1.0))
        );
        assert_eq!(props.get(Property::Height), Some(&Binding::value(20.0)));
    }
}
