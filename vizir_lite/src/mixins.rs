// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Property groups shared across mark kinds.

use vizir_marks::{Binding, Property, PropertyMap};

use crate::binding::bound_or_fallback;
use crate::{Channel, MarkConfig, Model, Result};

/// Paint from the color channel.
///
/// Filled marks get `fill`; stroked marks get `stroke` plus the configured `strokeWidth`.
pub fn color_mixins(model: &dyn Model) -> Result<PropertyMap> {
    let config = &model.config().mark;
    let paint = bound_or_fallback(model, Channel::Color)?;
    let map = if config.is_filled(model.mark()) {
        PropertyMap::new().with(Property::Fill, paint)
    } else {
        PropertyMap::new()
            .with(Property::Stroke, paint)
            .with(Property::StrokeWidth, Binding::value(config.stroke_width))
    };
    Ok(map)
}

/// Copies configured literals for `keys` into `map`; unset keys are left alone.
pub fn apply_marks_config(
    mut map: PropertyMap,
    config: &MarkConfig,
    keys: &[Property],
) -> PropertyMap {
    for &key in keys {
        if let Some(value) = config.value(key) {
            map.insert(key, Binding::value(value));
        }
    }
    map
}

/// The configured `opacity`, if any.
pub(crate) fn opacity(config: &MarkConfig) -> PropertyMap {
    apply_marks_config(PropertyMap::new(), config, &[Property::Opacity])
}
