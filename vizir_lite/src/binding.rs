// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Property binding helpers shared by the mark encoders.
//!
//! Every encoder makes the same decision per channel: a bound channel reads its field through
//! its scale, an unbound one falls back to a literal.

use vizir_marks::Binding;

use crate::{Channel, Error, FieldOptions, Model, Result, Suffix};

/// `{scale, field}` for a bound channel.
///
/// Fails with [`Error::MissingScale`] or [`Error::MissingField`] if the model cannot name
/// either.
pub fn scaled(model: &dyn Model, channel: Channel, opts: FieldOptions) -> Result<Binding> {
    let scale = model.scale(channel).ok_or(Error::MissingScale(channel))?;
    let field = model
        .field(channel, opts)
        .ok_or(Error::MissingField(channel))?;
    Ok(Binding::scaled(scale, field))
}

/// `{scale, field}` addressing the midpoint of a binned range (the plain field otherwise).
pub fn mid(model: &dyn Model, channel: Channel) -> Result<Binding> {
    scaled(model, channel, FieldOptions::bin(Suffix::Mid))
}

/// `{value}` from the channel's fallback literal.
pub fn fallback(model: &dyn Model, channel: Channel) -> Result<Binding> {
    model
        .field_def(channel)
        .value
        .clone()
        .map(Binding::value)
        .ok_or(Error::MissingValue(channel))
}

/// [`scaled`] when `channel` is bound, [`fallback`] otherwise.
pub fn bound_or_fallback(model: &dyn Model, channel: Channel) -> Result<Binding> {
    if model.has(channel) {
        scaled(model, channel, FieldOptions::default())
    } else {
        fallback(model, channel)
    }
}

/// `{value}` centering a mark within one band of `channel`.
pub fn half_band(model: &dyn Model, channel: Channel) -> Binding {
    Binding::value(model.band_width(channel) / 2.0)
}
