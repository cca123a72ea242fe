// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The read-only model interface consumed by mark compilation.

extern crate alloc;

use alloc::string::String;

use crate::{Channel, Config, FieldDef, FieldOptions, MarkKind, StackInfo};

/// A resolved encoding model.
///
/// Scale resolution, aggregation and binning happen before compilation; a `Model` only reports
/// the outcome. Encoders and the assembler never mutate it.
///
/// [`crate::UnitModel`] is the implementation used for standalone specs. Callers with their own
/// model representation can implement this trait directly.
pub trait Model {
    /// The mark kind.
    fn mark(&self) -> MarkKind;

    /// Optional name used to derive output node names.
    fn name(&self) -> Option<&str>;

    /// Returns `true` if `channel` is bound to data.
    fn has(&self, channel: Channel) -> bool;

    /// Field definition for `channel`; unbound channels still report band width and fallback
    /// value.
    fn field_def(&self, channel: Channel) -> &FieldDef;

    /// Name of the field `channel` reads in the transformed data, or `None` when unbound.
    fn field(&self, channel: Channel, opts: FieldOptions) -> Option<String>;

    /// Name of the resolved scale for `channel`, or `None` when no scale was resolved.
    fn scale(&self, channel: Channel) -> Option<&str>;

    /// Returns `true` if `channel` is bound to a measure.
    fn is_measure(&self, channel: Channel) -> bool;

    /// Returns `true` if `channel` is bound to a dimension.
    fn is_dimension(&self, channel: Channel) -> bool;

    /// Returns `true` if `channel`'s scale is ordinal.
    fn is_ordinal_scale(&self, channel: Channel) -> bool;

    /// Stacking, when active.
    fn stack(&self) -> Option<&StackInfo>;

    /// Style configuration.
    fn config(&self) -> &Config;

    /// Name of the data table marks read from.
    fn data_table(&self) -> &str;

    /// Number format for quantitative values on `channel`.
    fn number_format(&self, channel: Channel) -> &str;

    /// Returns `true` if the model is faceted into rows or columns.
    ///
    /// Faceted marks get their data from an enclosing facet group, so they carry no
    /// `from.data` of their own.
    fn is_faceted(&self) -> bool {
        self.has(Channel::Row) || self.has(Channel::Column)
    }

    /// Band width of `channel`.
    fn band_width(&self, channel: Channel) -> f64 {
        self.field_def(channel).band_width()
    }
}
