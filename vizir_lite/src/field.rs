// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Field definitions and field-name addressing.

extern crate alloc;

use alloc::string::String;

use serde::{Deserialize, Serialize};
use vizir_marks::Value;

/// Default pixel width of one ordinal band.
pub const DEFAULT_BAND_WIDTH: f64 = 21.0;

/// The measurement type of a field.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    /// Continuous numbers.
    Quantitative,
    /// Ordered categories.
    Ordinal,
    /// Dates and times.
    Temporal,
    /// Unordered categories.
    #[default]
    Nominal,
}

/// Aggregation applied to a field upstream.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AggregateOp {
    /// Number of tuples; needs no field.
    Count,
    /// Number of distinct values.
    Distinct,
    /// Sum.
    Sum,
    /// Arithmetic mean.
    Mean,
    /// Alias for `Mean`.
    Average,
    /// Median.
    Median,
    /// Minimum.
    Min,
    /// Maximum.
    Max,
}

impl AggregateOp {
    /// Returns the operation name used as a field prefix.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Count => "count",
            Self::Distinct => "distinct",
            Self::Sum => "sum",
            Self::Mean => "mean",
            Self::Average => "average",
            Self::Median => "median",
            Self::Min => "min",
            Self::Max => "max",
        }
    }
}

/// The resolved type of a channel's scale.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScaleType {
    /// Linear.
    Linear,
    /// Logarithmic.
    Log,
    /// Power.
    Pow,
    /// Square root.
    Sqrt,
    /// Local time.
    Time,
    /// UTC time.
    Utc,
    /// Discrete bands or points.
    Ordinal,
}

impl ScaleType {
    /// Returns `true` for discrete scales.
    pub const fn is_ordinal(self) -> bool {
        matches!(self, Self::Ordinal)
    }
}

/// Scale options carried on a field definition.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ScaleDef {
    /// Explicit scale type; derived from the field type when absent.
    #[serde(rename = "type")]
    pub kind: Option<ScaleType>,
    /// Pixel width of one band; filled from config when absent.
    pub band_width: Option<f64>,
}

/// How a channel is bound to data.
///
/// A definition without `field` (and without a `count` aggregate) leaves the channel unbound;
/// its `value` is then the literal fallback used by encoders.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FieldDef {
    /// Source field name.
    pub field: Option<String>,
    /// Measurement type.
    #[serde(rename = "type")]
    pub kind: FieldType,
    /// Upstream aggregation.
    pub aggregate: Option<AggregateOp>,
    /// Upstream time unit (`month`, `year`, ...).
    pub time_unit: Option<String>,
    /// Whether the field is binned upstream.
    pub bin: bool,
    /// Scale options.
    pub scale: ScaleDef,
    /// Literal fallback used when the channel is unbound.
    pub value: Option<Value>,
    /// Number format for text.
    pub format: Option<String>,
}

impl FieldDef {
    /// A definition binding `field` with the given type.
    pub fn new(field: impl Into<String>, kind: FieldType) -> Self {
        Self {
            field: Some(field.into()),
            kind,
            ..Self::default()
        }
    }

    /// A quantitative field.
    pub fn quantitative(field: impl Into<String>) -> Self {
        Self::new(field, FieldType::Quantitative)
    }

    /// An ordinal field.
    pub fn ordinal(field: impl Into<String>) -> Self {
        Self::new(field, FieldType::Ordinal)
    }

    /// A nominal field.
    pub fn nominal(field: impl Into<String>) -> Self {
        Self::new(field, FieldType::Nominal)
    }

    /// A temporal field.
    pub fn temporal(field: impl Into<String>) -> Self {
        Self::new(field, FieldType::Temporal)
    }

    /// The `count` aggregate, which needs no source field.
    pub fn count() -> Self {
        Self {
            kind: FieldType::Quantitative,
            aggregate: Some(AggregateOp::Count),
            ..Self::default()
        }
    }

    /// An unbound definition carrying only a literal fallback.
    pub fn literal(value: impl Into<Value>) -> Self {
        Self {
            value: Some(value.into()),
            ..Self::default()
        }
    }

    /// Sets the aggregation.
    pub fn with_aggregate(mut self, op: AggregateOp) -> Self {
        self.aggregate = Some(op);
        self
    }

    /// Sets the time unit.
    pub fn with_time_unit(mut self, unit: impl Into<String>) -> Self {
        self.time_unit = Some(unit.into());
        self
    }

    /// Marks the field as binned.
    pub fn with_bin(mut self) -> Self {
        self.bin = true;
        self
    }

    /// Sets the band width.
    pub fn with_band_width(mut self, band_width: f64) -> Self {
        self.scale.band_width = Some(band_width);
        self
    }

    /// Sets an explicit scale type.
    pub fn with_scale_type(mut self, kind: ScaleType) -> Self {
        self.scale.kind = Some(kind);
        self
    }

    /// Sets the number format.
    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }

    /// Sets the literal fallback.
    pub fn with_value(mut self, value: impl Into<Value>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Returns `true` if this definition binds data.
    pub fn is_bound(&self) -> bool {
        self.field.is_some() || self.aggregate == Some(AggregateOp::Count)
    }

    /// Returns `true` if the field is aggregated upstream.
    pub fn is_aggregated(&self) -> bool {
        self.aggregate.is_some()
    }

    /// Returns `true` if this definition is a dimension (a grouping key).
    ///
    /// Nominal, ordinal and binned fields are dimensions, as are temporal fields with a time
    /// unit.
    pub fn is_dimension(&self) -> bool {
        self.is_bound()
            && (matches!(self.kind, FieldType::Nominal | FieldType::Ordinal)
                || self.bin
                || (self.kind == FieldType::Temporal && self.time_unit.is_some()))
    }

    /// Returns `true` if this definition is a measure (bound and not a dimension).
    pub fn is_measure(&self) -> bool {
        self.is_bound() && !self.is_dimension()
    }

    /// Returns the scale type: the explicit one, else one derived from the field type.
    pub fn scale_type(&self) -> ScaleType {
        if let Some(kind) = self.scale.kind {
            return kind;
        }
        if self.bin {
            return ScaleType::Linear;
        }
        match self.kind {
            FieldType::Nominal | FieldType::Ordinal => ScaleType::Ordinal,
            FieldType::Temporal => ScaleType::Time,
            FieldType::Quantitative => ScaleType::Linear,
        }
    }

    /// Returns the band width, falling back to [`DEFAULT_BAND_WIDTH`].
    pub fn band_width(&self) -> f64 {
        self.scale.band_width.unwrap_or(DEFAULT_BAND_WIDTH)
    }

    /// Returns the name under which this field appears in the (transformed) data.
    ///
    /// Binned fields are `bin_<field>` plus a range suffix (`_start` unless overridden), the
    /// `count` aggregate is `count`, other aggregates and time units prefix the field name, and
    /// `datum.` is prepended for expression contexts.
    pub fn field_name(&self, opts: FieldOptions) -> String {
        let field = self.field.as_deref().unwrap_or_default();
        let mut name = if self.bin {
            let suffix = opts.bin_suffix.unwrap_or(Suffix::Start);
            alloc::format!("bin_{field}{}", suffix.as_str())
        } else if let Some(op) = self.aggregate {
            match op {
                AggregateOp::Count => String::from("count"),
                op => alloc::format!("{}_{field}", op.as_str()),
            }
        } else if let Some(unit) = &self.time_unit {
            alloc::format!("{unit}_{field}")
        } else {
            String::from(field)
        };
        if let Some(suffix) = opts.suffix {
            name.push_str(suffix.as_str());
        }
        if opts.datum {
            name.insert_str(0, "datum.");
        }
        name
    }
}

/// A field-name suffix addressing part of a range.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Suffix {
    /// `_start`
    Start,
    /// `_end`
    End,
    /// `_mid`
    Mid,
}

impl Suffix {
    /// Returns the suffix text.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Start => "_start",
            Self::End => "_end",
            Self::Mid => "_mid",
        }
    }
}

/// Modifiers for [`crate::Model::field`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct FieldOptions {
    /// Range suffix for binned fields; ignored for unbinned fields.
    pub bin_suffix: Option<Suffix>,
    /// Suffix appended unconditionally (stacked ranges).
    pub suffix: Option<Suffix>,
    /// Prefix the name with `datum.`.
    pub datum: bool,
}

impl FieldOptions {
    /// Address a binned range part.
    pub const fn bin(suffix: Suffix) -> Self {
        Self {
            bin_suffix: Some(suffix),
            suffix: None,
            datum: false,
        }
    }

    /// Address a stacked range part.
    pub const fn stacked(suffix: Suffix) -> Self {
        Self {
            bin_suffix: None,
            suffix: Some(suffix),
            datum: false,
        }
    }

    /// Reference the field from an expression (`datum.<field>`).
    pub const fn datum() -> Self {
        Self {
            bin_suffix: None,
            suffix: None,
            datum: true,
        }
    }
}
