// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Vega-Lite-ish mark compilation for `vizir_marks`.
//!
//! This crate takes a resolved encoding [`Model`] (channels bound to fields and scales) and
//! derives the declarative mark tree a Vega-style renderer draws:
//! - **Encoders** decide, per mark kind, which visual properties to emit and whether each
//!   reads a field through a scale or falls back to a literal.
//! - **Assembly** ([`compile_marks`]) wraps encoder output in mark nodes, attaching data,
//!   sort/stack/impute transforms and facet groups for multi-series paths.
//!
//! Scale resolution, aggregation and the data pipeline are out of scope: the model reports
//! their outcome, and the emitted transforms describe work for the renderer to do.
//!
//! ```
//! use vizir_lite::{AggregateOp, Channel, FieldDef, MarkKind, UnitModel, compile_marks};
//!
//! let model = UnitModel::builder(MarkKind::Bar)
//!     .encode(Channel::X, FieldDef::ordinal("month"))
//!     .encode(
//!         Channel::Y,
//!         FieldDef::quantitative("sales").with_aggregate(AggregateOp::Sum),
//!     )
//!     .build()
//!     .unwrap();
//! let marks = compile_marks(&model).unwrap();
//! assert_eq!(marks.len(), 1);
//! assert_eq!(marks[0].data(), Some("summary"));
//! ```

#![no_std]

extern crate alloc;

mod area_mark;
mod bar_mark;
mod binding;
mod channel;
mod circle_mark;
mod compile;
mod config;
mod detail;
mod encoder;
mod error;
mod field;
mod line_mark;
mod mark;
mod mixins;
mod model;
mod point_mark;
mod square_mark;
mod stack;
mod text_mark;
mod tick_mark;
mod unit;

pub use area_mark::AreaMark;
pub use bar_mark::{BAND_INSET, BAR_CONTINUOUS_THICKNESS, BarMark};
pub use binding::{bound_or_fallback, fallback, half_band, mid, scaled};
pub use channel::Channel;
pub use circle_mark::CircleMark;
pub use compile::{compile_marks, compile_marks_with};
pub use config::{
    Align, Baseline, Config, FontStyle, FontWeight, Interpolate, MarkConfig, Orient, ScaleConfig,
    StackMode,
};
pub use detail::detail_fields;
pub use encoder::{MarkEncoder, encoder};
pub use error::{Error, Result};
pub use field::{
    AggregateOp, DEFAULT_BAND_WIDTH, FieldDef, FieldOptions, FieldType, ScaleDef, ScaleType, Suffix,
};
pub use line_mark::LineMark;
pub use mark::MarkKind;
pub use mixins::{apply_marks_config, color_mixins};
pub use model::Model;
pub use point_mark::PointMark;
pub use square_mark::SquareMark;
pub use stack::{StackInfo, impute_transform, stack_transform};
pub use text_mark::{TEXT_RIGHT_OFFSET, TextMark};
pub use tick_mark::{TICK_BAND_DIVISOR, TICK_OFFSET_DIVISOR, TICK_THICKNESS, TickMark};
pub use unit::{Encoding, UnitModel, UnitModelBuilder, UnitSpec};

pub use vizir_marks;
