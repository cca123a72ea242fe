// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-mark-kind property encoders.

use vizir_marks::PropertyMap;

use crate::{
    AreaMark, BarMark, CircleMark, LineMark, MarkKind, Model, PointMark, Result, SquareMark,
    TextMark, TickMark,
};

/// Derives the visual properties of one mark kind from a model.
pub trait MarkEncoder {
    /// Properties of the main mark.
    fn properties(&self, model: &dyn Model) -> Result<PropertyMap>;

    /// Properties of a text overlay drawn when the label channel is bound.
    ///
    /// `None` means the mark kind has no label overlay; the label channel is then ignored.
    fn labels(&self, model: &dyn Model) -> Result<Option<PropertyMap>> {
        let _ = model;
        Ok(None)
    }
}

/// Returns the built-in encoder for `kind`.
pub fn encoder(kind: MarkKind) -> &'static dyn MarkEncoder {
    match kind {
        MarkKind::Bar => &BarMark,
        MarkKind::Tick => &TickMark,
        MarkKind::Point => &PointMark,
        MarkKind::Line => &LineMark,
        MarkKind::Area => &AreaMark,
        MarkKind::Text => &TextMark,
        MarkKind::Circle => &CircleMark,
        MarkKind::Square => &SquareMark,
    }
}
