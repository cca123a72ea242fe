// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Circle mark encoding.

use vizir_marks::PropertyMap;

use crate::point_mark::fixed_symbol;
use crate::{MarkEncoder, Model, Result};

/// Encoder for `circle` marks: filled circular symbols.
///
/// The shape channel is ignored.
#[derive(Clone, Copy, Debug, Default)]
pub struct CircleMark;

impl MarkEncoder for CircleMark {
    fn properties(&self, model: &dyn Model) -> Result<PropertyMap> {
        fixed_symbol(model, "circle")
    }
}
