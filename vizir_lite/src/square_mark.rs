// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Square mark encoding.

use vizir_marks::PropertyMap;

use crate::point_mark::fixed_symbol;
use crate::{MarkEncoder, Model, Result};

/// Encoder for `square` marks: filled square symbols, ignoring the shape channel.
#[derive(Clone, Copy, Debug, Default)]
pub struct SquareMark;

impl MarkEncoder for SquareMark {
    fn properties(&self, model: &dyn Model) -> Result<PropertyMap> {
        fixed_symbol(model, "square")
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use vizir_marks::{Binding, Property};

    use super::*;
    use crate::{Channel, FieldDef, MarkKind, UnitModel};

    #[test]
    fn shape_binding_is_overridden() {
        let model = UnitModel::builder(MarkKind::Square)
            .encode(Channel::Shape, FieldDef::nominal("s"))
            .build()
            .unwrap();
        let props = SquareMark.properties(&model).unwrap();
        assert_eq!(props.get(Property::Shape), Some(&Binding::value("square")));
        assert_eq!(props.get(Property::Fill), Some(&Binding::value("#4682b4")));
    }
}
