// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Detail fields: the extra grouping keys of path marks.

extern crate alloc;

use alloc::string::String;

use smallvec::SmallVec;

use crate::{Channel, Error, FieldOptions, Model, Result};

/// Fields of `Color`, `Detail` and `Shape` (in that order) that are bound and not aggregated.
///
/// A line or area with detail fields draws one path per distinct combination.
pub fn detail_fields(model: &dyn Model) -> Result<SmallVec<[String; 3]>> {
    [Channel::Color, Channel::Detail, Channel::Shape]
        .into_iter()
        .filter(|&channel| model.has(channel) && !model.field_def(channel).is_aggregated())
        .map(|channel| {
            model
                .field(channel, FieldOptions::default())
                .ok_or(Error::MissingField(channel))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;
    use crate::{AggregateOp, FieldDef, MarkKind, UnitModel};

    #[test]
    fn aggregated_and_unbound_channels_are_skipped() {
        let model = UnitModel::builder(MarkKind::Line)
            .encode(Channel::Shape, FieldDef::nominal("s"))
            .encode(
                Channel::Color,
                FieldDef::quantitative("c").with_aggregate(AggregateOp::Mean),
            )
            .encode(Channel::Detail, FieldDef::ordinal("d"))
            .build()
            .unwrap();
        assert_eq!(detail_fields(&model).unwrap().as_slice(), ["d", "s"]);
    }

    #[test]
    fn no_bindings_means_no_details() {
        let model = UnitModel::builder(MarkKind::Area).build().unwrap();
        assert!(detail_fields(&model).unwrap().is_empty());
    }
}
