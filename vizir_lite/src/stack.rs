// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Stacking metadata and the data transforms it implies.

extern crate alloc;

use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;

use vizir_marks::{ImputeMethod, SortKey, StackOffset, StackOutput, Transform, Value};

use crate::{Channel, Error, FieldOptions, Model, Result, Suffix};

/// How a bar or area mark is stacked.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct StackInfo {
    /// The stacked measure channel (`X` or `Y`).
    pub field_channel: Channel,
    /// The position channel stacks are grouped by (the other of `X`/`Y`).
    pub groupby_channel: Channel,
    /// The series channel ordering layers within a stack (`Color` or `Detail`).
    pub stack_channel: Channel,
    /// Baseline offset.
    pub offset: StackOffset,
}

impl StackInfo {
    /// Stacks the measure on `field_channel`, one layer per value of `stack_channel`.
    pub fn new(field_channel: Channel, stack_channel: Channel) -> Self {
        Self {
            field_channel,
            groupby_channel: field_channel.opposite().unwrap_or(Channel::X),
            stack_channel,
            offset: StackOffset::Zero,
        }
    }

    /// Sets the baseline offset.
    pub fn with_offset(mut self, offset: StackOffset) -> Self {
        self.offset = offset;
        self
    }
}

fn required_field(model: &dyn Model, channel: Channel) -> Result<String> {
    model
        .field(channel, FieldOptions::default())
        .ok_or(Error::MissingField(channel))
}

fn optional_field(model: &dyn Model, channel: Channel) -> Result<Vec<String>> {
    if model.has(channel) {
        Ok(vec![required_field(model, channel)?])
    } else {
        Ok(Vec::new())
    }
}

/// Builds the `stack` transform computing `<field>_start` / `<field>_end`.
pub fn stack_transform(model: &dyn Model, stack: &StackInfo) -> Result<Transform> {
    let field = required_field(model, stack.field_channel)?;
    let sortby = optional_field(model, stack.stack_channel)?
        .into_iter()
        .map(SortKey::desc)
        .collect();
    let output = StackOutput {
        start: model
            .field(stack.field_channel, FieldOptions::stacked(Suffix::Start))
            .ok_or(Error::MissingField(stack.field_channel))?,
        end: model
            .field(stack.field_channel, FieldOptions::stacked(Suffix::End))
            .ok_or(Error::MissingField(stack.field_channel))?,
    };
    Ok(Transform::Stack {
        groupby: optional_field(model, stack.groupby_channel)?,
        field,
        sortby,
        output,
        offset: (stack.offset != StackOffset::Zero).then_some(stack.offset),
    })
}

/// Builds the `impute` transform that fills missing series × position tuples with zero.
pub fn impute_transform(model: &dyn Model, stack: &StackInfo) -> Result<Transform> {
    Ok(Transform::Impute {
        field: required_field(model, stack.field_channel)?,
        groupby: optional_field(model, stack.stack_channel)?,
        orderby: optional_field(model, stack.groupby_channel)?,
        method: ImputeMethod::Value,
        value: Value::Number(0.0),
    })
}

#[cfg(test)]
mod tests {
    extern crate std;

    use serde_json::json;

    use super::*;
    use crate::{AggregateOp, FieldDef, MarkKind, UnitModel};

    fn stacked_area(offset: StackOffset) -> UnitModel {
        UnitModel::builder(MarkKind::Area)
            .encode(Channel::X, FieldDef::temporal("date").with_time_unit("month"))
            .encode(
                Channel::Y,
                FieldDef::quantitative("price").with_aggregate(AggregateOp::Sum),
            )
            .encode(Channel::Color, FieldDef::nominal("symbol"))
            .stack(StackInfo::new(Channel::Y, Channel::Color).with_offset(offset))
            .build()
            .unwrap()
    }

    #[test]
    fn stack_transform_names_start_and_end_outputs() {
        let model = stacked_area(StackOffset::Zero);
        let stack = model.stack().unwrap();
        let transform = stack_transform(&model, stack).unwrap();
        assert_eq!(
            serde_json::to_value(&transform).unwrap(),
            json!({
                "type": "stack",
                "groupby": ["month_date"],
                "field": "sum_price",
                "sortby": ["-symbol"],
                "output": {"start": "sum_price_start", "end": "sum_price_end"}
            })
        );
    }

    #[test]
    fn non_zero_offset_is_emitted() {
        let model = stacked_area(StackOffset::Normalize);
        let transform = stack_transform(&model, model.stack().unwrap()).unwrap();
        assert_eq!(
            serde_json::to_value(&transform).unwrap()["offset"],
            json!("normalize")
        );
    }

    #[test]
    fn impute_fills_series_by_position() {
        let model = stacked_area(StackOffset::Zero);
        let transform = impute_transform(&model, model.stack().unwrap()).unwrap();
        assert_eq!(
            serde_json::to_value(&transform).unwrap(),
            json!({
                "type": "impute",
                "field": "sum_price",
                "groupby": ["symbol"],
                "orderby": ["month_date"],
                "method": "value",
                "value": 0.0
            })
        );
    }
}
