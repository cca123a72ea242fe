// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Data transform descriptors attached to `from.transform`.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use serde::{Deserialize, Serialize, Serializer};

use crate::Value;

/// Sorting order for a [`SortKey`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortOrder {
    /// Ascending order.
    Asc,
    /// Descending order.
    Desc,
}

/// A sort key: a field name plus an order.
///
/// Serialized as the field name, `-`-prefixed when descending.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SortKey {
    /// Field to sort by.
    pub field: String,
    /// Sort order.
    pub order: SortOrder,
}

impl SortKey {
    /// Sort ascending by `field`.
    pub fn asc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            order: SortOrder::Asc,
        }
    }

    /// Sort descending by `field`.
    pub fn desc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            order: SortOrder::Desc,
        }
    }

    /// Parses the serialized form, where a leading `-` means descending.
    pub fn parse(key: &str) -> Self {
        match key.strip_prefix('-') {
            Some(field) => Self::desc(field),
            None => Self::asc(key),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.order {
            SortOrder::Asc => f.write_str(&self.field),
            SortOrder::Desc => write!(f, "-{}", self.field),
        }
    }
}

impl Serialize for SortKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Stack baseline offset mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StackOffset {
    /// Stack positive and negative values around 0 (Vega default).
    #[default]
    Zero,
    /// Center each stack around the middle of the tallest one.
    Center,
    /// Normalize each stack to the range `[0, 1]`.
    Normalize,
}

/// Output field names written by a [`Transform::Stack`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StackOutput {
    /// Field receiving the stack start offset.
    pub start: String,
    /// Field receiving the stack end offset.
    pub end: String,
}

/// How [`Transform::Impute`] fills missing tuples.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImputeMethod {
    /// Use the transform's `value`.
    #[default]
    Value,
    /// Mean of the group.
    Mean,
    /// Median of the group.
    Median,
    /// Minimum of the group.
    Min,
    /// Maximum of the group.
    Max,
}

/// A data transform evaluated by the renderer before marks are drawn.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Transform {
    /// Reorder tuples.
    Sort {
        /// Sort key.
        by: SortKey,
    },
    /// Partition tuples into one group per distinct key.
    Facet {
        /// Key fields.
        groupby: Vec<String>,
    },
    /// Fill in missing `groupby` × `orderby` combinations.
    ///
    /// Stacked areas need this so every series has a tuple at every position.
    Impute {
        /// Field to fill.
        field: String,
        /// Series key fields.
        groupby: Vec<String>,
        /// Position key fields.
        orderby: Vec<String>,
        /// Fill method.
        method: ImputeMethod,
        /// Fill value, used when `method` is [`ImputeMethod::Value`].
        value: Value,
    },
    /// Compute stacked start/end offsets per tuple.
    Stack {
        /// Fields defining independent stacks.
        groupby: Vec<String>,
        /// Field providing the value to accumulate.
        field: String,
        /// Order of tuples within each stack.
        sortby: Vec<SortKey>,
        /// Output field names.
        output: StackOutput,
        /// Baseline offset mode; omitted for the default zero baseline.
        #[serde(skip_serializing_if = "Option::is_none")]
        offset: Option<StackOffset>,
    },
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::string::ToString;
    use alloc::vec;

    use serde_json::json;

    use super::*;

    #[test]
    fn sort_key_parses_and_prints_descending_prefix() {
        assert_eq!(SortKey::parse("-price"), SortKey::desc("price"));
        assert_eq!(SortKey::parse("price"), SortKey::asc("price"));
        assert_eq!(SortKey::desc("a").to_string(), "-a");
    }

    #[test]
    fn transforms_are_tagged_by_type() {
        let stack = Transform::Stack {
            groupby: vec!["a".into()],
            field: "sum_b".into(),
            sortby: vec![SortKey::desc("c")],
            output: StackOutput {
                start: "sum_b_start".into(),
                end: "sum_b_end".into(),
            },
            offset: None,
        };
        assert_eq!(
            serde_json::to_value(&stack).unwrap(),
            json!({
                "type": "stack",
                "groupby": ["a"],
                "field": "sum_b",
                "sortby": ["-c"],
                "output": {"start": "sum_b_start", "end": "sum_b_end"}
            })
        );

        let impute = Transform::Impute {
            field: "sum_b".into(),
            groupby: vec!["c".into()],
            orderby: vec!["a".into()],
            method: ImputeMethod::Value,
            value: Value::Number(0.0),
        };
        assert_eq!(
            serde_json::to_value(&impute).unwrap(),
            json!({
                "type": "impute",
                "field": "sum_b",
                "groupby": ["c"],
                "orderby": ["a"],
                "method": "value",
                "value": 0.0
            })
        );
    }

    #[test]
    fn non_default_stack_offset_is_serialized() {
        let stack = Transform::Stack {
            groupby: vec![],
            field: "v".into(),
            sortby: vec![],
            output: StackOutput {
                start: "v_start".into(),
                end: "v_end".into(),
            },
            offset: Some(StackOffset::Normalize),
        };
        let v = serde_json::to_value(&stack).unwrap();
        assert_eq!(v["offset"], json!("normalize"));
    }
}
