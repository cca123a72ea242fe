// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Mark nodes and their builder.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use serde::Serialize;

use crate::{PropertyMap, Transform};

/// The primitive render type of a [`MarkNode`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkType {
    /// Axis-aligned rectangle.
    Rect,
    /// Point symbol (circle, square, ...).
    Symbol,
    /// Connected line path.
    Line,
    /// Filled area path.
    Area,
    /// Text label.
    Text,
    /// Container for nested marks.
    Group,
}

impl MarkType {
    /// Returns the type name as written in the output specification.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Rect => "rect",
            Self::Symbol => "symbol",
            Self::Line => "line",
            Self::Area => "area",
            Self::Text => "text",
            Self::Group => "group",
        }
    }
}

/// The `from` clause of a mark: its data source and transforms.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct MarkFrom {
    /// Data table name. Absent when the data is supplied by an enclosing facet.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
    /// Transforms applied in order.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub transform: Vec<Transform>,
}

/// Property sets of a mark.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Properties {
    /// Properties evaluated on every update.
    pub update: PropertyMap,
}

/// One node of the output mark tree.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MarkNode {
    /// Optional mark name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Primitive render type.
    #[serde(rename = "type")]
    pub mark_type: MarkType,
    /// Data source and transforms.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<MarkFrom>,
    /// Visual properties.
    pub properties: Properties,
    /// Nested marks (for [`MarkType::Group`]).
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub marks: Vec<Self>,
}

impl MarkNode {
    /// Start building a node of the given type.
    pub fn builder(mark_type: MarkType) -> MarkNodeBuilder {
        MarkNodeBuilder {
            node: Self {
                name: None,
                mark_type,
                from: None,
                properties: Properties::default(),
                marks: Vec::new(),
            },
        }
    }

    /// Returns the `update` property map.
    pub fn update(&self) -> &PropertyMap {
        &self.properties.update
    }

    /// Returns the data table name, if attached.
    pub fn data(&self) -> Option<&str> {
        self.from.as_ref()?.data.as_deref()
    }

    /// Returns the attached transforms (empty when there is no `from`).
    pub fn transforms(&self) -> &[Transform] {
        match &self.from {
            Some(from) => from.transform.as_slice(),
            None => &[],
        }
    }
}

/// A builder for [`MarkNode`].
///
/// `from` is only materialized once data or a transform is attached.
#[derive(Debug)]
#[must_use]
pub struct MarkNodeBuilder {
    node: MarkNode,
}

impl MarkNodeBuilder {
    /// Set the mark name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.node.name = Some(name.into());
        self
    }

    /// Set `from.data`.
    pub fn data(mut self, data: impl Into<String>) -> Self {
        self.node.from.get_or_insert_with(MarkFrom::default).data = Some(data.into());
        self
    }

    /// Append a transform to `from.transform`.
    pub fn transform(mut self, transform: Transform) -> Self {
        self.node
            .from
            .get_or_insert_with(MarkFrom::default)
            .transform
            .push(transform);
        self
    }

    /// Set the `update` property map.
    pub fn update(mut self, update: PropertyMap) -> Self {
        self.node.properties.update = update;
        self
    }

    /// Append a nested mark.
    pub fn child(mut self, mark: MarkNode) -> Self {
        self.node.marks.push(mark);
        self
    }

    /// Finish building.
    pub fn build(self) -> MarkNode {
        self.node
    }
}
