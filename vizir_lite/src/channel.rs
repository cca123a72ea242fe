// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Encoding channels.

use core::fmt;

use serde::{Deserialize, Serialize};

/// An abstract encoding slot a data field can be bound to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    /// Horizontal position.
    X,
    /// Vertical position.
    Y,
    /// Fill or stroke color.
    Color,
    /// Symbol area, bar thickness or font size.
    Size,
    /// Symbol shape.
    Shape,
    /// Extra grouping level without a visual property of its own.
    Detail,
    /// Text content.
    Text,
    /// Row facet.
    Row,
    /// Column facet.
    Column,
    /// Label overlay.
    Label,
}

impl Channel {
    /// Every channel, in declaration order.
    pub const ALL: [Self; 10] = [
        Self::X,
        Self::Y,
        Self::Color,
        Self::Size,
        Self::Shape,
        Self::Detail,
        Self::Text,
        Self::Row,
        Self::Column,
        Self::Label,
    ];

    /// Returns the channel name, which is also the name of its scale.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::X => "x",
            Self::Y => "y",
            Self::Color => "color",
            Self::Size => "size",
            Self::Shape => "shape",
            Self::Detail => "detail",
            Self::Text => "text",
            Self::Row => "row",
            Self::Column => "column",
            Self::Label => "label",
        }
    }

    /// Returns the other position channel for `X`/`Y`.
    pub const fn opposite(self) -> Option<Self> {
        match self {
            Self::X => Some(Self::Y),
            Self::Y => Some(Self::X),
            _ => None,
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
