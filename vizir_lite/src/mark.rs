// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Mark kinds and their primitive render types.

use core::fmt;

use serde::{Deserialize, Serialize};
use vizir_marks::MarkType;

/// The geometric primitive category selected by a model.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkKind {
    /// Bars (rects spanning a baseline).
    Bar,
    /// Thin rects marking a value.
    Tick,
    /// Symbols whose shape follows the shape channel.
    Point,
    /// Connected line path.
    Line,
    /// Filled area path.
    Area,
    /// Text labels.
    Text,
    /// Filled circle symbols.
    Circle,
    /// Filled square symbols.
    Square,
}

impl MarkKind {
    /// Returns the primitive render type emitted for this kind.
    pub const fn mark_type(self) -> MarkType {
        match self {
            Self::Bar | Self::Tick => MarkType::Rect,
            Self::Point | Self::Circle | Self::Square => MarkType::Symbol,
            Self::Line => MarkType::Line,
            Self::Area => MarkType::Area,
            Self::Text => MarkType::Text,
        }
    }

    /// Returns `true` for kinds drawn as a single path per group (`line`, `area`).
    pub const fn is_path(self) -> bool {
        matches!(self, Self::Line | Self::Area)
    }

    /// Returns `true` for kinds that support stacking (`bar`, `area`).
    pub const fn is_stackable(self) -> bool {
        matches!(self, Self::Bar | Self::Area)
    }

    /// Returns the kind name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Bar => "bar",
            Self::Tick => "tick",
            Self::Point => "point",
            Self::Line => "line",
            Self::Area => "area",
            Self::Text => "text",
            Self::Circle => "circle",
            Self::Square => "square",
        }
    }
}

impl fmt::Display for MarkKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primitive_types_follow_the_fixed_mapping() {
        let expected = [
            (MarkKind::Bar, MarkType::Rect),
            (MarkKind::Tick, MarkType::Rect),
            (MarkKind::Point, MarkType::Symbol),
            (MarkKind::Circle, MarkType::Symbol),
            (MarkKind::Square, MarkType::Symbol),
            (MarkKind::Line, MarkType::Line),
            (MarkKind::Area, MarkType::Area),
            (MarkKind::Text, MarkType::Text),
        ];
        for (kind, ty) in expected {
            assert_eq!(kind.mark_type(), ty, "{kind}");
        }
    }
}
