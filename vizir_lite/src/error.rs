// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error types.

extern crate alloc;

use alloc::string::String;

use thiserror::Error;

use crate::{Channel, MarkKind};

/// Result type alias using [`Error`].
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Errors raised while building a model or compiling its marks.
///
/// All of these are precondition violations; compilation never returns a partial mark tree.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A bound channel has no resolved scale.
    #[error("channel `{0}` is bound but has no resolved scale")]
    MissingScale(Channel),

    /// A bound channel has no field name.
    #[error("channel `{0}` is bound but has no field name")]
    MissingField(Channel),

    /// An unbound channel has no literal fallback value.
    #[error("channel `{0}` is unbound and has no fallback value")]
    MissingValue(Channel),

    /// An orientation other than `vertical` or `horizontal`.
    #[error("invalid orientation `{0}` (expected `vertical` or `horizontal`)")]
    InvalidOrient(String),

    /// Stacking was requested for a mark kind that cannot stack.
    #[error("mark `{0}` does not support stacking")]
    UnsupportedStack(MarkKind),
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::string::ToString;

    use super::*;

    #[test]
    fn error_display() {
        assert_eq!(
            Error::MissingScale(Channel::Color).to_string(),
            "channel `color` is bound but has no resolved scale"
        );
        assert_eq!(
            Error::UnsupportedStack(MarkKind::Line).to_string(),
            "mark `line` does not support stacking"
        );
        assert_eq!(
            Error::InvalidOrient("diagonal".into()).to_string(),
            "invalid orientation `diagonal` (expected `vertical` or `horizontal`)"
        );
    }
}
