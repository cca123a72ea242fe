// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Declarative mark specification IR.
//!
//! This crate models the output side of mark compilation: a tree of [`MarkNode`]s whose
//! visual properties are described by [`Binding`]s rather than computed values. A downstream
//! Vega-style renderer is responsible for resolving scales, running the attached
//! [`Transform`]s and drawing the result.
//!
//! The types here:
//! - carry no data and perform no computation,
//! - keep property maps ordered so serialized output is deterministic, and
//! - serialize (via `serde`) to the JSON shapes a Vega 2 runtime expects.

#![no_std]

extern crate alloc;

mod node;
mod property;
mod transform;
mod value;

pub use node::{MarkFrom, MarkNode, MarkNodeBuilder, MarkType, Properties};
pub use property::{Binding, GroupDim, Property, PropertyMap};
pub use transform::{ImputeMethod, SortKey, SortOrder, StackOffset, StackOutput, Transform};
pub use value::Value;
