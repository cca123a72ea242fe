// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Mark assembly: wraps encoder output into mark nodes.

extern crate alloc;

use alloc::format;
use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;

use log::{debug, trace};
use vizir_marks::{
    Binding, GroupDim, MarkNode, MarkNodeBuilder, MarkType, Property, PropertyMap, SortKey,
    Transform,
};

use crate::detail::detail_fields;
use crate::stack::{impute_transform, stack_transform};
use crate::{
    Channel, Error, FieldOptions, MarkEncoder, MarkKind, Model, Orient, Result, TextMark, encoder,
};

/// Compiles `model` into mark nodes using the built-in encoder for its mark kind.
///
/// Path marks (`line`, `area`) produce one node, wrapped in a facet group when detail fields
/// split the data into several paths. Other marks produce the main node, preceded by a
/// background for colored text and followed by a label overlay when the encoder provides one.
pub fn compile_marks(model: &dyn Model) -> Result<Vec<MarkNode>> {
    compile_marks_with(model, encoder(model.mark()))
}

/// Like [`compile_marks`], with a caller-supplied encoder for the main (and label) properties.
pub fn compile_marks_with(model: &dyn Model, encoder: &dyn MarkEncoder) -> Result<Vec<MarkNode>> {
    let kind = model.mark();
    debug!(
        "compiling {kind} marks (faceted: {}, stacked: {})",
        model.is_faceted(),
        model.stack().is_some()
    );
    if kind.is_path() {
        path_marks(model, encoder)
    } else {
        item_marks(model, encoder)
    }
}

/// `{name}-{suffix}` for named models.
fn node_name(model: &dyn Model, suffix: &str) -> Option<String> {
    model.name().map(|name| format!("{name}-{suffix}"))
}

fn named(builder: MarkNodeBuilder, name: Option<String>) -> MarkNodeBuilder {
    match name {
        Some(name) => builder.name(name),
        None => builder,
    }
}

/// Faceted models read data from the enclosing facet group.
fn with_data(model: &dyn Model, builder: MarkNodeBuilder) -> MarkNodeBuilder {
    if model.is_faceted() {
        builder
    } else {
        builder.data(model.data_table())
    }
}

fn path_marks(model: &dyn Model, encoder: &dyn MarkEncoder) -> Result<Vec<MarkNode>> {
    let kind = model.mark();
    let details = detail_fields(model)?;
    let path = named(
        MarkNode::builder(kind.mark_type()),
        node_name(model, "marks"),
    )
    .transform(Transform::Sort {
        by: sort_key(model)?,
    })
    .update(encoder.properties(model)?);

    if details.is_empty() {
        trace!("{kind} has no detail fields; emitting a single path");
        return Ok(vec![with_data(model, path).build()]);
    }

    trace!("faceting {kind} paths by {details:?}");
    let facet_name = match model.name() {
        Some(name) => format!("{name}-{kind}-facet"),
        None => format!("{kind}-facet"),
    };
    let mut group = with_data(model, MarkNode::builder(MarkType::Group).name(facet_name));
    if kind == MarkKind::Area
        && let Some(stack) = model.stack()
    {
        group = group
            .transform(impute_transform(model, stack)?)
            .transform(stack_transform(model, stack)?);
    }
    let group = group
        .transform(Transform::Facet {
            groupby: details.into_vec(),
        })
        .update(
            PropertyMap::new()
                .with(Property::Width, Binding::group(GroupDim::Width))
                .with(Property::Height, Binding::group(GroupDim::Height)),
        )
        .child(path.build());
    Ok(vec![group.build()])
}

/// Paths are drawn in order of the position channel along the orientation.
fn sort_key(model: &dyn Model) -> Result<SortKey> {
    let config = &model.config().mark;
    if model.mark() == MarkKind::Line
        && let Some(by) = &config.sort_line_by
    {
        return Ok(SortKey::parse(by));
    }
    let channel = if config.orient == Some(Orient::Horizontal) {
        Channel::Y
    } else {
        Channel::X
    };
    let field = if model.has(channel) {
        model
            .field(channel, FieldOptions::default())
            .ok_or(Error::MissingField(channel))?
    } else {
        String::from(channel.as_str())
    };
    Ok(SortKey::desc(field))
}

fn item_marks(model: &dyn Model, encoder: &dyn MarkEncoder) -> Result<Vec<MarkNode>> {
    let kind = model.mark();
    let mut marks = Vec::with_capacity(3);

    if kind == MarkKind::Text && model.has(Channel::Color) {
        let background = named(
            MarkNode::builder(MarkType::Rect),
            node_name(model, "background"),
        )
        .update(TextMark::background(model)?);
        marks.push(with_data(model, background).build());
    }

    let main = named(
        MarkNode::builder(kind.mark_type()),
        node_name(model, "marks"),
    )
    .update(encoder.properties(model)?);
    let mut main = with_data(model, main);
    if let Some(stack) = model.stack() {
        trace!("stacking {kind} on {}", stack.field_channel);
        main = main.transform(stack_transform(model, stack)?);
    }
    marks.push(main.build());

    if model.has(Channel::Label)
        && let Some(labels) = encoder.labels(model)?
        && !labels.is_empty()
    {
        let label = named(MarkNode::builder(MarkType::Text), node_name(model, "label"))
            .update(labels);
        marks.push(with_data(model, label).build());
    }

    Ok(marks)
}
