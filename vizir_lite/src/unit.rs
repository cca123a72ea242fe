// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A concrete single-view model.

extern crate alloc;

use alloc::string::String;

use hashbrown::HashMap;
use serde::Deserialize;

use crate::{Channel, Config, Error, FieldDef, FieldOptions, MarkKind, Model, Result, StackInfo};

/// Per-channel field definitions of a [`UnitSpec`].
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Encoding {
    /// Horizontal position.
    pub x: Option<FieldDef>,
    /// Vertical position.
    pub y: Option<FieldDef>,
    /// Color.
    pub color: Option<FieldDef>,
    /// Size.
    pub size: Option<FieldDef>,
    /// Shape.
    pub shape: Option<FieldDef>,
    /// Detail grouping.
    pub detail: Option<FieldDef>,
    /// Text.
    pub text: Option<FieldDef>,
    /// Row facet.
    pub row: Option<FieldDef>,
    /// Column facet.
    pub column: Option<FieldDef>,
    /// Label overlay.
    pub label: Option<FieldDef>,
}

impl Encoding {
    fn into_channels(self) -> impl Iterator<Item = (Channel, FieldDef)> {
        [
            (Channel::X, self.x),
            (Channel::Y, self.y),
            (Channel::Color, self.color),
            (Channel::Size, self.size),
            (Channel::Shape, self.shape),
            (Channel::Detail, self.detail),
            (Channel::Text, self.text),
            (Channel::Row, self.row),
            (Channel::Column, self.column),
            (Channel::Label, self.label),
        ]
        .into_iter()
        .filter_map(|(channel, def)| def.map(|def| (channel, def)))
    }
}

/// A deserializable single-view spec.
///
/// ```json
/// {"mark": "bar", "encoding": {"x": {"field": "a", "type": "ordinal"}}}
/// ```
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct UnitSpec {
    /// Optional name, used to derive output node names.
    #[serde(default)]
    pub name: Option<String>,
    /// Mark kind.
    pub mark: MarkKind,
    /// Channel bindings.
    #[serde(default)]
    pub encoding: Encoding,
    /// Style configuration.
    #[serde(default)]
    pub config: Config,
    /// Data table name; inferred when absent.
    #[serde(default)]
    pub data: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum StackChoice {
    Infer,
    Explicit(StackInfo),
    Disabled,
}

/// A resolved single-view model.
///
/// Every channel has a field definition: unbound channels get one carrying the configured band
/// width and the literal fallback (mark color, symbol size and shape, placeholder text).
#[derive(Clone, Debug, PartialEq)]
pub struct UnitModel {
    name: Option<String>,
    mark: MarkKind,
    /// Holds an entry for every channel in [`Channel::ALL`].
    encoding: HashMap<Channel, FieldDef>,
    stack: Option<StackInfo>,
    config: Config,
    data_table: String,
}

impl UnitModel {
    /// Starts building a model for `mark`.
    pub fn builder(mark: MarkKind) -> UnitModelBuilder {
        UnitModelBuilder {
            name: None,
            mark,
            encoding: HashMap::new(),
            stack: StackChoice::Infer,
            config: Config::default(),
            data_table: None,
        }
    }

    /// Builds a model from a deserialized spec.
    pub fn from_spec(spec: UnitSpec) -> Result<Self> {
        let mut builder = Self::builder(spec.mark).config(spec.config);
        builder.name = spec.name;
        builder.data_table = spec.data;
        builder.encoding.extend(spec.encoding.into_channels());
        builder.build()
    }
}

/// Builder for [`UnitModel`].
#[derive(Clone, Debug)]
#[must_use]
pub struct UnitModelBuilder {
    name: Option<String>,
    mark: MarkKind,
    encoding: HashMap<Channel, FieldDef>,
    stack: StackChoice,
    config: Config,
    data_table: Option<String>,
}

impl UnitModelBuilder {
    /// Sets the model name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Binds `channel`.
    pub fn encode(mut self, channel: Channel, def: FieldDef) -> Self {
        self.encoding.insert(channel, def);
        self
    }

    /// Sets the configuration.
    pub fn config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    /// Sets the data table name.
    pub fn data_table(mut self, name: impl Into<String>) -> Self {
        self.data_table = Some(name.into());
        self
    }

    /// Stacks explicitly instead of inferring from the encoding.
    pub fn stack(mut self, stack: StackInfo) -> Self {
        self.stack = StackChoice::Explicit(stack);
        self
    }

    /// Disables stacking.
    pub fn no_stack(mut self) -> Self {
        self.stack = StackChoice::Disabled;
        self
    }

    /// Resolves defaults and stacking.
    ///
    /// Returns [`Error::UnsupportedStack`] if an explicit stack was given for a mark kind that
    /// cannot stack.
    pub fn build(self) -> Result<UnitModel> {
        let Self {
            name,
            mark,
            mut encoding,
            stack,
            config,
            data_table,
        } = self;

        for channel in Channel::ALL {
            let def = encoding.entry(channel).or_default();
            if def.scale.band_width.is_none() {
                def.scale.band_width = Some(config.scale.band_width);
            }
            if def.value.is_none() && !def.is_bound() {
                def.value = default_value(&config, channel);
            }
        }

        let stack = match stack {
            StackChoice::Explicit(_) if !mark.is_stackable() => {
                return Err(Error::UnsupportedStack(mark));
            }
            StackChoice::Explicit(stack) => Some(stack),
            StackChoice::Infer => infer_stack(mark, &encoding, &config),
            StackChoice::Disabled => None,
        };

        let data_table = data_table.unwrap_or_else(|| {
            let summary = encoding.values().any(FieldDef::is_aggregated);
            String::from(if summary { "summary" } else { "source" })
        });

        Ok(UnitModel {
            name,
            mark,
            encoding,
            stack,
            config,
            data_table,
        })
    }
}

fn default_value(config: &Config, channel: Channel) -> Option<vizir_marks::Value> {
    let mark = &config.mark;
    match channel {
        Channel::Color => Some(mark.color.as_str().into()),
        Channel::Size => Some(mark.size.into()),
        Channel::Shape => Some(mark.shape.as_str().into()),
        Channel::Text => Some(mark.text.as_str().into()),
        _ => None,
    }
}

/// Stacks when exactly one position channel is an aggregated measure, the other is a dimension
/// or unbound, and a series channel is bound as a dimension.
fn infer_stack(
    mark: MarkKind,
    encoding: &HashMap<Channel, FieldDef>,
    config: &Config,
) -> Option<StackInfo> {
    if !mark.is_stackable() {
        return None;
    }
    let offset = config.mark.stacked.offset()?;
    let def = |channel: Channel| &encoding[&channel];
    let stack_channel = [Channel::Color, Channel::Detail]
        .into_iter()
        .find(|&channel| def(channel).is_dimension())?;
    let stacks_on = |field: Channel, other: Channel| {
        let (field, other) = (def(field), def(other));
        field.is_measure() && field.is_aggregated() && (other.is_dimension() || !other.is_bound())
    };
    let field_channel = if stacks_on(Channel::X, Channel::Y) {
        Channel::X
    } else if stacks_on(Channel::Y, Channel::X) {
        Channel::Y
    } else {
        return None;
    };
    Some(StackInfo::new(field_channel, stack_channel).with_offset(offset))
}

impl Model for UnitModel {
    fn mark(&self) -> MarkKind {
        self.mark
    }

    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn has(&self, channel: Channel) -> bool {
        self.field_def(channel).is_bound()
    }

    fn field_def(&self, channel: Channel) -> &FieldDef {
        &self.encoding[&channel]
    }

    fn field(&self, channel: Channel, opts: FieldOptions) -> Option<String> {
        let def = self.field_def(channel);
        def.is_bound().then(|| def.field_name(opts))
    }

    fn scale(&self, channel: Channel) -> Option<&str> {
        self.has(channel).then_some(channel.as_str())
    }

    fn is_measure(&self, channel: Channel) -> bool {
        self.field_def(channel).is_measure()
    }

    fn is_dimension(&self, channel: Channel) -> bool {
        self.field_def(channel).is_dimension()
    }

    fn is_ordinal_scale(&self, channel: Channel) -> bool {
        self.has(channel) && self.field_def(channel).scale_type().is_ordinal()
    }

    fn stack(&self) -> Option<&StackInfo> {
        self.stack.as_ref()
    }

    fn config(&self) -> &Config {
        &self.config
    }

    fn data_table(&self) -> &str {
        &self.data_table
    }

    fn number_format(&self, channel: Channel) -> &str {
        self.field_def(channel)
            .format
            .as_deref()
            .unwrap_or(&self.config.number_format)
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use serde_json::json;
    use vizir_marks::{StackOffset, Value};

    use super::*;
    use crate::config::StackMode;
    use crate::AggregateOp;

    fn sum(field: &str) -> FieldDef {
        FieldDef::quantitative(field).with_aggregate(AggregateOp::Sum)
    }

    #[test]
    fn unbound_channels_carry_config_fallbacks() {
        let model = UnitModel::builder(MarkKind::Point).build().unwrap();
        assert!(!model.has(Channel::Color));
        assert_eq!(
            model.field_def(Channel::Color).value,
            Some(Value::from("#4682b4"))
        );
        assert_eq!(model.field_def(Channel::Size).value, Some(Value::from(30.0)));
        assert_eq!(model.field_def(Channel::Shape).value, Some(Value::from("circle")));
        assert_eq!(model.band_width(Channel::X), 21.0);
        assert_eq!(model.field(Channel::X, FieldOptions::default()), None);
        assert_eq!(model.scale(Channel::X), None);
        assert_eq!(model.data_table(), "source");
    }

    #[test]
    fn every_channel_gets_a_definition() {
        let model = UnitModel::builder(MarkKind::Text)
            .encode(Channel::Text, FieldDef::nominal("t"))
            .build()
            .unwrap();
        for channel in Channel::ALL {
            assert_eq!(model.field_def(channel).scale.band_width, Some(21.0));
        }
        assert_eq!(model.field_def(Channel::Detail).value, None);
    }

    #[test]
    fn scale_names_follow_channels() {
        let model = UnitModel::builder(MarkKind::Bar)
            .encode(Channel::X, FieldDef::ordinal("a"))
            .encode(Channel::Y, FieldDef::count())
            .build()
            .unwrap();
        assert_eq!(model.scale(Channel::X), Some("x"));
        assert!(model.is_ordinal_scale(Channel::X));
        assert!(!model.is_ordinal_scale(Channel::Y));
        assert_eq!(
            model.field(Channel::Y, FieldOptions::default()).as_deref(),
            Some("count")
        );
        assert_eq!(model.data_table(), "summary");
    }

    #[test]
    fn stacking_is_inferred_for_aggregated_measures_with_a_series() {
        let model = UnitModel::builder(MarkKind::Bar)
            .encode(Channel::X, FieldDef::ordinal("a"))
            .encode(Channel::Y, sum("b"))
            .encode(Channel::Color, FieldDef::nominal("c"))
            .build()
            .unwrap();
        let stack = model.stack().unwrap();
        assert_eq!(stack.field_channel, Channel::Y);
        assert_eq!(stack.groupby_channel, Channel::X);
        assert_eq!(stack.stack_channel, Channel::Color);
        assert_eq!(stack.offset, StackOffset::Zero);
    }

    #[test]
    fn stacking_is_not_inferred_without_a_series_or_for_lines() {
        let bare = UnitModel::builder(MarkKind::Bar)
            .encode(Channel::X, FieldDef::ordinal("a"))
            .encode(Channel::Y, sum("b"))
            .build()
            .unwrap();
        assert!(bare.stack().is_none());

        let line = UnitModel::builder(MarkKind::Line)
            .encode(Channel::X, FieldDef::ordinal("a"))
            .encode(Channel::Y, sum("b"))
            .encode(Channel::Color, FieldDef::nominal("c"))
            .build()
            .unwrap();
        assert!(line.stack().is_none());

        let mut config = Config::default();
        config.mark.stacked = StackMode::None;
        let disabled = UnitModel::builder(MarkKind::Bar)
            .encode(Channel::X, FieldDef::ordinal("a"))
            .encode(Channel::Y, sum("b"))
            .encode(Channel::Color, FieldDef::nominal("c"))
            .config(config)
            .build()
            .unwrap();
        assert!(disabled.stack().is_none());
    }

    #[test]
    fn explicit_stack_on_a_path_mark_is_rejected() {
        let err = UnitModel::builder(MarkKind::Line)
            .stack(StackInfo::new(Channel::Y, Channel::Color))
            .build()
            .unwrap_err();
        assert_eq!(err, Error::UnsupportedStack(MarkKind::Line));
    }

    #[test]
    fn number_format_prefers_the_field() {
        let model = UnitModel::builder(MarkKind::Text)
            .encode(Channel::Text, FieldDef::quantitative("a").with_format(".2f"))
            .encode(Channel::Label, FieldDef::quantitative("b"))
            .build()
            .unwrap();
        assert_eq!(model.number_format(Channel::Text), ".2f");
        assert_eq!(model.number_format(Channel::Label), "s");
    }

    #[test]
    fn specs_deserialize_into_models() {
        let spec: UnitSpec = serde_json::from_value(json!({
            "name": "sales",
            "mark": "bar",
            "encoding": {
                "x": {"field": "month", "type": "ordinal"},
                "y": {"field": "amount", "type": "quantitative", "aggregate": "sum"},
                "row": {"field": "region", "type": "nominal"}
            },
            "config": {"scale": {"bandWidth": 30.0}}
        }))
        .unwrap();
        let model = UnitModel::from_spec(spec).unwrap();
        assert_eq!(model.name(), Some("sales"));
        assert!(model.is_faceted());
        assert_eq!(model.band_width(Channel::X), 30.0);
        assert_eq!(
            model.field(Channel::Y, FieldOptions::default()).as_deref(),
            Some("sum_amount")
        );
    }
}
