// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Mark compilation demos for `vizir_lite`.

use log::info;
use serde_json::json;
use vizir_lite::{UnitModel, UnitSpec, compile_marks};

fn samples() -> Vec<(&'static str, serde_json::Value)> {
    vec![
        (
            "bar: ordinal x, measure y",
            json!({
                "mark": "bar",
                "encoding": {
                    "x": {"field": "month", "type": "ordinal"},
                    "y": {"field": "rainfall", "type": "quantitative"}
                }
            }),
        ),
        (
            "stacked bar",
            json!({
                "name": "sales",
                "mark": "bar",
                "encoding": {
                    "x": {"field": "quarter", "type": "ordinal"},
                    "y": {"field": "revenue", "type": "quantitative", "aggregate": "sum"},
                    "color": {"field": "region", "type": "nominal"}
                }
            }),
        ),
        (
            "multi-series line",
            json!({
                "mark": "line",
                "encoding": {
                    "x": {"field": "date", "type": "temporal"},
                    "y": {"field": "price", "type": "quantitative"},
                    "color": {"field": "symbol", "type": "nominal"}
                },
                "config": {"mark": {"interpolate": "monotone"}}
            }),
        ),
        (
            "streamgraph",
            json!({
                "mark": "area",
                "encoding": {
                    "x": {"field": "date", "type": "temporal", "timeUnit": "yearmonth"},
                    "y": {"field": "count", "type": "quantitative", "aggregate": "sum"},
                    "color": {"field": "series", "type": "nominal"}
                },
                "config": {"mark": {"stacked": "center"}}
            }),
        ),
        (
            "text table",
            json!({
                "mark": "text",
                "encoding": {
                    "row": {"field": "origin", "type": "ordinal"},
                    "color": {"field": "cylinders", "type": "ordinal"},
                    "text": {"field": "horsepower", "type": "quantitative", "aggregate": "mean"}
                },
                "config": {"mark": {"format": ".1f"}}
            }),
        ),
        (
            "binned histogram",
            json!({
                "mark": "bar",
                "encoding": {
                    "x": {"field": "weight", "type": "quantitative", "bin": true},
                    "y": {"type": "quantitative", "aggregate": "count"}
                }
            }),
        ),
        (
            "scatter with fixed circles",
            json!({
                "mark": "circle",
                "encoding": {
                    "x": {"field": "height", "type": "quantitative"},
                    "y": {"field": "weight", "type": "quantitative"},
                    "shape": {"field": "sex", "type": "nominal"},
                    "size": {"field": "age", "type": "quantitative"}
                }
            }),
        ),
    ]
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    for (title, spec) in samples() {
        let spec: UnitSpec = serde_json::from_value(spec).expect("sample spec");
        let model = UnitModel::from_spec(spec).expect("sample model");
        let marks = compile_marks(&model).expect("compile sample");
        info!("{title}: {} top-level mark(s)", marks.len());
        println!("// {title}");
        println!(
            "{}",
            serde_json::to_string_pretty(&marks).expect("serialize marks")
        );
    }
}
