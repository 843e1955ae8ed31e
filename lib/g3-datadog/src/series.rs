/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use std::io::Write;

use log::debug;
use serde_json::{Map, Number, Value};

use crate::types::{MetricPoint, MetricRecord};

fn f64_to_json(name: &str, v: f64) -> Value {
    match Number::from_f64(v) {
        Some(n) => Value::Number(n),
        None => {
            debug!("non-finite value {v} in metric {name}");
            Value::Null
        }
    }
}

fn point_to_json(name: &str, point: &MetricPoint) -> Value {
    let value = match point.value {
        Some(v) => f64_to_json(name, v),
        None => Value::Null,
    };
    Value::Array(vec![f64_to_json(name, point.timestamp), value])
}

pub fn record_to_json(record: &MetricRecord) -> Value {
    let mut map = Map::with_capacity(6);
    map.insert("metric".to_string(), Value::String(record.name.clone()));
    if let Some(kind) = record.kind {
        map.insert("type".to_string(), Value::String(kind.to_string()));
    }
    if let Some(interval) = record.interval {
        map.insert("interval".to_string(), Value::Number(interval.into()));
    }
    let points = record
        .points
        .iter()
        .map(|p| point_to_json(&record.name, p))
        .collect();
    map.insert("points".to_string(), Value::Array(points));
    let tags = record
        .tags
        .iter()
        .map(|t| Value::String(t.clone()))
        .collect();
    map.insert("tags".to_string(), Value::Array(tags));
    if let Some(host) = &record.host {
        map.insert("host".to_string(), Value::String(host.to_string()));
    }
    Value::Object(map)
}

/// Write the records as a series api request body.
pub fn fill_body(records: &[MetricRecord], body_buf: &mut Vec<u8>) {
    body_buf.extend_from_slice(b"{\"series\":[");

    let mut iter = records.iter();
    if let Some(record) = iter.next() {
        let first_v = record_to_json(record);
        let _ = write!(body_buf, "{first_v}");

        for record in iter {
            body_buf.push(b',');
            let v = record_to_json(record);
            let _ = write!(body_buf, "{v}");
        }
    }

    body_buf.extend_from_slice(b"]}");
}
