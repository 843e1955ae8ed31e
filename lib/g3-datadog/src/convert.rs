/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use std::sync::Arc;

use crate::types::{MetricKind, MetricPoint, MetricRecord};

/// Copy `src` with a new name, dividing every present value by `divisor`.
///
/// The copy is always a gauge with an interval of 1 second. If the divisor is
/// 0 or 1, or there is no point at all, the copy shares the points of `src`.
/// `tags` and `host` are always shared.
pub fn copy_and_rescale<N: Into<String>>(
    src: &MetricRecord,
    name: N,
    divisor: f64,
) -> MetricRecord {
    let points = if divisor == 0.0 || divisor == 1.0 || src.points.is_empty() {
        Arc::clone(&src.points)
    } else {
        src.points
            .iter()
            .map(|p| p.rescale(divisor))
            .collect::<Arc<[MetricPoint]>>()
    };

    MetricRecord {
        name: name.into(),
        kind: Some(MetricKind::Gauge),
        points,
        tags: Arc::clone(&src.tags),
        host: src.host.clone(),
        interval: Some(1),
    }
}
