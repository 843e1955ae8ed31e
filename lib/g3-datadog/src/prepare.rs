/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use log::trace;

use crate::system::derive_system_metrics;
use crate::types::MetricRecord;

/// Namespace used for the OpenTelemetry host metrics.
pub const OTEL_NAMESPACE_PREFIX: &str = "otel.";

fn is_system_metric(name: &str) -> bool {
    name.starts_with("system.") || name.starts_with("process.")
}

/// Move the host and process metrics into the `otel.` namespace, and append
/// the datadog system metrics derived from them.
///
/// The originals keep their position in the batch. The derived metrics are
/// appended after all of them, in the order of their source metrics, and
/// are never translated again.
pub fn prepare_system_metrics(batch: Vec<MetricRecord>) -> Vec<MetricRecord> {
    let mut originals = Vec::with_capacity(batch.len());
    let mut derived = Vec::new();

    for mut m in batch {
        if is_system_metric(&m.name) {
            let series = derive_system_metrics(&m);
            trace!("derived {} datadog metrics from {}", series.len(), m.name);
            derived.push(series);
            m.name.insert_str(0, OTEL_NAMESPACE_PREFIX);
        }
        originals.push(m);
    }

    originals.extend(derived.into_iter().flatten());
    originals
}
