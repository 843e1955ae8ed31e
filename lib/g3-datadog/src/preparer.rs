/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use std::sync::Arc;

use log::warn;

use crate::config::DatadogMetricsConfig;
use crate::default::{BuildInfo, default_metrics};
use crate::prepare::prepare_system_metrics;
use crate::types::MetricRecord;

/// Prepare metric batches for the datadog series api as set in the config.
pub struct MetricsPreparer {
    config: Arc<DatadogMetricsConfig>,
    build_info: BuildInfo,
}

impl MetricsPreparer {
    pub fn new(config: Arc<DatadogMetricsConfig>, build_info: BuildInfo) -> Self {
        if config.emit_running_metric && config.hostname.is_none() {
            warn!(
                "no hostname set for datadog metrics namespace {}, the running metric will not be sent",
                config.namespace()
            );
        }
        MetricsPreparer { config, build_info }
    }

    pub fn prepare(&self, batch: Vec<MetricRecord>, timestamp_nanos: u64) -> Vec<MetricRecord> {
        let mut series = if self.config.translate_system_metrics {
            prepare_system_metrics(batch)
        } else {
            batch
        };

        if self.config.emit_running_metric {
            if let Some(host) = self.config.hostname() {
                series.extend(default_metrics(
                    self.config.namespace(),
                    host,
                    timestamp_nanos,
                    &self.build_info,
                ));
            }
        }
        series
    }
}
