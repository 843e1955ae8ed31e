/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use crate::types::MetricRecord;

const TAG_KEY_VERSION: &str = "version";
const TAG_KEY_COMMAND: &str = "command";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BuildInfo {
    pub command: String,
    pub version: String,
}

impl BuildInfo {
    pub fn new<C: Into<String>, V: Into<String>>(command: C, version: V) -> Self {
        BuildInfo {
            command: command.into(),
            version: version.into(),
        }
    }
}

/// Get the [`BuildInfo`] of the calling crate.
#[macro_export]
macro_rules! build_info {
    () => {
        $crate::BuildInfo::new(env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
    };
}

/// Build the heartbeat metric `otel.datadog_exporter.<namespace>.running`.
pub fn default_metrics(
    namespace: &str,
    host: &str,
    timestamp_nanos: u64,
    build_info: &BuildInfo,
) -> Vec<MetricRecord> {
    let tags = vec![
        format!("{TAG_KEY_VERSION}:{}", build_info.version),
        format!("{TAG_KEY_COMMAND}:{}", build_info.command),
    ];
    let name = format!("otel.datadog_exporter.{namespace}.running");
    vec![MetricRecord::new_gauge(name, timestamp_nanos, 1.0, tags).with_host(host)]
}
