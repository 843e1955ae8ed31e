/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use crate::convert::copy_and_rescale;
use crate::types::MetricRecord;

/// Number of bytes in a mebibyte.
const DIV_MEBIBYTES: f64 = 1024.0 * 1024.0;
/// Divisor to convert fractions to percentages.
const DIV_PERCENTAGE: f64 = 0.01;

struct DerivedMetric {
    name: &'static str,
    divisor: f64,
}

struct TagRule {
    tags: &'static [&'static str],
    derived: DerivedMetric,
}

/// Translation rules for a single source metric.
///
/// Every unconditional rule emits one metric, then each tag of the source
/// record, in order, emits one metric for the first tag rule containing it.
struct SystemMetricRules {
    source: &'static str,
    always: &'static [DerivedMetric],
    by_tag: &'static [TagRule],
}

const fn derived(name: &'static str, divisor: f64) -> DerivedMetric {
    DerivedMetric { name, divisor }
}

const fn tag_rule(tags: &'static [&'static str], name: &'static str, divisor: f64) -> TagRule {
    TagRule {
        tags,
        derived: derived(name, divisor),
    }
}

static SYSTEM_METRIC_RULES: &[SystemMetricRules] = &[
    SystemMetricRules {
        source: "system.cpu.load_average.1m",
        always: &[derived("system.load.1", 1.0)],
        by_tag: &[],
    },
    SystemMetricRules {
        source: "system.cpu.load_average.5m",
        always: &[derived("system.load.5", 1.0)],
        by_tag: &[],
    },
    SystemMetricRules {
        source: "system.cpu.load_average.15m",
        always: &[derived("system.load.15", 1.0)],
        by_tag: &[],
    },
    SystemMetricRules {
        source: "system.cpu.utilization",
        always: &[],
        by_tag: &[
            tag_rule(&["state:idle"], "system.cpu.idle", DIV_PERCENTAGE),
            tag_rule(&["state:user"], "system.cpu.user", DIV_PERCENTAGE),
            tag_rule(&["state:system"], "system.cpu.system", DIV_PERCENTAGE),
            tag_rule(&["state:wait"], "system.cpu.iowait", DIV_PERCENTAGE),
            tag_rule(&["state:steal"], "system.cpu.stolen", DIV_PERCENTAGE),
        ],
    },
    SystemMetricRules {
        source: "system.memory.usage",
        always: &[derived("system.mem.total", DIV_MEBIBYTES)],
        by_tag: &[tag_rule(
            &["state:free", "state:cached", "state:buffered"],
            "system.mem.usable",
            DIV_MEBIBYTES,
        )],
    },
    SystemMetricRules {
        source: "system.network.io",
        always: &[],
        by_tag: &[
            tag_rule(&["direction:receive"], "system.net.bytes_rcvd", 1.0),
            tag_rule(&["direction:transmit"], "system.net.bytes_sent", 1.0),
        ],
    },
    SystemMetricRules {
        source: "system.paging.usage",
        always: &[],
        by_tag: &[
            tag_rule(&["state:free"], "system.swap.free", DIV_MEBIBYTES),
            tag_rule(&["state:used"], "system.swap.used", DIV_MEBIBYTES),
        ],
    },
    SystemMetricRules {
        source: "system.filesystem.utilization",
        always: &[derived("system.disk.in_use", 1.0)],
        by_tag: &[],
    },
];

impl SystemMetricRules {
    fn find(name: &str) -> Option<&'static SystemMetricRules> {
        SYSTEM_METRIC_RULES.iter().find(|r| r.source == name)
    }

    fn derive(&self, m: &MetricRecord, series: &mut Vec<MetricRecord>) {
        for d in self.always {
            series.push(copy_and_rescale(m, d.name, d.divisor));
        }
        if self.by_tag.is_empty() {
            return;
        }
        for tag in m.tags.iter() {
            if let Some(rule) = self.by_tag.iter().find(|r| r.tags.contains(&tag.as_str())) {
                let d = &rule.derived;
                series.push(copy_and_rescale(m, d.name, d.divisor));
            }
        }
    }
}

/// Derive datadog system metrics from the host metric `m`.
///
/// Returns an empty vec if `m` is not a known host metric.
pub fn derive_system_metrics(m: &MetricRecord) -> Vec<MetricRecord> {
    let mut series = Vec::new();
    if let Some(rules) = SystemMetricRules::find(&m.name) {
        rules.derive(m, &mut series);
    }
    series
}
