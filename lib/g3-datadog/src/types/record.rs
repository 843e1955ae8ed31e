/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use std::sync::Arc;

use super::{MetricKind, MetricPoint};

/// A metric series in the shape of the datadog series api.
///
/// `points`, `tags` and `host` are reference counted and may be shared
/// between a record and the copies derived from it, see [`crate::copy_and_rescale`].
/// The shared parts are immutable, and only `name`, `kind` and `interval`
/// are owned by each record.
#[derive(Clone, Debug, PartialEq)]
pub struct MetricRecord {
    pub name: String,
    pub kind: Option<MetricKind>,
    pub points: Arc<[MetricPoint]>,
    pub tags: Arc<[String]>,
    pub host: Option<Arc<str>>,
    pub interval: Option<u32>,
}

impl MetricRecord {
    /// Create a record with a single point and no type set.
    pub fn new<N: Into<String>>(
        name: N,
        timestamp_nanos: u64,
        value: f64,
        tags: Vec<String>,
    ) -> Self {
        let name = name.into();
        debug_assert!(!name.is_empty());
        MetricRecord {
            name,
            kind: None,
            points: Arc::from([MetricPoint::from_nanos(timestamp_nanos, value)]),
            tags: tags.into(),
            host: None,
            interval: None,
        }
    }

    pub fn new_gauge<N: Into<String>>(
        name: N,
        timestamp_nanos: u64,
        value: f64,
        tags: Vec<String>,
    ) -> Self {
        let mut record = MetricRecord::new(name, timestamp_nanos, value, tags);
        record.kind = Some(MetricKind::Gauge);
        record
    }

    pub fn new_count<N: Into<String>>(
        name: N,
        timestamp_nanos: u64,
        value: f64,
        tags: Vec<String>,
    ) -> Self {
        let mut record = MetricRecord::new(name, timestamp_nanos, value, tags);
        record.kind = Some(MetricKind::Count);
        record
    }

    pub fn with_host<H: Into<Arc<str>>>(mut self, host: H) -> Self {
        self.host = Some(host.into());
        self
    }

    /// The lowercase type name, or an empty string if the type is not set.
    pub fn get_type(&self) -> &'static str {
        self.kind.map(|k| k.as_str()).unwrap_or_default()
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags() -> Vec<String> {
        vec!["tag:value".to_string()]
    }

    #[test]
    fn new_record() {
        let m = MetricRecord::new("test.metric", 1_000_000_000, 2.0, tags());
        assert_eq!(m.name, "test.metric");
        assert_eq!(m.points.len(), 1);
        assert_eq!(m.points[0].timestamp, 1.0);
        assert_eq!(m.points[0].value, Some(2.0));
        assert_eq!(m.tags.as_ref(), ["tag:value".to_string()]);
        assert!(m.kind.is_none());
        assert!(m.host.is_none());
        assert!(m.interval.is_none());
        assert_eq!(m.get_type(), "");

        let m = MetricRecord::new("x", 2_000_000_000, 7.0, Vec::new());
        assert_eq!(m.points[0].timestamp, 2.0);
        assert!(m.tags.is_empty());
    }

    #[test]
    fn new_type() {
        let gauge = MetricRecord::new_gauge("test.metric", 1_000_000_000, 2.0, tags());
        assert_eq!(gauge.get_type(), "gauge");
        assert_eq!(gauge.get_type(), MetricKind::Gauge.as_str());

        let count = MetricRecord::new_count("test.metric", 1_000_000_000, 2.0, tags());
        assert_eq!(count.get_type(), "count");
        assert_eq!(count.points[0].value, Some(2.0));
    }

    #[test]
    fn host_and_tags() {
        let m = MetricRecord::new_gauge("a", 0, 1.0, tags()).with_host("test-host");
        assert_eq!(m.host.as_deref(), Some("test-host"));
        assert!(m.has_tag("tag:value"));
        assert!(!m.has_tag("tag"));
    }
}
