/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

/// A single data point, the timestamp is in seconds since unix epoch.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MetricPoint {
    pub timestamp: f64,
    pub value: Option<f64>,
}

impl MetricPoint {
    pub const fn new(timestamp: f64, value: Option<f64>) -> Self {
        MetricPoint { timestamp, value }
    }

    pub fn from_nanos(timestamp_nanos: u64, value: f64) -> Self {
        MetricPoint {
            timestamp: timestamp_nanos as f64 / 1e9,
            value: Some(value),
        }
    }

    pub(crate) fn rescale(&self, divisor: f64) -> Self {
        MetricPoint {
            timestamp: self.timestamp,
            value: self.value.map(|v| v / divisor),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nanos() {
        let p = MetricPoint::from_nanos(1_500_000_000, 3.0);
        assert_eq!(p.timestamp, 1.5);
        assert_eq!(p.value, Some(3.0));
    }

    #[test]
    fn rescale_absent() {
        let p = MetricPoint::new(1.0, None);
        assert_eq!(p.rescale(4.0), p);

        let p = MetricPoint::new(1.0, Some(2.0));
        assert_eq!(p.rescale(4.0), MetricPoint::new(1.0, Some(0.5)));
    }
}
