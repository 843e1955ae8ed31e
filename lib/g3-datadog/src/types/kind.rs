/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use std::fmt;
use std::str::FromStr;

use super::ParseError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MetricKind {
    Gauge,
    Count,
}

impl MetricKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            MetricKind::Gauge => "gauge",
            MetricKind::Count => "count",
        }
    }
}

impl FromStr for MetricKind {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "gauge" => Ok(MetricKind::Gauge),
            "count" => Ok(MetricKind::Count),
            _ => Err(ParseError::UnknownMetricKind(s.to_string())),
        }
    }
}

impl fmt::Display for MetricKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse() {
        assert_eq!(MetricKind::from_str("gauge").unwrap(), MetricKind::Gauge);
        assert_eq!(MetricKind::from_str("Count").unwrap(), MetricKind::Count);
        assert_eq!(
            MetricKind::from_str("rate"),
            Err(ParseError::UnknownMetricKind("rate".to_string()))
        );
    }

    #[test]
    fn display() {
        assert_eq!(MetricKind::Gauge.to_string(), "gauge");
        assert_eq!(MetricKind::Count.to_string(), "count");
    }
}
