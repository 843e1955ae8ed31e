/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use std::sync::Arc;

use crate::types::{ParseError, check_node_name};

mod yaml;

const DEFAULT_NAMESPACE: &str = "metrics";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DatadogMetricsConfig {
    namespace: String,
    pub(crate) hostname: Option<Arc<str>>,
    pub(crate) translate_system_metrics: bool,
    pub(crate) emit_running_metric: bool,
}

impl Default for DatadogMetricsConfig {
    fn default() -> Self {
        DatadogMetricsConfig {
            namespace: DEFAULT_NAMESPACE.to_string(),
            hostname: None,
            translate_system_metrics: true,
            emit_running_metric: true,
        }
    }
}

impl DatadogMetricsConfig {
    #[inline]
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    #[inline]
    pub fn hostname(&self) -> Option<&str> {
        self.hostname.as_deref()
    }

    pub fn set_namespace(&mut self, namespace: &str) -> Result<(), ParseError> {
        check_node_name(namespace)?;
        self.namespace = namespace.to_string();
        Ok(())
    }

    pub fn set_hostname<H: Into<Arc<str>>>(&mut self, hostname: H) {
        self.hostname = Some(hostname.into());
    }

    pub fn set_translate_system_metrics(&mut self, enable: bool) {
        self.translate_system_metrics = enable;
    }

    pub fn set_emit_running_metric(&mut self, enable: bool) {
        self.emit_running_metric = enable;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_namespace() {
        let mut config = DatadogMetricsConfig::default();
        assert_eq!(config.namespace(), "metrics");
        config.set_namespace("traces").unwrap();
        assert_eq!(config.namespace(), "traces");
        assert!(config.set_namespace("a:b").is_err());
        assert!(config.set_namespace("").is_err());
        assert_eq!(config.namespace(), "traces");
    }
}
