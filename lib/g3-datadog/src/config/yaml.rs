/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use anyhow::{Context, anyhow};
use yaml_rust::{Yaml, yaml};

use super::DatadogMetricsConfig;

fn normalize_key(raw: &str) -> String {
    raw.to_lowercase().replace('-', "_")
}

fn foreach_kv<F>(table: &yaml::Hash, mut f: F) -> anyhow::Result<()>
where
    F: FnMut(&str, &Yaml) -> anyhow::Result<()>,
{
    for (k, v) in table.iter() {
        if let Yaml::String(key) = k {
            f(key, v).context(format!("failed to parse value of key {key}"))?;
        } else {
            return Err(anyhow!("key in hash should be string"));
        }
    }
    Ok(())
}

fn as_bool(v: &Yaml) -> anyhow::Result<bool> {
    match v {
        Yaml::String(s) => match s.to_lowercase().as_str() {
            "on" | "true" | "yes" | "1" => Ok(true),
            "off" | "false" | "no" | "0" => Ok(false),
            _ => Err(anyhow!("invalid yaml string value for 'bool': {s}")),
        },
        Yaml::Boolean(value) => Ok(*value),
        Yaml::Integer(i) => Ok(*i != 0),
        _ => Err(anyhow!(
            "yaml value type for 'bool' should be 'boolean' / 'string' / 'integer'"
        )),
    }
}

fn as_string(v: &Yaml) -> anyhow::Result<String> {
    match v {
        Yaml::String(s) => Ok(s.to_string()),
        Yaml::Integer(i) => Ok(i.to_string()),
        Yaml::Real(s) => Ok(s.to_string()),
        _ => Err(anyhow!(
            "yaml value type for string should be 'string' / 'integer' / 'real'"
        )),
    }
}

impl DatadogMetricsConfig {
    pub fn parse_yaml(v: &Yaml) -> anyhow::Result<Self> {
        if let Yaml::Hash(map) = v {
            let mut config = DatadogMetricsConfig::default();
            foreach_kv(map, |k, v| config.set_by_yaml_kv(k, v))?;
            Ok(config)
        } else {
            Err(anyhow!(
                "yaml value type for 'datadog metrics config' should be 'map'"
            ))
        }
    }

    fn set_by_yaml_kv(&mut self, k: &str, v: &Yaml) -> anyhow::Result<()> {
        match normalize_key(k).as_str() {
            "namespace" => {
                let namespace = as_string(v)?;
                self.set_namespace(&namespace)
                    .map_err(|e| anyhow!("invalid namespace {namespace}: {e}"))
            }
            "hostname" | "host" => {
                let hostname = as_string(v)?;
                if hostname.is_empty() {
                    return Err(anyhow!("empty hostname"));
                }
                self.set_hostname(hostname);
                Ok(())
            }
            "translate_system_metrics" | "system_metrics" => {
                self.translate_system_metrics =
                    as_bool(v).context(format!("invalid bool value for key {k}"))?;
                Ok(())
            }
            "emit_running_metric" | "running_metric" => {
                self.emit_running_metric =
                    as_bool(v).context(format!("invalid bool value for key {k}"))?;
                Ok(())
            }
            _ => Err(anyhow!("invalid key {k}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use yaml_rust::YamlLoader;

    fn load(s: &str) -> Yaml {
        YamlLoader::load_from_str(s).unwrap().remove(0)
    }

    #[test]
    fn parse_ok() {
        let v = load(
            r#"
            namespace: traces
            hostname: test-host
            system-metrics: off
            running_metric: true
            "#,
        );
        let config = DatadogMetricsConfig::parse_yaml(&v).unwrap();
        assert_eq!(config.namespace(), "traces");
        assert_eq!(config.hostname(), Some("test-host"));
        assert!(!config.translate_system_metrics);
        assert!(config.emit_running_metric);

        let v = load("host: h1");
        let config = DatadogMetricsConfig::parse_yaml(&v).unwrap();
        assert_eq!(config.namespace(), "metrics");
        assert_eq!(config.hostname(), Some("h1"));
        assert!(config.translate_system_metrics);
    }

    #[test]
    fn parse_err() {
        assert!(DatadogMetricsConfig::parse_yaml(&load("- a")).is_err());
        assert!(DatadogMetricsConfig::parse_yaml(&load("namespace: a b")).is_err());
        assert!(DatadogMetricsConfig::parse_yaml(&load("hostname: ''")).is_err());
        assert!(DatadogMetricsConfig::parse_yaml(&load("system_metrics: maybe")).is_err());
        assert!(DatadogMetricsConfig::parse_yaml(&load("interval: 10")).is_err());
        assert!(DatadogMetricsConfig::parse_yaml(&load("1: a")).is_err());
    }
}
