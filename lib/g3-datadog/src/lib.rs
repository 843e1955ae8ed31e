/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

mod types;
pub use types::{MetricKind, MetricPoint, MetricRecord, ParseError};

mod convert;
pub use convert::copy_and_rescale;

mod system;
pub use system::derive_system_metrics;

mod prepare;
pub use prepare::{OTEL_NAMESPACE_PREFIX, prepare_system_metrics};

mod default;
pub use default::{BuildInfo, default_metrics};

pub mod series;

mod config;
pub use config::DatadogMetricsConfig;

mod preparer;
pub use preparer::MetricsPreparer;
