// ABOUTME: Application configuration assembled from environment variables
// ABOUTME: Logging settings and the default report output format for the CLI
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration module
//!
//! - **Logging**: level and layout of the tracing subscriber
//! - **Output**: default report format, overridable per command
//!
//! Rule thresholds live with the engine in
//! [`ap_intelligence::IntelligenceConfig`].

use crate::formatters::OutputFormat;
use crate::logging::LoggingConfig;
use ap_core::constants::env_config;
use ap_intelligence::IntelligenceConfig;
use std::env;
use tracing::debug;

/// Runtime settings for the command line tools
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    /// Tracing subscriber settings
    pub logging: LoggingConfig,
    /// Report format used when a command does not pass `--format`
    pub output_format: OutputFormat,
}

impl AppConfig {
    /// Load configuration from environment variables
    #[must_use]
    pub fn from_env() -> Self {
        let output_format = env::var(env_config::OUTPUT_FORMAT).map_or_else(
            |_| OutputFormat::default(),
            |value| OutputFormat::from_str_param(&value),
        );

        Self {
            logging: LoggingConfig::from_env(),
            output_format,
        }
    }

    /// Log the effective configuration, engine thresholds included
    pub fn log_summary(&self) {
        let engine = &IntelligenceConfig::global().recommendation_engine;
        debug!(
            output.format = %self.output_format,
            bmi.underweight_max = engine.thresholds.underweight_max,
            bmi.normal_max = engine.thresholds.normal_max,
            bmi.overweight_max = engine.thresholds.overweight_max,
            age.senior = engine.age.senior_age,
            "Configuration loaded"
        );
    }
}
