// ABOUTME: Process-wide engine configuration loaded once from the environment
// ABOUTME: Global singleton with environment overrides and validation, falling back to defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Intelligence Configuration Module
//!
//! Defaults come from [`ap_core::constants`]. Each value can be overridden
//! through an `AP_` environment variable; see
//! [`ap_core::constants::env_config`].

mod error;
mod recommendation;

pub use error::ConfigError;
pub use recommendation::{AgeThresholds, BmiMessages, BmiThresholds, RecommendationEngineConfig};

use ap_core::constants::env_config;
use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::warn;

/// Global configuration singleton
static INTELLIGENCE_CONFIG: OnceLock<IntelligenceConfig> = OnceLock::new();

/// Main intelligence configuration container
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct IntelligenceConfig {
    /// Configuration for the prescription recommendation engine
    pub recommendation_engine: RecommendationEngineConfig,
}

impl IntelligenceConfig {
    /// Get the global configuration instance
    pub fn global() -> &'static Self {
        INTELLIGENCE_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load intelligence config: {e}, using defaults");
                Self::default()
            })
        })
    }

    /// Load configuration from environment
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::default();
        config = config.apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if configuration values are invalid
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.recommendation_engine.validate()
    }

    /// Helper function to parse and apply an environment variable override
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .trim()
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}: '{val}'")))?;
        }
        Ok(())
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        let engine = &mut self.recommendation_engine;

        // BMI thresholds
        Self::apply_env_var(
            env_config::BMI_UNDERWEIGHT_MAX,
            &mut engine.thresholds.underweight_max,
        )?;
        Self::apply_env_var(env_config::BMI_NORMAL_MAX, &mut engine.thresholds.normal_max)?;
        Self::apply_env_var(
            env_config::BMI_OVERWEIGHT_MAX,
            &mut engine.thresholds.overweight_max,
        )?;

        Self::apply_env_var(env_config::SENIOR_AGE, &mut engine.age.senior_age)?;

        Ok(self)
    }
}
