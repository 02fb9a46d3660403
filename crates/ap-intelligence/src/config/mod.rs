// ABOUTME: Configuration module for ap-intelligence crate
// ABOUTME: Re-exports intelligence configuration types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Engine configuration (BMI thresholds, age cutoffs, messages)
pub mod intelligence;

pub use intelligence::{ConfigError, IntelligenceConfig, RecommendationEngineConfig};
