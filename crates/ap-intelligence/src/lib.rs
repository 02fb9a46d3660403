// ABOUTME: Recommendation engine for physical activity prescription
// ABOUTME: Rule blocks, BMI algorithms, advisory catalogue, and engine configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # AP Intelligence
//!
//! Derives categorized advisory text from a completed [`ap_core::models::PatientAnswers`]
//! record.
//!
//! ```rust
//! use ap_core::models::PatientAnswers;
//! use ap_intelligence::{Category, RecommendationEngine, RecommendationEngineTrait};
//!
//! let engine = RecommendationEngine::new();
//! let set = engine.evaluate(&PatientAnswers::default());
//! assert!(set.contains(Category::Biology));
//! ```

/// Advisory texts, one constant per rule outcome
pub mod advisories;

/// BMI computation and classification
pub mod algorithms;

/// Engine configuration with environment overrides
pub mod config;

/// Rule blocks and the engine trait
pub mod recommendation_engine;

/// Categorized engine output
pub mod recommendation_set;

pub use algorithms::{compute_bmi, format_bmi_category, BmiCategory};
pub use config::{ConfigError, IntelligenceConfig, RecommendationEngineConfig};
pub use recommendation_engine::{
    CardiovascularClearance, RecommendationEngine, RecommendationEngineTrait, ScreeningLevel,
};
pub use recommendation_set::{Category, RecommendationSet};
