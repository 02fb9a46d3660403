// ABOUTME: Integration tests for engine configuration loaded from environment variables
// ABOUTME: Threshold overrides, validation failures, and their effect on evaluation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use ap_core::constants::env_config;
use ap_core::errors::{AppError, ErrorCode};
use ap_core::models::PatientAnswers;
use ap_intelligence::{
    Category, ConfigError, IntelligenceConfig, RecommendationEngine, RecommendationEngineTrait,
};
use ap_prescription::{AppConfig, OutputFormat};
use serial_test::serial;
use std::env;

const VARS: [&str; 5] = [
    env_config::BMI_UNDERWEIGHT_MAX,
    env_config::BMI_NORMAL_MAX,
    env_config::BMI_OVERWEIGHT_MAX,
    env_config::SENIOR_AGE,
    env_config::OUTPUT_FORMAT,
];

fn clear_env() {
    for var in VARS {
        env::remove_var(var);
    }
}

#[test]
#[serial]
fn test_defaults_without_overrides() {
    clear_env();
    let config = IntelligenceConfig::load().unwrap();
    assert_eq!(config, IntelligenceConfig::default());
    assert_eq!(config.recommendation_engine.age.senior_age, 65);
}

#[test]
#[serial]
fn test_threshold_overrides_change_classification() {
    clear_env();
    env::set_var(env_config::BMI_NORMAL_MAX, "23");
    env::set_var(env_config::SENIOR_AGE, "60");

    let config = IntelligenceConfig::load().unwrap();
    clear_env();

    let engine = RecommendationEngine::with_config(config.recommendation_engine);
    let answers = PatientAnswers {
        age: Some(62),
        height_cm: Some(170.0),
        weight_kg: Some(70.0),
        ..PatientAnswers::default()
    };
    let set = engine.evaluate(&answers);
    assert!(set.get(Category::Bmi)[0].contains("Surpoids"));
    assert_eq!(set.get(Category::ActivityLevel).len(), 2);
}

#[test]
#[serial]
fn test_unparsable_override_rejected() {
    clear_env();
    env::set_var(env_config::BMI_OVERWEIGHT_MAX, "trente");
    let error = IntelligenceConfig::load().unwrap_err();
    clear_env();

    assert!(matches!(error, ConfigError::Parse(_)));
    assert_eq!(AppError::from(error).code, ErrorCode::ConfigError);
}

#[test]
#[serial]
fn test_unordered_thresholds_rejected() {
    clear_env();
    env::set_var(env_config::BMI_UNDERWEIGHT_MAX, "26");
    let error = IntelligenceConfig::load().unwrap_err();
    clear_env();

    assert!(matches!(error, ConfigError::InvalidRange(_)));
    assert_eq!(AppError::from(error).code, ErrorCode::ConfigInvalid);
}

#[test]
#[serial]
fn test_output_format_from_env() {
    clear_env();
    assert_eq!(AppConfig::from_env().output_format, OutputFormat::Text);

    env::set_var(env_config::OUTPUT_FORMAT, "json");
    assert_eq!(AppConfig::from_env().output_format, OutputFormat::Json);
    clear_env();
}
