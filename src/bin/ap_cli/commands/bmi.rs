// ABOUTME: BMI lookup command for ap-cli
// ABOUTME: Validates height and weight, then prints the BMI with its configured category
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use ap_intelligence::{compute_bmi, BmiCategory, RecommendationEngineConfig};
use ap_prescription::errors::AppResult;
use ap_prescription::OutputFormat;

use crate::helpers::display::print_bmi;

type Result<T> = AppResult<T>;

/// Compute and print the BMI for the given measurements
pub fn run(
    config: &RecommendationEngineConfig,
    height_cm: f64,
    weight_kg: f64,
    format: OutputFormat,
) -> Result<()> {
    let bmi = compute_bmi(height_cm, weight_kg)?;
    let category = BmiCategory::classify(bmi, &config.thresholds);
    print_bmi(bmi, category, format)
}
