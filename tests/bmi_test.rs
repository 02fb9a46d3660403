// ABOUTME: Integration tests for BMI computation and category labels
// ABOUTME: Covers rounding, band boundaries, and rejection of non-positive measurements
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use ap_core::errors::ErrorCode;
use ap_intelligence::config::intelligence::BmiThresholds;
use ap_intelligence::{compute_bmi, format_bmi_category, BmiCategory};

#[test]
fn test_bmi_rounded_to_one_decimal() {
    assert!((compute_bmi(180.0, 72.0).unwrap() - 22.2).abs() < f64::EPSILON);
    assert!((compute_bmi(160.0, 90.0).unwrap() - 35.2).abs() < f64::EPSILON);
    assert!((compute_bmi(165.0, 60.0).unwrap() - 22.0).abs() < f64::EPSILON);
}

#[test]
fn test_bmi_rounding_ties_follow_exact_value() {
    // 89 / 2^2 is exactly 22.25 and 73 / 2^2 exactly 18.25: ties go to even
    assert_eq!(compute_bmi(200.0, 89.0).unwrap().to_string(), "22.2");
    assert_eq!(compute_bmi(200.0, 73.0).unwrap().to_string(), "18.2");

    // 18.45 is stored just below the tie
    let bmi = compute_bmi(100.0, 18.45).unwrap();
    assert_eq!(bmi.to_string(), "18.4");
    assert_eq!(format_bmi_category(bmi), "Insuffisance pondérale");
}

#[test]
fn test_bmi_categories() {
    assert_eq!(format_bmi_category(compute_bmi(180.0, 72.0).unwrap()), "Poids normal");
    assert_eq!(format_bmi_category(compute_bmi(160.0, 90.0).unwrap()), "Obésité");
    assert_eq!(
        format_bmi_category(compute_bmi(160.0, 40.0).unwrap()),
        "Insuffisance pondérale"
    );
    assert_eq!(format_bmi_category(27.3), "Surpoids");
}

#[test]
fn test_bmi_boundaries_fall_in_upper_band() {
    assert_eq!(format_bmi_category(18.4), "Insuffisance pondérale");
    assert_eq!(format_bmi_category(18.5), "Poids normal");
    assert_eq!(format_bmi_category(24.9), "Poids normal");
    assert_eq!(format_bmi_category(25.0), "Surpoids");
    assert_eq!(format_bmi_category(29.9), "Surpoids");
    assert_eq!(format_bmi_category(30.0), "Obésité");
}

#[test]
fn test_non_positive_measurements_rejected() {
    for (height, weight) in [(0.0, 70.0), (170.0, 0.0), (-170.0, 70.0), (170.0, f64::NAN)] {
        let error = compute_bmi(height, weight).unwrap_err();
        assert_eq!(error.code, ErrorCode::ValueOutOfRange, "{height}/{weight}");
    }
}

#[test]
fn test_custom_thresholds_shift_bands() {
    let thresholds = BmiThresholds {
        underweight_max: 18.5,
        normal_max: 23.0,
        overweight_max: 27.5,
    };
    assert_eq!(BmiCategory::classify(24.0, &thresholds), BmiCategory::Overweight);
    assert_eq!(BmiCategory::classify(27.5, &thresholds), BmiCategory::Obesity);
    assert_eq!(BmiCategory::classify(24.0, &BmiThresholds::default()), BmiCategory::Normal);
}
