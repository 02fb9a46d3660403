// ABOUTME: Body mass index computation and WHO-style weight band classification
// ABOUTME: Implements rounded BMI from height/weight and French category labels
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::config::intelligence::BmiThresholds;
use ap_core::errors::{AppError, AppResult};
use ap_core::models::rounded_bmi;
use ap_core::validation::validate_height_weight;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Compute a body mass index from height and weight
///
/// BMI = weight (kg) / height (m)², rounded to one decimal.
///
/// # Errors
///
/// Returns a validation error if height or weight is not strictly positive
///
/// # Example
///
/// ```rust
/// use ap_intelligence::algorithms::compute_bmi;
///
/// assert_eq!(compute_bmi(180.0, 72.0).ok(), Some(22.2));
/// ```
pub fn compute_bmi(height_cm: f64, weight_kg: f64) -> AppResult<f64> {
    validate_height_weight(height_cm, weight_kg)?;
    rounded_bmi(height_cm, weight_kg)
        .ok_or_else(|| AppError::internal("BMI undefined for validated measurements"))
}

/// Weight band derived from a BMI value
///
/// Bands are half-open: a value equal to a threshold falls in the upper band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BmiCategory {
    /// Insuffisance pondérale
    Underweight,
    /// Poids normal
    Normal,
    /// Surpoids
    Overweight,
    /// Obésité
    Obesity,
}

impl BmiCategory {
    /// Classify a BMI value against the given thresholds
    #[must_use]
    pub fn classify(bmi: f64, thresholds: &BmiThresholds) -> Self {
        if bmi < thresholds.underweight_max {
            Self::Underweight
        } else if bmi < thresholds.normal_max {
            Self::Normal
        } else if bmi < thresholds.overweight_max {
            Self::Overweight
        } else {
            Self::Obesity
        }
    }

    /// French label shown in reports
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Underweight => "Insuffisance pondérale",
            Self::Normal => "Poids normal",
            Self::Overweight => "Surpoids",
            Self::Obesity => "Obésité",
        }
    }
}

impl fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// French category label for a BMI value, using the standard thresholds
///
/// ```rust
/// use ap_intelligence::algorithms::format_bmi_category;
///
/// assert_eq!(format_bmi_category(18.5), "Poids normal");
/// assert_eq!(format_bmi_category(30.0), "Obésité");
/// ```
#[must_use]
pub fn format_bmi_category(bmi: f64) -> &'static str {
    BmiCategory::classify(bmi, &BmiThresholds::default()).label()
}
