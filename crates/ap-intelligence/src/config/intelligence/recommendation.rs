// ABOUTME: Recommendation engine configuration for prescription advisories
// ABOUTME: Configures BMI thresholds, the senior age cutoff, and BMI guidance messages
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Recommendation Engine Configuration
//!
//! Provides the tunable part of the rule table: the BMI band boundaries, the
//! age from which balance work is advised, and the guidance attached to each
//! BMI band.

use super::error::ConfigError;
use ap_core::constants::{age, bmi, limits};
use serde::{Deserialize, Serialize};

/// Recommendation Engine Configuration
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RecommendationEngineConfig {
    /// BMI band boundaries
    pub thresholds: BmiThresholds,
    /// Age-based cutoffs used by the activity block
    pub age: AgeThresholds,
    /// Guidance attached to each BMI band
    pub messages: BmiMessages,
}

/// BMI band boundaries (kg/m²), each lower bound inclusive
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BmiThresholds {
    /// Underweight below this value
    pub underweight_max: f64,
    /// Normal weight below this value
    pub normal_max: f64,
    /// Overweight below this value, obese at or above
    pub overweight_max: f64,
}

/// Age cutoffs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgeThresholds {
    /// Age (years) from which balance and strengthening advice is added
    pub senior_age: u8,
}

/// Guidance appended after the BMI category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BmiMessages {
    /// Guidance for underweight patients
    pub underweight: String,
    /// Guidance for normal weight patients
    pub normal: String,
    /// Guidance for overweight patients
    pub overweight: String,
    /// Guidance for obese patients
    pub obesity: String,
}

impl Default for BmiThresholds {
    fn default() -> Self {
        Self {
            underweight_max: bmi::UNDERWEIGHT_MAX,
            normal_max: bmi::NORMAL_MAX,
            overweight_max: bmi::OVERWEIGHT_MAX,
        }
    }
}

impl Default for AgeThresholds {
    fn default() -> Self {
        Self {
            senior_age: age::SENIOR_THRESHOLD,
        }
    }
}

impl Default for BmiMessages {
    fn default() -> Self {
        Self {
            underweight: "Privilégier le renforcement musculaire progressif associé à des apports \
                          nutritionnels adaptés ; limiter les volumes d'endurance importants."
                .into(),
            normal: "Maintenir les recommandations générales : 150 minutes d'activité modérée \
                     par semaine et 2 séances de renforcement musculaire."
                .into(),
            overweight: "Privilégier les activités d'endurance d'intensité modérée (marche rapide, \
                         vélo, natation) en augmentant progressivement la durée."
                .into(),
            obesity: "Privilégier les activités portées (vélo, natation, aquagym) pour limiter les \
                      contraintes articulaires ; progression lente de l'intensité."
                .to_owned(),
        }
    }
}

impl RecommendationEngineConfig {
    /// Validate thresholds and cutoffs
    ///
    /// # Errors
    ///
    /// Returns an error if BMI thresholds are not strictly ascending and
    /// positive, or if the senior age is outside the accepted age range
    pub fn validate(&self) -> Result<(), ConfigError> {
        let thresholds = &self.thresholds;
        let all_finite = [
            thresholds.underweight_max,
            thresholds.normal_max,
            thresholds.overweight_max,
        ]
        .iter()
        .all(|value| value.is_finite());
        if !all_finite || thresholds.underweight_max <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "BMI thresholds must be finite and positive",
            ));
        }
        if thresholds.underweight_max >= thresholds.normal_max
            || thresholds.normal_max >= thresholds.overweight_max
        {
            return Err(ConfigError::InvalidRange(
                "BMI thresholds must be strictly ascending",
            ));
        }
        if !(limits::MIN_AGE..=limits::MAX_AGE).contains(&self.age.senior_age) {
            return Err(ConfigError::ValueOutOfRange(
                "senior_age must be between 0 and 120",
            ));
        }
        Ok(())
    }
}
