// ABOUTME: Boundary validation for numeric answers typed into the intake form
// ABOUTME: Age bounds and strictly positive height/weight, with user-facing French messages
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Validation helpers
//!
//! These run where the form hands a value over, before it is stored in
//! [`crate::models::PatientAnswers`]. Failures are `ValueOutOfRange` errors
//! whose message is meant to be shown next to the field.

use crate::constants::limits::{MAX_AGE, MIN_AGE};
use crate::errors::{AppError, AppResult};

/// Validate an age in years
///
/// # Errors
///
/// Returns a validation error when the age is outside 0-120
pub fn validate_age(age: i64) -> AppResult<u8> {
    u8::try_from(age)
        .ok()
        .filter(|years| (MIN_AGE..=MAX_AGE).contains(years))
        .ok_or_else(|| {
            AppError::validation(format!(
                "L'âge doit être compris entre {MIN_AGE} et {MAX_AGE} ans"
            ))
        })
}

/// Validate a height in centimetres
///
/// # Errors
///
/// Returns a validation error when the height is not a finite positive number
pub fn validate_height(height_cm: f64) -> AppResult<f64> {
    if height_cm.is_finite() && height_cm > 0.0 {
        Ok(height_cm)
    } else {
        Err(AppError::validation("La taille doit être supérieure à 0"))
    }
}

/// Validate a weight in kilograms
///
/// # Errors
///
/// Returns a validation error when the weight is not a finite positive number
pub fn validate_weight(weight_kg: f64) -> AppResult<f64> {
    if weight_kg.is_finite() && weight_kg > 0.0 {
        Ok(weight_kg)
    } else {
        Err(AppError::validation("Le poids doit être supérieur à 0"))
    }
}

/// Validate a height/weight pair, height first
///
/// # Errors
///
/// Returns the first validation error encountered
pub fn validate_height_weight(height_cm: f64, weight_kg: f64) -> AppResult<()> {
    validate_height(height_cm)?;
    validate_weight(weight_kg)?;
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::errors::ErrorCode;

    #[test]
    fn test_age_bounds_inclusive() {
        assert_eq!(validate_age(0), Ok(0));
        assert_eq!(validate_age(120), Ok(120));
        assert_eq!(
            validate_age(121).map_err(|e| e.code),
            Err(ErrorCode::ValueOutOfRange)
        );
        assert!(validate_age(-1).is_err());
    }

    #[test]
    fn test_height_checked_before_weight() {
        let error = validate_height_weight(0.0, 0.0).unwrap_err();
        assert_eq!(error.message, "La taille doit être supérieure à 0");
        let error = validate_height_weight(170.0, -3.0).unwrap_err();
        assert_eq!(error.message, "Le poids doit être supérieur à 0");
    }

    #[test]
    fn test_non_finite_rejected() {
        assert!(validate_height(f64::NAN).is_err());
        assert!(validate_weight(f64::INFINITY).is_err());
    }
}
