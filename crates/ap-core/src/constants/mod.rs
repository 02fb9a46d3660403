// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Pure data constants for the physical activity prescription questionnaire
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single
//! flat list.

/// Service identity used in structured logs
pub mod service_names {
    /// Name of the questionnaire service
    pub const AP_PRESCRIPTION: &str = "ap_prescription";
}

/// Bounds accepted by the intake form
pub mod limits {
    /// Minimum accepted age (years)
    pub const MIN_AGE: u8 = 0;
    /// Maximum accepted age (years)
    pub const MAX_AGE: u8 = 120;
    /// First wizard step
    pub const FIRST_STEP: u8 = 1;
    /// Last wizard step
    pub const LAST_STEP: u8 = 5;
    /// Progress bar increment per step (percent)
    pub const PROGRESS_PER_STEP: u8 = 20;
}

/// Body mass index thresholds (kg/m²), lower bound inclusive
pub mod bmi {
    /// Below this value: underweight
    pub const UNDERWEIGHT_MAX: f64 = 18.5;
    /// Below this value (and at or above `UNDERWEIGHT_MAX`): normal weight
    pub const NORMAL_MAX: f64 = 25.0;
    /// Below this value (and at or above `NORMAL_MAX`): overweight, obese above
    pub const OVERWEIGHT_MAX: f64 = 30.0;
    /// Number of decimals kept when rounding a computed BMI
    pub const DECIMALS: usize = 1;
}

/// Age thresholds used by the activity rules
pub mod age {
    /// Age from which balance and strengthening work is advised
    pub const SENIOR_THRESHOLD: u8 = 65;
}

/// Environment variable names read by configuration loaders
pub mod env_config {
    /// Override for the underweight/normal BMI boundary
    pub const BMI_UNDERWEIGHT_MAX: &str = "AP_BMI_UNDERWEIGHT_MAX";
    /// Override for the normal/overweight BMI boundary
    pub const BMI_NORMAL_MAX: &str = "AP_BMI_NORMAL_MAX";
    /// Override for the overweight/obese BMI boundary
    pub const BMI_OVERWEIGHT_MAX: &str = "AP_BMI_OVERWEIGHT_MAX";
    /// Override for the senior age threshold
    pub const SENIOR_AGE: &str = "AP_SENIOR_AGE";
    /// Default report output format (text, json)
    pub const OUTPUT_FORMAT: &str = "AP_OUTPUT_FORMAT";
}

/// Labels shown by the form for yes/no questions
pub mod labels {
    /// Affirmative answer label
    pub const YES: &str = "Oui";
    /// Negative answer label
    pub const NO: &str = "Non";
}
