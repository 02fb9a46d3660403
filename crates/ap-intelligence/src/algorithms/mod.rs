// ABOUTME: Anthropometric algorithms used by the recommendation engine
// ABOUTME: Re-exports BMI computation and classification
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Body mass index computation and classification
pub mod bmi;

pub use bmi::{compute_bmi, format_bmi_category, BmiCategory};
