// ABOUTME: Core types and constants for the physical activity prescription questionnaire
// ABOUTME: Foundation crate with error handling, the answer model, and the question catalogue
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # AP Core
//!
//! Foundation crate providing shared types and constants for the physical
//! activity (AP) prescription questionnaire. This crate is designed to change
//! infrequently, enabling incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `AppResult`
//! - **constants**: Age bounds, BMI thresholds, environment variable names
//! - **models**: `PatientAnswers`, categorical answer enums, the `Question` catalogue
//! - **validation**: Boundary checks applied where the form supplies values

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (answers, questions, enums)
pub mod models;

/// Input validation applied at the form boundary
pub mod validation;
