// ABOUTME: Library entry point for the physical activity prescription questionnaire
// ABOUTME: Five-step intake wizard, terminal form, report rendering, and logging setup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # AP Prescription
//!
//! Collects a patient's medical intake over five steps and turns the answers
//! into categorized physical activity advisories.
//!
//! ## Architecture
//!
//! - **`ap-core`**: answer model, question catalogue, validation, errors
//! - **`ap-intelligence`**: BMI classification and the recommendation engine
//! - **Wizard**: step navigation and answer intake for one session
//! - **Form IO**: line-oriented terminal front end over the wizard
//! - **Formatters**: printable and JSON reports
//!
//! ## Example Usage
//!
//! ```rust
//! use ap_core::models::{AnswerValue, Question};
//! use ap_intelligence::{Category, RecommendationEngine};
//! use ap_prescription::wizard::QuestionnaireSession;
//!
//! let mut session = QuestionnaireSession::new();
//! session.answer(Question::HeightCm, AnswerValue::Number(170.0))?;
//! session.answer(Question::WeightKg, AnswerValue::Number(70.0))?;
//! while session.can_advance() {
//!     session.advance()?;
//! }
//! let results = session.submit(&RecommendationEngine::new())?;
//! assert!(results.contains(Category::Bmi));
//! # Ok::<(), ap_core::errors::AppError>(())
//! ```

/// Runtime configuration from environment variables
pub mod config;

/// Error types re-exported from `ap-core`
pub mod errors;

/// Terminal front end for the questionnaire
pub mod form_io;

/// Report rendering
pub mod formatters;

/// Tracing subscriber setup and structured session events
pub mod logging;

/// Questionnaire state machine
pub mod wizard;

pub use config::AppConfig;
pub use form_io::{load_answers, read_answers, TerminalForm};
pub use formatters::{format_report, FormattedOutput, OutputFormat, PrescriptionReport};
pub use wizard::{QuestionnaireSession, WizardStep};
