// ABOUTME: Data models shared by the questionnaire, the engine, and the front ends
// ABOUTME: Re-exports the answer record, categorical choices, and question catalogue
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Data models
//!
//! - [`PatientAnswers`]: the record filled in by the wizard
//! - [`Question`]: one field of the form, with its step, gate, and kind
//! - Categorical enums implementing [`FormChoice`]

mod answers;
mod choices;
mod question;

pub use answers::{rounded_bmi, PatientAnswers};
pub use choices::{ActivityStatus, CvRisk, FormChoice, Gender, SedentaryStatus, TargetActivity};
pub use question::{AnswerKind, AnswerValue, Gate, Question};
