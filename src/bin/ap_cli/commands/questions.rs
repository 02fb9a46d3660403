// ABOUTME: Question catalogue command for ap-cli
// ABOUTME: Lists each step's questions with the JSON key and expected answer kind
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use ap_prescription::errors::AppResult;
use ap_prescription::WizardStep;

use crate::helpers::display::print_step_questions;

type Result<T> = AppResult<T>;

/// Print the questions of one step, or of every step
pub fn run(step: Option<u8>) -> Result<()> {
    match step {
        Some(number) => print_step_questions(WizardStep::new(number)?),
        None => WizardStep::ALL.into_iter().for_each(print_step_questions),
    }
    Ok(())
}
