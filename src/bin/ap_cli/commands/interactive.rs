// ABOUTME: Interactive questionnaire command for ap-cli
// ABOUTME: Runs the terminal form on stdin/stdout and prints the report once generated
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use ap_intelligence::RecommendationEngine;
use ap_prescription::errors::AppResult;
use ap_prescription::{OutputFormat, PrescriptionReport, QuestionnaireSession, TerminalForm};
use std::io;

use crate::helpers::display::print_report;

type Result<T> = AppResult<T>;

/// Ask the questionnaire on the terminal, then print the report
pub fn run(engine: &RecommendationEngine, format: OutputFormat) -> Result<()> {
    let mut session = QuestionnaireSession::new();

    let recommendations = {
        let stdin = io::stdin();
        let stdout = io::stdout();
        let mut form = TerminalForm::new(stdin.lock(), stdout.lock())
            .with_thresholds(engine.config().thresholds);
        form.run(&mut session, engine)?
    };

    let (answers, _) = session.finish();
    let report = PrescriptionReport::today(&answers, recommendations, &engine.config().thresholds);
    print_report(&report, format)
}
