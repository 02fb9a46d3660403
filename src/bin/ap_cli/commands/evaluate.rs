// ABOUTME: Batch evaluation command for ap-cli
// ABOUTME: Reads a JSON answer record from a file or stdin and prints the prescription report
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use ap_intelligence::{RecommendationEngine, RecommendationEngineTrait};
use ap_prescription::errors::AppResult;
use ap_prescription::form_io::{load_answers, read_answers};
use ap_prescription::{OutputFormat, PrescriptionReport};
use std::io;
use std::path::Path;

use crate::helpers::display::print_report;

type Result<T> = AppResult<T>;

/// Evaluate the answer record at `input` ("-" reads stdin)
pub fn run(engine: &RecommendationEngine, input: &str, format: OutputFormat) -> Result<()> {
    let answers = if input == "-" {
        read_answers(io::stdin().lock())?
    } else {
        load_answers(Path::new(input))?
    };

    let recommendations = engine.evaluate(&answers);
    let report = PrescriptionReport::today(&answers, recommendations, &engine.config().thresholds);
    print_report(&report, format)
}
