// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Output formatting helpers for ap-cli
// ABOUTME: Prints reports, BMI results, and the question catalogue to stdout

use ap_intelligence::BmiCategory;
use ap_prescription::errors::AppResult;
use ap_prescription::{format_report, OutputFormat, PrescriptionReport, WizardStep};
use serde_json::json;

/// Print a report in the requested format
pub fn print_report(report: &PrescriptionReport, format: OutputFormat) -> AppResult<()> {
    let output = format_report(report, format)?;
    println!("{}", output.data);
    Ok(())
}

/// Print a BMI value and its category
pub fn print_bmi(bmi: f64, category: BmiCategory, format: OutputFormat) -> AppResult<()> {
    match format {
        OutputFormat::Text => println!("IMC : {bmi:.1} kg/m² ({category})"),
        OutputFormat::Json => {
            let document = json!({ "bmi": bmi, "category": category.label() });
            println!("{}", serde_json::to_string_pretty(&document)?);
        }
    }
    Ok(())
}

/// Print the questions of one step
pub fn print_step_questions(step: WizardStep) {
    println!("\n{step}");
    println!("{}", "=".repeat(50));
    for question in step.questions() {
        println!("  {:<32} {}", question.key(), question.prompt());
        println!("  {:<32} -> {}", "", question.kind());
    }
}
