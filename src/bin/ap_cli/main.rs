// ABOUTME: ap-cli - command-line front end for the physical activity prescription questionnaire
// ABOUTME: Interactive questionnaire, batch evaluation of answer files, and BMI lookup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Fill in the questionnaire step by step
//! ap-cli interactive
//!
//! # Evaluate a saved answer record and print the report as JSON
//! ap-cli evaluate --input patient.json --format json
//!
//! # Read the answer record from stdin
//! cat patient.json | ap-cli evaluate
//!
//! # BMI and its category
//! ap-cli bmi --height 170 --weight 70
//!
//! # List the questions of step 4 with their answer keys
//! ap-cli questions --step 4
//! ```

mod commands;
mod helpers;

use ap_intelligence::{IntelligenceConfig, RecommendationEngine};
use ap_prescription::errors::{AppError, AppResult};
use ap_prescription::{AppConfig, OutputFormat};
use clap::{Parser, Subcommand};
use std::process::ExitCode;
use tracing::{error, info};

type Result<T> = AppResult<T>;

#[derive(Parser)]
#[command(
    name = "ap-cli",
    about = "Physical activity prescription questionnaire",
    long_about = "Collects a patient's medical intake over five steps and prints categorized physical activity advisories."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Fill in the questionnaire interactively
    Interactive {
        /// Report format (defaults to AP_OUTPUT_FORMAT, then text)
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// Evaluate a JSON answer record
    Evaluate {
        /// Answer file, or "-" for stdin
        #[arg(long, short = 'i', default_value = "-")]
        input: String,

        /// Report format (defaults to AP_OUTPUT_FORMAT, then text)
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// Compute BMI and its category
    Bmi {
        /// Height in centimetres
        #[arg(long)]
        height: f64,

        /// Weight in kilograms
        #[arg(long)]
        weight: f64,

        /// Output format
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// List the questions and their answer keys
    Questions {
        /// Only this step (1-5)
        #[arg(long)]
        step: Option<u8>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let config = AppConfig::from_env();

    let logging = if cli.verbose {
        config.logging.clone().verbose()
    } else {
        config.logging.clone()
    };
    if let Err(e) = logging.init() {
        eprintln!("Logging disabled: {e:#}");
    }
    config.log_summary();

    match run(cli.command, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error.code = ?e.code, "Command failed");
            eprintln!("Erreur : {}", e.message);
            ExitCode::from(u8::try_from(e.code.exit_code()).unwrap_or(1))
        }
    }
}

fn run(command: Command, config: &AppConfig) -> Result<()> {
    // Invalid thresholds abort here instead of silently falling back to defaults
    let intelligence = IntelligenceConfig::load().map_err(AppError::from)?;
    let engine = RecommendationEngine::with_config(intelligence.recommendation_engine);

    match command {
        Command::Interactive { format } => {
            info!("Starting interactive questionnaire");
            commands::interactive::run(&engine, format.unwrap_or(config.output_format))
        }
        Command::Evaluate { input, format } => {
            commands::evaluate::run(&engine, &input, format.unwrap_or(config.output_format))
        }
        Command::Bmi {
            height,
            weight,
            format,
        } => commands::bmi::run(
            engine.config(),
            height,
            weight,
            format.unwrap_or(config.output_format),
        ),
        Command::Questions { step } => commands::questions::run(step),
    }
}
