// ABOUTME: Prescription report rendering to plain text or JSON
// ABOUTME: Patient header, date, BMI, and bulleted advisories per non-empty category
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Report Output Layer
//!
//! ## Supported Formats
//!
//! - **Text**: default, the printable layout of the questionnaire
//! - **JSON**: the same report as a structured document
//!
//! ## Usage
//!
//! ```rust
//! use ap_core::models::PatientAnswers;
//! use ap_intelligence::{RecommendationEngine, RecommendationEngineTrait};
//! use ap_prescription::formatters::{format_report, OutputFormat, PrescriptionReport};
//!
//! let answers = PatientAnswers::default();
//! let engine = RecommendationEngine::new();
//! let recommendations = engine.evaluate(&answers);
//! let report = PrescriptionReport::today(&answers, recommendations, &engine.config().thresholds);
//! let output = format_report(&report, OutputFormat::Text)?;
//! assert!(output.data.contains("Recommandations"));
//! # Ok::<(), ap_core::errors::AppError>(())
//! ```

use ap_core::errors::AppResult;
use ap_core::models::PatientAnswers;
use ap_intelligence::config::intelligence::BmiThresholds;
use ap_intelligence::{BmiCategory, RecommendationSet};
use chrono::{Local, NaiveDate};
use clap::ValueEnum;
use serde::{Serialize, Serializer};
use std::fmt::{self, Write};

/// Date layout used on the printed report
pub const REPORT_DATE_FORMAT: &str = "%d/%m/%Y";

/// Report title, as printed at the top of the questionnaire
pub const REPORT_TITLE: &str = "Questionnaire Médical pour la Prescription d'AP";

/// Bullet prefixed to every advisory
pub const BULLET: &str = "• ";

/// Output serialization format selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Printable text (default)
    #[default]
    Text,
    /// JSON document
    Json,
}

impl OutputFormat {
    /// Parse format from string parameter (case-insensitive)
    /// Returns `Text` for unrecognized values
    #[must_use]
    pub fn from_str_param(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "json" => Self::Json,
            _ => Self::Text,
        }
    }

    /// Get the MIME content type for this format
    #[must_use]
    pub const fn content_type(&self) -> &'static str {
        match self {
            Self::Text => "text/plain; charset=utf-8",
            Self::Json => "application/json",
        }
    }

    /// Get the format name as a string
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Json => "json",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Formatted output containing the serialized data and metadata
#[derive(Debug, Clone)]
pub struct FormattedOutput {
    /// The serialized data as a string
    pub data: String,
    /// The format used for serialization
    pub format: OutputFormat,
    /// The MIME content type
    pub content_type: &'static str,
}

/// Everything printed once the questionnaire is submitted
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PrescriptionReport {
    /// Nom
    pub name: String,
    /// Prénom
    pub surname: String,
    /// Report date, serialized as dd/mm/YYYY
    #[serde(serialize_with = "serialize_report_date")]
    pub date: NaiveDate,
    /// BMI, when height and weight were supplied
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bmi: Option<f64>,
    /// French BMI category label
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bmi_category: Option<&'static str>,
    /// Advisories by category
    pub recommendations: RecommendationSet,
}

fn serialize_report_date<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(&date.format(REPORT_DATE_FORMAT))
}

impl PrescriptionReport {
    /// Build a report dated `date`
    ///
    /// The BMI category is classified with `thresholds`, which should be the
    /// ones the engine used for `recommendations`.
    #[must_use]
    pub fn new(
        answers: &PatientAnswers,
        recommendations: RecommendationSet,
        thresholds: &BmiThresholds,
        date: NaiveDate,
    ) -> Self {
        let bmi = answers.bmi();
        Self {
            name: answers.name.clone(),
            surname: answers.surname.clone(),
            date,
            bmi,
            bmi_category: bmi.map(|bmi| BmiCategory::classify(bmi, thresholds).label()),
            recommendations,
        }
    }

    /// Build a report dated today (local time)
    #[must_use]
    pub fn today(
        answers: &PatientAnswers,
        recommendations: RecommendationSet,
        thresholds: &BmiThresholds,
    ) -> Self {
        Self::new(answers, recommendations, thresholds, Local::now().date_naive())
    }

    /// Printable layout
    #[must_use]
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        // Writing to a String cannot fail
        let _ = self.write_text(&mut out);
        out
    }

    fn write_text(&self, out: &mut String) -> fmt::Result {
        writeln!(out, "{REPORT_TITLE}")?;
        writeln!(out)?;
        writeln!(out, "Informations du patient")?;
        writeln!(out, "Nom: {}", self.name)?;
        writeln!(out, "Prénom: {}", self.surname)?;
        writeln!(out, "Date: {}", self.date.format(REPORT_DATE_FORMAT))?;
        if let (Some(bmi), Some(category)) = (self.bmi, self.bmi_category) {
            writeln!(out, "IMC: {bmi:.1} kg/m² ({category})")?;
        }
        writeln!(out)?;
        writeln!(out, "Recommandations")?;
        if self.recommendations.is_empty() {
            writeln!(out, "Aucune recommandation particulière.")?;
        }
        for (category, advisories) in self.recommendations.entries() {
            writeln!(out)?;
            writeln!(out, "{category}")?;
            for advisory in advisories {
                writeln!(out, "{BULLET}{advisory}")?;
            }
        }
        Ok(())
    }
}

/// Render a report in the requested format
///
/// # Errors
///
/// Returns a serialization error if JSON encoding fails
pub fn format_report(report: &PrescriptionReport, format: OutputFormat) -> AppResult<FormattedOutput> {
    let data = match format {
        OutputFormat::Text => report.render_text(),
        OutputFormat::Json => serde_json::to_string_pretty(report)?,
    };

    Ok(FormattedOutput {
        data,
        format,
        content_type: format.content_type(),
    })
}
