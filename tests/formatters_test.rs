// ABOUTME: Integration tests for prescription report rendering
// ABOUTME: Text layout with dated header and bullets, JSON structure, and format parsing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use ap_core::models::PatientAnswers;
use ap_intelligence::config::intelligence::BmiThresholds;
use ap_intelligence::{Category, RecommendationSet};
use ap_prescription::formatters::{format_report, OutputFormat, PrescriptionReport, BULLET};
use chrono::NaiveDate;
use serde_json::Value;

fn report() -> PrescriptionReport {
    let answers = PatientAnswers {
        name: "Durand".into(),
        surname: "Léa".into(),
        height_cm: Some(170.0),
        weight_kg: Some(70.0),
        ..PatientAnswers::default()
    };
    let mut recommendations = RecommendationSet::new();
    recommendations.push(Category::Respiratory, "Réaliser des EFR.");
    recommendations.push(Category::Bmi, "IMC normal.");
    let date = NaiveDate::from_ymd_opt(2024, 3, 7).unwrap();
    PrescriptionReport::new(&answers, recommendations, &BmiThresholds::default(), date)
}

#[test]
fn test_text_report_layout() {
    let output = format_report(&report(), OutputFormat::Text).unwrap();
    let text = output.data;

    assert!(text.contains("Nom: Durand"));
    assert!(text.contains("Prénom: Léa"));
    assert!(text.contains("Date: 07/03/2024"));
    assert!(text.contains("IMC: 24.2 kg/m² (Poids normal)"));
    assert!(text.contains(&format!("{BULLET}Réaliser des EFR.")));

    // Categories follow their fixed order, not insertion order
    let bmi = text.find("\nIMC\n").unwrap();
    let respiratory = text.find("\nRespiratoire\n").unwrap();
    assert!(bmi < respiratory);
    assert!(!text.contains("Bilan biologique"));
}

#[test]
fn test_text_report_without_measurements() {
    let report = PrescriptionReport::new(
        &PatientAnswers::default(),
        RecommendationSet::new(),
        &BmiThresholds::default(),
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
    );
    let text = report.render_text();
    assert!(!text.contains("IMC:"));
    assert!(text.contains("Aucune recommandation particulière."));
}

#[test]
fn test_report_category_uses_given_thresholds() {
    let answers = PatientAnswers {
        height_cm: Some(170.0),
        weight_kg: Some(70.0),
        ..PatientAnswers::default()
    };
    let thresholds = BmiThresholds {
        normal_max: 23.0,
        ..BmiThresholds::default()
    };
    let report = PrescriptionReport::new(
        &answers,
        RecommendationSet::new(),
        &thresholds,
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
    );

    assert_eq!(report.bmi_category, Some("Surpoids"));
    assert!(report.render_text().contains("IMC: 24.2 kg/m² (Surpoids)"));
}

#[test]
fn test_json_report_structure() {
    let output = format_report(&report(), OutputFormat::Json).unwrap();
    assert_eq!(output.content_type, "application/json");

    let document: Value = serde_json::from_str(&output.data).unwrap();
    assert_eq!(document["name"], "Durand");
    assert_eq!(document["date"], "07/03/2024");
    assert_eq!(document["bmi"], 24.2);
    assert_eq!(document["bmi_category"], "Poids normal");
    assert_eq!(document["recommendations"]["Respiratoire"][0], "Réaliser des EFR.");
}

#[test]
fn test_output_format_parsing() {
    assert_eq!(OutputFormat::from_str_param("JSON"), OutputFormat::Json);
    assert_eq!(OutputFormat::from_str_param(" json "), OutputFormat::Json);
    assert_eq!(OutputFormat::from_str_param("yaml"), OutputFormat::Text);
    assert_eq!(OutputFormat::default().to_string(), "text");
}
