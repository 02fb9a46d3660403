// ABOUTME: Integration tests for the terminal questionnaire form
// ABOUTME: Drives complete sessions from scripted input and inspects prompts and results
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use ap_core::errors::ErrorCode;
use ap_core::models::Gender;
use ap_intelligence::advisories::respiratory;
use ap_intelligence::config::intelligence::BmiThresholds;
use ap_intelligence::{Category, RecommendationEngine, RecommendationEngineConfig};
use ap_prescription::{QuestionnaireSession, TerminalForm};
use std::io::Cursor;

fn engine() -> RecommendationEngine {
    RecommendationEngine::with_config(RecommendationEngineConfig::default())
}

fn script(lines: &[&str]) -> Cursor<String> {
    let mut text = lines.join("\n");
    text.push('\n');
    Cursor::new(text)
}

#[test]
fn test_complete_session_from_script() {
    let input = script(&[
        // Step 1: a non-numeric age is re-asked
        "Dupont", "Marie", "abc", "34", "2", "165", "60", "s",
        // Step 2
        "2", "2", "3", "s",
        // Step 3: defaults kept
        "", "", "", "", "", "", "s",
        // Step 4: pregnancy asked for a woman
        "non", "", "", "non", "s",
        // Step 5: EFR missing hides the rest of the chain
        "oui", "non", "oui", "g",
    ]);
    let mut session = QuestionnaireSession::new();
    let mut form = TerminalForm::new(input, Vec::new());

    let results = form.run(&mut session, &engine()).unwrap();
    let output = String::from_utf8(form.into_output()).unwrap();

    assert_eq!(results.get(Category::Respiratory), [respiratory::EFR_REQUIRED]);
    assert!(!results.contains(Category::Biology));
    assert!(!results.contains(Category::Cardiovascular));

    assert!(output.contains("Erreur : 'abc' n'est pas un entier"));
    assert!(output.contains("IMC : 22.0 kg/m² (Poids normal)"));
    assert!(output.contains("Étape 5/5 : Évaluation médicale"));
    assert!(output.contains("Progression : 100 %"));
    assert!(output.contains("Une grossesse est-elle en cours ?"));
    assert!(!output.contains("S'agit-il d'un stade sévère ?"));

    let answers = session.answers();
    assert_eq!(answers.name, "Dupont");
    assert_eq!(answers.age, Some(34));
    assert_eq!(answers.gender, Gender::Female);
    assert!(session.has_results());
}

#[test]
fn test_out_of_range_age_is_re_asked() {
    let input = script(&[
        "", "", "150", "-2", "70", "", "180", "72", "s",
        "", "", "", "s",
        "", "", "", "", "", "", "s",
        "", "", "", "s",
        "", "", "",
    ]);
    let mut session = QuestionnaireSession::new();
    let mut form = TerminalForm::new(input, Vec::new());

    form.run(&mut session, &engine()).unwrap();
    let output = String::from_utf8(form.into_output()).unwrap();

    assert_eq!(output.matches("Erreur").count(), 2);
    assert_eq!(session.answers().age, Some(70));
    assert_eq!(session.answers().bmi(), Some(22.2));
}

#[test]
fn test_navigation_back_and_invalid_choice() {
    let input = script(&[
        "Dupont", "Paul", "34", "", "165", "60", "x", "s",
        // Back from step 2, step 1 is asked again with its values kept
        "", "", "", "p",
        "", "", "", "", "", "", "s",
        "", "", "", "s",
        "", "", "", "", "", "", "s",
        "", "", "", "s",
        "", "", "",
    ]);
    let mut session = QuestionnaireSession::new();
    let mut form = TerminalForm::new(input, Vec::new());

    let results = form.run(&mut session, &engine()).unwrap();
    let output = String::from_utf8(form.into_output()).unwrap();

    assert!(output.contains("Choix invalide : 'x'"));
    assert_eq!(output.matches("Étape 1/5").count(), 2);
    assert!(!output.contains("Une grossesse est-elle en cours ?"));
    assert_eq!(session.answers().age, Some(34));
    assert!(results.contains(Category::Biology));
}

#[test]
fn test_blank_required_answer_is_re_asked() {
    let input = script(&["Dupont", "Marie", "", "34", "2", "165", "", "60"]);
    let mut session = QuestionnaireSession::new();
    let mut form = TerminalForm::new(input, Vec::new());

    // Input ends at the navigation prompt
    assert!(form.run(&mut session, &engine()).is_err());
    let output = String::from_utf8(form.into_output()).unwrap();

    assert!(output.contains("Erreur : Réponse requise : Âge (en années)"));
    assert!(output.contains("Erreur : Réponse requise : Poids (kg)"));
    assert_eq!(session.answers().age, Some(34));
    assert_eq!(session.answers().weight_kg, Some(60.0));
}

#[test]
fn test_end_of_input_before_submission() {
    let mut session = QuestionnaireSession::new();
    let mut form = TerminalForm::new(script(&["Dupont"]), Vec::new());

    let error = form.run(&mut session, &engine()).unwrap_err();
    assert_eq!(error.code, ErrorCode::IoError);
    assert_eq!(session.answers().name, "Dupont");
}

#[test]
fn test_step_one_bmi_uses_form_thresholds() {
    let thresholds = BmiThresholds {
        underweight_max: 23.0,
        ..BmiThresholds::default()
    };
    let input = script(&["Dupont", "Marie", "34", "2", "165", "60"]);
    let mut session = QuestionnaireSession::new();
    let mut form = TerminalForm::new(input, Vec::new()).with_thresholds(thresholds);

    // Input ends at the navigation prompt, after the BMI line
    assert!(form.run(&mut session, &engine()).is_err());
    let output = String::from_utf8(form.into_output()).unwrap();
    assert!(output.contains("IMC : 22.0 kg/m² (Insuffisance pondérale)"));
}
