// ABOUTME: Integration tests for the recommendation engine rule blocks
// ABOUTME: End-to-end patient scenarios, gating of stale answers, and JSON evaluation errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use ap_core::errors::ErrorCode;
use ap_core::models::{
    ActivityStatus, CvRisk, Gender, PatientAnswers, SedentaryStatus, TargetActivity,
};
use ap_intelligence::advisories::{activity, biology, cardiovascular, respiratory, special};
use ap_intelligence::{
    Category, RecommendationEngine, RecommendationEngineConfig, RecommendationEngineTrait,
};

fn engine() -> RecommendationEngine {
    RecommendationEngine::with_config(RecommendationEngineConfig::default())
}

/// Active 30-year-old woman with every prerequisite satisfied
fn healthy_female() -> PatientAnswers {
    PatientAnswers {
        name: "Martin".into(),
        surname: "Claire".into(),
        age: Some(30),
        gender: Gender::Female,
        height_cm: Some(165.0),
        weight_kg: Some(60.0),
        sedentary_status: SedentaryStatus::NonSedentary,
        activity_status: ActivityStatus::Active,
        target_activity: TargetActivity::HighIntensity,
        cv_risk: CvRisk::Low,
        bio_checkup_recent: true,
        ..PatientAnswers::default()
    }
}

#[test]
fn test_healthy_female_needs_no_clearance() {
    let set = engine().evaluate(&healthy_female());

    assert!(!set.contains(Category::Cardiovascular));
    assert!(!set.contains(Category::Respiratory));
    assert!(!set.contains(Category::Biology));
    assert!(!set.contains(Category::SpecialSituations));

    let bmi = set.get(Category::Bmi);
    assert_eq!(bmi.len(), 1);
    assert!(bmi[0].contains("22.0"));
    assert!(bmi[0].contains("Poids normal"));

    assert_eq!(set.get(Category::ActivityLevel), [activity::NO_SCREENING]);
}

#[test]
fn test_respiratory_chain_stops_at_missing_efr() {
    let answers = PatientAnswers {
        respiratory_disease: true,
        efr_done_recent: false,
        ..healthy_female()
    };
    let set = engine().evaluate(&answers);

    let advisories = set.get(Category::Respiratory);
    assert_eq!(advisories, [respiratory::EFR_REQUIRED]);
    assert!(!advisories[0].contains("sévère"));
    assert!(!advisories[0].contains("marche"));
}

#[test]
fn test_respiratory_chain_full_walk() {
    let mut answers = PatientAnswers {
        respiratory_disease: true,
        efr_done_recent: true,
        ..healthy_female()
    };
    assert_eq!(
        engine().evaluate(&answers).get(Category::Respiratory),
        [respiratory::NOT_SEVERE]
    );

    answers.severe_stage = true;
    assert_eq!(
        engine().evaluate(&answers).get(Category::Respiratory),
        [respiratory::WALKING_TEST_REQUIRED]
    );

    answers.walking_test_done = true;
    assert_eq!(
        engine().evaluate(&answers).get(Category::Respiratory),
        [respiratory::SUPERVISED_REHABILITATION]
    );
}

#[test]
fn test_stale_respiratory_answers_ignored_without_disease() {
    let answers = PatientAnswers {
        respiratory_disease: false,
        efr_done_recent: true,
        severe_stage: true,
        walking_test_done: false,
        ..healthy_female()
    };
    assert!(!engine().evaluate(&answers).contains(Category::Respiratory));
}

#[test]
fn test_pregnancy_chain_requires_female() {
    let pregnant = PatientAnswers {
        pregnancy: true,
        comorbidity: true,
        obstetric_complication: true,
        ..healthy_female()
    };
    assert_eq!(
        engine().evaluate(&pregnant).get(Category::SpecialSituations),
        [
            special::PREGNANCY,
            special::PREGNANCY_COMORBIDITY,
            special::OBSTETRIC_COMPLICATION
        ]
    );

    let male = PatientAnswers {
        gender: Gender::Male,
        ..pregnant
    };
    assert!(!engine()
        .evaluate(&male)
        .contains(Category::SpecialSituations));
}

#[test]
fn test_disability_depends_on_specialist_opinion() {
    let mut answers = PatientAnswers {
        disability: true,
        ..healthy_female()
    };
    assert_eq!(
        engine().evaluate(&answers).get(Category::SpecialSituations),
        [special::DISABILITY_CONSULT_NEEDED]
    );

    answers.specialist_consult_recent = true;
    assert_eq!(
        engine().evaluate(&answers).get(Category::SpecialSituations),
        [special::DISABILITY_ADAPT]
    );
}

#[test]
fn test_cardiovascular_escalates_to_highest_clearance() {
    let answers = PatientAnswers {
        cv_risk: CvRisk::Moderate,
        cardiotoxic_treatment_history: true,
        ..healthy_female()
    };
    let set = engine().evaluate(&answers);

    assert_eq!(
        set.get(Category::Cardiovascular),
        [
            cardiovascular::CARDIOTOXIC,
            cardiovascular::RISK_MODERATE,
            cardiovascular::CONCLUSION_CARDIOLOGY
        ]
    );
}

#[test]
fn test_cardiovascular_risk_alone() {
    let answers = PatientAnswers {
        cv_risk: CvRisk::High,
        ..healthy_female()
    };
    assert_eq!(
        engine().evaluate(&answers).get(Category::Cardiovascular),
        [cardiovascular::RISK_HIGH, cardiovascular::CONCLUSION_STRESS_TEST]
    );
}

#[test]
fn test_sedentary_inactive_vigorous_target_needs_stress_test() {
    let answers = PatientAnswers {
        sedentary_status: SedentaryStatus::Sedentary,
        activity_status: ActivityStatus::Inactive,
        ..healthy_female()
    };
    assert_eq!(
        engine().evaluate(&answers).get(Category::ActivityLevel),
        [activity::STRESS_TEST]
    );
}

#[test]
fn test_senior_gets_balance_advice() {
    let answers = PatientAnswers {
        age: Some(72),
        ..healthy_female()
    };
    let advisories = engine().evaluate(&answers).get(Category::ActivityLevel).to_vec();
    assert_eq!(advisories.len(), 2);
    assert!(advisories[1].starts_with("Patient de 72 ans"));
}

#[test]
fn test_defaults_ask_for_biology_and_skip_bmi() {
    let set = engine().evaluate(&PatientAnswers::default());
    assert!(!set.contains(Category::Bmi));
    assert_eq!(set.get(Category::Biology), [biology::CHECKUP_REQUIRED]);
}

#[test]
fn test_evaluation_is_idempotent() {
    let answers = PatientAnswers {
        disability: true,
        respiratory_disease: true,
        cv_risk: CvRisk::VeryHigh,
        ..healthy_female()
    };
    let engine = engine();
    assert_eq!(engine.evaluate(&answers), engine.evaluate(&answers));
}

#[test]
fn test_evaluate_json_accepts_labels_and_identifiers() {
    let json = r#"{
        "age": 45,
        "gender": "Femme",
        "height_cm": 170,
        "weight_kg": 70,
        "sedentary_status": "non_sedentary",
        "cv_risk": "Élevé",
        "bio_checkup_recent": true
    }"#;
    let set = engine().evaluate_json(json).unwrap();
    assert!(set.get(Category::Bmi)[0].contains("24.2"));
    assert!(set.contains(Category::Cardiovascular));
}

#[test]
fn test_evaluate_json_errors() {
    let malformed = engine().evaluate_json("{ not json").unwrap_err();
    assert_eq!(malformed.code, ErrorCode::InvalidFormat);

    let unknown_label = engine()
        .evaluate_json(r#"{"cv_risk": "Extrême"}"#)
        .unwrap_err();
    assert_eq!(unknown_label.code, ErrorCode::InvalidInput);

    for record in [r#"{"weight_kg": -3.0}"#, r#"{"age": -1}"#, r#"{"age": 300}"#] {
        let out_of_range = engine().evaluate_json(record).unwrap_err();
        assert_eq!(out_of_range.code, ErrorCode::ValueOutOfRange, "{record}");
    }
}
