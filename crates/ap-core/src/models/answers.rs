// ABOUTME: Accumulated answer record for one questionnaire session
// ABOUTME: Typed fields, derived BMI, field-by-field updates, and gating predicates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::choices::{ActivityStatus, CvRisk, FormChoice, Gender, SedentaryStatus, TargetActivity};
use super::question::{AnswerValue, Gate, Question};
use crate::constants::bmi::DECIMALS;
use crate::errors::{AppError, AppResult};
use crate::validation::{validate_age, validate_height, validate_weight};
use serde::{Deserialize, Serialize};

/// Answers collected for one patient during one session
///
/// Created with form defaults, updated one field at a time as the wizard
/// advances, and read once by the recommendation engine. Answers to gated
/// questions are kept when their parent becomes false; consumers decide
/// relevance through [`PatientAnswers::is_applicable`].
///
/// # Examples
///
/// ```rust
/// use ap_core::models::{Gender, PatientAnswers};
///
/// let mut answers = PatientAnswers::default();
/// answers.gender = Gender::Female;
/// answers.height_cm = Some(165.0);
/// answers.weight_kg = Some(60.0);
/// assert_eq!(answers.bmi(), Some(22.0));
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PatientAnswers {
    /// Nom (display only)
    pub name: String,
    /// Prénom (display only)
    pub surname: String,
    /// Age in years, unset until typed
    ///
    /// Kept signed and wide so that any integer in a saved record reaches
    /// [`PatientAnswers::validate`] and is reported as out of range.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<i64>,
    /// Gender
    pub gender: Gender,
    /// Height in centimetres, unset until typed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height_cm: Option<f64>,
    /// Weight in kilograms, unset until typed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight_kg: Option<f64>,
    /// Sedentary or not
    pub sedentary_status: SedentaryStatus,
    /// Currently active or inactive
    pub activity_status: ActivityStatus,
    /// Intensity the prescription aims for
    pub target_activity: TargetActivity,
    /// Symptoms suggestive of cardiovascular disease
    pub symptoms_present: bool,
    /// ESC cardiovascular risk band
    pub cv_risk: CvRisk,
    /// Personal cardiovascular disease (excluding controlled hypertension)
    pub personal_cv_history: bool,
    /// Sudden death before 50 in a first-degree relative
    pub sudden_death_family_history: bool,
    /// Hereditary cardiovascular disease in the family
    pub hereditary_cv_history: bool,
    /// Past cancer treated with cardiotoxic therapy
    pub cardiotoxic_treatment_history: bool,
    /// Disability
    pub disability: bool,
    /// Specialist or AP medical consultation within a year (gated by `disability`)
    pub specialist_consult_recent: bool,
    /// Situation at risk of musculoskeletal injury
    pub injury_risk: bool,
    /// Currently followed for cancer
    pub cancer_follow_up: bool,
    /// Ongoing pregnancy (women only)
    pub pregnancy: bool,
    /// Comorbidity during pregnancy (gated by `pregnancy`)
    pub comorbidity: bool,
    /// Obstetric complication (gated by `pregnancy`)
    pub obstetric_complication: bool,
    /// Chronic respiratory disease (COPD, asthma, interstitial lung disease)
    pub respiratory_disease: bool,
    /// Pulmonary function tests within a year (gated by `respiratory_disease`)
    pub efr_done_recent: bool,
    /// Severe stage (gated by `efr_done_recent`)
    pub severe_stage: bool,
    /// Walking test with continuous SpO2 within a year (gated by `severe_stage`)
    pub walking_test_done: bool,
    /// Lipid panel and creatinine within a year
    pub bio_checkup_recent: bool,
}

/// Compute a body mass index rounded to one decimal
///
/// Returns `None` unless both measurements are finite and strictly positive.
#[must_use]
pub fn rounded_bmi(height_cm: f64, weight_kg: f64) -> Option<f64> {
    if !(height_cm.is_finite() && weight_kg.is_finite() && height_cm > 0.0 && weight_kg > 0.0) {
        return None;
    }
    let height_m = height_cm / 100.0;
    let bmi = weight_kg / (height_m * height_m);
    // Precision formatting rounds the exact binary value, ties to even
    format!("{bmi:.DECIMALS$}").parse().ok()
}

impl PatientAnswers {
    /// Body mass index derived from the current height/weight pair
    ///
    /// Always consistent with the latest measurements; `None` until both are
    /// supplied.
    #[must_use]
    pub fn bmi(&self) -> Option<f64> {
        match (self.height_cm, self.weight_kg) {
            (Some(height_cm), Some(weight_kg)) => rounded_bmi(height_cm, weight_kg),
            _ => None,
        }
    }

    /// Whether a question is relevant given the other answers
    ///
    /// A gated question applies only if every ancestor applies and was
    /// answered yes. The pregnancy chain additionally requires a female
    /// patient.
    #[must_use]
    pub fn is_applicable(&self, question: Question) -> bool {
        match question.gate() {
            Gate::Always => true,
            Gate::FemaleOnly => self.gender == Gender::Female,
            Gate::Parent(parent) => {
                self.is_applicable(parent) && self.yes_no(parent).unwrap_or(false)
            }
        }
    }

    /// Answer to a yes/no question, taking gating into account
    ///
    /// Returns `Some(false)` for a gated question whose chain is not satisfied,
    /// whatever value is stored.
    #[must_use]
    pub fn relevant_yes_no(&self, question: Question) -> Option<bool> {
        self.yes_no(question)
            .map(|answer| answer && self.is_applicable(question))
    }

    /// Stored answer to a yes/no question, ignoring gating
    #[must_use]
    pub const fn yes_no(&self, question: Question) -> Option<bool> {
        let answer = match question {
            Question::SymptomsPresent => self.symptoms_present,
            Question::PersonalCvHistory => self.personal_cv_history,
            Question::SuddenDeathFamilyHistory => self.sudden_death_family_history,
            Question::HereditaryCvHistory => self.hereditary_cv_history,
            Question::CardiotoxicTreatmentHistory => self.cardiotoxic_treatment_history,
            Question::Disability => self.disability,
            Question::SpecialistConsultRecent => self.specialist_consult_recent,
            Question::InjuryRisk => self.injury_risk,
            Question::CancerFollowUp => self.cancer_follow_up,
            Question::Pregnancy => self.pregnancy,
            Question::Comorbidity => self.comorbidity,
            Question::ObstetricComplication => self.obstetric_complication,
            Question::RespiratoryDisease => self.respiratory_disease,
            Question::EfrDoneRecent => self.efr_done_recent,
            Question::SevereStage => self.severe_stage,
            Question::WalkingTestDone => self.walking_test_done,
            Question::BioCheckupRecent => self.bio_checkup_recent,
            Question::Name
            | Question::Surname
            | Question::Age
            | Question::Gender
            | Question::HeightCm
            | Question::WeightKg
            | Question::SedentaryStatus
            | Question::ActivityStatus
            | Question::TargetActivity
            | Question::CvRisk => return None,
        };
        Some(answer)
    }

    fn yes_no_slot(&mut self, question: Question) -> Option<&mut bool> {
        let slot = match question {
            Question::SymptomsPresent => &mut self.symptoms_present,
            Question::PersonalCvHistory => &mut self.personal_cv_history,
            Question::SuddenDeathFamilyHistory => &mut self.sudden_death_family_history,
            Question::HereditaryCvHistory => &mut self.hereditary_cv_history,
            Question::CardiotoxicTreatmentHistory => &mut self.cardiotoxic_treatment_history,
            Question::Disability => &mut self.disability,
            Question::SpecialistConsultRecent => &mut self.specialist_consult_recent,
            Question::InjuryRisk => &mut self.injury_risk,
            Question::CancerFollowUp => &mut self.cancer_follow_up,
            Question::Pregnancy => &mut self.pregnancy,
            Question::Comorbidity => &mut self.comorbidity,
            Question::ObstetricComplication => &mut self.obstetric_complication,
            Question::RespiratoryDisease => &mut self.respiratory_disease,
            Question::EfrDoneRecent => &mut self.efr_done_recent,
            Question::SevereStage => &mut self.severe_stage,
            Question::WalkingTestDone => &mut self.walking_test_done,
            Question::BioCheckupRecent => &mut self.bio_checkup_recent,
            _ => return None,
        };
        Some(slot)
    }

    /// Current value of a question, as the form would pre-fill it
    #[must_use]
    pub fn value(&self, question: Question) -> Option<AnswerValue> {
        match question {
            Question::Name => Some(AnswerValue::Text(self.name.clone())),
            Question::Surname => Some(AnswerValue::Text(self.surname.clone())),
            Question::Age => self.age.map(AnswerValue::Integer),
            Question::HeightCm => self.height_cm.map(AnswerValue::Number),
            Question::WeightKg => self.weight_kg.map(AnswerValue::Number),
            Question::Gender => Some(choice(self.gender)),
            Question::SedentaryStatus => Some(choice(self.sedentary_status)),
            Question::ActivityStatus => Some(choice(self.activity_status)),
            Question::TargetActivity => Some(choice(self.target_activity)),
            Question::CvRisk => Some(choice(self.cv_risk)),
            _ => self.yes_no(question).map(AnswerValue::YesNo),
        }
    }

    /// Store one answer, validating it against the question
    ///
    /// Integers are accepted where a decimal is expected. Gated questions
    /// can be written regardless of their gate; relevance is decided when
    /// the answers are read.
    ///
    /// # Errors
    ///
    /// - `ValueOutOfRange` for an age outside 0-120 or a non-positive height/weight
    /// - `InvalidInput` for an unknown choice label or a value of the wrong kind
    pub fn apply(&mut self, question: Question, value: AnswerValue) -> AppResult<()> {
        match (question, value) {
            (Question::Name, AnswerValue::Text(text)) => self.name = text,
            (Question::Surname, AnswerValue::Text(text)) => self.surname = text,
            (Question::Age, AnswerValue::Integer(age)) => self.age = Some(i64::from(validate_age(age)?)),
            (Question::HeightCm, AnswerValue::Number(height)) => {
                self.height_cm = Some(validate_height(height)?);
            }
            (Question::HeightCm, AnswerValue::Integer(height)) => {
                self.height_cm = Some(validate_height(height as f64)?);
            }
            (Question::WeightKg, AnswerValue::Number(weight)) => {
                self.weight_kg = Some(validate_weight(weight)?);
            }
            (Question::WeightKg, AnswerValue::Integer(weight)) => {
                self.weight_kg = Some(validate_weight(weight as f64)?);
            }
            (Question::Gender, AnswerValue::Choice(label)) => {
                self.gender = Gender::from_label(&label)?;
            }
            (Question::SedentaryStatus, AnswerValue::Choice(label)) => {
                self.sedentary_status = SedentaryStatus::from_label(&label)?;
            }
            (Question::ActivityStatus, AnswerValue::Choice(label)) => {
                self.activity_status = ActivityStatus::from_label(&label)?;
            }
            (Question::TargetActivity, AnswerValue::Choice(label)) => {
                self.target_activity = TargetActivity::from_label(&label)?;
            }
            (Question::CvRisk, AnswerValue::Choice(label)) => {
                self.cv_risk = CvRisk::from_label(&label)?;
            }
            (question, AnswerValue::YesNo(answer)) => {
                let slot = self.yes_no_slot(question).ok_or_else(|| {
                    AppError::invalid_input(format!(
                        "Question '{question}' expects {}",
                        question.kind()
                    ))
                })?;
                *slot = answer;
            }
            (question, other) => {
                return Err(AppError::invalid_input(format!(
                    "Question '{question}' expects {}, got '{other}'",
                    question.kind()
                )));
            }
        }
        Ok(())
    }

    /// Check the values a deserialized record may carry outside form control
    ///
    /// # Errors
    ///
    /// Returns the first validation error among age, height, and weight
    pub fn validate(&self) -> AppResult<()> {
        if let Some(age) = self.age {
            validate_age(age)?;
        }
        if let Some(height_cm) = self.height_cm {
            validate_height(height_cm)?;
        }
        if let Some(weight_kg) = self.weight_kg {
            validate_weight(weight_kg)?;
        }
        Ok(())
    }
}

fn choice<C: FormChoice>(selected: C) -> AnswerValue {
    AnswerValue::Choice(selected.label().to_owned())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::errors::ErrorCode;

    #[test]
    fn test_defaults_match_form() {
        let answers = PatientAnswers::default();
        assert_eq!(answers.gender, Gender::Male);
        assert_eq!(answers.sedentary_status, SedentaryStatus::Sedentary);
        assert_eq!(answers.activity_status, ActivityStatus::Inactive);
        assert_eq!(answers.target_activity, TargetActivity::LowOnly);
        assert_eq!(answers.cv_risk, CvRisk::Low);
        assert!(!answers.bio_checkup_recent);
        assert_eq!(answers.bmi(), None);
    }

    #[test]
    fn test_bmi_follows_latest_measurements() {
        let mut answers = PatientAnswers::default();
        answers.apply(Question::HeightCm, AnswerValue::Number(170.0)).unwrap();
        assert_eq!(answers.bmi(), None);
        answers.apply(Question::WeightKg, AnswerValue::Integer(70)).unwrap();
        assert_eq!(answers.bmi(), Some(24.2));
        answers.apply(Question::WeightKg, AnswerValue::Number(90.0)).unwrap();
        assert_eq!(answers.bmi(), Some(31.1));
    }

    #[test]
    fn test_rejected_value_leaves_field_untouched() {
        let mut answers = PatientAnswers::default();
        answers.apply(Question::Age, AnswerValue::Integer(40)).unwrap();
        let error = answers
            .apply(Question::Age, AnswerValue::Integer(121))
            .unwrap_err();
        assert_eq!(error.code, ErrorCode::ValueOutOfRange);
        assert_eq!(answers.age, Some(40));
    }

    #[test]
    fn test_wrong_kind_is_invalid_input() {
        let mut answers = PatientAnswers::default();
        let error = answers
            .apply(Question::Gender, AnswerValue::YesNo(true))
            .unwrap_err();
        assert_eq!(error.code, ErrorCode::InvalidInput);
        let error = answers
            .apply(Question::Disability, AnswerValue::Text("Oui".to_owned()))
            .unwrap_err();
        assert_eq!(error.code, ErrorCode::InvalidInput);
    }

    #[test]
    fn test_choice_labels_are_resolved() {
        let mut answers = PatientAnswers::default();
        answers
            .apply(Question::CvRisk, AnswerValue::Choice("Très élevé".to_owned()))
            .unwrap();
        assert_eq!(answers.cv_risk, CvRisk::VeryHigh);
        assert!(answers
            .apply(Question::CvRisk, AnswerValue::Choice("Extrême".to_owned()))
            .is_err());
    }

    #[test]
    fn test_respiratory_chain_gating() {
        let mut answers = PatientAnswers {
            efr_done_recent: true,
            severe_stage: true,
            walking_test_done: true,
            ..PatientAnswers::default()
        };
        assert!(!answers.is_applicable(Question::EfrDoneRecent));
        assert!(!answers.is_applicable(Question::WalkingTestDone));
        assert_eq!(answers.relevant_yes_no(Question::SevereStage), Some(false));

        answers.respiratory_disease = true;
        assert!(answers.is_applicable(Question::WalkingTestDone));
        assert_eq!(answers.relevant_yes_no(Question::SevereStage), Some(true));

        answers.efr_done_recent = false;
        assert!(answers.is_applicable(Question::SevereStage));
        assert!(!answers.is_applicable(Question::WalkingTestDone));
        assert!(answers.walking_test_done, "stored answer is preserved");
    }

    #[test]
    fn test_pregnancy_chain_requires_female() {
        let mut answers = PatientAnswers {
            pregnancy: true,
            comorbidity: true,
            ..PatientAnswers::default()
        };
        assert!(!answers.is_applicable(Question::Pregnancy));
        assert!(!answers.is_applicable(Question::Comorbidity));

        answers.gender = Gender::Female;
        assert!(answers.is_applicable(Question::Comorbidity));
        assert_eq!(answers.relevant_yes_no(Question::Comorbidity), Some(true));
    }

    #[test]
    fn test_value_reflects_stored_answers() {
        let answers = PatientAnswers {
            target_activity: TargetActivity::Moderate,
            injury_risk: true,
            ..PatientAnswers::default()
        };
        assert_eq!(
            answers.value(Question::TargetActivity),
            Some(AnswerValue::Choice("Modéré (3-5.9 METs)".to_owned()))
        );
        assert_eq!(answers.value(Question::InjuryRisk), Some(AnswerValue::YesNo(true)));
        assert_eq!(answers.value(Question::Age), None);
    }

    #[test]
    fn test_deserialize_partial_record() {
        let answers: PatientAnswers =
            serde_json::from_str(r#"{"gender": "Femme", "cv_risk": "high", "age": 30}"#).unwrap();
        assert_eq!(answers.gender, Gender::Female);
        assert_eq!(answers.cv_risk, CvRisk::High);
        assert_eq!(answers.age, Some(30));
        assert!(answers.validate().is_ok());
    }
}
