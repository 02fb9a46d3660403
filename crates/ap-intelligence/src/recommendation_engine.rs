// ABOUTME: Physical activity prescription engine deriving advisories from intake answers
// ABOUTME: Independent rule blocks for BMI, activity level, cardiovascular risk, special situations, respiratory, and biology
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Prescription recommendation engine
//!
//! Each rule block reads only the answers relevant to its category and
//! returns its advisories in order. Blocks share no state, so evaluation is
//! a pure function of the answers and the engine configuration.

use crate::advisories::{activity, biology, cardiovascular, respiratory, special};
use crate::algorithms::BmiCategory;
use crate::config::intelligence::{IntelligenceConfig, RecommendationEngineConfig};
use crate::recommendation_set::{Category, RecommendationSet};
use ap_core::errors::AppResult;
use ap_core::models::{
    ActivityStatus, CvRisk, PatientAnswers, Question, SedentaryStatus, TargetActivity,
};
use serde::{Deserialize, Serialize};
use std::iter;
use tracing::{debug, info};

/// Trait for deriving prescription advisories from a patient record
pub trait RecommendationEngineTrait {
    /// Derive the advisories for a complete answer record
    ///
    /// Total: unset age, height, or weight only remove the advisories that
    /// depend on them.
    fn evaluate(&self, answers: &PatientAnswers) -> RecommendationSet;

    /// Parse a JSON answer record, check it, and evaluate it
    ///
    /// Missing fields take the form defaults.
    ///
    /// # Errors
    ///
    /// - `InvalidInput` if a categorical field holds an unknown label
    /// - `InvalidFormat` if the document is not valid JSON
    /// - `ValueOutOfRange` if age, height, or weight is out of range
    fn evaluate_json(&self, input: &str) -> AppResult<RecommendationSet> {
        let answers: PatientAnswers = serde_json::from_str(input)?;
        answers.validate()?;
        Ok(self.evaluate(&answers))
    }
}

/// Screening advised before reaching the target intensity, mildest first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScreeningLevel {
    /// Target reachable without prior screening
    None,
    /// Start light and build up
    ProgressiveStart,
    /// Resting ECG first
    RestingEcg,
    /// Exercise stress test first
    StressTest,
}

impl ScreeningLevel {
    /// Cross-table of current habits against the target intensity
    ///
    /// The more sedentary and inactive the patient and the higher the
    /// target, the more screening is advised.
    #[must_use]
    pub const fn assess(
        sedentary: SedentaryStatus,
        activity: ActivityStatus,
        target: TargetActivity,
    ) -> Self {
        let sedentary = matches!(sedentary, SedentaryStatus::Sedentary);
        let inactive = matches!(activity, ActivityStatus::Inactive);
        match target {
            TargetActivity::LowOnly => Self::None,
            TargetActivity::Moderate if inactive => Self::ProgressiveStart,
            TargetActivity::Moderate => Self::None,
            TargetActivity::HighIntensity => match (sedentary, inactive) {
                (false, false) => Self::None,
                (true, true) => Self::StressTest,
                _ => Self::RestingEcg,
            },
        }
    }

    const fn advisory(self) -> &'static str {
        match self {
            Self::None => activity::NO_SCREENING,
            Self::ProgressiveStart => activity::PROGRESSIVE_START,
            Self::RestingEcg => activity::RESTING_ECG,
            Self::StressTest => activity::STRESS_TEST,
        }
    }
}

/// Cardiovascular requirement before starting, mildest first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardiovascularClearance {
    /// Resting ECG
    RestingEcg,
    /// Medical consultation with exercise stress test
    StressTest,
    /// Cardiology clearance
    Cardiology,
}

impl CardiovascularClearance {
    const fn conclusion(self) -> &'static str {
        match self {
            Self::RestingEcg => cardiovascular::CONCLUSION_RESTING_ECG,
            Self::StressTest => cardiovascular::CONCLUSION_STRESS_TEST,
            Self::Cardiology => cardiovascular::CONCLUSION_CARDIOLOGY,
        }
    }
}

/// Rule-table recommendation engine
#[derive(Debug, Clone)]
pub struct RecommendationEngine {
    config: RecommendationEngineConfig,
}

impl Default for RecommendationEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl RecommendationEngine {
    /// Create an engine using the process-wide configuration
    #[must_use]
    pub fn new() -> Self {
        let global_config = IntelligenceConfig::global();
        Self {
            config: global_config.recommendation_engine.clone(),
        }
    }

    /// Create with custom configuration
    #[must_use]
    pub const fn with_config(config: RecommendationEngineConfig) -> Self {
        Self { config }
    }

    /// Configuration in use
    #[must_use]
    pub const fn config(&self) -> &RecommendationEngineConfig {
        &self.config
    }

    /// BMI line with its category and guidance; nothing while BMI is undefined
    fn bmi_advisories(&self, answers: &PatientAnswers) -> Vec<String> {
        let Some(bmi) = answers.bmi() else {
            debug!("BMI undefined, skipping BMI advisory");
            return Vec::new();
        };
        let category = BmiCategory::classify(bmi, &self.config.thresholds);
        let messages = &self.config.messages;
        let guidance = match category {
            BmiCategory::Underweight => &messages.underweight,
            BmiCategory::Normal => &messages.normal,
            BmiCategory::Overweight => &messages.overweight,
            BmiCategory::Obesity => &messages.obesity,
        };
        debug!(bmi, category = %category, "BMI classified");
        vec![format!("IMC : {bmi:.1} kg/m² ({category}). {guidance}")]
    }

    fn activity_advisories(&self, answers: &PatientAnswers) -> Vec<String> {
        let level = ScreeningLevel::assess(
            answers.sedentary_status,
            answers.activity_status,
            answers.target_activity,
        );
        debug!(?level, "Activity screening level");

        let mut advisories = vec![level.advisory().to_owned()];
        if let Some(age) = answers
            .age
            .filter(|age| *age >= i64::from(self.config.age.senior_age))
        {
            advisories.push(format!(
                "Patient de {age} ans : {}",
                activity::SENIOR_BALANCE
            ));
        }
        advisories
    }

    /// One advisory per trigger, then a conclusion naming the highest requirement
    fn cardiovascular_advisories(answers: &PatientAnswers) -> Vec<String> {
        let antecedents = [
            (
                answers.symptoms_present,
                cardiovascular::SYMPTOMS,
                CardiovascularClearance::Cardiology,
            ),
            (
                answers.personal_cv_history,
                cardiovascular::PERSONAL_HISTORY,
                CardiovascularClearance::Cardiology,
            ),
            (
                answers.sudden_death_family_history,
                cardiovascular::SUDDEN_DEATH_FAMILY,
                CardiovascularClearance::Cardiology,
            ),
            (
                answers.hereditary_cv_history,
                cardiovascular::HEREDITARY,
                CardiovascularClearance::Cardiology,
            ),
            (
                answers.cardiotoxic_treatment_history,
                cardiovascular::CARDIOTOXIC,
                CardiovascularClearance::Cardiology,
            ),
        ];
        let risk = match answers.cv_risk {
            CvRisk::Low => None,
            CvRisk::Moderate => Some((
                cardiovascular::RISK_MODERATE,
                CardiovascularClearance::RestingEcg,
            )),
            CvRisk::High => Some((
                cardiovascular::RISK_HIGH,
                CardiovascularClearance::StressTest,
            )),
            CvRisk::VeryHigh => Some((
                cardiovascular::RISK_VERY_HIGH,
                CardiovascularClearance::Cardiology,
            )),
        };

        let triggered: Vec<(&str, CardiovascularClearance)> = antecedents
            .into_iter()
            .filter(|(present, _, _)| *present)
            .map(|(_, advisory, clearance)| (advisory, clearance))
            .chain(risk)
            .collect();

        let Some(highest) = triggered.iter().map(|(_, clearance)| *clearance).max() else {
            debug!("No cardiovascular trigger");
            return Vec::new();
        };
        debug!(triggers = triggered.len(), ?highest, "Cardiovascular escalation");

        triggered
            .iter()
            .map(|(advisory, _)| *advisory)
            .chain(iter::once(highest.conclusion()))
            .map(str::to_owned)
            .collect()
    }

    fn special_situation_advisories(answers: &PatientAnswers) -> Vec<&'static str> {
        let mut advisories = Vec::new();

        if answers.disability {
            if answers.relevant_yes_no(Question::SpecialistConsultRecent) == Some(true) {
                advisories.push(special::DISABILITY_ADAPT);
            } else {
                advisories.push(special::DISABILITY_CONSULT_NEEDED);
            }
        }
        if answers.injury_risk {
            advisories.push(special::INJURY_RISK);
        }
        if answers.cancer_follow_up {
            advisories.push(special::CANCER_FOLLOW_UP);
        }
        if answers.relevant_yes_no(Question::Pregnancy) == Some(true) {
            advisories.push(special::PREGNANCY);
            if answers.relevant_yes_no(Question::Comorbidity) == Some(true) {
                advisories.push(special::PREGNANCY_COMORBIDITY);
            }
            if answers.relevant_yes_no(Question::ObstetricComplication) == Some(true) {
                advisories.push(special::OBSTETRIC_COMPLICATION);
            }
        }

        debug!(count = advisories.len(), "Special situations evaluated");
        advisories
    }

    /// Walks the disease, EFR, severity, walking test chain and stops at the first unmet test
    fn respiratory_advisories(answers: &PatientAnswers) -> Vec<&'static str> {
        let advisory = if !answers.respiratory_disease {
            None
        } else if answers.relevant_yes_no(Question::EfrDoneRecent) != Some(true) {
            Some(respiratory::EFR_REQUIRED)
        } else if answers.relevant_yes_no(Question::SevereStage) != Some(true) {
            Some(respiratory::NOT_SEVERE)
        } else if answers.relevant_yes_no(Question::WalkingTestDone) != Some(true) {
            Some(respiratory::WALKING_TEST_REQUIRED)
        } else {
            Some(respiratory::SUPERVISED_REHABILITATION)
        };
        debug!(?advisory, "Respiratory chain evaluated");
        advisory.into_iter().collect()
    }

    fn biology_advisories(answers: &PatientAnswers) -> Option<&'static str> {
        (!answers.bio_checkup_recent).then_some(biology::CHECKUP_REQUIRED)
    }
}

impl RecommendationEngineTrait for RecommendationEngine {
    fn evaluate(&self, answers: &PatientAnswers) -> RecommendationSet {
        let mut set = RecommendationSet::new();

        set.push_all(Category::Bmi, self.bmi_advisories(answers));
        set.push_all(Category::ActivityLevel, self.activity_advisories(answers));
        set.push_all(
            Category::Cardiovascular,
            Self::cardiovascular_advisories(answers),
        );
        set.push_all(
            Category::SpecialSituations,
            Self::special_situation_advisories(answers),
        );
        set.push_all(Category::Respiratory, Self::respiratory_advisories(answers));
        set.push_all(Category::Biology, Self::biology_advisories(answers));

        info!(
            categories = set.categories().count(),
            advisories = set.advisory_count(),
            "Prescription recommendations generated"
        );
        set
    }
}
