// ABOUTME: Catalogue of every question asked by the five-step intake form
// ABOUTME: Owning step, gating parent, prompt text, and expected answer kind per question
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Question catalogue
//!
//! Each [`Question`] knows which wizard step owns it, which answer gates it,
//! the prompt the form shows, and the kind of value it expects. Gating is
//! expressed as data ([`Gate`]) so that both the wizard (to decide what to
//! show) and the recommendation engine (to decide what is relevant) evaluate
//! the same predicate, see [`super::PatientAnswers::is_applicable`].

use super::choices::{ActivityStatus, CvRisk, Gender, SedentaryStatus, TargetActivity};
use crate::constants::labels;
use crate::constants::limits::{MAX_AGE, MIN_AGE};
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A single field of the intake form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Question {
    /// Nom
    Name,
    /// Prénom
    Surname,
    /// Âge (en années)
    Age,
    /// Sexe
    Gender,
    /// Taille (cm)
    HeightCm,
    /// Poids (kg)
    WeightKg,
    /// Statut de sédentarité
    SedentaryStatus,
    /// Niveau actuel d'activité physique
    ActivityStatus,
    /// Niveau visé d'activité physique
    TargetActivity,
    /// Existe-t-il des symptômes ?
    SymptomsPresent,
    /// Niveau de risque CV (ESC)
    CvRisk,
    /// ATCD personnel de maladie CV
    PersonalCvHistory,
    /// ATCD de mort subite chez un apparenté au 1er degré
    SuddenDeathFamilyHistory,
    /// ATCD familial de maladie cardio-vasculaire héréditaire
    HereditaryCvHistory,
    /// ATCD de cancer avec traitement cardiotoxique
    CardiotoxicTreatmentHistory,
    /// Handicap
    Disability,
    /// Avis spécialisé depuis moins d'un an (gated by `Disability`)
    SpecialistConsultRecent,
    /// Risque de blessures musculosquelettiques
    InjuryRisk,
    /// Suivi pour un cancer
    CancerFollowUp,
    /// Grossesse en cours (women only)
    Pregnancy,
    /// Comorbidité (gated by `Pregnancy`)
    Comorbidity,
    /// Complication obstétricale (gated by `Pregnancy`)
    ObstetricComplication,
    /// Maladie respiratoire chronique
    RespiratoryDisease,
    /// EFR de moins d'un an (gated by `RespiratoryDisease`)
    EfrDoneRecent,
    /// Stade sévère (gated by `EfrDoneRecent`)
    SevereStage,
    /// Test de marche de moins d'un an (gated by `SevereStage`)
    WalkingTestDone,
    /// Bilan biologique de moins d'un an
    BioCheckupRecent,
}

/// Condition under which a question is asked and taken into account
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gate {
    /// Always asked
    Always,
    /// Asked only for female patients
    FemaleOnly,
    /// Asked only when the parent yes/no question was answered yes
    Parent(Question),
}

/// Kind of value a question expects
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerKind {
    /// Free text
    Text,
    /// Whole number within inclusive bounds
    Integer {
        /// Lower bound
        min: i64,
        /// Upper bound
        max: i64,
    },
    /// Strictly positive decimal number
    PositiveNumber,
    /// One label out of a fixed list
    Choice(&'static [&'static str]),
    /// Oui / Non
    YesNo,
}

impl fmt::Display for AnswerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => f.write_str("free text"),
            Self::Integer { min, max } => write!(f, "an integer between {min} and {max}"),
            Self::PositiveNumber => f.write_str("a positive number"),
            Self::Choice(choices) => write!(f, "one of: {}", choices.join(", ")),
            Self::YesNo => write!(f, "{} or {}", labels::YES, labels::NO),
        }
    }
}

/// A value supplied by the form for one question
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum AnswerValue {
    /// Free text
    Text(String),
    /// Whole number
    Integer(i64),
    /// Decimal number
    Number(f64),
    /// Label of a fixed choice
    Choice(String),
    /// Oui (true) / Non (false)
    YesNo(bool),
}

impl fmt::Display for AnswerValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) | Self::Choice(text) => f.write_str(text),
            Self::Integer(value) => write!(f, "{value}"),
            Self::Number(value) => write!(f, "{value}"),
            Self::YesNo(true) => f.write_str(labels::YES),
            Self::YesNo(false) => f.write_str(labels::NO),
        }
    }
}

impl AnswerValue {
    /// Parse raw text typed by the user into a value of the expected kind
    ///
    /// Decimal numbers accept a comma as separator. Choices accept the label,
    /// the variant identifier, or the 1-based position in the list.
    ///
    /// # Errors
    ///
    /// Returns `InvalidFormat` when the text is not a number where one is
    /// expected, and `InvalidInput` when it matches no choice.
    pub fn parse(kind: AnswerKind, raw: &str) -> AppResult<Self> {
        let trimmed = raw.trim();
        match kind {
            AnswerKind::Text => Ok(Self::Text(trimmed.to_owned())),
            AnswerKind::Integer { .. } => trimmed
                .parse::<i64>()
                .map(Self::Integer)
                .map_err(|_| AppError::invalid_format(format!("'{trimmed}' n'est pas un entier"))),
            AnswerKind::PositiveNumber => trimmed
                .replace(',', ".")
                .parse::<f64>()
                .map(Self::Number)
                .map_err(|_| AppError::invalid_format(format!("'{trimmed}' n'est pas un nombre"))),
            AnswerKind::Choice(choices) => {
                let by_position = trimmed
                    .parse::<usize>()
                    .ok()
                    .and_then(|position| position.checked_sub(1))
                    .and_then(|index| choices.get(index));
                Ok(Self::Choice(
                    by_position.map_or_else(|| trimmed.to_owned(), |label| (*label).to_owned()),
                ))
            }
            AnswerKind::YesNo => parse_yes_no(trimmed).map(Self::YesNo),
        }
    }
}

fn parse_yes_no(raw: &str) -> AppResult<bool> {
    match raw.to_lowercase().as_str() {
        "oui" | "o" | "yes" | "y" | "true" | "1" => Ok(true),
        "non" | "n" | "no" | "false" | "0" => Ok(false),
        _ => Err(AppError::invalid_input(format!(
            "'{raw}' n'est pas une réponse valide ({} / {})",
            labels::YES,
            labels::NO
        ))),
    }
}

impl Question {
    /// Every question, in the order the form asks them
    pub const ALL: [Self; 27] = [
        Self::Name,
        Self::Surname,
        Self::Age,
        Self::Gender,
        Self::HeightCm,
        Self::WeightKg,
        Self::SedentaryStatus,
        Self::ActivityStatus,
        Self::TargetActivity,
        Self::SymptomsPresent,
        Self::CvRisk,
        Self::PersonalCvHistory,
        Self::SuddenDeathFamilyHistory,
        Self::HereditaryCvHistory,
        Self::CardiotoxicTreatmentHistory,
        Self::Disability,
        Self::SpecialistConsultRecent,
        Self::InjuryRisk,
        Self::CancerFollowUp,
        Self::Pregnancy,
        Self::Comorbidity,
        Self::ObstetricComplication,
        Self::RespiratoryDisease,
        Self::EfrDoneRecent,
        Self::SevereStage,
        Self::WalkingTestDone,
        Self::BioCheckupRecent,
    ];

    /// Wizard step (1-5) that asks this question
    #[must_use]
    pub const fn step(self) -> u8 {
        match self {
            Self::Name
            | Self::Surname
            | Self::Age
            | Self::Gender
            | Self::HeightCm
            | Self::WeightKg => 1,
            Self::SedentaryStatus | Self::ActivityStatus | Self::TargetActivity => 2,
            Self::SymptomsPresent
            | Self::CvRisk
            | Self::PersonalCvHistory
            | Self::SuddenDeathFamilyHistory
            | Self::HereditaryCvHistory
            | Self::CardiotoxicTreatmentHistory => 3,
            Self::Disability
            | Self::SpecialistConsultRecent
            | Self::InjuryRisk
            | Self::CancerFollowUp
            | Self::Pregnancy
            | Self::Comorbidity
            | Self::ObstetricComplication => 4,
            Self::RespiratoryDisease
            | Self::EfrDoneRecent
            | Self::SevereStage
            | Self::WalkingTestDone
            | Self::BioCheckupRecent => 5,
        }
    }

    /// Questions owned by a step, in asking order
    #[must_use]
    pub fn for_step(step: u8) -> Vec<Self> {
        Self::ALL
            .iter()
            .copied()
            .filter(|question| question.step() == step)
            .collect()
    }

    /// Condition under which this question applies
    #[must_use]
    pub const fn gate(self) -> Gate {
        match self {
            Self::SpecialistConsultRecent => Gate::Parent(Self::Disability),
            Self::Pregnancy => Gate::FemaleOnly,
            Self::Comorbidity | Self::ObstetricComplication => Gate::Parent(Self::Pregnancy),
            Self::EfrDoneRecent => Gate::Parent(Self::RespiratoryDisease),
            Self::SevereStage => Gate::Parent(Self::EfrDoneRecent),
            Self::WalkingTestDone => Gate::Parent(Self::SevereStage),
            _ => Gate::Always,
        }
    }

    /// Kind of value this question expects
    #[must_use]
    pub fn kind(self) -> AnswerKind {
        match self {
            Self::Name | Self::Surname => AnswerKind::Text,
            Self::Age => AnswerKind::Integer {
                min: i64::from(MIN_AGE),
                max: i64::from(MAX_AGE),
            },
            Self::HeightCm | Self::WeightKg => AnswerKind::PositiveNumber,
            Self::Gender => AnswerKind::Choice(GENDER_LABELS),
            Self::SedentaryStatus => AnswerKind::Choice(SEDENTARY_LABELS),
            Self::ActivityStatus => AnswerKind::Choice(ACTIVITY_LABELS),
            Self::TargetActivity => AnswerKind::Choice(TARGET_LABELS),
            Self::CvRisk => AnswerKind::Choice(CV_RISK_LABELS),
            _ => AnswerKind::YesNo,
        }
    }

    /// Stable snake_case key, identical to the `PatientAnswers` field name
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Surname => "surname",
            Self::Age => "age",
            Self::Gender => "gender",
            Self::HeightCm => "height_cm",
            Self::WeightKg => "weight_kg",
            Self::SedentaryStatus => "sedentary_status",
            Self::ActivityStatus => "activity_status",
            Self::TargetActivity => "target_activity",
            Self::SymptomsPresent => "symptoms_present",
            Self::CvRisk => "cv_risk",
            Self::PersonalCvHistory => "personal_cv_history",
            Self::SuddenDeathFamilyHistory => "sudden_death_family_history",
            Self::HereditaryCvHistory => "hereditary_cv_history",
            Self::CardiotoxicTreatmentHistory => "cardiotoxic_treatment_history",
            Self::Disability => "disability",
            Self::SpecialistConsultRecent => "specialist_consult_recent",
            Self::InjuryRisk => "injury_risk",
            Self::CancerFollowUp => "cancer_follow_up",
            Self::Pregnancy => "pregnancy",
            Self::Comorbidity => "comorbidity",
            Self::ObstetricComplication => "obstetric_complication",
            Self::RespiratoryDisease => "respiratory_disease",
            Self::EfrDoneRecent => "efr_done_recent",
            Self::SevereStage => "severe_stage",
            Self::WalkingTestDone => "walking_test_done",
            Self::BioCheckupRecent => "bio_checkup_recent",
        }
    }

    /// Prompt displayed by the form
    #[must_use]
    pub const fn prompt(self) -> &'static str {
        match self {
            Self::Name => "Nom",
            Self::Surname => "Prénom",
            Self::Age => "Âge (en années)",
            Self::Gender => "Sexe",
            Self::HeightCm => "Taille (cm)",
            Self::WeightKg => "Poids (kg)",
            Self::SedentaryStatus => "Statut de sédentarité",
            Self::ActivityStatus => "Niveau actuel d'activité physique",
            Self::TargetActivity => "Niveau visé d'activité physique",
            Self::SymptomsPresent => "Existe-t-il des symptômes ?",
            Self::CvRisk => "Niveau de risque CV (ESC)",
            Self::PersonalCvHistory => "ATCD personnel de maladie CV (hors HTA équilibrée)",
            Self::SuddenDeathFamilyHistory => {
                "ATCD de mort subite à moins de 50 ans chez un membre de la fratrie au 1er degré"
            }
            Self::HereditaryCvHistory => "ATCD familial de maladie cardio-vasculaire héréditaire",
            Self::CardiotoxicTreatmentHistory => {
                "ATCD de cancer avec notion de traitement cardiotoxique"
            }
            Self::Disability => "La personne est-elle porteuse d'un handicap ?",
            Self::SpecialistConsultRecent => {
                "A-t-elle pu bénéficier d'un avis spécialisé et/ou d'une consultation médicale d'activité physique depuis moins d'un an ?"
            }
            Self::InjuryRisk => "Situation de risque de blessures musculosquelettiques",
            Self::CancerFollowUp => "Votre patient est-il actuellement suivi pour un cancer ?",
            Self::Pregnancy => "Une grossesse est-elle en cours ?",
            Self::Comorbidity => "Présence d'une comorbidité ?",
            Self::ObstetricComplication => "Présence d'une complication obstétricale ?",
            Self::RespiratoryDisease => {
                "La personne souffre-t-elle d'une maladie respiratoire chronique (BPCO, asthme, maladie pulmonaire interstitielle) ?"
            }
            Self::EfrDoneRecent => "Des EFR ont-elles été réalisées depuis moins d'un an ?",
            Self::SevereStage => "S'agit-il d'un stade sévère ?",
            Self::WalkingTestDone => {
                "La personne a-t-elle passé un test de marche avec mesure en continue de la saturation en O2 réalisé depuis moins d'un an ?"
            }
            Self::BioCheckupRecent => {
                "Le patient a-t-il eu un bilan biologique comprenant un bilan lipidique et une créatinine depuis moins d'un an ?"
            }
        }
    }
}

impl fmt::Display for Question {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Question {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|question| question.key() == s.trim())
            .ok_or_else(|| AppError::invalid_input(format!("Unknown question: '{s}'")))
    }
}

const GENDER_LABELS: &[&str] = &[Gender::Male.as_label(), Gender::Female.as_label()];
const SEDENTARY_LABELS: &[&str] = &[
    SedentaryStatus::Sedentary.as_label(),
    SedentaryStatus::NonSedentary.as_label(),
];
const ACTIVITY_LABELS: &[&str] = &[
    ActivityStatus::Inactive.as_label(),
    ActivityStatus::Active.as_label(),
];
const TARGET_LABELS: &[&str] = &[
    TargetActivity::LowOnly.as_label(),
    TargetActivity::Moderate.as_label(),
    TargetActivity::HighIntensity.as_label(),
];
const CV_RISK_LABELS: &[&str] = &[
    CvRisk::Low.as_label(),
    CvRisk::Moderate.as_label(),
    CvRisk::High.as_label(),
    CvRisk::VeryHigh.as_label(),
];
