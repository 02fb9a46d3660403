// ABOUTME: Categorical answers offered by the intake form as fixed choices
// ABOUTME: Gender, sedentary status, activity status, target intensity, and ESC cardiovascular risk
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A categorical answer picked from a fixed list of labels
///
/// Labels are the exact strings the form displays. Parsing also accepts the
/// snake_case identifier of each variant so that machine-written input does
/// not have to carry accented labels.
pub trait FormChoice: Sized + Copy + 'static {
    /// Every variant, in the order the form lists them
    const ALL: &'static [Self];

    /// Label displayed by the form
    fn label(self) -> &'static str;

    /// Stable snake_case identifier
    fn identifier(self) -> &'static str;

    /// Labels of every variant, in display order
    #[must_use]
    fn labels() -> Vec<&'static str> {
        Self::ALL.iter().map(|choice| choice.label()).collect()
    }

    /// Resolve a label or identifier to a variant
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the value matches no variant
    fn from_label(value: &str) -> AppResult<Self> {
        let trimmed = value.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|choice| {
                choice.label() == trimmed || choice.identifier().eq_ignore_ascii_case(trimmed)
            })
            .ok_or_else(|| {
                AppError::invalid_input(format!(
                    "'{trimmed}' n'est pas une réponse valide (choix possibles : {})",
                    Self::labels().join(", ")
                ))
            })
    }
}

/// Patient gender as collected by the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Gender {
    /// Homme
    #[default]
    #[serde(rename = "Homme", alias = "male")]
    Male,
    /// Femme
    #[serde(rename = "Femme", alias = "female")]
    Female,
}

impl Gender {
    /// Label displayed by the form, usable in constant position
    #[must_use]
    pub const fn as_label(self) -> &'static str {
        match self {
            Self::Male => "Homme",
            Self::Female => "Femme",
        }
    }
}

impl FormChoice for Gender {
    const ALL: &'static [Self] = &[Self::Male, Self::Female];

    fn label(self) -> &'static str {
        self.as_label()
    }

    fn identifier(self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
        }
    }
}

/// Whether the patient's daily life is sedentary (long sitting periods)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SedentaryStatus {
    /// Sédentaire
    #[default]
    #[serde(rename = "Sédentaire", alias = "sedentary")]
    Sedentary,
    /// Non sédentaire
    #[serde(rename = "Non sédentaire", alias = "non_sedentary")]
    NonSedentary,
}

impl SedentaryStatus {
    /// Label displayed by the form, usable in constant position
    #[must_use]
    pub const fn as_label(self) -> &'static str {
        match self {
            Self::Sedentary => "Sédentaire",
            Self::NonSedentary => "Non sédentaire",
        }
    }
}

impl FormChoice for SedentaryStatus {
    const ALL: &'static [Self] = &[Self::Sedentary, Self::NonSedentary];

    fn label(self) -> &'static str {
        self.as_label()
    }

    fn identifier(self) -> &'static str {
        match self {
            Self::Sedentary => "sedentary",
            Self::NonSedentary => "non_sedentary",
        }
    }
}

/// Whether the patient currently meets physical activity recommendations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ActivityStatus {
    /// Inactif
    #[default]
    #[serde(rename = "Inactif", alias = "inactive")]
    Inactive,
    /// Actif
    #[serde(rename = "Actif", alias = "active")]
    Active,
}

impl ActivityStatus {
    /// Label displayed by the form, usable in constant position
    #[must_use]
    pub const fn as_label(self) -> &'static str {
        match self {
            Self::Inactive => "Inactif",
            Self::Active => "Actif",
        }
    }
}

impl FormChoice for ActivityStatus {
    const ALL: &'static [Self] = &[Self::Inactive, Self::Active];

    fn label(self) -> &'static str {
        self.as_label()
    }

    fn identifier(self) -> &'static str {
        match self {
            Self::Inactive => "inactive",
            Self::Active => "active",
        }
    }
}

/// Intensity the prescription aims for, ordered from lightest to hardest
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
pub enum TargetActivity {
    /// Light intensity only (< 3 METs)
    #[default]
    #[serde(rename = "Faible exclusivement", alias = "low_only")]
    LowOnly,
    /// Moderate intensity (3 to 5.9 METs)
    #[serde(rename = "Modéré (3-5.9 METs)", alias = "moderate")]
    Moderate,
    /// Vigorous or very vigorous intensity (6 METs and above)
    #[serde(rename = "Intense ou très intense (≥ 6 METs)", alias = "high_intensity")]
    HighIntensity,
}

impl TargetActivity {
    /// Label displayed by the form, usable in constant position
    #[must_use]
    pub const fn as_label(self) -> &'static str {
        match self {
            Self::LowOnly => "Faible exclusivement",
            Self::Moderate => "Modéré (3-5.9 METs)",
            Self::HighIntensity => "Intense ou très intense (≥ 6 METs)",
        }
    }
}

impl FormChoice for TargetActivity {
    const ALL: &'static [Self] = &[Self::LowOnly, Self::Moderate, Self::HighIntensity];

    fn label(self) -> &'static str {
        self.as_label()
    }

    fn identifier(self) -> &'static str {
        match self {
            Self::LowOnly => "low_only",
            Self::Moderate => "moderate",
            Self::HighIntensity => "high_intensity",
        }
    }
}

/// ESC cardiovascular risk band, ordered from lowest to highest
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
pub enum CvRisk {
    /// Faible
    #[default]
    #[serde(rename = "Faible", alias = "low")]
    Low,
    /// Modéré
    #[serde(rename = "Modéré", alias = "moderate")]
    Moderate,
    /// Élevé
    #[serde(rename = "Élevé", alias = "high")]
    High,
    /// Très élevé
    #[serde(rename = "Très élevé", alias = "very_high")]
    VeryHigh,
}

impl CvRisk {
    /// Label displayed by the form, usable in constant position
    #[must_use]
    pub const fn as_label(self) -> &'static str {
        match self {
            Self::Low => "Faible",
            Self::Moderate => "Modéré",
            Self::High => "Élevé",
            Self::VeryHigh => "Très élevé",
        }
    }
}

impl FormChoice for CvRisk {
    const ALL: &'static [Self] = &[Self::Low, Self::Moderate, Self::High, Self::VeryHigh];

    fn label(self) -> &'static str {
        self.as_label()
    }

    fn identifier(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Moderate => "moderate",
            Self::High => "high",
            Self::VeryHigh => "very_high",
        }
    }
}

macro_rules! impl_display_and_from_str {
    ($($choice:ty),+ $(,)?) => {
        $(
            impl fmt::Display for $choice {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.label())
                }
            }

            impl FromStr for $choice {
                type Err = AppError;

                fn from_str(s: &str) -> Result<Self, Self::Err> {
                    Self::from_label(s)
                }
            }
        )+
    };
}

impl_display_and_from_str!(Gender, SedentaryStatus, ActivityStatus, TargetActivity, CvRisk);
