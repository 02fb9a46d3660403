// ABOUTME: Categorized advisory output of the recommendation engine
// ABOUTME: Fixed display order of categories, empty categories never stored
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Advisory category, declared in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    /// Body mass index
    #[serde(rename = "IMC")]
    Bmi,
    /// Screening before reaching the target intensity
    #[serde(rename = "Niveau d'activité physique")]
    ActivityLevel,
    /// Cardiovascular clearance
    #[serde(rename = "Risque cardiovasculaire")]
    Cardiovascular,
    /// Disability, injury risk, cancer, pregnancy
    #[serde(rename = "Situations particulières")]
    SpecialSituations,
    /// Chronic respiratory disease work-up
    #[serde(rename = "Respiratoire")]
    Respiratory,
    /// Lipid panel and creatinine
    #[serde(rename = "Bilan biologique")]
    Biology,
}

impl Category {
    /// Every category, in display order
    pub const ALL: [Self; 6] = [
        Self::Bmi,
        Self::ActivityLevel,
        Self::Cardiovascular,
        Self::SpecialSituations,
        Self::Respiratory,
        Self::Biology,
    ];

    /// Label shown as the category heading
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Bmi => "IMC",
            Self::ActivityLevel => "Niveau d'activité physique",
            Self::Cardiovascular => "Risque cardiovasculaire",
            Self::SpecialSituations => "Situations particulières",
            Self::Respiratory => "Respiratoire",
            Self::Biology => "Bilan biologique",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Advisories grouped by category
///
/// Iteration and serialization follow [`Category`] display order. A category
/// is present only once it holds at least one advisory.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecommendationSet {
    entries: BTreeMap<Category, Vec<String>>,
}

impl RecommendationSet {
    /// Create an empty set
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one advisory to a category
    pub fn push(&mut self, category: Category, advisory: impl Into<String>) {
        self.entries
            .entry(category)
            .or_default()
            .push(advisory.into());
    }

    /// Append several advisories to a category, keeping their order
    ///
    /// Nothing is stored when `advisories` is empty.
    pub fn push_all<I, S>(&mut self, category: Category, advisories: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for advisory in advisories {
            self.push(category, advisory);
        }
    }

    /// Advisories of one category, empty if the category is absent
    #[must_use]
    pub fn get(&self, category: Category) -> &[String] {
        self.entries.get(&category).map_or(&[], Vec::as_slice)
    }

    /// Whether a category holds any advisory
    #[must_use]
    pub fn contains(&self, category: Category) -> bool {
        self.entries.contains_key(&category)
    }

    /// Non-empty categories in display order
    pub fn categories(&self) -> impl Iterator<Item = Category> + '_ {
        self.entries.keys().copied()
    }

    /// Categories with their advisories, in display order
    pub fn entries(&self) -> impl Iterator<Item = (Category, &[String])> {
        self.entries
            .iter()
            .map(|(category, advisories)| (*category, advisories.as_slice()))
    }

    /// Whether no category holds any advisory
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of advisories across categories
    #[must_use]
    pub fn advisory_count(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_iteration_follows_display_order() {
        let mut set = RecommendationSet::new();
        set.push(Category::Biology, "bilan");
        set.push(Category::Bmi, "imc");
        set.push(Category::Cardiovascular, "ecg");
        let order: Vec<Category> = set.categories().collect();
        assert_eq!(
            order,
            vec![Category::Bmi, Category::Cardiovascular, Category::Biology]
        );
    }

    #[test]
    fn test_empty_extend_stores_nothing() {
        let mut set = RecommendationSet::new();
        set.push_all(Category::Respiratory, Vec::<String>::new());
        assert!(set.is_empty());
        assert!(!set.contains(Category::Respiratory));
        assert!(set.get(Category::Respiratory).is_empty());
    }

    #[test]
    fn test_serializes_keyed_by_label() {
        let mut set = RecommendationSet::new();
        set.push(Category::SpecialSituations, "a");
        set.push(Category::Bmi, "b");
        let json = serde_json::to_string(&set).unwrap();
        assert_eq!(json, r#"{"IMC":["b"],"Situations particulières":["a"]}"#);
        let parsed: RecommendationSet = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, set);
    }
}
