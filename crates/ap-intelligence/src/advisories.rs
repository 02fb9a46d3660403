// ABOUTME: French advisory texts emitted by the recommendation rule blocks
// ABOUTME: One constant per rule outcome, grouped by category
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Advisory catalogue
//!
//! Texts are kept out of the rule blocks so that tests and front ends can
//! match on them without duplicating wording.

/// Activity level block
pub mod activity {
    /// Target intensity reachable without prior screening
    pub const NO_SCREENING: &str =
        "Aucun bilan cardiovasculaire préalable n'est nécessaire pour atteindre le niveau visé.";
    /// Inactive patient aiming for moderate intensity
    pub const PROGRESSIVE_START: &str = "Patient inactif : débuter à faible intensité et \
        progresser sur plusieurs semaines vers l'intensité modérée visée.";
    /// Sedentary or inactive patient aiming for vigorous intensity
    pub const RESTING_ECG: &str = "Réaliser un ECG de repos avant de pratiquer une activité \
        intense (≥ 6 METs).";
    /// Sedentary and inactive patient aiming for vigorous intensity
    pub const STRESS_TEST: &str = "Patient sédentaire et inactif visant une activité intense : \
        une épreuve d'effort est recommandée avant de débuter.";
    /// Balance and strengthening for older patients
    pub const SENIOR_BALANCE: &str = "associer des exercices d'équilibre et de renforcement \
        musculaire au moins 2 fois par semaine pour prévenir les chutes.";
}

/// Cardiovascular block
pub mod cardiovascular {
    /// Symptoms suggestive of cardiovascular disease
    pub const SYMPTOMS: &str =
        "Présence de symptômes : avis cardiologique avant toute reprise d'activité physique.";
    /// Personal cardiovascular history
    pub const PERSONAL_HISTORY: &str = "ATCD personnel de maladie cardiovasculaire : avis \
        cardiologique avant de débuter le programme.";
    /// Sudden death in a first-degree relative
    pub const SUDDEN_DEATH_FAMILY: &str = "ATCD familial de mort subite : ECG de repos et avis \
        cardiologique recommandés.";
    /// Hereditary cardiovascular disease in the family
    pub const HEREDITARY: &str = "ATCD familial de maladie cardiovasculaire héréditaire : ECG de \
        repos et avis cardiologique recommandés.";
    /// Past cardiotoxic cancer treatment
    pub const CARDIOTOXIC: &str = "ATCD de traitement cardiotoxique : bilan cardiologique (ECG, \
        échocardiographie) avant de débuter.";
    /// Moderate ESC risk
    pub const RISK_MODERATE: &str = "Risque CV modéré : ECG de repos recommandé avant une \
        activité d'intensité modérée à intense.";
    /// High ESC risk
    pub const RISK_HIGH: &str = "Risque CV élevé : consultation médicale et épreuve d'effort \
        avant une activité intense.";
    /// Very high ESC risk
    pub const RISK_VERY_HIGH: &str = "Risque CV très élevé : consultation cardiologique \
        indispensable avant toute reprise.";
    /// Conclusion when the highest requirement is a resting ECG
    pub const CONCLUSION_RESTING_ECG: &str = "Conclusion : ECG de repos requis avant de débuter \
        le programme d'activité physique.";
    /// Conclusion when the highest requirement is a stress test
    pub const CONCLUSION_STRESS_TEST: &str = "Conclusion : épreuve d'effort requise avant de \
        débuter le programme d'activité physique.";
    /// Conclusion when cardiology clearance is required
    pub const CONCLUSION_CARDIOLOGY: &str = "Conclusion : autorisation cardiologique requise \
        avant de débuter le programme d'activité physique.";
}

/// Special situations block
pub mod special {
    /// Disability without a recent specialist opinion
    pub const DISABILITY_CONSULT_NEEDED: &str = "Handicap : un avis spécialisé et/ou une \
        consultation médicale d'activité physique est nécessaire avant de débuter.";
    /// Disability with a recent specialist opinion
    pub const DISABILITY_ADAPT: &str =
        "Handicap : adapter le programme selon l'avis spécialisé récent.";
    /// Musculoskeletal injury risk
    pub const INJURY_RISK: &str = "Risque de blessures musculosquelettiques : échauffement \
        prolongé, progression lente des charges et surveillance des douleurs.";
    /// Ongoing cancer follow-up
    pub const CANCER_FOLLOW_UP: &str = "Suivi oncologique en cours : coordonner le programme \
        avec l'équipe d'oncologie et adapter l'intensité à la tolérance des traitements.";
    /// Ongoing pregnancy
    pub const PREGNANCY: &str = "Grossesse : activité d'intensité modérée encouragée, éviter \
        les sports de contact et à risque de chute.";
    /// Comorbidity during pregnancy
    pub const PREGNANCY_COMORBIDITY: &str =
        "Comorbidité pendant la grossesse : avis obstétrical avant toute activité physique.";
    /// Obstetric complication
    pub const OBSTETRIC_COMPLICATION: &str =
        "Complication obstétricale : activité physique à valider par l'obstétricien.";
}

/// Respiratory block
pub mod respiratory {
    /// Chronic respiratory disease without recent pulmonary function tests
    pub const EFR_REQUIRED: &str = "Maladie respiratoire chronique : réaliser des EFR \
        (explorations fonctionnelles respiratoires) avant de débuter l'activité physique.";
    /// Recent pulmonary function tests, not severe
    pub const NOT_SEVERE: &str = "EFR récentes sans stade sévère : activité physique adaptée \
        possible en surveillant la dyspnée.";
    /// Severe stage without a recent walking test
    pub const WALKING_TEST_REQUIRED: &str = "Stade sévère : réaliser un test de marche de 6 \
        minutes avec mesure continue de la saturation en O2 avant de débuter.";
    /// Severe stage with a recent walking test
    pub const SUPERVISED_REHABILITATION: &str =
        "Stade sévère : privilégier une réhabilitation respiratoire encadrée.";
}

/// Biology block
pub mod biology {
    /// No recent lipid panel and creatinine
    pub const CHECKUP_REQUIRED: &str = "Réaliser un bilan biologique comprenant un bilan \
        lipidique et une créatinine.";
}
