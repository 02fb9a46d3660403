// ABOUTME: Five-step questionnaire state machine owning one patient's answers
// ABOUTME: Step navigation, per-step field visibility, answer intake, and submission to the engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Questionnaire wizard
//!
//! A [`QuestionnaireSession`] owns the current step, the accumulated
//! [`PatientAnswers`] and, once submitted, the [`RecommendationSet`]. Field
//! visibility is never stored: it is recomputed from the answers with
//! [`PatientAnswers::is_applicable`].

use crate::logging::AppLogger;
use ap_core::constants::limits::{FIRST_STEP, LAST_STEP, PROGRESS_PER_STEP};
use ap_core::errors::{AppError, AppResult};
use ap_core::models::{AnswerValue, PatientAnswers, Question};
use ap_intelligence::{RecommendationEngineTrait, RecommendationSet};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, info_span};
use uuid::Uuid;

/// One page of the questionnaire
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct WizardStep(u8);

impl WizardStep {
    /// Informations de base
    pub const FIRST: Self = Self(FIRST_STEP);
    /// Évaluation médicale
    pub const LAST: Self = Self(LAST_STEP);

    /// Every step, in order
    pub const ALL: [Self; 5] = [Self(1), Self(2), Self(3), Self(4), Self(5)];

    /// Step with the given 1-based number
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the number is outside 1-5
    pub fn new(number: u8) -> AppResult<Self> {
        if (FIRST_STEP..=LAST_STEP).contains(&number) {
            Ok(Self(number))
        } else {
            Err(AppError::invalid_input(format!(
                "Step must be between {FIRST_STEP} and {LAST_STEP}, got {number}"
            )))
        }
    }

    /// 1-based step number
    #[must_use]
    pub const fn number(self) -> u8 {
        self.0
    }

    /// Heading shown above the step
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self.0 {
            1 => "Informations de base",
            2 => "Évaluation de l'activité physique",
            3 => "Évaluation des risques",
            4 => "Situations particulières",
            _ => "Évaluation médicale",
        }
    }

    /// Questions this step owns, visible or not
    #[must_use]
    pub fn questions(self) -> Vec<Question> {
        Question::for_step(self.0)
    }

    const fn next(self) -> Option<Self> {
        if self.0 < LAST_STEP {
            Some(Self(self.0 + 1))
        } else {
            None
        }
    }

    const fn previous(self) -> Option<Self> {
        if self.0 > FIRST_STEP {
            Some(Self(self.0 - 1))
        } else {
            None
        }
    }
}

impl Default for WizardStep {
    fn default() -> Self {
        Self::FIRST
    }
}

impl fmt::Display for WizardStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. {}", self.0, self.title())
    }
}

impl TryFrom<u8> for WizardStep {
    type Error = AppError;

    fn try_from(number: u8) -> Result<Self, Self::Error> {
        Self::new(number)
    }
}

impl From<WizardStep> for u8 {
    fn from(step: WizardStep) -> Self {
        step.0
    }
}

/// One patient's pass through the questionnaire
#[derive(Debug, Clone)]
pub struct QuestionnaireSession {
    id: Uuid,
    step: WizardStep,
    answers: PatientAnswers,
    results: Option<RecommendationSet>,
}

impl Default for QuestionnaireSession {
    fn default() -> Self {
        Self::new()
    }
}

impl QuestionnaireSession {
    /// Start a session on step 1 with default answers
    #[must_use]
    pub fn new() -> Self {
        Self::with_answers(PatientAnswers::default())
    }

    /// Start a session on step 1 with pre-filled answers
    #[must_use]
    pub fn with_answers(answers: PatientAnswers) -> Self {
        let id = Uuid::new_v4();
        debug!(session.id = %id, "Questionnaire session started");
        Self {
            id,
            step: WizardStep::FIRST,
            answers,
            results: None,
        }
    }

    /// Session identifier used in logs
    #[must_use]
    pub const fn id(&self) -> Uuid {
        self.id
    }

    /// Current step
    #[must_use]
    pub const fn step(&self) -> WizardStep {
        self.step
    }

    /// Answers collected so far
    #[must_use]
    pub const fn answers(&self) -> &PatientAnswers {
        &self.answers
    }

    /// Recommendations from the last submission, cleared by any later answer
    #[must_use]
    pub const fn results(&self) -> Option<&RecommendationSet> {
        self.results.as_ref()
    }

    /// Whether results are currently displayed
    #[must_use]
    pub const fn has_results(&self) -> bool {
        self.results.is_some()
    }

    /// Progress bar value, 20 per step
    #[must_use]
    pub const fn progress_percent(&self) -> u8 {
        self.step.0 * PROGRESS_PER_STEP
    }

    /// Whether `advance` is allowed
    #[must_use]
    pub const fn can_advance(&self) -> bool {
        self.step.next().is_some()
    }

    /// Whether `retreat` is allowed
    #[must_use]
    pub const fn can_retreat(&self) -> bool {
        self.step.previous().is_some()
    }

    /// Whether `submit` is allowed
    #[must_use]
    pub fn can_submit(&self) -> bool {
        self.step == WizardStep::LAST
    }

    /// Questions of the current step that apply given the answers so far
    #[must_use]
    pub fn visible_questions(&self) -> Vec<Question> {
        self.step
            .questions()
            .into_iter()
            .filter(|question| self.answers.is_applicable(*question))
            .collect()
    }

    /// Record one answer for a visible question of the current step
    ///
    /// A rejected value leaves the stored answer unchanged. An accepted one
    /// clears any displayed results, since they no longer match the answers.
    ///
    /// # Errors
    ///
    /// - `InvalidTransition` if the question belongs to another step
    /// - `InvalidInput` if the question is hidden or the value has the wrong kind
    /// - `ValueOutOfRange` if the value fails boundary validation
    pub fn answer(&mut self, question: Question, value: AnswerValue) -> AppResult<()> {
        let _span = info_span!("answer", session.id = %self.id, question = %question).entered();

        if question.step() != self.step.0 {
            return Err(AppError::invalid_transition(format!(
                "Question '{question}' belongs to step {}, current step is {}",
                question.step(),
                self.step.0
            )));
        }
        if !self.answers.is_applicable(question) {
            return Err(AppError::invalid_input(format!(
                "Question '{question}' is not asked given the previous answers"
            )));
        }

        if let Err(error) = self.answers.apply(question, value) {
            AppLogger::log_rejected_answer(self.id, question.key(), &error.message);
            return Err(error);
        }
        if self.results.take().is_some() {
            debug!("Displayed results cleared after answer change");
        }
        Ok(())
    }

    /// Move to the next step
    ///
    /// # Errors
    ///
    /// Returns `InvalidTransition` on the last step; the step is unchanged
    pub fn advance(&mut self) -> AppResult<WizardStep> {
        let next = self.step.next().ok_or_else(|| {
            AppError::invalid_transition("Already on the last step, submit instead")
        })?;
        AppLogger::log_navigation(self.id, "advance", self.step.0, next.0);
        self.step = next;
        Ok(next)
    }

    /// Move to the previous step
    ///
    /// # Errors
    ///
    /// Returns `InvalidTransition` on the first step; the step is unchanged
    pub fn retreat(&mut self) -> AppResult<WizardStep> {
        let previous = self
            .step
            .previous()
            .ok_or_else(|| AppError::invalid_transition("Already on the first step"))?;
        AppLogger::log_navigation(self.id, "retreat", self.step.0, previous.0);
        self.step = previous;
        Ok(previous)
    }

    /// Evaluate the answers and keep the results for display
    ///
    /// The step stays on 5. Submitting again re-evaluates the current answers.
    ///
    /// # Errors
    ///
    /// Returns `InvalidTransition` unless on the last step
    pub fn submit<E>(&mut self, engine: &E) -> AppResult<&RecommendationSet>
    where
        E: RecommendationEngineTrait + ?Sized,
    {
        if !self.can_submit() {
            return Err(AppError::invalid_transition(format!(
                "Submission is only available on step {LAST_STEP}, current step is {}",
                self.step.0
            )));
        }
        let results = engine.evaluate(&self.answers);
        AppLogger::log_submission(
            self.id,
            results.categories().count(),
            results.advisory_count(),
        );
        Ok(&*self.results.insert(results))
    }

    /// End the session, handing back the answers and the last results
    #[must_use]
    pub fn finish(self) -> (PatientAnswers, Option<RecommendationSet>) {
        (self.answers, self.results)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_step_bounds() {
        assert!(WizardStep::new(0).is_err());
        assert!(WizardStep::new(6).is_err());
        assert_eq!(WizardStep::new(3).unwrap().title(), "Évaluation des risques");
        assert_eq!(WizardStep::LAST.to_string(), "5. Évaluation médicale");
    }

    #[test]
    fn test_step_serializes_as_number() {
        let json = serde_json::to_string(&WizardStep::new(4).unwrap()).unwrap();
        assert_eq!(json, "4");
        assert!(serde_json::from_str::<WizardStep>("9").is_err());
    }

    #[test]
    fn test_every_question_reachable_through_steps() {
        let total: usize = WizardStep::ALL
            .iter()
            .map(|step| step.questions().len())
            .sum();
        assert_eq!(total, Question::ALL.len());
    }
}
