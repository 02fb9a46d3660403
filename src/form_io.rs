// ABOUTME: Line-oriented terminal front end driving a questionnaire session
// ABOUTME: Prompts visible questions per step, handles navigation, and loads saved JSON answer records
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Terminal form
//!
//! Reads answers line by line from any [`BufRead`] and writes prompts to any
//! [`Write`], so the same loop serves stdin/stdout and in-memory buffers.
//! An empty line keeps the pre-filled value, or is rejected when there is
//! none. A rejected answer is reported and the question is asked again.
//!
//! Saved answer records are read with [`read_answers`] and [`load_answers`].

use crate::wizard::{QuestionnaireSession, WizardStep};
use ap_core::errors::{AppError, AppResult};
use ap_core::models::{AnswerKind, AnswerValue, PatientAnswers, Question};
use ap_intelligence::config::intelligence::BmiThresholds;
use ap_intelligence::{BmiCategory, RecommendationEngineTrait, RecommendationSet};
use std::fs::File;
use std::io::{BufRead, BufReader, Read, Write};
use std::path::Path;
use tracing::{debug, info};

/// Parse and validate a JSON answer record
///
/// Choices accept their French label or snake_case identifier; missing
/// fields take their session defaults.
///
/// # Errors
///
/// - `InvalidFormat` for malformed JSON
/// - `InvalidInput` for an unknown choice label or a value of the wrong type
/// - `ValueOutOfRange` for an out-of-range age or non-positive height/weight
pub fn read_answers<R: Read>(reader: R) -> AppResult<PatientAnswers> {
    let answers: PatientAnswers = serde_json::from_reader(reader)?;
    answers.validate()?;
    Ok(answers)
}

/// Read a JSON answer record from a file
///
/// # Errors
///
/// Returns `IoError` if the file cannot be opened, otherwise the errors of
/// [`read_answers`]
pub fn load_answers(path: &Path) -> AppResult<PatientAnswers> {
    let file = File::open(path)
        .map_err(|e| AppError::io(format!("Cannot read '{}': {e}", path.display())))?;
    let answers = read_answers(BufReader::new(file))?;
    info!(path = %path.display(), "Answer record loaded");
    Ok(answers)
}

/// Navigation choice offered at the end of a step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Navigation {
    Next,
    Previous,
    Generate,
}

/// Interactive questionnaire over a reader and a writer
pub struct TerminalForm<R, W> {
    input: R,
    output: W,
    thresholds: BmiThresholds,
}

impl<R: BufRead, W: Write> TerminalForm<R, W> {
    /// Wrap an input and an output stream
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            thresholds: BmiThresholds::default(),
        }
    }

    /// Classify the BMI shown after step 1 with the engine's thresholds
    #[must_use]
    pub const fn with_thresholds(mut self, thresholds: BmiThresholds) -> Self {
        self.thresholds = thresholds;
        self
    }

    /// Hand back the output stream
    pub fn into_output(self) -> W {
        self.output
    }

    /// Drive the session until recommendations are generated
    ///
    /// # Errors
    ///
    /// - `IoError` if the input ends before submission or a stream fails
    /// - any non-recoverable error raised by the session
    pub fn run<E>(
        &mut self,
        session: &mut QuestionnaireSession,
        engine: &E,
    ) -> AppResult<RecommendationSet>
    where
        E: RecommendationEngineTrait + ?Sized,
    {
        loop {
            self.ask_step(session)?;
            match self.ask_navigation(session)? {
                Navigation::Next => {
                    session.advance()?;
                }
                Navigation::Previous => {
                    session.retreat()?;
                }
                Navigation::Generate => {
                    let results = session.submit(engine)?.clone();
                    return Ok(results);
                }
            }
        }
    }

    /// Ask every visible question of the current step once
    fn ask_step(&mut self, session: &mut QuestionnaireSession) -> AppResult<()> {
        let step = session.step();
        writeln!(self.output)?;
        writeln!(
            self.output,
            "Étape {}/{} : {}",
            step.number(),
            WizardStep::LAST.number(),
            step.title()
        )?;
        writeln!(self.output, "Progression : {} %", session.progress_percent())?;

        // Visibility depends on earlier answers of the same step
        for question in step.questions() {
            if session.answers().is_applicable(question) {
                self.ask_question(session, question)?;
            }
        }

        if step == WizardStep::FIRST {
            if let Some(bmi) = session.answers().bmi() {
                writeln!(
                    self.output,
                    "IMC : {bmi:.1} kg/m² ({})",
                    BmiCategory::classify(bmi, &self.thresholds)
                )?;
            }
        }
        Ok(())
    }

    fn ask_question(
        &mut self,
        session: &mut QuestionnaireSession,
        question: Question,
    ) -> AppResult<()> {
        let kind = question.kind();
        loop {
            let current = session.answers().value(question);
            self.write_prompt(question, kind, current.as_ref())?;

            let line = self.read_line()?;
            let outcome = match (line.is_empty(), current) {
                (true, Some(_)) => return Ok(()),
                (true, None) => Err(AppError::missing_field(question.prompt())),
                (false, _) => AnswerValue::parse(kind, &line)
                    .and_then(|value| session.answer(question, value)),
            };
            match outcome {
                Ok(()) => return Ok(()),
                Err(error) if error.is_recoverable_at_entry() => {
                    debug!(question = %question, "Re-asking after rejected answer");
                    writeln!(self.output, "Erreur : {}", error.message)?;
                }
                Err(error) => return Err(error),
            }
        }
    }

    fn write_prompt(
        &mut self,
        question: Question,
        kind: AnswerKind,
        current: Option<&AnswerValue>,
    ) -> AppResult<()> {
        write!(self.output, "{}", question.prompt())?;
        match kind {
            AnswerKind::Choice(choices) => {
                let listed: Vec<String> = choices
                    .iter()
                    .enumerate()
                    .map(|(index, label)| format!("{}) {label}", index + 1))
                    .collect();
                write!(self.output, " [{}]", listed.join("  "))?;
            }
            AnswerKind::YesNo => write!(self.output, " [Oui/Non]")?,
            AnswerKind::Text | AnswerKind::Integer { .. } | AnswerKind::PositiveNumber => {}
        }
        match current {
            Some(value) if !value.to_string().is_empty() => {
                write!(self.output, " ({value}) : ")?;
            }
            _ => write!(self.output, " : ")?,
        }
        self.output.flush()?;
        Ok(())
    }

    fn ask_navigation(&mut self, session: &QuestionnaireSession) -> AppResult<Navigation> {
        let mut options = Vec::with_capacity(2);
        if session.can_retreat() {
            options.push("[p] Précédent");
        }
        if session.can_submit() {
            options.push("[g] Générer les recommandations");
        } else {
            options.push("[s] Suivant");
        }
        let default = if session.can_submit() {
            Navigation::Generate
        } else {
            Navigation::Next
        };

        loop {
            write!(self.output, "{} : ", options.join("  "))?;
            self.output.flush()?;
            let line = self.read_line()?;
            let choice = match line.to_lowercase().as_str() {
                "" => Some(default),
                "s" | "suivant" if session.can_advance() => Some(Navigation::Next),
                "p" | "précédent" | "precedent" if session.can_retreat() => {
                    Some(Navigation::Previous)
                }
                "g" | "générer" | "generer" if session.can_submit() => Some(Navigation::Generate),
                _ => None,
            };
            match choice {
                Some(navigation) => return Ok(navigation),
                None => writeln!(self.output, "Choix invalide : '{line}'")?,
            }
        }
    }

    fn read_line(&mut self) -> AppResult<String> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(AppError::io(
                "Entrée terminée avant la génération des recommandations",
            ));
        }
        Ok(line.trim().to_owned())
    }
}
