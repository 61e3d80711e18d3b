//! The assessment flow controller.
//!
//! A three-state machine (`intro → questions → results`) that walks the
//! catalog in order, collects answers with upsert semantics, and hands the
//! full answer list to the scoring engine exactly once.

use std::sync::Arc;

use crate::catalog::QuestionCatalog;
use crate::error::FlowError;
use crate::model::{Answer, AssessmentResults, AssessmentState, Question, Section};
use crate::scoring;
use crate::traits::{elapsed_ms, Clock, SystemClock};

/// Knobs for how strictly the controller treats caller input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FlowOptions {
    /// Reject option indices the current question does not offer.
    pub strict_answers: bool,
}

/// Outcome of a successful [`FlowController::advance`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Moved to the question at this index.
    Moved(usize),
    /// The last question was passed; results are available.
    Completed,
}

/// Drives one candidate through the assessment.
pub struct FlowController {
    catalog: Arc<QuestionCatalog>,
    clock: Arc<dyn Clock>,
    options: FlowOptions,
    state: AssessmentState,
}

impl FlowController {
    pub fn new(
        catalog: Arc<QuestionCatalog>,
        clock: Arc<dyn Clock>,
        options: FlowOptions,
    ) -> Result<Self, FlowError> {
        if catalog.is_empty() {
            return Err(FlowError::EmptyCatalog);
        }
        let state = AssessmentState::new(clock.now());
        Ok(Self {
            catalog,
            clock,
            options,
            state,
        })
    }

    /// Controller reading wall-clock time, with default options.
    pub fn with_system_clock(catalog: Arc<QuestionCatalog>) -> Result<Self, FlowError> {
        Self::new(catalog, Arc::new(SystemClock), FlowOptions::default())
    }

    pub fn state(&self) -> &AssessmentState {
        &self.state
    }

    pub fn section(&self) -> Section {
        self.state.current_section
    }

    pub fn catalog(&self) -> &QuestionCatalog {
        &self.catalog
    }

    pub fn options(&self) -> FlowOptions {
        self.options
    }

    pub fn current_index(&self) -> usize {
        self.state.current_question_index
    }

    /// The question at the current index.
    pub fn current_question(&self) -> &Question {
        // The index is kept below catalog.len() and the catalog is non-empty.
        &self.catalog.questions[self.state.current_question_index]
    }

    /// The recorded answer for the current question, if any.
    pub fn current_answer(&self) -> Option<&Answer> {
        self.state.answer_for(&self.current_question().id)
    }

    pub fn is_answered(&self) -> bool {
        self.current_answer().is_some()
    }

    pub fn is_last_question(&self) -> bool {
        self.state.current_question_index + 1 >= self.catalog.len()
    }

    /// One-based position of the current question and the total count.
    pub fn progress(&self) -> (usize, usize) {
        (self.state.current_question_index + 1, self.catalog.len())
    }

    pub fn results(&self) -> Option<&AssessmentResults> {
        self.state.results.as_ref()
    }

    /// Leave the intro and begin answering questions.
    pub fn start(&mut self) -> Result<(), FlowError> {
        self.require(Section::Intro, "start")?;
        self.state.current_section = Section::Questions;
        self.state.start_time = self.clock.now();
        tracing::debug!(
            "assessment started with {} questions",
            self.catalog.len()
        );
        Ok(())
    }

    /// Record `value` as the answer to the current question.
    ///
    /// Replaces an earlier answer to the same question. Does not move.
    pub fn record_answer(&mut self, value: usize) -> Result<(), FlowError> {
        self.require(Section::Questions, "record an answer")?;

        let question = self.current_question();
        if !question.accepts(value) {
            if self.options.strict_answers {
                return Err(FlowError::OptionOutOfRange {
                    question_id: question.id.clone(),
                    value,
                    option_count: question.option_count(),
                });
            }
            tracing::warn!(
                "option {} is out of range for question {}; it will score as no match",
                value,
                question.id
            );
        }

        let answer = Answer {
            question_id: question.id.clone(),
            value,
            time_spent_ms: elapsed_ms(self.state.start_time, self.clock.now()),
        };
        tracing::debug!("answered {} with {}", answer.question_id, value);
        self.state.upsert_answer(answer);
        Ok(())
    }

    /// Move to the next question, or score and finish on the last one.
    pub fn advance(&mut self) -> Result<Step, FlowError> {
        self.require(Section::Questions, "advance")?;

        if !self.is_answered() {
            return Err(FlowError::Unanswered {
                question_id: self.current_question().id.clone(),
            });
        }

        if !self.is_last_question() {
            self.state.current_question_index += 1;
            tracing::debug!("moved to question {}", self.state.current_question_index);
            return Ok(Step::Moved(self.state.current_question_index));
        }

        let results = scoring::score(&self.state.answers, &self.catalog);
        tracing::info!(
            "assessment complete: overall {} ({})",
            results.scores.overall,
            results.recommendation
        );
        self.state.results = Some(results);
        self.state.current_section = Section::Results;
        Ok(Step::Completed)
    }

    /// Step back one question. A no-op on the first question.
    pub fn retreat(&mut self) -> Result<usize, FlowError> {
        self.require(Section::Questions, "go back")?;
        if self.state.current_question_index > 0 {
            self.state.current_question_index -= 1;
            tracing::debug!("moved back to question {}", self.state.current_question_index);
        }
        Ok(self.state.current_question_index)
    }

    /// Discard everything and return to the intro.
    pub fn restart(&mut self) {
        self.state = AssessmentState::new(self.clock.now());
        tracing::debug!("assessment restarted");
    }

    fn require(&self, section: Section, operation: &'static str) -> Result<(), FlowError> {
        if self.state.current_section == section {
            Ok(())
        } else {
            Err(FlowError::InvalidTransition {
                operation,
                section: self.state.current_section,
            })
        }
    }
}
