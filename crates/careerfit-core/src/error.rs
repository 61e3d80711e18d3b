//! Flow controller error types.
//!
//! Scoring itself never fails. These errors describe calls that the flow
//! controller refuses; a refused call never changes the assessment state.

use thiserror::Error;

use crate::model::Section;

/// Errors returned by [`crate::flow::FlowController`] operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FlowError {
    /// The operation has no transition out of the current section.
    #[error("cannot {operation} while in the {section} section")]
    InvalidTransition {
        operation: &'static str,
        section: Section,
    },

    /// Moving forward requires an answer to the current question.
    #[error("question {question_id} has not been answered")]
    Unanswered { question_id: String },

    /// Strict mode rejected an option index the question does not offer.
    #[error("option {value} is out of range for question {question_id} ({option_count} options)")]
    OptionOutOfRange {
        question_id: String,
        value: usize,
        option_count: usize,
    },

    /// The catalog has no questions to traverse.
    #[error("the question catalog is empty")]
    EmptyCatalog,
}

impl FlowError {
    /// Returns `true` if the caller can fix this by answering the question.
    pub fn needs_answer(&self) -> bool {
        matches!(self, FlowError::Unanswered { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_input() {
        let err = FlowError::OptionOutOfRange {
            question_id: "tech-1".into(),
            value: 9,
            option_count: 4,
        };
        assert_eq!(
            err.to_string(),
            "option 9 is out of range for question tech-1 (4 options)"
        );

        let err = FlowError::InvalidTransition {
            operation: "advance",
            section: Section::Results,
        };
        assert_eq!(err.to_string(), "cannot advance while in the results section");
        assert!(!err.needs_answer());
        assert!(FlowError::Unanswered {
            question_id: "x".into()
        }
        .needs_answer());
    }
}
