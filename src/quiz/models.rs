//! Data models for the quiz engine

use serde::Serialize;

use crate::catalog::{Direction, Item};

/// Number of answer options presented per question
pub const OPTION_COUNT: usize = 4;

/// Number of wrong options sampled alongside the correct answer
pub const DISTRACTOR_COUNT: usize = OPTION_COUNT - 1;

/// One presented multiple-choice question. Ephemeral: derived fresh each
/// time the session advances.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub item: Item,
    pub direction: Direction,
    /// Four distinct values in presentation order, one of them correct
    pub options: Vec<String>,
    /// Index of the correct answer within `options`
    pub correct_index: usize,
}

impl Question {
    /// The value shown to the learner
    pub fn prompt(&self) -> &str {
        self.item.prompt(self.direction)
    }

    pub fn correct_answer(&self) -> &str {
        &self.options[self.correct_index]
    }
}

/// Outcome of an answered question, kept around until the learner advances
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerFeedback {
    pub selected: String,
    pub is_correct: bool,
}
