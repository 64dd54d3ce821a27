//! Quiz session state machine
//!
//! Drives one interactive question at a time over the working set:
//! present, accept exactly one answer, update and persist mastery, then
//! advance, reshuffle, or complete. All transitions are synchronous; the
//! renderer only ever sees a consistent snapshot through [`QuizSession::view`].
//!
//! Out-of-order events (`answer` while already answered, `advance` while
//! still presenting) are no-ops, so a confused UI cannot corrupt state.

use rand::Rng;
use thiserror::Error;

use crate::catalog::{Catalog, Direction, Item};

use super::mastery::{self, MasteryMap};
use super::models::{AnswerFeedback, Question};
use super::options::{self, QuestionError};
use super::selection;
use super::storage::{ProgressStorage, ProgressStorageError};

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Invalid quiz configuration: {0}")]
    Config(#[from] QuestionError),

    #[error("Failed to persist progress: {0}")]
    Storage(#[from] ProgressStorageError),
}

pub type Result<T> = std::result::Result<T, SessionError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    /// A question is on screen, awaiting the first answer
    Presenting,
    /// Answer locked in; feedback visible until the learner advances
    Answered,
    /// Every item is mastered. Terminal until an explicit reset.
    Completed,
}

/// Read-only snapshot of the session for renderers
#[derive(Debug)]
pub enum SessionView<'a> {
    Presenting {
        question: &'a Question,
        remaining: usize,
    },
    Answered {
        question: &'a Question,
        feedback: &'a AnswerFeedback,
        remaining: usize,
    },
    Completed,
}

/// The adaptive quiz state machine. Owns the catalog, the mastery map and
/// its storage, and an injected rng (seed it for reproducible sessions).
pub struct QuizSession<R: Rng> {
    catalog: Catalog,
    storage: ProgressStorage,
    rng: R,
    mastery: MasteryMap,
    working_set: Vec<Item>,
    index: usize,
    phase: Phase,
    question: Option<Question>,
    feedback: Option<AnswerFeedback>,
}

impl<R: Rng> QuizSession<R> {
    /// Start a session: validate the catalog, load persisted progress,
    /// and build the first working set. Fails only on configuration
    /// invariant violations (catalog unusable for 4-option questions).
    pub fn new(catalog: Catalog, storage: ProgressStorage, rng: R) -> Result<Self> {
        options::ensure_answer_pool(&catalog)?;

        let mastery = storage.load();
        let mut session = Self {
            catalog,
            storage,
            rng,
            mastery,
            working_set: Vec::new(),
            index: 0,
            phase: Phase::Completed,
            question: None,
            feedback: None,
        };
        session.start_pass()?;
        Ok(session)
    }

    /// Rebuild the working set from the current mastery map and present
    /// its first item, or complete if nothing is left in rotation.
    fn start_pass(&mut self) -> Result<()> {
        let available = selection::available_items(&self.catalog, &self.mastery);
        if available.is_empty() {
            log::debug!("No items in rotation; session completed");
            self.phase = Phase::Completed;
            self.question = None;
            self.feedback = None;
            return Ok(());
        }

        self.working_set = selection::build_working_set(available, &mut self.rng);
        self.index = 0;
        self.present_current()
    }

    /// Derive a fresh question for the item at the current index
    fn present_current(&mut self) -> Result<()> {
        let item = self.working_set[self.index].clone();
        let direction = if self.rng.gen_bool(0.5) {
            Direction::Capital
        } else {
            Direction::Country
        };

        let question = options::build_question(&self.catalog, &item, direction, &mut self.rng)?;
        log::debug!("Presenting {} ({})", question.prompt(), direction);

        self.question = Some(question);
        self.feedback = None;
        self.phase = Phase::Presenting;
        Ok(())
    }

    /// Lock in an answer for the current question. First answer wins:
    /// calls outside the presenting phase change nothing.
    pub fn answer(&mut self, option: &str) -> Result<()> {
        if self.phase != Phase::Presenting {
            log::debug!("Ignoring answer outside the presenting phase");
            return Ok(());
        }
        let Some(question) = &self.question else {
            return Ok(());
        };

        let is_correct = option == question.correct_answer();
        self.mastery = mastery::record(&self.mastery, &question.item.country, is_correct);
        self.storage.save(&self.mastery)?;

        self.feedback = Some(AnswerFeedback {
            selected: option.to_string(),
            is_correct,
        });
        self.phase = Phase::Answered;

        // Completion is re-checked here, but surfaced on the next advance
        // so the feedback for this answer stays visible.
        log::debug!("{} items remaining in rotation", self.remaining());
        Ok(())
    }

    /// Move past an answered question: next item in the pass, a fresh
    /// reshuffle when the pass is exhausted or membership changed, or the
    /// completed state when nothing is left. No-op unless answered.
    pub fn advance(&mut self) -> Result<()> {
        if self.phase != Phase::Answered {
            log::debug!("Ignoring advance outside the answered phase");
            return Ok(());
        }

        let available = selection::available_items(&self.catalog, &self.mastery);
        if available.is_empty() {
            log::info!("All items mastered");
            self.phase = Phase::Completed;
            self.question = None;
            self.feedback = None;
            return Ok(());
        }

        if available.len() != self.working_set.len() {
            // An item crossed the mastery threshold: rebuild the pass
            self.working_set = selection::build_working_set(available, &mut self.rng);
            self.index = 0;
        } else if self.index + 1 >= self.working_set.len() {
            // Pass exhausted: reshuffle what is still in rotation
            self.working_set = selection::build_working_set(available, &mut self.rng);
            self.index = 0;
        } else {
            self.index += 1;
        }

        self.present_current()
    }

    /// Clear all mastery data and start over with the full catalog.
    /// The confirmation dialog is the caller's responsibility.
    pub fn reset_progress(&mut self) -> Result<()> {
        self.storage.reset()?;
        self.mastery = MasteryMap::new();
        log::info!("Progress reset; all items back in rotation");
        self.start_pass()
    }

    /// Current state for the rendering layer
    pub fn view(&self) -> SessionView<'_> {
        match (self.phase, &self.question, &self.feedback) {
            (Phase::Presenting, Some(question), _) => SessionView::Presenting {
                question,
                remaining: self.remaining(),
            },
            (Phase::Answered, Some(question), Some(feedback)) => SessionView::Answered {
                question,
                feedback,
                remaining: self.remaining(),
            },
            _ => SessionView::Completed,
        }
    }

    /// Count of items still below the mastery threshold
    pub fn remaining(&self) -> usize {
        selection::available_items(&self.catalog, &self.mastery).len()
    }

    pub fn is_completed(&self) -> bool {
        self.phase == Phase::Completed
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn mastery(&self) -> &MasteryMap {
        &self.mastery
    }
}
