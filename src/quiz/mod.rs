//! Adaptive quiz engine
//!
//! This module provides:
//! - Per-item mastery statistics and their durable storage
//! - The selection policy (availability filter + working-set shuffle)
//! - Distractor generation for four-option questions
//! - The quiz session state machine driving one question at a time

pub mod mastery;
pub mod models;
pub mod options;
pub mod selection;
pub mod session;
pub mod storage;

pub use mastery::{ItemStats, MasteryMap, MASTERY_THRESHOLD};
pub use models::{AnswerFeedback, Question};
pub use options::QuestionError;
pub use session::{QuizSession, SessionError, SessionView};
pub use storage::{ProgressStorage, ProgressStorageError};
