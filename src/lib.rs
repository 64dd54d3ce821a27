//! Countries and capitals study engine
//!
//! The library half of atlas: the catalog of pairs, the adaptive quiz
//! engine with mastery tracking and durable progress, the flashcard
//! browse mode, and the derived progress/worksheet views. Rendering
//! lives in the `atlas-cli` binary.

pub mod catalog;
pub mod flashcards;
pub mod quiz;
pub mod report;

pub use catalog::{Catalog, CatalogError, Direction, Item};
pub use flashcards::FlashcardRun;
pub use quiz::{
    MasteryMap, ProgressStorage, Question, QuizSession, SessionError, SessionView,
};
pub use report::{ProgressSummary, Worksheet};
