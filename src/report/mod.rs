//! Derived views over the catalog and mastery map
//!
//! Everything in here is a pure snapshot computation: the progress
//! summary backing the stats display and report export, and the
//! printable matching worksheet. Nothing mutates engine state.

pub mod summary;
pub mod worksheet;

pub use summary::{ItemProgress, MasteryLevel, ProgressSummary};
pub use worksheet::Worksheet;
