//! Typed errors surfaced by the engine.
//!
//! Scoring itself never fails; these only cover malformed input coming in
//! from the quiz flow or from stored friend records.

/// A stored category string that names none of the five affinity categories.
///
/// Indicates upstream data corruption. Callers log it and treat the friend
/// as uncategorized.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid affinity category: {0:?}")]
pub struct InvalidCategoryError(pub String);

/// Answer vector rejected at the quiz boundary.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AnswerError {
    #[error("answer {index} is {value}, expected 0-3")]
    OutOfRange { index: usize, value: i64 },

    #[error("could not parse answer {index}: {raw:?}")]
    Unparseable { index: usize, raw: String },
}
