//! Error types for closed-form evaluation and configuration.

use crate::constants::ACCURACY_MESSAGE;

/// A closed-form formula was asked for an index beyond the accuracy boundary.
///
/// This signals a routing mistake on the caller's side: the index must go to
/// the exact evaluator instead. Batch calls report the first offending index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("{}", ACCURACY_MESSAGE)]
pub struct AccuracyError {
    /// The index that was refused.
    pub index: i64,
}

impl AccuracyError {
    #[must_use]
    pub fn new(index: i64) -> Self {
        Self { index }
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Options document could not be parsed.
    #[error("invalid options: {0}")]
    Json(#[from] serde_json::Error),

    /// A formula name did not match any known formula.
    #[error("unknown formula: {0}")]
    UnknownFormula(String),
}
