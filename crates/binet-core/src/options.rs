//! Evaluation options and configuration.

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_MIN_PARALLEL_LEN;
use crate::error::ConfigError;

/// How the exact evaluator seeds its recurrence above the accuracy boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeedMode {
    /// Start from closed-form F(69) and F(70) and iterate only past 70.
    #[default]
    ClosedForm,
    /// Iterate from the base pair F(1) = F(2) = 1 for every |n| > 2.
    Iterative,
}

/// Options for exact and batch evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    /// Recurrence seeding for the exact evaluator.
    pub seed: SeedMode,
    /// Worker threads for parallel batches (0 = rayon global pool).
    pub threads: usize,
    /// Minimum indices per parallel split (0 = default).
    pub min_parallel_len: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            seed: SeedMode::ClosedForm,
            threads: 0,
            min_parallel_len: DEFAULT_MIN_PARALLEL_LEN,
        }
    }
}

impl Options {
    /// Parse options from a JSON document. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let opts: Self = serde_json::from_str(json)?;
        Ok(opts.normalize())
    }

    /// Normalize options, applying defaults where values are zero.
    #[must_use]
    pub fn normalize(mut self) -> Self {
        if self.min_parallel_len == 0 {
            self.min_parallel_len = DEFAULT_MIN_PARALLEL_LEN;
        }
        self
    }
}
