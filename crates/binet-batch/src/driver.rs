//! Batch driver: element-wise closed-form evaluation, sequential or data-parallel.
//!
//! The whole input is validated against the accuracy boundary before any
//! element is computed, so a batch either succeeds completely or fails with
//! the first offending index and produces nothing.

use binet_core::{check_boundary, AccuracyError, Formula, Options, DEFAULT_MIN_PARALLEL_LEN};
use rayon::prelude::*;
use tracing::debug;

/// Error type for configured batch runs.
#[derive(Debug, thiserror::Error)]
pub enum BatchError {
    /// An index lies beyond the accuracy boundary.
    #[error(transparent)]
    Accuracy(#[from] AccuracyError),

    /// The dedicated worker pool could not be created.
    #[error("failed to build worker pool: {0}")]
    Pool(#[from] rayon::ThreadPoolBuildError),
}

/// Check every index against the accuracy boundary, reporting the first failure.
pub fn validate_indices(indices: &[i64]) -> Result<(), AccuracyError> {
    indices.iter().try_for_each(|&n| check_boundary(n))
}

/// Applies one closed-form formula across index collections.
#[derive(Debug, Clone)]
pub struct BatchDriver {
    formula: Formula,
    opts: Options,
}

impl BatchDriver {
    /// Create a driver for `formula`; zero-valued options take their defaults.
    #[must_use]
    pub fn new(formula: Formula, opts: Options) -> Self {
        Self {
            formula,
            opts: opts.normalize(),
        }
    }

    /// The formula this driver applies.
    #[must_use]
    pub fn formula(&self) -> Formula {
        self.formula
    }

    /// Evaluate in input order on the calling thread.
    pub fn sequential(&self, indices: &[i64]) -> Result<Vec<f64>, AccuracyError> {
        validate_indices(indices)?;
        debug!(
            len = indices.len(),
            formula = %self.formula,
            mode = "sequential",
            "evaluating batch"
        );
        indices.iter().map(|&n| self.formula.evaluate(n)).collect()
    }

    /// Evaluate across rayon workers; output order matches input order.
    ///
    /// Runs on a dedicated pool of `threads` workers when configured,
    /// otherwise on the rayon global pool.
    pub fn parallel(&self, indices: &[i64]) -> Result<Vec<f64>, BatchError> {
        validate_indices(indices)?;
        debug!(
            len = indices.len(),
            formula = %self.formula,
            mode = "parallel",
            threads = self.opts.threads,
            "evaluating batch"
        );

        if self.opts.threads == 0 {
            return Ok(fill_parallel(self.formula, indices, self.opts.min_parallel_len)?);
        }

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.opts.threads)
            .build()?;
        let results =
            pool.install(|| fill_parallel(self.formula, indices, self.opts.min_parallel_len))?;
        Ok(results)
    }
}

/// Each worker writes only the output slot paired with its input slot.
fn fill_parallel(
    formula: Formula,
    indices: &[i64],
    min_len: usize,
) -> Result<Vec<f64>, AccuracyError> {
    let mut out = vec![0.0; indices.len()];
    out.par_iter_mut()
        .zip(indices.par_iter())
        .with_min_len(min_len)
        .try_for_each(|(slot, &n)| -> Result<(), AccuracyError> {
            *slot = formula.evaluate(n)?;
            Ok(())
        })?;
    Ok(out)
}

fn parallel_global(formula: Formula, indices: &[i64]) -> Result<Vec<f64>, AccuracyError> {
    validate_indices(indices)?;
    debug!(
        len = indices.len(),
        formula = %formula,
        mode = "parallel",
        "evaluating batch"
    );
    fill_parallel(formula, indices, DEFAULT_MIN_PARALLEL_LEN)
}

/// Binet's formula over `indices`, in order.
pub fn fibonacci_binet_batch(indices: &[i64]) -> Result<Vec<f64>, AccuracyError> {
    BatchDriver::new(Formula::Binet, Options::default()).sequential(indices)
}

/// Binet's formula over `indices` on the rayon global pool.
pub fn fibonacci_binet_batch_parallel(indices: &[i64]) -> Result<Vec<f64>, AccuracyError> {
    parallel_global(Formula::Binet, indices)
}

/// The approximation formula over `indices`, in order.
///
/// # Example
/// ```
/// let values = binet_batch::fibonacci_approximation_batch(&[-3, 0, 10]).unwrap();
/// assert_eq!(values, vec![2.0, 0.0, 55.0]);
/// ```
pub fn fibonacci_approximation_batch(indices: &[i64]) -> Result<Vec<f64>, AccuracyError> {
    BatchDriver::new(Formula::Approximation, Options::default()).sequential(indices)
}

/// The approximation formula over `indices` on the rayon global pool.
pub fn fibonacci_approximation_batch_parallel(
    indices: &[i64],
) -> Result<Vec<f64>, AccuracyError> {
    parallel_global(Formula::Approximation, indices)
}
