//! # binet-batch
//!
//! Batch evaluation of the closed-form formulas, sequential or data-parallel
//! on rayon, and a parallel cross-check of both formulas against the exact
//! evaluator.

pub mod cross_check;
pub mod driver;

pub use cross_check::{cross_check, CrossCheckReport, Mismatch};
pub use driver::{
    fibonacci_approximation_batch, fibonacci_approximation_batch_parallel, fibonacci_binet_batch,
    fibonacci_binet_batch_parallel, validate_indices, BatchDriver, BatchError,
};
