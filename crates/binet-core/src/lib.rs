//! # binet-core
//!
//! Fibonacci numbers for signed indices by four strategies: Binet's formula
//! and the approximation formula in 64-bit floating point, and exact linear
//! recurrence over arbitrary-precision integers (seeded from the closed form,
//! or purely iterative).
//!
//! The floating-point formulas refuse |n| > 70 with [`AccuracyError`]; past
//! that magnitude only the exact evaluator gives correct answers.

pub mod closed_form;
pub mod constants;
pub mod error;
pub mod exact;
pub mod golden;
pub mod options;

// Re-exports
pub use closed_form::{
    check_boundary, fibonacci_approximation, fibonacci_binet, Approximation, Binet, ClosedFormula,
    Formula,
};
pub use constants::{ACCURACY_BOUNDARY, DEFAULT_MIN_PARALLEL_LEN};
pub use error::{AccuracyError, ConfigError};
pub use exact::{fibonacci_exact, fibonacci_exact_big, fibonacci_exact_with, ExactEvaluator};
pub use golden::GoldenRatio;
pub use options::{Options, SeedMode};
