//! Closed-form Fibonacci evaluation: Binet's formula and the approximation formula.
//!
//! Both formulas share one evaluator. `evaluate` answers |n| <= 2 from the
//! fast-path table, refuses |n| > 70 with [`AccuracyError`], and otherwise
//! rounds the formula's raw float value half away from zero.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::constants::{small_index_value, ACCURACY_BOUNDARY};
use crate::error::{AccuracyError, ConfigError};
use crate::golden::GoldenRatio;

/// A closed-form expression for F(n) in 64-bit floating point.
pub trait ClosedFormula: Send + Sync {
    /// Unrounded value of the formula at `n`.
    ///
    /// Only called with 2 < |n| <= 70.
    fn raw(&self, n: i64, golden: &GoldenRatio) -> f64;

    /// Get the name of this formula.
    fn name(&self) -> &'static str;
}

/// Binet's formula: `(phi^n - (-1)^n / phi^n) / sqrt5`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Binet;

impl ClosedFormula for Binet {
    #[allow(clippy::cast_precision_loss)]
    fn raw(&self, n: i64, golden: &GoldenRatio) -> f64 {
        let phi_n = golden.phi_plus.powf(n as f64);
        let parity = if n % 2 == 0 { 1.0 } else { -1.0 };
        (phi_n - parity / phi_n) / golden.sqrt5
    }

    fn name(&self) -> &'static str {
        "Binet"
    }
}

/// Approximation formula built on the reciprocal golden ratio.
///
/// `(phi_minus + 1)^n / sqrt5` for n >= 0 and `-(-phi_minus)^n / sqrt5` below.
#[derive(Debug, Clone, Copy, Default)]
pub struct Approximation;

impl ClosedFormula for Approximation {
    #[allow(clippy::cast_precision_loss)]
    fn raw(&self, n: i64, golden: &GoldenRatio) -> f64 {
        let base = golden.phi_minus + 1.0;
        if n >= 0 {
            base.powf(n as f64) / golden.sqrt5
        } else {
            // (-phi_minus)^n == (-(phi_minus + 1))^-n. Raising 1/phi_minus to a
            // negative power loses one unit at n = -69 and n = -70.
            let term = (-base).powf(-n as f64);
            -term / golden.sqrt5
        }
    }

    fn name(&self) -> &'static str {
        "Approximation"
    }
}

/// Fail with [`AccuracyError`] when |n| exceeds the accuracy boundary.
pub fn check_boundary(n: i64) -> Result<(), AccuracyError> {
    if n.unsigned_abs() > ACCURACY_BOUNDARY {
        debug!(index = n, "refusing closed-form evaluation beyond accuracy boundary");
        return Err(AccuracyError::new(n));
    }
    Ok(())
}

/// Evaluate `formula` at `n` with the shared fast path and boundary check.
///
/// The result always carries an exact integral value.
pub fn evaluate(formula: &dyn ClosedFormula, n: i64) -> Result<f64, AccuracyError> {
    if let Some(value) = small_index_value(n) {
        return Ok(f64::from(value));
    }
    check_boundary(n)?;

    let golden = GoldenRatio::compute();
    Ok(formula.raw(n, &golden).round())
}

/// Selects one of the closed-form formulas by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Formula {
    /// Binet's formula.
    Binet,
    /// Approximation formula.
    Approximation,
}

impl Formula {
    /// All formulas, in a stable order.
    pub const ALL: [Formula; 2] = [Formula::Binet, Formula::Approximation];

    /// Evaluate this formula at `n`.
    pub fn evaluate(self, n: i64) -> Result<f64, AccuracyError> {
        evaluate(self.formula(), n)
    }

    /// The formula implementation behind this selector.
    #[must_use]
    pub fn formula(self) -> &'static dyn ClosedFormula {
        match self {
            Formula::Binet => &Binet,
            Formula::Approximation => &Approximation,
        }
    }

    /// Get the name of this formula.
    #[must_use]
    pub fn name(self) -> &'static str {
        self.formula().name()
    }
}

impl fmt::Display for Formula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Formula {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "binet" => Ok(Formula::Binet),
            "approx" | "approximation" => Ok(Formula::Approximation),
            _ => Err(ConfigError::UnknownFormula(s.to_string())),
        }
    }
}

/// Compute F(n) with Binet's formula.
///
/// # Example
/// ```
/// assert_eq!(binet_core::fibonacci_binet(10), Ok(55.0));
/// assert!(binet_core::fibonacci_binet(71).is_err());
/// ```
pub fn fibonacci_binet(n: i64) -> Result<f64, AccuracyError> {
    Formula::Binet.evaluate(n)
}

/// Compute F(n) with the approximation formula.
pub fn fibonacci_approximation(n: i64) -> Result<f64, AccuracyError> {
    Formula::Approximation.evaluate(n)
}
