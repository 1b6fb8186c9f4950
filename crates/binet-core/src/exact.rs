//! Exact Fibonacci evaluation with arbitrary-precision integers.
//!
//! Linear recurrence over a two-value window. Inside the accuracy boundary the
//! closed-form approximation is already exact, so by default the recurrence is
//! seeded from closed-form F(69) and F(70) and only iterates past 70.
//! Negative indices follow F(-n) = F(n) * (-1)^(n+1).

use num_bigint::{BigInt, BigUint, Sign};
use num_integer::Integer;
use num_traits::{One, ToPrimitive, Zero};
use tracing::trace;

use crate::closed_form::{Approximation, ClosedFormula};
use crate::constants::ACCURACY_BOUNDARY;
use crate::golden::GoldenRatio;
use crate::options::{Options, SeedMode};

/// Exact evaluator. Never fails on magnitude; cost is linear in |n|.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExactEvaluator {
    seed: SeedMode,
}

impl ExactEvaluator {
    /// Create an evaluator with the given seeding strategy.
    #[must_use]
    pub fn new(seed: SeedMode) -> Self {
        Self { seed }
    }

    /// Create an evaluator from options.
    #[must_use]
    pub fn with_options(opts: &Options) -> Self {
        Self::new(opts.seed)
    }

    /// Seeding strategy in use.
    #[must_use]
    pub fn seed(&self) -> SeedMode {
        self.seed
    }

    /// Compute F(n) exactly.
    #[must_use]
    pub fn evaluate(&self, n: i64) -> BigInt {
        let magnitude = n.unsigned_abs();
        let value = self.magnitude_value(magnitude);
        signed(n < 0, magnitude.is_even(), value)
    }

    /// Compute F(n) exactly for an arbitrary-precision index.
    #[must_use]
    pub fn evaluate_big(&self, n: &BigInt) -> BigInt {
        let magnitude = n.magnitude();
        let value = match magnitude.to_u64() {
            Some(m) => self.magnitude_value(m),
            None => {
                let (start, a, b) = self.seed_pair();
                trace!(seed = ?self.seed, bits = magnitude.bits(), "iterating past u64 range");
                advance_big(a, b, start, magnitude)
            }
        };
        signed(n.sign() == Sign::Minus, magnitude.is_even(), value)
    }

    /// F(m) for a non-negative magnitude.
    fn magnitude_value(&self, m: u64) -> BigUint {
        match m {
            0 => BigUint::zero(),
            1 | 2 => BigUint::one(),
            _ if self.seed == SeedMode::ClosedForm && m <= ACCURACY_BOUNDARY => closed_form(m),
            _ => {
                let (start, a, b) = self.seed_pair();
                trace!(seed = ?self.seed, steps = m - start, "iterating recurrence");
                advance(a, b, m - start)
            }
        }
    }

    /// Starting index k with F(k-1) and F(k).
    fn seed_pair(&self) -> (u64, BigUint, BigUint) {
        match self.seed {
            SeedMode::ClosedForm => (
                ACCURACY_BOUNDARY,
                closed_form(ACCURACY_BOUNDARY - 1),
                closed_form(ACCURACY_BOUNDARY),
            ),
            SeedMode::Iterative => (2, BigUint::one(), BigUint::one()),
        }
    }
}

/// Closed-form F(m) for 2 < m <= 70, converted to an exact integer.
#[allow(
    clippy::cast_possible_wrap,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
fn closed_form(m: u64) -> BigUint {
    debug_assert!(m <= ACCURACY_BOUNDARY);
    let golden = GoldenRatio::compute();
    let value = Approximation.raw(m as i64, &golden).round();
    BigUint::from(value as u64)
}

/// Step the window (F(k-1), F(k)) forward `steps` times and return the last value.
fn advance(mut a: BigUint, mut b: BigUint, steps: u64) -> BigUint {
    for _ in 0..steps {
        let next = &a + &b;
        a = std::mem::replace(&mut b, next);
    }
    b
}

/// Same as [`advance`], counting with a `BigUint` up to `target`.
fn advance_big(mut a: BigUint, mut b: BigUint, start: u64, target: &BigUint) -> BigUint {
    let mut k = BigUint::from(start);
    while &k < target {
        let next = &a + &b;
        a = std::mem::replace(&mut b, next);
        k += 1u32;
    }
    b
}

/// Negative indices with an even magnitude flip sign.
fn signed(negative: bool, even: bool, value: BigUint) -> BigInt {
    let sign = if negative && even {
        Sign::Minus
    } else {
        Sign::Plus
    };
    BigInt::from_biguint(sign, value)
}

/// Compute F(n) exactly with default options.
///
/// # Example
/// ```
/// assert_eq!(binet_core::fibonacci_exact(10).to_string(), "55");
/// assert_eq!(binet_core::fibonacci_exact(-10).to_string(), "-55");
/// ```
#[must_use]
pub fn fibonacci_exact(n: i64) -> BigInt {
    ExactEvaluator::default().evaluate(n)
}

/// Compute F(n) exactly with the given options.
#[must_use]
pub fn fibonacci_exact_with(n: i64, opts: &Options) -> BigInt {
    ExactEvaluator::with_options(opts).evaluate(n)
}

/// Compute F(n) exactly for an arbitrary-precision index.
#[must_use]
pub fn fibonacci_exact_big(n: &BigInt) -> BigInt {
    ExactEvaluator::default().evaluate_big(n)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn big(s: &str) -> BigInt {
        s.parse().unwrap()
    }

    #[test]
    fn fast_path_values() {
        for seed in [SeedMode::ClosedForm, SeedMode::Iterative] {
            let eval = ExactEvaluator::new(seed);
            assert_eq!(eval.evaluate(0), BigInt::from(0));
            assert_eq!(eval.evaluate(1), BigInt::from(1));
            assert_eq!(eval.evaluate(-1), BigInt::from(1));
            assert_eq!(eval.evaluate(2), BigInt::from(1));
            assert_eq!(eval.evaluate(-2), BigInt::from(-1));
        }
    }

    #[test]
    fn known_values() {
        assert_eq!(fibonacci_exact(10), BigInt::from(55));
        assert_eq!(fibonacci_exact(-10), BigInt::from(-55));
        assert_eq!(fibonacci_exact(-9), BigInt::from(34));
        assert_eq!(fibonacci_exact(70), BigInt::from(190_392_490_709_135_i64));
        assert_eq!(fibonacci_exact(71), BigInt::from(308_061_521_170_129_i64));
        assert_eq!(fibonacci_exact(93), BigInt::from(12_200_160_415_121_876_738_u64));
        assert_eq!(fibonacci_exact(100), big("354224848179261915075"));
        assert_eq!(
            fibonacci_exact(-200),
            big("-280571172992510140037611932413038677189525")
        );
    }

    #[test]
    fn seed_modes_agree() {
        let seeded = ExactEvaluator::new(SeedMode::ClosedForm);
        let iterative = ExactEvaluator::new(SeedMode::Iterative);
        for n in -150..=150 {
            assert_eq!(seeded.evaluate(n), iterative.evaluate(n), "F({n})");
        }
    }

    #[test]
    fn options_select_seed() {
        let opts = Options {
            seed: SeedMode::Iterative,
            ..Default::default()
        };
        assert_eq!(ExactEvaluator::with_options(&opts).seed(), SeedMode::Iterative);
        assert_eq!(fibonacci_exact_with(94, &opts), big("19740274219868223167"));
    }

    #[test]
    fn big_index_matches_machine_index() {
        for n in [-300_i64, -71, -70, -3, 0, 5, 70, 71, 300] {
            assert_eq!(fibonacci_exact_big(&BigInt::from(n)), fibonacci_exact(n), "F({n})");
        }
    }

    #[test]
    fn advance_big_matches_advance() {
        let target = BigUint::from(120u32);
        let by_word = advance(BigUint::one(), BigUint::one(), 118);
        let by_big = advance_big(BigUint::one(), BigUint::one(), 2, &target);
        assert_eq!(by_word, by_big);
    }

    #[test]
    fn zero_is_unsigned() {
        assert_eq!(signed(true, true, BigUint::zero()).sign(), Sign::NoSign);
    }
}
