//! Property-based tests for the closed-form and exact evaluators.

use num_bigint::BigInt;
use proptest::prelude::*;

use binet_core::{
    fibonacci_approximation, fibonacci_binet, fibonacci_exact, fibonacci_exact_big,
    fibonacci_exact_with, AccuracyError, Options, SeedMode,
};

#[allow(clippy::cast_possible_truncation)]
fn as_bigint(value: f64) -> BigInt {
    BigInt::from(value as i64)
}

#[test]
fn all_methods_agree_inside_boundary() {
    for n in -70..=70 {
        let binet = fibonacci_binet(n).unwrap();
        let approx = fibonacci_approximation(n).unwrap();
        let exact = fibonacci_exact(n);
        assert_eq!(binet, approx, "Binet != Approximation at n={n}");
        assert_eq!(as_bigint(binet), exact, "Binet != exact at n={n}");
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Closed forms refuse every index past the boundary; the exact path does not.
    #[test]
    fn closed_forms_refuse_beyond_boundary(n in 71i64..100_000, negative in any::<bool>()) {
        let n = if negative { -n } else { n };
        prop_assert_eq!(fibonacci_binet(n), Err(AccuracyError::new(n)));
        prop_assert_eq!(fibonacci_approximation(n), Err(AccuracyError::new(n)));
    }

    /// F(n) == F(n-1) + F(n-2) across and beyond the boundary.
    #[test]
    fn exact_satisfies_recurrence(n in 3i64..2000) {
        let f = fibonacci_exact(n);
        prop_assert_eq!(f, fibonacci_exact(n - 1) + fibonacci_exact(n - 2), "n={}", n);
    }

    /// F(-n) == F(n) * (-1)^(n+1).
    #[test]
    fn negafibonacci_law(n in 1i64..2000) {
        let positive = fibonacci_exact(n);
        let expected = if n % 2 == 0 { -positive } else { positive };
        prop_assert_eq!(fibonacci_exact(-n), expected);
    }

    /// Closed-form seeding and pure iteration give identical results.
    #[test]
    fn seed_modes_agree(n in -1500i64..1500) {
        let iterative = Options { seed: SeedMode::Iterative, ..Options::default() };
        prop_assert_eq!(fibonacci_exact(n), fibonacci_exact_with(n, &iterative));
    }

    /// Arbitrary-precision indices take the same path as machine indices.
    #[test]
    fn big_index_matches(n in -3000i64..3000) {
        prop_assert_eq!(fibonacci_exact_big(&BigInt::from(n)), fibonacci_exact(n));
    }
}
