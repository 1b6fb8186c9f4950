//! Constants for the accuracy boundary, fast paths and batch tuning.

/// Largest index magnitude the closed-form formulas evaluate.
///
/// Every F(n) with |n| <= 70 rounds to its exact value from a 64-bit float
/// evaluation; from 71 on the accumulated error of `phi^n` exceeds one half.
pub const ACCURACY_BOUNDARY: u64 = 70;

/// Message carried by [`crate::AccuracyError`].
pub const ACCURACY_MESSAGE: &str =
    "Absolute values more than 70 are not accurate; use the exact evaluator instead.";

/// Default minimum number of indices handed to one rayon split.
pub const DEFAULT_MIN_PARALLEL_LEN: usize = 8;

/// Fast-path value for a signed index with |n| <= 2.
///
/// F(-1) = 1 and F(-2) = -1 follow the negafibonacci sign rule.
#[must_use]
pub const fn small_index_value(n: i64) -> Option<i32> {
    match n {
        0 => Some(0),
        1 | -1 | 2 => Some(1),
        -2 => Some(-1),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fast_path_table() {
        let table = [(-2, -1), (-1, 1), (0, 0), (1, 1), (2, 1)];
        for (n, value) in table {
            assert_eq!(small_index_value(n), Some(value), "F({n})");
        }
    }

    #[test]
    fn lookup_misses_outside_fast_path() {
        assert_eq!(small_index_value(3), None);
        assert_eq!(small_index_value(-3), None);
        assert_eq!(small_index_value(i64::MIN), None);
    }

    #[test]
    fn message_names_the_boundary() {
        assert!(ACCURACY_MESSAGE.contains(&ACCURACY_BOUNDARY.to_string()));
    }
}
