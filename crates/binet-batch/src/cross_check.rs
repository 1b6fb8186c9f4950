//! Cross-method agreement: closed-form formulas against the exact evaluator.

use std::ops::RangeInclusive;

use binet_core::{check_boundary, AccuracyError, ExactEvaluator, Formula, Options};
use num_bigint::BigInt;
use rayon::prelude::*;
use tracing::warn;

/// A closed-form value that disagrees with the exact value.
#[derive(Debug, Clone, PartialEq)]
pub struct Mismatch {
    pub index: i64,
    pub formula: Formula,
    pub closed_form: f64,
    pub exact: BigInt,
}

/// Outcome of a cross-check run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CrossCheckReport {
    /// Number of indices evaluated.
    pub checked: usize,
    /// Disagreements, in ascending index order.
    pub mismatches: Vec<Mismatch>,
}

impl CrossCheckReport {
    /// True when every formula matched the exact value at every index.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        self.mismatches.is_empty()
    }
}

/// Evaluate every formula and the exact evaluator over `range` in parallel.
///
/// Both ends of the range must lie within the accuracy boundary.
pub fn cross_check(
    range: RangeInclusive<i64>,
    opts: &Options,
) -> Result<CrossCheckReport, AccuracyError> {
    check_boundary(*range.start())?;
    check_boundary(*range.end())?;

    let exact = ExactEvaluator::with_options(opts);
    let indices: Vec<i64> = range.collect();
    let min_len = opts.clone().normalize().min_parallel_len;

    let mismatches: Vec<Mismatch> = indices
        .par_iter()
        .with_min_len(min_len)
        .map(|&n| compare_at(&exact, n))
        .collect::<Result<Vec<_>, _>>()?
        .into_iter()
        .flatten()
        .collect();

    for m in &mismatches {
        warn!(
            index = m.index,
            formula = %m.formula,
            closed_form = m.closed_form,
            exact = %m.exact,
            "closed-form value disagrees with exact value"
        );
    }

    Ok(CrossCheckReport {
        checked: indices.len(),
        mismatches,
    })
}

#[allow(clippy::cast_possible_truncation)]
fn compare_at(exact: &ExactEvaluator, n: i64) -> Result<Vec<Mismatch>, AccuracyError> {
    let expected = exact.evaluate(n);
    let mut mismatches = Vec::new();
    for formula in Formula::ALL {
        let value = formula.evaluate(n)?;
        if BigInt::from(value as i64) != expected {
            mismatches.push(Mismatch {
                index: n,
                formula,
                closed_form: value,
                exact: expected.clone(),
            });
        }
    }
    Ok(mismatches)
}

#[cfg(test)]
mod tests {
    use super::*;
    use binet_core::SeedMode;

    #[test]
    fn full_range_is_consistent() {
        let report = cross_check(-70..=70, &Options::default()).unwrap();
        assert_eq!(report.checked, 141);
        assert!(report.is_consistent(), "{:?}", report.mismatches);
    }

    #[test]
    fn consistent_against_pure_iteration() {
        let opts = Options {
            seed: SeedMode::Iterative,
            ..Options::default()
        };
        let report = cross_check(-70..=70, &opts).unwrap();
        assert!(report.is_consistent(), "{:?}", report.mismatches);
    }

    #[test]
    fn empty_range() {
        #[allow(clippy::reversed_empty_ranges)]
        let report = cross_check(5..=1, &Options::default()).unwrap();
        assert_eq!(report, CrossCheckReport::default());
    }

    #[test]
    fn refuses_range_past_boundary() {
        assert_eq!(
            cross_check(0..=71, &Options::default()),
            Err(AccuracyError::new(71))
        );
        assert_eq!(
            cross_check(-90..=0, &Options::default()),
            Err(AccuracyError::new(-90))
        );
    }
}
