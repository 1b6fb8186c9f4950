//! Golden-ratio constants shared by both closed-form formulas.

/// `sqrt(5)` and the two golden-ratio conjugates, recomputed on every call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GoldenRatio {
    /// Square root of 5.
    pub sqrt5: f64,
    /// `(sqrt5 + 1) / 2`, the golden ratio used by Binet's formula.
    pub phi_plus: f64,
    /// `(sqrt5 - 1) / 2`, its reciprocal, used by the approximation formula.
    pub phi_minus: f64,
}

impl GoldenRatio {
    #[must_use]
    pub fn compute() -> Self {
        let sqrt5 = 5f64.sqrt();
        Self {
            sqrt5,
            phi_plus: 0.5 * (sqrt5 + 1.0),
            phi_minus: 0.5 * (sqrt5 - 1.0),
        }
    }
}
