// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! # Closed-form Root Formulas
//!
//! Explicit algebraic solutions of real polynomial equations up to degree four.
//! Abel–Ruffini rules out such formulas from degree five on, so this crate stops
//! at the quartic.
//!
//! ## Conventions
//!
//! - Every solver takes the coefficients from the highest power down, e.g.
//!   `quadratic(a, b, c)` solves `a·x² + b·x + c = 0`.
//! - The leading coefficient must be nonzero and every coefficient finite.
//! - Roots come back as [`Root`] values: [`Root::Real`] or [`Root::Complex`].
//! - Ordering: real roots first (ascending), then complex roots by real part,
//!   every conjugate pair listed with the positive imaginary part first.
//!   Repeated roots are repeated.
//! - Finite coefficients whose roots or intermediate terms do not fit in an
//!   `f64` give [`AlgebraError::Overflow`], never NaN or infinite roots.

pub mod cubic;
pub mod errors;
pub mod linear;
mod polish;
pub mod quadratic;
pub mod quartic;
pub mod root;

pub use cubic::cubic;
pub use errors::{AlgebraError, AlgebraResult};
pub use linear::linear;
pub use quadratic::quadratic;
pub use quartic::quartic;
pub use root::{compare_roots, Root};

/// Relative tolerance under which a discriminant is treated as exactly zero.
pub(crate) const DISCRIMINANT_EPSILON: f64 = 1e-12;

/// Checks that all coefficients are finite and that the leading one is nonzero.
pub(crate) fn validate(coefficients: &[f64]) -> AlgebraResult<()> {
    if let Some((index, value)) = coefficients
        .iter()
        .enumerate()
        .find(|(_, c)| !c.is_finite())
    {
        return Err(AlgebraError::NonFinite {
            index,
            value: *value,
        });
    }

    match coefficients.first() {
        Some(leading) if *leading != 0.0 => Ok(()),
        _ => Err(AlgebraError::ZeroLeadingCoefficient {
            degree: coefficients.len().saturating_sub(1),
        }),
    }
}

/// Fails with [`AlgebraError::Overflow`] unless every value is finite.
pub(crate) fn ensure_finite(degree: usize, values: &[f64]) -> AlgebraResult<()> {
    if values.iter().all(|v| v.is_finite()) {
        Ok(())
    } else {
        Err(AlgebraError::Overflow { degree })
    }
}

/// Power of two that brings the largest coefficient magnitude close to one.
///
/// Multiplying by it is exact, so the roots are unchanged.
pub(crate) fn scale_factor(coefficients: &[f64]) -> f64 {
    let largest = coefficients.iter().fold(0.0f64, |acc, c| acc.max(c.abs()));
    if largest == 0.0 {
        return 1.0;
    }
    let exponent = largest.log2().floor().clamp(-1000.0, 1000.0);
    (-exponent).exp2()
}

/// Normalizes signed zeros and sorts roots into the crate-wide order.
///
/// Conjugates are moved next to each other, so a repeated complex pair reads
/// `z, z̄, z, z̄`.
pub(crate) fn finish<const N: usize>(mut roots: [Root; N]) -> [Root; N] {
    for root in roots.iter_mut() {
        match root {
            Root::Real(x) => *x += 0.0,
            Root::Complex(z) => {
                z.re += 0.0;
                z.im += 0.0;
            }
        }
    }
    roots.sort_by(compare_roots);

    for i in 0..N {
        let Root::Complex(z) = roots[i] else {
            continue;
        };
        if z.im <= 0.0 {
            continue;
        }
        let conjugate = Root::Complex(z.conj());
        if let Some(j) = (i + 1..N).find(|&j| roots[j] == conjugate) {
            roots[i + 1..=j].rotate_right(1);
        }
    }
    roots
}

#[cfg(test)]
mod tests {
    use super::*;
    use num::complex::Complex64;

    #[test]
    fn test_validate_rejects_zero_leading() {
        assert_eq!(
            validate(&[0.0, 1.0, 2.0]),
            Err(AlgebraError::ZeroLeadingCoefficient { degree: 2 })
        );
    }

    #[test]
    fn test_validate_rejects_non_finite() {
        let err = validate(&[1.0, f64::NAN]).unwrap_err();
        assert!(matches!(err, AlgebraError::NonFinite { index: 1, .. }));

        let err = validate(&[f64::INFINITY, 1.0]).unwrap_err();
        assert!(matches!(err, AlgebraError::NonFinite { index: 0, .. }));
    }

    #[test]
    fn test_ensure_finite() {
        assert_eq!(ensure_finite(2, &[1.0, -3.5]), Ok(()));
        assert_eq!(
            ensure_finite(3, &[1.0, f64::INFINITY]),
            Err(AlgebraError::Overflow { degree: 3 })
        );
        assert_eq!(
            ensure_finite(4, &[f64::NAN]),
            Err(AlgebraError::Overflow { degree: 4 })
        );
    }

    #[test]
    fn test_scale_factor_is_a_power_of_two() {
        assert_eq!(scale_factor(&[1.0, -3.0, 2.0]), 0.5);
        assert_eq!(scale_factor(&[0.25, 0.1]), 4.0);
        let factor = scale_factor(&[1.0, 1e200, 1.0]);
        assert!((1.0..2.0).contains(&(1e200 * factor)));
    }

    #[test]
    fn test_finish_interleaves_repeated_conjugates() {
        let up = Root::Complex(Complex64::new(0.0, 1.0));
        let down = Root::Complex(Complex64::new(0.0, -1.0));
        assert_eq!(finish([down, up, down, up]), [up, down, up, down]);

        let real = Root::Real(-2.0);
        assert_eq!(finish([down, real, up]), [real, up, down]);
    }

    #[test]
    fn test_finish_normalizes_negative_zero() {
        let [root] = finish([Root::Real(-0.0)]);
        match root {
            Root::Real(x) => assert!(x.is_sign_positive()),
            Root::Complex(_) => panic!("expected a real root"),
        }
    }
}
