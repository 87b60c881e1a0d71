// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use crate::polish::{polish_complex, polish_real};
use crate::{ensure_finite, finish, validate, AlgebraResult, Root, DISCRIMINANT_EPSILON};
use num::complex::Complex64;
use std::f64::consts::PI;

/// Solves `a·x³ + b·x² + c·x + d = 0`.
///
/// The equation is made monic and depressed through `x = t − b/(3a)` into
/// `t³ + p·t + q = 0`. The sign of `Δ = (q/2)² + (p/3)³` picks the branch:
///
/// - `Δ < 0`: three distinct real roots, trigonometric method.
/// - `Δ = 0`: a repeated real root (a triple root when `p = q = 0`).
/// - `Δ > 0`: one real root and a conjugate pair, Cardano with real cube roots.
///
/// Returns [`AlgebraError::Overflow`](crate::AlgebraError::Overflow) when the
/// depressed coefficients or `Δ` leave the `f64` range.
///
/// # Examples
///
/// ```
/// use polyalg_algebra::cubic;
///
/// // (x - 1)(x - 2)(x - 3)
/// let roots = cubic(1.0, -6.0, 11.0, -6.0).unwrap();
/// for (root, expected) in roots.iter().zip([1.0, 2.0, 3.0]) {
///     assert!((root.re() - expected).abs() < 1e-12);
/// }
/// ```
pub fn cubic(a: f64, b: f64, c: f64, d: f64) -> AlgebraResult<[Root; 3]> {
    let coefficients = [a, b, c, d];
    validate(&coefficients)?;

    let (b, c, d) = (b / a, c / a, d / a);
    let shift = b / 3.0;
    let p = c - b * b / 3.0;
    let q = 2.0 * b * b * b / 27.0 - b * c / 3.0 + d;
    ensure_finite(3, &[shift, p, q])?;

    if p == 0.0 && q == 0.0 {
        return Ok(finish([Root::Real(polish_real(&coefficients, -shift)); 3]));
    }

    let half_q = q / 2.0;
    let third_p = p / 3.0;
    let cube = third_p * third_p * third_p;
    let mut delta = half_q * half_q + cube;
    ensure_finite(3, &[delta])?;
    if delta.abs() <= DISCRIMINANT_EPSILON * (half_q * half_q + cube.abs()) {
        delta = 0.0;
    }

    let roots = if delta < 0.0 {
        // p < 0 here, so the radius is real.
        let radius = (-third_p).sqrt();
        let phi = (-half_q / (radius * radius * radius))
            .clamp(-1.0, 1.0)
            .acos();
        [0.0, 1.0, 2.0].map(|k| {
            let t = 2.0 * radius * ((phi + 2.0 * PI * k) / 3.0).cos();
            Root::Real(polish_real(&coefficients, t - shift))
        })
    } else {
        let sqrt_delta = delta.sqrt();
        let u = (-half_q + sqrt_delta).cbrt();
        let v = (-half_q - sqrt_delta).cbrt();
        let real = Root::Real(polish_real(&coefficients, u + v - shift));
        let re = -(u + v) / 2.0 - shift;
        let im = (u - v).abs() * 3f64.sqrt() / 2.0;

        if delta == 0.0 || im == 0.0 {
            let repeated = Root::Real(polish_real(&coefficients, re));
            [real, repeated, repeated]
        } else {
            let z = polish_complex(&coefficients, Complex64::new(re, im));
            [real, Root::Complex(z), Root::Complex(z.conj())]
        }
    };

    Ok(finish(roots))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AlgebraError;

    fn assert_roots(actual: &[Root], expected: &[Root], tol: f64) {
        assert_eq!(actual.len(), expected.len());
        for (a, e) in actual.iter().zip(expected) {
            assert_eq!(a.is_real(), e.is_real(), "expected {e}, got {a}");
            assert!(
                (a.to_complex() - e.to_complex()).norm() < tol,
                "expected {e}, got {a}"
            );
        }
    }

    #[test]
    fn test_three_distinct_real_roots() {
        let roots = cubic(1.0, -6.0, 11.0, -6.0).unwrap();
        assert_roots(
            &roots,
            &[Root::Real(1.0), Root::Real(2.0), Root::Real(3.0)],
            1e-12,
        );
    }

    #[test]
    fn test_scaled_cubic() {
        // 2(x + 1)(x - 0.5)(x - 4)
        let roots = cubic(2.0, -7.0, -5.0, 4.0).unwrap();
        assert_roots(
            &roots,
            &[Root::Real(-1.0), Root::Real(0.5), Root::Real(4.0)],
            1e-12,
        );
    }

    #[test]
    fn test_one_real_and_complex_pair() {
        // (x - 1)(x^2 + 1) = x^3 - x^2 + x - 1
        let roots = cubic(1.0, -1.0, 1.0, -1.0).unwrap();
        assert_roots(
            &roots,
            &[
                Root::Real(1.0),
                Root::Complex(Complex64::new(0.0, 1.0)),
                Root::Complex(Complex64::new(0.0, -1.0)),
            ],
            1e-12,
        );
    }

    #[test]
    fn test_double_root() {
        // (x - 1)^2 (x - 2)
        let roots = cubic(1.0, -4.0, 5.0, -2.0).unwrap();
        assert_roots(
            &roots,
            &[Root::Real(1.0), Root::Real(1.0), Root::Real(2.0)],
            1e-7,
        );
    }

    #[test]
    fn test_triple_root() {
        // (x - 2)^3
        let roots = cubic(1.0, -6.0, 12.0, -8.0).unwrap();
        assert_roots(&roots, &[Root::Real(2.0); 3], 1e-5);
    }

    #[test]
    fn test_pure_cube() {
        let roots = cubic(1.0, 0.0, 0.0, 0.0).unwrap();
        assert_eq!(roots, [Root::Real(0.0); 3]);
    }

    #[test]
    fn test_cube_root_of_eight() {
        // x^3 - 8 = (x - 2)(x^2 + 2x + 4)
        let roots = cubic(1.0, 0.0, 0.0, -8.0).unwrap();
        assert_roots(
            &roots,
            &[
                Root::Real(2.0),
                Root::Complex(Complex64::new(-1.0, 3f64.sqrt())),
                Root::Complex(Complex64::new(-1.0, -(3f64.sqrt()))),
            ],
            1e-12,
        );
    }

    #[test]
    fn test_overflowing_terms_are_reported() {
        // b^3 overflows
        assert_eq!(
            cubic(1.0, 1e110, 1.0, 1.0),
            Err(AlgebraError::Overflow { degree: 3 })
        );
        // q is finite but q^2 is not
        assert_eq!(
            cubic(1.0, 0.0, 0.0, 1e200),
            Err(AlgebraError::Overflow { degree: 3 })
        );
    }

    #[test]
    fn test_degenerate_cubic() {
        assert_eq!(
            cubic(0.0, 1.0, 2.0, 3.0),
            Err(AlgebraError::ZeroLeadingCoefficient { degree: 3 })
        );
    }
}
