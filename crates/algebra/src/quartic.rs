// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use crate::polish::{polish_complex, polish_real};
use crate::{
    cubic, ensure_finite, finish, quadratic, validate, AlgebraError, AlgebraResult, Root,
    DISCRIMINANT_EPSILON,
};
use num::complex::Complex64;
use std::f64::consts::SQRT_2;
use tracing::trace;

/// Solves `a·x⁴ + b·x³ + c·x² + d·x + e = 0`.
///
/// The equation is made monic and depressed through `x = y − b/(4a)` into
/// `y⁴ + p·y² + q·y + r = 0`.
///
/// - When `q` vanishes the depressed quartic is biquadratic: solve
///   `z² + p·z + r = 0` and take both square roots of each `z`.
/// - Otherwise Ferrari's method: with `m` the largest real root of the
///   resolvent cubic `8m³ + 8p·m² + (2p² − 8r)·m − q² = 0` (positive when
///   `q ≠ 0`), the quartic splits into two quadratics in `y`.
///
/// Returns [`AlgebraError::Overflow`] for this degree when the depressed or
/// resolvent coefficients leave the `f64` range.
///
/// # Examples
///
/// ```
/// use polyalg_algebra::{quartic, Root};
///
/// // x^4 - 1 = (x - 1)(x + 1)(x^2 + 1)
/// let roots = quartic(1.0, 0.0, 0.0, 0.0, -1.0).unwrap();
/// assert_eq!(roots[0], Root::Real(-1.0));
/// assert_eq!(roots[1], Root::Real(1.0));
/// assert!(!roots[2].is_real() && !roots[3].is_real());
/// ```
pub fn quartic(a: f64, b: f64, c: f64, d: f64, e: f64) -> AlgebraResult<[Root; 4]> {
    let coefficients = [a, b, c, d, e];
    validate(&coefficients)?;

    let (b, c, d, e) = (b / a, c / a, d / a, e / a);
    let shift = b / 4.0;
    let b2 = b * b;
    let p = c - 3.0 * b2 / 8.0;
    let q = b2 * b / 8.0 - b * c / 2.0 + d;
    let r = -3.0 * b2 * b2 / 256.0 + b2 * c / 16.0 - b * d / 4.0 + e;
    ensure_finite(4, &[shift, p, q, r])?;

    let q_scale = 1.0 + p.abs().powf(1.5) + r.abs().powf(0.75);
    let depressed = if q.abs() <= DISCRIMINANT_EPSILON * q_scale {
        biquadratic(p, r)?
    } else {
        match resolvent_root(p, q, r)? {
            Some(m) => ferrari(p, q, m),
            None => biquadratic(p, r)?,
        }
    };

    let roots = depressed.map(|root| match root {
        Root::Real(y) => Root::Real(polish_real(&coefficients, y - shift)),
        Root::Complex(z) => Root::Complex(polish_complex(
            &coefficients,
            Complex64::new(z.re - shift, z.im),
        )),
    });

    Ok(finish(roots))
}

/// Roots of `y⁴ + p·y² + r = 0`.
fn biquadratic(p: f64, r: f64) -> AlgebraResult<[Root; 4]> {
    let [z1, z2] = quadratic(1.0, p, r).map_err(|_| AlgebraError::Overflow { degree: 4 })?;
    let [y1, y2] = square_roots(z1);
    let [y3, y4] = square_roots(z2);
    Ok([y1, y2, y3, y4])
}

fn square_roots(z: Root) -> [Root; 2] {
    match z {
        Root::Real(z) if z >= 0.0 => {
            let s = z.sqrt();
            [Root::Real(s), Root::Real(-s)]
        }
        Root::Real(z) => {
            let s = (-z).sqrt();
            [
                Root::Complex(Complex64::new(0.0, s)),
                Root::Complex(Complex64::new(0.0, -s)),
            ]
        }
        Root::Complex(z) => {
            let w = z.sqrt();
            [Root::Complex(w), Root::Complex(-w)]
        }
    }
}

/// Largest real root of the resolvent cubic, if it is positive.
fn resolvent_root(p: f64, q: f64, r: f64) -> AlgebraResult<Option<f64>> {
    let (linear, constant) = (2.0 * p * p - 8.0 * r, -q * q);
    ensure_finite(4, &[8.0 * p, linear, constant])?;
    let roots = cubic(8.0, 8.0 * p, linear, constant)
        .map_err(|_| AlgebraError::Overflow { degree: 4 })?;
    let m = roots
        .iter()
        .filter_map(Root::as_real)
        .fold(f64::NEG_INFINITY, f64::max);
    trace!(m, "resolvent cubic root");
    Ok((m > 0.0).then_some(m))
}

/// Splits the depressed quartic into two quadratics around `±√(2m)/2`.
fn ferrari(p: f64, q: f64, m: f64) -> [Root; 4] {
    let sqrt_2m = (2.0 * m).sqrt();
    let ratio = SQRT_2 * q / m.sqrt();

    let split = |sign: f64| -> [Root; 2] {
        let centre = sign * sqrt_2m / 2.0;
        let mut inner = -(2.0 * p + 2.0 * m + sign * ratio);
        if inner.abs() <= DISCRIMINANT_EPSILON * (2.0 * p.abs() + 2.0 * m + ratio.abs()) {
            inner = 0.0;
        }
        if inner >= 0.0 {
            let half = inner.sqrt() / 2.0;
            [Root::Real(centre + half), Root::Real(centre - half)]
        } else {
            let half = (-inner).sqrt() / 2.0;
            [
                Root::Complex(Complex64::new(centre, half)),
                Root::Complex(Complex64::new(centre, -half)),
            ]
        }
    };

    let [y1, y2] = split(1.0);
    let [y3, y4] = split(-1.0);
    [y1, y2, y3, y4]
}
