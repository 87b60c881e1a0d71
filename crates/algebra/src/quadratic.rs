// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use crate::polish::{polish_complex, polish_real};
use crate::{ensure_finite, finish, scale_factor, validate, AlgebraResult, Root};
use num::complex::Complex64;

/// Rounding bound, relative to `b² + |4ac|`, under which the discriminant
/// counts as zero.
const ROUNDING_TOLERANCE: f64 = 8.0 * f64::EPSILON;

/// Solves `a·x² + b·x + c = 0`.
///
/// A non-negative discriminant gives two real roots (equal for a double
/// root); a negative one gives a conjugate pair. Real roots are computed
/// through `q = −(b + sign(b)·√Δ)/2` so that neither root suffers from
/// cancellation.
///
/// The coefficients are first scaled by a power of two so that `b²` and
/// `4ac` cannot overflow. The discriminant is only snapped to zero within a
/// few ulps of `b² + |4ac|`, so two roots closer than about `√ε` are kept
/// apart but a double root perturbed by more than rounding noise comes back
/// as a close pair.
///
/// # Examples
///
/// ```
/// use polyalg_algebra::{quadratic, Root};
///
/// let roots = quadratic(1.0, -3.0, 2.0).unwrap();
/// assert_eq!(roots, [Root::Real(1.0), Root::Real(2.0)]);
/// ```
pub fn quadratic(a: f64, b: f64, c: f64) -> AlgebraResult<[Root; 2]> {
    validate(&[a, b, c])?;

    let factor = scale_factor(&[a, b, c]);
    let scaled = [a * factor, b * factor, c * factor];
    let [a, b, c] = scaled;

    let mut discriminant = b * b - 4.0 * a * c;
    if discriminant.abs() <= ROUNDING_TOLERANCE * (b * b + (4.0 * a * c).abs()) {
        discriminant = 0.0;
    }

    let roots = if discriminant >= 0.0 {
        let q = -0.5 * (b + discriminant.sqrt().copysign(b));
        if q == 0.0 {
            // b == 0 and c == 0
            [Root::Real(0.0), Root::Real(0.0)]
        } else {
            let (x1, x2) = (q / a, c / q);
            ensure_finite(2, &[x1, x2])?;
            [
                Root::Real(polish_real(&scaled, x1)),
                Root::Real(polish_real(&scaled, x2)),
            ]
        }
    } else {
        let re = -b / (2.0 * a);
        let im = (-discriminant).sqrt() / (2.0 * a).abs();
        ensure_finite(2, &[re, im])?;
        let z = polish_complex(&scaled, Complex64::new(re, im));
        [Root::Complex(z), Root::Complex(z.conj())]
    };

    Ok(finish(roots))
}
