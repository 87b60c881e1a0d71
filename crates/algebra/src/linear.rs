// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use crate::{validate, AlgebraResult};

/// Solves `a·x + b = 0`.
///
/// # Errors
///
/// Fails when `a` is zero or either coefficient is not finite.
///
/// # Examples
///
/// ```
/// use polyalg_algebra::linear;
///
/// assert_eq!(linear(2.0, -3.0).unwrap(), 1.5);
/// ```
pub fn linear(a: f64, b: f64) -> AlgebraResult<f64> {
    validate(&[a, b])?;
    // -0.0 + 0.0 == +0.0
    Ok(-b / a + 0.0)
}
