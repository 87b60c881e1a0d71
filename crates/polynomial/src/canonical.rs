// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Canonical coefficient form.

use num_traits::Zero;
use tracing::trace;

/// Strips leading zero coefficients.
///
/// The result never starts with a zero unless it is exactly `[0.0]`, the zero
/// polynomial. An empty or all-zero input yields `[0.0]`. `-0.0` counts as
/// zero; NaN does not.
///
/// # Examples
///
/// ```
/// use polyalg_polynomial::canonicalize;
///
/// assert_eq!(canonicalize(vec![0.0, 0.0, 2.0, 1.0]), vec![2.0, 1.0]);
/// assert_eq!(canonicalize(vec![0.0, -0.0]), vec![0.0]);
/// assert_eq!(canonicalize(vec![]), vec![0.0]);
/// ```
pub fn canonicalize(mut raw: Vec<f64>) -> Vec<f64> {
    match raw.iter().position(|c| !c.is_zero()) {
        None => vec![0.0],
        Some(0) => raw,
        Some(leading) => {
            trace!(dropped = leading, "stripping leading zero coefficients");
            raw.drain(..leading);
            raw
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_input_untouched() {
        assert_eq!(canonicalize(vec![1.0, 0.0, -2.0]), vec![1.0, 0.0, -2.0]);
    }

    #[test]
    fn test_leading_zeros_stripped() {
        assert_eq!(canonicalize(vec![0.0, 0.0, 1.0, 2.0]), vec![1.0, 2.0]);
        assert_eq!(canonicalize(vec![-0.0, 3.0]), vec![3.0]);
    }

    #[test]
    fn test_all_zero_collapses() {
        assert_eq!(canonicalize(vec![0.0, 0.0, 0.0]), vec![0.0]);
        assert_eq!(canonicalize(vec![]), vec![0.0]);
    }

    #[test]
    fn test_negative_zero_polynomial_is_positive_zero() {
        let zero = canonicalize(vec![-0.0]);
        assert!(zero[0].is_sign_positive());
    }

    #[test]
    fn test_nan_is_not_stripped() {
        let result = canonicalize(vec![0.0, f64::NAN, 1.0]);
        assert_eq!(result.len(), 2);
        assert!(result[0].is_nan());
    }
}
