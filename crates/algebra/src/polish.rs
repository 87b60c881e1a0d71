// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Newton refinement of closed-form roots.
//!
//! The closed-form expressions lose a few digits through cancellation. A
//! handful of Newton steps on the original equation win them back. A step is
//! only kept when it lowers the residual, so a root sitting on a multiple zero
//! (where the derivative vanishes) is left where the formula put it.

use num::complex::Complex64;

const POLISH_ITERATIONS: usize = 4;

/// Evaluates `p(x)` and `p'(x)` in one Horner pass.
fn horner_real(coefficients: &[f64], x: f64) -> (f64, f64) {
    let mut value = 0.0;
    let mut derivative = 0.0;
    for &coeff in coefficients {
        derivative = derivative * x + value;
        value = value * x + coeff;
    }
    (value, derivative)
}

fn horner_complex(coefficients: &[f64], z: Complex64) -> (Complex64, Complex64) {
    let mut value = Complex64::new(0.0, 0.0);
    let mut derivative = Complex64::new(0.0, 0.0);
    for &coeff in coefficients {
        derivative = derivative * z + value;
        value = value * z + coeff;
    }
    (value, derivative)
}

pub(crate) fn polish_real(coefficients: &[f64], root: f64) -> f64 {
    let mut x = root;
    let (mut value, mut derivative) = horner_real(coefficients, x);
    for _ in 0..POLISH_ITERATIONS {
        if value == 0.0 || derivative == 0.0 {
            break;
        }
        let candidate = x - value / derivative;
        let (next_value, next_derivative) = horner_real(coefficients, candidate);
        if !(next_value.abs() < value.abs()) {
            break;
        }
        x = candidate;
        value = next_value;
        derivative = next_derivative;
    }
    x
}

pub(crate) fn polish_complex(coefficients: &[f64], root: Complex64) -> Complex64 {
    let mut z = root;
    let (mut value, mut derivative) = horner_complex(coefficients, z);
    for _ in 0..POLISH_ITERATIONS {
        if value.norm_sqr() == 0.0 || derivative.norm_sqr() == 0.0 {
            break;
        }
        let candidate = z - value / derivative;
        let (next_value, next_derivative) = horner_complex(coefficients, candidate);
        if !(next_value.norm_sqr() < value.norm_sqr()) {
            break;
        }
        z = candidate;
        value = next_value;
        derivative = next_derivative;
    }
    z
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_horner_real() {
        // x^2 - 3x + 2 at 3: value 2, derivative 3
        assert_eq!(horner_real(&[1.0, -3.0, 2.0], 3.0), (2.0, 3.0));
    }

    #[test]
    fn test_polish_real_improves_estimate() {
        // x^2 - 2
        let coeffs = [1.0, 0.0, -2.0];
        let polished = polish_real(&coeffs, 1.4);
        assert!((polished - std::f64::consts::SQRT_2).abs() < 1e-12);
    }

    #[test]
    fn test_polish_real_keeps_exact_root() {
        assert_eq!(polish_real(&[1.0, -3.0, 2.0], 2.0), 2.0);
    }

    #[test]
    fn test_polish_complex_improves_estimate() {
        // x^2 + 1
        let coeffs = [1.0, 0.0, 1.0];
        let polished = polish_complex(&coeffs, Complex64::new(0.01, 0.98));
        assert!((polished - Complex64::new(0.0, 1.0)).norm() < 1e-10);
    }
}
