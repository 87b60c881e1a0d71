// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Term-by-term differentiation and integration.

use crate::Polynomial;

impl Polynomial {
    /// Returns the derivative `p'`.
    ///
    /// The derivative of a constant is the zero polynomial.
    ///
    /// # Examples
    ///
    /// ```
    /// use polyalg_polynomial::Polynomial;
    ///
    /// let p = Polynomial::new([1, -8, 12, 3]);
    /// assert_eq!(p.differentiate().coefficients(), &[3.0, -16.0, 12.0]);
    /// ```
    pub fn differentiate(&self) -> Polynomial {
        let degree = self.degree();
        let derivative = self.coefficients[..degree]
            .iter()
            .enumerate()
            .map(|(i, coeff)| coeff * (degree - i) as f64)
            .collect();
        self.rebuild(derivative)
    }

    /// Returns the antiderivative with a zero constant of integration.
    ///
    /// # Examples
    ///
    /// ```
    /// use polyalg_polynomial::Polynomial;
    ///
    /// let p = Polynomial::new([3, -16, 12]);
    /// assert_eq!(p.integrate().coefficients(), &[1.0, -8.0, 12.0, 0.0]);
    /// ```
    pub fn integrate(&self) -> Polynomial {
        let degree = self.degree();
        let mut antiderivative: Vec<f64> = self
            .coefficients
            .iter()
            .enumerate()
            .map(|(i, coeff)| coeff / (degree - i + 1) as f64)
            .collect();
        antiderivative.push(0.0);
        self.rebuild(antiderivative)
    }

    /// Differentiates `n` times. `n = 0` returns a copy.
    pub fn nth_derivative(&self, n: usize) -> Polynomial {
        let mut result = self.clone();
        for _ in 0..n {
            if result.is_zero() {
                break;
            }
            result = result.differentiate();
        }
        result
    }

    /// Evaluates `∫ p(x) dx` over `[lower, upper]`.
    ///
    /// Swapping the bounds flips the sign.
    pub fn definite_integral(&self, lower: f64, upper: f64) -> f64 {
        let antiderivative = self.integrate();
        antiderivative.evaluate(upper) - antiderivative.evaluate(lower)
    }
}
