// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Frobenius companion matrix.
//!
//! For the monic polynomial `xⁿ + aₙ₋₁xⁿ⁻¹ + ... + a₀` the companion matrix is
//!
//! ```text
//! C = [ 0   0   ...  0  -a₀  ]
//!     [ 1   0   ...  0  -a₁  ]
//!     [ 0   1   ...  0  -a₂  ]
//!     [ .   .   ...  .   .   ]
//!     [ 0   0   ...  1  -aₙ₋₁]
//! ```
//!
//! Its characteristic polynomial is the monic input, so its eigenvalues are
//! the roots. The matrix is returned as an [`Array2`] for callers that have an
//! eigensolver; [`Polynomial::roots`] does not use it.

use crate::errors::PolynomialError;
use crate::Polynomial;
use ndarray::{concatenate, s, Array1, Array2, Axis};
use tracing::debug;

impl Polynomial {
    /// Builds the `n×n` companion matrix of a degree-`n` polynomial.
    ///
    /// # Errors
    ///
    /// Returns `PolynomialError::OutOfBounds` for a degree-0 polynomial, which
    /// has no companion matrix, and `PolynomialError::Matrix` if the blocks
    /// cannot be assembled.
    ///
    /// # Examples
    ///
    /// ```
    /// use ndarray::array;
    /// use polyalg_polynomial::Polynomial;
    ///
    /// let p = Polynomial::new([1, -6, 11, -6]);
    /// let expected = array![[0.0, 0.0, 6.0], [1.0, 0.0, -11.0], [0.0, 1.0, 6.0]];
    /// assert_eq!(p.companion_matrix()?, expected);
    /// # Ok::<(), polyalg_polynomial::PolynomialError>(())
    /// ```
    pub fn companion_matrix(&self) -> Result<Array2<f64>, PolynomialError> {
        let n = self.degree();
        if n == 0 {
            return Err(PolynomialError::OutOfBounds {
                operation: "companion matrix",
                degree: n,
            });
        }
        debug!(degree = n, "building companion matrix");

        let row = Array1::from(self.coefficients.clone());
        let normalized = &row / row[0];
        let column: Vec<f64> = normalized
            .slice(s![1..])
            .iter()
            .rev()
            .map(|a| -a + 0.0)
            .collect();
        let column = Array2::from_shape_vec((n, 1), column)?;

        let zero_row = Array2::<f64>::zeros((1, n - 1));
        let shift = Array2::<f64>::eye(n - 1);
        let block = concatenate(Axis(0), &[zero_row.view(), shift.view()])?;

        Ok(concatenate(Axis(1), &[block.view(), column.view()])?)
    }

    /// Divides every coefficient by the leading one.
    ///
    /// # Errors
    ///
    /// Returns `PolynomialError::DivisionByZero` for the zero polynomial.
    pub fn monic(&self) -> Result<Polynomial, PolynomialError> {
        if self.is_zero() {
            return Err(PolynomialError::DivisionByZero);
        }
        Ok(self.scalar_mul(1.0 / self.leading_coefficient()))
    }
}

/// Computes `det(xI - A)` with the Faddeev–LeVerrier recurrence.
///
/// The result is monic of degree `n` for an `n×n` matrix.
///
/// # Errors
///
/// Returns `PolynomialError::NotSquare` if `matrix` is not square.
pub fn characteristic_polynomial(matrix: &Array2<f64>) -> Result<Polynomial, PolynomialError> {
    let (rows, cols) = matrix.dim();
    if rows != cols {
        return Err(PolynomialError::NotSquare { rows, cols });
    }

    let n = rows;
    let identity = Array2::<f64>::eye(n);
    let mut coefficients = Vec::with_capacity(n + 1);
    coefficients.push(1.0);

    // M_k = A·M_{k-1} + c_{n-k+1}·I, c_{n-k} = -tr(A·M_k) / k
    let mut m = Array2::<f64>::zeros((n, n));
    let mut c = 1.0;
    for k in 1..=n {
        m = matrix.dot(&m) + &identity * c;
        c = -matrix.dot(&m).diag().sum() / k as f64;
        coefficients.push(c);
    }

    Ok(Polynomial::new(coefficients))
}
