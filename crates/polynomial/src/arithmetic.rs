// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Polynomial arithmetic.
//!
//! Every binary operation accepts an [`Operand`]: either another polynomial or
//! a scalar, which is promoted to a constant polynomial before the operation
//! runs. Results are rebuilt through [`canonicalize`](crate::canonicalize), so
//! cancellation of the leading terms lowers the degree.

use crate::errors::PolynomialError;
use crate::Polynomial;
use std::ops::{Add, Mul, Neg, Sub};
use std::str::FromStr;

/// Right-hand side of an arithmetic operation.
#[derive(Clone, Debug, PartialEq)]
pub enum Operand {
    Scalar(f64),
    Poly(Polynomial),
}

impl Operand {
    /// Promotes the operand to a polynomial (a scalar becomes degree 0).
    pub fn promote(self) -> Polynomial {
        match self {
            Operand::Scalar(value) => Polynomial::constant(value),
            Operand::Poly(poly) => poly,
        }
    }
}

impl From<f64> for Operand {
    fn from(value: f64) -> Self {
        Operand::Scalar(value)
    }
}

impl From<i32> for Operand {
    fn from(value: i32) -> Self {
        Operand::Scalar(value.into())
    }
}

impl From<Polynomial> for Operand {
    fn from(poly: Polynomial) -> Self {
        Operand::Poly(poly)
    }
}

impl From<&Polynomial> for Operand {
    fn from(poly: &Polynomial) -> Self {
        Operand::Poly(poly.clone())
    }
}

/// Parses untyped input into an operand.
///
/// A single number becomes [`Operand::Scalar`]. A coefficient list, either
/// bracketed (`[1, -3, 2]`) or bare with commas or whitespace (`1,-3,2`),
/// becomes [`Operand::Poly`]. Anything else is rejected with
/// [`PolynomialError::IncorrectType`].
impl FromStr for Operand {
    type Err = PolynomialError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let incorrect = || PolynomialError::IncorrectType {
            input: s.to_string(),
        };
        let trimmed = s.trim();

        let (body, bracketed) = match trimmed.strip_prefix('[') {
            Some(rest) => (rest.strip_suffix(']').ok_or_else(incorrect)?, true),
            None => (trimmed, false),
        };

        let tokens: Vec<&str> = body
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|token| !token.is_empty())
            .collect();

        if !bracketed && tokens.len() == 1 {
            return tokens[0]
                .parse::<f64>()
                .map(Operand::Scalar)
                .map_err(|_| incorrect());
        }
        if !bracketed && tokens.is_empty() {
            return Err(incorrect());
        }

        let coefficients = tokens
            .iter()
            .map(|token| token.parse::<f64>())
            .collect::<Result<Vec<f64>, _>>()
            .map_err(|_| incorrect())?;
        Ok(Operand::Poly(Polynomial::new(coefficients)))
    }
}

impl Polynomial {
    /// Adds a polynomial or a scalar.
    ///
    /// The shorter coefficient sequence is zero-padded at its high-order end so
    /// that terms of equal power line up, then the sequences are summed.
    ///
    /// # Examples
    ///
    /// ```
    /// use polyalg_polynomial::Polynomial;
    ///
    /// let p = Polynomial::new([1, 2, 3]);
    /// assert_eq!(p.add(Polynomial::new([4, 5])).coefficients(), &[1.0, 6.0, 8.0]);
    /// assert_eq!(p.add(1.0).coefficients(), &[1.0, 2.0, 4.0]);
    /// ```
    pub fn add(&self, operand: impl Into<Operand>) -> Polynomial {
        let other = operand.into().promote();
        let max_length = std::cmp::max(self.coefficients.len(), other.coefficients.len());
        let mut result = vec![0.0; max_length];

        for (i, coeff) in self.coefficients.iter().enumerate() {
            result[max_length - self.coefficients.len() + i] = *coeff;
        }

        for (i, coeff) in other.coefficients.iter().enumerate() {
            result[max_length - other.coefficients.len() + i] += coeff;
        }

        self.rebuild(result)
    }

    /// Subtracts a polynomial or a scalar: `self + (-operand)`.
    pub fn subtract(&self, operand: impl Into<Operand>) -> Polynomial {
        self.add(operand.into().promote().negate())
    }

    /// Negates all coefficients of the polynomial.
    pub fn negate(&self) -> Polynomial {
        self.rebuild(self.coefficients.iter().map(|x| -x).collect())
    }

    /// Multiplies by a polynomial or a scalar.
    ///
    /// The coefficient of `x^d` in the product is `Σ_{i+j=d} a_i·b_j`. For two
    /// nonzero operands the degrees add.
    pub fn multiply(&self, operand: impl Into<Operand>) -> Polynomial {
        let other = operand.into().promote();
        let product_len = self.coefficients.len() + other.coefficients.len() - 1;
        let mut product = vec![0.0; product_len];

        // Index by power: position 0 is the constant term.
        for (i, a) in self.coefficients.iter().rev().enumerate() {
            for (j, b) in other.coefficients.iter().rev().enumerate() {
                product[i + j] += a * b;
            }
        }
        product.reverse();

        self.rebuild(product)
    }

    /// Multiplies each coefficient of the polynomial by a scalar.
    pub fn scalar_mul(&self, scalar: f64) -> Polynomial {
        self.rebuild(self.coefficients.iter().map(|x| x * scalar).collect())
    }

    /// Divides one polynomial by another, returning the quotient and remainder.
    ///
    /// The remainder has a lower degree than the divisor, or is zero.
    ///
    /// # Errors
    ///
    /// Returns `PolynomialError::DivisionByZero` if the divisor is the zero polynomial.
    pub fn div(&self, divisor: &Polynomial) -> Result<(Polynomial, Polynomial), PolynomialError> {
        if divisor.is_zero() {
            return Err(PolynomialError::DivisionByZero);
        }

        if self.degree() < divisor.degree() {
            return Ok((self.rebuild(vec![0.0]), self.clone()));
        }

        let leading = divisor.coefficients[0];
        let mut remainder = self.coefficients.clone();
        let mut quotient = vec![0.0; self.coefficients.len() - divisor.coefficients.len() + 1];

        for i in 0..quotient.len() {
            let coeff = remainder[i] / leading;
            quotient[i] = coeff;

            for (j, d) in divisor.coefficients.iter().enumerate() {
                remainder[i + j] -= d * coeff;
            }
        }

        // The first quotient.len() entries have been eliminated.
        let remainder = remainder.split_off(quotient.len());

        Ok((self.rebuild(quotient), self.rebuild(remainder)))
    }
}

macro_rules! impl_binary_op {
    (&Polynomial, $op:ident, $method:ident, $engine:ident) => {
        impl<R: Into<Operand>> $op<R> for &Polynomial {
            type Output = Polynomial;

            fn $method(self, rhs: R) -> Polynomial {
                Polynomial::$engine(self, rhs)
            }
        }
    };
    (Polynomial, $op:ident, $method:ident, $engine:ident) => {
        impl<R: Into<Operand>> $op<R> for Polynomial {
            type Output = Polynomial;

            fn $method(self, rhs: R) -> Polynomial {
                Polynomial::$engine(&self, rhs)
            }
        }
    };
}

// `Add` is only implemented for references: a by-value `Add::add` would
// shadow the inherent `Polynomial::add` in method-call position.
impl_binary_op!(&Polynomial, Add, add, add);
impl_binary_op!(&Polynomial, Sub, sub, subtract);
impl_binary_op!(Polynomial, Sub, sub, subtract);
impl_binary_op!(&Polynomial, Mul, mul, multiply);
impl_binary_op!(Polynomial, Mul, mul, multiply);

impl Add<Polynomial> for f64 {
    type Output = Polynomial;

    fn add(self, rhs: Polynomial) -> Polynomial {
        rhs.add(self)
    }
}

impl Mul<Polynomial> for f64 {
    type Output = Polynomial;

    fn mul(self, rhs: Polynomial) -> Polynomial {
        rhs.scalar_mul(self)
    }
}

impl Neg for Polynomial {
    type Output = Polynomial;

    fn neg(self) -> Polynomial {
        self.negate()
    }
}

impl Neg for &Polynomial {
    type Output = Polynomial;

    fn neg(self) -> Polynomial {
        self.negate()
    }
}
