//! Polynomial value type, evaluation and display.

use crate::canonical::canonicalize;
use num_traits::{One, Zero};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Label used when none is given at construction.
pub const DEFAULT_VARIABLE: &str = "x";

/// A polynomial represented by its coefficients in descending order of degree.
///
/// The polynomial is represented as:
/// `a_n * x^n + a_{n-1} * x^{n-1} + ... + a_1 * x + a_0`
///
/// Coefficients are always in canonical form: the first one is nonzero unless
/// the polynomial is the zero polynomial `[0]`. Every operation returns a new
/// value; nothing mutates the coefficients of an existing polynomial.
///
/// The `variable` label only affects [`Display`](fmt::Display). It takes no
/// part in equality or any other operation.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "RawPolynomial"))]
pub struct Polynomial {
    /// Coefficients in descending order (highest degree first).
    pub(crate) coefficients: Vec<f64>,
    pub(crate) variable: String,
}

/// Wire form accepted on deserialization, canonicalized on the way in.
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct RawPolynomial {
    coefficients: Vec<f64>,
    #[serde(default = "default_variable")]
    variable: String,
}

#[cfg(feature = "serde")]
fn default_variable() -> String {
    DEFAULT_VARIABLE.to_string()
}

#[cfg(feature = "serde")]
impl From<RawPolynomial> for Polynomial {
    fn from(raw: RawPolynomial) -> Self {
        Polynomial::new(raw.coefficients).with_variable(raw.variable)
    }
}

impl PartialEq for Polynomial {
    fn eq(&self, other: &Self) -> bool {
        self.coefficients == other.coefficients
    }
}

impl Default for Polynomial {
    fn default() -> Self {
        Polynomial::zero()
    }
}

impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (i, coeff) in self.coefficients.iter().enumerate() {
            let degree = self.degree() - i;

            if coeff.is_zero() {
                continue;
            }

            let negative = *coeff < 0.0;
            if first {
                if negative {
                    write!(f, "-")?;
                }
            } else if negative {
                write!(f, " - ")?;
            } else {
                write!(f, " + ")?;
            }
            first = false;

            let abs_coeff = coeff.abs();
            if degree == 0 || !abs_coeff.is_one() {
                match f.precision() {
                    Some(p) => write!(f, "{abs_coeff:.p$}")?,
                    None => write!(f, "{abs_coeff}")?,
                }
            }

            if degree > 0 {
                write!(f, "{}", self.variable)?;
                if degree > 1 {
                    write!(f, "^{degree}")?;
                }
            }
        }

        if first {
            write!(f, "0")?;
        }

        Ok(())
    }
}

impl Polynomial {
    /// Creates a new polynomial from coefficients in descending order of degree.
    ///
    /// Any numeric type convertible into `f64` is accepted; leading zeros are
    /// stripped and an empty sequence gives the zero polynomial.
    ///
    /// # Examples
    ///
    /// ```
    /// use polyalg_polynomial::Polynomial;
    ///
    /// let p = Polynomial::new([0, 1, -8, 12, 3]);
    /// assert_eq!(p.coefficients(), &[1.0, -8.0, 12.0, 3.0]);
    /// assert_eq!(p.degree(), 3);
    /// ```
    pub fn new<I, T>(coefficients: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<f64>,
    {
        Self {
            coefficients: canonicalize(coefficients.into_iter().map(Into::into).collect()),
            variable: DEFAULT_VARIABLE.to_string(),
        }
    }

    /// Replaces the display label, builder style.
    pub fn with_variable(mut self, variable: impl Into<String>) -> Self {
        self.variable = variable.into();
        self
    }

    /// Creates a polynomial from coefficients in ascending order (lowest degree first).
    pub fn from_ascending_coefficients<I, T>(ascending_coefficients: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<f64>,
    {
        let mut coefficients: Vec<f64> = ascending_coefficients.into_iter().map(Into::into).collect();
        coefficients.reverse();
        Self::new(coefficients)
    }

    /// Converts the polynomial to ascending order coefficient format.
    pub fn to_ascending_coefficients(&self) -> Vec<f64> {
        let mut coefficients = self.coefficients.clone();
        coefficients.reverse();
        coefficients
    }

    /// The zero polynomial `[0]`.
    pub fn zero() -> Self {
        Self::constant(0.0)
    }

    /// Creates a constant (degree 0) polynomial.
    pub fn constant(constant: f64) -> Self {
        Self::new([constant])
    }

    /// Builds a sibling polynomial from raw coefficients, keeping this label.
    pub(crate) fn rebuild(&self, raw: Vec<f64>) -> Self {
        Self {
            coefficients: canonicalize(raw),
            variable: self.variable.clone(),
        }
    }

    /// Returns the coefficients of the polynomial, highest degree first.
    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    /// Returns the degree of the polynomial.
    ///
    /// The degree of the zero polynomial is 0.
    pub fn degree(&self) -> usize {
        self.coefficients.len() - 1
    }

    /// Returns the display label.
    pub fn variable(&self) -> &str {
        &self.variable
    }

    /// Sets the display label.
    pub fn set_variable(&mut self, variable: impl Into<String>) {
        self.variable = variable.into();
    }

    /// Checks if the polynomial is zero.
    pub fn is_zero(&self) -> bool {
        self.coefficients == [0.0]
    }

    /// Returns the leading coefficient of the polynomial.
    pub fn leading_coefficient(&self) -> f64 {
        self.coefficients[0]
    }

    /// Evaluates the polynomial at a given point using Horner's method.
    ///
    /// # Examples
    ///
    /// ```
    /// use polyalg_polynomial::Polynomial;
    ///
    /// let p = Polynomial::new([1, -8, 12, 3]);
    /// assert_eq!(p.evaluate(4.0), -13.0);
    /// ```
    pub fn evaluate(&self, x: f64) -> f64 {
        self.coefficients
            .iter()
            .fold(0.0, |acc, coeff| acc * x + coeff)
    }

    /// Evaluates the polynomial at every point of `xs`.
    pub fn evaluate_many(&self, xs: &[f64]) -> Vec<f64> {
        xs.iter().map(|&x| self.evaluate(x)).collect()
    }

    /// Borrows the polynomial as a plain unary function.
    ///
    /// ```
    /// use polyalg_polynomial::Polynomial;
    ///
    /// let square = Polynomial::new([1, 0, 0]);
    /// let values: Vec<f64> = [1.0, 2.0, 3.0].into_iter().map(square.as_fn()).collect();
    /// assert_eq!(values, vec![1.0, 4.0, 9.0]);
    /// ```
    pub fn as_fn(&self) -> impl Fn(f64) -> f64 + '_ {
        move |x| self.evaluate(x)
    }
}
