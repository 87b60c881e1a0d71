// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Closed-form root extraction.
//!
//! Roots are dispatched on degree to the solvers in `polyalg-algebra`. Degree
//! zero has no roots to report and degree five or above has no closed form;
//! both come back as dedicated [`RootSet`] variants so they can never be
//! mistaken for numeric roots.

use crate::errors::PolynomialError;
use crate::Polynomial;
use polyalg_algebra::{cubic, linear, quadratic, quartic, Root};
use std::fmt;
use tracing::debug;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Roots of a polynomial, bucketed by degree.
///
/// Within each bucket the roots follow the solver ordering: real roots first
/// in ascending order, then complex roots by ascending real part with the
/// positive member of each conjugate pair first. Repeated roots are repeated.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RootSet {
    /// Constant polynomial: no root to report.
    Undefined,
    One(f64),
    Pair([Root; 2]),
    Triple([Root; 3]),
    Quad([Root; 4]),
    /// Degree five or above: no closed-form solver.
    Unsupported,
}

impl RootSet {
    /// Returns `true` for [`RootSet::Undefined`] and [`RootSet::Unsupported`].
    pub fn is_sentinel(&self) -> bool {
        matches!(self, RootSet::Undefined | RootSet::Unsupported)
    }

    /// Number of entries in [`to_vec`](Self::to_vec).
    pub fn len(&self) -> usize {
        match self {
            RootSet::Undefined | RootSet::Unsupported | RootSet::One(_) => 1,
            RootSet::Pair(_) => 2,
            RootSet::Triple(_) => 3,
            RootSet::Quad(_) => 4,
        }
    }

    /// Always `false`: a sentinel still flattens to one entry.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Flattens the set into a vector of roots.
    ///
    /// Sentinels flatten to a single `NaN`, so a flat view of a degree-0 or
    /// degree-5 polynomial is `[NaN]`.
    pub fn to_vec(&self) -> Vec<Root> {
        match self {
            RootSet::Undefined | RootSet::Unsupported => vec![Root::Real(f64::NAN)],
            RootSet::One(x) => vec![Root::Real(*x)],
            RootSet::Pair(roots) => roots.to_vec(),
            RootSet::Triple(roots) => roots.to_vec(),
            RootSet::Quad(roots) => roots.to_vec(),
        }
    }

    /// Returns the real roots, in order. Empty for sentinels.
    pub fn real_roots(&self) -> Vec<f64> {
        if self.is_sentinel() {
            return Vec::new();
        }
        self.to_vec().iter().filter_map(Root::as_real).collect()
    }
}

impl fmt::Display for RootSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RootSet::Undefined => write!(f, "undefined"),
            RootSet::Unsupported => write!(f, "unsupported"),
            _ => {
                write!(f, "[")?;
                for (i, root) in self.to_vec().iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    match f.precision() {
                        Some(p) => write!(f, "{root:.p$}")?,
                        None => write!(f, "{root}")?,
                    }
                }
                write!(f, "]")
            }
        }
    }
}

impl Polynomial {
    /// Finds the roots of the polynomial with closed-form formulas.
    ///
    /// # Errors
    ///
    /// Returns `PolynomialError::Algebra` if a solver rejects the coefficients,
    /// for example when one of them is NaN or infinite, or when finite
    /// coefficients overflow the formula.
    ///
    /// # Examples
    ///
    /// ```
    /// use polyalg_polynomial::{Polynomial, Root, RootSet};
    ///
    /// let p = Polynomial::new([1, -3, 2]);
    /// assert_eq!(p.roots()?, RootSet::Pair([Root::Real(1.0), Root::Real(2.0)]));
    /// # Ok::<(), polyalg_polynomial::PolynomialError>(())
    /// ```
    pub fn roots(&self) -> Result<RootSet, PolynomialError> {
        let c = &self.coefficients;
        debug!(degree = self.degree(), "resolving roots");

        let roots = match self.degree() {
            0 => RootSet::Undefined,
            1 => RootSet::One(linear(c[0], c[1])?),
            2 => RootSet::Pair(quadratic(c[0], c[1], c[2])?),
            3 => RootSet::Triple(cubic(c[0], c[1], c[2], c[3])?),
            4 => RootSet::Quad(quartic(c[0], c[1], c[2], c[3], c[4])?),
            _ => RootSet::Unsupported,
        };
        Ok(roots)
    }
}
