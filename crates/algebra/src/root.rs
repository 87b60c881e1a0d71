// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! The element type returned by the solvers.

use num::complex::Complex64;
use std::cmp::Ordering;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A single root of a real polynomial equation.
///
/// Non-real roots of a real polynomial always come in conjugate pairs, and the
/// solvers return both members of a pair.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Root {
    Real(f64),
    Complex(Complex64),
}

impl Root {
    /// Returns `true` for [`Root::Real`].
    pub fn is_real(&self) -> bool {
        matches!(self, Root::Real(_))
    }

    /// Real part of the root.
    pub fn re(&self) -> f64 {
        match self {
            Root::Real(x) => *x,
            Root::Complex(z) => z.re,
        }
    }

    /// Imaginary part of the root (zero for real roots).
    pub fn im(&self) -> f64 {
        match self {
            Root::Real(_) => 0.0,
            Root::Complex(z) => z.im,
        }
    }

    /// Widens the root to a complex number.
    pub fn to_complex(&self) -> Complex64 {
        match self {
            Root::Real(x) => Complex64::new(*x, 0.0),
            Root::Complex(z) => *z,
        }
    }

    /// Returns the real value, or `None` for a complex root.
    pub fn as_real(&self) -> Option<f64> {
        match self {
            Root::Real(x) => Some(*x),
            Root::Complex(_) => None,
        }
    }
}

impl From<f64> for Root {
    fn from(value: f64) -> Self {
        Root::Real(value)
    }
}

impl From<Complex64> for Root {
    fn from(value: Complex64) -> Self {
        Root::Complex(value)
    }
}

impl fmt::Display for Root {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Root::Real(x) => match f.precision() {
                Some(p) => write!(f, "{x:.p$}"),
                None => write!(f, "{x}"),
            },
            Root::Complex(z) => {
                let sign = if z.im < 0.0 { '-' } else { '+' };
                let im = z.im.abs();
                match f.precision() {
                    Some(p) => write!(f, "{:.p$} {sign} {im:.p$}i", z.re),
                    None => write!(f, "{} {sign} {im}i", z.re),
                }
            }
        }
    }
}

/// Total order used for every root sequence returned by this crate.
///
/// Real roots sort before complex ones and ascend by value. Complex roots
/// ascend by real part, then by magnitude of the imaginary part, with the
/// positive member of a conjugate pair first.
pub fn compare_roots(a: &Root, b: &Root) -> Ordering {
    match (a, b) {
        (Root::Real(x), Root::Real(y)) => x.total_cmp(y),
        (Root::Real(_), Root::Complex(_)) => Ordering::Less,
        (Root::Complex(_), Root::Real(_)) => Ordering::Greater,
        (Root::Complex(z), Root::Complex(w)) => z
            .re
            .total_cmp(&w.re)
            .then_with(|| z.im.abs().total_cmp(&w.im.abs()))
            .then_with(|| w.im.total_cmp(&z.im)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_accessors() {
        let real = Root::Real(2.5);
        assert!(real.is_real());
        assert_eq!(real.re(), 2.5);
        assert_eq!(real.im(), 0.0);
        assert_eq!(real.as_real(), Some(2.5));
        assert_eq!(real.to_complex(), Complex64::new(2.5, 0.0));

        let complex = Root::Complex(Complex64::new(1.0, -2.0));
        assert!(!complex.is_real());
        assert_eq!(complex.im(), -2.0);
        assert_eq!(complex.as_real(), None);
    }

    #[test]
    fn test_root_display() {
        assert_eq!(Root::Real(1.5).to_string(), "1.5");
        assert_eq!(
            Root::Complex(Complex64::new(0.5, -2.0)).to_string(),
            "0.5 - 2i"
        );
        assert_eq!(
            format!("{:.2}", Root::Complex(Complex64::new(1.0, 1.0 / 3.0))),
            "1.00 + 0.33i"
        );
    }

    #[test]
    fn test_compare_roots_order() {
        let mut roots = vec![
            Root::Complex(Complex64::new(0.0, -2.0)),
            Root::Complex(Complex64::new(0.0, 1.0)),
            Root::Real(3.0),
            Root::Complex(Complex64::new(0.0, 2.0)),
            Root::Real(-1.0),
            Root::Complex(Complex64::new(0.0, -1.0)),
        ];
        roots.sort_by(compare_roots);
        assert_eq!(
            roots,
            vec![
                Root::Real(-1.0),
                Root::Real(3.0),
                Root::Complex(Complex64::new(0.0, 1.0)),
                Root::Complex(Complex64::new(0.0, -1.0)),
                Root::Complex(Complex64::new(0.0, 2.0)),
                Root::Complex(Complex64::new(0.0, -2.0)),
            ]
        );
    }
}
