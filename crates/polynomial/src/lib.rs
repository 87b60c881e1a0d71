// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! # Polynomial Library
//!
//! Single-variable polynomials with real (`f64`) coefficients.
//!
//! ## Features
//!
//! - Canonical form: coefficients are kept highest power first with no leading
//!   zero, so `x - x` collapses to the zero polynomial `[0]` of degree 0.
//! - Arithmetic closure: add, subtract, multiply and negate against another
//!   polynomial or a scalar, via [`Operand`] or the standard operators.
//! - Exact term-by-term calculus: differentiation and integration (constant of
//!   integration fixed at zero).
//! - Evaluation with Horner's scheme.
//! - Roots: closed-form formulas up to degree four, reported as a [`RootSet`].
//! - Companion matrix: the Frobenius companion matrix as an `ndarray`
//!   [`Array2`](ndarray::Array2), whose eigenvalues are the roots.
//! - Serialization: optional serde support with bincode integration.
//!
//! ## Mathematical Background
//!
//! A polynomial `p(x) = a_n x^n + ... + a_1 x + a_0` is stored as
//! `[a_n, ..., a_1, a_0]`. Closed-form root formulas exist only up to degree
//! four (Abel–Ruffini). Above that, [`Polynomial::roots`] reports
//! [`RootSet::Unsupported`] and [`Polynomial::companion_matrix`] offers the
//! eigenvalue formulation for callers with an eigensolver at hand.

pub mod arithmetic;
pub mod calculus;
pub mod canonical;
pub mod companion;
pub mod errors;
pub mod polynomial;
pub mod roots;

pub use arithmetic::Operand;
pub use canonical::canonicalize;
pub use companion::characteristic_polynomial;
pub use errors::PolynomialError;
pub use num::complex::Complex64;
pub use polyalg_algebra::Root;
pub use polynomial::{Polynomial, DEFAULT_VARIABLE};
pub use roots::RootSet;
