//! Error types for the closed-form solvers.

use thiserror::Error;

/// Errors that can occur while solving a polynomial equation.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum AlgebraError {
    /// The equation degenerates to a lower degree
    #[error("Leading coefficient of a degree-{degree} equation cannot be zero")]
    ZeroLeadingCoefficient { degree: usize },

    /// NaN or infinite coefficient
    #[error("Coefficient at position {index} is not finite: {value}")]
    NonFinite { index: usize, value: f64 },

    /// The coefficients are finite but the formula's intermediate terms or
    /// roots fall outside the `f64` range
    #[error("Degree-{degree} equation overflows f64 while solving")]
    Overflow { degree: usize },
}

/// Result type alias for solver operations
pub type AlgebraResult<T> = Result<T, AlgebraError>;
