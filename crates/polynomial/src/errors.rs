//! Error types for polynomial operations.

use ndarray::ShapeError;
use polyalg_algebra::AlgebraError;
use thiserror::Error;

/// Errors that can occur during polynomial operations.
#[derive(Debug, Error)]
pub enum PolynomialError {
    /// Operand is neither a number nor a coefficient list
    #[error("Incorrect operand type: `{input}` is neither a number nor a coefficient list")]
    IncorrectType { input: String },

    /// Operation not defined at this degree
    #[error("Out of bounds: {operation} is not defined for a polynomial of degree {degree}")]
    OutOfBounds {
        operation: &'static str,
        degree: usize,
    },

    /// Division by zero polynomial
    #[error("Division by zero polynomial")]
    DivisionByZero,

    /// Characteristic polynomial of a non-square matrix
    #[error("Matrix is not square: {rows}x{cols}")]
    NotSquare { rows: usize, cols: usize },

    /// Closed-form solver failure
    #[error("Algebra error: {0}")]
    Algebra(#[from] AlgebraError),

    /// Matrix construction failure
    #[error("Matrix error: {0}")]
    Matrix(#[from] ShapeError),
}
