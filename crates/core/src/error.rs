//! Error types for the linear-algebra tours.
//!
//! Every fallible operation in this crate returns [`TourResult<T>`]. The `Vec3` value type
//! itself is total: only parsing it from text can fail.
//!
//! | Variant | Raised by |
//! |---------|-----------|
//! | [`ParseVector`](TourError::ParseVector) | `Vec3::from_str` |
//! | [`NotSquare`](TourError::NotSquare) | trace, determinant, inverse, eigen, solve |
//! | [`DimensionMismatch`](TourError::DimensionMismatch) | products, solve |
//! | [`Singular`](TourError::Singular) | inverse, QR solve |
//! | [`NotPositiveDefinite`](TourError::NotPositiveDefinite) | Cholesky solve |
//! | [`DegenerateAxis`](TourError::DegenerateAxis) | `AngleAxis::new` |
//! | [`NoSolverSelected`](TourError::NoSolverSelected) | matrix tour config |
//! | [`InvalidConfig`](TourError::InvalidConfig) | tour configs |
//! | [`Io`](TourError::Io) | writing tour output |

use std::io;

use thiserror::Error;

/// Errors produced by the tours and the backend operations they call.
#[derive(Debug, Error)]
pub enum TourError {
    /// Text could not be parsed as a 3D vector.
    #[error("cannot parse '{input}' as a 3D vector: {reason}")]
    ParseVector { input: String, reason: String },

    /// A square-only operation received a rectangular matrix.
    #[error("matrix must be square, got {rows}x{cols}")]
    NotSquare { rows: usize, cols: usize },

    /// Operand shapes are incompatible.
    #[error("{operation}: expected shape {expected:?}, got {actual:?}")]
    DimensionMismatch {
        operation: &'static str,
        expected: (usize, usize),
        actual: (usize, usize),
    },

    /// The matrix has no inverse (or is rank deficient for a solve).
    #[error("matrix is singular")]
    Singular,

    /// Cholesky factorization failed.
    #[error("matrix is not symmetric positive-definite")]
    NotPositiveDefinite,

    /// A rotation axis with zero length or non-finite components.
    #[error("rotation axis must be finite and non-zero, got ({x}, {y}, {z})")]
    DegenerateAxis { x: f64, y: f64, z: f64 },

    /// The matrix tour was asked to solve without naming a strategy.
    #[error("no linear solver selected")]
    NoSolverSelected,

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error(transparent)]
    Io(#[from] io::Error),
}

impl TourError {
    pub(crate) fn parse_vector(input: &str, reason: impl Into<String>) -> Self {
        Self::ParseVector {
            input: input.to_owned(),
            reason: reason.into(),
        }
    }
}

/// Convenience alias used throughout the crate.
pub type TourResult<T> = Result<T, TourError>;
