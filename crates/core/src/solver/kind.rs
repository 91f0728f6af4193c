//! Linear-solver strategies

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TourError;

/// Strategy for solving `A·x = b`.
///
/// No `Default`: callers always name a strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SolverKind {
    /// Form `A⁻¹` explicitly, then multiply. Simple, roughly `2N³`, least accurate.
    Inverse,
    /// Cholesky factorization, forward then back substitution. Roughly `N³/3`; requires a
    /// symmetric positive-definite matrix.
    Cholesky,
    /// Householder QR with column pivoting. Roughly `2N³`; works for any invertible matrix.
    ColPivQr,
}

impl SolverKind {
    /// Every strategy, in the order the matrix tour compares them.
    pub const ALL: [SolverKind; 3] = [Self::Inverse, Self::Cholesky, Self::ColPivQr];

    /// Stable short name, also accepted by `from_str`.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Inverse => "inverse",
            Self::Cholesky => "cholesky",
            Self::ColPivQr => "col-piv-qr",
        }
    }
}

impl fmt::Display for SolverKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for SolverKind {
    type Err = TourError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "inverse" | "inv" => Ok(Self::Inverse),
            "cholesky" | "ldlt" | "llt" => Ok(Self::Cholesky),
            "qr" | "col-piv-qr" | "colpivqr" => Ok(Self::ColPivQr),
            other => Err(TourError::InvalidConfig(format!(
                "unknown solver '{other}', expected one of: inverse, cholesky, qr"
            ))),
        }
    }
}
