//! Linear-system solving
//!
//! Three strategies are available through [`SolverKind`]; none is preferred. Each solve can be
//! timed with [`timed_solve`] and several compared with [`compare_solvers`].
//!
//! # Example
//!
//! ```
//! use linalg_tour_core::backend::NalgebraBackend;
//! use linalg_tour_core::solver::{compare_solvers, SolverKind};
//! use nalgebra::{DMatrix, DVector};
//!
//! let a = DMatrix::from_row_slice(2, 2, &[2.0, 0.0, 0.0, 4.0]);
//! let b = DVector::from_column_slice(&[2.0, 2.0]);
//! let reports = compare_solvers(&NalgebraBackend, &a, &b, &SolverKind::ALL).unwrap();
//! assert!(reports.iter().all(|r| r.residual < 1e-12));
//! ```

mod compare;
mod kind;
pub mod profiler;

pub use compare::{compare_solvers, timed_solve, SolveReport};
pub use kind::SolverKind;
pub use profiler::Stopwatch;
