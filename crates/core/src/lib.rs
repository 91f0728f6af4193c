//! Linear-algebra tour library
//!
//! A guided walk through a dense linear-algebra library, in three parts:
//!
//! - a small hand-written [`Vec3`] value type with addition and `(x,y,z)` rendering
//! - matrices: fixed and dynamic sizes, products, transpose, trace, determinant, inverse,
//!   symmetric eigen-decomposition, and three timed linear-solver strategies
//! - geometry: rotation matrices, angle-axis, Euler angles, rigid transforms and quaternions
//!
//! All numerics are delegated to `nalgebra` behind the [`DenseBackend`] and
//! [`GeometryBackend`] traits.

// Core value types
pub mod core_types;

pub mod backend;
pub mod error;
pub mod format;
pub mod geometry;
pub mod random;
pub mod solver;
pub mod tour;

pub use backend::{DenseBackend, GeometryBackend, NalgebraBackend, SymmetricEigen};
pub use core_types::Vec3;
pub use error::{TourError, TourResult};
pub use geometry::{AngleAxis, EulerZyx};
pub use solver::{compare_solvers, timed_solve, SolveReport, SolverKind, Stopwatch};
pub use tour::{geometry_tour, matrix_tour, vector_tour, GeometryTourConfig, MatrixTourConfig};
