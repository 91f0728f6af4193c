//! Numerical backend abstraction
//!
//! The tours depend on a dense linear-algebra library only through the two traits defined
//! here. [`DenseBackend`] covers matrix arithmetic, decompositions and linear solves;
//! [`GeometryBackend`] covers rotations, quaternions and rigid transforms. Both are implemented
//! by [`NalgebraBackend`].
//!
//! Geometry operations exchange vectors as [`Vec3`] so callers never handle the library's own
//! vector type.

mod nalgebra_backend;

pub use nalgebra_backend::NalgebraBackend;

use crate::core_types::Vec3;
use crate::error::TourResult;
use crate::geometry::{AngleAxis, EulerZyx};
use crate::solver::SolverKind;

/// Eigen-decomposition of a real symmetric matrix.
///
/// Eigenvalues are sorted ascending; column `i` of `eigenvectors` belongs to `eigenvalues[i]`.
#[derive(Debug, Clone, PartialEq)]
pub struct SymmetricEigen<V, M> {
    pub eigenvalues: V,
    pub eigenvectors: M,
}

/// Dense matrix operations a tour needs from a linear-algebra library.
pub trait DenseBackend {
    /// Dynamically sized matrix of `f64`
    type Matrix: Clone;
    /// Dynamically sized column vector of `f64`
    type Vector: Clone;

    /// `(rows, cols)`
    fn shape(&self, m: &Self::Matrix) -> (usize, usize);

    /// Matrix product `a·b`.
    ///
    /// # Errors
    ///
    /// [`DimensionMismatch`](crate::TourError::DimensionMismatch) if `a.cols != b.rows`.
    fn multiply(&self, a: &Self::Matrix, b: &Self::Matrix) -> TourResult<Self::Matrix>;

    /// Matrix-vector product `a·x`.
    ///
    /// # Errors
    ///
    /// [`DimensionMismatch`](crate::TourError::DimensionMismatch) if `a.cols != x.len`.
    fn apply(&self, a: &Self::Matrix, x: &Self::Vector) -> TourResult<Self::Vector>;

    fn transpose(&self, m: &Self::Matrix) -> Self::Matrix;

    /// Sum of all elements.
    fn sum(&self, m: &Self::Matrix) -> f64;

    /// Sum of the main diagonal.
    ///
    /// # Errors
    ///
    /// [`NotSquare`](crate::TourError::NotSquare) for rectangular input.
    fn trace(&self, m: &Self::Matrix) -> TourResult<f64>;

    fn scale(&self, m: &Self::Matrix, factor: f64) -> Self::Matrix;

    /// # Errors
    ///
    /// [`NotSquare`](crate::TourError::NotSquare) for rectangular input.
    fn determinant(&self, m: &Self::Matrix) -> TourResult<f64>;

    /// # Errors
    ///
    /// [`NotSquare`](crate::TourError::NotSquare) for rectangular input,
    /// [`Singular`](crate::TourError::Singular) if no inverse exists.
    fn inverse(&self, m: &Self::Matrix) -> TourResult<Self::Matrix>;

    /// Eigenvalues and eigenvectors of a symmetric matrix. Only symmetric input gives
    /// meaningful results; symmetry is not checked.
    ///
    /// # Errors
    ///
    /// [`NotSquare`](crate::TourError::NotSquare) for rectangular input.
    fn symmetric_eigen(
        &self,
        m: &Self::Matrix,
    ) -> TourResult<SymmetricEigen<Self::Vector, Self::Matrix>>;

    /// Solve `a·x = b` with the given strategy.
    ///
    /// # Errors
    ///
    /// [`NotSquare`](crate::TourError::NotSquare),
    /// [`DimensionMismatch`](crate::TourError::DimensionMismatch) if `b.len != a.rows`,
    /// [`Singular`](crate::TourError::Singular) for inverse/QR on a singular matrix,
    /// [`NotPositiveDefinite`](crate::TourError::NotPositiveDefinite) for Cholesky.
    fn solve(&self, a: &Self::Matrix, b: &Self::Vector, kind: SolverKind)
        -> TourResult<Self::Vector>;

    /// Euclidean norm of `a·x − b`.
    ///
    /// # Errors
    ///
    /// [`DimensionMismatch`](crate::TourError::DimensionMismatch) on incompatible shapes.
    fn residual(&self, a: &Self::Matrix, x: &Self::Vector, b: &Self::Vector) -> TourResult<f64>;
}

/// 3D rotation and rigid-transform operations a tour needs from a geometry library.
pub trait GeometryBackend {
    /// Orthonormal 3×3 rotation
    type Rotation: Clone;
    /// Unit quaternion representing a rotation
    type Quaternion: Clone;
    /// Rotation followed by translation
    type Isometry: Clone;
    /// Plain 3×3 matrix
    type Matrix3;
    /// Plain 4×4 matrix
    type Matrix4;

    fn rotation_from_angle_axis(&self, aa: &AngleAxis) -> Self::Rotation;

    fn rotation_matrix(&self, r: &Self::Rotation) -> Self::Matrix3;

    fn rotate(&self, r: &Self::Rotation, v: Vec3) -> Vec3;

    /// Rotate directly by the angle-axis form, without building a matrix first.
    fn rotate_by_angle_axis(&self, aa: &AngleAxis, v: Vec3) -> Vec3;

    /// Z-Y-X Euler angles of a rotation.
    fn euler_zyx(&self, r: &Self::Rotation) -> EulerZyx;

    fn rotation_from_euler(&self, e: &EulerZyx) -> Self::Rotation;

    fn quaternion_from_angle_axis(&self, aa: &AngleAxis) -> Self::Quaternion;

    fn quaternion_from_rotation(&self, r: &Self::Rotation) -> Self::Quaternion;

    /// Coefficients in `[x, y, z, w]` order.
    fn quaternion_coeffs(&self, q: &Self::Quaternion) -> [f64; 4];

    /// `q·v·q⁻¹` evaluated as a rotation.
    fn rotate_by_quaternion(&self, q: &Self::Quaternion, v: Vec3) -> Vec3;

    /// The explicit product `q·(0, v)·q⁻¹` as `[x, y, z, w]`; `w` is zero up to rounding.
    fn conjugate(&self, q: &Self::Quaternion, v: Vec3) -> [f64; 4];

    /// Identity, then rotate by `aa`, then pre-translate by `translation`.
    fn isometry(&self, aa: &AngleAxis, translation: Vec3) -> Self::Isometry;

    /// Apply a transform to a point (rotation and translation).
    fn transform_point(&self, t: &Self::Isometry, p: Vec3) -> Vec3;

    /// 4×4 homogeneous matrix of a transform.
    fn homogeneous(&self, t: &Self::Isometry) -> Self::Matrix4;
}
