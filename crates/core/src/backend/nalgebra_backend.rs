//! `nalgebra` implementation of the backend traits

use approx::relative_eq;
use nalgebra::{
    DMatrix, DVector, Isometry3, Matrix3, Matrix4, Point3, Quaternion, Rotation3, Translation3,
    UnitQuaternion, Vector3,
};
use tracing::debug;

use super::{DenseBackend, GeometryBackend, SymmetricEigen};
use crate::core_types::Vec3;
use crate::error::{TourError, TourResult};
use crate::geometry::{AngleAxis, EulerZyx};
use crate::solver::SolverKind;

/// Backend delegating every operation to `nalgebra`.
#[derive(Debug, Clone, Copy, Default)]
pub struct NalgebraBackend;

fn ensure_square(m: &DMatrix<f64>) -> TourResult<usize> {
    let (rows, cols) = m.shape();
    if rows == cols {
        Ok(rows)
    } else {
        Err(TourError::NotSquare { rows, cols })
    }
}

/// Tolerances for the symmetry check ahead of a Cholesky factorization.
const SYMMETRY_EPSILON: f64 = 1e-12;
const SYMMETRY_MAX_RELATIVE: f64 = 1e-10;

fn is_symmetric(m: &DMatrix<f64>) -> bool {
    relative_eq!(
        *m,
        m.transpose(),
        epsilon = SYMMETRY_EPSILON,
        max_relative = SYMMETRY_MAX_RELATIVE
    )
}

impl DenseBackend for NalgebraBackend {
    type Matrix = DMatrix<f64>;
    type Vector = DVector<f64>;

    fn shape(&self, m: &DMatrix<f64>) -> (usize, usize) {
        m.shape()
    }

    fn multiply(&self, a: &DMatrix<f64>, b: &DMatrix<f64>) -> TourResult<DMatrix<f64>> {
        if a.ncols() != b.nrows() {
            return Err(TourError::DimensionMismatch {
                operation: "multiply",
                expected: (a.ncols(), b.ncols()),
                actual: b.shape(),
            });
        }
        Ok(a * b)
    }

    fn apply(&self, a: &DMatrix<f64>, x: &DVector<f64>) -> TourResult<DVector<f64>> {
        if a.ncols() != x.len() {
            return Err(TourError::DimensionMismatch {
                operation: "apply",
                expected: (a.ncols(), 1),
                actual: (x.len(), 1),
            });
        }
        Ok(a * x)
    }

    fn transpose(&self, m: &DMatrix<f64>) -> DMatrix<f64> {
        m.transpose()
    }

    fn sum(&self, m: &DMatrix<f64>) -> f64 {
        m.sum()
    }

    fn trace(&self, m: &DMatrix<f64>) -> TourResult<f64> {
        ensure_square(m)?;
        Ok(m.trace())
    }

    fn scale(&self, m: &DMatrix<f64>, factor: f64) -> DMatrix<f64> {
        m * factor
    }

    fn determinant(&self, m: &DMatrix<f64>) -> TourResult<f64> {
        ensure_square(m)?;
        Ok(m.determinant())
    }

    fn inverse(&self, m: &DMatrix<f64>) -> TourResult<DMatrix<f64>> {
        ensure_square(m)?;
        m.clone().try_inverse().ok_or(TourError::Singular)
    }

    fn symmetric_eigen(
        &self,
        m: &DMatrix<f64>,
    ) -> TourResult<SymmetricEigen<DVector<f64>, DMatrix<f64>>> {
        let n = ensure_square(m)?;
        if n == 0 {
            return Ok(SymmetricEigen {
                eigenvalues: DVector::zeros(0),
                eigenvectors: DMatrix::zeros(0, 0),
            });
        }

        let eig = m.clone().symmetric_eigen();

        // nalgebra leaves eigenvalues unordered
        let mut order: Vec<usize> = (0..n).collect();
        order.sort_by(|&i, &j| eig.eigenvalues[i].total_cmp(&eig.eigenvalues[j]));

        Ok(SymmetricEigen {
            eigenvalues: DVector::from_fn(n, |i, _| eig.eigenvalues[order[i]]),
            eigenvectors: DMatrix::from_fn(n, n, |r, c| eig.eigenvectors[(r, order[c])]),
        })
    }

    fn solve(
        &self,
        a: &DMatrix<f64>,
        b: &DVector<f64>,
        kind: SolverKind,
    ) -> TourResult<DVector<f64>> {
        let n = ensure_square(a)?;
        if b.len() != n {
            return Err(TourError::DimensionMismatch {
                operation: "solve",
                expected: (n, 1),
                actual: (b.len(), 1),
            });
        }
        debug!(solver = %kind, n, "solving dense system");

        match kind {
            SolverKind::Inverse => Ok(self.inverse(a)? * b),
            // cholesky() reads only the lower triangle
            SolverKind::Cholesky if !is_symmetric(a) => Err(TourError::NotPositiveDefinite),
            SolverKind::Cholesky => a
                .clone()
                .cholesky()
                .map(|chol| chol.solve(b))
                .ok_or(TourError::NotPositiveDefinite),
            SolverKind::ColPivQr => a.clone().col_piv_qr().solve(b).ok_or(TourError::Singular),
        }
    }

    fn residual(&self, a: &DMatrix<f64>, x: &DVector<f64>, b: &DVector<f64>) -> TourResult<f64> {
        let ax = self.apply(a, x)?;
        if ax.len() != b.len() {
            return Err(TourError::DimensionMismatch {
                operation: "residual",
                expected: (ax.len(), 1),
                actual: (b.len(), 1),
            });
        }
        Ok((ax - b).norm())
    }
}

impl GeometryBackend for NalgebraBackend {
    type Rotation = Rotation3<f64>;
    type Quaternion = UnitQuaternion<f64>;
    type Isometry = Isometry3<f64>;
    type Matrix3 = Matrix3<f64>;
    type Matrix4 = Matrix4<f64>;

    fn rotation_from_angle_axis(&self, aa: &AngleAxis) -> Rotation3<f64> {
        Rotation3::from_axis_angle(&aa.unit_axis(), aa.angle())
    }

    fn rotation_matrix(&self, r: &Rotation3<f64>) -> Matrix3<f64> {
        *r.matrix()
    }

    fn rotate(&self, r: &Rotation3<f64>, v: Vec3) -> Vec3 {
        (r * Vector3::from(v)).into()
    }

    fn rotate_by_angle_axis(&self, aa: &AngleAxis, v: Vec3) -> Vec3 {
        (Rotation3::new(aa.scaled_axis()) * Vector3::from(v)).into()
    }

    fn euler_zyx(&self, r: &Rotation3<f64>) -> EulerZyx {
        let (roll, pitch, yaw) = r.euler_angles();
        EulerZyx::new(yaw, pitch, roll)
    }

    fn rotation_from_euler(&self, e: &EulerZyx) -> Rotation3<f64> {
        Rotation3::from_euler_angles(e.roll, e.pitch, e.yaw)
    }

    fn quaternion_from_angle_axis(&self, aa: &AngleAxis) -> UnitQuaternion<f64> {
        UnitQuaternion::from_axis_angle(&aa.unit_axis(), aa.angle())
    }

    fn quaternion_from_rotation(&self, r: &Rotation3<f64>) -> UnitQuaternion<f64> {
        UnitQuaternion::from_rotation_matrix(r)
    }

    fn quaternion_coeffs(&self, q: &UnitQuaternion<f64>) -> [f64; 4] {
        let c = q.quaternion().coords;
        [c.x, c.y, c.z, c.w]
    }

    fn rotate_by_quaternion(&self, q: &UnitQuaternion<f64>, v: Vec3) -> Vec3 {
        (q * Vector3::from(v)).into()
    }

    fn conjugate(&self, q: &UnitQuaternion<f64>, v: Vec3) -> [f64; 4] {
        let pure = Quaternion::from_imag(Vector3::from(v));
        let product = q.quaternion() * pure * q.inverse().quaternion();
        let c = product.coords;
        [c.x, c.y, c.z, c.w]
    }

    fn isometry(&self, aa: &AngleAxis, translation: Vec3) -> Isometry3<f64> {
        Isometry3::from_parts(
            Translation3::from(Vector3::from(translation)),
            self.quaternion_from_angle_axis(aa),
        )
    }

    fn transform_point(&self, t: &Isometry3<f64>, p: Vec3) -> Vec3 {
        t.transform_point(&Point3::from(Vector3::from(p))).coords.into()
    }

    fn homogeneous(&self, t: &Isometry3<f64>) -> Matrix4<f64> {
        t.to_homogeneous()
    }
}
