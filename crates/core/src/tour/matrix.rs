//! Matrix tour: fixed and dynamic matrices, decompositions and linear solves

use std::io::Write;

use nalgebra::{DMatrix, Matrix2x3, Matrix3, Vector2, Vector3};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::backend::{DenseBackend, NalgebraBackend};
use crate::error::{TourError, TourResult};
use crate::format::{general, matrix_text, STREAM_PRECISION};
use crate::random::{random_fixed, random_spd, random_vector, seeded};
use crate::solver::{compare_solvers, SolverKind};

/// Settings for [`matrix_tour`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatrixTourConfig {
    /// Dimension `N` of the `N×N` system used for the solver timing
    pub system_size: usize,
    /// Seed for every random matrix in the tour
    pub seed: u64,
    /// Strategies to time, in order
    pub solvers: Vec<SolverKind>,
    /// Significant digits for printed numbers
    pub precision: usize,
}

impl Default for MatrixTourConfig {
    fn default() -> Self {
        Self {
            system_size: 500,
            seed: 42,
            solvers: SolverKind::ALL.to_vec(),
            precision: STREAM_PRECISION,
        }
    }
}

impl MatrixTourConfig {
    /// # Errors
    ///
    /// [`TourError::NoSolverSelected`] for an empty solver list,
    /// [`TourError::InvalidConfig`] for a zero system size.
    pub fn validate(&self) -> TourResult<()> {
        if self.solvers.is_empty() {
            return Err(TourError::NoSolverSelected);
        }
        if self.system_size == 0 {
            return Err(TourError::InvalidConfig(
                "system size must be at least 1".to_owned(),
            ));
        }
        Ok(())
    }
}

fn section<W: Write>(out: &mut W, title: &str, body: &str) -> TourResult<()> {
    writeln!(out, "{title} :")?;
    writeln!(out, "{body}")?;
    writeln!(out)?;
    Ok(())
}

/// Walk through the matrix API and time the configured solvers.
///
/// # Errors
///
/// Config validation errors, backend errors (a singular random matrix, a failed
/// factorization), and I/O errors from `out`.
pub fn matrix_tour<W: Write>(out: &mut W, config: &MatrixTourConfig) -> TourResult<()> {
    config.validate()?;
    info!(
        system_size = config.system_size,
        seed = config.seed,
        "running matrix tour"
    );

    let p = config.precision;
    let backend = NalgebraBackend;
    let mut rng = seeded(config.seed);

    // Fixed-size matrices, filled row by row
    let matrix_23 = Matrix2x3::new(1.0_f32, 2.0, 3.0, 4.0, 5.0, 6.0);
    section(out, "matrix 2x3", &matrix_text(&matrix_23, p))?;

    let mut by_element = Vec::with_capacity(matrix_23.nrows());
    for i in 0..matrix_23.nrows() {
        let row: Vec<String> = (0..matrix_23.ncols())
            .map(|j| general(f64::from(matrix_23[(i, j)]), p))
            .collect();
        by_element.push(row.join("\t"));
    }
    section(out, "matrix 2x3 (element by element)", &by_element.join("\n"))?;

    let v_3d = Vector3::new(3.0_f64, 2.0, 1.0);
    let vf_3d = Vector3::new(4.0_f32, 5.0, 6.0);
    let outer: Matrix3<f64> = vf_3d.cast::<f64>() * v_3d.transpose();
    section(out, "outer product (4,5,6) * (3,2,1)^T", &matrix_text(&outer, p))?;

    let product: Vector2<f64> = matrix_23.cast::<f64>() * vf_3d.cast::<f64>();
    section(out, "matrix 2x3 * (4,5,6)", &matrix_text(&product, p))?;

    // Random matrices and the basic operations
    let random_33: Matrix3<f64> = random_fixed(&mut rng);
    let random_2: Vector2<f64> = random_fixed(&mut rng);
    section(out, "random 3x3", &matrix_text(&random_33, p))?;
    section(out, "random 2x1", &matrix_text(&random_2, p))?;

    let m = DMatrix::from_column_slice(3, 3, random_33.as_slice());
    section(out, "transpose", &matrix_text(&backend.transpose(&m), p))?;
    section(out, "sum", &general(backend.sum(&m), p))?;
    section(out, "trace", &general(backend.trace(&m)?, p))?;
    section(out, "times 10", &matrix_text(&backend.scale(&m, 10.0), p))?;
    section(out, "inverse", &matrix_text(&backend.inverse(&m)?, p))?;
    section(out, "determinant", &general(backend.determinant(&m)?, p))?;

    // Symmetric eigen-decomposition of MᵀM
    let gram = backend.multiply(&backend.transpose(&m), &m)?;
    let eig = backend.symmetric_eigen(&gram)?;
    section(out, "eigenvalues of M^T M", &matrix_text(&eig.eigenvalues, p))?;
    section(out, "eigenvectors of M^T M", &matrix_text(&eig.eigenvectors, p))?;

    // Solving A·x = b
    let n = config.system_size;
    let a = random_spd(n, &mut rng);
    let b = random_vector(n, &mut rng);
    writeln!(out, "solving a {n}x{n} symmetric positive-definite system :")?;

    let reports = compare_solvers(&backend, &a, &b, &config.solvers)?;
    for report in &reports {
        writeln!(
            out,
            "{:<10} time : {}ms  residual : {}",
            report.kind.label(),
            general(report.elapsed_ms, p),
            general(report.residual, p)
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_config(solvers: Vec<SolverKind>) -> MatrixTourConfig {
        MatrixTourConfig {
            system_size: 8,
            solvers,
            ..MatrixTourConfig::default()
        }
    }

    #[test]
    fn test_validation() {
        assert!(MatrixTourConfig::default().validate().is_ok());
        assert!(matches!(
            small_config(vec![]).validate(),
            Err(TourError::NoSolverSelected)
        ));
        let zero = MatrixTourConfig {
            system_size: 0,
            ..MatrixTourConfig::default()
        };
        assert!(matches!(zero.validate(), Err(TourError::InvalidConfig(_))));
    }

    #[test]
    fn test_fixed_size_sections() {
        let mut out = Vec::new();
        matrix_tour(&mut out, &small_config(vec![SolverKind::Cholesky])).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.starts_with("matrix 2x3 :\n1 2 3\n4 5 6\n"));
        assert!(text.contains("matrix 2x3 (element by element) :\n1\t2\t3\n4\t5\t6\n"));
        assert!(text.contains("outer product (4,5,6) * (3,2,1)^T :\n12  8  4\n15 10  5\n18 12  6\n"));
        assert!(text.contains("matrix 2x3 * (4,5,6) :\n32\n77\n"));
    }

    #[test]
    fn test_only_selected_solvers_run() {
        let mut out = Vec::new();
        matrix_tour(&mut out, &small_config(vec![SolverKind::ColPivQr])).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("solving a 8x8 symmetric positive-definite system :"));
        assert!(text.contains("col-piv-qr"));
        assert!(!text.contains("cholesky "));
        assert!(!text.contains("inverse    time"));
    }

    #[test]
    fn test_empty_selection_writes_nothing() {
        let mut out = Vec::new();
        let err = matrix_tour(&mut out, &small_config(vec![])).unwrap_err();
        assert!(matches!(err, TourError::NoSolverSelected));
        assert!(out.is_empty());
    }
}
