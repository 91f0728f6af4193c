//! Timed solves and side-by-side solver comparison

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::kind::SolverKind;
use super::profiler::Stopwatch;
use crate::backend::DenseBackend;
use crate::error::TourResult;

/// Outcome of one timed solve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SolveReport {
    pub kind: SolverKind,
    /// Wall-clock time of the solve alone, in milliseconds
    pub elapsed_ms: f64,
    /// `‖A·x − b‖₂` of the returned solution
    pub residual: f64,
}

/// Solve `A·x = b` with `kind`, timing only the solve itself.
///
/// # Errors
///
/// Propagates the backend's error for `kind` (non-square, singular, not positive-definite,
/// shape mismatch).
pub fn timed_solve<B: DenseBackend>(
    backend: &B,
    a: &B::Matrix,
    b: &B::Vector,
    kind: SolverKind,
) -> TourResult<(B::Vector, SolveReport)> {
    let watch = Stopwatch::new(kind.label());
    let x = backend.solve(a, b, kind)?;
    let elapsed_ms = watch.elapsed_ms();
    drop(watch);

    let residual = backend.residual(a, &x, b)?;
    debug!(solver = %kind, elapsed_ms, residual, "solve finished");

    Ok((
        x,
        SolveReport {
            kind,
            elapsed_ms,
            residual,
        },
    ))
}

/// Run every strategy in `kinds` against the same system, in order.
///
/// # Errors
///
/// The first failing strategy aborts the comparison with its error.
pub fn compare_solvers<B: DenseBackend>(
    backend: &B,
    a: &B::Matrix,
    b: &B::Vector,
    kinds: &[SolverKind],
) -> TourResult<Vec<SolveReport>> {
    let (rows, cols) = backend.shape(a);
    info!(rows, cols, solvers = kinds.len(), "comparing linear solvers");

    kinds
        .iter()
        .map(|&kind| timed_solve(backend, a, b, kind).map(|(_, report)| report))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::NalgebraBackend;
    use nalgebra::{DMatrix, DVector};

    fn spd_system() -> (DMatrix<f64>, DVector<f64>) {
        let a = DMatrix::from_row_slice(3, 3, &[4.0, 1.0, 0.0, 1.0, 3.0, 1.0, 0.0, 1.0, 2.0]);
        let b = DVector::from_column_slice(&[1.0, 2.0, 3.0]);
        (a, b)
    }

    #[test]
    fn test_reports_follow_requested_order() {
        let (a, b) = spd_system();
        let kinds = [SolverKind::ColPivQr, SolverKind::Inverse];
        let reports = compare_solvers(&NalgebraBackend, &a, &b, &kinds).unwrap();

        assert_eq!(reports.len(), 2);
        assert_eq!(reports[0].kind, SolverKind::ColPivQr);
        assert_eq!(reports[1].kind, SolverKind::Inverse);
        for report in &reports {
            assert!(report.elapsed_ms >= 0.0);
            assert!(report.residual < 1e-12, "{report:?}");
        }
    }

    #[test]
    fn test_first_failure_aborts() {
        let a = DMatrix::from_row_slice(2, 2, &[1.0, 2.0, 2.0, 1.0]);
        let b = DVector::from_column_slice(&[1.0, 1.0]);
        let result = compare_solvers(&NalgebraBackend, &a, &b, &SolverKind::ALL);
        assert!(matches!(
            result,
            Err(crate::error::TourError::NotPositiveDefinite)
        ));
    }

    #[test]
    fn test_empty_selection_yields_no_reports() {
        let (a, b) = spd_system();
        let reports = compare_solvers(&NalgebraBackend, &a, &b, &[]).unwrap();
        assert!(reports.is_empty());
    }
}
