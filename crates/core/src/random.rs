//! Seeded random matrices
//!
//! Entries are drawn uniformly from `[-1, 1]`, the usual range of a dense library's
//! `Random()` constructor. Passing the same seeded RNG gives the same matrices.

use nalgebra::{DMatrix, DVector, SMatrix};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Deterministic RNG for a tour run.
pub fn seeded(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

fn unit_range<G: Rng>(rng: &mut G) -> f64 {
    rng.random_range(-1.0..=1.0)
}

pub fn random_matrix<G: Rng>(rows: usize, cols: usize, rng: &mut G) -> DMatrix<f64> {
    DMatrix::from_fn(rows, cols, |_, _| unit_range(&mut *rng))
}

pub fn random_vector<G: Rng>(len: usize, rng: &mut G) -> DVector<f64> {
    DVector::from_fn(len, |_, _| unit_range(&mut *rng))
}

/// Fixed-size counterpart of [`random_matrix`].
pub fn random_fixed<const R: usize, const C: usize, G: Rng>(
    rng: &mut G,
) -> SMatrix<f64, R, C> {
    SMatrix::from_fn(|_, _| unit_range(&mut *rng))
}

/// `M·Mᵀ` for a random `n×n` matrix `M`: symmetric and, with probability one,
/// positive-definite.
pub fn random_spd<G: Rng>(n: usize, rng: &mut G) -> DMatrix<f64> {
    let m = random_matrix(n, n, rng);
    &m * m.transpose()
}
