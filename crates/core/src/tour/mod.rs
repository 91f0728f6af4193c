//! The three tours
//!
//! Each tour writes plain text to any [`std::io::Write`] sink, so binaries print to stdout and
//! tests capture into a `Vec<u8>`.

mod geometry;
mod matrix;
mod vector;

pub use geometry::{geometry_tour, GeometryTourConfig};
pub use matrix::{matrix_tour, MatrixTourConfig};
pub use vector::vector_tour;
