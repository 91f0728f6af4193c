//! Geometry tour: rotation matrices, angle-axis, Euler angles, isometries and quaternions

use std::f64::consts::FRAC_PI_4;
use std::io::Write;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::backend::{GeometryBackend, NalgebraBackend};
use crate::core_types::Vec3;
use crate::error::TourResult;
use crate::format::{matrix_text, row_text};
use crate::geometry::AngleAxis;

/// Settings for [`geometry_tour`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeometryTourConfig {
    /// Rotation angle in radians
    pub angle: f64,
    /// Rotation axis; normalized before use
    pub axis: Vec3,
    /// Translation applied after the rotation in the rigid transform
    pub translation: Vec3,
    /// The vector every representation rotates
    pub probe: Vec3,
    /// Significant digits for printed numbers
    pub precision: usize,
}

impl Default for GeometryTourConfig {
    fn default() -> Self {
        Self {
            angle: FRAC_PI_4,
            axis: Vec3::new(0.0, 0.0, 1.0),
            translation: Vec3::new(1.0, 3.0, 4.0),
            probe: Vec3::new(1.0, 0.0, 0.0),
            precision: 3,
        }
    }
}

fn vec_row(v: Vec3, precision: usize) -> String {
    row_text(&[v.x, v.y, v.z], precision)
}

/// Rotate the probe vector through every representation and print each result.
///
/// # Errors
///
/// [`TourError::DegenerateAxis`](crate::TourError::DegenerateAxis) for a zero or non-finite
/// axis, and I/O errors from `out`.
pub fn geometry_tour<W: Write>(out: &mut W, config: &GeometryTourConfig) -> TourResult<()> {
    let rotation_vector = AngleAxis::new(config.angle, config.axis)?;
    info!(
        angle = config.angle,
        axis = %rotation_vector.axis(),
        "running geometry tour"
    );

    let p = config.precision;
    let backend = NalgebraBackend;
    let v = config.probe;

    let rotation = backend.rotation_from_angle_axis(&rotation_vector);
    writeln!(
        out,
        "rotation matrix :\n{}",
        matrix_text(&backend.rotation_matrix(&rotation), p)
    )?;

    let rotated = backend.rotate_by_angle_axis(&rotation_vector, v);
    writeln!(out, "{v} after rotation (by angle axis) = {}", vec_row(rotated, p))?;

    let rotated = backend.rotate(&rotation, v);
    writeln!(out, "{v} after rotation (by matrix) = {}", vec_row(rotated, p))?;

    let euler = backend.euler_zyx(&rotation);
    writeln!(out, "yaw pitch roll = {}", row_text(&euler.to_array(), p))?;

    let transform = backend.isometry(&rotation_vector, config.translation);
    writeln!(
        out,
        "transform matrix :\n{}",
        matrix_text(&backend.homogeneous(&transform), p)
    )?;

    let transformed = backend.transform_point(&transform, v);
    writeln!(out, "{v} transformed = {}", vec_row(transformed, p))?;

    let q = backend.quaternion_from_angle_axis(&rotation_vector);
    writeln!(
        out,
        "quaternion from rotation vector = {}",
        row_text(&backend.quaternion_coeffs(&q), p)
    )?;

    let q = backend.quaternion_from_rotation(&rotation);
    writeln!(
        out,
        "quaternion from rotation matrix = {}",
        row_text(&backend.quaternion_coeffs(&q), p)
    )?;

    let rotated = backend.rotate_by_quaternion(&q, v);
    writeln!(out, "{v} after rotation (by quaternion) = {}", vec_row(rotated, p))?;

    writeln!(
        out,
        "equal to q * (0, v) * q^-1 = {}",
        row_text(&backend.conjugate(&q, v), p)
    )?;

    Ok(())
}
