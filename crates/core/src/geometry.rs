//! Backend-independent rotation descriptions
//!
//! [`AngleAxis`] and [`EulerZyx`] are plain values; turning them into rotation matrices,
//! quaternions and rigid transforms is the job of a [`GeometryBackend`](crate::backend::GeometryBackend).

use std::fmt;

use nalgebra::{Unit, Vector3};
use serde::{Deserialize, Serialize};

use crate::core_types::Vec3;
use crate::error::{TourError, TourResult};

/// A rotation of `angle` radians about a unit-length `axis` (right-hand rule).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AngleAxis {
    angle: f64,
    axis: Unit<Vector3<f64>>,
}

impl AngleAxis {
    /// Build an angle-axis rotation, normalizing `axis`.
    ///
    /// # Errors
    ///
    /// [`TourError::DegenerateAxis`] if `axis` has a non-finite component or (near) zero length.
    pub fn new(angle: f64, axis: Vec3) -> TourResult<Self> {
        let degenerate = || TourError::DegenerateAxis {
            x: axis.x,
            y: axis.y,
            z: axis.z,
        };
        let v = Vector3::from(axis);
        // try_new lets NaN and infinite norms through
        if !v.iter().all(|c| c.is_finite()) {
            return Err(degenerate());
        }
        let axis = Unit::try_new(v, f64::EPSILON).ok_or_else(degenerate)?;
        Ok(Self { angle, axis })
    }

    /// Rotation angle in radians.
    pub fn angle(&self) -> f64 {
        self.angle
    }

    /// Unit rotation axis.
    pub fn axis(&self) -> Vec3 {
        self.axis.into_inner().into()
    }

    pub fn unit_axis(&self) -> Unit<Vector3<f64>> {
        self.axis
    }

    /// Axis scaled by the angle, the rotation vector form.
    pub fn scaled_axis(&self) -> Vector3<f64> {
        self.axis.into_inner() * self.angle
    }
}

/// Z-Y-X (yaw, pitch, roll) Euler angles in radians: `R = Rz(yaw)·Ry(pitch)·Rx(roll)`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct EulerZyx {
    pub yaw: f64,
    pub pitch: f64,
    pub roll: f64,
}

impl EulerZyx {
    pub const fn new(yaw: f64, pitch: f64, roll: f64) -> Self {
        Self { yaw, pitch, roll }
    }

    /// `[yaw, pitch, roll]`
    pub const fn to_array(self) -> [f64; 3] {
        [self.yaw, self.pitch, self.roll]
    }
}

impl fmt::Display for EulerZyx {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "yaw {:.4} rad, pitch {:.4} rad, roll {:.4} rad",
            self.yaw, self.pitch, self.roll
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_axis_is_normalized() {
        let aa = AngleAxis::new(1.0, Vec3::new(0.0, 0.0, 5.0)).unwrap();
        assert_eq!(aa.axis(), Vec3::new(0.0, 0.0, 1.0));
        assert_eq!(aa.angle(), 1.0);

        let aa = AngleAxis::new(0.5, Vec3::new(1.0, 1.0, 0.0)).unwrap();
        let axis = aa.axis();
        assert_relative_eq!(axis.x, std::f64::consts::FRAC_1_SQRT_2, epsilon = 1e-15);
        assert_relative_eq!(axis.y, std::f64::consts::FRAC_1_SQRT_2, epsilon = 1e-15);
        assert_relative_eq!(aa.unit_axis().norm(), 1.0, epsilon = 1e-15);
        assert_relative_eq!(aa.scaled_axis().norm(), 0.5, epsilon = 1e-15);
    }

    #[test]
    fn test_degenerate_axes_are_rejected() {
        for axis in [
            Vec3::ZERO,
            Vec3::new(f64::NAN, 0.0, 1.0),
            Vec3::new(f64::INFINITY, 0.0, 0.0),
            Vec3::new(1e-20, 0.0, 0.0),
        ] {
            let err = AngleAxis::new(1.0, axis).unwrap_err();
            assert!(matches!(err, TourError::DegenerateAxis { .. }));
        }
    }

    #[test]
    fn test_euler_display() {
        let e = EulerZyx::new(0.785398, 0.0, 0.0);
        assert_eq!(e.to_string(), "yaw 0.7854 rad, pitch 0.0000 rad, roll 0.0000 rad");
        assert_eq!(e.to_array(), [0.785398, 0.0, 0.0]);
    }
}
