//! Hand-written 3D vector value type.
//!
//! `Vec3` is deliberately small: construction, component-wise addition and a compact
//! `(x,y,z)` rendering. Everything heavier goes through `nalgebra`, and the two convert
//! losslessly into each other.
//!
//! # Usage
//! ```
//! use linalg_tour_core::Vec3;
//!
//! let sum = Vec3::new(1.0, 2.0, 3.0) + Vec3::new(4.0, 5.0, 6.0);
//! assert_eq!(sum, Vec3::new(5.0, 7.0, 9.0));
//! assert_eq!(sum.to_string(), "(5,7,9)");
//! ```

use std::fmt;
use std::ops::Add;
use std::str::FromStr;

use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::error::TourError;

/// A point or displacement in 3D space.
///
/// Components are unconstrained `f64` values; NaN and infinities propagate through
/// arithmetic per IEEE-754.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    /// The zero vector.
    pub const ZERO: Vec3 = Vec3::new(0.0, 0.0, 0.0);

    #[inline]
    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Vec3 { x, y, z }
    }
}

impl Add for Vec3 {
    type Output = Vec3;

    #[inline]
    fn add(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

/// Renders as `(x,y,z)` with no whitespace. A precision (`{:.2}`) applies to each component.
impl fmt::Display for Vec3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match f.precision() {
            Some(p) => write!(f, "({:.*},{:.*},{:.*})", p, self.x, p, self.y, p, self.z),
            None => write!(f, "({},{},{})", self.x, self.y, self.z),
        }
    }
}

/// Accepts `(x,y,z)` or bare `x,y,z`, with optional whitespace around each component.
impl FromStr for Vec3 {
    type Err = TourError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let inner = match (trimmed.strip_prefix('('), trimmed.strip_suffix(')')) {
            (Some(_), Some(_)) => &trimmed[1..trimmed.len() - 1],
            (None, None) => trimmed,
            _ => return Err(TourError::parse_vector(s, "unbalanced parentheses")),
        };

        let parts: Vec<&str> = inner.split(',').map(str::trim).collect();
        if parts.len() != 3 {
            return Err(TourError::parse_vector(
                s,
                format!("expected 3 components, found {}", parts.len()),
            ));
        }

        let mut coords = [0.0_f64; 3];
        for (slot, part) in coords.iter_mut().zip(&parts) {
            *slot = part
                .parse::<f64>()
                .map_err(|e| TourError::parse_vector(s, format!("'{part}': {e}")))?;
        }

        Ok(Vec3::new(coords[0], coords[1], coords[2]))
    }
}

impl From<Vector3<f64>> for Vec3 {
    fn from(v: Vector3<f64>) -> Self {
        Vec3::new(v.x, v.y, v.z)
    }
}

impl From<Vec3> for Vector3<f64> {
    fn from(v: Vec3) -> Self {
        Vector3::new(v.x, v.y, v.z)
    }
}

impl From<[f64; 3]> for Vec3 {
    fn from([x, y, z]: [f64; 3]) -> Self {
        Vec3::new(x, y, z)
    }
}
