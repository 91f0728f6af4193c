//! Vector tour: the hand-written `Vec3` in action

use std::io::Write;

use tracing::info;

use crate::core_types::Vec3;
use crate::error::TourResult;

/// Add `(1,2,3)` and `(4,5,6)` and write the sum, `(5,7,9)`, as one line.
///
/// # Errors
///
/// Only I/O errors from `out`.
pub fn vector_tour<W: Write>(out: &mut W) -> TourResult<()> {
    info!("running vector tour");

    let a = Vec3::new(1.0, 2.0, 3.0);
    let b = Vec3::new(4.0, 5.0, 6.0);
    let c = a + b;

    writeln!(out, "{c}")?;
    Ok(())
}
