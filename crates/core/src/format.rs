//! Stream-style number and matrix rendering.
//!
//! The tours print numbers the way a C-family output stream does by default: a fixed number of
//! *significant* digits, trailing zeros dropped, switching to scientific notation for very large
//! or very small magnitudes. Rust's `{}` and `{:.N}` have different semantics (shortest
//! round-trip and fixed decimals), so the rule lives here.

use nalgebra::{Dim, Matrix, RawStorage, RowDVector};

/// Default significant digits of a freshly constructed output stream.
pub const STREAM_PRECISION: usize = 6;

/// Render `value` with `precision` significant digits in general (`%g`) notation.
///
/// A precision of 0 is treated as 1. Scientific notation is used when the decimal exponent
/// (after rounding) is below -4 or at least `precision`; the exponent always carries a sign and
/// at least two digits.
///
/// ```
/// use linalg_tour_core::format::general;
///
/// assert_eq!(general(5.0, 6), "5");
/// assert_eq!(general(0.70710678, 3), "0.707");
/// assert_eq!(general(123456789.0, 6), "1.23457e+08");
/// ```
pub fn general(value: f64, precision: usize) -> String {
    if value.is_nan() {
        return "nan".to_owned();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_owned();
    }

    let p = precision.max(1);
    let scientific = format!("{:.*e}", p - 1, value);
    let (mantissa, exponent) = match scientific.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => (scientific.as_str(), 0),
    };

    if exponent < -4 || exponent >= p as i32 {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!(
            "{}e{}{:02}",
            strip_trailing_zeros(mantissa),
            sign,
            exponent.unsigned_abs()
        )
    } else {
        let decimals = (p as i32 - 1 - exponent) as usize;
        strip_trailing_zeros(&format!("{value:.decimals$}"))
    }
}

fn strip_trailing_zeros(s: &str) -> String {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.').to_owned()
    } else {
        s.to_owned()
    }
}

/// Render a matrix as aligned text: rows on separate lines, columns separated by one space,
/// every cell right-aligned to the widest cell.
///
/// Works for any element type that widens to `f64`, so `f32` matrices print the same way.
pub fn matrix_text<T, R, C, S>(m: &Matrix<T, R, C, S>, precision: usize) -> String
where
    T: Copy + Into<f64>,
    R: Dim,
    C: Dim,
    S: RawStorage<T, R, C>,
{
    let (rows, cols) = m.shape();
    let cells: Vec<String> = (0..rows)
        .flat_map(|i| (0..cols).map(move |j| (i, j)))
        .map(|(i, j)| general(m[(i, j)].into(), precision))
        .collect();
    let width = cells.iter().map(String::len).max().unwrap_or(0);

    let mut out = String::new();
    for (i, row) in cells.chunks(cols.max(1)).enumerate().take(rows) {
        if i > 0 {
            out.push('\n');
        }
        let line: Vec<String> = row.iter().map(|c| format!("{c:>width$}")).collect();
        out.push_str(&line.join(" "));
    }
    out
}

/// Render a flat list of values as one aligned row, the way a transposed vector prints.
pub fn row_text(values: &[f64], precision: usize) -> String {
    matrix_text(&RowDVector::from_row_slice(values), precision)
}
