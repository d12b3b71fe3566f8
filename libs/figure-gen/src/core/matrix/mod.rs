//! 4x4 matrix helpers for bicubic patch evaluation.
//!
//! A patch is a 4x4 grid of control points. Evaluation precomputes
//! `M · P · Mᵀ` once per patch so that every sample afterwards costs two
//! cubic polynomials instead of the full basis expansion.
//!
//! ```text
//! (M·P)[i][j] = Σk M[i][k] · P[k][j]     (rows of M weight columns of P)
//! (P·M)[i][j] = Σk P[i][k] · M[k][j]     (mirror product)
//! ```

use crate::core::point::Point;

/// A 4x4 scalar matrix, row-major.
pub type Matrix4 = [[f64; 4]; 4];

/// A 4x4 grid of points, row-major.
pub type PointGrid = [[Point; 4]; 4];

/// Cubic Bezier basis matrix.
///
/// Row `k` holds the coefficients of `t^(3-k)` in the four Bernstein
/// polynomials.
pub const BEZIER_BASIS: Matrix4 = [
    [-1.0, 3.0, -3.0, 1.0],
    [3.0, -6.0, 3.0, 0.0],
    [-3.0, 3.0, 0.0, 0.0],
    [1.0, 0.0, 0.0, 0.0],
];

/// Returns the transpose of `m`.
///
/// # Examples
/// ```
/// use figure_gen::core::matrix::{transpose, BEZIER_BASIS};
/// // The Bezier basis is symmetric
/// assert_eq!(transpose(&BEZIER_BASIS), BEZIER_BASIS);
/// ```
pub fn transpose(m: &Matrix4) -> Matrix4 {
    let mut t = [[0.0; 4]; 4];
    for (i, row) in m.iter().enumerate() {
        for (j, value) in row.iter().enumerate() {
            t[j][i] = *value;
        }
    }
    t
}

/// Matrix times point grid: `M · P`.
pub fn mult_mp(m: &Matrix4, p: &PointGrid) -> PointGrid {
    let mut r = [[Point::ZERO; 4]; 4];
    for (i, row) in r.iter_mut().enumerate() {
        for (j, cell) in row.iter_mut().enumerate() {
            *cell = (0..4).fold(Point::ZERO, |acc, k| acc + p[k][j] * m[i][k]);
        }
    }
    r
}

/// Point grid times matrix: `P · M`.
pub fn mult_pm(p: &PointGrid, m: &Matrix4) -> PointGrid {
    let mut r = [[Point::ZERO; 4]; 4];
    for (i, row) in r.iter_mut().enumerate() {
        for (j, cell) in row.iter_mut().enumerate() {
            *cell = (0..4).fold(Point::ZERO, |acc, k| acc + p[i][k] * m[k][j]);
        }
    }
    r
}

/// Two-sided transform `M · P · Mᵀ`.
///
/// # Examples
/// ```
/// use figure_gen::core::matrix::{mult_mpm, BEZIER_BASIS};
/// use figure_gen::core::point::Point;
///
/// let grid = [[Point::new(1.0, 2.0, 3.0); 4]; 4];
/// let coefficients = mult_mpm(&BEZIER_BASIS, &grid);
/// // A constant patch keeps only the constant term
/// assert_eq!(coefficients[3][3], Point::new(1.0, 2.0, 3.0));
/// assert_eq!(coefficients[0][0], Point::ZERO);
/// ```
pub fn mult_mpm(m: &Matrix4, p: &PointGrid) -> PointGrid {
    mult_pm(&mult_mp(m, p), &transpose(m))
}
