use nalgebra::Matrix2;

use crate::Point2;

/// `a − b`.
#[inline]
pub fn sub(a: Point2, b: Point2) -> Point2 {
    a - b
}

/// `a + b`.
#[inline]
pub fn add(a: Point2, b: Point2) -> Point2 {
    a + b
}

/// Component-wise `s · p`.
#[inline]
pub fn scale(s: f64, p: Point2) -> Point2 {
    p * s
}

/// Linear interpolation `p0 + t (p1 − p0)`; `t = 0` gives `p0`, `t = 1` gives `p1`.
#[inline]
pub fn lerp(p0: Point2, p1: Point2, t: f64) -> Point2 {
    p0 + (p1 - p0) * t
}

/// Degrees to radians.
#[inline]
pub fn radians(degrees: f64) -> f64 {
    degrees.to_radians()
}

/// Counterclockwise rotation by `theta` radians: `[[cos θ, −sin θ], [sin θ, cos θ]]`.
#[inline]
pub fn rotation_matrix(theta: f64) -> Matrix2<f64> {
    let (s, c) = theta.sin_cos();
    Matrix2::new(c, -s, s, c)
}

/// Rotate `p` about the origin by `theta` radians.
///
/// NaN or infinite inputs propagate into the result unchanged in kind.
#[inline]
pub fn rotate(theta: f64, p: Point2) -> Point2 {
    rotation_matrix(theta) * p
}
