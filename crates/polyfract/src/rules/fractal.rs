use crate::geom2::{lerp, radians, rotate, scale};
use crate::Point2;

/// Points produced by the fractal rule for one edge (leading anchor included).
pub const FRACTAL_POINTS: usize = 9;

/// Notch walls stand at a right angle to the edge.
const NOTCH_TURN_DEG: f64 = 90.0;

/// Quarter-based notch replacement of the edge `start → end`.
///
/// With `q = (end − start)/4` and `v = q` rotated 90° counterclockwise, the path is
/// `start, q1, q1+v, mid+v, mid, mid−v, q2−v, q2, end`, where `q1`, `mid`, `q2`
/// are the quarter points of the edge. The path raises one square of side `|q|`
/// on the left of the first half and sinks one on the right of the second half,
/// so its length is twice the edge length.
///
/// `out[0] == start` is the continuity anchor shared with the previous edge.
pub fn subdivide_fractal(start: Point2, end: Point2) -> [Point2; FRACTAL_POINTS] {
    let quarter = scale(0.25, end - start);
    let mid = lerp(start, end, 0.5);
    let q1 = lerp(start, mid, 0.5);
    let q2 = lerp(mid, end, 0.5);
    let up = rotate(radians(NOTCH_TURN_DEG), quarter);

    let top = q1 + up;
    let top_end = top + quarter;
    let bottom = mid - up;
    let bottom_end = bottom + quarter;
    [start, q1, top, top_end, mid, bottom, bottom_end, q2, end]
}
