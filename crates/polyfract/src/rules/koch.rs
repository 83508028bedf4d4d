use crate::geom2::{lerp, radians, rotate};
use crate::sequence::MAX_SEQUENCE_LEN;
use crate::{Point2, SubdivisionError};

/// Smallest side count with a geometric meaning (the classic snowflake).
pub const MIN_SIDE_COUNT: usize = 3;

const FULL_TURN_DEG: f64 = 360.0;
const HALF_TURN_DEG: f64 = 180.0;

/// Points produced by the Koch rule for one edge (leading anchor included).
#[inline]
pub fn koch_points_per_edge(side_count: usize) -> usize {
    side_count.saturating_add(2)
}

/// Koch replacement of the edge `start → end`, generalized to `side_count` sides.
///
/// The middle `1/side_count` of the edge becomes the base of a regular
/// `side_count`-gon raised on its left (counterclockwise) side. Output:
/// `start`, base start, the `side_count − 2` apexes of the raised polygon, base
/// end, `end`.
///
/// Walk: the step vector starts as `(end − start)/side_count` and turns left by
/// the interior angle `180° − 360°/side_count` once; every later turn is right by
/// the exterior angle (a rotation of `360° − 360°/side_count`). For
/// `side_count = 3` this is the single 60° bump of the classic Koch segment.
///
/// Errors
/// - `InvalidSideCount` if `side_count < 3`.
/// - `VertexBudgetExceeded` if the edge path alone would not fit in
///   `MAX_SEQUENCE_LEN`.
pub fn subdivide_koch(
    start: Point2,
    end: Point2,
    side_count: usize,
) -> Result<Vec<Point2>, SubdivisionError> {
    if side_count < MIN_SIDE_COUNT {
        return Err(SubdivisionError::InvalidSideCount { side_count });
    }
    let n = side_count as f64;
    let exterior = FULL_TURN_DEG / n;
    let left = radians(HALF_TURN_DEG - exterior);
    let right = radians(FULL_TURN_DEG - exterior);

    let mid = lerp(start, end, 0.5);
    let line = end - start;
    let half_base = line / (2.0 * n);
    let base_start = mid - half_base;
    let base_end = mid + half_base;

    let predicted = koch_points_per_edge(side_count);
    let refused = SubdivisionError::VertexBudgetExceeded {
        predicted,
        limit: MAX_SEQUENCE_LEN,
    };
    if predicted > MAX_SEQUENCE_LEN {
        return Err(refused);
    }
    let mut out: Vec<Point2> = Vec::new();
    out.try_reserve_exact(predicted).map_err(|_| refused)?;
    out.push(start);
    out.push(base_start);

    let mut step = line / n;
    let mut point = base_start;
    let mut turn_left = true;
    for _ in 0..side_count - 2 {
        let angle = if turn_left { left } else { right };
        turn_left = false;
        step = rotate(angle, step);
        point += step;
        out.push(point);
    }

    out.push(base_end);
    out.push(end);
    Ok(out)
}
