use crate::Point2;

/// Length of the closed path through `verts`, including the edge back to `verts[0]`.
pub fn perimeter(verts: &[Point2]) -> f64 {
    closed_edges(verts).map(|(p, q)| (q - p).norm()).sum()
}

/// Shoelace area; positive when the vertices run counterclockwise.
pub fn signed_area(verts: &[Point2]) -> f64 {
    0.5 * closed_edges(verts)
        .map(|(p, q)| p.x * q.y - q.x * p.y)
        .sum::<f64>()
}

/// Area centroid of a closed polygon. None for fewer than 3 vertices or (near) zero area.
pub fn centroid(verts: &[Point2]) -> Option<Point2> {
    if verts.len() < 3 {
        return None;
    }
    let mut a = 0.0;
    let mut c = Point2::zeros();
    for (p, q) in closed_edges(verts) {
        let cross = p.x * q.y - q.x * p.y;
        a += cross;
        c += (p + q) * cross;
    }
    a *= 0.5;
    if a.abs() < 1e-18 {
        return None;
    }
    Some(c / (6.0 * a))
}

fn closed_edges(verts: &[Point2]) -> impl Iterator<Item = (Point2, Point2)> + '_ {
    let n = verts.len();
    (0..n).map(move |i| (verts[i], verts[(i + 1) % n]))
}
