//! Curated surface for the shell crates (CLI, future front ends).
//!
//! Prefer these re-exports over reaching into module paths so that internal
//! reshuffles stay local to this crate.

// Vector/rotation math and measures
pub use crate::geom2::{centroid, lerp, perimeter, radians, rotate, rotation_matrix, signed_area};
// Edge rules
pub use crate::rules::{subdivide_fractal, subdivide_koch, Rule, FRACTAL_POINTS, MIN_SIDE_COUNT};
// Sequence iteration
pub use crate::sequence::{
    iterate, iterate_n, iterate_with, output_len, CurveGenerator, Seams, SequenceCfg,
    DEFAULT_VERTEX_BUDGET, MAX_SEQUENCE_LEN, MIN_POLYGON_LEN,
};
// Sample polygons
pub use crate::rand2::{
    draw_polygon_radial, recenter_rescale, regular_polygon, RadialCfg, ReplayToken,
};
pub use crate::{Point2, SubdivisionError};
