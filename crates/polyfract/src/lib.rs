//! Curve-generation engine for hand-drawn polygons.
//!
//! A closed polygon (ordered vertices, implicit wrap-around edge) is grown one
//! generation at a time by replacing every edge with a fixed point pattern:
//! the quarter-based "fractal" notch or a Koch bump generalized to the side
//! count of the original polygon.
//!
//! Layout
//! - `geom2`: vector/rotation math and polygon measures.
//! - `rules`: per-edge subdivision rules and the rule selector.
//! - `sequence`: applies a rule to every edge of a closed polygon.
//! - `rand2`: reproducible sample polygons for benches, tests and the CLI.
//!
//! The engine is pure: no I/O, no global state, no display surface.

pub mod api;
mod error;
pub mod geom2;
pub mod rand2;
pub mod rules;
pub mod sequence;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::SubdivisionError;
pub use nalgebra::{Matrix2 as Mat2, Vector2 as Vec2};

/// A point (or free vector) in the plane.
pub type Point2 = Vec2<f64>;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::geom2::{lerp, radians, rotate, rotation_matrix};
    pub use crate::rules::{subdivide_fractal, subdivide_koch, Rule};
    pub use crate::sequence::{iterate, iterate_n, iterate_with, CurveGenerator, SequenceCfg, Seams};
    pub use crate::{Point2, SubdivisionError};
}
