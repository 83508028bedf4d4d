//! Plane geometry used by the subdivision rules.
//!
//! - `ops`: vector algebra on `Point2` and counterclockwise rotation by an angle.
//! - `measure`: perimeter, signed area and centroid of a closed vertex sequence.
//!
//! Conventions
//! - Positive-y-up coordinates; positive angles rotate counterclockwise.
//! - Angles are radians unless a name says otherwise (`radians(deg)` converts).

mod measure;
mod ops;

pub use measure::{centroid, perimeter, signed_area};
pub use ops::{add, lerp, radians, rotate, rotation_matrix, scale, sub};
