//! Reproducible sample polygons (regular and radially jittered).
//!
//! Purpose
//! - Stand in for a hand-drawn polygon in benches, property tests and the CLI
//!   `sample` command: star-shaped around the origin, counterclockwise, with
//!   uneven edges and angles.
//!
//! Model
//! - Start from `n` equally spaced angles on [0, 2π), add bounded angular and
//!   radial jitter, keep the angular order.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.
//!
//! Code cross-refs: `geom2::centroid`, `sequence::MIN_POLYGON_LEN`.

use std::f64::consts::TAU;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::geom2::centroid;
use crate::sequence::MIN_POLYGON_LEN;
use crate::{Point2, SubdivisionError};

/// Radial-jitter sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct RadialCfg {
    /// Vertex count; lifted to 3 when smaller.
    pub vertices: usize,
    /// Angular jitter as a fraction of the base spacing Δ=2π/n. Clamped to [0, 0.49].
    pub angle_jitter_frac: f64,
    /// Radii are `base_radius * (1 + u)` with `u ∈ [-radial_jitter, radial_jitter]`.
    pub radial_jitter: f64,
    pub base_radius: f64,
    /// Random global phase in [0, 2π)?
    pub random_phase: bool,
}
impl Default for RadialCfg {
    fn default() -> Self {
        Self {
            vertices: 5,
            angle_jitter_frac: 0.3,
            radial_jitter: 0.25,
            base_radius: 0.6,
            random_phase: true,
        }
    }
}

/// `(seed, index)` pair naming one draw; the same token always yields the same polygon.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}
impl ReplayToken {
    fn rng(self) -> StdRng {
        // Seed and index occupy disjoint halves of the key, so tokens never collide.
        let mut key = [0u8; 32];
        key[..8].copy_from_slice(&self.seed.to_le_bytes());
        key[8..16].copy_from_slice(&self.index.to_le_bytes());
        StdRng::from_seed(key)
    }
}

/// Regular `n`-gon of circumradius `radius`, first vertex at angle `phase`, counterclockwise.
pub fn regular_polygon(n: usize, radius: f64, phase: f64) -> Result<Vec<Point2>, SubdivisionError> {
    if n < MIN_POLYGON_LEN {
        return Err(SubdivisionError::InvalidPolygon { len: n });
    }
    let delta = TAU / n as f64;
    Ok((0..n)
        .map(|k| {
            let th = phase + k as f64 * delta;
            Point2::new(radius * th.cos(), radius * th.sin())
        })
        .collect())
}

/// Draw a jittered star-shaped polygon around the origin (counterclockwise).
pub fn draw_polygon_radial(cfg: RadialCfg, tok: ReplayToken) -> Vec<Point2> {
    let mut rng = tok.rng();
    let n = cfg.vertices.max(MIN_POLYGON_LEN);
    let aj = cfg.angle_jitter_frac.clamp(0.0, 0.49);
    let rj = cfg.radial_jitter.max(0.0);
    let r0 = cfg.base_radius.max(1e-9);
    let delta = TAU / n as f64;
    let phase = if cfg.random_phase {
        rng.gen::<f64>() * TAU
    } else {
        0.0
    };
    // Jitter below Δ/2 keeps the angles in order, so no sort is needed.
    let angles: Vec<f64> = (0..n)
        .map(|k| {
            let jitter = (rng.gen::<f64>() * 2.0 - 1.0) * aj * delta;
            phase + k as f64 * delta + jitter
        })
        .collect();
    angles
        .into_iter()
        .map(|th| {
            let u = (rng.gen::<f64>() * 2.0 - 1.0) * rj;
            let r = (1.0 + u).max(1e-6) * r0;
            Point2::new(th.cos() * r, th.sin() * r)
        })
        .collect()
}

/// Translate to the area centroid and shrink so every vertex has norm ≤ `r_out_max`.
///
/// Returns None for degenerate polygons (no centroid) or a non-positive bound.
pub fn recenter_rescale(verts: &[Point2], r_out_max: f64) -> Option<Vec<Point2>> {
    if !(r_out_max.is_finite() && r_out_max > 0.0) {
        return None;
    }
    let c = centroid(verts)?;
    let r_out = verts.iter().map(|p| (p - c).norm()).fold(0.0, f64::max);
    let s = if r_out > r_out_max { r_out_max / r_out } else { 1.0 };
    Some(verts.iter().map(|p| (p - c) * s).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom2::signed_area;

    #[test]
    fn reproducible_draw() {
        let cfg = RadialCfg {
            vertices: 10,
            angle_jitter_frac: 0.2,
            radial_jitter: 0.1,
            base_radius: 1.0,
            random_phase: true,
        };
        let tok = ReplayToken { seed: 42, index: 7 };
        let p1 = draw_polygon_radial(cfg, tok);
        let p2 = draw_polygon_radial(cfg, tok);
        assert_eq!(p1.len(), 10);
        assert_eq!(p1, p2);
        let p3 = draw_polygon_radial(cfg, ReplayToken { seed: 42, index: 8 });
        assert_ne!(p1, p3);
    }

    #[test]
    fn draws_are_counterclockwise_polygons() {
        let cfg = RadialCfg::default();
        for index in 0..50 {
            let p = draw_polygon_radial(cfg, ReplayToken { seed: 3, index });
            assert_eq!(p.len(), 5);
            assert!(signed_area(&p) > 0.0);
        }
        // Tiny fixed counts are lifted to a triangle.
        let cfg = RadialCfg {
            vertices: 1,
            ..RadialCfg::default()
        };
        assert_eq!(draw_polygon_radial(cfg, ReplayToken { seed: 0, index: 0 }).len(), 3);
    }

    #[test]
    fn regular_polygon_vertices_on_circle() {
        let hex = regular_polygon(6, 0.5, 0.0).unwrap();
        assert_eq!(hex.len(), 6);
        for p in &hex {
            assert!((p.norm() - 0.5).abs() < 1e-12);
        }
        assert!((hex[0] - Point2::new(0.5, 0.0)).norm() < 1e-12);
        assert!(signed_area(&hex) > 0.0);
        assert_eq!(
            regular_polygon(2, 1.0, 0.0),
            Err(SubdivisionError::InvalidPolygon { len: 2 })
        );
    }

    #[test]
    fn recenter_and_bound() {
        let shifted: Vec<Point2> = regular_polygon(4, 2.0, 0.0)
            .unwrap()
            .into_iter()
            .map(|p| p + Point2::new(3.0, -1.0))
            .collect();
        let q = recenter_rescale(&shifted, 0.9).unwrap();
        for p in &q {
            assert!((p.norm() - 0.9).abs() < 1e-9);
        }
        // Already small enough: translation only.
        let small = regular_polygon(3, 0.2, 0.0).unwrap();
        let r = recenter_rescale(&small, 1.0).unwrap();
        for (a, b) in small.iter().zip(&r) {
            assert!((a - b).norm() < 1e-12);
        }
        assert!(recenter_rescale(&small, 0.0).is_none());
    }
}
