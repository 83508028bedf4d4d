//! Sequence iterator: one generation of a closed polygon.
//!
//! Purpose
//! - Apply a `Rule` to every edge `(v[i], v[(i+1) % len])` of a closed vertex
//!   sequence, wrap-around edge included, and concatenate the per-edge paths
//!   into the next-generation sequence.
//! - The output is again a closed sequence, so `N` generations are `N` calls.
//!
//! Seams
//! - Every edge path starts with the vertex the previous path ended on.
//!   `Seams::Keep` (default) leaves those duplicates in place; `Seams::Merge`
//!   drops the leading anchor of each path, which removes exactly the shared
//!   vertices and nothing else.
//!
//! Growth per generation: fractal ×9 (×8 merged), koch ×(side_count+2)
//! (×(side_count+1) merged).
//!
//! Code cross-refs: `rules::{Rule, subdivide_fractal, subdivide_koch}`.

mod generator;

pub use generator::CurveGenerator;

use std::collections::TryReserveError;

use crate::rules::Rule;
use crate::{Point2, SubdivisionError};

/// Smallest vertex sequence that forms a closed polygon.
pub const MIN_POLYGON_LEN: usize = 3;

/// Vertex budget of the original drawing surface's vertex buffer.
pub const DEFAULT_VERTEX_BUDGET: usize = 30_000;

/// Longest vertex sequence a `Vec<Point2>` can address. Applies even when
/// `SequenceCfg::max_vertices` is `None`.
pub const MAX_SEQUENCE_LEN: usize = isize::MAX as usize / std::mem::size_of::<Point2>();

/// Handling of the vertex shared by consecutive edge paths.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Seams {
    /// Emit every edge path in full; shared vertices appear twice.
    #[default]
    Keep,
    /// Elide the leading anchor of every edge path.
    Merge,
}

impl Seams {
    pub fn name(self) -> &'static str {
        match self {
            Seams::Keep => "keep",
            Seams::Merge => "merge",
        }
    }
}

/// Iteration configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SequenceCfg {
    pub seams: Seams,
    /// Refuse a generation whose output would exceed this many vertices.
    /// `MAX_SEQUENCE_LEN` caps it either way.
    pub max_vertices: Option<usize>,
}

impl SequenceCfg {
    fn vertex_limit(&self) -> usize {
        self.max_vertices
            .map_or(MAX_SEQUENCE_LEN, |limit| limit.min(MAX_SEQUENCE_LEN))
    }
}

/// Predicted output length of one generation over `len` vertices.
pub fn output_len(len: usize, rule: Rule, side_count: usize, seams: Seams) -> usize {
    let per_edge = match seams {
        Seams::Keep => rule.points_per_edge(side_count),
        Seams::Merge => rule.points_per_edge(side_count) - 1,
    };
    len.saturating_mul(per_edge)
}

/// One generation with default configuration (seams kept, no budget).
///
/// `side_count` is the vertex count of the *original* polygon and only matters
/// for `Rule::Koch`; keep it constant across generations.
///
/// Errors
/// - `InvalidPolygon` if `vertices.len() < 3`.
/// - `InvalidSideCount` if `rule` is koch and `side_count < 3`.
/// - `VertexBudgetExceeded` if the output would not fit in `MAX_SEQUENCE_LEN`.
pub fn iterate(
    vertices: &[Point2],
    rule: Rule,
    side_count: usize,
) -> Result<Vec<Point2>, SubdivisionError> {
    iterate_with(vertices, rule, side_count, &SequenceCfg::default())
}

/// One generation with explicit configuration.
pub fn iterate_with(
    vertices: &[Point2],
    rule: Rule,
    side_count: usize,
    cfg: &SequenceCfg,
) -> Result<Vec<Point2>, SubdivisionError> {
    validate_inputs(vertices.len(), rule, side_count)?;
    let predicted = output_len(vertices.len(), rule, side_count, cfg.seams);
    let limit = cfg.vertex_limit();
    check_budget(predicted, limit)?;

    let skip = match cfg.seams {
        Seams::Keep => 0,
        Seams::Merge => 1,
    };
    let n = vertices.len();
    let refused = |_: TryReserveError| SubdivisionError::VertexBudgetExceeded { predicted, limit };
    let mut out: Vec<Point2> = Vec::new();
    out.try_reserve_exact(predicted).map_err(refused)?;
    let mut edge: Vec<Point2> = Vec::new();
    edge.try_reserve_exact(rule.points_per_edge(side_count)).map_err(refused)?;
    for i in 0..n {
        edge.clear();
        rule.subdivide_into(vertices[i], vertices[(i + 1) % n], side_count, &mut edge)?;
        out.extend_from_slice(&edge[skip..]);
    }
    debug_assert_eq!(out.len(), predicted);
    Ok(out)
}

/// `generations` sequential generations.
///
/// The budget is checked for every generation before any work is done, so an
/// error never leaves a half-grown sequence behind. `generations == 0` returns
/// a copy of the (validated) input.
pub fn iterate_n(
    vertices: &[Point2],
    rule: Rule,
    side_count: usize,
    cfg: &SequenceCfg,
    generations: usize,
) -> Result<Vec<Point2>, SubdivisionError> {
    validate_inputs(vertices.len(), rule, side_count)?;
    let limit = cfg.vertex_limit();
    let mut len = vertices.len();
    for _ in 0..generations {
        len = output_len(len, rule, side_count, cfg.seams);
        check_budget(len, limit)?;
    }

    let mut current = vertices.to_vec();
    for _ in 0..generations {
        current = iterate_with(&current, rule, side_count, cfg)?;
    }
    Ok(current)
}

fn validate_inputs(len: usize, rule: Rule, side_count: usize) -> Result<(), SubdivisionError> {
    if len < MIN_POLYGON_LEN {
        return Err(SubdivisionError::InvalidPolygon { len });
    }
    rule.validate_side_count(side_count)
}

fn check_budget(predicted: usize, limit: usize) -> Result<(), SubdivisionError> {
    if predicted > limit {
        return Err(SubdivisionError::VertexBudgetExceeded { predicted, limit });
    }
    Ok(())
}

#[cfg(test)]
mod tests;
