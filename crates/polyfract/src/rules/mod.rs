//! Edge subdivision rules.
//!
//! Purpose
//! - Replace a single polygon edge `start → end` by an ordered point path that
//!   begins at `start` and ends at `end`.
//! - `Rule` is the selector a caller persists and passes to the sequence
//!   iterator; the rule functions themselves are free and pure.
//!
//! Rules
//! - `fractal`: quarter-based notch, always `FRACTAL_POINTS` points per edge.
//! - `koch`: regular `side_count`-gon raised on the middle `1/side_count` of the
//!   edge, `side_count + 2` points per edge.
//!
//! Code cross-refs: `geom2::{lerp, rotate, radians}`, `sequence::iterate`.

mod fractal;
mod koch;

pub use fractal::{subdivide_fractal, FRACTAL_POINTS};
pub use koch::{koch_points_per_edge, subdivide_koch, MIN_SIDE_COUNT};

use std::fmt;
use std::str::FromStr;

use crate::{Point2, SubdivisionError};

/// Which subdivision rule one iteration applies.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Rule {
    #[default]
    Fractal,
    Koch,
}

impl Rule {
    pub const ALL: [Rule; 2] = [Rule::Fractal, Rule::Koch];

    /// Selector name as stored in saved records.
    pub fn name(self) -> &'static str {
        match self {
            Rule::Fractal => "fractal",
            Rule::Koch => "koch",
        }
    }

    /// Points emitted for one edge, anchor included.
    ///
    /// `side_count` is ignored by the fractal rule.
    pub fn points_per_edge(self, side_count: usize) -> usize {
        match self {
            Rule::Fractal => FRACTAL_POINTS,
            Rule::Koch => koch_points_per_edge(side_count),
        }
    }

    /// Check that `side_count` is meaningful for this rule.
    pub fn validate_side_count(self, side_count: usize) -> Result<(), SubdivisionError> {
        match self {
            Rule::Koch if side_count < MIN_SIDE_COUNT => {
                Err(SubdivisionError::InvalidSideCount { side_count })
            }
            _ => Ok(()),
        }
    }

    /// Apply the rule to one edge, appending its points to `out`.
    pub fn subdivide_into(
        self,
        start: Point2,
        end: Point2,
        side_count: usize,
        out: &mut Vec<Point2>,
    ) -> Result<(), SubdivisionError> {
        match self {
            Rule::Fractal => out.extend_from_slice(&subdivide_fractal(start, end)),
            Rule::Koch => out.extend(subdivide_koch(start, end, side_count)?),
        }
        Ok(())
    }

    /// Apply the rule to one edge.
    pub fn subdivide(
        self,
        start: Point2,
        end: Point2,
        side_count: usize,
    ) -> Result<Vec<Point2>, SubdivisionError> {
        match self {
            Rule::Fractal => Ok(subdivide_fractal(start, end).to_vec()),
            Rule::Koch => subdivide_koch(start, end, side_count),
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Rule {
    type Err = SubdivisionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim();
        Rule::ALL
            .into_iter()
            .find(|r| r.name().eq_ignore_ascii_case(key))
            .ok_or_else(|| SubdivisionError::unknown_rule(s))
    }
}
