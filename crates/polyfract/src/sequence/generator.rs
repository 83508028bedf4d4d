use super::{iterate_n, iterate_with, SequenceCfg, MIN_POLYGON_LEN};
use crate::rules::Rule;
use crate::{Point2, SubdivisionError};

/// Owns a growing curve and the side count of the polygon it started from.
///
/// The side count is captured once, from the original polygon, and never
/// follows the growing sequence. The rule may change between generations
/// (e.g. a few fractal steps followed by koch steps).
#[derive(Clone, Debug)]
pub struct CurveGenerator {
    rule: Rule,
    side_count: usize,
    cfg: SequenceCfg,
    vertices: Vec<Point2>,
    generation: usize,
}

impl CurveGenerator {
    /// Start from a freshly closed polygon; its length becomes the side count.
    pub fn new(polygon: Vec<Point2>, rule: Rule) -> Result<Self, SubdivisionError> {
        if polygon.len() < MIN_POLYGON_LEN {
            return Err(SubdivisionError::InvalidPolygon { len: polygon.len() });
        }
        Ok(Self {
            rule,
            side_count: polygon.len(),
            cfg: SequenceCfg::default(),
            vertices: polygon,
            generation: 0,
        })
    }

    pub fn with_cfg(mut self, cfg: SequenceCfg) -> Self {
        self.cfg = cfg;
        self
    }

    pub fn set_rule(&mut self, rule: Rule) {
        self.rule = rule;
    }

    /// Advance one generation.
    pub fn step(&mut self) -> Result<&[Point2], SubdivisionError> {
        self.vertices = iterate_with(&self.vertices, self.rule, self.side_count, &self.cfg)?;
        self.generation += 1;
        Ok(&self.vertices)
    }

    /// Advance `generations` generations; on error nothing changes.
    pub fn run(&mut self, generations: usize) -> Result<&[Point2], SubdivisionError> {
        self.vertices = iterate_n(
            &self.vertices,
            self.rule,
            self.side_count,
            &self.cfg,
            generations,
        )?;
        self.generation += generations;
        Ok(&self.vertices)
    }

    #[inline]
    pub fn rule(&self) -> Rule {
        self.rule
    }
    #[inline]
    pub fn side_count(&self) -> usize {
        self.side_count
    }
    #[inline]
    pub fn cfg(&self) -> &SequenceCfg {
        &self.cfg
    }
    #[inline]
    pub fn generation(&self) -> usize {
        self.generation
    }
    #[inline]
    pub fn vertices(&self) -> &[Point2] {
        &self.vertices
    }
    pub fn into_vertices(self) -> Vec<Point2> {
        self.vertices
    }
}
