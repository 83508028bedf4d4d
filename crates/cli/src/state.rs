//! Saved drawing state and generated-curve documents (JSON).
//!
//! The record keeps the field names of the drawing app's save files
//! (`iterCount`, `currentCurve`, `lineColor`, `polygon_vertices`) so files move
//! between the two unchanged. Only the vertices and the curve name feed the
//! engine; the color is carried through untouched.

use anyhow::{Context, Result};
use polyfract::api::{Point2, Rule, SubdivisionError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Default line color of the drawing app (opaque blue).
pub const DEFAULT_LINE_COLOR: [f32; 4] = [0.0, 0.0, 1.0, 1.0];

fn default_line_color() -> [f32; 4] {
    DEFAULT_LINE_COLOR
}

/// The original polygon plus how to grow it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CurveRecord {
    #[serde(rename = "iterCount")]
    pub iter_count: usize,
    #[serde(rename = "currentCurve")]
    pub current_curve: String,
    #[serde(rename = "lineColor", default = "default_line_color")]
    pub line_color: [f32; 4],
    pub polygon_vertices: Vec<[f64; 2]>,
}

impl CurveRecord {
    pub fn new(polygon: &[Point2], rule: Rule, iter_count: usize) -> Self {
        Self {
            iter_count,
            current_curve: rule.name().to_string(),
            line_color: DEFAULT_LINE_COLOR,
            polygon_vertices: polygon.iter().map(|p| [p.x, p.y]).collect(),
        }
    }

    pub fn load(path: &Path) -> Result<Self> {
        let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
        serde_json::from_slice(&bytes).with_context(|| format!("parsing record {}", path.display()))
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        write_json(path, self)
    }

    pub fn rule(&self) -> Result<Rule, SubdivisionError> {
        self.current_curve.parse()
    }

    pub fn polygon(&self) -> Vec<Point2> {
        self.polygon_vertices
            .iter()
            .map(|&[x, y]| Point2::new(x, y))
            .collect()
    }

    /// Side count for the Koch rule: the saved polygon is the original one.
    pub fn side_count(&self) -> usize {
        self.polygon_vertices.len()
    }
}

/// A generated curve together with the record it came from.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CurveOutput {
    pub source: CurveRecord,
    pub rule: String,
    pub generation: usize,
    pub side_count: usize,
    pub vertices: Vec<[f64; 2]>,
}

impl CurveOutput {
    pub fn save(&self, path: &Path) -> Result<()> {
        write_json(path, self)
    }
}

fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    fs::write(path, serde_json::to_vec_pretty(value)?)
        .with_context(|| format!("writing {}", path.display()))
}
