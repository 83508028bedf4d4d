use std::fmt;

/// Errors surfaced by the subdivision entry points.
///
/// Every failure is detected before any geometry is produced, so callers never
/// see partial output.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubdivisionError {
    /// A closed polygon needs at least three vertices.
    InvalidPolygon { len: usize },
    /// The Koch rule is only defined for polygons with three or more sides.
    InvalidSideCount { side_count: usize },
    /// Rule name outside `{fractal, koch}`.
    InvalidRuleSelector { name: String },
    /// One more generation would exceed the configured vertex budget.
    VertexBudgetExceeded { predicted: usize, limit: usize },
}

impl SubdivisionError {
    pub(crate) fn unknown_rule(name: impl Into<String>) -> Self {
        Self::InvalidRuleSelector { name: name.into() }
    }
}

impl fmt::Display for SubdivisionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPolygon { len } => {
                write!(f, "polygon has {len} vertices (needs ≥3)")
            }
            Self::InvalidSideCount { side_count } => {
                write!(f, "koch rule needs a side count ≥3, got {side_count}")
            }
            Self::InvalidRuleSelector { name } => {
                write!(f, "unknown rule {name:?} (expected \"fractal\" or \"koch\")")
            }
            Self::VertexBudgetExceeded { predicted, limit } => write!(
                f,
                "next generation would have {predicted} vertices (limit {limit})"
            ),
        }
    }
}

impl std::error::Error for SubdivisionError {}
