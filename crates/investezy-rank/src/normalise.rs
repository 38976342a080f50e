//! Normalization onto the 0–100 display scale.
//!
//! Positions are computed from the minimum and maximum available score of the
//! whole input set, independently of rank order.

use crate::descriptor::Direction;

/// Top of the display scale.
pub const MAX_POSITION: f64 = 100.0;

/// Minimum and maximum of the available scores in a set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    /// Smallest available score.
    pub min: f64,
    /// Largest available score.
    pub max: f64,
}

impl Bounds {
    /// Collect bounds over the available scores, skipping `None`.
    ///
    /// Returns `None` when no score is available.
    pub fn from_scores<I>(scores: I) -> Option<Self>
    where
        I: IntoIterator<Item = Option<f64>>,
    {
        scores.into_iter().flatten().fold(None, |acc, v| {
            Some(match acc {
                None => Self { min: v, max: v },
                Some(b) => Self {
                    min: b.min.min(v),
                    max: b.max.max(v),
                },
            })
        })
    }

    /// Half the width of the range.
    ///
    /// Halving each bound first keeps the result finite for any finite bounds.
    pub fn half_width(&self) -> f64 {
        self.max / 2.0 - self.min / 2.0
    }

    /// Centre of the range.
    pub fn midpoint(&self) -> f64 {
        self.max / 2.0 + self.min / 2.0
    }

    /// Whether every available score is the same.
    pub fn is_degenerate(&self) -> bool {
        self.max == self.min
    }
}

/// Normalize one score onto [0, 100].
///
/// - unavailable scores map to 0
/// - when all available scores are equal, every one maps to 100
/// - neutral: 100 at the midpoint, falling linearly to 0 at either bound
/// - otherwise the favoured bound maps to 100 and the other to 0
pub fn normalise(score: Option<f64>, bounds: Option<Bounds>, direction: Direction) -> f64 {
    let (Some(v), Some(b)) = (score, bounds) else {
        return 0.0;
    };

    if b.is_degenerate() {
        return MAX_POSITION;
    }

    let half = b.half_width();
    let fraction = match direction {
        Direction::HigherIsBetter => (v / 2.0 - b.min / 2.0) / half,
        Direction::LowerIsBetter => (b.max / 2.0 - v / 2.0) / half,
        Direction::Neutral => 1.0 - (v / 2.0 - b.midpoint() / 2.0).abs() / half * 2.0,
    };

    if !fraction.is_finite() {
        return 0.0;
    }
    (fraction * MAX_POSITION).clamp(0.0, MAX_POSITION)
}
