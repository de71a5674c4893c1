//! Suburb score points: the known samples the engine interpolates between.
//!
//! Coordinates are WGS84 with `x = longitude` and `y = latitude`, in decimal
//! degrees. Scores use the canonical 0–10 range; dataset loading is
//! responsible for normalising other ranges before points reach this type.

use geo::Coord;
use rstar::{AABB, RTreeObject};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Score substituted for missing or zero scores when the dataset policy keeps
/// such points. The non-zero floor stops sparse unscored suburbs from
/// dragging interpolated estimates toward zero.
pub const UNSCORED_FLOOR: f64 = 1.0;

/// Sub-score breakdown across the four livability categories.
///
/// # Examples
/// ```
/// use livmap_core::SubScores;
///
/// let scores = SubScores::new(8.0, 9.5, 7.0, 8.5);
/// assert_eq!(scores.weather, 9.5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SubScores {
    /// Safety / crime score.
    pub safety: f64,
    /// Weather score.
    pub weather: f64,
    /// Public transport score.
    pub transport: f64,
    /// Family and community score.
    pub family: f64,
}

impl SubScores {
    /// Construct a breakdown from the four category scores.
    #[must_use]
    pub const fn new(safety: f64, weather: f64, transport: f64, family: f64) -> Self {
        Self {
            safety,
            weather,
            transport,
            family,
        }
    }
}

/// A single suburb with a known livability score.
///
/// Every point in a store is expected to carry a finite, non-negative score;
/// dataset loading enforces this before construction.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use livmap_core::ScorePoint;
///
/// let point = ScorePoint::new("Newcastle", Coord { x: 151.78, y: -32.93 }, 8.2);
/// assert_eq!(point.id, "Newcastle");
/// assert!(point.breakdown.is_none());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ScorePoint {
    /// Stable suburb identifier, unique within a store.
    pub id: String,
    /// Geospatial position, `x = longitude`, `y = latitude`.
    pub location: Coord<f64>,
    /// Overall livability score in the canonical 0–10 range.
    pub score: f64,
    /// Optional per-category breakdown.
    pub breakdown: Option<SubScores>,
}

impl ScorePoint {
    /// Construct a point without a sub-score breakdown.
    #[must_use]
    pub fn new(id: impl Into<String>, location: Coord<f64>, score: f64) -> Self {
        Self {
            id: id.into(),
            location,
            score,
            breakdown: None,
        }
    }

    /// Construct a point carrying the per-category breakdown.
    ///
    /// # Examples
    /// ```
    /// use geo::Coord;
    /// use livmap_core::{ScorePoint, SubScores};
    ///
    /// let point = ScorePoint::with_breakdown(
    ///     "Bathurst",
    ///     Coord { x: 149.58, y: -33.42 },
    ///     7.2,
    ///     SubScores::new(8.5, 7.0, 5.0, 9.0),
    /// );
    /// assert!(point.breakdown.is_some());
    /// ```
    #[must_use]
    pub fn with_breakdown(
        id: impl Into<String>,
        location: Coord<f64>,
        score: f64,
        breakdown: SubScores,
    ) -> Self {
        Self {
            id: id.into(),
            location,
            score,
            breakdown: Some(breakdown),
        }
    }
}

impl RTreeObject for ScorePoint {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_point([self.location.x, self.location.y])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_keeps_identity_and_score() {
        let point = ScorePoint::new("Penrith", Coord { x: 150.7, y: -33.75 }, 7.5);
        assert_eq!(point.id, "Penrith");
        assert_eq!(point.score, 7.5);
    }

    #[test]
    fn breakdown_is_carried_when_present() {
        let point = ScorePoint::with_breakdown(
            "Gosford",
            Coord { x: 151.34, y: -33.43 },
            7.6,
            SubScores::new(7.5, 8.5, 7.0, 8.0),
        );
        assert_eq!(point.breakdown, Some(SubScores::new(7.5, 8.5, 7.0, 8.0)));
    }
}
