//! Inverse-distance-weighted score estimation.
//!
//! An estimate blends the scores of the nearest stored points, weighting each
//! by `1 / distance^power`. Nearer points dominate sharply at the default
//! power of two; a larger power sharpens locality further while a smaller one
//! smooths the surface.

use geo::Coord;

use crate::{Neighbour, ScorePointStore, ranker};

/// Distance below which a query is treated as coinciding with a stored point.
///
/// Coincident queries return the stored score verbatim: blending would divide
/// by a vanishing distance, and a pointer resting on a suburb marker is
/// expected to read that suburb's exact score.
pub const EXACT_MATCH_EPSILON_M: f64 = 1.0;

/// Number of nearest neighbours surfaced as influence hints.
const INFLUENCE_HINTS: usize = 3;

/// Tuning parameters for the estimator.
///
/// # Examples
/// ```
/// use livmap_core::IdwParams;
///
/// let params = IdwParams::default();
/// assert_eq!(params.k, 8);
/// assert_eq!(params.power, 2.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IdwParams {
    /// Neighbourhood size considered per estimate.
    pub k: usize,
    /// Exponent applied to distances when weighting.
    pub power: f64,
}

impl Default for IdwParams {
    fn default() -> Self {
        Self {
            k: ranker::DEFAULT_NEIGHBOURS,
            power: 2.0,
        }
    }
}

/// An interpolated score together with the neighbours that shaped it.
///
/// `score` is `None` when the store held no points; callers render a neutral
/// "no data" state rather than treating this as a failure.
#[derive(Debug, Clone, PartialEq)]
pub struct Estimate {
    /// The blended score, absent when no data was available.
    pub score: Option<f64>,
    /// Neighbours considered, ascending by distance.
    pub neighbours: Vec<Neighbour>,
}

impl Estimate {
    /// The nearest neighbours to draw influence hints toward, at most three.
    ///
    /// Exposing the suburbs that most shaped an estimate is a transparency
    /// aid for the map overlay, not a correctness requirement.
    #[must_use]
    #[expect(
        clippy::indexing_slicing,
        reason = "the slice end is clamped to the vector length"
    )]
    pub fn influencers(&self) -> &[Neighbour] {
        let n = self.neighbours.len().min(INFLUENCE_HINTS);
        &self.neighbours[..n]
    }
}

/// Estimate the livability score at `query` from the store's nearest points.
///
/// The nearest neighbour closer than [`EXACT_MATCH_EPSILON_M`] short-circuits
/// to that point's exact score. Otherwise each of the `k` nearest points
/// contributes weight `1 / distance^power`.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use livmap_core::{IdwParams, ScorePoint, ScorePointStore, estimate};
///
/// let store = ScorePointStore::from_points(vec![
///     ScorePoint::new("Sydney", Coord { x: 151.21, y: -33.87 }, 8.5),
/// ]);
/// let result = estimate(&store, Coord { x: 151.21, y: -33.87 }, IdwParams::default());
/// assert_eq!(result.score, Some(8.5));
/// ```
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "inverse-distance weighting blends scores with float ratios"
)]
pub fn estimate(store: &ScorePointStore, query: Coord<f64>, params: IdwParams) -> Estimate {
    let neighbours = ranker::rank(query, store.iter(), params.k);
    let Some(nearest) = neighbours.first() else {
        return Estimate {
            score: None,
            neighbours,
        };
    };
    if nearest.distance_m < EXACT_MATCH_EPSILON_M {
        return Estimate {
            score: Some(nearest.point.score),
            neighbours,
        };
    }

    let mut numerator = 0.0;
    let mut denominator = 0.0;
    for neighbour in &neighbours {
        let weight = 1.0 / neighbour.distance_m.powf(params.power);
        numerator += weight * neighbour.point.score;
        denominator += weight;
    }
    // All weights can underflow to zero when every neighbour is extremely
    // remote; report no estimate rather than dividing by zero.
    let score = (denominator > 0.0).then(|| numerator / denominator);
    Estimate { score, neighbours }
}
