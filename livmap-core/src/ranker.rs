//! Rank stored points by great-circle distance from a query coordinate.
//!
//! Ranking is a pure function of its inputs: distance to every candidate is
//! computed with the haversine metric, results are sorted ascending and
//! truncated to the requested neighbourhood size.

use geo::{Coord, Distance, Haversine, Point};

use crate::ScorePoint;

/// Default neighbourhood size used by ranking consumers.
pub const DEFAULT_NEIGHBOURS: usize = 8;

/// A stored point paired with its great-circle distance from a query.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Neighbour {
    /// The stored point.
    pub point: ScorePoint,
    /// Great-circle distance from the query, in meters.
    pub distance_m: f64,
}

/// Great-circle distance in meters between two coordinates.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use livmap_core::distance_m;
///
/// let equator = Coord { x: 0.0, y: 0.0 };
/// let one_degree_east = Coord { x: 1.0, y: 0.0 };
/// let d = distance_m(equator, one_degree_east);
/// assert!((d - 111_195.0).abs() < 100.0);
/// ```
#[must_use]
pub fn distance_m(a: Coord<f64>, b: Coord<f64>) -> f64 {
    Haversine.distance(Point::from(a), Point::from(b))
}

/// Return the `k` points closest to `query`, ascending by distance.
///
/// Distance ties break on the suburb id so that repeated queries produce
/// identical orderings. An empty candidate set yields an empty list; callers
/// decide how to surface the absence of data.
#[must_use]
pub fn rank<'a, I>(query: Coord<f64>, points: I, k: usize) -> Vec<Neighbour>
where
    I: IntoIterator<Item = &'a ScorePoint>,
{
    let mut ranked: Vec<Neighbour> = points
        .into_iter()
        .map(|point| Neighbour {
            distance_m: distance_m(query, point.location),
            point: point.clone(),
        })
        .collect();
    ranked.sort_by(|a, b| {
        a.distance_m
            .total_cmp(&b.distance_m)
            .then_with(|| a.point.id.cmp(&b.point.id))
    });
    ranked.truncate(k);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::assert_close;
    use rstest::rstest;

    fn point(id: &str, x: f64, y: f64, score: f64) -> ScorePoint {
        ScorePoint::new(id, Coord { x, y }, score)
    }

    #[rstest]
    fn orders_neighbours_ascending_by_distance() {
        let points = vec![
            point("far", 3.0, 0.0, 5.0),
            point("near", 0.1, 0.0, 5.0),
            point("mid", 1.0, 0.0, 5.0),
        ];
        let ranked = rank(Coord { x: 0.0, y: 0.0 }, &points, 3);
        let ids: Vec<_> = ranked.iter().map(|n| n.point.id.as_str()).collect();
        assert_eq!(ids, vec!["near", "mid", "far"]);
        assert!(ranked[0].distance_m < ranked[1].distance_m);
        assert!(ranked[1].distance_m < ranked[2].distance_m);
    }

    #[rstest]
    #[expect(
        clippy::float_arithmetic,
        reason = "test grid positions are computed with float maths"
    )]
    fn truncates_to_requested_size() {
        let points: Vec<ScorePoint> = (0..20)
            .map(|i| point(&format!("p{i}"), f64::from(i) * 0.1, 0.0, 5.0))
            .collect();
        let ranked = rank(Coord { x: 0.0, y: 0.0 }, &points, DEFAULT_NEIGHBOURS);
        assert_eq!(ranked.len(), DEFAULT_NEIGHBOURS);
    }

    #[rstest]
    fn equidistant_points_order_by_id() {
        let points = vec![point("west", -1.0, 0.0, 5.0), point("east", 1.0, 0.0, 5.0)];
        let ranked = rank(Coord { x: 0.0, y: 0.0 }, &points, 2);
        let ids: Vec<_> = ranked.iter().map(|n| n.point.id.as_str()).collect();
        assert_eq!(ids, vec!["east", "west"]);
    }

    #[rstest]
    fn one_degree_of_longitude_at_the_equator() {
        let d = distance_m(Coord { x: 0.0, y: 0.0 }, Coord { x: 1.0, y: 0.0 });
        assert_close(d, 111_195.0, 100.0);
    }

    #[rstest]
    fn empty_candidates_rank_to_nothing() {
        let ranked = rank(Coord { x: 0.0, y: 0.0 }, &[], 8);
        assert!(ranked.is_empty());
    }
}
