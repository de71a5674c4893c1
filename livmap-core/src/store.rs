//! In-memory spatial store for score points.
//!
//! The store is built once from the static dataset and is read-only for the
//! lifetime of a map session, so no locking is needed: every consumer sees
//! the same immutable snapshot.

use geo::Rect;
use rstar::{AABB, RTree};

use crate::ScorePoint;

/// Immutable collection of score points backed by an R\*-tree.
///
/// # Examples
/// ```
/// use geo::{Coord, Rect};
/// use livmap_core::{ScorePoint, ScorePointStore};
///
/// let store = ScorePointStore::from_points(vec![
///     ScorePoint::new("Sydney", Coord { x: 151.21, y: -33.87 }, 8.5),
///     ScorePoint::new("Wagga Wagga", Coord { x: 147.37, y: -35.11 }, 7.4),
/// ]);
/// let bbox = Rect::new(Coord { x: 150.0, y: -34.5 }, Coord { x: 152.0, y: -33.0 });
/// let inside = store.points_in_bbox(&bbox);
/// assert_eq!(inside.len(), 1);
/// assert_eq!(inside[0].id, "Sydney");
/// ```
#[derive(Debug, Default)]
pub struct ScorePointStore {
    index: RTree<ScorePoint>,
}

impl ScorePointStore {
    /// Bulk-load a store from the given points.
    #[must_use]
    pub fn from_points(points: Vec<ScorePoint>) -> Self {
        Self {
            index: RTree::bulk_load(points),
        }
    }

    /// Number of stored points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.index.size()
    }

    /// Report whether the store holds no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.index.size() == 0
    }

    /// Iterate over every stored point in arbitrary order.
    #[must_use]
    pub fn iter(&self) -> impl Iterator<Item = &ScorePoint> {
        self.index.iter()
    }

    /// Look up a point by its suburb identifier.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&ScorePoint> {
        self.index.iter().find(|point| point.id == id)
    }

    /// Return all points within an axis-aligned lon/lat rectangle.
    ///
    /// Containment includes boundary points. Results are sorted by id to
    /// provide deterministic ordering for callers asserting on identifiers.
    /// Regions crossing the antimeridian must be split into two rectangles
    /// by the caller.
    #[must_use]
    pub fn points_in_bbox(&self, bbox: &Rect<f64>) -> Vec<ScorePoint> {
        let envelope =
            AABB::from_corners([bbox.min().x, bbox.min().y], [bbox.max().x, bbox.max().y]);
        let mut points: Vec<ScorePoint> = self
            .index
            .locate_in_envelope_intersecting(&envelope)
            .cloned()
            .collect();
        points.sort_unstable_by(|a, b| a.id.cmp(&b.id));
        points
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::Coord;
    use rstest::rstest;

    fn point(id: &str, x: f64, y: f64, score: f64) -> ScorePoint {
        ScorePoint::new(id, Coord { x, y }, score)
    }

    fn sample_store() -> ScorePointStore {
        ScorePointStore::from_points(vec![
            point("Albury", 146.92, -36.08, 7.3),
            point("Tamworth", 150.93, -31.09, 7.0),
            point("Wollongong", 150.89, -34.42, 8.0),
        ])
    }

    #[rstest]
    fn returns_points_inside_bbox() {
        let store = sample_store();
        let bbox = Rect::new(Coord { x: 150.0, y: -35.0 }, Coord { x: 151.0, y: -34.0 });
        let found = store.points_in_bbox(&bbox);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, "Wollongong");
    }

    #[rstest]
    fn empty_store_yields_nothing() {
        let store = ScorePointStore::default();
        let bbox = Rect::new(Coord { x: -1.0, y: -1.0 }, Coord { x: 1.0, y: 1.0 });
        assert!(store.points_in_bbox(&bbox).is_empty());
        assert!(store.is_empty());
    }

    #[rstest]
    #[case(Coord { x: 150.0, y: -34.5 })] // left edge
    #[case(Coord { x: 151.0, y: -34.5 })] // right edge
    #[case(Coord { x: 150.5, y: -35.0 })] // bottom edge
    #[case(Coord { x: 150.5, y: -34.0 })] // top edge
    fn includes_point_on_bbox_boundary(#[case] location: Coord<f64>) {
        let store = ScorePointStore::from_points(vec![ScorePoint::new("edge", location, 5.0)]);
        let bbox = Rect::new(Coord { x: 150.0, y: -35.0 }, Coord { x: 151.0, y: -34.0 });
        assert_eq!(store.points_in_bbox(&bbox).len(), 1);
    }

    #[rstest]
    fn bbox_results_are_sorted_by_id() {
        let store = ScorePointStore::from_points(vec![
            point("b", 0.5, 0.5, 5.0),
            point("a", 0.4, 0.4, 5.0),
            point("c", 0.6, 0.6, 5.0),
        ]);
        let bbox = Rect::new(Coord { x: 0.0, y: 0.0 }, Coord { x: 1.0, y: 1.0 });
        let ids: Vec<_> = store
            .points_in_bbox(&bbox)
            .into_iter()
            .map(|p| p.id)
            .collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[rstest]
    fn lookup_by_id_finds_stored_point() {
        let store = sample_store();
        assert_eq!(store.get("Tamworth").map(|p| p.score), Some(7.0));
        assert!(store.get("Nowhere").is_none());
    }
}
