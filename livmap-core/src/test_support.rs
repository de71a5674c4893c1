//! Test-only helpers shared by unit, integration and property tests.

use geo::Coord;

use crate::{ScorePoint, ScorePointStore};

/// Build a score point from bare parts.
#[must_use]
pub fn score_point(id: &str, lon: f64, lat: f64, score: f64) -> ScorePoint {
    ScorePoint::new(id, Coord { x: lon, y: lat }, score)
}

/// Build a store from a list of points.
#[must_use]
pub fn store_of(points: Vec<ScorePoint>) -> ScorePointStore {
    ScorePointStore::from_points(points)
}

/// Assert two floats agree within `eps`.
///
/// # Panics
/// Panics when the absolute difference exceeds `eps`.
#[expect(
    clippy::float_arithmetic,
    reason = "the helper compares floats by absolute difference"
)]
pub fn assert_close(actual: f64, expected: f64, eps: f64) {
    let diff = (actual - expected).abs();
    assert!(diff <= eps, "expected {actual} ~= {expected} (diff {diff})");
}
