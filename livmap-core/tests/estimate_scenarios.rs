//! End-to-end estimation scenarios over small fixed datasets.

use geo::Coord;
use rstest::{fixture, rstest};

use livmap_core::test_support::assert_close;
use livmap_core::{EXACT_MATCH_EPSILON_M, IdwParams, ScorePoint, ScorePointStore, estimate};

/// Two suburbs on the equator, two degrees of longitude apart, with opposite
/// scores.
#[fixture]
fn opposed_pair() -> ScorePointStore {
    ScorePointStore::from_points(vec![
        ScorePoint::new("A", Coord { x: 0.0, y: 0.0 }, 10.0),
        ScorePoint::new("B", Coord { x: 2.0, y: 0.0 }, 0.0),
    ])
}

#[rstest]
fn equidistant_query_lands_on_the_midpoint(opposed_pair: ScorePointStore) {
    let result = estimate(
        &opposed_pair,
        Coord { x: 1.0, y: 0.0 },
        IdwParams { k: 2, power: 2.0 },
    );
    // Equal inverse-square weights cancel to the midpoint of the two scores.
    assert_close(result.score.expect("two points stored"), 5.0, 1e-9);
    assert_eq!(result.neighbours.len(), 2);
}

#[rstest]
fn query_on_a_stored_suburb_reads_its_exact_score(opposed_pair: ScorePointStore) {
    let result = estimate(&opposed_pair, Coord { x: 0.0, y: 0.0 }, IdwParams::default());
    assert_eq!(result.score, Some(10.0));
    assert_eq!(result.neighbours[0].point.id, "A");
    assert!(result.neighbours[0].distance_m < EXACT_MATCH_EPSILON_M);
}

#[rstest]
fn approaching_an_outlier_pulls_the_estimate_toward_it() {
    // One high-score outlier; every other suburb is remote and mediocre.
    let store = ScorePointStore::from_points(vec![
        ScorePoint::new("outlier", Coord { x: 0.0, y: 0.0 }, 10.0),
        ScorePoint::new("far-1", Coord { x: 8.0, y: 8.0 }, 2.0),
        ScorePoint::new("far-2", Coord { x: 8.0, y: -8.0 }, 2.0),
        ScorePoint::new("far-3", Coord { x: -8.0, y: 8.0 }, 2.0),
    ]);
    let nearer = estimate(&store, Coord { x: 0.5, y: 0.0 }, IdwParams::default());
    let further = estimate(&store, Coord { x: 2.0, y: 0.0 }, IdwParams::default());
    assert!(
        nearer.score.expect("non-empty") > further.score.expect("non-empty"),
        "estimates should rise as the query approaches the high-score outlier"
    );
}

#[rstest]
fn estimates_blend_rather_than_snap_between_suburbs(opposed_pair: ScorePointStore) {
    let result = estimate(
        &opposed_pair,
        Coord { x: 0.5, y: 0.0 },
        IdwParams { k: 2, power: 2.0 },
    );
    let score = result.score.expect("two points stored");
    // A quarter of the way along, inverse-square weighting favours A 9:1.
    assert_close(score, 9.0, 1e-6);
}
