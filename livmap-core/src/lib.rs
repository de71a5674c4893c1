//! Core domain types and algorithms for the livmap engine.
//!
//! This crate holds everything the interactive livability map computes:
//! score points and their immutable spatial store, great-circle
//! nearest-neighbour ranking, inverse-distance-weighted estimation, weighted
//! sub-score aggregation, score-to-colour mapping and zoom-adaptive heat
//! surface construction.
//!
//! Every operation here is synchronous, allocation-light and free of I/O, so
//! all of it is safe to call directly from a pointer-event handler. Dataset
//! ingestion lives in `livmap-data`; the frame-throttled interaction driver
//! lives in `livmap-view`.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod colour;
pub mod estimate;
pub mod heatmap;
pub mod point;
pub mod ranker;
pub mod store;
pub mod weights;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use colour::{GradientPolicy, Rgb, colour_for, legend};
pub use estimate::{EXACT_MATCH_EPSILON_M, Estimate, IdwParams, estimate};
pub use heatmap::{HeatSample, HeatSurface, HeatmapConfig};
pub use point::{ScorePoint, SubScores, UNSCORED_FLOOR};
pub use ranker::{DEFAULT_NEIGHBOURS, Neighbour, distance_m, rank};
pub use store::ScorePointStore;
pub use weights::{WeightError, WeightVector, aggregate};
