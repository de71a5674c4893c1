//! Facade crate for the livmap livability interpolation engine.
//!
//! This crate re-exports the core domain types and exposes the dataset and
//! interaction layers behind feature flags.

#![forbid(unsafe_code)]

pub use livmap_core::{
    EXACT_MATCH_EPSILON_M, Estimate, GradientPolicy, HeatSample, HeatSurface, HeatmapConfig,
    IdwParams, Neighbour, Rgb, ScorePoint, ScorePointStore, SubScores, UNSCORED_FLOOR, WeightError,
    WeightVector, aggregate, colour_for, distance_m, estimate, heatmap, legend, rank,
};

#[cfg(feature = "dataset")]
pub use livmap_data::{
    DatasetError, DatasetOptions, RecordCoordinate, RecordMetrics, ScoreScale, SuburbRecord,
    UnscoredPolicy, build_store, load_records, search_by_name,
};

#[cfg(feature = "interaction")]
pub use livmap_view::{
    FrameClock, FrameHandle, ImportanceSelection, ManualFrameClock, MapController, MapSurface,
    RequestSlot, RequestToken, ScreenPoint,
};
