//! Serde record types matching the serialised suburb datasets.
//!
//! Two dataset variants exist. The coordinate-and-score list carries only
//! `{suburb, coordinate, score}`; the richer variant adds a per-category
//! `metrics` breakdown. Both deserialize into [`SuburbRecord`], with the
//! optional fields absent where the dataset omits them.

use serde::{Deserialize, Serialize};

/// A latitude/longitude pair as serialised in the datasets.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RecordCoordinate {
    /// Latitude in decimal degrees.
    pub lat: f64,
    /// Longitude in decimal degrees.
    pub lon: f64,
}

/// Raw per-category scores as serialised in the richer dataset variant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RecordMetrics {
    /// Safety / crime score.
    pub safety: f64,
    /// Weather score.
    pub weather: f64,
    /// Public transport score.
    pub transport: f64,
    /// Family and community score.
    pub family: f64,
}

/// One suburb entry from a static dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuburbRecord {
    /// Suburb name, used as the stable identifier.
    pub suburb: String,
    /// Geocoded position.
    pub coordinate: RecordCoordinate,
    /// Overall score in the dataset's native range, absent for unscored
    /// suburbs.
    #[serde(default)]
    pub score: Option<f64>,
    /// Per-category breakdown, present only in the richer variant.
    #[serde(default)]
    pub metrics: Option<RecordMetrics>,
}
