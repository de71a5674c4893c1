//! Static dataset ingestion for the livmap engine.
//!
//! Responsibilities:
//! - Deserialize the serialised suburb lists the site ships with.
//! - Validate records and normalise score ranges to the canonical 0–10.
//! - Apply the unscored-point policy and the display denylist while
//!   building the immutable [`ScorePointStore`](livmap_core::ScorePointStore).
//! - Provide name search over raw records for the search box.
//!
//! Boundaries:
//! - No domain rules (those live in `livmap-core`).
//! - No network access; the remote scoring services are consumed elsewhere.
//!
//! Invariants:
//! - Every point handed to the store carries a finite, non-negative
//!   canonical score.
//! - Loading is a one-shot operation per session; nothing here mutates a
//!   store after construction.

#![forbid(unsafe_code)]

mod dataset;
mod record;

pub use dataset::{
    DEFAULT_DENYLIST, DatasetError, DatasetOptions, MIN_QUERY_LEN, ScoreScale, UnscoredPolicy,
    build_store, load_records, search_by_name,
};
pub use record::{RecordCoordinate, RecordMetrics, SuburbRecord};
