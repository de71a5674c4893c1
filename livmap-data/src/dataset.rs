//! Dataset loading, validation and store construction.

use geo::Coord;
use log::warn;
use thiserror::Error;

use livmap_core::{ScorePoint, ScorePointStore, SubScores, UNSCORED_FLOOR};

use crate::record::SuburbRecord;

/// Suburbs with known-bad geocodes, excluded from both display and
/// interpolation.
pub const DEFAULT_DENYLIST: [&str; 3] = ["CADGEE", "ARATULA", "WASHPOOL"];

/// Minimum query length before name search returns anything.
pub const MIN_QUERY_LEN: usize = 3;

/// Native range of a dataset's scores.
///
/// Every consumer downstream of loading sees the canonical 0–10 range;
/// `Percent` datasets are rescaled here, once, rather than leaving each
/// caller to remember which variant was loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScoreScale {
    /// Scores already in the canonical 0–10 range.
    #[default]
    TenPoint,
    /// Scores in 0–100, rescaled to 0–10 at load.
    Percent,
}

impl ScoreScale {
    #[expect(
        clippy::float_arithmetic,
        reason = "percent scores rescale by a constant ratio"
    )]
    const fn to_canonical(self, raw: f64) -> f64 {
        match self {
            Self::TenPoint => raw,
            Self::Percent => raw / 10.0,
        }
    }
}

/// Treatment of suburbs with a missing or zero score.
///
/// The floor keeps such suburbs participating in interpolation without
/// dragging nearby estimates to zero; exclusion removes them entirely. The
/// choice materially changes estimates near affected suburbs, so it is an
/// explicit configuration rather than a buried constant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnscoredPolicy {
    /// Keep the suburb with the floor score of 1.
    #[default]
    Floor,
    /// Drop the suburb from the store.
    Exclude,
}

/// Options applied while building a store from raw records.
#[derive(Debug, Clone, PartialEq)]
pub struct DatasetOptions {
    /// Native score range of the dataset being loaded.
    pub scale: ScoreScale,
    /// Treatment of unscored suburbs.
    pub unscored: UnscoredPolicy,
    /// Suburb names excluded from the store, compared case-insensitively.
    pub denylist: Vec<String>,
}

impl Default for DatasetOptions {
    fn default() -> Self {
        Self {
            scale: ScoreScale::default(),
            unscored: UnscoredPolicy::default(),
            denylist: DEFAULT_DENYLIST.map(String::from).to_vec(),
        }
    }
}

/// Errors raised while loading a dataset or building a store.
#[derive(Debug, Error)]
pub enum DatasetError {
    /// The dataset was not valid JSON for the expected record shape.
    #[error("failed to parse suburb dataset: {source}")]
    Parse {
        /// Decoder error returned by `serde_json`.
        #[from]
        source: serde_json::Error,
    },
    /// A record carried a non-finite or out-of-range coordinate.
    #[error("suburb {suburb} has an invalid coordinate")]
    InvalidCoordinate {
        /// Identifier of the offending record.
        suburb: String,
    },
    /// A record carried a negative or non-finite score.
    #[error("suburb {suburb} has an invalid score")]
    InvalidScore {
        /// Identifier of the offending record.
        suburb: String,
    },
    /// Two records shared the same suburb identifier.
    #[error("duplicate suburb identifier {suburb}")]
    DuplicateSuburb {
        /// The repeated identifier.
        suburb: String,
    },
}

/// Parse a serialised suburb list.
///
/// # Errors
/// Returns [`DatasetError::Parse`] when the payload is not a JSON array of
/// suburb records.
pub fn load_records(json: &str) -> Result<Vec<SuburbRecord>, DatasetError> {
    Ok(serde_json::from_str(json)?)
}

/// Build the immutable score point store from raw records.
///
/// Applies, in order: the denylist, coordinate and score validation, score
/// scale normalisation and the unscored policy. Exclusions are logged so a
/// shrinking store is visible in the session log.
///
/// # Errors
/// Returns [`DatasetError`] when a record carries an invalid coordinate or
/// score, or when two records share an identifier.
pub fn build_store(
    records: &[SuburbRecord],
    options: &DatasetOptions,
) -> Result<ScorePointStore, DatasetError> {
    let mut seen = std::collections::HashSet::new();
    let mut points = Vec::with_capacity(records.len());

    for record in records {
        if !seen.insert(record.suburb.to_ascii_uppercase()) {
            return Err(DatasetError::DuplicateSuburb {
                suburb: record.suburb.clone(),
            });
        }
        if is_denylisted(&record.suburb, &options.denylist) {
            warn!("excluding denylisted suburb {}", record.suburb);
            continue;
        }
        let location = validated_location(record)?;
        let Some(score) = canonical_score(record, options)? else {
            warn!("excluding unscored suburb {}", record.suburb);
            continue;
        };

        let point = match record.metrics {
            Some(metrics) => ScorePoint::with_breakdown(
                record.suburb.clone(),
                location,
                score,
                SubScores::new(
                    options.scale.to_canonical(metrics.safety),
                    options.scale.to_canonical(metrics.weather),
                    options.scale.to_canonical(metrics.transport),
                    options.scale.to_canonical(metrics.family),
                ),
            ),
            None => ScorePoint::new(record.suburb.clone(), location, score),
        };
        points.push(point);
    }

    Ok(ScorePointStore::from_points(points))
}

/// Case-insensitive substring search over raw records.
///
/// Queries shorter than [`MIN_QUERY_LEN`] characters return nothing; the
/// search box fires on every keystroke and one- or two-letter queries match
/// half the state.
#[must_use]
pub fn search_by_name<'a>(records: &'a [SuburbRecord], query: &str) -> Vec<&'a SuburbRecord> {
    let needle = query.trim().to_lowercase();
    if needle.len() < MIN_QUERY_LEN {
        return Vec::new();
    }
    records
        .iter()
        .filter(|record| record.suburb.to_lowercase().contains(&needle))
        .collect()
}

fn is_denylisted(suburb: &str, denylist: &[String]) -> bool {
    denylist.iter().any(|entry| entry.eq_ignore_ascii_case(suburb))
}

fn validated_location(record: &SuburbRecord) -> Result<Coord<f64>, DatasetError> {
    let lat = record.coordinate.lat;
    let lon = record.coordinate.lon;
    let valid = lat.is_finite() && lon.is_finite() && (-90.0..=90.0).contains(&lat)
        && (-180.0..=180.0).contains(&lon);
    if !valid {
        return Err(DatasetError::InvalidCoordinate {
            suburb: record.suburb.clone(),
        });
    }
    Ok(Coord { x: lon, y: lat })
}

/// Resolve a record's canonical score, or `None` when the unscored policy
/// excludes it.
fn canonical_score(
    record: &SuburbRecord,
    options: &DatasetOptions,
) -> Result<Option<f64>, DatasetError> {
    match record.score {
        Some(raw) if raw != 0.0 => {
            if !raw.is_finite() || raw < 0.0 {
                return Err(DatasetError::InvalidScore {
                    suburb: record.suburb.clone(),
                });
            }
            Ok(Some(options.scale.to_canonical(raw)))
        }
        // Missing and zero scores take the same path: the datasets use both
        // to mean "never scored".
        _ => match options.unscored {
            UnscoredPolicy::Floor => Ok(Some(UNSCORED_FLOOR)),
            UnscoredPolicy::Exclude => Ok(None),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::RecordCoordinate;
    use rstest::rstest;

    fn record(suburb: &str, lat: f64, lon: f64, score: Option<f64>) -> SuburbRecord {
        SuburbRecord {
            suburb: suburb.into(),
            coordinate: RecordCoordinate { lat, lon },
            score,
            metrics: None,
        }
    }

    #[rstest]
    fn loads_a_serialized_suburb_list() {
        let json = r#"[
            {"suburb":"ORANGE","coordinate":{"lat":-33.28,"lon":149.1},"score":7.1},
            {"suburb":"DUBBO","coordinate":{"lat":-32.25,"lon":148.6},"score":6.8}
        ]"#;
        let records = load_records(json).expect("valid dataset");
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].suburb, "DUBBO");
    }

    #[rstest]
    fn rejects_malformed_payloads() {
        let error = load_records("{\"not\":\"an array\"}").expect_err("should fail");
        assert!(matches!(error, DatasetError::Parse { .. }));
    }

    #[rstest]
    fn denylisted_suburbs_never_reach_the_store() {
        let records = vec![
            record("CADGEE", -36.3, 149.9, Some(4.0)),
            record("ORANGE", -33.28, 149.1, Some(7.1)),
        ];
        let store = build_store(&records, &DatasetOptions::default()).expect("valid records");
        assert_eq!(store.len(), 1);
        assert!(store.get("CADGEE").is_none());
    }

    #[rstest]
    fn floor_policy_keeps_unscored_suburbs_at_the_floor() {
        let records = vec![record("WASHPOOLS", -29.9, 152.1, Some(0.0))];
        let store = build_store(&records, &DatasetOptions::default()).expect("valid records");
        assert_eq!(store.get("WASHPOOLS").map(|p| p.score), Some(1.0));
    }

    #[rstest]
    fn exclude_policy_drops_unscored_suburbs() {
        let records = vec![
            record("NOWRA", -34.88, 150.6, None),
            record("ORANGE", -33.28, 149.1, Some(7.1)),
        ];
        let options = DatasetOptions {
            unscored: UnscoredPolicy::Exclude,
            ..DatasetOptions::default()
        };
        let store = build_store(&records, &options).expect("valid records");
        assert_eq!(store.len(), 1);
        assert!(store.get("NOWRA").is_none());
    }

    #[rstest]
    fn percent_scale_normalises_to_the_canonical_range() {
        let records = vec![SuburbRecord {
            suburb: "Sydney".into(),
            coordinate: RecordCoordinate {
                lat: -33.87,
                lon: 151.21,
            },
            score: Some(85.0),
            metrics: Some(crate::record::RecordMetrics {
                safety: 80.0,
                weather: 90.0,
                transport: 95.0,
                family: 75.0,
            }),
        }];
        let options = DatasetOptions {
            scale: ScoreScale::Percent,
            ..DatasetOptions::default()
        };
        let store = build_store(&records, &options).expect("valid records");
        let point = store.get("Sydney").expect("stored");
        assert_eq!(point.score, 8.5);
        assert_eq!(point.breakdown.map(|b| b.transport), Some(9.5));
    }

    #[rstest]
    fn duplicate_identifiers_are_rejected() {
        let records = vec![
            record("ORANGE", -33.28, 149.1, Some(7.1)),
            record("Orange", -33.29, 149.2, Some(6.9)),
        ];
        let error = build_store(&records, &DatasetOptions::default()).expect_err("should fail");
        assert!(matches!(error, DatasetError::DuplicateSuburb { .. }));
    }

    #[rstest]
    #[case(f64::NAN, 149.1)]
    #[case(-33.28, f64::INFINITY)]
    #[case(123.0, 149.1)] // latitude out of range
    fn invalid_coordinates_are_rejected(#[case] lat: f64, #[case] lon: f64) {
        let records = vec![record("BROKEN", lat, lon, Some(5.0))];
        let error = build_store(&records, &DatasetOptions::default()).expect_err("should fail");
        assert!(matches!(error, DatasetError::InvalidCoordinate { .. }));
    }

    #[rstest]
    fn negative_scores_are_rejected() {
        let records = vec![record("BROKEN", -33.0, 149.0, Some(-2.0))];
        let error = build_store(&records, &DatasetOptions::default()).expect_err("should fail");
        assert!(matches!(error, DatasetError::InvalidScore { .. }));
    }

    #[rstest]
    #[case("or", 0)] // below the minimum query length
    #[case("ora", 1)]
    #[case("ORANGE", 1)]
    #[case("  orange  ", 1)]
    #[case("zzz", 0)]
    fn name_search_guards_and_matches(#[case] query: &str, #[case] expected: usize) {
        let records = vec![
            record("ORANGE", -33.28, 149.1, Some(7.1)),
            record("DUBBO", -32.25, 148.6, Some(6.8)),
        ];
        assert_eq!(search_by_name(&records, query).len(), expected);
    }
}
