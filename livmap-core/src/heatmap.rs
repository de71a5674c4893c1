//! Zoom-adaptive heat surface construction.
//!
//! The surface is a pure derived value: rebuilt from the full point store on
//! every zoom change and handed to the drawing layer, which must replace the
//! previous surface rather than stacking a new layer on top of it.

use geo::Coord;

use crate::{ScorePointStore, UNSCORED_FLOOR};

/// Fraction of the radius applied as blur, keeping adjacent samples merged
/// into a continuous field instead of discrete blobs.
const BLUR_RATIO: f64 = 0.8;

/// Top of the canonical score range used to normalise intensities.
const SCORE_CEILING: f64 = 10.0;

/// Tuning for heat surface construction.
///
/// The defaults pair the conventional 25-pixel point radius with the map's
/// initial zoom level as the reference, so a freshly opened map renders at
/// the base radius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeatmapConfig {
    /// Sample radius in pixels at the reference zoom.
    pub base_radius_px: f64,
    /// Zoom level at which samples render exactly `base_radius_px` wide.
    pub reference_zoom: f64,
}

impl Default for HeatmapConfig {
    fn default() -> Self {
        Self {
            base_radius_px: 25.0,
            reference_zoom: 6.0,
        }
    }
}

/// A single weighted intensity sample.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HeatSample {
    /// Sample position, `x = longitude`, `y = latitude`.
    pub location: Coord<f64>,
    /// Normalised intensity in `[0, 1]`.
    pub intensity: f64,
}

/// The sample set plus the radius/blur pair for the zoom it was built at.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HeatSurface {
    /// One sample per stored point.
    pub samples: Vec<HeatSample>,
    /// Sample radius in pixels.
    pub radius_px: f64,
    /// Blur in pixels, a fixed fraction of the radius.
    pub blur_px: f64,
    /// Zoom level the surface was built for.
    pub zoom: f64,
}

/// Build the heat surface for the given zoom level.
///
/// The radius scales proportionally with zoom so coverage density looks
/// consistent as the user zooms: a fixed pixel radius reads sparse when
/// zoomed in and muddy when zoomed out. Zero scores take the unscored floor
/// so they remain faintly visible instead of vanishing from the field.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use livmap_core::{HeatmapConfig, ScorePoint, ScorePointStore, heatmap};
///
/// let store = ScorePointStore::from_points(vec![
///     ScorePoint::new("Sydney", Coord { x: 151.21, y: -33.87 }, 8.5),
/// ]);
/// let surface = heatmap::build(&store, 6.0, &HeatmapConfig::default());
/// assert_eq!(surface.radius_px, 25.0);
/// assert_eq!(surface.samples.len(), 1);
/// ```
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "radius scaling and intensity normalisation are float maths"
)]
pub fn build(store: &ScorePointStore, zoom: f64, config: &HeatmapConfig) -> HeatSurface {
    let radius_px = config.base_radius_px * (zoom / config.reference_zoom);
    let samples = store
        .iter()
        .map(|point| {
            let score = if point.score == 0.0 {
                UNSCORED_FLOOR
            } else {
                point.score
            };
            HeatSample {
                location: point.location,
                intensity: (score / SCORE_CEILING).clamp(0.0, 1.0),
            }
        })
        .collect();
    HeatSurface {
        samples,
        radius_px,
        blur_px: radius_px * BLUR_RATIO,
        zoom,
    }
}
