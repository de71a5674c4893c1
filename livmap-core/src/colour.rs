//! Map scores onto the red→green display gradient.
//!
//! Two gradient policies exist. `Linear` spreads the full canonical range
//! across the ramp. `Compressed` serves datasets whose useful signal lives in
//! the upper band: under a linear mapping almost every real point rendered an
//! indistinguishable green, so the compressed policy clamps to the high range
//! and applies a gamma curve that spreads the crowded top end apart.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

const LINEAR_MIN: f64 = 0.0;
const LINEAR_MAX: f64 = 10.0;
const COMPRESSED_MIN: f64 = 6.5;
const COMPRESSED_MAX: f64 = 10.0;
const COMPRESSED_OFFSET: f64 = 6.0;
const COMPRESSED_RANGE: f64 = 6.5;
const COMPRESSED_GAMMA: f64 = 0.7;

/// An 8-bit RGB display colour.
///
/// # Examples
/// ```
/// use livmap_core::Rgb;
///
/// assert_eq!(Rgb::new(255, 0, 0).to_string(), "rgb(255,0,0)");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Rgb {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb {
    /// Construct a colour from its channels.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl std::fmt::Display for Rgb {
    /// Render in the `rgb(r,g,b)` form drawing surfaces consume.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "rgb({},{},{})", self.r, self.g, self.b)
    }
}

/// Gradient policy selecting how scores spread across the ramp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GradientPolicy {
    /// Full red→green ramp across the canonical 0–10 range.
    #[default]
    Linear,
    /// High-range clamp with a gamma curve, for sparse "quality" signals.
    Compressed,
}

/// Map a score to its display colour under the given policy.
///
/// Out-of-range scores clamp to the policy's bounds; non-finite scores
/// sanitise to the low end of the ramp. The function is pure, so markers and
/// legends derived from it can never disagree.
///
/// # Examples
/// ```
/// use livmap_core::{GradientPolicy, Rgb, colour_for};
///
/// assert_eq!(colour_for(0.0, GradientPolicy::Linear), Rgb::new(255, 0, 0));
/// assert_eq!(colour_for(10.0, GradientPolicy::Linear), Rgb::new(0, 255, 0));
/// ```
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "gradient mapping is floating-point curve maths"
)]
pub fn colour_for(score: f64, policy: GradientPolicy) -> Rgb {
    let sanitised = if score.is_finite() { score } else { LINEAR_MIN };
    let t = match policy {
        GradientPolicy::Linear => sanitised.clamp(LINEAR_MIN, LINEAR_MAX) / LINEAR_MAX,
        GradientPolicy::Compressed => {
            let clamped = sanitised.clamp(COMPRESSED_MIN, COMPRESSED_MAX);
            ((clamped - COMPRESSED_OFFSET) / COMPRESSED_RANGE).powf(COMPRESSED_GAMMA)
        }
    };
    ramp(t)
}

/// Sample the gradient at evenly spaced scores across the policy's domain.
///
/// The legend shown next to the map must render the identical curve the
/// markers use, so it samples [`colour_for`] rather than approximating it.
#[must_use]
#[expect(
    clippy::float_arithmetic,
    clippy::cast_precision_loss,
    reason = "legend stops interpolate the floating-point score domain"
)]
pub fn legend(policy: GradientPolicy, steps: usize) -> Vec<Rgb> {
    let (lo, hi) = match policy {
        GradientPolicy::Linear => (LINEAR_MIN, LINEAR_MAX),
        GradientPolicy::Compressed => (COMPRESSED_MIN, COMPRESSED_MAX),
    };
    match steps {
        0 => Vec::new(),
        1 => vec![colour_for(hi, policy)],
        _ => (0..steps)
            .map(|i| {
                let fraction = i as f64 / (steps - 1) as f64;
                colour_for(lo + (hi - lo) * fraction, policy)
            })
            .collect(),
    }
}

#[expect(
    clippy::float_arithmetic,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "channel values are rounded within [0, 255] before the cast"
)]
fn ramp(t: f64) -> Rgb {
    let r = (255.0 * (1.0 - t)).round() as u8;
    let g = (255.0 * t).round() as u8;
    Rgb::new(r, g, 0)
}
