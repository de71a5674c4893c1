//! Weighted blending of sub-scores into a single overall score.
//!
//! The same blend runs in two places: the remote scoring service pre-computes
//! it when preparing suburb records, and the map recomputes it locally after
//! a weight change without another network round-trip. Both must agree
//! bit-for-bit, so [`aggregate`] fixes the category order of the summation.

use thiserror::Error;

use crate::SubScores;

/// Relative importance across the four sub-score categories.
///
/// Weights are non-negative and need not sum to one; [`aggregate`]
/// normalises them. The vector is owned by the caller and passed fresh on
/// every call; nothing here retains it.
///
/// # Examples
/// ```
/// use livmap_core::WeightVector;
///
/// let weights = WeightVector::new(1.0, 0.5, 0.5, 1.0)?;
/// assert_eq!(weights.safety, 1.0);
/// # Ok::<(), livmap_core::WeightError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WeightVector {
    /// Weight for the safety / crime category.
    pub safety: f64,
    /// Weight for the weather category.
    pub weather: f64,
    /// Weight for the public transport category.
    pub transport: f64,
    /// Weight for the family and community category.
    pub family: f64,
}

/// Errors returned by [`WeightVector::new`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WeightError {
    /// A weight was negative or not finite.
    #[error("weights must be finite and non-negative")]
    InvalidWeight,
}

impl WeightVector {
    /// Validate and construct a weight vector.
    ///
    /// # Errors
    /// Returns [`WeightError::InvalidWeight`] when any weight is negative,
    /// `NaN` or infinite. An all-zero vector is accepted; [`aggregate`]
    /// treats it as uniform.
    pub fn new(safety: f64, weather: f64, transport: f64, family: f64) -> Result<Self, WeightError> {
        let candidate = Self {
            safety,
            weather,
            transport,
            family,
        };
        if candidate
            .as_array()
            .iter()
            .all(|w| w.is_finite() && *w >= 0.0)
        {
            Ok(candidate)
        } else {
            Err(WeightError::InvalidWeight)
        }
    }

    /// The uniform vector weighting every category equally.
    #[must_use]
    pub const fn uniform() -> Self {
        Self {
            safety: 1.0,
            weather: 1.0,
            transport: 1.0,
            family: 1.0,
        }
    }

    /// Weights in fixed category order: safety, weather, transport, family.
    #[must_use]
    pub const fn as_array(&self) -> [f64; 4] {
        [self.safety, self.weather, self.transport, self.family]
    }

    /// Normalised weights summing to one, in the fixed category order.
    ///
    /// An all-zero vector normalises to uniform quarters rather than
    /// dividing by zero.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "normalisation divides each weight by the summed total"
    )]
    pub const fn normalised(&self) -> [f64; 4] {
        let [safety, weather, transport, family] = self.as_array();
        let total = safety + weather + transport + family;
        if total == 0.0 {
            return [0.25; 4];
        }
        [
            safety / total,
            weather / total,
            transport / total,
            family / total,
        ]
    }
}

impl Default for WeightVector {
    fn default() -> Self {
        Self::uniform()
    }
}

/// Blend four sub-scores into one overall score under the given weights.
///
/// The summation runs in declaration order (safety, weather, transport,
/// family): floating-point addition is not associative, and the displayed
/// total must equal the service-computed total to the last bit.
///
/// The result stays in whatever range the sub-scores are expressed in; no
/// rescaling happens here.
///
/// # Examples
/// ```
/// use livmap_core::{SubScores, WeightVector, aggregate};
///
/// let scores = SubScores::new(8.0, 6.0, 4.0, 2.0);
/// let overall = aggregate(&scores, &WeightVector::uniform());
/// assert!((overall - 5.0).abs() < 1e-12);
/// ```
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "the blend is a weighted floating-point sum"
)]
pub const fn aggregate(scores: &SubScores, weights: &WeightVector) -> f64 {
    let [safety, weather, transport, family] = weights.normalised();
    safety * scores.safety
        + weather * scores.weather
        + transport * scores.transport
        + family * scores.family
}
