//! Importance toggles, as shown in the search criteria panel.
//!
//! Checked factors weigh 1.0. Unchecked factors still matter, just less
//! (0.5, never zero). This mapping is a policy of the calling layer: the
//! aggregator itself accepts arbitrary non-negative weights.

use livmap_core::WeightVector;

const IMPORTANT_WEIGHT: f64 = 1.0;
const BACKGROUND_WEIGHT: f64 = 0.5;

/// Which factors the user marked as important.
///
/// # Examples
/// ```
/// use livmap_view::ImportanceSelection;
///
/// let selection = ImportanceSelection {
///     safety: true,
///     ..ImportanceSelection::default()
/// };
/// let weights = selection.to_weights();
/// assert_eq!(weights.safety, 1.0);
/// assert_eq!(weights.weather, 0.5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ImportanceSelection {
    /// Safety / crime matters most.
    pub safety: bool,
    /// Weather matters most.
    pub weather: bool,
    /// Public transport matters most.
    pub transport: bool,
    /// Family and community matters most.
    pub family: bool,
}

impl ImportanceSelection {
    /// Map the toggles onto an aggregation weight vector.
    #[must_use]
    pub fn to_weights(self) -> WeightVector {
        let weight_for = |important: bool| {
            if important {
                IMPORTANT_WEIGHT
            } else {
                BACKGROUND_WEIGHT
            }
        };
        WeightVector {
            safety: weight_for(self.safety),
            weather: weight_for(self.weather),
            transport: weight_for(self.transport),
            family: weight_for(self.family),
        }
    }
}
