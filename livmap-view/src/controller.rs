//! The real-time interaction driver.
//!
//! Routes pointer movement through the estimator and on to the surface,
//! throttled to one recomputation per rendered frame. The throttle is a
//! cancellation discipline, not a queue: each new pointer event cancels the
//! previously scheduled recompute, and leaving the surface cancels whatever
//! is pending and clears the overlay immediately, so a stale computation can
//! never apply its result after a newer one has started.

use geo::{Coord, Rect};
use log::debug;

use livmap_core::{
    GradientPolicy, HeatmapConfig, IdwParams, ScorePointStore, WeightVector, aggregate, colour_for,
    estimate, heatmap,
};

use crate::frame::{FrameClock, FrameHandle};
use crate::surface::{MapSurface, ScreenPoint};

/// Pixel offset of the estimate readout from the pointer.
const READOUT_OFFSET_PX: f64 = 12.0;

/// A recompute scheduled for the next frame boundary.
#[derive(Debug, Clone, Copy, PartialEq)]
struct PendingEstimate {
    handle: FrameHandle,
    at: Coord<f64>,
}

/// Drives the interactive map from pointer and viewport events.
///
/// The controller owns the immutable point store for the session; weight
/// vectors arrive fresh with each call and are never retained.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use livmap_core::{ScorePoint, ScorePointStore};
/// use livmap_view::MapController;
///
/// let store = ScorePointStore::from_points(vec![
///     ScorePoint::new("Sydney", Coord { x: 151.21, y: -33.87 }, 8.5),
/// ]);
/// let controller = MapController::new(store);
/// assert!(controller.selected().is_none());
/// ```
#[derive(Debug)]
pub struct MapController {
    store: ScorePointStore,
    params: IdwParams,
    policy: GradientPolicy,
    heat_config: HeatmapConfig,
    pending: Option<PendingEstimate>,
    panning: bool,
    selected: Option<String>,
}

impl MapController {
    /// Construct a controller over the session's point store.
    #[must_use]
    pub fn new(store: ScorePointStore) -> Self {
        Self {
            store,
            params: IdwParams::default(),
            policy: GradientPolicy::default(),
            heat_config: HeatmapConfig::default(),
            pending: None,
            panning: false,
            selected: None,
        }
    }

    /// Override the estimator parameters while consuming `self`.
    #[must_use]
    pub fn with_params(mut self, params: IdwParams) -> Self {
        self.params = params;
        self
    }

    /// Override the gradient policy while consuming `self`.
    #[must_use]
    pub fn with_policy(mut self, policy: GradientPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Override the heat surface tuning while consuming `self`.
    #[must_use]
    pub fn with_heatmap(mut self, config: HeatmapConfig) -> Self {
        self.heat_config = config;
        self
    }

    /// Handle pointer movement over the surface.
    ///
    /// Cancels any pending recompute and schedules a new one for the next
    /// frame. Movement while panning is ignored.
    pub fn pointer_moved(&mut self, at: Coord<f64>, clock: &mut dyn FrameClock) {
        if self.panning {
            return;
        }
        if let Some(pending) = self.pending.take() {
            clock.cancel(pending.handle);
        }
        self.pending = Some(PendingEstimate {
            handle: clock.request(),
            at,
        });
    }

    /// Handle the pointer leaving the surface.
    ///
    /// Cancels any pending recompute and clears the overlay immediately.
    pub fn pointer_left(&mut self, clock: &mut dyn FrameClock, surface: &mut dyn MapSurface) {
        if let Some(pending) = self.pending.take() {
            clock.cancel(pending.handle);
        }
        surface.clear_hints();
        surface.clear_estimate();
    }

    /// Begin pan-state tracking on pointer press.
    pub fn pointer_down(&mut self, clock: &mut dyn FrameClock) {
        self.panning = true;
        if let Some(pending) = self.pending.take() {
            clock.cancel(pending.handle);
        }
    }

    /// End pan-state tracking on pointer release.
    pub fn pointer_up(&mut self) {
        self.panning = false;
    }

    /// Run the recompute scheduled for `handle`, if it is still current.
    ///
    /// A handle that was superseded by a later pointer event is ignored;
    /// only the most recently scheduled estimate ever reaches the surface.
    #[expect(
        clippy::float_arithmetic,
        reason = "readout placement offsets the projected pointer position"
    )]
    pub fn frame(&mut self, handle: FrameHandle, surface: &mut dyn MapSurface) {
        let Some(pending) = self.pending.take() else {
            return;
        };
        if pending.handle != handle {
            self.pending = Some(pending);
            return;
        }

        let result = estimate(&self.store, pending.at, self.params);
        surface.clear_hints();
        match result.score {
            Some(score) => {
                let projected = surface.project(pending.at);
                let readout = ScreenPoint {
                    x: projected.x + READOUT_OFFSET_PX,
                    y: projected.y - READOUT_OFFSET_PX,
                };
                surface.show_estimate(readout, &format!("Est. score: {score:.2}"));
                for neighbour in result.influencers() {
                    surface.draw_hint_line(pending.at, neighbour.point.location);
                }
            }
            None => {
                debug!("no data under pointer; clearing estimate readout");
                surface.clear_estimate();
            }
        }
    }

    /// Rebuild the heat layer for a new viewport zoom level.
    ///
    /// The freshly built surface replaces the previous layer wholesale.
    pub fn zoom_changed(&mut self, zoom: f64, surface: &mut dyn MapSurface) {
        surface.set_heat_layer(heatmap::build(&self.store, zoom, &self.heat_config));
    }

    /// Paint the marker for each suburb inside the viewport.
    ///
    /// Suburbs outside `viewport` are skipped; pan and zoom handlers call
    /// this again with the new viewport bounds. Markers arrive in id order,
    /// as the store's bbox query returns them.
    pub fn render_markers(&self, viewport: &Rect<f64>, surface: &mut dyn MapSurface) {
        for point in self.store.points_in_bbox(viewport) {
            let selected = self.selected.as_deref() == Some(point.id.as_str());
            surface.place_marker(
                point.location,
                colour_for(point.score, self.policy),
                &format!("{}: {}", point.id, point.score),
                selected,
            );
        }
    }

    /// Mark a suburb as the current selection.
    pub fn select(&mut self, id: impl Into<String>) {
        self.selected = Some(id.into());
    }

    /// The currently selected suburb, if any.
    #[must_use]
    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// Recompute the selected suburb's overall score under fresh weights.
    ///
    /// Used when an importance slider changes: the previously fetched
    /// breakdown is re-blended locally without another network round-trip.
    /// Returns `None` when nothing is selected or the selection carries no
    /// breakdown.
    #[must_use]
    pub fn recompute_selected(&self, weights: &WeightVector) -> Option<f64> {
        let id = self.selected.as_deref()?;
        let point = self.store.get(id)?;
        point
            .breakdown
            .map(|breakdown| aggregate(&breakdown, weights))
    }

    /// Whether a recompute is currently scheduled.
    #[must_use]
    pub const fn has_pending_estimate(&self) -> bool {
        self.pending.is_some()
    }
}
