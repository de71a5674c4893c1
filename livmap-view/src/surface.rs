//! The drawing-surface seam between the engine and the host map widget.
//!
//! The engine computes what to show; an externally supplied map/canvas
//! abstraction does the actual compositing. Implementations wrap whatever
//! tile-rendering stack the host application uses.

use geo::Coord;
use livmap_core::{HeatSurface, Rgb};

/// A position in surface pixel space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenPoint {
    /// Horizontal pixel offset from the surface origin.
    pub x: f64,
    /// Vertical pixel offset from the surface origin.
    pub y: f64,
}

/// Drawing operations the interaction controller issues.
///
/// All coordinates are WGS84 lon/lat except where a [`ScreenPoint`] is
/// named. Implementations must treat `set_heat_layer` as a replacement:
/// the previous layer is released, never stacked under the new one.
pub trait MapSurface {
    /// Place (or restyle) the marker for one suburb.
    fn place_marker(&mut self, location: Coord<f64>, fill: Rgb, tooltip: &str, selected: bool);

    /// Draw one influence hint line between the hover position and a
    /// neighbouring suburb.
    fn draw_hint_line(&mut self, from: Coord<f64>, to: Coord<f64>);

    /// Remove all influence hint lines.
    fn clear_hints(&mut self);

    /// Show the floating estimate readout at a pixel position.
    fn show_estimate(&mut self, at: ScreenPoint, text: &str);

    /// Hide the floating estimate readout.
    fn clear_estimate(&mut self);

    /// Replace the heat layer with a freshly built surface.
    fn set_heat_layer(&mut self, surface: HeatSurface);

    /// Convert a geographic coordinate to surface pixel space.
    fn project(&self, location: Coord<f64>) -> ScreenPoint;
}
