//! Rendering surface seam
//!
//! The crate never draws pixels itself. A session walks its layers and
//! drives a [`RenderSurface`] owned by the embedding application: a GPU
//! canvas, a web view bridge, or the [`RecordingSurface`] used in tests.

mod recording;

pub use recording::RecordingSurface;

use crate::core::geo::LatLng;
use crate::layers::earthquakes::Marker;
use crate::style::resolver::StrokeStyle;
use crate::ui::controls::{LayerControl, LegendPanel};
use crate::Result;

/// Drawing operations a map session needs from its host
pub trait RenderSurface {
    /// Shows the active base tile layer
    fn draw_tile_layer(&mut self, url_template: &str, attribution: &str) -> Result<()>;

    /// Draws one circle marker with its popup text
    fn draw_marker(&mut self, marker: &Marker) -> Result<()>;

    /// Draws one polyline with the given stroke
    fn draw_polyline(&mut self, points: &[LatLng], style: &StrokeStyle) -> Result<()>;

    /// Shows the legend panel
    fn show_legend(&mut self, panel: &LegendPanel) -> Result<()>;

    /// Shows the base-layer/overlay switcher
    fn show_layer_control(&mut self, control: &LayerControl) -> Result<()>;
}
