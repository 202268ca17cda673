use crate::core::geo::LatLng;
use crate::layers::earthquakes::Marker;
use crate::render::RenderSurface;
use crate::style::resolver::StrokeStyle;
use crate::ui::controls::{LayerControl, LegendPanel};
use crate::Result;

/// Surface that records every draw call instead of rendering.
///
/// Useful for headless runs and for asserting on a session's render output
/// in tests.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub tile_layers: Vec<(String, String)>,
    pub markers: Vec<Marker>,
    pub polylines: Vec<(Vec<LatLng>, StrokeStyle)>,
    pub legend: Option<LegendPanel>,
    pub layer_control: Option<LayerControl>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drops everything recorded so far
    pub fn clear(&mut self) {
        self.tile_layers.clear();
        self.markers.clear();
        self.polylines.clear();
        self.legend = None;
        self.layer_control = None;
    }
}

impl RenderSurface for RecordingSurface {
    fn draw_tile_layer(&mut self, url_template: &str, attribution: &str) -> Result<()> {
        self.tile_layers
            .push((url_template.to_string(), attribution.to_string()));
        Ok(())
    }

    fn draw_marker(&mut self, marker: &Marker) -> Result<()> {
        self.markers.push(marker.clone());
        Ok(())
    }

    fn draw_polyline(&mut self, points: &[LatLng], style: &StrokeStyle) -> Result<()> {
        self.polylines.push((points.to_vec(), *style));
        Ok(())
    }

    fn show_legend(&mut self, panel: &LegendPanel) -> Result<()> {
        self.legend = Some(panel.clone());
        Ok(())
    }

    fn show_layer_control(&mut self, control: &LayerControl) -> Result<()> {
        self.layer_control = Some(control.clone());
        Ok(())
    }
}
