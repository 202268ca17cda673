//! Tectonic plate boundary overlay
//!
//! Boundary geometry is passed through to the renderer unchanged, drawn
//! with a single fixed stroke.

use crate::core::geo::{LatLng, LatLngBounds};
use crate::data::records::PlateBoundary;
use crate::layers::base::{Layer, LayerKind, LayerProperties};
use crate::render::RenderSurface;
use crate::style::resolver::StrokeStyle;
use crate::Result;

/// Stroke used for every plate boundary line
pub const PLATE_STROKE: StrokeStyle = StrokeStyle {
    color: "#ffa500",
    weight: 2.0,
    opacity: 1.0,
};

/// Overlay rendering plate boundary polylines
pub struct PlateBoundaryLayer {
    properties: LayerProperties,
    boundaries: Vec<PlateBoundary>,
}

impl PlateBoundaryLayer {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            properties: LayerProperties::new(id, name, LayerKind::PlateBoundary),
            boundaries: Vec::new(),
        }
    }

    pub fn set_boundaries(&mut self, boundaries: Vec<PlateBoundary>) {
        self.boundaries = boundaries;
    }

    pub fn boundaries(&self) -> &[PlateBoundary] {
        &self.boundaries
    }

    pub fn is_empty(&self) -> bool {
        self.boundaries.is_empty()
    }
}

impl Layer for PlateBoundaryLayer {
    fn properties(&self) -> &LayerProperties {
        &self.properties
    }

    fn properties_mut(&mut self) -> &mut LayerProperties {
        &mut self.properties
    }

    fn bounds(&self) -> Option<LatLngBounds> {
        let points: Vec<LatLng> = self
            .boundaries
            .iter()
            .flat_map(|b| b.points().copied())
            .collect();
        LatLngBounds::from_points(&points)
    }

    fn draw(&self, surface: &mut dyn RenderSurface) -> Result<()> {
        for boundary in &self.boundaries {
            for segment in &boundary.segments {
                surface.draw_polyline(segment, &PLATE_STROKE)?;
            }
        }
        Ok(())
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn std::any::Any {
        self
    }
}
