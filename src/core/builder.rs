//! Session builder for fluent configuration
//!
//! One builder covers both shapes of the visualization: a single base map
//! with the earthquake overlay, or the full variant with several base
//! maps and the tectonic-plate overlay registered on top.

use crate::core::config::MapConfig;
use crate::core::geo::LatLng;
use crate::core::session::MapSession;
use crate::layers::tile::TileLayer;
use crate::ui::controls::ControlPosition;
use crate::Result;

/// Builder for creating and configuring [`MapSession`] instances
pub struct SessionBuilder {
    config: MapConfig,
    base_layers: Vec<TileLayer>,
    plate_overlay: bool,
}

impl SessionBuilder {
    /// Create a new builder with default settings
    pub fn new() -> Self {
        Self {
            config: MapConfig::default(),
            base_layers: Vec::new(),
            plate_overlay: false,
        }
    }

    /// Replace the whole configuration
    pub fn with_config(mut self, config: MapConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the initial center and zoom level
    pub fn with_center_and_zoom(mut self, center: LatLng, zoom: f64) -> Self {
        self.config.center = center;
        self.config.zoom = zoom;
        self
    }

    /// Register a base layer. The first one registered becomes active.
    pub fn with_base_layer(mut self, layer: TileLayer) -> Self {
        self.base_layers.push(layer);
        self
    }

    /// Register the street, satellite, and greyscale base maps
    pub fn with_standard_base_layers(self) -> Self {
        self.with_base_layer(TileLayer::street())
            .with_base_layer(TileLayer::satellite())
            .with_base_layer(TileLayer::greyscale())
    }

    /// Override the earthquake feed endpoint
    pub fn with_earthquake_feed(mut self, url: impl Into<String>) -> Self {
        self.config.earthquake_feed_url = url.into();
        self
    }

    /// Register the tectonic-plate overlay
    pub fn with_plate_overlay(mut self) -> Self {
        self.plate_overlay = true;
        self
    }

    /// Override the plate feed endpoint; implies the plate overlay
    pub fn with_plate_feed(mut self, url: impl Into<String>) -> Self {
        self.config.plate_feed_url = url.into();
        self.plate_overlay = true;
        self
    }

    /// Anchor the legend panel to a different corner
    pub fn with_legend_position(mut self, position: ControlPosition) -> Self {
        self.config.legend_position = position;
        self
    }

    /// Start the layer control collapsed
    pub fn with_collapsed_layer_control(mut self, collapsed: bool) -> Self {
        self.config.layer_control_collapsed = collapsed;
        self
    }

    /// Build the session. A street base map is provided when no base layer
    /// was registered; the earthquake overlay is always present.
    pub fn build(self) -> Result<MapSession> {
        MapSession::assemble(self.config, self.base_layers, self.plate_overlay)
    }
}

impl Default for SessionBuilder {
    fn default() -> Self {
        Self::new()
    }
}
