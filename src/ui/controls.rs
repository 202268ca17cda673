//! Map control models
//!
//! Declarative descriptions of the legend panel and the layer switcher.
//! The rendering surface decides how to present them.

use serde::Serialize;

use crate::style::legend::{legend, LegendEntry, LEGEND_TITLE};

/// Corner a control is anchored to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ControlPosition {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

/// Static legend panel shown alongside the map
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegendPanel {
    pub title: String,
    pub entries: Vec<LegendEntry>,
    pub position: ControlPosition,
}

impl LegendPanel {
    /// The depth scale legend of the earthquake overlay
    pub fn depth_scale(position: ControlPosition) -> Self {
        Self {
            title: LEGEND_TITLE.to_string(),
            entries: legend().to_vec(),
            position,
        }
    }
}

/// One named entry of the layer control
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayerToggle {
    pub id: String,
    pub name: String,
    /// Active base layer, or overlay currently shown
    pub active: bool,
}

/// Base-layer chooser plus overlay toggles
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayerControl {
    /// Mutually exclusive background maps
    pub base_layers: Vec<LayerToggle>,
    /// Independently toggleable data layers
    pub overlays: Vec<LayerToggle>,
    pub collapsed: bool,
}
