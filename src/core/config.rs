//! Session configuration
//!
//! Holds the initial view, the feed endpoints, and control placement for a
//! map session. Defaults reproduce the stock earthquake visualization:
//! centered over the contiguous US, monthly USGS feed, plate boundaries
//! from the PB2002 dataset.

use crate::core::geo::LatLng;
use crate::ui::controls::ControlPosition;

/// Monthly summary feed of all recorded earthquakes (USGS)
pub const EARTHQUAKE_FEED_URL: &str =
    "https://earthquake.usgs.gov/earthquakes/feed/v1.0/summary/all_month.geojson";

/// Tectonic plate boundary lines (PB2002 dataset)
pub const PLATE_BOUNDARY_FEED_URL: &str =
    "https://raw.githubusercontent.com/fraxen/tectonicplates/master/GeoJSON/PB2002_boundaries.json";

/// Configuration for a map session
#[derive(Debug, Clone, PartialEq)]
pub struct MapConfig {
    /// Initial map center
    pub center: LatLng,
    /// Initial zoom level
    pub zoom: f64,
    /// Earthquake feed endpoint
    pub earthquake_feed_url: String,
    /// Plate boundary feed endpoint
    pub plate_feed_url: String,
    /// Where the legend panel is anchored
    pub legend_position: ControlPosition,
    /// Whether the layer control starts collapsed
    pub layer_control_collapsed: bool,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            center: LatLng::new(37.09, -95.71),
            zoom: 5.0,
            earthquake_feed_url: EARTHQUAKE_FEED_URL.to_string(),
            plate_feed_url: PLATE_BOUNDARY_FEED_URL.to_string(),
            legend_position: ControlPosition::BottomRight,
            layer_control_collapsed: false,
        }
    }
}
