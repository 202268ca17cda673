//! Prelude module for common quakemap types and traits
//!
//! Re-exports the most commonly used types, traits, and functions for easy
//! importing with `use quakemap::prelude::*;`

pub use crate::core::{
    builder::SessionBuilder,
    config::{MapConfig, EARTHQUAKE_FEED_URL, PLATE_BOUNDARY_FEED_URL},
    geo::{LatLng, LatLngBounds, TileCoord},
    session::{MapSession, EARTHQUAKE_LAYER_ID, PLATE_LAYER_ID},
};

pub use crate::data::{
    fetch::{extract_event_records, extract_plate_boundaries, FeedClient},
    geojson::{FeedCollection, FeedFeature, FeedGeometry},
    records::{EventRecord, PlateBoundary},
};

pub use crate::layers::{
    base::{Layer, LayerKind, LayerProperties},
    earthquakes::{EarthquakeLayer, Marker},
    manager::LayerManager,
    plates::{PlateBoundaryLayer, PLATE_STROKE},
    tile::{TemplateTileSource, TileLayer, TileSource},
};

pub use crate::render::{RecordingSurface, RenderSurface};

pub use crate::style::{
    legend::{build_legend, legend, LegendEntry, LEGEND_TITLE},
    popup::format_popup,
    resolver::{
        color_for_depth, radius_for_magnitude, resolve_style, DepthBucket, MarkerStyle,
        StrokeStyle, DEPTH_BUCKETS,
    },
};

pub use crate::ui::controls::{ControlPosition, LayerControl, LayerToggle, LegendPanel};

pub use crate::{Error, MapError, Result};
