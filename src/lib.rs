//! # QuakeMap
//!
//! A renderer-agnostic engine for visualizing seismic event feeds on an
//! interactive map.
//!
//! The crate fetches a GeoJSON earthquake feed, maps every event to a
//! circle-marker style (depth selects the fill color bucket, magnitude the
//! radius), builds a popup string and a static depth legend, and hands the
//! result to an external rendering surface together with switchable base
//! tile layers and an optional tectonic-plate overlay.

pub mod core;
pub mod data;
pub mod layers;
pub mod render;
pub mod style;
pub mod ui;

pub mod prelude;

// Re-export public API
pub use crate::core::{
    builder::SessionBuilder,
    config::MapConfig,
    geo::{LatLng, LatLngBounds, TileCoord},
    session::MapSession,
};

pub use crate::data::{
    fetch::FeedClient,
    geojson::{FeedCollection, FeedFeature, FeedGeometry},
    records::{EventRecord, PlateBoundary},
};

pub use crate::layers::{
    base::Layer,
    earthquakes::{EarthquakeLayer, Marker},
    manager::LayerManager,
    plates::PlateBoundaryLayer,
    tile::{TileLayer, TileSource},
};

pub use crate::render::{RecordingSurface, RenderSurface};

pub use crate::style::{
    legend::{build_legend, legend, LegendEntry},
    popup::format_popup,
    resolver::{
        color_for_depth, radius_for_magnitude, resolve_style, DepthBucket, MarkerStyle, StrokeStyle,
    },
};

pub use crate::ui::controls::{ControlPosition, LayerControl, LayerToggle, LegendPanel};

/// Result type used throughout the library
pub type Result<T> = std::result::Result<T, MapError>;

/// Common error types
#[derive(Debug, thiserror::Error)]
pub enum MapError {
    /// A remote feed could not be fetched or answered with a failure status.
    /// Only the layer backed by that feed is affected; base maps and other
    /// overlays stay usable.
    #[error("feed unavailable ({url}): {source}")]
    FeedUnavailable {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("parse error: {0}")]
    Parse(String),

    #[error("invalid record: {0}")]
    InvalidRecord(String),

    #[error("layer error: {0}")]
    Layer(String),

    #[error("render error: {0}")]
    Render(String),
}

/// Error type alias for convenience
pub type Error = MapError;
