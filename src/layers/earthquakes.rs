//! Earthquake overlay
//!
//! Holds the event records of one feed pass and turns each into a styled
//! circle marker with popup text. All derived values are pure functions of
//! the record, so markers can be regenerated at any time.

use serde::Serialize;

use crate::core::geo::{LatLng, LatLngBounds};
use crate::data::records::EventRecord;
use crate::layers::base::{Layer, LayerKind, LayerProperties};
use crate::render::RenderSurface;
use crate::style::popup::format_popup;
use crate::style::resolver::{resolve_style, MarkerStyle};
use crate::Result;

/// One drawable circle marker: position, style, and popup text
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marker {
    pub position: LatLng,
    pub style: MarkerStyle,
    pub popup: String,
}

impl Marker {
    /// Derives the marker for one event record
    pub fn for_record(record: &EventRecord) -> Self {
        Self {
            position: record.epicenter,
            style: resolve_style(record),
            popup: format_popup(record),
        }
    }
}

/// Overlay rendering one marker per seismic event
pub struct EarthquakeLayer {
    properties: LayerProperties,
    records: Vec<EventRecord>,
}

impl EarthquakeLayer {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            properties: LayerProperties::new(id, name, LayerKind::Earthquake),
            records: Vec::new(),
        }
    }

    /// Replaces the layer's records with a fresh feed pass
    pub fn set_records(&mut self, records: Vec<EventRecord>) {
        self.records = records;
    }

    pub fn records(&self) -> &[EventRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Markers for all records, in feed order
    pub fn markers(&self) -> impl Iterator<Item = Marker> + '_ {
        self.records.iter().map(Marker::for_record)
    }
}

impl Layer for EarthquakeLayer {
    fn properties(&self) -> &LayerProperties {
        &self.properties
    }

    fn properties_mut(&mut self) -> &mut LayerProperties {
        &mut self.properties
    }

    fn bounds(&self) -> Option<LatLngBounds> {
        let epicenters: Vec<LatLng> = self.records.iter().map(|r| r.epicenter).collect();
        LatLngBounds::from_points(&epicenters)
    }

    fn draw(&self, surface: &mut dyn RenderSurface) -> Result<()> {
        for marker in self.markers() {
            surface.draw_marker(&marker)?;
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

#[cfg(test)]
mod tests {
    use super::*;

    fn record(magnitude: Option<f64>, depth_km: f64, lat: f64, lng: f64) -> EventRecord {
        EventRecord {
            magnitude,
            depth_km,
            place: "test".to_string(),
            timestamp_ms: 1_700_000_000_000,
            epicenter: LatLng::new(lat, lng),
        }
    }

    #[test]
    fn test_marker_for_record() {
        let marker = Marker::for_record(&record(Some(5.2), 45.0, 35.0, -117.0));
        assert_eq!(marker.position, LatLng::new(35.0, -117.0));
        assert_eq!(marker.style.radius, 20.8);
        assert_eq!(marker.style.fill_color, "#ffcc33");
        assert!(marker.popup.contains("Magnitude: 5.2"));
    }

    #[test]
    fn test_layer_markers_follow_feed_order() {
        let mut layer = EarthquakeLayer::new("quakes", "Earthquakes");
        layer.set_records(vec![
            record(Some(1.0), 5.0, 10.0, 20.0),
            record(Some(2.0), 35.0, 11.0, 21.0),
        ]);

        let markers: Vec<Marker> = layer.markers().collect();
        assert_eq!(markers.len(), 2);
        assert_eq!(markers[0].style.fill_color, "#99ff33");
        assert_eq!(markers[1].style.fill_color, "#ffcc33");
    }

    #[test]
    fn test_layer_bounds() {
        let mut layer = EarthquakeLayer::new("quakes", "Earthquakes");
        assert!(layer.bounds().is_none());

        layer.set_records(vec![
            record(Some(1.0), 5.0, 10.0, 20.0),
            record(Some(2.0), 35.0, -5.0, 40.0),
        ]);

        let bounds = layer.bounds().unwrap();
        assert_eq!(bounds.south_west, LatLng::new(-5.0, 20.0));
        assert_eq!(bounds.north_east, LatLng::new(10.0, 40.0));
    }
}
