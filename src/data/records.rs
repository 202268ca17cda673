//! Domain records extracted from the feeds
//!
//! `EventRecord` carries the three scalars the styling pipeline needs plus
//! the epicenter position; `PlateBoundary` is an opaque polyline passed
//! through to the renderer unchanged. Conversion from a raw feature fails
//! with `InvalidRecord` when a required numeric field is missing or not
//! finite; callers skip such features instead of aborting the layer.

use serde::Serialize;
use serde_json::Value;

use crate::core::geo::LatLng;
use crate::data::geojson::{FeedFeature, FeedGeometry};
use crate::{Error, Result};

/// One seismic event as read from the feed
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EventRecord {
    /// Event magnitude; the feed may omit it
    pub magnitude: Option<f64>,
    /// Hypocenter depth in km; negative values occur for shallow events
    pub depth_km: f64,
    /// Human-readable locality description
    pub place: String,
    /// Event time in epoch milliseconds
    pub timestamp_ms: i64,
    /// Epicenter position
    pub epicenter: LatLng,
}

impl EventRecord {
    /// Extracts an event record from one feed feature.
    ///
    /// The feature must carry a `Point` geometry with a finite depth as its
    /// third coordinate and an event time. A missing magnitude is valid; a
    /// missing place degrades to `"unknown"`.
    pub fn from_feature(feature: &FeedFeature) -> Result<Self> {
        let geometry = feature
            .geometry
            .as_ref()
            .ok_or_else(|| Error::InvalidRecord("feature has no geometry".to_string()))?;

        let coordinates = match geometry {
            FeedGeometry::Point { coordinates } => coordinates,
            other => {
                return Err(Error::InvalidRecord(format!(
                    "expected Point geometry, got {}",
                    other.kind()
                )))
            }
        };

        if coordinates.len() < 3 {
            return Err(Error::InvalidRecord(
                "point geometry carries no depth component".to_string(),
            ));
        }

        let (lng, lat, depth_km) = (coordinates[0], coordinates[1], coordinates[2]);
        if !depth_km.is_finite() {
            return Err(Error::InvalidRecord(format!(
                "depth is not a finite number: {depth_km}"
            )));
        }

        let epicenter = LatLng::new(lat, lng);
        if !epicenter.is_valid() {
            return Err(Error::InvalidRecord(format!(
                "epicenter out of range: {lat}, {lng}"
            )));
        }

        let magnitude = feature.property("mag").and_then(Value::as_f64);
        let place = feature
            .property("place")
            .and_then(Value::as_str)
            .unwrap_or("unknown")
            .to_string();
        let timestamp_ms = feature
            .property("time")
            .and_then(Value::as_i64)
            .ok_or_else(|| Error::InvalidRecord("missing event time".to_string()))?;

        Ok(Self {
            magnitude,
            depth_km,
            place,
            timestamp_ms,
            epicenter,
        })
    }
}

/// One plate-boundary feature: a bundle of polyline segments
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlateBoundary {
    pub segments: Vec<Vec<LatLng>>,
}

impl PlateBoundary {
    /// Extracts the polyline segments from one boundary feature. Line
    /// geometry only; anything else is rejected so the loader can skip it.
    pub fn from_feature(feature: &FeedFeature) -> Result<Self> {
        let geometry = feature
            .geometry
            .as_ref()
            .ok_or_else(|| Error::InvalidRecord("boundary feature has no geometry".to_string()))?;

        let segments = match geometry {
            FeedGeometry::LineString { coordinates } => vec![positions_to_points(coordinates)?],
            FeedGeometry::MultiLineString { coordinates } => coordinates
                .iter()
                .map(|line| positions_to_points(line))
                .collect::<Result<Vec<_>>>()?,
            other => {
                return Err(Error::InvalidRecord(format!(
                    "unsupported boundary geometry: {}",
                    other.kind()
                )))
            }
        };

        Ok(Self { segments })
    }

    /// All points across all segments
    pub fn points(&self) -> impl Iterator<Item = &LatLng> {
        self.segments.iter().flatten()
    }
}

fn positions_to_points(line: &[Vec<f64>]) -> Result<Vec<LatLng>> {
    line.iter()
        .map(|position| {
            if position.len() < 2 {
                return Err(Error::InvalidRecord(
                    "position carries fewer than two components".to_string(),
                ));
            }
            Ok(LatLng::new(position[1], position[0]))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::geojson::FeedCollection;

    fn quake_feature(payload: &str) -> FeedFeature {
        FeedCollection::from_str(payload).unwrap().features.remove(0)
    }

    #[test]
    fn test_event_record_from_feature() {
        let feature = quake_feature(
            r#"{"type": "FeatureCollection", "features": [{
                "type": "Feature",
                "properties": {"mag": 5.2, "place": "10km SSE of Example", "time": 1700000000000},
                "geometry": {"type": "Point", "coordinates": [-117.0, 35.0, 45.0]}
            }]}"#,
        );

        let record = EventRecord::from_feature(&feature).unwrap();
        assert_eq!(record.magnitude, Some(5.2));
        assert_eq!(record.depth_km, 45.0);
        assert_eq!(record.place, "10km SSE of Example");
        assert_eq!(record.timestamp_ms, 1_700_000_000_000);
        assert_eq!(record.epicenter, LatLng::new(35.0, -117.0));
    }

    #[test]
    fn test_null_magnitude_is_valid() {
        let feature = quake_feature(
            r#"{"type": "FeatureCollection", "features": [{
                "type": "Feature",
                "properties": {"mag": null, "place": "offshore", "time": 1700000000000},
                "geometry": {"type": "Point", "coordinates": [142.0, 38.0, 95.0]}
            }]}"#,
        );

        let record = EventRecord::from_feature(&feature).unwrap();
        assert_eq!(record.magnitude, None);
    }

    #[test]
    fn test_missing_depth_is_invalid() {
        let feature = quake_feature(
            r#"{"type": "FeatureCollection", "features": [{
                "type": "Feature",
                "properties": {"mag": 2.0, "place": "nowhere", "time": 1700000000000},
                "geometry": {"type": "Point", "coordinates": [-117.0, 35.0]}
            }]}"#,
        );

        let err = EventRecord::from_feature(&feature).unwrap_err();
        assert!(matches!(err, Error::InvalidRecord(_)));
    }

    #[test]
    fn test_missing_time_is_invalid() {
        let feature = quake_feature(
            r#"{"type": "FeatureCollection", "features": [{
                "type": "Feature",
                "properties": {"mag": 2.0, "place": "nowhere"},
                "geometry": {"type": "Point", "coordinates": [-117.0, 35.0, 3.0]}
            }]}"#,
        );

        assert!(EventRecord::from_feature(&feature).is_err());
    }

    #[test]
    fn test_null_place_degrades_to_unknown() {
        let feature = quake_feature(
            r#"{"type": "FeatureCollection", "features": [{
                "type": "Feature",
                "properties": {"mag": 1.1, "place": null, "time": 1700000000000},
                "geometry": {"type": "Point", "coordinates": [-117.0, 35.0, 3.0]}
            }]}"#,
        );

        let record = EventRecord::from_feature(&feature).unwrap();
        assert_eq!(record.place, "unknown");
    }

    #[test]
    fn test_plate_boundary_from_line_string() {
        let feature = quake_feature(
            r#"{"type": "FeatureCollection", "features": [{
                "type": "Feature",
                "properties": {"Name": "EU-NA"},
                "geometry": {"type": "LineString", "coordinates": [[-24.0, 63.0], [-23.5, 63.9]]}
            }]}"#,
        );

        let boundary = PlateBoundary::from_feature(&feature).unwrap();
        assert_eq!(boundary.segments.len(), 1);
        assert_eq!(boundary.segments[0][0], LatLng::new(63.0, -24.0));
        assert_eq!(boundary.points().count(), 2);
    }

    #[test]
    fn test_plate_boundary_from_multi_line_string() {
        let feature = quake_feature(
            r#"{"type": "FeatureCollection", "features": [{
                "type": "Feature",
                "properties": {},
                "geometry": {"type": "MultiLineString", "coordinates": [
                    [[0.0, 0.0], [1.0, 1.0]],
                    [[2.0, 2.0], [3.0, 3.0], [4.0, 4.0]]
                ]}
            }]}"#,
        );

        let boundary = PlateBoundary::from_feature(&feature).unwrap();
        assert_eq!(boundary.segments.len(), 2);
        assert_eq!(boundary.points().count(), 5);
    }

    #[test]
    fn test_plate_boundary_rejects_point_geometry() {
        let feature = quake_feature(
            r#"{"type": "FeatureCollection", "features": [{
                "type": "Feature",
                "properties": {},
                "geometry": {"type": "Point", "coordinates": [0.0, 0.0, 0.0]}
            }]}"#,
        );

        assert!(PlateBoundary::from_feature(&feature).is_err());
    }
}
