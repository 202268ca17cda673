//! Typed view of the GeoJSON feeds
//!
//! Covers the geometry kinds the seismic and plate-boundary feeds actually
//! carry. Point coordinates keep their third component (hypocenter depth in
//! km); line and polygon coordinates are kept as raw positions and
//! converted downstream.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{Error, Result};

/// Feed geometry, tagged by GeoJSON type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum FeedGeometry {
    Point { coordinates: Vec<f64> },
    LineString { coordinates: Vec<Vec<f64>> },
    MultiLineString { coordinates: Vec<Vec<Vec<f64>>> },
    Polygon { coordinates: Vec<Vec<Vec<f64>>> },
    MultiPolygon { coordinates: Vec<Vec<Vec<Vec<f64>>>> },
}

impl FeedGeometry {
    /// GeoJSON type name of this geometry
    pub fn kind(&self) -> &'static str {
        match self {
            FeedGeometry::Point { .. } => "Point",
            FeedGeometry::LineString { .. } => "LineString",
            FeedGeometry::MultiLineString { .. } => "MultiLineString",
            FeedGeometry::Polygon { .. } => "Polygon",
            FeedGeometry::MultiPolygon { .. } => "MultiPolygon",
        }
    }
}

/// One feature with geometry and free-form properties
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedFeature {
    #[serde(default)]
    pub id: Option<Value>,
    #[serde(default)]
    pub properties: Option<HashMap<String, Value>>,
    #[serde(default)]
    pub geometry: Option<FeedGeometry>,
}

impl FeedFeature {
    /// Looks up a property by key
    pub fn property(&self, key: &str) -> Option<&Value> {
        self.properties.as_ref().and_then(|p| p.get(key))
    }
}

/// Root feature collection of a feed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedCollection {
    pub features: Vec<FeedFeature>,
}

impl FeedCollection {
    /// Parses a feed payload from raw JSON text
    pub fn from_str(payload: &str) -> Result<Self> {
        serde_json::from_str(payload).map_err(|e| Error::Parse(format!("invalid GeoJSON feed: {e}")))
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_point_feature_collection() {
        let payload = r#"
        {
            "type": "FeatureCollection",
            "features": [
                {
                    "type": "Feature",
                    "id": "us7000test",
                    "properties": {"mag": 4.5, "place": "somewhere", "time": 1700000000000},
                    "geometry": {"type": "Point", "coordinates": [-117.0, 35.0, 8.2]}
                }
            ]
        }
        "#;

        let collection = FeedCollection::from_str(payload).unwrap();
        assert_eq!(collection.len(), 1);

        let feature = &collection.features[0];
        assert_eq!(feature.property("mag").and_then(Value::as_f64), Some(4.5));
        match feature.geometry.as_ref().unwrap() {
            FeedGeometry::Point { coordinates } => {
                assert_eq!(coordinates, &vec![-117.0, 35.0, 8.2]);
            }
            other => panic!("unexpected geometry: {}", other.kind()),
        }
    }

    #[test]
    fn test_parse_line_string_feature() {
        let payload = r#"
        {
            "type": "FeatureCollection",
            "features": [
                {
                    "type": "Feature",
                    "properties": {"Name": "some boundary"},
                    "geometry": {
                        "type": "LineString",
                        "coordinates": [[141.0, 38.0], [142.0, 39.0], [143.5, 39.5]]
                    }
                }
            ]
        }
        "#;

        let collection = FeedCollection::from_str(payload).unwrap();
        let geometry = collection.features[0].geometry.as_ref().unwrap();
        assert_eq!(geometry.kind(), "LineString");
    }

    #[test]
    fn test_polygon_geometry_is_tolerated() {
        let payload = r#"
        {
            "type": "FeatureCollection",
            "features": [
                {
                    "type": "Feature",
                    "properties": {},
                    "geometry": {
                        "type": "Polygon",
                        "coordinates": [[[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 0.0]]]
                    }
                }
            ]
        }
        "#;

        let collection = FeedCollection::from_str(payload).unwrap();
        assert_eq!(collection.features[0].geometry.as_ref().unwrap().kind(), "Polygon");
    }

    #[test]
    fn test_feature_without_geometry_parses() {
        let payload = r#"{"type": "FeatureCollection", "features": [{"type": "Feature", "properties": {}}]}"#;
        let collection = FeedCollection::from_str(payload).unwrap();
        assert!(collection.features[0].geometry.is_none());
    }

    #[test]
    fn test_malformed_payload_is_a_parse_error() {
        let err = FeedCollection::from_str("{not geojson").unwrap_err();
        assert!(matches!(err, Error::Parse(_)));
    }
}
