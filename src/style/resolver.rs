//! Marker style resolution
//!
//! Maps one seismic event record to the visual parameters of its circle
//! marker. Depth selects the fill color from a fixed six-bucket scale,
//! magnitude scales the radius. Both mappings are pure functions of the
//! record, so identical input always yields identical style.

use serde::Serialize;

use crate::data::records::EventRecord;

/// One entry of the fixed depth-to-color scale
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DepthBucket {
    pub lower_bound_km: f64,
    pub color_hex: &'static str,
}

/// Depth buckets in ascending order. Each bucket covers depths strictly
/// greater than its lower bound, up to and including the next bound; the
/// last bucket is open-ended.
pub const DEPTH_BUCKETS: [DepthBucket; 6] = [
    DepthBucket {
        lower_bound_km: -10.0,
        color_hex: "#99ff33",
    },
    DepthBucket {
        lower_bound_km: 10.0,
        color_hex: "#ffff33",
    },
    DepthBucket {
        lower_bound_km: 30.0,
        color_hex: "#ffcc33",
    },
    DepthBucket {
        lower_bound_km: 50.0,
        color_hex: "#ff9933",
    },
    DepthBucket {
        lower_bound_km: 70.0,
        color_hex: "#ff6633",
    },
    DepthBucket {
        lower_bound_km: 90.0,
        color_hex: "#ff3333",
    },
];

/// Visual parameters of one circle marker
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MarkerStyle {
    pub radius: f64,
    pub fill_color: &'static str,
    pub stroke_color: &'static str,
    pub stroke_weight: f64,
    pub stroke_opacity: f64,
    pub fill_opacity: f64,
}

/// Stroke parameters for line overlays
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StrokeStyle {
    pub color: &'static str,
    pub weight: f64,
    pub opacity: f64,
}

const MARKER_STROKE_COLOR: &str = "#000";
const MARKER_STROKE_WEIGHT: f64 = 0.5;
const MARKER_STROKE_OPACITY: f64 = 1.0;
const MARKER_FILL_OPACITY: f64 = 0.7;

/// Fill color for the given hypocenter depth.
///
/// Comparisons are strict, so a depth exactly on a bound stays in the
/// shallower bucket: `color_for_depth(90.0)` is `"#ff6633"`, not
/// `"#ff3333"`. Depths below the lowest bound (negative depths are valid
/// in the feed) land in the shallowest bucket.
pub fn color_for_depth(depth_km: f64) -> &'static str {
    for bucket in DEPTH_BUCKETS.iter().rev() {
        if depth_km > bucket.lower_bound_km {
            return bucket.color_hex;
        }
    }
    DEPTH_BUCKETS[0].color_hex
}

/// Marker radius for the given magnitude.
///
/// A missing magnitude falls back to radius 1. Magnitude zero is treated
/// the same as missing and also renders at the fallback radius; callers
/// that need zero-magnitude events sized normally must pre-scale.
pub fn radius_for_magnitude(magnitude: Option<f64>) -> f64 {
    match magnitude {
        Some(m) if m != 0.0 && !m.is_nan() => m * 4.0,
        _ => 1.0,
    }
}

/// Resolves the full marker style for one event record
pub fn resolve_style(record: &EventRecord) -> MarkerStyle {
    MarkerStyle {
        radius: radius_for_magnitude(record.magnitude),
        fill_color: color_for_depth(record.depth_km),
        stroke_color: MARKER_STROKE_COLOR,
        stroke_weight: MARKER_STROKE_WEIGHT,
        stroke_opacity: MARKER_STROKE_OPACITY,
        fill_opacity: MARKER_FILL_OPACITY,
    }
}
