//! Depth legend construction
//!
//! Produces the ordered list of color swatches and range labels shown next
//! to the map. The table is fixed and independent of any event data, so
//! the built legend is memoized.

use once_cell::sync::Lazy;
use serde::Serialize;

use crate::style::resolver::DEPTH_BUCKETS;

/// Title of the legend panel
pub const LEGEND_TITLE: &str = "Depth (km)";

/// One legend row: a color swatch and its depth-range label
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegendEntry {
    pub color_hex: &'static str,
    pub label: String,
}

/// Builds the six-row depth legend in ascending depth order.
///
/// Every row but the last is labeled with its depth range; the last row is
/// open-ended (`"90+ km"`).
pub fn build_legend() -> Vec<LegendEntry> {
    DEPTH_BUCKETS
        .iter()
        .enumerate()
        .map(|(i, bucket)| {
            let label = match DEPTH_BUCKETS.get(i + 1) {
                Some(next) => format!(
                    "{} – {} km",
                    bucket.lower_bound_km, next.lower_bound_km
                ),
                None => format!("{}+ km", bucket.lower_bound_km),
            };
            LegendEntry {
                color_hex: bucket.color_hex,
                label,
            }
        })
        .collect()
}

static LEGEND: Lazy<Vec<LegendEntry>> = Lazy::new(build_legend);

/// Memoized legend table
pub fn legend() -> &'static [LegendEntry] {
    &LEGEND
}
