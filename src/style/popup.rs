//! Popup text construction

use chrono::{Local, TimeZone};

use crate::data::records::EventRecord;

/// Formats the popup text for one event: magnitude, place, depth (km,
/// unrounded), and the event time rendered in the viewer's local timezone.
pub fn format_popup(record: &EventRecord) -> String {
    let magnitude = record
        .magnitude
        .map(|m| m.to_string())
        .unwrap_or_else(|| "unknown".to_string());

    format!(
        "Magnitude: {}\nLocation: {}\nDepth: {} km\nDate & Time: {}",
        magnitude,
        record.place,
        record.depth_km,
        format_event_time(record.timestamp_ms)
    )
}

fn format_event_time(timestamp_ms: i64) -> String {
    Local
        .timestamp_millis_opt(timestamp_ms)
        .earliest()
        .map(|time| time.format("%c").to_string())
        .unwrap_or_else(|| timestamp_ms.to_string())
}
