//! Feed download and record extraction
//!
//! The client downloads a feed, checks the HTTP status, and hands the body
//! to the pure extraction functions below. Network failures surface as
//! `FeedUnavailable` for the requested layer; malformed individual
//! features are skipped with a log line rather than failing the feed.

use log::{debug, warn};

use crate::data::geojson::FeedCollection;
use crate::data::records::{EventRecord, PlateBoundary};
use crate::{Error, Result};

/// HTTP client for the earthquake and plate-boundary feeds
pub struct FeedClient {
    http: reqwest::Client,
}

impl FeedClient {
    pub fn new() -> Self {
        Self {
            http: reqwest::Client::new(),
        }
    }

    /// Downloads and extracts the earthquake feed
    pub async fn fetch_earthquakes(&self, url: &str) -> Result<Vec<EventRecord>> {
        let payload = self.fetch_text(url).await?;
        let collection = FeedCollection::from_str(&payload)?;
        let records = extract_event_records(&collection);
        debug!(
            "earthquake feed: {} of {} features usable",
            records.len(),
            collection.len()
        );
        Ok(records)
    }

    /// Downloads and extracts the plate-boundary feed
    pub async fn fetch_plate_boundaries(&self, url: &str) -> Result<Vec<PlateBoundary>> {
        let payload = self.fetch_text(url).await?;
        let collection = FeedCollection::from_str(&payload)?;
        let boundaries = extract_plate_boundaries(&collection);
        debug!(
            "plate feed: {} of {} features usable",
            boundaries.len(),
            collection.len()
        );
        Ok(boundaries)
    }

    async fn fetch_text(&self, url: &str) -> Result<String> {
        let response = self
            .http
            .get(url)
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(|source| {
                warn!("feed fetch failed for {url}: {source}");
                Error::FeedUnavailable {
                    url: url.to_string(),
                    source,
                }
            })?;

        response.text().await.map_err(|source| {
            warn!("feed body read failed for {url}: {source}");
            Error::FeedUnavailable {
                url: url.to_string(),
                source,
            }
        })
    }
}

impl Default for FeedClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Extracts event records from a parsed feed, skipping malformed features
pub fn extract_event_records(collection: &FeedCollection) -> Vec<EventRecord> {
    collection
        .features
        .iter()
        .filter_map(|feature| match EventRecord::from_feature(feature) {
            Ok(record) => Some(record),
            Err(err) => {
                debug!("skipping earthquake feature: {err}");
                None
            }
        })
        .collect()
}

/// Extracts plate boundaries from a parsed feed, skipping malformed features
pub fn extract_plate_boundaries(collection: &FeedCollection) -> Vec<PlateBoundary> {
    collection
        .features
        .iter()
        .filter_map(|feature| match PlateBoundary::from_feature(feature) {
            Ok(boundary) => Some(boundary),
            Err(err) => {
                debug!("skipping boundary feature: {err}");
                None
            }
        })
        .collect()
}
