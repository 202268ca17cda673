//! Map session
//!
//! A session owns the layer stack, the legend, and the layer-control state
//! for one map view. Feeds are loaded per layer: a failing feed leaves its
//! layer empty and surfaces the error, while every other layer stays
//! usable.

use log::info;

use crate::core::builder::SessionBuilder;
use crate::core::config::MapConfig;
use crate::core::geo::LatLngBounds;
use crate::data::fetch::FeedClient;
use crate::data::records::{EventRecord, PlateBoundary};
use crate::layers::base::Layer;
use crate::layers::earthquakes::EarthquakeLayer;
use crate::layers::manager::LayerManager;
use crate::layers::plates::PlateBoundaryLayer;
use crate::layers::tile::TileLayer;
use crate::render::RenderSurface;
use crate::ui::controls::{LayerControl, LayerToggle, LegendPanel};
use crate::{Error, Result};

pub const EARTHQUAKE_LAYER_ID: &str = "earthquakes";
pub const PLATE_LAYER_ID: &str = "tectonic-plates";

pub struct MapSession {
    config: MapConfig,
    layers: LayerManager,
    legend: LegendPanel,
}

impl MapSession {
    pub fn builder() -> SessionBuilder {
        SessionBuilder::new()
    }

    pub(crate) fn assemble(
        config: MapConfig,
        base_layers: Vec<TileLayer>,
        plate_overlay: bool,
    ) -> Result<Self> {
        let mut layers = LayerManager::new();

        if base_layers.is_empty() {
            layers.add_base_layer(TileLayer::street())?;
        } else {
            for layer in base_layers {
                layers.add_base_layer(layer)?;
            }
        }

        layers.add_overlay(Box::new(EarthquakeLayer::new(
            EARTHQUAKE_LAYER_ID,
            "Earthquakes",
        )))?;

        if plate_overlay {
            layers.add_overlay(Box::new(PlateBoundaryLayer::new(
                PLATE_LAYER_ID,
                "Tectonic Plates",
            )))?;
        }

        let legend = LegendPanel::depth_scale(config.legend_position);

        Ok(Self {
            config,
            layers,
            legend,
        })
    }

    pub fn config(&self) -> &MapConfig {
        &self.config
    }

    pub fn layers(&self) -> &LayerManager {
        &self.layers
    }

    pub fn legend(&self) -> &LegendPanel {
        &self.legend
    }

    pub fn has_plate_overlay(&self) -> bool {
        self.layers.overlay(PLATE_LAYER_ID).is_some()
    }

    /// Fetches the earthquake feed and fills the earthquake overlay.
    /// Returns the number of usable records.
    pub async fn load_earthquakes(&mut self, client: &FeedClient) -> Result<usize> {
        let url = self.config.earthquake_feed_url.clone();
        let records = client.fetch_earthquakes(&url).await?;
        let count = records.len();
        self.set_earthquake_records(records)?;
        info!("earthquake overlay loaded with {count} events");
        Ok(count)
    }

    /// Fetches the plate feed and fills the plate overlay. Returns the
    /// number of boundary features.
    pub async fn load_plate_boundaries(&mut self, client: &FeedClient) -> Result<usize> {
        if !self.has_plate_overlay() {
            return Err(Error::Layer(
                "plate overlay is not registered on this session".to_string(),
            ));
        }

        let url = self.config.plate_feed_url.clone();
        let boundaries = client.fetch_plate_boundaries(&url).await?;
        let count = boundaries.len();
        self.set_plate_boundaries(boundaries)?;
        info!("plate overlay loaded with {count} boundaries");
        Ok(count)
    }

    /// Replaces the earthquake overlay's records
    pub fn set_earthquake_records(&mut self, records: Vec<EventRecord>) -> Result<()> {
        self.layers
            .with_overlay_mut(EARTHQUAKE_LAYER_ID, |layer| {
                match layer.as_any_mut().downcast_mut::<EarthquakeLayer>() {
                    Some(quakes) => {
                        quakes.set_records(records);
                        Ok(())
                    }
                    None => Err(Error::Layer(format!(
                        "layer {EARTHQUAKE_LAYER_ID} is not an earthquake layer"
                    ))),
                }
            })
            .ok_or_else(|| Error::Layer("earthquake overlay is not registered".to_string()))?
    }

    /// Replaces the plate overlay's boundaries
    pub fn set_plate_boundaries(&mut self, boundaries: Vec<PlateBoundary>) -> Result<()> {
        self.layers
            .with_overlay_mut(PLATE_LAYER_ID, |layer| {
                match layer.as_any_mut().downcast_mut::<PlateBoundaryLayer>() {
                    Some(plates) => {
                        plates.set_boundaries(boundaries);
                        Ok(())
                    }
                    None => Err(Error::Layer(format!(
                        "layer {PLATE_LAYER_ID} is not a plate layer"
                    ))),
                }
            })
            .ok_or_else(|| {
                Error::Layer("plate overlay is not registered on this session".to_string())
            })?
    }

    /// Shows or hides an overlay
    pub fn set_overlay_visible(&mut self, id: &str, visible: bool) -> Result<()> {
        self.layers.set_overlay_visible(id, visible)
    }

    /// Switches the active base map
    pub fn select_base_layer(&mut self, id: &str) -> Result<()> {
        self.layers.select_base_layer(id)
    }

    /// Current layer-control state for the rendering surface
    pub fn layer_control(&self) -> LayerControl {
        let active_base = self.layers.active_base_id();

        LayerControl {
            base_layers: self
                .layers
                .base_layers()
                .iter()
                .map(|layer| LayerToggle {
                    id: layer.id().to_string(),
                    name: layer.name().to_string(),
                    active: active_base == Some(layer.id()),
                })
                .collect(),
            overlays: self
                .layers
                .overlays()
                .map(|layer| LayerToggle {
                    id: layer.id().to_string(),
                    name: layer.name().to_string(),
                    active: layer.is_visible(),
                })
                .collect(),
            collapsed: self.config.layer_control_collapsed,
        }
    }

    /// Bounding box of all overlay data currently loaded
    pub fn data_bounds(&self) -> Option<LatLngBounds> {
        let mut bounds: Option<LatLngBounds> = None;
        for overlay in self.layers.overlays() {
            if let Some(overlay_bounds) = overlay.bounds() {
                bounds = Some(match bounds {
                    Some(acc) => acc.union(&overlay_bounds),
                    None => overlay_bounds,
                });
            }
        }
        bounds
    }

    /// Draws the session: active base map, visible overlays in z order,
    /// then the legend and the layer control.
    pub fn render(&self, surface: &mut dyn RenderSurface) -> Result<()> {
        if let Some(base) = self.layers.active_base_layer() {
            base.draw(surface)?;
        }

        for overlay in self.layers.overlays() {
            if overlay.is_visible() {
                overlay.draw(surface)?;
            }
        }

        surface.show_legend(&self.legend)?;
        surface.show_layer_control(&self.layer_control())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::geo::LatLng;
    use crate::render::RecordingSurface;

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
    fn test_render_pipeline() {
        let mut session = MapSession::builder()
            .with_standard_base_layers()
            .with_plate_overlay()
            .build()
            .unwrap();

        session
            .set_earthquake_records(vec![record(Some(5.2), 45.0, 35.0, -117.0)])
            .unwrap();
        session
            .set_plate_boundaries(vec![PlateBoundary {
                segments: vec![vec![LatLng::new(0.0, 0.0), LatLng::new(1.0, 1.0)]],
            }])
            .unwrap();

        let mut surface = RecordingSurface::new();
        session.render(&mut surface).unwrap();

        assert_eq!(surface.tile_layers.len(), 1);
        assert!(surface.tile_layers[0].0.contains("openstreetmap.org"));
        assert_eq!(surface.markers.len(), 1);
        assert_eq!(surface.markers[0].style.fill_color, "#ffcc33");
        assert_eq!(surface.polylines.len(), 1);
        assert_eq!(surface.polylines[0].1.color, "#ffa500");
        assert_eq!(surface.legend.as_ref().unwrap().entries.len(), 6);
        assert!(surface.layer_control.is_some());
    }

    #[test]
    fn test_hidden_overlay_is_not_drawn() {
        let mut session = MapSession::builder().build().unwrap();
        session
            .set_earthquake_records(vec![record(Some(1.0), 5.0, 10.0, 20.0)])
            .unwrap();
        session
            .set_overlay_visible(EARTHQUAKE_LAYER_ID, false)
            .unwrap();

        let mut surface = RecordingSurface::new();
        session.render(&mut surface).unwrap();
        assert!(surface.markers.is_empty());

        // the control still lists the overlay, now inactive
        let control = surface.layer_control.unwrap();
        assert_eq!(control.overlays.len(), 1);
        assert!(!control.overlays[0].active);
    }

    #[test]
    fn test_base_layer_switch_changes_rendered_tiles() {
        let mut session = MapSession::builder()
            .with_standard_base_layers()
            .build()
            .unwrap();

        session.select_base_layer("greyscale").unwrap();

        let mut surface = RecordingSurface::new();
        session.render(&mut surface).unwrap();
        assert!(surface.tile_layers[0].0.contains("cartocdn"));
    }

    #[test]
    fn test_plate_data_requires_registered_overlay() {
        let mut session = MapSession::builder().build().unwrap();
        let result = session.set_plate_boundaries(vec![]);
        assert!(matches!(result, Err(Error::Layer(_))));
    }

    #[test]
    fn test_data_bounds_span_overlays() {
        let mut session = MapSession::builder().with_plate_overlay().build().unwrap();
        session
            .set_earthquake_records(vec![record(Some(1.0), 5.0, 10.0, 20.0)])
            .unwrap();
        session
            .set_plate_boundaries(vec![PlateBoundary {
                segments: vec![vec![LatLng::new(-30.0, -40.0)]],
            }])
            .unwrap();

        let bounds = session.data_bounds().unwrap();
        assert_eq!(bounds.south_west, LatLng::new(-30.0, -40.0));
        assert_eq!(bounds.north_east, LatLng::new(10.0, 20.0));
    }
}
