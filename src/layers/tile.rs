//! Base tile layers
//!
//! A tile source produces slippy-map tile URLs from a template with
//! subdomain rotation. The three presets are the base maps of the stock
//! earthquake visualization: street, satellite, and greyscale.

use crate::core::geo::TileCoord;
use crate::layers::base::{Layer, LayerKind, LayerProperties};
use crate::render::RenderSurface;
use crate::Result;

/// Trait representing anything that can produce tile URLs for a given coordinate.
pub trait TileSource: Send + Sync {
    /// URL template in `{s}`/`{z}`/`{x}`/`{y}` form, for renderers that
    /// expand tiles client-side
    fn url_template(&self) -> &str;

    /// Attribution text shown with the layer
    fn attribution(&self) -> &str;

    /// Build a URL for the requested `coord`.
    fn url(&self, coord: TileCoord) -> String;
}

/// Tile source backed by a URL template and a fixed subdomain set
pub struct TemplateTileSource {
    template: &'static str,
    subdomains: &'static [&'static str],
    attribution: &'static str,
}

impl TemplateTileSource {
    pub const fn new(
        template: &'static str,
        subdomains: &'static [&'static str],
        attribution: &'static str,
    ) -> Self {
        Self {
            template,
            subdomains,
            attribution,
        }
    }

    /// OpenStreetMap standard tiles
    pub fn street() -> Self {
        Self::new(
            "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png",
            &["a", "b", "c"],
            "© OpenStreetMap contributors",
        )
    }

    /// Humanitarian OSM tiles
    pub fn satellite() -> Self {
        Self::new(
            "https://{s}.tile.openstreetmap.fr/hot/{z}/{x}/{y}.png",
            &["a", "b", "c"],
            "© OSM Hot contributors",
        )
    }

    /// CARTO light greyscale tiles
    pub fn greyscale() -> Self {
        Self::new(
            "https://{s}.basemaps.cartocdn.com/light_all/{z}/{x}/{y}.png",
            &["a", "b", "c", "d"],
            "© CARTO",
        )
    }
}

impl TileSource for TemplateTileSource {
    fn url_template(&self) -> &str {
        self.template
    }

    fn attribution(&self) -> &str {
        self.attribution
    }

    fn url(&self, coord: TileCoord) -> String {
        let subdomain = if self.subdomains.is_empty() {
            ""
        } else {
            let idx = ((coord.x + coord.y) % self.subdomains.len() as u32) as usize;
            self.subdomains[idx]
        };

        self.template
            .replace("{s}", subdomain)
            .replace("{z}", &coord.z.to_string())
            .replace("{x}", &coord.x.to_string())
            .replace("{y}", &coord.y.to_string())
    }
}

/// A switchable base map layer
pub struct TileLayer {
    properties: LayerProperties,
    source: Box<dyn TileSource>,
}

impl TileLayer {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        source: Box<dyn TileSource>,
    ) -> Self {
        Self {
            properties: LayerProperties::new(id, name, LayerKind::Tile),
            source,
        }
    }

    pub fn street() -> Self {
        Self::new("street", "Street Map", Box::new(TemplateTileSource::street()))
    }

    pub fn satellite() -> Self {
        Self::new(
            "satellite",
            "Satellite Map",
            Box::new(TemplateTileSource::satellite()),
        )
    }

    pub fn greyscale() -> Self {
        Self::new(
            "greyscale",
            "Greyscale Map",
            Box::new(TemplateTileSource::greyscale()),
        )
    }

    pub fn source(&self) -> &dyn TileSource {
        self.source.as_ref()
    }
}

impl Layer for TileLayer {
    fn properties(&self) -> &LayerProperties {
        &self.properties
    }

    fn properties_mut(&mut self) -> &mut LayerProperties {
        &mut self.properties
    }

    fn draw(&self, surface: &mut dyn RenderSurface) -> Result<()> {
        surface.draw_tile_layer(self.source.url_template(), self.source.attribution())
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

    #[test]
    fn test_url_substitution() {
        let source = TemplateTileSource::street();
        let url = source.url(TileCoord::new(2, 1, 5));
        assert_eq!(url, "https://a.tile.openstreetmap.org/5/2/1.png");
    }

    #[test]
    fn test_subdomain_rotation() {
        let source = TemplateTileSource::street();
        let a = source.url(TileCoord::new(0, 0, 1));
        let b = source.url(TileCoord::new(1, 0, 1));
        let c = source.url(TileCoord::new(1, 1, 1));
        assert!(a.starts_with("https://a."));
        assert!(b.starts_with("https://b."));
        assert!(c.starts_with("https://c."));
    }

    #[test]
    fn test_preset_layers() {
        let street = TileLayer::street();
        assert_eq!(street.id(), "street");
        assert_eq!(street.name(), "Street Map");
        assert!(street.source().url_template().contains("openstreetmap.org"));

        let satellite = TileLayer::satellite();
        assert!(satellite.source().url_template().contains("/hot/"));

        let greyscale = TileLayer::greyscale();
        assert!(greyscale.source().url_template().contains("cartocdn"));
        assert_eq!(greyscale.source().attribution(), "© CARTO");
    }
}
