use crate::core::geo::LatLngBounds;
use crate::render::RenderSurface;
use crate::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LayerKind {
    Tile,
    Earthquake,
    PlateBoundary,
}

impl std::fmt::Display for LayerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LayerKind::Tile => write!(f, "tile"),
            LayerKind::Earthquake => write!(f, "earthquake"),
            LayerKind::PlateBoundary => write!(f, "plate-boundary"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct LayerProperties {
    pub id: String,
    pub name: String,
    pub kind: LayerKind,
    pub z_index: i32,
    pub visible: bool,
}

impl LayerProperties {
    pub fn new(id: impl Into<String>, name: impl Into<String>, kind: LayerKind) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind,
            z_index: 0,
            visible: true,
        }
    }
}

/// Common interface of all map layers.
///
/// Implementors expose their shared properties through the two accessors;
/// everything else has a default in terms of those.
pub trait Layer: Send + Sync {
    fn properties(&self) -> &LayerProperties;
    fn properties_mut(&mut self) -> &mut LayerProperties;

    fn id(&self) -> &str {
        &self.properties().id
    }

    fn name(&self) -> &str {
        &self.properties().name
    }

    fn kind(&self) -> LayerKind {
        self.properties().kind
    }

    fn z_index(&self) -> i32 {
        self.properties().z_index
    }

    fn set_z_index(&mut self, z_index: i32) {
        self.properties_mut().z_index = z_index;
    }

    fn is_visible(&self) -> bool {
        self.properties().visible
    }

    fn set_visible(&mut self, visible: bool) {
        self.properties_mut().visible = visible;
    }

    /// Bounding box of the layer's data, if it has any
    fn bounds(&self) -> Option<LatLngBounds> {
        None
    }

    /// Draws the layer onto the rendering surface
    fn draw(&self, surface: &mut dyn RenderSurface) -> Result<()>;

    /// Dynamic casting support
    fn as_any(&self) -> &dyn std::any::Any;
    fn as_any_mut(&mut self) -> &mut dyn std::any::Any;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layer_properties() {
        let props = LayerProperties::new("quakes", "Earthquakes", LayerKind::Earthquake);
        assert_eq!(props.id, "quakes");
        assert_eq!(props.name, "Earthquakes");
        assert_eq!(props.kind, LayerKind::Earthquake);
        assert_eq!(props.z_index, 0);
        assert!(props.visible);
    }

    #[test]
    fn test_layer_kind_display() {
        assert_eq!(LayerKind::Tile.to_string(), "tile");
        assert_eq!(LayerKind::Earthquake.to_string(), "earthquake");
        assert_eq!(LayerKind::PlateBoundary.to_string(), "plate-boundary");
    }
}
