//! Layer bookkeeping for one map session
//!
//! Base layers are mutually exclusive: exactly one (the active one) is
//! drawn. Overlays are independently toggleable and draw above the active
//! base layer in z order.

use crate::layers::base::Layer;
use crate::layers::tile::TileLayer;
use crate::{Error, Result};

pub struct LayerManager {
    base_layers: Vec<TileLayer>,
    active_base: Option<String>,
    /// Overlays sorted by z-index, lowest first
    overlays: Vec<Box<dyn Layer>>,
}

impl LayerManager {
    pub fn new() -> Self {
        Self {
            base_layers: Vec::new(),
            active_base: None,
            overlays: Vec::new(),
        }
    }

    /// Registers a base layer. The first registered layer becomes active.
    pub fn add_base_layer(&mut self, layer: TileLayer) -> Result<()> {
        if self.base_layers.iter().any(|l| l.id() == layer.id()) {
            return Err(Error::Layer(format!(
                "duplicate base layer id: {}",
                layer.id()
            )));
        }

        if self.active_base.is_none() {
            self.active_base = Some(layer.id().to_string());
        }
        self.base_layers.push(layer);
        Ok(())
    }

    /// Makes the base layer with the given id the active one
    pub fn select_base_layer(&mut self, id: &str) -> Result<()> {
        if !self.base_layers.iter().any(|l| l.id() == id) {
            return Err(Error::Layer(format!("unknown base layer id: {id}")));
        }
        self.active_base = Some(id.to_string());
        Ok(())
    }

    pub fn active_base_layer(&self) -> Option<&TileLayer> {
        let id = self.active_base.as_deref()?;
        self.base_layers.iter().find(|l| l.id() == id)
    }

    pub fn active_base_id(&self) -> Option<&str> {
        self.active_base.as_deref()
    }

    pub fn base_layers(&self) -> &[TileLayer] {
        &self.base_layers
    }

    /// Registers an overlay above all existing ones
    pub fn add_overlay(&mut self, mut layer: Box<dyn Layer>) -> Result<()> {
        if self.overlays.iter().any(|l| l.id() == layer.id()) {
            return Err(Error::Layer(format!("duplicate overlay id: {}", layer.id())));
        }

        let next_z = self
            .overlays
            .last()
            .map(|l| l.z_index() + 1)
            .unwrap_or(0);
        layer.set_z_index(next_z);
        self.overlays.push(layer);
        Ok(())
    }

    /// Shows or hides the overlay with the given id
    pub fn set_overlay_visible(&mut self, id: &str, visible: bool) -> Result<()> {
        let layer = self
            .overlays
            .iter_mut()
            .find(|l| l.id() == id)
            .ok_or_else(|| Error::Layer(format!("unknown overlay id: {id}")))?;
        layer.set_visible(visible);
        Ok(())
    }

    pub fn overlay(&self, id: &str) -> Option<&dyn Layer> {
        self.overlays
            .iter()
            .find(|l| l.id() == id)
            .map(|l| l.as_ref())
    }

    /// Applies a function to a specific overlay mutably
    pub fn with_overlay_mut<F, R>(&mut self, id: &str, f: F) -> Option<R>
    where
        F: FnOnce(&mut dyn Layer) -> R,
    {
        self.overlays
            .iter_mut()
            .find(|l| l.id() == id)
            .map(|layer| f(layer.as_mut()))
    }

    /// Overlays in draw order (lowest z first)
    pub fn overlays(&self) -> impl Iterator<Item = &dyn Layer> {
        self.overlays.iter().map(|l| l.as_ref())
    }

    pub fn overlay_count(&self) -> usize {
        self.overlays.len()
    }
}

impl Default for LayerManager {
    fn default() -> Self {
        Self::new()
    }
}
