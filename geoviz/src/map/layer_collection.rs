use std::ops::Index;

use crate::layer::Layer;

/// Collection of layers with some meta-information.
///
/// When a map is rendered, it draws all visible layers in the order they are stored in the
/// collection. Any layer can be temporary hidden with the [`LayerCollection::hide`] method. These
/// layers will be ignored by the renderer, but retain their place in the collection.
///
/// Since a map should be able to render anything implementing the [`Layer`] trait, this
/// collection stores layers as trait objects. You can use downcasting through `Any` trait
/// to obtain a concrete layer type you work with.
#[derive(Default)]
pub struct LayerCollection(Vec<LayerEntry>);

struct LayerEntry {
    layer: Box<dyn Layer>,
    is_hidden: bool,
}

impl LayerCollection {
    /// Adds a layer at the top of the collection.
    pub fn push(&mut self, layer: impl Layer + 'static) {
        self.0.push(LayerEntry {
            layer: Box::new(layer),
            is_hidden: false,
        });
    }

    /// Number of layers, including the hidden ones.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the collection has no layers.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns a layer by its index.
    pub fn get(&self, index: usize) -> Option<&dyn Layer> {
        self.0.get(index).map(|entry| &*entry.layer)
    }

    /// Iterates over all layers, including the hidden ones.
    pub fn iter(&self) -> impl Iterator<Item = &dyn Layer> + '_ {
        self.0.iter().map(|entry| &*entry.layer)
    }

    /// Iterates over the layers that will be rendered.
    pub fn iter_visible(&self) -> impl Iterator<Item = &dyn Layer> + '_ {
        self.0
            .iter()
            .filter(|entry| !entry.is_hidden)
            .map(|entry| &*entry.layer)
    }

    /// Hides the layer at `index`. Does nothing if there is no such layer.
    pub fn hide(&mut self, index: usize) {
        if let Some(entry) = self.0.get_mut(index) {
            entry.is_hidden = true;
        }
    }

    /// Makes the layer at `index` visible again. Does nothing if there is no such layer.
    pub fn show(&mut self, index: usize) {
        if let Some(entry) = self.0.get_mut(index) {
            entry.is_hidden = false;
        }
    }

    /// Returns true if the layer exists and is not hidden.
    pub fn is_visible(&self, index: usize) -> bool {
        self.0.get(index).is_some_and(|entry| !entry.is_hidden)
    }
}

impl<L: Layer + 'static> From<Vec<L>> for LayerCollection {
    fn from(value: Vec<L>) -> Self {
        Self(
            value
                .into_iter()
                .map(|layer| LayerEntry {
                    layer: Box::new(layer),
                    is_hidden: false,
                })
                .collect(),
        )
    }
}

impl From<Vec<Box<dyn Layer>>> for LayerCollection {
    fn from(value: Vec<Box<dyn Layer>>) -> Self {
        Self(
            value
                .into_iter()
                .map(|layer| LayerEntry {
                    layer,
                    is_hidden: false,
                })
                .collect(),
        )
    }
}

impl Index<usize> for LayerCollection {
    type Output = dyn Layer;

    fn index(&self, index: usize) -> &Self::Output {
        &*self.0[index].layer
    }
}
