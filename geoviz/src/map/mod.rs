use std::path::Path;

use geoviz_types::GeoBoundingBox;

use crate::error::GeovizError;
use crate::layer::attribution::Attribution;
use crate::layer::Layer;
use crate::render::HtmlRenderer;
use crate::view::MapView;

mod builder;
mod layer_collection;

pub use builder::MapBuilder;
pub use layer_collection::LayerCollection;

/// Default viewport size used to pick a zoom level for [`Map::fit_to_features`].
pub const DEFAULT_VIEWPORT: (u32, u32) = (1024, 768);

/// Map specifies a set of layers, and the view that should be rendered.
pub struct Map {
    view: MapView,
    layers: LayerCollection,
}

impl Map {
    /// Creates a new map.
    pub fn new(view: MapView, layers: Vec<Box<dyn Layer>>) -> Self {
        Self {
            view,
            layers: layers.into(),
        }
    }

    /// Current view of the map.
    pub fn view(&self) -> &MapView {
        &self.view
    }

    /// Changes the view of the map to the given one.
    pub fn set_view(&mut self, view: MapView) {
        self.view = view;
    }

    /// Returns the list of map's layers.
    pub fn layers(&self) -> &LayerCollection {
        &self.layers
    }

    /// Returns a mutable reference to the list of map's layers.
    pub fn layers_mut(&mut self) -> &mut LayerCollection {
        &mut self.layers
    }

    /// Adds a layer on top of the map.
    pub fn add_layer(&mut self, layer: impl Layer + 'static) -> &mut Self {
        self.layers.push(layer);
        self
    }

    /// Total number of point annotations in visible layers, counting inside feature groups.
    pub fn feature_count(&self) -> usize {
        self.layers.iter_visible().map(|l| l.feature_count()).sum()
    }

    /// Extent of all annotations in visible layers.
    pub fn extent(&self) -> Option<GeoBoundingBox> {
        self.layers
            .iter_visible()
            .filter_map(|l| l.extent())
            .reduce(|a, b| a.merge(b))
    }

    /// Changes the view to show all annotations in a viewport of [`DEFAULT_VIEWPORT`] size.
    ///
    /// Returns false and keeps the view if the map has no annotations or their extent cannot be
    /// projected.
    pub fn fit_to_features(&mut self) -> bool {
        let (width, height) = DEFAULT_VIEWPORT;
        match self
            .extent()
            .and_then(|bbox| MapView::fit(&bbox, width, height))
        {
            Some(view) => {
                self.view = view;
                true
            }
            None => false,
        }
    }

    /// Attributions of all visible layers.
    pub fn attributions(&self) -> Vec<Attribution> {
        self.layers
            .iter_visible()
            .filter_map(|l| l.attribution())
            .collect()
    }

    /// Renders the map into an HTML document with the default renderer.
    pub fn to_html(&self) -> Result<String, GeovizError> {
        HtmlRenderer::default().render(self)
    }

    /// Renders the map and writes it to the given file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), GeovizError> {
        HtmlRenderer::default().save(self, path)
    }
}

#[cfg(test)]
mod tests {
    use geoviz_types::{latlon, GeoPoint};

    use super::*;
    use crate::layer::{CircleMarker, CircleStyle, FeatureGroup, Marker};

    fn san_francisco_map() -> Map {
        let mut group = FeatureGroup::new();
        group.add_child(CircleMarker::new(&latlon!(37.70, -122.52), CircleStyle::default()));
        group.add_child(CircleMarker::new(&latlon!(37.82, -122.35), CircleStyle::default()));

        let mut map = MapBuilder::default().build();
        map.add_layer(group)
            .add_layer(Marker::new(&latlon!(37.76, -122.44)).with_popup("ASSAULT"));
        map
    }

    #[test]
    fn counts_features_in_groups() {
        let map = san_francisco_map();
        assert_eq!(map.layers().len(), 3);
        assert_eq!(map.feature_count(), 3);
        assert_eq!(
            map.extent(),
            Some(GeoBoundingBox::new(37.70, -122.52, 37.82, -122.35))
        );
    }

    #[test]
    fn fit_to_features_moves_view() {
        let mut map = san_francisco_map();
        assert!(map.fit_to_features());
        assert_eq!(map.view().zoom(), 12);
        assert!((map.view().center().lat() - 37.76).abs() < 0.01);
    }

    #[test]
    fn fit_without_features_keeps_view() {
        let mut map = MapBuilder::default().with_latlon(20.2, -1.4).build();
        let view = *map.view();
        assert!(!map.fit_to_features());
        assert_eq!(*map.view(), view);
    }

    #[test]
    fn attributions_of_visible_layers() {
        let mut map = san_francisco_map();
        assert_eq!(map.attributions().len(), 1);

        map.layers_mut().hide(0);
        assert!(map.attributions().is_empty());
    }

    #[test]
    fn to_html_renders_every_annotation() {
        let html = san_francisco_map().to_html().expect("renders");
        assert_eq!(html.matches("L.circleMarker(").count(), 2);
        assert_eq!(html.matches("L.marker(").count(), 1);
        assert_eq!(html.matches("L.featureGroup(").count(), 1);
    }
}
