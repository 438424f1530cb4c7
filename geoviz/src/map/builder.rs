use geoviz_types::{latlon, GeoPoint, GeoPoint2d};

use super::Map;
use crate::layer::{Layer, RasterTileLayer, TileStyle};
use crate::view::{MapView, WORLD_ZOOM};

/// Convenience type to initialize a [Map].
///
/// ```
/// use geoviz::MapBuilder;
/// use geoviz::layer::TileStyle;
///
/// let map = MapBuilder::default()
///     .with_latlon(20.2, -1.4)
///     .with_zoom(4)
///     .with_tile_style(TileStyle::StamenToner)
///     .build();
/// ```
pub struct MapBuilder {
    position: Option<GeoPoint2d>,
    zoom: Option<u32>,
    tiles: Option<RasterTileLayer>,
    layers: Vec<Box<dyn Layer>>,
}

impl Default for MapBuilder {
    fn default() -> Self {
        Self {
            position: None,
            zoom: None,
            tiles: Some(RasterTileLayer::default()),
            layers: Vec::new(),
        }
    }
}

impl MapBuilder {
    /// Creates a builder with the default parameters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the center point of the map to the given geographical point.
    ///
    /// Replaces the value set by the [`MapBuilder::with_latlon()`] method.
    ///
    /// Defaults to [0, 0].
    pub fn with_position(mut self, position: impl GeoPoint<Num = f64>) -> Self {
        self.position = Some(GeoPoint2d::from(&position));
        self
    }

    /// Sets the center point of the map to the given geographical coordinates.
    ///
    /// Replaces the value set by the [`MapBuilder::with_position()`] method.
    pub fn with_latlon(self, lat: f64, lon: f64) -> Self {
        self.with_position(latlon!(lat, lon))
    }

    /// Sets the zoom level of the map.
    ///
    /// Defaults to [`WORLD_ZOOM`].
    pub fn with_zoom(mut self, zoom: u32) -> Self {
        self.zoom = Some(zoom);
        self
    }

    /// Sets both center and zoom from a view.
    pub fn with_view(self, view: MapView) -> Self {
        self.with_position(view.center()).with_zoom(view.zoom())
    }

    /// Selects the background tiles.
    ///
    /// Defaults to [`TileStyle::OpenStreetMap`].
    pub fn with_tile_style(mut self, style: TileStyle) -> Self {
        self.tiles = Some(RasterTileLayer::from_style(&style));
        self
    }

    /// Sets a custom background tile layer.
    pub fn with_tiles(mut self, tiles: RasterTileLayer) -> Self {
        self.tiles = Some(tiles);
        self
    }

    /// Creates the map without a background tile layer.
    pub fn without_tiles(mut self) -> Self {
        self.tiles = None;
        self
    }

    /// Adds a layer at the top of the map. The background tiles always stay at the bottom.
    pub fn with_layer(mut self, layer: impl Layer + 'static) -> Self {
        self.layers.push(Box::new(layer));
        self
    }

    /// Consumes the builder and creates a map instance.
    ///
    /// If some of the parameters are not specified before calling `build`, they will be set to the
    /// default values, which together give a view of the whole world.
    pub fn build(self) -> Map {
        let MapBuilder {
            position,
            zoom,
            tiles,
            layers,
        } = self;

        let view = MapView::new(
            &position.unwrap_or_default(),
            zoom.unwrap_or(WORLD_ZOOM),
        );

        let mut all_layers: Vec<Box<dyn Layer>> = Vec::with_capacity(layers.len() + 1);
        if let Some(tiles) = tiles {
            all_layers.push(Box::new(tiles));
        }
        all_layers.extend(layers);

        Map::new(view, all_layers)
    }
}
