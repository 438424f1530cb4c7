//! [`RasterTileLayer`] shows prerendered XYZ tiles as the map background.

use std::any::Any;
use std::collections::HashMap;

use crate::error::GeovizError;
use crate::layer::attribution::Attribution;
use crate::layer::Layer;
use crate::render::Canvas;

mod builder;
mod tile_style;

pub use builder::RasterTileLayerBuilder;
pub use tile_style::TileStyle;

/// Index of a tile in the XYZ tile scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TileIndex {
    /// Column.
    pub x: u32,
    /// Row, counted from the north.
    pub y: u32,
    /// Z-level.
    pub z: u32,
}

impl TileIndex {
    /// Creates a new index.
    pub fn new(x: u32, y: u32, z: u32) -> Self {
        Self { x, y, z }
    }
}

/// Raster tile background layer.
///
/// The tiles are not downloaded by this crate: the layer only describes the tile service, and the
/// browser side map requests the tiles it needs.
#[derive(Debug, Clone, PartialEq)]
pub struct RasterTileLayer {
    url_template: String,
    attribution: Option<Attribution>,
    max_zoom: u32,
    subdomains: Option<String>,
}

impl RasterTileLayer {
    pub(crate) fn new_raw(
        url_template: String,
        attribution: Option<Attribution>,
        max_zoom: u32,
        subdomains: Option<String>,
    ) -> Self {
        Self {
            url_template,
            attribution,
            max_zoom,
            subdomains,
        }
    }

    /// Creates a layer for one of the known tile styles.
    pub fn from_style(style: &TileStyle) -> Self {
        Self::new_raw(
            style.url_template().to_string(),
            style.attribution(),
            style.max_zoom(),
            None,
        )
    }

    /// URL template with `{z}`, `{x}`, `{y}` and optionally `{s}` placeholders.
    pub fn url_template(&self) -> &str {
        &self.url_template
    }

    /// Highest zoom level the tiles are requested for.
    pub fn max_zoom(&self) -> u32 {
        self.max_zoom
    }

    /// Subdomain letters substituted for `{s}`, if the template uses them.
    pub fn subdomains(&self) -> Option<&str> {
        self.subdomains.as_deref()
    }

    /// Formats the URL of a single tile.
    pub fn tile_url(&self, index: &TileIndex) -> Result<String, GeovizError> {
        let subdomain = self
            .subdomains
            .as_deref()
            .and_then(|s| {
                let count = s.chars().count();
                s.chars().nth((index.x + index.y) as usize % count.max(1))
            })
            .unwrap_or('a');

        let mut vars = HashMap::new();
        vars.insert("x".to_string(), index.x.to_string());
        vars.insert("y".to_string(), index.y.to_string());
        vars.insert("z".to_string(), index.z.to_string());
        vars.insert("s".to_string(), subdomain.to_string());

        strfmt::strfmt(&self.url_template, &vars)
            .map_err(|err| GeovizError::Configuration(format!("invalid tile url template: {err}")))
    }
}

impl Default for RasterTileLayer {
    fn default() -> Self {
        Self::from_style(&TileStyle::default())
    }
}

impl Layer for RasterTileLayer {
    fn render(&self, canvas: &mut dyn Canvas) -> Result<(), GeovizError> {
        canvas.draw_tile_layer(self)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn attribution(&self) -> Option<Attribution> {
        self.attribution.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn osm_tile_url() {
        let layer = RasterTileLayer::default();
        let url = layer.tile_url(&TileIndex::new(655, 1583, 12)).expect("valid");
        assert_eq!(url, "https://tile.openstreetmap.org/12/655/1583.png");
    }

    #[test]
    fn stamen_toner_tile_url() {
        let layer = RasterTileLayer::from_style(&TileStyle::StamenToner);
        let url = layer.tile_url(&TileIndex::new(7, 7, 4)).expect("valid");
        assert_eq!(
            url,
            "https://tiles.stadiamaps.com/tiles/stamen_toner/4/7/7.png"
        );
        assert_eq!(layer.max_zoom(), 20);
    }

    #[test]
    fn subdomains_rotate_with_index() {
        let layer = RasterTileLayer::new_raw(
            "https://{s}.tiles.example.com/{z}/{x}/{y}.png".to_string(),
            None,
            18,
            Some("abc".to_string()),
        );

        let a = layer.tile_url(&TileIndex::new(0, 0, 1)).expect("valid");
        let b = layer.tile_url(&TileIndex::new(1, 0, 1)).expect("valid");
        assert_eq!(a, "https://a.tiles.example.com/1/0/0.png");
        assert_eq!(b, "https://b.tiles.example.com/1/1/0.png");
    }

    #[test]
    fn layer_exposes_attribution() {
        let layer = RasterTileLayer::from_style(&TileStyle::StamenTerrain);
        assert!(layer.attribution().is_some());
        assert!(layer.as_any().downcast_ref::<RasterTileLayer>().is_some());
    }
}
