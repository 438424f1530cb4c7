use super::{RasterTileLayer, TileIndex, TileStyle};
use crate::error::GeovizError;
use crate::layer::attribution::Attribution;

/// Constructor for a [`RasterTileLayer`].
///
/// ```
/// use geoviz::layer::raster_tile_layer::RasterTileLayerBuilder;
///
/// let layer = RasterTileLayerBuilder::new_rest("https://{s}.tile.example.com/{z}/{x}/{y}.png")
///     .with_subdomains("abc")
///     .with_max_zoom(17)
///     .build()?;
/// # Ok::<(), geoviz::error::GeovizError>(())
/// ```
pub struct RasterTileLayerBuilder {
    url_template: String,
    attribution: Option<Attribution>,
    max_zoom: u32,
    subdomains: Option<String>,
}

impl RasterTileLayerBuilder {
    /// Initializes a builder for a layer that requests tiles by the given URL template.
    pub fn new_rest(url_template: impl Into<String>) -> Self {
        Self {
            url_template: url_template.into(),
            attribution: None,
            max_zoom: 18,
            subdomains: None,
        }
    }

    /// Initializes a builder with the URL, attribution and zoom limit of a known style.
    pub fn new_style(style: &TileStyle) -> Self {
        Self {
            url_template: style.url_template().to_string(),
            attribution: style.attribution(),
            max_zoom: style.max_zoom(),
            subdomains: None,
        }
    }

    /// Initializes a builder for the standard OpenStreetMap tiles.
    pub fn new_osm() -> Self {
        Self::new_style(&TileStyle::OpenStreetMap)
    }

    /// Sets the attribution shown for the layer.
    pub fn with_attribution(mut self, attribution: Attribution) -> Self {
        self.attribution = Some(attribution);
        self
    }

    /// Sets the highest zoom level tiles are requested for.
    pub fn with_max_zoom(mut self, max_zoom: u32) -> Self {
        self.max_zoom = max_zoom;
        self
    }

    /// Sets the subdomain letters used for the `{s}` placeholder.
    pub fn with_subdomains(mut self, subdomains: impl Into<String>) -> Self {
        self.subdomains = Some(subdomains.into());
        self
    }

    /// Consumes the builder and constructs the layer.
    ///
    /// Fails if the URL template misses one of the `{z}`, `{x}`, `{y}` placeholders, uses
    /// `{s}` without subdomains set, or contains any other placeholder.
    pub fn build(self) -> Result<RasterTileLayer, GeovizError> {
        let Self {
            url_template,
            attribution,
            max_zoom,
            subdomains,
        } = self;

        if let Some(missing) = ["{z}", "{x}", "{y}"]
            .iter()
            .find(|p| !url_template.contains(*p))
        {
            return Err(GeovizError::Configuration(format!(
                "tile url template must contain {missing} placeholder"
            )));
        }

        if url_template.contains("{s}") && subdomains.as_deref().map_or(true, str::is_empty) {
            return Err(GeovizError::Configuration(
                "tile url template uses {s} but no subdomains are set".to_string(),
            ));
        }

        let layer = RasterTileLayer::new_raw(url_template, attribution, max_zoom, subdomains);
        layer.tile_url(&TileIndex::new(0, 0, 0))?;

        Ok(layer)
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use insta::assert_compact_debug_snapshot;

    use super::*;

    #[test]
    fn osm_builder_matches_default_layer() {
        let layer = RasterTileLayerBuilder::new_osm().build().expect("valid");
        assert_eq!(layer, RasterTileLayer::default());
    }

    #[test]
    fn missing_placeholder_fails_build() {
        let result = RasterTileLayerBuilder::new_rest("https://tiles.example.com/{z}/{x}.png")
            .build()
            .map(|_| ());
        assert_compact_debug_snapshot!(result, @r#"Err(Configuration("tile url template must contain {y} placeholder"))"#);
    }

    #[test]
    fn subdomain_placeholder_requires_subdomains() {
        let result =
            RasterTileLayerBuilder::new_rest("https://{s}.tiles.example.com/{z}/{x}/{y}.png")
                .build()
                .map(|_| ());
        assert_compact_debug_snapshot!(result, @r#"Err(Configuration("tile url template uses {s} but no subdomains are set"))"#);
    }

    #[test]
    fn unknown_placeholder_fails_build() {
        let result =
            RasterTileLayerBuilder::new_rest("https://tiles.example.com/{z}/{x}/{y}{r}.png")
                .build();
        assert_matches!(result, Err(GeovizError::Configuration(message)) if message.starts_with("invalid tile url template"));
    }

    #[test]
    fn builder_sets_options() {
        let attribution = Attribution::new("Example", None);
        let layer = RasterTileLayerBuilder::new_rest("https://{s}.t.example.com/{z}/{x}/{y}.png")
            .with_subdomains("ab")
            .with_max_zoom(12)
            .with_attribution(attribution.clone())
            .build()
            .expect("valid");

        assert_eq!(layer.max_zoom(), 12);
        assert_eq!(layer.subdomains(), Some("ab"));
        assert_eq!(crate::layer::Layer::attribution(&layer), Some(attribution));
    }
}
