//! Rendering of a [`Map`](crate::Map) into an interactive document.
//!
//! Layers do not know about the output format: they draw themselves through the [`Canvas`] trait.
//! [`LeafletCanvas`] implements it by writing a Leaflet script, and [`HtmlRenderer`] wraps that
//! script into a standalone HTML page.

use std::path::Path;

use log::info;

use crate::error::GeovizError;
use crate::layer::{CircleMarker, FeatureGroup, Marker, RasterTileLayer};
use crate::map::Map;

mod leaflet;

pub use leaflet::{LeafletCanvas, LEAFLET_VERSION};

/// Drawing surface for layers.
///
/// Calls to `begin_group` and `end_group` are balanced; everything drawn between them belongs to
/// the group.
pub trait Canvas {
    /// Adds a tile background.
    fn draw_tile_layer(&mut self, layer: &RasterTileLayer) -> Result<(), GeovizError>;
    /// Adds a pin marker.
    fn draw_marker(&mut self, marker: &Marker) -> Result<(), GeovizError>;
    /// Adds a circle marker.
    fn draw_circle_marker(&mut self, marker: &CircleMarker) -> Result<(), GeovizError>;
    /// Starts a feature group.
    fn begin_group(&mut self, group: &FeatureGroup) -> Result<(), GeovizError>;
    /// Closes the innermost open feature group.
    fn end_group(&mut self) -> Result<(), GeovizError>;
}

/// Renders maps into standalone HTML documents.
#[derive(Debug, Clone)]
pub struct HtmlRenderer {
    title: String,
}

impl Default for HtmlRenderer {
    fn default() -> Self {
        Self {
            title: "geoviz".to_string(),
        }
    }
}

impl HtmlRenderer {
    /// Creates a renderer that sets the given document title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }

    /// Document title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Renders the map into an HTML document. Hidden layers are skipped.
    pub fn render(&self, map: &Map) -> Result<String, GeovizError> {
        let mut canvas = LeafletCanvas::new(map.view())?;
        for layer in map.layers().iter_visible() {
            layer.render(&mut canvas)?;
        }

        let script = canvas.finish()?;
        Ok(self.document(LeafletCanvas::MAP_ID, &script))
    }

    /// Renders the map and writes the document to the given file.
    pub fn save(&self, map: &Map, path: impl AsRef<Path>) -> Result<(), GeovizError> {
        let html = self.render(map)?;
        std::fs::write(path.as_ref(), html).map_err(|err| {
            GeovizError::FsIo(format!("failed to write {:?}: {err}", path.as_ref()))
        })?;
        info!("Saved map to {:?}", path.as_ref());

        Ok(())
    }

    fn document(&self, map_id: &str, script: &str) -> String {
        format!(
            r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8" />
    <meta name="viewport" content="width=device-width, initial-scale=1.0" />
    <title>{title}</title>
    <link rel="stylesheet" href="https://unpkg.com/leaflet@{version}/dist/leaflet.css" />
    <script src="https://unpkg.com/leaflet@{version}/dist/leaflet.js"></script>
    <style>
        html, body {{ width: 100%; height: 100%; margin: 0; padding: 0; }}
        #{map_id} {{ position: absolute; top: 0; bottom: 0; left: 0; right: 0; }}
    </style>
</head>
<body>
    <div id="{map_id}"></div>
    <script>
{script}    </script>
</body>
</html>
"#,
            title = escape_html(&self.title),
            version = LEAFLET_VERSION,
        )
    }
}

/// Escapes the characters that have special meaning in HTML text and attribute values.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }

    escaped
}
