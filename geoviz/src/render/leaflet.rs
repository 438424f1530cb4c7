use std::fmt::Write;

use serde::Serialize;

use super::{escape_html, Canvas};
use crate::error::GeovizError;
use crate::layer::{CircleMarker, FeatureGroup, Marker, Popup, RasterTileLayer};
use crate::view::MapView;

/// Version of Leaflet the generated documents load.
pub const LEAFLET_VERSION: &str = "1.9.4";

const INDENT: &str = "        ";

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct MapOptions {
    center: [f64; 2],
    zoom: u32,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TileLayerOptions<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    attribution: Option<String>,
    max_zoom: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    subdomains: Option<&'a str>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PopupOptions {
    max_width: u32,
}

/// [`Canvas`] that writes Leaflet statements.
///
/// Every object gets a variable named after its kind and a sequence number (`map_0`,
/// `tile_layer_1`, `circle_marker_2`...), so the same map always produces the same script.
pub struct LeafletCanvas {
    script: String,
    next_id: usize,
    parents: Vec<String>,
}

impl LeafletCanvas {
    /// Id of the map element and name of the map variable.
    pub const MAP_ID: &'static str = "map_0";

    /// Creates a canvas and writes the map initialization for the given view.
    pub fn new(view: &MapView) -> Result<Self, GeovizError> {
        let mut canvas = Self {
            script: String::new(),
            next_id: 1,
            parents: vec![Self::MAP_ID.to_string()],
        };

        let options = MapOptions {
            center: view.center().to_latlng_array(),
            zoom: view.zoom(),
        };
        canvas.statement(format_args!(
            "var {} = L.map({}, {});",
            Self::MAP_ID,
            js_value(&Self::MAP_ID)?,
            js_value(&options)?
        ));

        Ok(canvas)
    }

    /// Script written so far.
    pub fn script(&self) -> &str {
        &self.script
    }

    /// Consumes the canvas and returns the script. Fails if a feature group was left open.
    pub fn finish(self) -> Result<String, GeovizError> {
        if self.parents.len() != 1 {
            return Err(GeovizError::Configuration(format!(
                "{} feature group(s) not closed",
                self.parents.len() - 1
            )));
        }

        Ok(self.script)
    }

    fn statement(&mut self, line: std::fmt::Arguments<'_>) {
        // Writing into a String cannot fail.
        let _ = writeln!(self.script, "{INDENT}{line}");
    }

    fn next_var(&mut self, kind: &str) -> String {
        let var = format!("{kind}_{}", self.next_id);
        self.next_id += 1;
        var
    }

    fn parent(&self) -> &str {
        self.parents
            .last()
            .map(String::as_str)
            .unwrap_or(Self::MAP_ID)
    }

    fn bind_popup(&mut self, var: &str, popup: &Popup) -> Result<(), GeovizError> {
        let content = format!("<div>{}</div>", escape_html(popup.content()));
        let options = PopupOptions {
            max_width: popup.max_width(),
        };
        self.statement(format_args!(
            "{var}.bindPopup({}, {});",
            js_value(&content)?,
            js_value(&options)?
        ));

        Ok(())
    }
}

impl Canvas for LeafletCanvas {
    fn draw_tile_layer(&mut self, layer: &RasterTileLayer) -> Result<(), GeovizError> {
        let var = self.next_var("tile_layer");
        let options = TileLayerOptions {
            attribution: crate::layer::Layer::attribution(layer).map(|a| a.to_html()),
            max_zoom: layer.max_zoom(),
            subdomains: layer.subdomains(),
        };
        let parent = self.parent().to_string();
        self.statement(format_args!(
            "var {var} = L.tileLayer({}, {}).addTo({parent});",
            js_value(&layer.url_template())?,
            js_value(&options)?
        ));

        Ok(())
    }

    fn draw_marker(&mut self, marker: &Marker) -> Result<(), GeovizError> {
        let var = self.next_var("marker");
        let parent = self.parent().to_string();
        self.statement(format_args!(
            "var {var} = L.marker({}).addTo({parent});",
            js_value(&marker.position().to_latlng_array())?
        ));

        if let Some(popup) = marker.popup() {
            self.bind_popup(&var, popup)?;
        }

        if let Some(tooltip) = marker.tooltip() {
            let content = escape_html(tooltip);
            self.statement(format_args!("{var}.bindTooltip({});", js_value(&content)?));
        }

        Ok(())
    }

    fn draw_circle_marker(&mut self, marker: &CircleMarker) -> Result<(), GeovizError> {
        let var = self.next_var("circle_marker");
        let parent = self.parent().to_string();
        self.statement(format_args!(
            "var {var} = L.circleMarker({}, {}).addTo({parent});",
            js_value(&marker.position().to_latlng_array())?,
            js_value(marker.style())?
        ));

        if let Some(popup) = marker.popup() {
            self.bind_popup(&var, popup)?;
        }

        Ok(())
    }

    fn begin_group(&mut self, group: &FeatureGroup) -> Result<(), GeovizError> {
        let var = self.next_var("feature_group");
        let parent = self.parent().to_string();
        self.statement(format_args!(
            "var {var} = L.featureGroup().addTo({parent});"
        ));
        if let Some(name) = group.name() {
            self.statement(format_args!("{var}.options.name = {};", js_value(name)?));
        }
        self.parents.push(var);

        Ok(())
    }

    fn end_group(&mut self) -> Result<(), GeovizError> {
        if self.parents.len() <= 1 {
            return Err(GeovizError::Configuration(
                "end_group called without an open feature group".to_string(),
            ));
        }

        self.parents.pop();
        Ok(())
    }
}

/// Serializes a value as a JavaScript literal that is safe to embed in a `<script>` element.
///
/// U+2028 and U+2029 are valid raw in JSON strings but end the line in older JavaScript engines.
fn js_value<T: Serialize + ?Sized>(value: &T) -> Result<String, GeovizError> {
    Ok(serde_json::to_string(value)?
        .replace("</", "<\\/")
        .replace('\u{2028}', "\\u2028")
        .replace('\u{2029}', "\\u2029"))
}
