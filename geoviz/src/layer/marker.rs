//! Point annotations: pins ([`Marker`]) and circles ([`CircleMarker`]), with optional [`Popup`]s.

use std::any::Any;

use geoviz_types::{GeoBoundingBox, GeoPoint, GeoPoint2d};
use serde::Serialize;

use crate::color::Color;
use crate::error::GeovizError;
use crate::layer::Layer;
use crate::render::Canvas;

/// Default popup width in pixels, the same as Leaflet uses.
pub const DEFAULT_POPUP_WIDTH: u32 = 300;

/// Text shown when the user clicks an annotation.
///
/// The content is plain text: it is escaped when rendered, so category names like
/// `LARCENY/THEFT` or `<unknown>` display verbatim.
#[derive(Debug, Clone, PartialEq)]
pub struct Popup {
    content: String,
    max_width: u32,
}

impl Popup {
    /// Creates a popup with the given text.
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            max_width: DEFAULT_POPUP_WIDTH,
        }
    }

    /// Sets maximum width of the popup in pixels.
    pub fn with_max_width(mut self, max_width: u32) -> Self {
        self.max_width = max_width;
        self
    }

    /// Popup text.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Maximum width in pixels.
    pub fn max_width(&self) -> u32 {
        self.max_width
    }
}

impl From<&str> for Popup {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Popup {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

/// A pin at a geographic point.
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    position: GeoPoint2d,
    popup: Option<Popup>,
    tooltip: Option<String>,
}

impl Marker {
    /// Creates a marker without popup.
    pub fn new(position: &impl GeoPoint<Num = f64>) -> Self {
        Self {
            position: GeoPoint2d::from(position),
            popup: None,
            tooltip: None,
        }
    }

    /// Attaches a popup to the marker.
    pub fn with_popup(mut self, popup: impl Into<Popup>) -> Self {
        self.popup = Some(popup.into());
        self
    }

    /// Attaches a hover tooltip to the marker.
    pub fn with_tooltip(mut self, tooltip: impl Into<String>) -> Self {
        self.tooltip = Some(tooltip.into());
        self
    }

    /// Position of the marker.
    pub fn position(&self) -> GeoPoint2d {
        self.position
    }

    /// Popup of the marker.
    pub fn popup(&self) -> Option<&Popup> {
        self.popup.as_ref()
    }

    /// Tooltip of the marker.
    pub fn tooltip(&self) -> Option<&str> {
        self.tooltip.as_deref()
    }
}

impl Layer for Marker {
    fn render(&self, canvas: &mut dyn Canvas) -> Result<(), GeovizError> {
        canvas.draw_marker(self)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn feature_count(&self) -> usize {
        1
    }

    fn extent(&self) -> Option<GeoBoundingBox> {
        GeoBoundingBox::from_points([self.position].iter())
    }
}

/// Paint of a [`CircleMarker`]. Serializes to Leaflet path options.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CircleStyle {
    /// Radius in pixels.
    pub radius: f64,
    /// Stroke color.
    pub color: Color,
    /// Stroke width in pixels.
    pub weight: f64,
    /// Stroke opacity.
    pub opacity: f64,
    /// Whether the circle is filled.
    pub fill: bool,
    /// Fill color. The stroke color is used if not set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill_color: Option<Color>,
    /// Fill opacity.
    pub fill_opacity: f64,
}

impl Default for CircleStyle {
    fn default() -> Self {
        Self {
            radius: 10.0,
            color: Color::LEAFLET_BLUE,
            weight: 3.0,
            opacity: 1.0,
            fill: true,
            fill_color: None,
            fill_opacity: 0.2,
        }
    }
}

/// A circle with a radius in screen pixels, so it keeps its size at every zoom level.
#[derive(Debug, Clone, PartialEq)]
pub struct CircleMarker {
    position: GeoPoint2d,
    style: CircleStyle,
    popup: Option<Popup>,
}

impl CircleMarker {
    /// Creates a circle marker with the given paint.
    pub fn new(position: &impl GeoPoint<Num = f64>, style: CircleStyle) -> Self {
        Self {
            position: GeoPoint2d::from(position),
            style,
            popup: None,
        }
    }

    /// Attaches a popup to the circle.
    pub fn with_popup(mut self, popup: impl Into<Popup>) -> Self {
        self.popup = Some(popup.into());
        self
    }

    /// Position of the circle center.
    pub fn position(&self) -> GeoPoint2d {
        self.position
    }

    /// Paint of the circle.
    pub fn style(&self) -> &CircleStyle {
        &self.style
    }

    /// Popup of the circle.
    pub fn popup(&self) -> Option<&Popup> {
        self.popup.as_ref()
    }
}

impl Layer for CircleMarker {
    fn render(&self, canvas: &mut dyn Canvas) -> Result<(), GeovizError> {
        canvas.draw_circle_marker(self)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn feature_count(&self) -> usize {
        1
    }

    fn extent(&self) -> Option<GeoBoundingBox> {
        GeoBoundingBox::from_points([self.position].iter())
    }
}

#[cfg(test)]
mod tests {
    use geoviz_types::latlon;

    use super::*;

    #[test]
    fn circle_style_as_leaflet_options() {
        let style = CircleStyle {
            radius: 5.0,
            color: Color::YELLOW,
            fill_color: Some(Color::BLUE),
            fill_opacity: 0.6,
            ..Default::default()
        };

        let json = serde_json::to_string(&style).expect("serializable");
        assert_eq!(
            json,
            r##"{"radius":5.0,"color":"#FFFF00","weight":3.0,"opacity":1.0,"fill":true,"fillColor":"#0000FF","fillOpacity":0.6}"##
        );
    }

    #[test]
    fn default_fill_color_is_omitted() {
        let json = serde_json::to_string(&CircleStyle::default()).expect("serializable");
        assert!(!json.contains("fillColor"));
    }

    #[test]
    fn marker_keeps_popup_and_tooltip() {
        let marker = Marker::new(&latlon!(37.77, -122.42))
            .with_popup("LARCENY/THEFT")
            .with_tooltip("click me");

        assert_eq!(marker.position(), latlon!(37.77, -122.42));
        assert_eq!(marker.popup().map(Popup::content), Some("LARCENY/THEFT"));
        assert_eq!(marker.popup().map(Popup::max_width), Some(DEFAULT_POPUP_WIDTH));
        assert_eq!(marker.tooltip(), Some("click me"));
    }

    #[test]
    fn circle_extent_is_its_position() {
        let circle = CircleMarker::new(&latlon!(37.77, -122.42), CircleStyle::default());
        let extent = circle.extent().expect("has extent");

        assert_eq!(extent.center(), latlon!(37.77, -122.42));
        assert_eq!(circle.feature_count(), 1);
        assert!(circle.popup().is_none());
    }
}
