//! Turning incident records into map annotations.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use log::debug;

use crate::color::Color;
use crate::data::Incident;
use crate::error::GeovizError;
use crate::layer::{CircleMarker, CircleStyle, FeatureGroup, Marker, Popup};
use crate::map::Map;

/// Paint of the incident circles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IncidentStyle {
    /// Circle radius in pixels.
    pub radius: f64,
    /// Stroke color.
    pub color: Color,
    /// Whether circles are filled.
    pub fill: bool,
    /// Fill color.
    pub fill_color: Color,
    /// Fill opacity.
    pub fill_opacity: f64,
}

impl Default for IncidentStyle {
    fn default() -> Self {
        Self {
            radius: 5.0,
            color: Color::YELLOW,
            fill: true,
            fill_color: Color::BLUE,
            fill_opacity: 0.6,
        }
    }
}

impl From<IncidentStyle> for CircleStyle {
    fn from(style: IncidentStyle) -> Self {
        Self {
            radius: style.radius,
            color: style.color,
            fill: style.fill,
            fill_color: Some(style.fill_color),
            fill_opacity: style.fill_opacity,
            ..Default::default()
        }
    }
}

/// How incidents are attached to a map.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum OverlayVariant {
    /// A single feature group of circles without popups.
    #[default]
    Circles,
    /// A pin with the category popup per incident added directly to the map, then a feature
    /// group of circles.
    PinsAndCircles,
    /// Circles carrying the category popup, added directly to the map.
    CirclesWithPopups,
}

impl OverlayVariant {
    /// All variants in declaration order.
    pub const ALL: [OverlayVariant; 3] = [
        OverlayVariant::Circles,
        OverlayVariant::PinsAndCircles,
        OverlayVariant::CirclesWithPopups,
    ];

    fn name(&self) -> &'static str {
        match self {
            OverlayVariant::Circles => "circles",
            OverlayVariant::PinsAndCircles => "pins-and-circles",
            OverlayVariant::CirclesWithPopups => "circles-with-popups",
        }
    }
}

impl Display for OverlayVariant {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for OverlayVariant {
    type Err = GeovizError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        Self::ALL
            .into_iter()
            .find(|v| v.name() == normalized)
            .ok_or_else(|| GeovizError::Configuration(format!("unknown overlay variant '{s}'")))
    }
}

/// Builds circle and pin annotations for a list of incidents.
///
/// Annotations are added in the order of the incidents. Duplicate positions are kept.
#[derive(Debug, Default, Clone)]
pub struct IncidentOverlay {
    variant: OverlayVariant,
    style: IncidentStyle,
}

impl IncidentOverlay {
    /// Creates an overlay of the given variant with the default style.
    pub fn new(variant: OverlayVariant) -> Self {
        Self {
            variant,
            style: IncidentStyle::default(),
        }
    }

    /// Replaces the circle paint.
    pub fn with_style(mut self, style: IncidentStyle) -> Self {
        self.style = style;
        self
    }

    /// Variant of the overlay.
    pub fn variant(&self) -> OverlayVariant {
        self.variant
    }

    /// Circle paint.
    pub fn style(&self) -> &IncidentStyle {
        &self.style
    }

    /// Adds annotations for every incident to the map.
    pub fn add_to(&self, map: &mut Map, incidents: &[Incident]) {
        debug!(
            "Adding {} incidents to the map as {}",
            incidents.len(),
            self.variant
        );

        match self.variant {
            OverlayVariant::Circles => {
                map.add_layer(self.circle_group(incidents));
            }
            OverlayVariant::PinsAndCircles => {
                for incident in incidents {
                    map.add_layer(Marker::new(incident).with_popup(popup(incident)));
                }
                map.add_layer(self.circle_group(incidents));
            }
            OverlayVariant::CirclesWithPopups => {
                for incident in incidents {
                    map.add_layer(self.circle(incident).with_popup(popup(incident)));
                }
            }
        }
    }

    fn circle(&self, incident: &Incident) -> CircleMarker {
        CircleMarker::new(incident, self.style.into())
    }

    fn circle_group(&self, incidents: &[Incident]) -> FeatureGroup {
        let mut group = FeatureGroup::named("incidents");
        group.extend(incidents.iter().map(|incident| self.circle(incident)));
        group
    }
}

fn popup(incident: &Incident) -> Popup {
    Popup::new(incident.category.as_str())
}
