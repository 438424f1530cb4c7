//! [Layers](Layer) are the parts a map is made of: tile backgrounds, markers and groups of them.

use std::any::Any;

use geoviz_types::GeoBoundingBox;

use crate::error::GeovizError;
use crate::layer::attribution::Attribution;
use crate::render::Canvas;

pub mod attribution;
pub mod feature_group;
pub mod marker;
pub mod raster_tile_layer;

pub use feature_group::FeatureGroup;
pub use marker::{CircleMarker, CircleStyle, Marker, Popup};
pub use raster_tile_layer::{RasterTileLayer, TileStyle};

/// Something that can be put on a map.
///
/// There are currently 4 types of layers:
/// * [`RasterTileLayer`] - background imagery from an XYZ tile service.
/// * [`Marker`] - a pin at a geographic point.
/// * [`CircleMarker`] - a circle of fixed pixel radius at a geographic point.
/// * [`FeatureGroup`] - a batch of other layers attached to the map together.
pub trait Layer {
    /// Draws the layer to the given canvas.
    fn render(&self, canvas: &mut dyn Canvas) -> Result<(), GeovizError>;
    /// A map stores layers as trait objects. This method can be used to convert the trait object into the concrete type.
    fn as_any(&self) -> &dyn Any;
    /// Returns the attribution of the layer, if available.
    fn attribution(&self) -> Option<Attribution> {
        None
    }
    /// Number of point annotations (markers and circles) in the layer.
    fn feature_count(&self) -> usize {
        0
    }
    /// Geographic extent of the annotations in the layer. Background layers have none.
    fn extent(&self) -> Option<GeoBoundingBox> {
        None
    }
}

/// Used in tests.
#[cfg(test)]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct TestLayer(pub &'static str);

#[cfg(test)]
impl Layer for TestLayer {
    fn render(&self, _canvas: &mut dyn Canvas) -> Result<(), GeovizError> {
        Ok(())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
