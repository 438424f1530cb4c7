//! Geometries in geographic coordinates (latitude and longitude) and the web mercator projection.

mod bounding_box;
mod datum;
mod point;
pub mod web_mercator;

pub use bounding_box::GeoBoundingBox;
pub use datum::Datum;
pub use point::{GeoPoint, GeoPoint2d, NewGeoPoint};
