//! Geographic primitives shared by the `geoviz` crates: points in latitude/longitude, geographic
//! extents and the web mercator projection used to reason about zoom levels.

pub mod error;
pub mod geo;

pub use geo::{GeoBoundingBox, GeoPoint, GeoPoint2d, NewGeoPoint};
