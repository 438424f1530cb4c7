use serde::{Deserialize, Serialize};

use crate::geo::{GeoPoint, GeoPoint2d, NewGeoPoint};

/// Rectangular extent in geographic coordinates.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoBoundingBox {
    /// Southern boundary.
    pub lat_min: f64,
    /// Western boundary.
    pub lon_min: f64,
    /// Northern boundary.
    pub lat_max: f64,
    /// Eastern boundary.
    pub lon_max: f64,
}

impl GeoBoundingBox {
    /// Creates a new box from its boundaries.
    pub fn new(lat_min: f64, lon_min: f64, lat_max: f64, lon_max: f64) -> Self {
        Self {
            lat_min,
            lon_min,
            lat_max,
            lon_max,
        }
    }

    /// Smallest box containing all the points. Returns `None` for an empty iterator.
    pub fn from_points<'a, P: GeoPoint<Num = f64> + 'a>(
        mut points: impl Iterator<Item = &'a P>,
    ) -> Option<Self> {
        let first = points.next()?;
        let init = Self::new(first.lat(), first.lon(), first.lat(), first.lon());

        Some(points.fold(init, |bbox, p| bbox.extend(p)))
    }

    /// Returns the box grown to include the given point.
    pub fn extend(&self, point: &impl GeoPoint<Num = f64>) -> Self {
        Self {
            lat_min: self.lat_min.min(point.lat()),
            lon_min: self.lon_min.min(point.lon()),
            lat_max: self.lat_max.max(point.lat()),
            lon_max: self.lon_max.max(point.lon()),
        }
    }

    /// Smallest box containing both boxes.
    pub fn merge(&self, other: Self) -> Self {
        Self {
            lat_min: self.lat_min.min(other.lat_min),
            lon_min: self.lon_min.min(other.lon_min),
            lat_max: self.lat_max.max(other.lat_max),
            lon_max: self.lon_max.max(other.lon_max),
        }
    }

    /// South-west corner.
    pub fn south_west(&self) -> GeoPoint2d {
        GeoPoint2d::latlon(self.lat_min, self.lon_min)
    }

    /// North-east corner.
    pub fn north_east(&self) -> GeoPoint2d {
        GeoPoint2d::latlon(self.lat_max, self.lon_max)
    }

    /// Arithmetic center of the box.
    pub fn center(&self) -> GeoPoint2d {
        GeoPoint2d::latlon(
            (self.lat_min + self.lat_max) / 2.0,
            (self.lon_min + self.lon_max) / 2.0,
        )
    }

    /// Returns true if the point lies inside the box or on its boundary.
    pub fn contains(&self, point: &impl GeoPoint<Num = f64>) -> bool {
        (self.lat_min..=self.lat_max).contains(&point.lat())
            && (self.lon_min..=self.lon_max).contains(&point.lon())
    }
}
