use std::fmt::{Display, Formatter};
use std::str::FromStr;

use num_traits::Float;
use serde::{Deserialize, Serialize};

use crate::error::GeovizTypesError;

/// Point on the surface of the Earth given by its latitude and longitude in degrees.
pub trait GeoPoint {
    /// Numeric type used to represent coordinates.
    type Num: Float;

    /// Latitude in degrees.
    fn lat(&self) -> Self::Num;
    /// Longitude in degrees.
    fn lon(&self) -> Self::Num;

    /// Latitude in radians.
    fn lat_rad(&self) -> Self::Num {
        self.lat().to_radians()
    }

    /// Longitude in radians.
    fn lon_rad(&self) -> Self::Num {
        self.lon().to_radians()
    }
}

/// A [`GeoPoint`] that can be constructed from coordinates.
pub trait NewGeoPoint<N = f64>: GeoPoint<Num = N> + Sized {
    /// Creates a point from latitude and longitude.
    fn latlon(lat: N, lon: N) -> Self;
    /// Creates a point from longitude and latitude (`x, y` order).
    fn lonlat(lon: N, lat: N) -> Self {
        Self::latlon(lat, lon)
    }
}

/// 2d point on the surface of the Earth.
///
/// Coordinates are stored as given: out-of-range values are not rejected, as they are passed to
/// the map library unchanged.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, Deserialize, Serialize)]
pub struct GeoPoint2d {
    lat: f64,
    lon: f64,
}

impl GeoPoint for GeoPoint2d {
    type Num = f64;

    fn lat(&self) -> f64 {
        self.lat
    }

    fn lon(&self) -> f64 {
        self.lon
    }
}

impl NewGeoPoint<f64> for GeoPoint2d {
    fn latlon(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

impl GeoPoint2d {
    /// Creates a new point from another one.
    pub fn from(other: &impl GeoPoint<Num = f64>) -> Self {
        Self {
            lat: other.lat(),
            lon: other.lon(),
        }
    }

    /// Returns `[lat, lon]` array, the order Leaflet expects.
    pub fn to_latlng_array(&self) -> [f64; 2] {
        [self.lat, self.lon]
    }

    /// Returns true if the latitude is within `[-90, 90]` and longitude within `[-180, 180]`.
    pub fn is_in_range(&self) -> bool {
        (-90.0..=90.0).contains(&self.lat) && (-180.0..=180.0).contains(&self.lon)
    }
}

impl Display for GeoPoint2d {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{}", self.lat, self.lon)
    }
}

/// Parses `"<lat>,<lon>"`. Whitespace around each value is ignored.
impl FromStr for GeoPoint2d {
    type Err = GeovizTypesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || GeovizTypesError::InvalidCoordinates(s.to_string());
        let (lat, lon) = s.split_once(',').ok_or_else(err)?;
        let lat = lat.trim().parse::<f64>().map_err(|_| err())?;
        let lon = lon.trim().parse::<f64>().map_err(|_| err())?;

        Ok(Self { lat, lon })
    }
}

/// Creates a new GeoPoint2d from latitude and longitude values (in degrees).
///
/// ```
/// use geoviz_types::geo::GeoPoint;
/// use geoviz_types::latlon;
///
/// let point = latlon!(37.77, -122.42);
/// assert_eq!(point.lat(), 37.77);
/// ```
#[macro_export]
macro_rules! latlon {
    ($lat:expr, $lon:expr) => {
        <$crate::geo::GeoPoint2d as $crate::geo::NewGeoPoint<f64>>::latlon($lat, $lon)
    };
}
