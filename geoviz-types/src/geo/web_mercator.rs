//! Spherical web mercator (EPSG:3857), the projection of all standard web tile schemes.

use crate::geo::{Datum, GeoPoint, GeoPoint2d, NewGeoPoint};

/// Latitude beyond which web mercator tiles are not defined.
pub const MAX_LATITUDE: f64 = 85.051_128_779_806_59;

/// Size of a standard web tile in pixels.
pub const TILE_SIZE: u32 = 256;

/// Projects a geographic point into web mercator meters. Returns `None` for the poles, where the
/// projection is not finite.
pub fn project(point: &impl GeoPoint<Num = f64>) -> Option<(f64, f64)> {
    if point.lat().abs() >= 90.0 {
        return None;
    }

    let semimajor = Datum::WGS84.semimajor();
    let x = semimajor * point.lon_rad();
    let y = semimajor * (std::f64::consts::FRAC_PI_4 + point.lat_rad() / 2.0).tan().ln();

    if x.is_finite() && y.is_finite() {
        Some((x, y))
    } else {
        None
    }
}

/// Inverse of [`project`].
pub fn unproject(x: f64, y: f64) -> GeoPoint2d {
    let semimajor = Datum::WGS84.semimajor();
    let lat = 2.0 * (y / semimajor).exp().atan() - std::f64::consts::FRAC_PI_2;
    let lon = x / semimajor;

    GeoPoint2d::latlon(lat.to_degrees(), lon.to_degrees())
}

/// Ground resolution in meters per pixel at the equator for the given z-level.
pub fn resolution(z: u32) -> f64 {
    Datum::WGS84.equator_length() / TILE_SIZE as f64 / 2f64.powi(z as i32)
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::latlon;

    #[test]
    fn resolution_of_standard_levels() {
        assert_relative_eq!(resolution(0), 156543.03392800014, epsilon = 1e-6);
        assert_relative_eq!(resolution(4), 156543.03392800014 / 16.0, epsilon = 1e-6);
    }

    #[test]
    fn project_unproject() {
        let point = latlon!(37.77, -122.42);
        let (x, y) = project(&point).expect("finite");
        let back = unproject(x, y);

        assert_relative_eq!(back.lat(), point.lat(), epsilon = 1e-9);
        assert_relative_eq!(back.lon(), point.lon(), epsilon = 1e-9);
    }

    #[test]
    fn max_latitude_projects_to_square() {
        let (x, y) = project(&latlon!(MAX_LATITUDE, 180.0)).expect("finite");
        assert_relative_eq!(x, y, epsilon = 1e-3);
    }

    #[test]
    fn pole_is_not_projected() {
        assert!(project(&latlon!(90.0, 0.0)).is_none());
    }
}
