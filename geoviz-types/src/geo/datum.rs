/// Ellipsoid parameters of a geodetic datum.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Datum {
    semimajor: f64,
}

impl Datum {
    /// The datum used by GPS and by every web map tile service.
    pub const WGS84: Self = Datum {
        semimajor: 6_378_137.0,
    };

    /// Semimajor axis of the ellipsoid in meters.
    pub fn semimajor(&self) -> f64 {
        self.semimajor
    }

    /// Length of the equator in meters.
    pub fn equator_length(&self) -> f64 {
        2.0 * std::f64::consts::PI * self.semimajor
    }
}

impl Default for Datum {
    fn default() -> Self {
        Self::WGS84
    }
}
