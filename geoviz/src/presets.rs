//! Named views and dataset locations used by the bundled maps.

use geoviz_types::{GeoPoint2d, NewGeoPoint};

use crate::view::{MapView, WORLD_ZOOM};

pub use crate::data::DEFAULT_ROW_LIMIT;

/// San Francisco police department incidents of 2016.
pub const SF_INCIDENTS_2016_URL: &str = "https://s3-api.us-geo.objectstorage.softlayer.net/cf-courses-data/CognitiveClass/DV0101EN/labs/Data_Files/Police_Department_Incidents_-_Previous_Year__2016_.csv";

/// A named map view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Place {
    /// Name the place is looked up by.
    pub name: &'static str,
    /// Latitude of the view center.
    pub lat: f64,
    /// Longitude of the view center.
    pub lon: f64,
    /// Zoom level.
    pub zoom: u32,
}

impl Place {
    /// Center of the view.
    pub fn center(&self) -> GeoPoint2d {
        GeoPoint2d::latlon(self.lat, self.lon)
    }

    /// View of the place.
    pub fn view(&self) -> MapView {
        MapView::new(&self.center(), self.zoom)
    }
}

/// Whole world.
pub const WORLD: Place = Place {
    name: "world",
    lat: 0.0,
    lon: 0.0,
    zoom: WORLD_ZOOM,
};

/// Africa and the surrounding continents.
pub const AFRICA: Place = Place {
    name: "africa",
    lat: 20.2,
    lon: -1.4,
    zoom: 4,
};

/// Closer view of north-west Africa.
pub const AFRICA_CLOSE: Place = Place {
    name: "africa-close",
    zoom: 6,
    ..AFRICA
};

/// New Delhi, India.
pub const NEW_DELHI: Place = Place {
    name: "new-delhi",
    lat: 28.6448,
    lon: 77.216721,
    zoom: 12,
};

/// San Francisco, USA.
pub const SAN_FRANCISCO: Place = Place {
    name: "san-francisco",
    lat: 37.77,
    lon: -122.42,
    zoom: 12,
};

/// All named places.
pub const PLACES: [Place; 5] = [WORLD, AFRICA, AFRICA_CLOSE, NEW_DELHI, SAN_FRANCISCO];

/// Looks up a place by name, ignoring case. Spaces and underscores match dashes.
pub fn find_place(name: &str) -> Option<Place> {
    let normalized = name.trim().to_ascii_lowercase().replace([' ', '_'], "-");
    PLACES.into_iter().find(|place| place.name == normalized)
}
