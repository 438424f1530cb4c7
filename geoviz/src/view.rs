use geoviz_types::geo::web_mercator;
use geoviz_types::{GeoBoundingBox, GeoPoint, GeoPoint2d};

/// Zoom level of the world view shown when a map is created without a position.
pub const WORLD_ZOOM: u32 = 1;

/// Highest zoom level [`MapView::fit`] will select.
pub const MAX_FIT_ZOOM: u32 = 18;

/// Position of a map: the geographic point at the center of the viewport and the zoom level.
///
/// A view is a plain value: it is copied into every map built from it and the map never shares it.
/// Neither the coordinates nor the zoom level are validated, they are handed to the browser map
/// as given.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapView {
    center: GeoPoint2d,
    zoom: u32,
}

impl Default for MapView {
    fn default() -> Self {
        Self::world()
    }
}

impl MapView {
    /// Creates a view centered at the given point.
    pub fn new(center: &impl GeoPoint<Num = f64>, zoom: u32) -> Self {
        Self {
            center: GeoPoint2d::from(center),
            zoom,
        }
    }

    /// Whole-world view: center at `(0, 0)`, zoom level [`WORLD_ZOOM`].
    pub fn world() -> Self {
        Self {
            center: GeoPoint2d::default(),
            zoom: WORLD_ZOOM,
        }
    }

    /// Geographic point at the center of the view.
    pub fn center(&self) -> GeoPoint2d {
        self.center
    }

    /// Zoom level of the view.
    pub fn zoom(&self) -> u32 {
        self.zoom
    }

    /// Returns a copy of the view with a different center.
    pub fn with_center(&self, center: &impl GeoPoint<Num = f64>) -> Self {
        Self {
            center: GeoPoint2d::from(center),
            ..*self
        }
    }

    /// Returns a copy of the view with a different zoom level.
    pub fn with_zoom(&self, zoom: u32) -> Self {
        Self { zoom, ..*self }
    }

    /// Size of a screen pixel in web mercator meters at the equator.
    pub fn resolution(&self) -> f64 {
        web_mercator::resolution(self.zoom)
    }

    /// Creates the view that shows the whole `bbox` in a viewport of the given size in pixels.
    ///
    /// The zoom is the largest level (up to [`MAX_FIT_ZOOM`]) at which the projected box fits.
    /// Returns `None` if the box cannot be projected (it touches a pole) or the viewport is empty.
    pub fn fit(bbox: &GeoBoundingBox, width_px: u32, height_px: u32) -> Option<Self> {
        if width_px == 0 || height_px == 0 {
            return None;
        }

        let (x_min, y_min) = web_mercator::project(&bbox.south_west())?;
        let (x_max, y_max) = web_mercator::project(&bbox.north_east())?;
        let center = web_mercator::unproject((x_min + x_max) / 2.0, (y_min + y_max) / 2.0);

        let zoom = (0..=MAX_FIT_ZOOM)
            .rev()
            .find(|&z| {
                let resolution = web_mercator::resolution(z);
                (x_max - x_min) / resolution <= width_px as f64
                    && (y_max - y_min) / resolution <= height_px as f64
            })
            .unwrap_or(0);

        Some(Self { center, zoom })
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use geoviz_types::latlon;

    use super::*;

    #[test]
    fn default_view_is_world() {
        let view = MapView::default();
        assert_eq!(view.center(), latlon!(0.0, 0.0));
        assert_eq!(view.zoom(), WORLD_ZOOM);
        assert_eq!(view, MapView::world());
    }

    #[test]
    fn center_and_zoom_round_trip() {
        let view = MapView::new(&latlon!(28.6448, 77.216721), 12);
        assert_eq!(view.center(), latlon!(28.6448, 77.216721));
        assert_eq!(view.zoom(), 12);

        let moved = view.with_center(&latlon!(37.77, -122.42)).with_zoom(4);
        assert_eq!(moved.center(), latlon!(37.77, -122.42));
        assert_eq!(moved.zoom(), 4);
    }

    #[test]
    fn invalid_values_pass_through() {
        let view = MapView::new(&latlon!(200.0, -500.0), 40);
        assert_eq!(view.center().lat(), 200.0);
        assert_eq!(view.center().lon(), -500.0);
        assert_eq!(view.zoom(), 40);
    }

    #[test]
    fn resolution_halves_with_each_level() {
        let view = MapView::world().with_zoom(4);
        assert_relative_eq!(view.resolution(), 156543.03392800014 / 16.0, epsilon = 1e-6);
        assert_relative_eq!(
            view.with_zoom(5).resolution() * 2.0,
            view.resolution(),
            epsilon = 1e-9
        );
    }

    #[test]
    fn fit_city_extent() {
        let bbox = GeoBoundingBox::new(37.70, -122.52, 37.82, -122.35);
        let view = MapView::fit(&bbox, 1024, 768).expect("fits");

        assert_eq!(view.zoom(), 12);
        assert_relative_eq!(view.center().lon(), -122.435, epsilon = 1e-9);
        assert!(bbox.contains(&view.center()));
    }

    #[test]
    fn fit_single_point_uses_max_zoom() {
        let point = latlon!(37.77, -122.42);
        let bbox = GeoBoundingBox::from_points([point].iter()).expect("not empty");
        let view = MapView::fit(&bbox, 800, 600).expect("fits");

        assert_eq!(view.zoom(), MAX_FIT_ZOOM);
        assert_relative_eq!(view.center().lat(), 37.77, epsilon = 1e-9);
    }

    #[test]
    fn fit_rejects_empty_viewport_and_poles() {
        let bbox = GeoBoundingBox::new(0.0, 0.0, 1.0, 1.0);
        assert!(MapView::fit(&bbox, 0, 600).is_none());

        let polar = GeoBoundingBox::new(80.0, 0.0, 90.0, 10.0);
        assert!(MapView::fit(&polar, 800, 600).is_none());
    }
}
