//! Geoviz builds interactive map documents: a tile background, a view and annotations on top of it,
//! rendered into a standalone HTML page that shows the map with [Leaflet](https://leafletjs.com).
//!
//! # Quick start
//!
//! ```no_run
//! use geoviz::data::{DataLoader, DEFAULT_ROW_LIMIT};
//! use geoviz::layer::TileStyle;
//! use geoviz::overlay::{IncidentOverlay, OverlayVariant};
//! use geoviz::presets::{SAN_FRANCISCO, SF_INCIDENTS_2016_URL};
//! use geoviz::MapBuilder;
//!
//! # tokio_test::block_on(async {
//! let table = DataLoader::new()?
//!     .load_url(SF_INCIDENTS_2016_URL)
//!     .await?
//!     .limit(DEFAULT_ROW_LIMIT);
//!
//! let mut map = MapBuilder::new()
//!     .with_view(SAN_FRANCISCO.view())
//!     .with_tile_style(TileStyle::OpenStreetMap)
//!     .build();
//! IncidentOverlay::new(OverlayVariant::CirclesWithPopups).add_to(&mut map, &table.incidents()?);
//! map.save("san_francisco.html")?;
//! # Ok::<(), geoviz::error::GeovizError>(())
//! # });
//! ```
//!
//! # Main components
//!
//! * [`Map`] holds a [`MapView`] (center and zoom level) and a stack of [`layers`](layer). The
//!   first layer is usually a [`RasterTileLayer`](layer::RasterTileLayer) with one of the
//!   [`TileStyle`](layer::TileStyle)s.
//! * [`data`] loads CSV datasets into a [`Table`](data::Table) and extracts incident records from it.
//! * [`overlay`] turns incident records into markers and circles.
//! * [`render`] draws the layers through the [`Canvas`](render::Canvas) trait and writes the HTML
//!   document. Tiles are requested by the browser, never by this crate.

#![warn(clippy::unwrap_used)]
#![warn(missing_docs)]

mod color;
pub mod data;
pub mod error;
pub mod layer;
mod map;
pub mod overlay;
pub mod presets;
pub mod render;
pub mod view;

pub use color::Color;
pub use map::{LayerCollection, Map, MapBuilder, DEFAULT_VIEWPORT};
pub use view::MapView;

// Reexport geoviz_types
pub use geoviz_types;
