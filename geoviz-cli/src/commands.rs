use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use clap::Args;
use geoviz::data::{DataLoader, Table, DEFAULT_ROW_LIMIT};
use geoviz::layer::TileStyle;
use geoviz::overlay::{IncidentOverlay, OverlayVariant};
use geoviz::presets::{find_place, PLACES, SF_INCIDENTS_2016_URL};
use geoviz::{MapBuilder, MapView};
use geoviz_types::GeoPoint2d;
use log::info;

/// Map position given either as a named place or as a center and a zoom level
#[derive(Debug, Clone, Args)]
pub struct ViewArgs {
    /// Named view: world, africa, africa-close, new-delhi, san-francisco
    #[arg(long, value_name = "NAME", conflicts_with_all = ["center", "zoom"])]
    pub place: Option<String>,

    /// Map center as `lat,lon` (defaults to 0,0)
    #[arg(long, value_name = "LAT,LON", allow_hyphen_values = true)]
    pub center: Option<GeoPoint2d>,

    /// Zoom level (defaults to the world view zoom)
    #[arg(long)]
    pub zoom: Option<u32>,
}

impl ViewArgs {
    /// Returns `None` if neither a place nor a center or zoom was given.
    fn resolve(&self) -> Result<Option<MapView>> {
        if let Some(name) = &self.place {
            let place = find_place(name).ok_or_else(|| {
                let known: Vec<_> = PLACES.iter().map(|p| p.name).collect();
                anyhow!("unknown place '{name}', expected one of: {}", known.join(", "))
            })?;
            return Ok(Some(place.view()));
        }

        if self.center.is_none() && self.zoom.is_none() {
            return Ok(None);
        }

        let world = MapView::world();
        let center = self.center.unwrap_or(world.center());
        let zoom = self.zoom.unwrap_or(world.zoom());
        Ok(Some(MapView::new(&center, zoom)))
    }
}

/// Write a map with the given view and tile style
#[derive(Debug, Clone, Args)]
pub struct MapArgs {
    #[command(flatten)]
    pub view: ViewArgs,

    /// Tile style: OpenStreetMap, "Stamen Toner", "Stamen Terrain" or a `{z}/{x}/{y}` url
    #[arg(long, default_value = "OpenStreetMap")]
    pub tiles: TileStyle,

    /// Output HTML file
    #[arg(short, long, value_name = "FILE")]
    pub output: PathBuf,
}

impl MapArgs {
    pub fn execute(&self) -> Result<()> {
        let view = self.view.resolve()?.unwrap_or_default();
        MapBuilder::new()
            .with_view(view)
            .with_tile_style(self.tiles.clone())
            .build()
            .save(&self.output)
            .with_context(|| format!("failed to write {:?}", self.output))
    }
}

/// Load an incident dataset and write it as a map overlay
#[derive(Debug, Clone, Args)]
pub struct IncidentsArgs {
    /// Dataset url or path
    #[arg(long, default_value = SF_INCIDENTS_2016_URL)]
    pub source: String,

    /// Number of rows to plot
    #[arg(long, default_value_t = DEFAULT_ROW_LIMIT)]
    pub limit: usize,

    /// How incidents are drawn: circles, pins-and-circles, circles-with-popups
    #[arg(long, default_value = "circles")]
    pub variant: OverlayVariant,

    #[command(flatten)]
    pub view: ViewArgs,

    /// Center and zoom the map on the plotted incidents
    #[arg(long, conflicts_with_all = ["place", "center", "zoom"])]
    pub fit: bool,

    /// Folder to keep downloaded datasets in
    #[arg(long, value_name = "DIR")]
    pub cache_dir: Option<PathBuf>,

    /// Tile style: OpenStreetMap, "Stamen Toner", "Stamen Terrain" or a `{z}/{x}/{y}` url
    #[arg(long, default_value = "OpenStreetMap")]
    pub tiles: TileStyle,

    /// Output HTML file
    #[arg(short, long, value_name = "FILE")]
    pub output: PathBuf,
}

impl IncidentsArgs {
    pub async fn execute(&self) -> Result<()> {
        let loader = match &self.cache_dir {
            Some(dir) => DataLoader::with_file_cache(dir)?,
            None => DataLoader::new()?,
        };
        let table = loader.load(&self.source).await?.limit(self.limit);
        let incidents = table.incidents()?;

        let mut builder = MapBuilder::new().with_tile_style(self.tiles.clone());
        if let Some(view) = self.view.resolve()? {
            builder = builder.with_view(view);
        }
        let mut map = builder.build();

        IncidentOverlay::new(self.variant).add_to(&mut map, &incidents);
        if self.fit && !map.fit_to_features() {
            log::warn!("No incidents to fit the view to, keeping the default view");
        }

        info!(
            "Plotting {} incidents as {} at zoom {}",
            incidents.len(),
            self.variant,
            map.view().zoom()
        );
        map.save(&self.output)
            .with_context(|| format!("failed to write {:?}", self.output))
    }
}

/// Print the shape and the first rows of a dataset
#[derive(Debug, Clone, Args)]
pub struct InspectArgs {
    /// Dataset url or path
    #[arg(long, default_value = SF_INCIDENTS_2016_URL)]
    pub source: String,

    /// Number of rows to print
    #[arg(long, default_value_t = 5)]
    pub rows: usize,

    /// Folder to keep downloaded datasets in
    #[arg(long, value_name = "DIR")]
    pub cache_dir: Option<PathBuf>,
}

impl InspectArgs {
    pub async fn execute(&self) -> Result<()> {
        let loader = match &self.cache_dir {
            Some(dir) => DataLoader::with_file_cache(dir)?,
            None => DataLoader::new()?,
        };
        let table = loader.load(&self.source).await?;
        print_summary(&table, self.rows)
    }
}

fn print_summary(table: &Table, rows: usize) -> Result<()> {
    let (row_count, column_count) = table.shape();
    println!("{row_count} rows, {column_count} columns");
    table.head(rows).write_csv(std::io::stdout().lock())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use geoviz_types::{GeoPoint, NewGeoPoint};

    use super::*;

    fn view_args(place: Option<&str>, center: Option<(f64, f64)>, zoom: Option<u32>) -> ViewArgs {
        ViewArgs {
            place: place.map(str::to_string),
            center: center.map(|(lat, lon)| GeoPoint2d::latlon(lat, lon)),
            zoom,
        }
    }

    #[test]
    fn no_view_arguments() {
        assert_eq!(view_args(None, None, None).resolve().expect("valid"), None);
    }

    #[test]
    fn named_place() {
        let view = view_args(Some("New Delhi"), None, None)
            .resolve()
            .expect("valid")
            .expect("view");
        assert_eq!(view.center().lat(), 28.6448);
        assert_eq!(view.zoom(), 12);

        assert!(view_args(Some("atlantis"), None, None).resolve().is_err());
    }

    #[test]
    fn partial_view_uses_world_defaults() {
        let view = view_args(None, None, Some(4))
            .resolve()
            .expect("valid")
            .expect("view");
        assert_eq!(view.center(), MapView::world().center());
        assert_eq!(view.zoom(), 4);

        let view = view_args(None, Some((20.2, -1.4)), None)
            .resolve()
            .expect("valid")
            .expect("view");
        assert_eq!(view.zoom(), MapView::world().zoom());
    }
}
