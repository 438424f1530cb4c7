//! This example writes the world maps of the notebook: the default world view, Africa with the
//! three tile styles and a city view of New Delhi.
//!
//! ```shell
//! cargo run --example world_map -- ./maps
//! ```

use std::path::PathBuf;

use anyhow::Result;
use geoviz::layer::TileStyle;
use geoviz::presets::{AFRICA, AFRICA_CLOSE, NEW_DELHI};
use geoviz::MapBuilder;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let output = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));
    std::fs::create_dir_all(&output)?;

    // No position and no zoom gives the whole world.
    MapBuilder::new().build().save(output.join("world.html"))?;

    let maps = [
        ("africa.html", AFRICA, TileStyle::OpenStreetMap),
        ("africa_close.html", AFRICA_CLOSE, TileStyle::OpenStreetMap),
        ("africa_toner.html", AFRICA, TileStyle::StamenToner),
        ("africa_terrain.html", AFRICA, TileStyle::StamenTerrain),
        ("new_delhi.html", NEW_DELHI, TileStyle::OpenStreetMap),
    ];

    for (file_name, place, style) in maps {
        MapBuilder::new()
            .with_view(place.view())
            .with_tile_style(style)
            .build()
            .save(output.join(file_name))?;
    }

    Ok(())
}
