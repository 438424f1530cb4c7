//! This example loads the San Francisco incidents of 2016, takes the first 100 of them and writes
//! the three incident maps: circles, circles with pins and circles with popups.
//!
//! The dataset is cached in `.data_cache` after the first run.
//!
//! ```shell
//! cargo run --example crime_map
//! ```

use anyhow::Result;
use geoviz::data::{DataLoader, DEFAULT_ROW_LIMIT};
use geoviz::overlay::{IncidentOverlay, OverlayVariant};
use geoviz::presets::{SAN_FRANCISCO, SF_INCIDENTS_2016_URL};
use geoviz::MapBuilder;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let table = DataLoader::with_file_cache(".data_cache")?
        .load_url(SF_INCIDENTS_2016_URL)
        .await?;
    log::info!("Dataset shape: {:?}", table.shape());

    let incidents = table.limit(DEFAULT_ROW_LIMIT).incidents()?;

    for variant in OverlayVariant::ALL {
        let mut map = MapBuilder::new().with_view(SAN_FRANCISCO.view()).build();
        IncidentOverlay::new(variant).add_to(&mut map, &incidents);
        map.save(format!("san_francisco_{variant}.html"))?;
    }

    Ok(())
}
