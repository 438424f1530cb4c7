use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::error::GeovizError;
use crate::layer::attribution::Attribution;

const OSM_URL: &str = "https://tile.openstreetmap.org/{z}/{x}/{y}.png";
const STAMEN_TONER_URL: &str = "https://tiles.stadiamaps.com/tiles/stamen_toner/{z}/{x}/{y}.png";
const STAMEN_TERRAIN_URL: &str =
    "https://tiles.stadiamaps.com/tiles/stamen_terrain/{z}/{x}/{y}.png";

/// Visual theme of the map background imagery.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum TileStyle {
    /// Standard OpenStreetMap tiles.
    #[default]
    OpenStreetMap,
    /// High-contrast black and white tiles, good for data mashups and coastal zones.
    StamenToner,
    /// Hill shading with natural vegetation colors.
    StamenTerrain,
    /// Any XYZ tile service.
    Custom {
        /// URL template with `{z}`, `{x}` and `{y}` placeholders.
        url: String,
        /// Credits required by the tile provider.
        attribution: Option<Attribution>,
    },
}

impl TileStyle {
    /// URL template in the XYZ format understood by Leaflet.
    pub fn url_template(&self) -> &str {
        match self {
            TileStyle::OpenStreetMap => OSM_URL,
            TileStyle::StamenToner => STAMEN_TONER_URL,
            TileStyle::StamenTerrain => STAMEN_TERRAIN_URL,
            TileStyle::Custom { url, .. } => url,
        }
    }

    /// Credits the tile provider requires to display.
    pub fn attribution(&self) -> Option<Attribution> {
        let stamen = || {
            Some(Attribution::new(
                "Stadia Maps, Stamen Design, OpenMapTiles, OpenStreetMap contributors",
                Some("https://stadiamaps.com/".to_string()),
            ))
        };

        match self {
            TileStyle::OpenStreetMap => Some(Attribution::new(
                "OpenStreetMap contributors",
                Some("https://www.openstreetmap.org/copyright".to_string()),
            )),
            TileStyle::StamenToner | TileStyle::StamenTerrain => stamen(),
            TileStyle::Custom { attribution, .. } => attribution.clone(),
        }
    }

    /// Highest zoom level the tile service provides.
    pub fn max_zoom(&self) -> u32 {
        match self {
            TileStyle::OpenStreetMap => 19,
            TileStyle::StamenToner => 20,
            TileStyle::StamenTerrain => 18,
            TileStyle::Custom { .. } => 18,
        }
    }
}

impl Display for TileStyle {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            TileStyle::OpenStreetMap => f.write_str("OpenStreetMap"),
            TileStyle::StamenToner => f.write_str("Stamen Toner"),
            TileStyle::StamenTerrain => f.write_str("Stamen Terrain"),
            TileStyle::Custom { url, .. } => f.write_str(url),
        }
    }
}

/// Parses a tile style name like `"Stamen Toner"`, `"stamen-terrain"` or `"openstreetmap"`.
///
/// Anything that looks like a URL template is taken as [`TileStyle::Custom`].
impl FromStr for TileStyle {
    type Err = GeovizError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.contains("{z}") {
            return Ok(TileStyle::Custom {
                url: s.to_string(),
                attribution: None,
            });
        }

        let normalized: String = s
            .chars()
            .filter(|c| !matches!(c, ' ' | '_' | '-'))
            .collect::<String>()
            .to_ascii_lowercase();

        match normalized.as_str() {
            "openstreetmap" | "osm" | "default" => Ok(TileStyle::OpenStreetMap),
            "stamentoner" | "toner" => Ok(TileStyle::StamenToner),
            "stamenterrain" | "terrain" => Ok(TileStyle::StamenTerrain),
            _ => Err(GeovizError::Configuration(format!(
                "unknown tile style '{s}'"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn parses_folium_names() {
        assert_eq!("Stamen Toner".parse::<TileStyle>().ok(), Some(TileStyle::StamenToner));
        assert_eq!(
            "stamen_terrain".parse::<TileStyle>().ok(),
            Some(TileStyle::StamenTerrain)
        );
        assert_eq!(
            "OpenStreetMap".parse::<TileStyle>().ok(),
            Some(TileStyle::OpenStreetMap)
        );
        assert_matches!(
            "Mapbox Bright".parse::<TileStyle>(),
            Err(GeovizError::Configuration(_))
        );
    }

    #[test]
    fn display_parses_back() {
        for style in [
            TileStyle::OpenStreetMap,
            TileStyle::StamenToner,
            TileStyle::StamenTerrain,
        ] {
            assert_eq!(style.to_string().parse::<TileStyle>().ok(), Some(style));
        }
    }

    #[test]
    fn url_template_is_custom() {
        let style: TileStyle = "https://tiles.example.com/{z}/{x}/{y}.png"
            .parse()
            .expect("valid template");
        assert_eq!(
            style.url_template(),
            "https://tiles.example.com/{z}/{x}/{y}.png"
        );
        assert!(style.attribution().is_none());
    }

    #[test]
    fn stamen_styles_credit_stadia() {
        let attribution = TileStyle::StamenToner.attribution().expect("has attribution");
        assert_eq!(attribution.url(), Some("https://stadiamaps.com/"));
    }
}
