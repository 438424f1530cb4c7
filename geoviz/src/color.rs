use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GeovizError;

/// Color representation.
///
/// Serialized as a CSS color string (`#RRGGBB`). The alpha channel is not part of CSS output:
/// Leaflet takes opacity as a separate option, see [`Color::opacity`].
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    r: u8,
    g: u8,
    b: u8,
    a: u8,
}

impl TryFrom<String> for Color {
    type Error = GeovizError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Color> for String {
    fn from(val: Color) -> Self {
        val.to_css()
    }
}

/// CSS named colors that the overlays and the command line accept.
const NAMED_COLORS: &[(&str, Color)] = &[
    ("black", Color::BLACK),
    ("white", Color::WHITE),
    ("red", Color::RED),
    ("green", Color::rgba(0, 128, 0, 255)),
    ("lime", Color::rgba(0, 255, 0, 255)),
    ("blue", Color::BLUE),
    ("yellow", Color::YELLOW),
    ("orange", Color::ORANGE),
    ("purple", Color::PURPLE),
    ("gray", Color::GRAY),
    ("grey", Color::GRAY),
    ("darkred", Color::rgba(139, 0, 0, 255)),
    ("darkblue", Color::rgba(0, 0, 139, 255)),
    ("cadetblue", Color::rgba(95, 158, 160, 255)),
    ("pink", Color::rgba(255, 192, 203, 255)),
    ("beige", Color::rgba(245, 245, 220, 255)),
];

impl Color {
    /// Transparent color: `#00000000`
    pub const TRANSPARENT: Color = Color::rgba(0, 0, 0, 0);
    /// Red color: `#FF0000FF`
    pub const RED: Color = Color::rgba(255, 0, 0, 255);
    /// Blue color: `#0000FFFF`
    pub const BLUE: Color = Color::rgba(0, 0, 255, 255);
    /// Yellow color: `#FFFF00FF`
    pub const YELLOW: Color = Color::rgba(255, 255, 0, 255);
    /// Orange color: `#FFA500FF`
    pub const ORANGE: Color = Color::rgba(255, 165, 0, 255);
    /// White color: `#FFFFFFFF`
    pub const WHITE: Color = Color::rgba(255, 255, 255, 255);
    /// Black color: `#000000FF`
    pub const BLACK: Color = Color::rgba(0, 0, 0, 255);
    /// Gray color: `#808080FF`
    pub const GRAY: Color = Color::rgba(128, 128, 128, 255);
    /// Purple color: `#800080FF`
    pub const PURPLE: Color = Color::rgba(128, 0, 128, 255);
    /// Default stroke color of Leaflet paths: `#3388FFFF`
    pub const LEAFLET_BLUE: Color = Color::rgba(51, 136, 255, 255);

    /// Constructs color from its RGBA channels.
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Converts the color into HEX8 string: `#RRGGBBAA`.
    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, self.a)
    }

    /// Converts the color into a CSS HEX6 string: `#RRGGBB`.
    pub fn to_css(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Alpha channel as an opacity value in `[0, 1]`.
    pub fn opacity(&self) -> f64 {
        self.a as f64 / 255.0
    }

    /// Parses a color from the hex string. Hex string can be either HEX6 (`#RRGGBB`) or HEX8 (`#RRGGBBAA`).
    pub fn try_from_hex(hex_string: &str) -> Option<Self> {
        let digits = hex_string.strip_prefix('#')?;
        if (digits.len() != 6 && digits.len() != 8) || !digits.is_ascii() {
            return None;
        }

        let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
        let a = if digits.len() == 8 { channel(6)? } else { 255 };

        Some(Self::rgba(channel(0)?, channel(2)?, channel(4)?, a))
    }

    /// Looks up a CSS color name (case insensitive).
    pub fn from_name(name: &str) -> Option<Self> {
        NAMED_COLORS
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, c)| *c)
    }

    /// Returns a new color instance, copied from the base one but with the given alpha channel.
    pub fn with_alpha(&self, a: u8) -> Self {
        Self { a, ..*self }
    }

    /// Returns true if the color is fully transparent (`a == 0`).
    pub fn is_transparent(&self) -> bool {
        self.a == 0
    }

    /// Red component of the color in RGBA space.
    pub fn r(&self) -> u8 {
        self.r
    }

    /// Green component of the color in RGBA space.
    pub fn g(&self) -> u8 {
        self.g
    }

    /// Blue component of the color in RGBA space.
    pub fn b(&self) -> u8 {
        self.b
    }

    /// Opacity component of the color.
    pub fn a(&self) -> u8 {
        self.a
    }
}

impl FromStr for Color {
    type Err = GeovizError;

    /// Accepts hex strings and CSS color names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::try_from_hex(s)
            .or_else(|| Self::from_name(s))
            .ok_or_else(|| GeovizError::Configuration(format!("unknown color '{s}'")))
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_css())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_parsing() {
        let hex = "#FF1000AA";
        let color = Color::try_from_hex(hex).expect("valid hex");
        assert_eq!(&color.to_hex(), hex);
        assert_eq!(color.to_css(), "#FF1000");

        assert_eq!(Color::try_from_hex("#ff1000"), Some(Color::rgba(255, 16, 0, 255)));
        assert_eq!(Color::try_from_hex("FF1000"), None);
        assert_eq!(Color::try_from_hex("#FF10"), None);
        assert_eq!(Color::try_from_hex("#GG1000"), None);
    }

    #[test]
    fn names_are_case_insensitive() {
        assert_eq!("yellow".parse::<Color>().ok(), Some(Color::YELLOW));
        assert_eq!("Blue".parse::<Color>().ok(), Some(Color::BLUE));
        assert!("not-a-color".parse::<Color>().is_err());
    }

    #[test]
    fn serializes_as_css() {
        let json = serde_json::to_string(&Color::YELLOW).expect("serializable");
        assert_eq!(json, "\"#FFFF00\"");

        let color: Color = serde_json::from_str("\"blue\"").expect("deserializable");
        assert_eq!(color, Color::BLUE);
    }

    #[test]
    fn opacity_from_alpha() {
        assert_eq!(Color::BLUE.opacity(), 1.0);
        assert!(Color::TRANSPARENT.is_transparent());
        assert_eq!(Color::BLUE.with_alpha(0).opacity(), 0.0);
    }
}
