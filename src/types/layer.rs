//! Background layer types and their gradient directions.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{BgError, Result};

/// Kind of background layer. The discriminant is the on-disk tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum LayerType {
    None = 0,
    Image = 1,
    Solid = 2,
    SmoothVertical = 3,
    PixelVertical = 4,
    SmoothHorizontal = 5,
    PixelHorizontal = 6,
    /// Top-left to bottom-right.
    SmoothDown = 7,
    PixelDown = 8,
    /// Bottom-left to top-right.
    SmoothUp = 9,
    PixelUp = 10,
    Radial = 11,
}

/// Linear gradient endpoints `(x1, y1, x2, y2)`, each 0 or 1.
pub type Direction = [u8; 4];

impl LayerType {
    /// All layer types in tag order.
    pub const ALL: [LayerType; 12] = [
        LayerType::None,
        LayerType::Image,
        LayerType::Solid,
        LayerType::SmoothVertical,
        LayerType::PixelVertical,
        LayerType::SmoothHorizontal,
        LayerType::PixelHorizontal,
        LayerType::SmoothDown,
        LayerType::PixelDown,
        LayerType::SmoothUp,
        LayerType::PixelUp,
        LayerType::Radial,
    ];

    /// The on-disk tag.
    pub fn tag(self) -> u8 {
        self as u8
    }

    /// Look up a layer type by its tag.
    pub fn from_tag(tag: u8) -> Option<Self> {
        Self::ALL.get(tag as usize).copied()
    }

    /// Catalogue name, e.g. `S_Vertical`.
    pub fn name(self) -> &'static str {
        match self {
            LayerType::None => "None",
            LayerType::Image => "Image",
            LayerType::Solid => "Solid",
            LayerType::SmoothVertical => "S_Vertical",
            LayerType::PixelVertical => "P_Vertical",
            LayerType::SmoothHorizontal => "S_Horizontal",
            LayerType::PixelHorizontal => "P_Horizontal",
            LayerType::SmoothDown => "S_Down",
            LayerType::PixelDown => "P_Down",
            LayerType::SmoothUp => "S_Up",
            LayerType::PixelUp => "P_Up",
            LayerType::Radial => "Radial",
        }
    }

    /// Gradient direction written into the record header.
    pub fn direction(self) -> Direction {
        match self {
            LayerType::SmoothVertical | LayerType::PixelVertical => [0, 0, 0, 1],
            LayerType::SmoothHorizontal | LayerType::PixelHorizontal => [0, 0, 1, 0],
            LayerType::SmoothDown | LayerType::PixelDown => [0, 0, 1, 1],
            LayerType::SmoothUp | LayerType::PixelUp => [0, 1, 1, 0],
            LayerType::None | LayerType::Image | LayerType::Solid | LayerType::Radial => {
                [0, 0, 0, 0]
            }
        }
    }

    /// True for the linear and radial gradient types.
    pub fn is_gradient(self) -> bool {
        !matches!(self, LayerType::None | LayerType::Image | LayerType::Solid)
    }
}

impl fmt::Display for LayerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for LayerType {
    type Err = BgError;

    /// Parse a layer type name (case-insensitive) or a numeric tag.
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();

        if let Ok(tag) = s.parse::<u8>() {
            return Self::from_tag(tag).ok_or_else(|| unknown_layer(s));
        }

        Self::ALL
            .iter()
            .copied()
            .find(|layer| layer.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| unknown_layer(s))
    }
}

fn unknown_layer(s: &str) -> BgError {
    let names: Vec<&str> = LayerType::ALL.iter().map(|l| l.name()).collect();
    BgError::Parse {
        message: format!("Unknown layer type: {}", s),
        help: Some(format!("Valid layer types: {} (or tags 0-11)", names.join(", "))),
    }
}

impl Serialize for LayerType {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for LayerType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Tag(u8),
            Name(String),
        }

        let layer = match Raw::deserialize(deserializer)? {
            Raw::Tag(tag) => LayerType::from_tag(tag).ok_or_else(|| unknown_layer(&tag.to_string())),
            Raw::Name(name) => name.parse(),
        };
        layer.map_err(serde::de::Error::custom)
    }
}
