//! Canonical RGBA colour and the raw forms it is normalised from.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{BgError, Result};

/// A canonical 32-bit colour, packed as `0xRRGGBBAA`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Colour(u32);

impl Colour {
    /// Opaque black.
    pub const BLACK: Self = Self(0x0000_00FF);

    /// Opaque white.
    pub const WHITE: Self = Self(0xFFFF_FFFF);

    /// Create a colour from RGBA components.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self(u32::from_be_bytes([r, g, b, a]))
    }

    /// Wrap an already-packed `0xRRGGBBAA` value.
    pub const fn from_u32(value: u32) -> Self {
        Self(value)
    }

    /// The packed `0xRRGGBBAA` value.
    pub const fn value(self) -> u32 {
        self.0
    }

    /// Normalise any accepted colour form.
    pub fn normalize(value: &ColourValue) -> Result<Self> {
        match value {
            ColourValue::Hex(s) => Self::from_hex(s),
            // Truncation keeps the low 32 bits, negatives included.
            ColourValue::Int(n) => Ok(Self(*n as u32)),
        }
    }

    /// Parse a hex colour string.
    ///
    /// Supports formats (case-insensitive, `#` or `0x` prefix optional):
    /// - `RRGGBB` (alpha defaults to `FF`)
    /// - `RRGGBBAA`
    pub fn from_hex(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        let hex = trimmed
            .strip_prefix('#')
            .or_else(|| trimmed.strip_prefix("0x"))
            .or_else(|| trimmed.strip_prefix("0X"))
            .unwrap_or(trimmed);

        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid(s));
        }

        let packed = match hex.len() {
            6 => u32::from_str_radix(hex, 16).map(|rgb| (rgb << 8) | 0xFF),
            8 => u32::from_str_radix(hex, 16),
            _ => return Err(invalid(s)),
        };

        packed.map(Self).map_err(|_| invalid(s))
    }
}

impl FromStr for Colour {
    type Err = BgError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:08x}", self.0)
    }
}

impl From<Colour> for u32 {
    fn from(colour: Colour) -> Self {
        colour.0
    }
}

/// A colour as written in a catalogue: a hex string or a raw integer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColourValue {
    Int(i128),
    Hex(String),
}

impl ColourValue {
    pub fn hex(s: impl Into<String>) -> Self {
        Self::Hex(s.into())
    }
}

impl From<&str> for ColourValue {
    fn from(s: &str) -> Self {
        Self::Hex(s.to_string())
    }
}

impl From<String> for ColourValue {
    fn from(s: String) -> Self {
        Self::Hex(s)
    }
}

impl From<u32> for ColourValue {
    fn from(n: u32) -> Self {
        Self::Int(i128::from(n))
    }
}

impl From<Colour> for ColourValue {
    fn from(colour: Colour) -> Self {
        Self::from(colour.value())
    }
}

impl fmt::Display for ColourValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColourValue::Hex(s) => write!(f, "{}", s),
            ColourValue::Int(n) => write!(f, "{}", n),
        }
    }
}

fn invalid(s: &str) -> BgError {
    BgError::InvalidColorFormat {
        value: s.to_string(),
    }
}
