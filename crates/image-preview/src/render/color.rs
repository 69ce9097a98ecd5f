//! Hex colors for the renderers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Fill used by the preview when no options are given.
pub const DEFAULT_FILL: Rgb = Rgb::new(0x39, 0x3a, 0x35);

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ColorParseError {
    #[error("invalid color `{0}`: expected `#rgb` or `#rrggbb`")]
    Invalid(String),
}

/// 24-bit RGB color, written as `#rrggbb`.
///
/// Serializes as its hex string, so options files carry colors in the
/// same notation as stylesheets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = ColorParseError;

    /// Parses `#rrggbb` or the shorthand `#rgb`.
    ///
    /// Examples:
    /// - `"#393a35" -> Rgb::new(0x39, 0x3a, 0x35)`
    /// - `"#f0c" -> Rgb::new(0xff, 0x00, 0xcc)`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ColorParseError::Invalid(s.to_string());
        let hex = s.strip_prefix('#').ok_or_else(invalid)?;
        // byte slicing below requires ASCII
        if !hex.is_ascii() {
            return Err(invalid());
        }
        match hex.len() {
            6 => {
                let r = u8::from_str_radix(&hex[0..2], 16).map_err(|_| invalid())?;
                let g = u8::from_str_radix(&hex[2..4], 16).map_err(|_| invalid())?;
                let b = u8::from_str_radix(&hex[4..6], 16).map_err(|_| invalid())?;
                Ok(Self::new(r, g, b))
            }
            3 => {
                let r = u8::from_str_radix(&hex[0..1], 16).map_err(|_| invalid())?;
                let g = u8::from_str_radix(&hex[1..2], 16).map_err(|_| invalid())?;
                let b = u8::from_str_radix(&hex[2..3], 16).map_err(|_| invalid())?;
                Ok(Self::new(r * 17, g * 17, b * 17))
            }
            _ => Err(invalid()),
        }
    }
}

impl Serialize for Rgb {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Rgb {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}
