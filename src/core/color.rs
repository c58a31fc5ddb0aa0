//! RGB color value type
//!
//! Provides the immutable 24-bit color used by every palette slot, plus the
//! string and numeric views the output formats need:
//! - bare and CSS hex strings
//! - packed 24-bit integers
//! - normalized float components

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};
use thiserror::Error;

/// Color validation errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A component is outside `0..=255`
    #[error("{channel} component out of range: {value}")]
    ComponentOutOfRange {
        /// Channel name (`r`, `g` or `b`)
        channel: char,
        /// Offending value
        value: i64,
    },

    /// Hex string is not exactly six characters long
    #[error("hex color string must be 6 characters long, got {0}")]
    HexLength(usize),

    /// Hex string contains non-hex characters
    #[error("invalid hex color string: {0:?}")]
    HexDigits(String),

    /// Component index is not 0, 1 or 2
    #[error("color component index out of range: {0}")]
    ComponentIndex(usize),
}

/// An immutable RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    /// Red component
    pub r: u8,
    /// Green component
    pub g: u8,
    /// Blue component
    pub b: u8,
}

impl Color {
    /// Create a color from 8-bit components
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create a color from wide integer components, checking each range
    pub fn from_components(r: i64, g: i64, b: i64) -> Result<Self, ValidationError> {
        let check = |channel: char, value: i64| {
            u8::try_from(value).map_err(|_| ValidationError::ComponentOutOfRange { channel, value })
        };
        Ok(Self::new(check('r', r)?, check('g', g)?, check('b', b)?))
    }

    /// Parse exactly six hex digits (no `#` prefix)
    pub fn from_hex(s: &str) -> Result<Self, ValidationError> {
        let len = s.chars().count();
        if len != 6 {
            return Err(ValidationError::HexLength(len));
        }
        let bytes = hex::decode(s).map_err(|_| ValidationError::HexDigits(s.to_string()))?;
        Ok(Self::new(bytes[0], bytes[1], bytes[2]))
    }

    /// Six lowercase hex digits
    pub fn hex(&self) -> String {
        hex::encode([self.r, self.g, self.b])
    }

    /// `#rrggbb`
    pub fn css_hex(&self) -> String {
        format!("#{}", self.hex())
    }

    /// Packed `0xRRGGBB`
    pub fn rgb888(&self) -> u32 {
        (u32::from(self.r) << 16) | (u32::from(self.g) << 8) | u32::from(self.b)
    }

    /// Components scaled into `0.0..=1.0`
    pub fn float_rgb(&self) -> (f64, f64, f64) {
        (
            f64::from(self.r) / 255.0,
            f64::from(self.g) / 255.0,
            f64::from(self.b) / 255.0,
        )
    }

    /// Component by position: 0 = r, 1 = g, 2 = b
    pub fn component(&self, index: usize) -> Result<u8, ValidationError> {
        match index {
            0 => Ok(self.r),
            1 => Ok(self.g),
            2 => Ok(self.b),
            _ => Err(ValidationError::ComponentIndex(index)),
        }
    }

    /// Components as an array
    pub fn components(&self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Color {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl IntoIterator for Color {
    type Item = u8;
    type IntoIter = std::array::IntoIter<u8, 3>;

    fn into_iter(self) -> Self::IntoIter {
        self.components().into_iter()
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.css_hex())
    }
}
