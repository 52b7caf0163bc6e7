//! RGB color representation and parsing.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::Error;

const CHANNEL_NAMES: [&str; 3] = ["red", "green", "blue"];

/// An RGB color with red, green, and blue components (0-255 each).
#[derive(Default, Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub(crate) red: u8,
    pub(crate) green: u8,
    pub(crate) blue: u8,
}

impl Color {
    /// Create a color with the given RGB values.
    pub fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    pub fn red(&self) -> u8 {
        self.red
    }

    pub fn green(&self) -> u8 {
        self.green
    }

    pub fn blue(&self) -> u8 {
        self.blue
    }

    /// Build a color from a sequence of numeric channels.
    ///
    /// Expects exactly three values, each within 0-255; the error names
    /// the offending channel.
    ///
    /// # Examples
    ///
    /// ```
    /// use aurora_lights_rs::Color;
    ///
    /// assert_eq!(Color::from_channels(&[255, 128, 0]).unwrap(), Color::rgb(255, 128, 0));
    /// assert!(Color::from_channels(&[300, 0, 0]).is_err());
    /// assert!(Color::from_channels(&[0, 0]).is_err());
    /// ```
    pub fn from_channels(channels: &[i64]) -> Result<Self, Error> {
        if channels.len() != 3 {
            return Err(Error::InvalidColor(format!(
                "expected three channels, got {}",
                channels.len()
            )));
        }
        let mut rgb = [0u8; 3];
        for (slot, (&value, name)) in rgb.iter_mut().zip(channels.iter().zip(CHANNEL_NAMES)) {
            *slot = u8::try_from(value).map_err(|_| {
                Error::InvalidColor(format!("{name} value out of range (0-255): {value}"))
            })?;
        }
        Ok(Self::rgb(rgb[0], rgb[1], rgb[2]))
    }

    /// Parse a six-digit hexadecimal color, case-insensitive, without a
    /// leading `#`.
    ///
    /// # Examples
    ///
    /// ```
    /// use aurora_lights_rs::Color;
    ///
    /// assert_eq!(Color::from_hex("FF8000").unwrap(), Color::rgb(255, 128, 0));
    /// assert_eq!(Color::from_hex("ff8000").unwrap(), Color::rgb(255, 128, 0));
    /// assert!(Color::from_hex("ZZ0000").is_err());
    /// ```
    pub fn from_hex(hex: &str) -> Result<Self, Error> {
        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(Error::InvalidColor(format!(
                "expected six hexadecimal digits, got {hex:?}"
            )));
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16)
                .map_err(|_| Error::InvalidColor(format!("invalid hex digits in {hex:?}")))
        };
        Ok(Self::rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }
}

impl FromStr for Color {
    type Err = Error;

    /// Parse from either a comma-separated triplet ("255,128,0") or a
    /// six-digit hex string ("FF8000").
    fn from_str(s: &str) -> Result<Self, Error> {
        if s.contains(',') {
            let channels = s
                .split(',')
                .map(|part| {
                    part.trim().parse::<i64>().map_err(|_| {
                        Error::InvalidColor(format!("channel is not a number: {part:?}"))
                    })
                })
                .collect::<Result<Vec<_>, _>>()?;
            Self::from_channels(&channels)
        } else {
            Self::from_hex(s)
        }
    }
}
