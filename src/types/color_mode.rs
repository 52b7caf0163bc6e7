//! Color-mode discriminator reported by the device.

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// How the device is currently producing color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
pub enum ColorMode {
    /// A stored effect drives the panels.
    #[serde(rename = "effect")]
    #[strum(serialize = "effect")]
    Effect,
    /// A static hue/saturation color.
    #[serde(rename = "hs")]
    #[strum(serialize = "hs")]
    HueSaturation,
    /// A static color temperature.
    #[serde(rename = "ct")]
    #[strum(serialize = "ct")]
    ColorTemperature,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_wire_strings() {
        assert_eq!(
            serde_json::from_str::<ColorMode>("\"effect\"").unwrap(),
            ColorMode::Effect
        );
        assert_eq!(
            serde_json::from_str::<ColorMode>("\"hs\"").unwrap(),
            ColorMode::HueSaturation
        );
        assert_eq!(
            serde_json::from_str::<ColorMode>("\"ct\"").unwrap(),
            ColorMode::ColorTemperature
        );
        assert!(serde_json::from_str::<ColorMode>("\"disco\"").is_err());
    }

    #[test]
    fn test_display_matches_wire_form() {
        assert_eq!(ColorMode::Effect.to_string(), "effect");
        assert_eq!(ColorMode::from_str("ct").unwrap(), ColorMode::ColorTemperature);
    }
}
