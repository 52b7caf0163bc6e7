//! Panel layout data reported by the device.

use serde::{Deserialize, Serialize};

/// Position and orientation of a single panel.
///
/// Coordinates are in the device's own layout space, with one side
/// length (see `panel_length`) between neighboring panel centers.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PanelPosition {
    pub panel_id: u32,
    pub x: i32,
    pub y: i32,
    /// Rotation of the panel in degrees.
    #[serde(rename = "o")]
    pub orientation: i32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserializes_device_field_names() {
        let position: PanelPosition =
            serde_json::from_value(json!({"panelId": 42, "x": 100, "y": -50, "o": 60})).unwrap();
        assert_eq!(position.panel_id, 42);
        assert_eq!(position.x, 100);
        assert_eq!(position.y, -50);
        assert_eq!(position.orientation, 60);
    }
}
