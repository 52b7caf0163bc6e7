//! Typed request bodies for the `state` and `effects` endpoints.

use serde::Serialize;

/// One component of a state write: an absolute value or a relative
/// increment.
#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Level {
    #[serde(rename = "value")]
    Value(i32),
    #[serde(rename = "increment")]
    Increment(i32),
}

/// A partial update of the device state.
///
/// Only the components that were set are serialized, so one builder
/// covers every `state` write from a lone brightness change to a
/// combined hue+saturation+brightness color write.
#[serde_with::skip_serializing_none]
#[derive(Default, Debug, Serialize, Clone)]
pub(crate) struct StateUpdate {
    on: Option<bool>,
    brightness: Option<Level>,
    hue: Option<Level>,
    sat: Option<Level>,
    ct: Option<Level>,
}

impl StateUpdate {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn on(&mut self, value: bool) {
        self.on = Some(value);
    }

    pub(crate) fn brightness(&mut self, level: Level) {
        self.brightness = Some(level);
    }

    pub(crate) fn hue(&mut self, level: Level) {
        self.hue = Some(level);
    }

    pub(crate) fn saturation(&mut self, level: Level) {
        self.sat = Some(level);
    }

    pub(crate) fn color_temperature(&mut self, level: Level) {
        self.ct = Some(level);
    }
}

/// Envelope for writes to the effects endpoint: `{"write": {...}}`.
#[derive(Debug, Serialize, Clone)]
pub(crate) struct EffectWrite<T> {
    pub(crate) write: T,
}

/// Commands accepted inside the effects `write` envelope.
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
#[serde(tag = "command", rename_all = "camelCase")]
pub(crate) enum EffectCommand {
    /// Request the details of one stored effect.
    #[serde(rename_all = "camelCase")]
    Request { anim_name: String },
    /// Request the details of every stored effect.
    RequestAll,
    /// Remove a stored effect.
    #[serde(rename_all = "camelCase")]
    Delete { anim_name: String },
    /// Rename a stored effect.
    #[serde(rename_all = "camelCase")]
    Rename {
        anim_name: String,
        new_name: String,
    },
}
