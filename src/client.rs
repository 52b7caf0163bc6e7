//! Primary interface for an Aurora light-panel controller.

use std::fmt;
use std::net::Ipv4Addr;

use rand::Rng;
use serde::de::DeserializeOwned;
use serde_json::{Value, json};

use crate::command::{EffectCommand, EffectWrite, Level, StateUpdate};
use crate::errors::Error;
use crate::layout::PanelPosition;
use crate::transport::Transport;
use crate::types::{Color, ColorMode, Hsv};

type Result<T> = std::result::Result<T, Error>;

/// Effects built into the device firmware. They never appear in the
/// stored-effects list and cannot be deleted, renamed, or picked by
/// [`Aurora::effect_random`].
const RESERVED_EFFECTS: [&str; 3] = ["*Static*", "*Dynamic*", "*Solid*"];

/// A handle to a single Aurora light-panel controller.
///
/// The handle holds the device address and an auth token obtained
/// through the device's pairing flow. It keeps no state of its own:
/// every accessor performs a fresh request, so a read always reflects
/// the device rather than a local copy.
///
/// # Example
///
/// ```no_run
/// use std::net::Ipv4Addr;
/// use std::str::FromStr;
/// use aurora_lights_rs::{Aurora, Color};
///
/// # async fn run() -> Result<(), aurora_lights_rs::Error> {
/// let panels = Aurora::new(Ipv4Addr::from_str("192.168.1.100").unwrap(), "my-token");
/// panels.set_on(true).await?;
/// panels.set_rgb(Color::from_str("FF8000")?).await?;
/// # Ok(())
/// # }
/// ```
pub struct Aurora {
    ip: Ipv4Addr,
    transport: Transport,
}

impl Aurora {
    const PORT: u16 = 16021;
    const CT_MIN: u16 = 1200;
    const CT_MAX: u16 = 6500;

    /// Create a handle for the device at `ip` on the standard API port.
    pub fn new(ip: Ipv4Addr, auth_token: &str) -> Self {
        Self::with_port(ip, Self::PORT, auth_token)
    }

    /// Create a handle for a device reachable on a non-standard port.
    pub fn with_port(ip: Ipv4Addr, port: u16, auth_token: &str) -> Self {
        Aurora {
            ip,
            transport: Transport::new(ip, port, auth_token),
        }
    }

    pub fn ip(&self) -> Ipv4Addr {
        self.ip
    }

    // ── Request helpers ──────────────────────────────────────────────

    /// Read an endpoint that must answer with a payload.
    async fn read<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T> {
        let value = self
            .transport
            .get(endpoint)
            .await?
            .ok_or(Error::EmptyResponse)?;
        serde_json::from_value(value).map_err(Error::JsonLoad)
    }

    async fn write_state(&self, update: &StateUpdate) -> Result<()> {
        self.transport.put("state", update).await?;
        Ok(())
    }

    async fn effect_write(&self, command: EffectCommand) -> Result<Option<Value>> {
        self.transport.put("effects", &EffectWrite { write: command }).await
    }

    // ── General ──────────────────────────────────────────────────────

    /// The full info dump the device reports at its root endpoint.
    ///
    /// Useful for debugging; everything in it is also reachable through
    /// a dedicated accessor.
    pub async fn info(&self) -> Result<Value> {
        self.read("").await
    }

    /// The current color mode.
    pub async fn color_mode(&self) -> Result<ColorMode> {
        self.read("state/colorMode").await
    }

    /// Briefly flash the panels on and off.
    pub async fn identify(&self) -> Result<()> {
        self.transport.put("identify", &json!({})).await?;
        Ok(())
    }

    /// The firmware version of the device.
    pub async fn firmware_version(&self) -> Result<String> {
        self.read("firmwareVersion").await
    }

    /// The model number of the device.
    pub async fn model(&self) -> Result<String> {
        self.read("model").await
    }

    /// The serial number of the device.
    pub async fn serial_number(&self) -> Result<String> {
        self.read("serialNo").await
    }

    /// Revoke this handle's auth token from the device.
    ///
    /// Every later call with the same token fails with
    /// [`Error::NotAuthorized`].
    pub async fn delete_user(&self) -> Result<()> {
        self.transport.delete("").await?;
        Ok(())
    }

    // ── Power ────────────────────────────────────────────────────────

    /// Whether the panels are currently on.
    pub async fn on(&self) -> Result<bool> {
        self.read("state/on/value").await
    }

    /// Turn the panels on (`true`) or off (`false`).
    pub async fn set_on(&self, value: bool) -> Result<()> {
        let mut update = StateUpdate::new();
        update.on(value);
        self.write_state(&update).await
    }

    /// Whether the panels are currently off.
    pub async fn off(&self) -> Result<bool> {
        Ok(!self.on().await?)
    }

    /// Complement of [`set_on`]: `set_off(true)` issues the exact same
    /// write as `set_on(false)`.
    ///
    /// [`set_on`]: Aurora::set_on
    pub async fn set_off(&self, value: bool) -> Result<()> {
        self.set_on(!value).await
    }

    /// Switch the on/off state.
    ///
    /// Reads the current state, then writes its negation. The two
    /// requests are not atomic; an external change landing in between
    /// wins.
    pub async fn toggle(&self) -> Result<()> {
        let on = self.on().await?;
        self.set_on(!on).await
    }

    // ── Brightness ───────────────────────────────────────────────────

    /// The current brightness (0-100).
    pub async fn brightness(&self) -> Result<u8> {
        self.read("state/brightness/value").await
    }

    /// Set the brightness to the given level (0-100, device-enforced).
    pub async fn set_brightness(&self, level: u8) -> Result<()> {
        let mut update = StateUpdate::new();
        update.brightness(Level::Value(i32::from(level)));
        self.write_state(&update).await
    }

    /// The minimum brightness the device reports.
    pub async fn brightness_min(&self) -> Result<u8> {
        self.read("state/brightness/min").await
    }

    /// The maximum brightness the device reports.
    pub async fn brightness_max(&self) -> Result<u8> {
        self.read("state/brightness/max").await
    }

    /// Raise the brightness by a relative amount (negative lowers it).
    pub async fn brightness_raise(&self, delta: i32) -> Result<()> {
        let mut update = StateUpdate::new();
        update.brightness(Level::Increment(delta));
        self.write_state(&update).await
    }

    /// Lower the brightness by a relative amount (negative raises it).
    pub async fn brightness_lower(&self, delta: i32) -> Result<()> {
        self.brightness_raise(-delta).await
    }

    // ── Hue ──────────────────────────────────────────────────────────

    /// The current hue (0-360).
    pub async fn hue(&self) -> Result<u16> {
        self.read("state/hue/value").await
    }

    /// Set the hue to the given angle (0-360, device-enforced).
    pub async fn set_hue(&self, level: u16) -> Result<()> {
        let mut update = StateUpdate::new();
        update.hue(Level::Value(i32::from(level)));
        self.write_state(&update).await
    }

    /// The minimum hue the device reports.
    pub async fn hue_min(&self) -> Result<u16> {
        self.read("state/hue/min").await
    }

    /// The maximum hue the device reports.
    pub async fn hue_max(&self) -> Result<u16> {
        self.read("state/hue/max").await
    }

    /// Raise the hue by a relative amount (negative lowers it).
    pub async fn hue_raise(&self, delta: i32) -> Result<()> {
        let mut update = StateUpdate::new();
        update.hue(Level::Increment(delta));
        self.write_state(&update).await
    }

    /// Lower the hue by a relative amount (negative raises it).
    pub async fn hue_lower(&self, delta: i32) -> Result<()> {
        self.hue_raise(-delta).await
    }

    // ── Saturation ───────────────────────────────────────────────────

    /// The current saturation (0-100).
    pub async fn saturation(&self) -> Result<u8> {
        self.read("state/sat/value").await
    }

    /// Set the saturation to the given level (0-100, device-enforced).
    pub async fn set_saturation(&self, level: u8) -> Result<()> {
        let mut update = StateUpdate::new();
        update.saturation(Level::Value(i32::from(level)));
        self.write_state(&update).await
    }

    /// The minimum saturation the device reports.
    pub async fn saturation_min(&self) -> Result<u8> {
        self.read("state/sat/min").await
    }

    /// The maximum saturation the device reports.
    pub async fn saturation_max(&self) -> Result<u8> {
        self.read("state/sat/max").await
    }

    /// Raise the saturation by a relative amount (negative lowers it).
    pub async fn saturation_raise(&self, delta: i32) -> Result<()> {
        let mut update = StateUpdate::new();
        update.saturation(Level::Increment(delta));
        self.write_state(&update).await
    }

    /// Lower the saturation by a relative amount (negative raises it).
    pub async fn saturation_lower(&self, delta: i32) -> Result<()> {
        self.saturation_raise(-delta).await
    }

    // ── Color temperature ────────────────────────────────────────────

    /// The current color temperature in Kelvin.
    pub async fn color_temperature(&self) -> Result<u16> {
        self.read("state/ct/value").await
    }

    /// Set the color temperature in Kelvin (1200-6500, device-enforced).
    pub async fn set_color_temperature(&self, level: u16) -> Result<()> {
        let mut update = StateUpdate::new();
        update.color_temperature(Level::Value(i32::from(level)));
        self.write_state(&update).await
    }

    /// The lowest supported color temperature.
    ///
    /// Firmware 1.5.0 reports a wrong minimum for `state/ct`, so the
    /// known hardware limit is returned without asking the device.
    pub fn color_temperature_min(&self) -> u16 {
        Self::CT_MIN
    }

    /// The highest supported color temperature.
    ///
    /// Hardcoded for the same firmware reason as
    /// [`color_temperature_min`](Aurora::color_temperature_min).
    pub fn color_temperature_max(&self) -> u16 {
        Self::CT_MAX
    }

    /// Raise the color temperature by a relative amount (negative
    /// lowers it).
    pub async fn color_temperature_raise(&self, delta: i32) -> Result<()> {
        let mut update = StateUpdate::new();
        update.color_temperature(Level::Increment(delta));
        self.write_state(&update).await
    }

    /// Lower the color temperature by a relative amount (negative
    /// raises it).
    pub async fn color_temperature_lower(&self, delta: i32) -> Result<()> {
        self.color_temperature_raise(-delta).await
    }

    // ── RGB color ────────────────────────────────────────────────────

    /// The current color as 0-255 RGB.
    ///
    /// Reads hue, saturation, and brightness in sequence; if any of the
    /// three reads fails, the whole read fails rather than producing a
    /// partial color.
    pub async fn rgb(&self) -> Result<Color> {
        let hue = self.hue().await?;
        let saturation = self.saturation().await?;
        let brightness = self.brightness().await?;
        let hsv = Hsv::create(hue, saturation, brightness).ok_or_else(|| {
            Error::InvalidColor(format!(
                "device reported out-of-range state: hue {hue}, sat {saturation}, brightness {brightness}"
            ))
        })?;
        Ok(hsv.to_color())
    }

    /// Set the color from 0-255 RGB values.
    ///
    /// The color is converted to the device's hue/saturation/brightness
    /// units and written in a single request.
    pub async fn set_rgb(&self, color: Color) -> Result<()> {
        let hsv = color.to_hsv();
        let mut update = StateUpdate::new();
        update.hue(Level::Value(i32::from(hsv.hue())));
        update.saturation(Level::Value(i32::from(hsv.saturation())));
        update.brightness(Level::Value(i32::from(hsv.brightness())));
        self.write_state(&update).await
    }

    // ── Layout ───────────────────────────────────────────────────────

    /// The global orientation of the layout (0-360 degrees).
    pub async fn orientation(&self) -> Result<u16> {
        self.read("panelLayout/globalOrientation/value").await
    }

    /// The minimum global orientation the device reports.
    pub async fn orientation_min(&self) -> Result<u16> {
        self.read("panelLayout/globalOrientation/min").await
    }

    /// The maximum global orientation the device reports.
    pub async fn orientation_max(&self) -> Result<u16> {
        self.read("panelLayout/globalOrientation/max").await
    }

    /// The number of panels connected to the device.
    pub async fn panel_count(&self) -> Result<u32> {
        self.read("panelLayout/layout/numPanels").await
    }

    /// The side length of a single panel, in layout units.
    pub async fn panel_length(&self) -> Result<u32> {
        self.read("panelLayout/layout/sideLength").await
    }

    /// The position and orientation of every connected panel.
    pub async fn panel_positions(&self) -> Result<Vec<PanelPosition>> {
        self.read("panelLayout/layout/positionData").await
    }

    // ── Effects ──────────────────────────────────────────────────────

    /// The name of the active effect.
    pub async fn effect(&self) -> Result<String> {
        self.read("effects/select").await
    }

    /// Activate the stored effect with the given name.
    pub async fn set_effect(&self, name: &str) -> Result<()> {
        self.transport.put("effects", &json!({"select": name})).await?;
        Ok(())
    }

    /// The names of all effects stored on the device.
    pub async fn effects_list(&self) -> Result<Vec<String>> {
        self.read("effects/effectsList").await
    }

    /// Activate a randomly chosen stored effect and return its name.
    ///
    /// Equivalent to [`effect_random_with`](Aurora::effect_random_with)
    /// with the thread-local generator.
    pub async fn effect_random(&self) -> Result<String> {
        let (pool, active) = self.effect_candidates().await?;
        let pick = pick_effect(&mut rand::rng(), pool, &active)?;
        self.set_effect(&pick).await?;
        Ok(pick)
    }

    /// Activate a stored effect chosen uniformly by `rng` and return
    /// its name.
    ///
    /// The active effect is excluded from the candidates unless it is
    /// one of the built-in pseudo-effects (`*Static*`, `*Dynamic*`,
    /// `*Solid*`), which never appear in the stored list anyway. Fails
    /// with [`Error::NoAlternateEffect`] when no other effect is
    /// stored.
    pub async fn effect_random_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<String> {
        let (pool, active) = self.effect_candidates().await?;
        let pick = pick_effect(rng, pool, &active)?;
        self.set_effect(&pick).await?;
        Ok(pick)
    }

    async fn effect_candidates(&self) -> Result<(Vec<String>, String)> {
        Ok((self.effects_list().await?, self.effect().await?))
    }

    /// Details of one stored effect.
    pub async fn effect_details(&self, name: &str) -> Result<Value> {
        let command = EffectCommand::Request {
            anim_name: name.to_string(),
        };
        self.effect_write(command).await?.ok_or(Error::EmptyResponse)
    }

    /// Details of every effect stored on the device.
    pub async fn effect_details_all(&self) -> Result<Value> {
        self.effect_write(EffectCommand::RequestAll)
            .await?
            .ok_or(Error::EmptyResponse)
    }

    /// Remove a stored effect from the device.
    pub async fn effect_delete(&self, name: &str) -> Result<()> {
        self.effect_write(EffectCommand::Delete {
            anim_name: name.to_string(),
        })
        .await?;
        Ok(())
    }

    /// Rename a stored effect.
    pub async fn effect_rename(&self, old_name: &str, new_name: &str) -> Result<()> {
        self.effect_write(EffectCommand::Rename {
            anim_name: old_name.to_string(),
            new_name: new_name.to_string(),
        })
        .await?;
        Ok(())
    }

    /// Send a raw effect structure to the device.
    ///
    /// `effect_data` must match the vendor's documented effect schema;
    /// it is wrapped in the `write` envelope and otherwise passed
    /// through untouched.
    pub async fn effect_set_raw(&self, effect_data: Value) -> Result<()> {
        self.transport
            .put("effects", &EffectWrite { write: effect_data })
            .await?;
        Ok(())
    }
}

impl fmt::Debug for Aurora {
    // The auth token stays out of debug output.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Aurora")
            .field("ip", &self.ip)
            .finish_non_exhaustive()
    }
}

/// Choose a random effect from `pool`, excluding `active` unless it is
/// a reserved pseudo-effect.
fn pick_effect<R: Rng + ?Sized>(rng: &mut R, mut pool: Vec<String>, active: &str) -> Result<String> {
    if !RESERVED_EFFECTS.contains(&active) {
        pool.retain(|name| name != active);
    }
    if pool.is_empty() {
        return Err(Error::NoAlternateEffect);
    }
    let index = rng.random_range(0..pool.len());
    Ok(pool.swap_remove(index))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn pool(names: &[&str]) -> Vec<String> {
        names.iter().map(|name| name.to_string()).collect()
    }

    #[test]
    fn test_pick_excludes_active_effect() {
        let mut rng = StdRng::seed_from_u64(0);
        for _ in 0..50 {
            let pick = pick_effect(&mut rng, pool(&["Flames", "Forest", "Nemo"]), "Flames").unwrap();
            assert_ne!(pick, "Flames");
        }
    }

    #[test]
    fn test_pick_keeps_full_pool_for_reserved_active() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..50 {
            seen.insert(pick_effect(&mut rng, pool(&["Flames", "Forest"]), "*Solid*").unwrap());
        }
        assert_eq!(seen.len(), 2);
    }

    #[test]
    fn test_pick_fails_without_alternative() {
        let mut rng = StdRng::seed_from_u64(0);
        let result = pick_effect(&mut rng, pool(&["Flames"]), "Flames");
        assert_eq!(result, Err(Error::NoAlternateEffect));

        let result = pick_effect(&mut rng, pool(&[]), "*Static*");
        assert_eq!(result, Err(Error::NoAlternateEffect));
    }

    #[test]
    fn test_pick_is_deterministic_for_a_seed() {
        let names = pool(&["A", "B", "C", "D", "E"]);
        let first = pick_effect(&mut StdRng::seed_from_u64(7), names.clone(), "A").unwrap();
        let second = pick_effect(&mut StdRng::seed_from_u64(7), names, "A").unwrap();
        assert_eq!(first, second);
    }
}
