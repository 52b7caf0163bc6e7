//! Device-unit HSV color representation and conversions.

use super::Color;

/// A color in the units the device reports: hue in 0-360 degrees,
/// saturation and brightness in 0-100 percent.
///
/// Distinct from normalized 0-1 HSV. Conversions truncate toward zero
/// when rescaling, matching the panel firmware's integer handling.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hsv {
    hue: u16,
    saturation: u8,
    brightness: u8,
}

impl Hsv {
    /// Create a new Hsv with the given device-unit components.
    ///
    /// Returns `None` if any component is outside its device range.
    ///
    /// # Examples
    ///
    /// ```
    /// use aurora_lights_rs::Hsv;
    ///
    /// assert!(Hsv::create(360, 100, 100).is_some());
    /// assert!(Hsv::create(361, 100, 100).is_none());
    /// assert!(Hsv::create(0, 101, 0).is_none());
    /// ```
    pub fn create(hue: u16, saturation: u8, brightness: u8) -> Option<Self> {
        if hue <= 360 && saturation <= 100 && brightness <= 100 {
            Some(Hsv {
                hue,
                saturation,
                brightness,
            })
        } else {
            None
        }
    }

    pub fn hue(&self) -> u16 {
        self.hue
    }

    pub fn saturation(&self) -> u8 {
        self.saturation
    }

    pub fn brightness(&self) -> u8 {
        self.brightness
    }

    /// Convert to 0-255 RGB.
    pub fn to_color(&self) -> Color {
        let s = f32::from(self.saturation) / 100.0;
        let v = f32::from(self.brightness) / 100.0;

        if s == 0.0 {
            let gray = (v * 255.0) as u8;
            return Color::rgb(gray, gray, gray);
        }

        let h = f32::from(self.hue) / 60.0;
        let i = h.floor() as i32;
        let f = h - i as f32;
        let p = v * (1.0 - s);
        let q = v * (1.0 - s * f);
        let t = v * (1.0 - s * (1.0 - f));

        let (r, g, b) = match i % 6 {
            0 => (v, t, p),
            1 => (q, v, p),
            2 => (p, v, t),
            3 => (p, q, v),
            4 => (t, p, v),
            _ => (v, p, q),
        };

        Color::rgb((r * 255.0) as u8, (g * 255.0) as u8, (b * 255.0) as u8)
    }
}

impl Color {
    /// Convert to device-unit HSV.
    pub fn to_hsv(&self) -> Hsv {
        let r = f32::from(self.red) / 255.0;
        let g = f32::from(self.green) / 255.0;
        let b = f32::from(self.blue) / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let delta = max - min;

        let hue = if delta == 0.0 {
            0.0
        } else if max == r {
            60.0 * (((g - b) / delta) % 6.0)
        } else if max == g {
            60.0 * ((b - r) / delta + 2.0)
        } else {
            60.0 * ((r - g) / delta + 4.0)
        };
        let hue = if hue < 0.0 { hue + 360.0 } else { hue };

        let saturation = if max == 0.0 { 0.0 } else { delta / max };

        Hsv {
            hue: hue as u16,
            saturation: (saturation * 100.0) as u8,
            brightness: (max * 100.0) as u8,
        }
    }
}

impl From<&Hsv> for Color {
    fn from(hsv: &Hsv) -> Self {
        hsv.to_color()
    }
}
