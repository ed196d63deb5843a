//! Hue and Saturation color representation.

use serde::{Deserialize, Serialize};

/// Hue and Saturation color representation.
///
/// - Hue: The color angle on the color wheel (0-360 degrees)
/// - Saturation: The intensity of the color (0-100 percent)
///
/// Hosts hand these over as floats; the panels only take whole numbers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HueSaturation {
    hue: u16,
    saturation: u8,
}

impl HueSaturation {
    const MAX_HUE: u16 = 360;
    const MAX_SATURATION: u8 = 100;

    /// Create a new HueSaturation with the given values.
    ///
    /// Returns `None` if values are outside valid ranges.
    ///
    /// # Examples
    ///
    /// ```
    /// use nanoleaf_lights_rs::HueSaturation;
    ///
    /// assert!(HueSaturation::create(0, 100).is_some());   // Red at full saturation
    /// assert!(HueSaturation::create(120, 50).is_some()); // Green at 50% saturation
    /// assert!(HueSaturation::create(361, 50).is_none()); // Invalid hue
    /// assert!(HueSaturation::create(180, 101).is_none()); // Invalid saturation
    /// ```
    pub fn create(hue: u16, saturation: u8) -> Option<Self> {
        if hue <= Self::MAX_HUE && saturation <= Self::MAX_SATURATION {
            Some(HueSaturation { hue, saturation })
        } else {
            None
        }
    }

    /// Round float components to the nearest whole value, clamping into range.
    ///
    /// Halves round to the nearest even value.
    ///
    /// # Examples
    ///
    /// ```
    /// use nanoleaf_lights_rs::HueSaturation;
    ///
    /// let hs = HueSaturation::from_float(120.4, 49.6);
    /// assert_eq!(hs.hue(), 120);
    /// assert_eq!(hs.saturation(), 50);
    ///
    /// let hs = HueSaturation::from_float(400.0, -3.0);
    /// assert_eq!(hs.hue(), 360);
    /// assert_eq!(hs.saturation(), 0);
    /// ```
    pub fn from_float(hue: f32, saturation: f32) -> Self {
        let hue = hue.round_ties_even().clamp(0.0, f32::from(Self::MAX_HUE)) as u16;
        let saturation = saturation
            .round_ties_even()
            .clamp(0.0, f32::from(Self::MAX_SATURATION)) as u8;
        HueSaturation { hue, saturation }
    }

    /// Get the hue value.
    pub fn hue(&self) -> u16 {
        self.hue
    }

    /// Get the saturation value.
    pub fn saturation(&self) -> u8 {
        self.saturation
    }

    /// The pair as floats, the way hosts expect an `hs_color`.
    pub fn to_float(&self) -> (f32, f32) {
        (f32::from(self.hue), f32::from(self.saturation))
    }
}
