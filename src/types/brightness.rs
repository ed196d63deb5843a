//! Brightness conversion between the host and the panels.

use serde::{Deserialize, Serialize};

/// Brightness as the panels understand it, from 0 to 100 percent.
///
/// Hosts usually work on a 0-255 scale ("level"); [`Brightness::from_level`]
/// and [`Brightness::to_level`] convert between the two. The round trip is
/// lossy: a level survives it to within 3 steps.
#[derive(Default, Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct Brightness {
    pub(crate) value: u8,
}

impl Brightness {
    const MAX: u8 = 100;
    const LEVEL_SCALE: f64 = 2.55;

    /// Full brightness (100%).
    pub fn new() -> Self {
        Brightness { value: Self::MAX }
    }

    pub fn value(&self) -> u8 {
        self.value
    }

    /// Returns None if value is above 100.
    ///
    /// # Examples
    ///
    /// ```
    /// use nanoleaf_lights_rs::Brightness;
    ///
    /// assert!(Brightness::create(0).is_some());
    /// assert!(Brightness::create(100).is_some());
    /// assert!(Brightness::create(101).is_none());
    /// ```
    pub fn create(value: u8) -> Option<Self> {
        if value <= Self::MAX {
            Some(Brightness { value })
        } else {
            None
        }
    }

    /// Clamps values above 100 down to 100.
    pub fn saturating(value: u8) -> Self {
        Brightness {
            value: value.min(Self::MAX),
        }
    }

    /// Convert a 0-255 host level to a percentage: `round(level / 2.55)`.
    ///
    /// Halves round to the nearest even value.
    ///
    /// # Examples
    ///
    /// ```
    /// use nanoleaf_lights_rs::Brightness;
    ///
    /// assert_eq!(Brightness::from_level(255).value(), 100);
    /// assert_eq!(Brightness::from_level(128).value(), 50);
    /// assert_eq!(Brightness::from_level(0).value(), 0);
    /// ```
    pub fn from_level(level: u8) -> Self {
        let value = (f64::from(level) / Self::LEVEL_SCALE).round_ties_even();
        Self::saturating(value as u8)
    }

    /// Convert back to a 0-255 host level: `round(value * 2.55)`,
    /// with halves rounding to even.
    ///
    /// # Examples
    ///
    /// ```
    /// use nanoleaf_lights_rs::Brightness;
    ///
    /// assert_eq!(Brightness::new().to_level(), 255);
    /// assert_eq!(Brightness::create(50).unwrap().to_level(), 127);
    /// ```
    pub fn to_level(&self) -> u8 {
        let level = (f64::from(self.value) * Self::LEVEL_SCALE).round_ties_even();
        level.min(f64::from(u8::MAX)) as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_round_trip_within_three() {
        for level in 0..=u8::MAX {
            let back = Brightness::from_level(level).to_level();
            let diff = (i16::from(back) - i16::from(level)).abs();
            assert!(diff <= 3, "level {level} came back as {back}");
        }
    }

    #[test]
    fn test_to_level_ties_round_to_even() {
        // 10, 30 and 70 times 2.55 land exactly on .5
        assert_eq!(Brightness::create(10).unwrap().to_level(), 26);
        assert_eq!(Brightness::create(30).unwrap().to_level(), 76);
        assert_eq!(Brightness::create(70).unwrap().to_level(), 178);
        assert_eq!(Brightness::create(40).unwrap().to_level(), 102);
    }

    #[test]
    fn test_saturating_clamps() {
        assert_eq!(Brightness::saturating(150).value(), 100);
        assert_eq!(Brightness::saturating(42).value(), 42);
    }
}
