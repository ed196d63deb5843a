//! Turn-on commands as a host hands them over.

use log::warn;
use serde_json::Value;

use crate::errors::Error;
use crate::types::HueSaturation;

type Result<T> = std::result::Result<T, Error>;

/// The color part of a turn-on command.
///
/// Hue/saturation and color temperature are mutually exclusive; a command
/// carries at most one of them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColorCommand {
    /// Hue in degrees (0-360) and saturation in percent (0-100), as floats.
    HueSaturation { hue: f32, saturation: f32 },
    /// Color temperature in Kelvin, passed to the panels as is.
    ColorTemp(u16),
}

impl ColorCommand {
    /// Whole-number hue/saturation the panels accept, if this is a color.
    pub fn hue_saturation(&self) -> Option<HueSaturation> {
        match *self {
            ColorCommand::HueSaturation { hue, saturation } => {
                Some(HueSaturation::from_float(hue, saturation))
            }
            ColorCommand::ColorTemp(_) => None,
        }
    }
}

/// Attributes of a turn-on command.
///
/// An empty command only switches the panels on.
///
/// # Examples
///
/// ```
/// use nanoleaf_lights_rs::{ColorCommand, TurnOn};
///
/// let mut command = TurnOn::new();
/// assert!(command.is_power_only());
///
/// command.brightness(128).hs_color(240.0, 80.0);
/// assert_eq!(command.brightness_level(), Some(128));
/// assert_eq!(
///     command.color(),
///     Some(&ColorCommand::HueSaturation { hue: 240.0, saturation: 80.0 })
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TurnOn {
    pub(crate) brightness: Option<u8>,
    pub(crate) color: Option<ColorCommand>,
}

impl TurnOn {
    pub const ATTR_BRIGHTNESS: &'static str = "brightness";
    pub const ATTR_HS_COLOR: &'static str = "hs_color";
    pub const ATTR_COLOR_TEMP_KELVIN: &'static str = "color_temp_kelvin";

    pub fn new() -> Self {
        Self::default()
    }

    /// Set the host brightness level (0-255).
    pub fn brightness(&mut self, level: u8) -> &mut Self {
        self.brightness = Some(level);
        self
    }

    /// Set a hue/saturation color, replacing any color temperature.
    pub fn hs_color(&mut self, hue: f32, saturation: f32) -> &mut Self {
        self.color = Some(ColorCommand::HueSaturation { hue, saturation });
        self
    }

    /// Set a color temperature, replacing any hue/saturation color.
    pub fn color_temp(&mut self, kelvin: u16) -> &mut Self {
        self.color = Some(ColorCommand::ColorTemp(kelvin));
        self
    }

    pub fn brightness_level(&self) -> Option<u8> {
        self.brightness
    }

    pub fn color(&self) -> Option<&ColorCommand> {
        self.color.as_ref()
    }

    pub fn is_power_only(&self) -> bool {
        self.brightness.is_none() && self.color.is_none()
    }

    /// Build a command from a host attribute object.
    ///
    /// Recognised keys are `brightness`, `hs_color` (`[hue, saturation]`) and
    /// `color_temp_kelvin`; anything else is ignored. When both color keys are
    /// present the hue/saturation color is used and a warning is logged.
    ///
    /// # Examples
    ///
    /// ```
    /// use nanoleaf_lights_rs::{ColorCommand, TurnOn};
    /// use serde_json::json;
    ///
    /// let command = TurnOn::from_attributes(&json!({"color_temp_kelvin": 3000})).unwrap();
    /// assert_eq!(command.color(), Some(&ColorCommand::ColorTemp(3000)));
    ///
    /// assert!(TurnOn::from_attributes(&json!({"brightness": 300})).is_err());
    /// ```
    pub fn from_attributes(attributes: &Value) -> Result<Self> {
        let Some(attributes) = attributes.as_object() else {
            if attributes.is_null() {
                return Ok(Self::new());
            }
            return Err(Error::invalid_attribute("attributes", "expected an object"));
        };

        let mut command = Self::new();

        if let Some(value) = attributes.get(Self::ATTR_BRIGHTNESS) {
            let level = value
                .as_f64()
                .filter(|v| (0.0..=255.0).contains(v))
                .ok_or_else(|| {
                    Error::invalid_attribute(Self::ATTR_BRIGHTNESS, "expected a number 0-255")
                })?;
            command.brightness(level.round_ties_even() as u8);
        }

        let hs = attributes
            .get(Self::ATTR_HS_COLOR)
            .map(parse_hs_color)
            .transpose()?;
        let kelvin = attributes
            .get(Self::ATTR_COLOR_TEMP_KELVIN)
            .map(|value| {
                value
                    .as_u64()
                    .and_then(|v| u16::try_from(v).ok())
                    .ok_or_else(|| {
                        Error::invalid_attribute(
                            Self::ATTR_COLOR_TEMP_KELVIN,
                            "expected a whole number of Kelvin",
                        )
                    })
            })
            .transpose()?;

        match (hs, kelvin) {
            (Some((hue, saturation)), Some(kelvin)) => {
                warn!(
                    "both hs_color and color_temp_kelvin given, using hs_color and ignoring {}K",
                    kelvin
                );
                command.hs_color(hue, saturation);
            }
            (Some((hue, saturation)), None) => {
                command.hs_color(hue, saturation);
            }
            (None, Some(kelvin)) => {
                command.color_temp(kelvin);
            }
            (None, None) => {}
        }

        Ok(command)
    }
}

fn parse_hs_color(value: &Value) -> Result<(f32, f32)> {
    let invalid = || Error::invalid_attribute(TurnOn::ATTR_HS_COLOR, "expected [hue, saturation]");
    match value.as_array().map(Vec::as_slice) {
        Some([hue, saturation]) => {
            let hue = hue.as_f64().ok_or_else(invalid)?;
            let saturation = saturation.as_f64().ok_or_else(invalid)?;
            Ok((hue as f32, saturation as f32))
        }
        _ => Err(invalid()),
    }
}
