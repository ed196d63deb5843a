//! Light entity backed by one panel controller.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::command::{ColorCommand, TurnOn};
use crate::connection::Connection;
use crate::device::{Connector, NanoleafApi};
use crate::errors::Error;
use crate::types::{Brightness, ColorMode, HueSaturation, MAX_KELVIN, MIN_KELVIN};

type Result<T> = std::result::Result<T, Error>;

/// Locally cached mirror of a controller's state, in host units.
///
/// Only as fresh as the last [`NanoLight::update`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LightState {
    pub is_on: bool,
    /// 0-255.
    pub brightness: u8,
    pub color_mode: ColorMode,
    pub hs_color: HueSaturation,
    pub color_temp_kelvin: u16,
}

impl LightState {
    fn initial(brightness_only: bool) -> Self {
        LightState {
            is_on: false,
            brightness: 0,
            color_mode: if brightness_only {
                ColorMode::Brightness
            } else {
                ColorMode::HueSaturation
            },
            hs_color: HueSaturation::default(),
            color_temp_kelvin: MAX_KELVIN,
        }
    }
}

/// A light entity for one Nanoleaf controller.
///
/// The entity translates host commands into controller calls and caches the
/// controller's state between polls. Every method awaits its controller calls
/// one at a time; `&mut self` keeps a second command from running alongside.
///
/// # Example
///
/// ```ignore
/// use nanoleaf_lights_rs::{HttpConnector, NanoLight, NanoleafClient, TurnOn};
///
/// let connector = HttpConnector::new("192.168.1.50", NanoleafClient::PORT, "token");
/// let mut light = NanoLight::new(connector, Some("Hallway"), false);
///
/// let mut command = TurnOn::new();
/// command.brightness(200).color_temp(3000);
/// light.turn_on(&command).await?;
/// light.update().await?;
/// ```
pub struct NanoLight<C: Connector> {
    connection: Connection<C>,
    title: Option<String>,
    device_name: String,
    brightness_only: bool,
    state: LightState,
}

impl<C: Connector> NanoLight<C> {
    pub const DEFAULT_NAME: &'static str = "Nanoleaf Light";

    pub fn new(connector: C, title: Option<&str>, brightness_only: bool) -> Self {
        NanoLight {
            connection: Connection::new(connector),
            title: title.map(String::from),
            device_name: Self::DEFAULT_NAME.to_string(),
            brightness_only,
            state: LightState::initial(brightness_only),
        }
    }

    /// The configured title, or the name last read from the controller.
    pub fn name(&self) -> &str {
        self.title.as_deref().unwrap_or(&self.device_name)
    }

    pub fn device_name(&self) -> &str {
        &self.device_name
    }

    pub fn brightness_only(&self) -> bool {
        self.brightness_only
    }

    pub fn state(&self) -> &LightState {
        &self.state
    }

    pub fn is_on(&self) -> bool {
        self.state.is_on
    }

    pub fn brightness(&self) -> u8 {
        self.state.brightness
    }

    pub fn color_mode(&self) -> ColorMode {
        self.state.color_mode
    }

    pub fn supported_color_modes(&self) -> &'static [ColorMode] {
        if self.brightness_only {
            &[ColorMode::Brightness]
        } else {
            &[ColorMode::ColorTemp, ColorMode::HueSaturation]
        }
    }

    pub fn hs_color(&self) -> (f32, f32) {
        self.state.hs_color.to_float()
    }

    pub fn color_temp_kelvin(&self) -> u16 {
        self.state.color_temp_kelvin
    }

    pub fn min_color_temp_kelvin(&self) -> u16 {
        MIN_KELVIN
    }

    pub fn max_color_temp_kelvin(&self) -> u16 {
        MAX_KELVIN
    }

    pub fn connector(&self) -> &C {
        self.connection.connector()
    }

    /// Live handle to the controller, reconnecting if needed.
    pub async fn device(&mut self) -> Result<&C::Device> {
        self.connection.ensure_connected().await
    }

    /// Switch on, then apply brightness and color if given.
    pub async fn turn_on(&mut self, command: &TurnOn) -> Result<()> {
        let device = self.connection.ensure_connected().await?;
        device.power_on().await?;

        if let Some(level) = command.brightness {
            let brightness = Brightness::from_level(level);
            debug!("brightness level {} -> {}%", level, brightness.value());
            device.set_brightness(brightness.value()).await?;
        }

        match command.color {
            Some(ColorCommand::HueSaturation { hue, saturation }) => {
                let hs = HueSaturation::from_float(hue, saturation);
                device.set_hue(hs.hue()).await?;
                device.set_saturation(hs.saturation()).await?;
            }
            Some(ColorCommand::ColorTemp(kelvin)) => {
                device.set_color_temp(kelvin).await?;
            }
            None => {}
        }

        Ok(())
    }

    pub async fn turn_off(&mut self) -> Result<()> {
        let device = self.connection.ensure_connected().await?;
        device.power_off().await
    }

    /// Refresh the cached state from the controller.
    ///
    /// Values are stored as they are read, so a failing call leaves the
    /// attributes after it stale.
    pub async fn update(&mut self) -> Result<()> {
        let device = self.connection.ensure_connected().await?;

        self.device_name = device.get_name().await?;
        self.state.is_on = device.get_power().await?;
        self.state.brightness = Brightness::saturating(device.get_brightness().await?).to_level();

        if self.brightness_only {
            return Ok(());
        }

        let mode = device.get_color_mode().await?;
        debug!("{} reports color mode {}", self.device_name, mode.as_str());
        self.state.color_mode = mode.entity_mode();
        if self.state.color_mode == ColorMode::ColorTemp {
            self.state.color_temp_kelvin = device.get_color_temp().await?;
        }

        // both representations stay populated whichever mode is active
        let hue = device.get_hue().await?;
        let saturation = device.get_saturation().await?;
        self.state.hs_color = HueSaturation::create(hue, saturation)
            .unwrap_or_else(|| HueSaturation::from_float(f32::from(hue), f32::from(saturation)));

        Ok(())
    }
}
