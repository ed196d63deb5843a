//! Host-facing entity contract and platform setup.

use futures::future::BoxFuture;
use log::info;
use serde::Serialize;
use serde_json::Value;

use crate::command::TurnOn;
use crate::config::PlatformConfig;
use crate::device::Connector;
use crate::errors::Error;
use crate::light::NanoLight;
use crate::types::ColorMode;

type Result<T> = std::result::Result<T, Error>;

/// Platform identifier under which hosts register these entities.
pub const DOMAIN: &str = "nanoleaf";

/// Light entity as a host runtime drives it.
///
/// Object safe, so a host can keep entities of different platforms side by
/// side as `Box<dyn LightEntity>`. The host must not start a second operation
/// on an entity before the previous one finished.
pub trait LightEntity: Send {
    fn name(&self) -> &str;

    fn is_on(&self) -> bool;

    /// 0-255.
    fn brightness(&self) -> u8;

    fn color_mode(&self) -> ColorMode;

    fn supported_color_modes(&self) -> &'static [ColorMode];

    fn hs_color(&self) -> (f32, f32);

    fn color_temp_kelvin(&self) -> u16;

    fn min_color_temp_kelvin(&self) -> u16;

    fn max_color_temp_kelvin(&self) -> u16;

    /// Snapshot of the attributes above for the host's state store.
    fn state_json(&self) -> Value;

    /// Return the platform type of this entity.
    fn platform(&self) -> &'static str {
        "light"
    }

    fn turn_on<'a>(&'a mut self, command: &'a TurnOn) -> BoxFuture<'a, Result<()>>;

    fn turn_off(&mut self) -> BoxFuture<'_, Result<()>>;

    /// Poll the device and refresh cached attributes.
    fn update(&mut self) -> BoxFuture<'_, Result<()>>;
}

#[serde_with::skip_serializing_none]
#[derive(Serialize)]
struct Snapshot<'a> {
    name: &'a str,
    state: &'static str,
    brightness: Option<u8>,
    color_mode: ColorMode,
    supported_color_modes: &'static [ColorMode],
    hs_color: Option<(f32, f32)>,
    color_temp_kelvin: Option<u16>,
    min_color_temp_kelvin: Option<u16>,
    max_color_temp_kelvin: Option<u16>,
}

impl<C> LightEntity for NanoLight<C>
where
    C: Connector + 'static,
{
    fn name(&self) -> &str {
        NanoLight::name(self)
    }

    fn is_on(&self) -> bool {
        NanoLight::is_on(self)
    }

    fn brightness(&self) -> u8 {
        NanoLight::brightness(self)
    }

    fn color_mode(&self) -> ColorMode {
        NanoLight::color_mode(self)
    }

    fn supported_color_modes(&self) -> &'static [ColorMode] {
        NanoLight::supported_color_modes(self)
    }

    fn hs_color(&self) -> (f32, f32) {
        NanoLight::hs_color(self)
    }

    fn color_temp_kelvin(&self) -> u16 {
        NanoLight::color_temp_kelvin(self)
    }

    fn min_color_temp_kelvin(&self) -> u16 {
        NanoLight::min_color_temp_kelvin(self)
    }

    fn max_color_temp_kelvin(&self) -> u16 {
        NanoLight::max_color_temp_kelvin(self)
    }

    fn state_json(&self) -> Value {
        let on = NanoLight::is_on(self);
        let color = !self.brightness_only();
        let snapshot = Snapshot {
            name: NanoLight::name(self),
            state: if on { "on" } else { "off" },
            brightness: on.then(|| NanoLight::brightness(self)),
            color_mode: NanoLight::color_mode(self),
            supported_color_modes: NanoLight::supported_color_modes(self),
            hs_color: color.then(|| NanoLight::hs_color(self)),
            color_temp_kelvin: color.then(|| NanoLight::color_temp_kelvin(self)),
            min_color_temp_kelvin: color.then(|| NanoLight::min_color_temp_kelvin(self)),
            max_color_temp_kelvin: color.then(|| NanoLight::max_color_temp_kelvin(self)),
        };
        serde_json::to_value(snapshot).unwrap_or(Value::Null)
    }

    fn turn_on<'a>(&'a mut self, command: &'a TurnOn) -> BoxFuture<'a, Result<()>> {
        Box::pin(NanoLight::turn_on(self, command))
    }

    fn turn_off(&mut self) -> BoxFuture<'_, Result<()>> {
        Box::pin(NanoLight::turn_off(self))
    }

    fn update(&mut self) -> BoxFuture<'_, Result<()>> {
        Box::pin(NanoLight::update(self))
    }
}

/// Validate `config` and hand the resulting entity to the host.
///
/// Nothing is contacted here; the first command or poll opens the
/// connection.
///
/// # Examples
///
/// ```
/// use nanoleaf_lights_rs::{LightEntity, setup_platform};
/// use serde_json::json;
///
/// let mut entities = Vec::new();
/// setup_platform(
///     &json!({"addr": "192.168.1.50", "token": "xYz123", "title": "Hallway"}),
///     |new| entities.extend(new),
/// )
/// .unwrap();
/// assert_eq!(entities[0].name(), "Hallway");
/// ```
pub fn setup_platform<F>(config: &Value, add_entities: F) -> Result<()>
where
    F: FnOnce(Vec<Box<dyn LightEntity>>),
{
    let config = PlatformConfig::from_value(config)?;
    info!(
        "setting up {} light at {}:{} (brightness only: {})",
        DOMAIN, config.addr, config.port, config.brightness_only
    );

    let light = NanoLight::new(
        config.connector(),
        config.title.as_deref(),
        config.brightness_only,
    );
    add_entities(vec![Box::new(light)]);
    Ok(())
}
