//! In-memory controller that records every call, for tests.

use std::mem;
use std::sync::{Arc, Mutex};

use crate::device::{Connector, DeviceInfo, NanoleafApi};
use crate::errors::Error;
use crate::types::DeviceColorMode;

type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Call {
    CheckConnection,
    PowerOn,
    PowerOff,
    GetPower,
    GetName,
    GetInfo,
    GetBrightness,
    SetBrightness(u8),
    GetHue,
    SetHue(u16),
    GetSaturation,
    SetSaturation(u8),
    GetColorTemp,
    SetColorTemp(u16),
    GetColorMode,
    Identify,
}

/// What the fake controller reports back.
#[derive(Debug, Clone)]
pub(crate) struct DeviceState {
    pub on: bool,
    pub name: String,
    pub brightness: u8,
    pub hue: u16,
    pub saturation: u8,
    pub color_temp: u16,
    pub color_mode: String,
}

impl Default for DeviceState {
    fn default() -> Self {
        DeviceState {
            on: false,
            name: "Shapes 4F2A".to_string(),
            brightness: 0,
            hue: 0,
            saturation: 0,
            color_temp: 4000,
            color_mode: "hs".to_string(),
        }
    }
}

#[derive(Debug, Default)]
struct Shared {
    calls: Vec<Call>,
    state: DeviceState,
    unreachable: bool,
    refuse_connect: bool,
    connects: usize,
    fail_on: Option<Call>,
}

#[derive(Debug, Clone, Default)]
pub(crate) struct MockConnector {
    shared: Arc<Mutex<Shared>>,
}

impl MockConnector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_state(state: DeviceState) -> Self {
        let connector = Self::new();
        connector.shared.lock().unwrap().state = state;
        connector
    }

    /// Calls made on any handle, excluding the connects themselves.
    pub fn calls(&self) -> Vec<Call> {
        self.shared.lock().unwrap().calls.clone()
    }

    pub fn clear_calls(&self) {
        self.shared.lock().unwrap().calls.clear();
    }

    pub fn connects(&self) -> usize {
        self.shared.lock().unwrap().connects
    }

    pub fn set_reachable(&self, reachable: bool) {
        self.shared.lock().unwrap().unreachable = !reachable;
    }

    pub fn set_refuse_connect(&self, refuse: bool) {
        self.shared.lock().unwrap().refuse_connect = refuse;
    }

    pub fn set_brightness_reading(&self, brightness: u8) {
        self.shared.lock().unwrap().state.brightness = brightness;
    }

    /// Make every call of the same kind as `call` fail.
    pub fn fail_on(&self, call: Call) {
        self.shared.lock().unwrap().fail_on = Some(call);
    }
}

impl Connector for MockConnector {
    type Device = MockDevice;

    async fn connect(&self) -> Result<MockDevice> {
        let mut shared = self.shared.lock().unwrap();
        if shared.refuse_connect {
            return Err(Error::status("connect", 503));
        }
        shared.connects += 1;
        shared.unreachable = false;
        Ok(MockDevice {
            shared: Arc::clone(&self.shared),
        })
    }
}

#[derive(Debug)]
pub(crate) struct MockDevice {
    shared: Arc<Mutex<Shared>>,
}

impl MockDevice {
    fn record(&self, call: Call) -> Result<DeviceState> {
        let mut shared = self.shared.lock().unwrap();
        let failing = shared
            .fail_on
            .as_ref()
            .is_some_and(|f| mem::discriminant(f) == mem::discriminant(&call));
        shared.calls.push(call.clone());

        if failing {
            return Err(Error::status(&format!("{call:?}"), 500));
        }
        if shared.unreachable {
            return Err(Error::status(&format!("{call:?}"), 503));
        }
        Ok(shared.state.clone())
    }

    fn store(&self, f: impl FnOnce(&mut DeviceState)) {
        f(&mut self.shared.lock().unwrap().state);
    }
}

impl NanoleafApi for MockDevice {
    async fn check_connection(&self) -> Result<()> {
        self.record(Call::CheckConnection).map(|_| ())
    }

    async fn power_on(&self) -> Result<()> {
        self.record(Call::PowerOn)?;
        self.store(|s| s.on = true);
        Ok(())
    }

    async fn power_off(&self) -> Result<()> {
        self.record(Call::PowerOff)?;
        self.store(|s| s.on = false);
        Ok(())
    }

    async fn get_power(&self) -> Result<bool> {
        Ok(self.record(Call::GetPower)?.on)
    }

    async fn get_name(&self) -> Result<String> {
        Ok(self.record(Call::GetName)?.name)
    }

    async fn get_info(&self) -> Result<DeviceInfo> {
        let state = self.record(Call::GetInfo)?;
        Ok(DeviceInfo {
            name: state.name,
            serial_no: Some("S19124C8036".to_string()),
            manufacturer: Some("Nanoleaf".to_string()),
            firmware_version: Some("9.2.4".to_string()),
            model: Some("NL42".to_string()),
        })
    }

    async fn get_brightness(&self) -> Result<u8> {
        Ok(self.record(Call::GetBrightness)?.brightness)
    }

    async fn set_brightness(&self, brightness: u8) -> Result<()> {
        self.record(Call::SetBrightness(brightness))?;
        self.store(|s| s.brightness = brightness);
        Ok(())
    }

    async fn get_hue(&self) -> Result<u16> {
        Ok(self.record(Call::GetHue)?.hue)
    }

    async fn set_hue(&self, hue: u16) -> Result<()> {
        self.record(Call::SetHue(hue))?;
        self.store(|s| {
            s.hue = hue;
            s.color_mode = "hs".to_string();
        });
        Ok(())
    }

    async fn get_saturation(&self) -> Result<u8> {
        Ok(self.record(Call::GetSaturation)?.saturation)
    }

    async fn set_saturation(&self, saturation: u8) -> Result<()> {
        self.record(Call::SetSaturation(saturation))?;
        self.store(|s| {
            s.saturation = saturation;
            s.color_mode = "hs".to_string();
        });
        Ok(())
    }

    async fn get_color_temp(&self) -> Result<u16> {
        Ok(self.record(Call::GetColorTemp)?.color_temp)
    }

    async fn set_color_temp(&self, kelvin: u16) -> Result<()> {
        self.record(Call::SetColorTemp(kelvin))?;
        self.store(|s| {
            s.color_temp = kelvin;
            s.color_mode = "ct".to_string();
        });
        Ok(())
    }

    async fn get_color_mode(&self) -> Result<DeviceColorMode> {
        let state = self.record(Call::GetColorMode)?;
        Ok(DeviceColorMode::from(state.color_mode.as_str()))
    }

    async fn identify(&self) -> Result<()> {
        self.record(Call::Identify).map(|_| ())
    }
}
