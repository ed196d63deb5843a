//! The device-side API a light entity drives.
//!
//! [`NanoleafApi`] lists the operations consumed from a panel controller, in
//! the controller's own ranges. [`NanoleafClient`](crate::NanoleafClient)
//! implements it over HTTP; tests substitute a recording fake.

use std::future::Future;

use serde::{Deserialize, Serialize};

use crate::errors::Error;
use crate::types::DeviceColorMode;

type Result<T> = std::result::Result<T, Error>;

/// Identity of a panel controller as reported by `GET /`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceInfo {
    pub name: String,
    #[serde(default)]
    pub serial_no: Option<String>,
    #[serde(default)]
    pub manufacturer: Option<String>,
    #[serde(default)]
    pub firmware_version: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
}

/// Operations on a single panel controller.
///
/// All values are in the controller's native ranges: brightness and
/// saturation 0-100, hue 0-360, color temperature in Kelvin.
pub trait NanoleafApi: Send + Sync {
    /// Lightweight liveness probe.
    fn check_connection(&self) -> impl Future<Output = Result<()>> + Send;

    fn power_on(&self) -> impl Future<Output = Result<()>> + Send;

    fn power_off(&self) -> impl Future<Output = Result<()>> + Send;

    fn get_power(&self) -> impl Future<Output = Result<bool>> + Send;

    fn get_name(&self) -> impl Future<Output = Result<String>> + Send;

    fn get_info(&self) -> impl Future<Output = Result<DeviceInfo>> + Send;

    fn get_brightness(&self) -> impl Future<Output = Result<u8>> + Send;

    fn set_brightness(&self, brightness: u8) -> impl Future<Output = Result<()>> + Send;

    fn get_hue(&self) -> impl Future<Output = Result<u16>> + Send;

    fn set_hue(&self, hue: u16) -> impl Future<Output = Result<()>> + Send;

    fn get_saturation(&self) -> impl Future<Output = Result<u8>> + Send;

    fn set_saturation(&self, saturation: u8) -> impl Future<Output = Result<()>> + Send;

    fn get_color_temp(&self) -> impl Future<Output = Result<u16>> + Send;

    fn set_color_temp(&self, kelvin: u16) -> impl Future<Output = Result<()>> + Send;

    fn get_color_mode(&self) -> impl Future<Output = Result<DeviceColorMode>> + Send;

    /// Flash the panels so the user can find them.
    fn identify(&self) -> impl Future<Output = Result<()>> + Send;
}

/// Creates connected device handles.
///
/// A connector holds what is needed to reach one controller (address, token)
/// and can be asked for a fresh handle any number of times.
pub trait Connector: Send + Sync {
    type Device: NanoleafApi;

    /// Build a handle and confirm the controller answers.
    fn connect(&self) -> impl Future<Output = Result<Self::Device>> + Send;
}
