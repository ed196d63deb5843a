//! # nanoleaf_lights_rs
//!
//! An async Rust library that exposes Nanoleaf light panels to a smart-home
//! host as light entities.
//!
//! The crate does two things: it talks to a panel controller over the local
//! Nanoleaf OpenAPI, and it translates between the host's light model and the
//! controller's native ranges.
//!
//! ## Quick Start
//!
//! ```ignore
//! use nanoleaf_lights_rs::{LightEntity, TurnOn, setup_platform};
//! use serde_json::json;
//!
//! async fn control_light() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut entities = Vec::new();
//!     setup_platform(
//!         &json!({"addr": "192.168.1.50", "token": "xYz123", "title": "Hallway"}),
//!         |new| entities.extend(new),
//!     )?;
//!
//!     let light = &mut entities[0];
//!     light
//!         .turn_on(&TurnOn::from_attributes(&json!({"brightness": 200, "hs_color": [240, 80]}))?)
//!         .await?;
//!     light.update().await?;
//!     println!("{}", light.state_json());
//!     Ok(())
//! }
//! ```
//!
//! ## Unit conversion
//!
//! | Host                          | Controller                  |
//! |-------------------------------|-----------------------------|
//! | brightness 0-255              | brightness 0-100 (`/ 2.55`) |
//! | `hs_color` floats             | hue 0-360, sat 0-100 (rounded) |
//! | `color_temp_kelvin`           | `ct` in Kelvin, unchanged   |
//! | color mode `hs`/`color_temp`  | `colorMode` `hs`/`effect`/`ct` |
//!
//! ## Connection handling
//!
//! A device handle is created on the first command or poll. Before every
//! later one it is probed once; a handle that fails the probe is dropped and
//! rebuilt. Every other error is returned to the caller unchanged.

mod client;
mod command;
mod config;
mod connection;
mod device;
mod errors;
mod light;
#[cfg(test)]
mod mock;
mod platform;
mod types;

// Re-export public API
pub use client::{HttpConnector, NanoleafClient};
pub use command::{ColorCommand, TurnOn};
pub use config::PlatformConfig;
pub use connection::Connection;
pub use device::{Connector, DeviceInfo, NanoleafApi};
pub use errors::Error;
pub use light::{LightState, NanoLight};
pub use platform::{DOMAIN, LightEntity, setup_platform};
pub use types::{
    Brightness, ColorMode, DeviceColorMode, HueSaturation, MAX_KELVIN, MIN_KELVIN,
};
