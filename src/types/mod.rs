//! Value types for light control parameters.

mod brightness;
mod color_mode;
mod hue_saturation;
mod kelvin;

pub use brightness::Brightness;
pub use color_mode::{ColorMode, DeviceColorMode};
pub use hue_saturation::HueSaturation;
pub use kelvin::{MAX_KELVIN, MIN_KELVIN};
