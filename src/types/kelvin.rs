//! Color temperature bounds.
//!
//! The panels take Kelvin directly, so values go to the device unchanged.
//! These bounds are what an entity advertises to the host.

/// Warmest supported color temperature.
pub const MIN_KELVIN: u16 = 2500;

/// Coolest supported color temperature, also the initial cached value.
pub const MAX_KELVIN: u16 = 6500;
