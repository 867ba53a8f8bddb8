//! ES8328 codec (Everest Semiconductor)
//!
//! Register map, the console's two register profiles, and the control-bus
//! driver.

mod driver;
pub mod profile;
pub mod registers;

pub use driver::{Es8328, Es8328Dai, Es8328Error, RateFamily, I2C_ADDR_CE_HIGH, I2C_ADDR_CE_LOW};

/// Analog pin names as the codec driver exposes them to the routing layer.
pub const PINS: &[&str] = &[
    "LOUT1", "ROUT1", "LOUT2", "ROUT2", "LINPUT1", "RINPUT1", "LINPUT2", "RINPUT2",
];
