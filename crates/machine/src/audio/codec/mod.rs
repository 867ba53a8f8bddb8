//! Codec drivers
//!
//! - `es8328`: Everest ES8328 register map, profiles and I²C driver
//! - `mock`: In-process mock for host tests (always available)
//!
//! The machine driver programs codecs only through
//! [`platform::CodecRegisters`], so any of these can sit behind a link.

pub mod es8328;
pub mod mock;

pub use mock::MockCodec;
