//! DAI (digital audio interface) endpoints
//!
//! The RK3288 I2S controller driver lives outside this crate; the machine
//! driver only needs its [`platform::SysclkControl`] operation. The codec
//! side is [`crate::audio::codec::es8328::Es8328Dai`].
//!
//! - `mock`: In-process mock for host tests (always available)

pub mod mock;

pub use mock::MockDai;
