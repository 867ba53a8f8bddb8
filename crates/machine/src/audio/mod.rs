//! Audio link: codec profiles, clocking, lifecycle and routing.
//!
//! # Structure
//!
//! - `register_profile`: sentinel-terminated `(register, value)` tables
//! - `programmer`: best-effort application of a profile to a codec
//! - `codec/`: ES8328 driver and profiles, `MockCodec` for tests
//! - `dai/`: `MockDai` for tests
//! - `clock_sync`: shared MCLK on both ends of the link
//! - `sequencer`: card init / stream start / stream stop
//! - `topology`: widgets, routes and pin switches
//!
//! # Dependency Injection
//!
//! The sequencer targets the [`platform::SysclkControl`] and
//! [`platform::CodecRegisters`] traits. Concrete types are injected when the
//! link is assembled:
//!
//! ```rust,ignore
//! // Hardware:
//! AudioLink::new(&CSYS_LINK, rk_i2s, Es8328Dai::new(), Some(Es8328::new(i2c)));
//! // Tests:
//! AudioLink::new(&CSYS_LINK, MockDai::new(), MockDai::new(), Some(MockCodec::new()));
//! ```

pub mod clock_sync;
pub mod codec;
pub mod dai;
pub mod programmer;
pub mod register_profile;
pub mod sequencer;
pub mod topology;

pub use clock_sync::{synchronize, ClockError, LinkSide};
pub use codec::es8328::{Es8328, Es8328Dai};
pub use codec::MockCodec;
pub use dai::MockDai;
pub use programmer::apply_profile;
pub use register_profile::{RegisterEntry, RegisterProfile};
pub use sequencer::{AudioLink, LinkState, SequenceError, StreamContext, ValidationError};
pub use topology::{PinSwitch, Route, Topology, TopologyError, Widget, CSYS_TOPOLOGY};
