//! ChamSys console audio machine driver
//!
//! Glues the RK3288 I2S controller to the ES8328 codec on the MQ50HD/MQ70HD
//! line-in/line-out path: one DAI link, one sample rate, one fixed master
//! clock.
//!
//! # Architecture
//!
//! ```text
//! Sound framework (card registration, DAPM, PCM)
//!         ↓
//! card: probe + register           audio::topology
//!         ↓
//! audio::sequencer (card init / stream start / stream stop)
//!         ↓                       ↓
//! audio::clock_sync         audio::programmer + ES8328 profiles
//!         ↓                       ↓
//! platform::SysclkControl   platform::CodecRegisters
//! ```
//!
//! # Features
//!
//! - `std` - Host builds: `tracing` logging, `std::error::Error` impls
//! - `defmt` - Hardware builds: `defmt` logging and `defmt::Format` derives

#![cfg_attr(all(not(test), not(feature = "std")), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::await_holding_lock)] // holding a blocking Mutex across .await is a bug
#![deny(unsafe_op_in_unsafe_fn)]
#![warn(clippy::print_stdout)] // prefer tracing/defmt over println! in lib code
#![warn(clippy::dbg_macro)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)] // register and chip names in doc comments

// Must come first so the logging macros are visible to every module.
#[macro_use]
mod fmt;

pub mod audio;
pub mod card;
pub mod config;

pub use audio::{AudioLink, LinkState, SequenceError, StreamContext};
pub use card::{probe, register, CardDescriptor, ConfigError, DeviceTree, SoundCardRegistry};
pub use config::{LinkConfig, CSYS_LINK};
