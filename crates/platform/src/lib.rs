//! Hardware Abstraction Layer (HAL) for the ChamSys console audio path
//!
//! This crate provides the trait seams between the machine driver and the
//! chips it sequences, so that the sequencing logic can be developed and
//! tested without physical hardware.
//!
//! # Architecture Layers
//!
//! ```text
//! Sound framework (card registration, DAPM, PCM)
//!         ↓
//! Machine driver (chamsys-audio crate)
//!         ↓
//! Platform HAL (this crate - trait abstractions)
//!         ↓
//! Chip drivers (RK3288 I2S, ES8328 codec over I²C)
//! ```
//!
//! # Abstractions
//!
//! - [`SysclkControl`] - tell one end of the digital audio link its master clock
//! - [`CodecRegisters`] - single-register writes over the codec control bus
//! - [`ClockConfig`] - fixed MCLK frequency and MCLK/fs ratio
//! - [`DaiFormat`] / [`HwParams`] - link format and per-stream parameters
//!
//! # Features
//!
//! - `std`: Enable standard library support (for testing)
//! - `defmt`: Enable defmt logging derives

// ── Lint policy ─────────────────────────────────────────────────────────────
#![deny(clippy::unwrap_used)] // no .unwrap() in production code
#![deny(clippy::expect_used)] // no .expect() in production code
#![deny(clippy::panic)] // no panic!() in production code
#![deny(unused_must_use)]
// all Results must be handled
// ────────────────────────────────────────────────────────────────────────────
#![cfg_attr(all(not(test), not(feature = "std")), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(unsafe_op_in_unsafe_fn)]
// Pedantic lints suppressed for this hardware HAL crate:
#![allow(clippy::doc_markdown)] // register names and frequencies in doc comments
#![allow(clippy::must_use_candidate)] // hardware accessors: callers decide
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(async_fn_in_trait)] // single-threaded sequencing, Send bounds not needed

pub mod audio;
pub mod audio_config;
pub mod audio_types;
pub mod clock_config;

pub use audio::{ClockDirection, CodecRegisters, DaiError, SysclkControl};
pub use audio_config::{ClockProvider, DaiFormat, DaiInterface, DaiInversion, HwParams};
pub use audio_types::{OutOfRangeError, SampleRateHz};
pub use clock_config::ClockConfig;
