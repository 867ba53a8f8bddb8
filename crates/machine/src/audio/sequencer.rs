//! Lifecycle sequencer for the console's single I²S link.
//!
//! ```text
//! [Idle] --card_init()--> [Initialized] --stream_start()--> [Streaming]
//!   ^                                                            |
//!   +----------------------- stream_stop() ---------------------+
//! ```
//!
//! | Event        | Clocks              | Codec (if present) |
//! |--------------|---------------------|--------------------|
//! | card init    | synchronize         | QUIET              |
//! | stream start | validate, synchronize | ACTIVE           |
//! | stream stop  | untouched           | QUIET              |
//!
//! Output is never unmuted before a stream explicitly starts, and is always
//! muted again when it stops. The caller serializes the three events; the
//! sequencer does no locking of its own.

use platform::{CodecRegisters, HwParams, SampleRateHz, SysclkControl};

use super::clock_sync::{self, ClockError};
use super::codec::es8328::profile::{ACTIVE, QUIET};
use super::programmer::apply_profile;
use super::register_profile::RegisterProfile;
use crate::config::LinkConfig;

/// A stream request the link cannot carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ValidationError {
    /// Requested sample rate differs from the single supported rate.
    RateMismatch {
        /// Rate in the stream parameters.
        requested: u32,
        /// Rate the link runs at.
        supported: u32,
    },
}

impl core::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::RateMismatch {
                requested,
                supported,
            } => write!(f, "invalid rate {requested} Hz, only {supported} Hz supported"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ValidationError {}

/// Failure of a lifecycle transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SequenceError {
    /// A DAI rejected the master clock. Fatal to the transition.
    Clock(ClockError),
    /// The stream parameters were rejected. The link stays usable.
    Validation(ValidationError),
    /// A stream is already running on the link.
    StreamActive,
}

impl core::fmt::Display for SequenceError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Clock(e) => write!(f, "clock synchronization failed: {e}"),
            Self::Validation(e) => write!(f, "stream rejected: {e}"),
            Self::StreamActive => f.write_str("a stream is already running on the link"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for SequenceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Clock(e) => Some(e),
            Self::Validation(e) => Some(e),
            Self::StreamActive => None,
        }
    }
}

impl From<ClockError> for SequenceError {
    fn from(e: ClockError) -> Self {
        Self::Clock(e)
    }
}

impl From<ValidationError> for SequenceError {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e)
    }
}

/// What a running stream was admitted with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StreamContext {
    /// Accepted sample rate.
    pub rate: SampleRateHz,
    /// MCLK both DAIs were set to.
    pub mclk_hz: u32,
    /// Whether ACTIVE was applied to a codec.
    pub has_codec: bool,
}

/// Where the link is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LinkState {
    /// Not brought up, or a stream has just stopped.
    Idle,
    /// Card init done; clocks set and output muted.
    Initialized,
    /// A stream is running.
    Streaming(StreamContext),
}

impl LinkState {
    /// `true` while a stream is running.
    pub const fn is_streaming(&self) -> bool {
        matches!(self, Self::Streaming(_))
    }
}

/// The console's DAI link: both DAI ends, the codec control handle (if
/// discovery resolved one) and the fixed link configuration.
pub struct AudioLink<'cfg, Cpu, CodecDai, Codec> {
    config: &'cfg LinkConfig,
    cpu_dai: Cpu,
    codec_dai: CodecDai,
    codec: Option<Codec>,
    state: LinkState,
}

impl<'cfg, Cpu, CodecDai, Codec> AudioLink<'cfg, Cpu, CodecDai, Codec>
where
    Cpu: SysclkControl,
    CodecDai: SysclkControl,
    Codec: CodecRegisters,
{
    /// Assemble a link in the [`LinkState::Idle`] state.
    ///
    /// With `codec` set to `None` the link runs degraded: clocks are still
    /// managed but no register profile is ever applied.
    pub fn new(
        config: &'cfg LinkConfig,
        cpu_dai: Cpu,
        codec_dai: CodecDai,
        codec: Option<Codec>,
    ) -> Self {
        if codec.is_none() {
            warn!("{}: no codec device, register profiles disabled", config.name);
        }
        Self {
            config,
            cpu_dai,
            codec_dai,
            codec,
            state: LinkState::Idle,
        }
    }

    /// Current lifecycle state.
    pub fn state(&self) -> LinkState {
        self.state
    }

    /// `true` if a codec control handle is attached.
    pub fn has_codec(&self) -> bool {
        self.codec.is_some()
    }

    /// Link configuration.
    pub fn config(&self) -> &'cfg LinkConfig {
        self.config
    }

    /// Card init: synchronize clocks, then mute the codec outputs.
    ///
    /// # Errors
    ///
    /// - [`SequenceError::StreamActive`] while streaming.
    /// - [`SequenceError::Clock`] if either DAI rejects the MCLK; no
    ///   register is written and the link drops to [`LinkState::Idle`],
    ///   also when it had been initialized before.
    pub async fn card_init(&mut self) -> Result<(), SequenceError> {
        if self.state.is_streaming() {
            warn!("{}: card init while streaming", self.config.name);
            return Err(SequenceError::StreamActive);
        }
        info!("{}: card init", self.config.name);

        self.sync_clocks_or_idle()?;
        self.apply(&QUIET).await;

        self.state = LinkState::Initialized;
        info!("{}: card ready, outputs muted", self.config.name);
        Ok(())
    }

    /// Stream start: validate `params`, re-assert clocks, then apply the
    /// full operating profile.
    ///
    /// # Errors
    ///
    /// - [`SequenceError::StreamActive`] if a stream is already running.
    /// - [`SequenceError::Validation`] if the rate is not the link rate;
    ///   neither clocks nor registers are touched.
    /// - [`SequenceError::Clock`] if either DAI rejects the MCLK; ACTIVE is
    ///   not applied and the link drops to [`LinkState::Idle`].
    pub async fn stream_start(
        &mut self,
        params: &HwParams,
    ) -> Result<StreamContext, SequenceError> {
        if self.state.is_streaming() {
            warn!("{}: stream start while streaming", self.config.name);
            return Err(SequenceError::StreamActive);
        }

        let rate = self.validate(params)?;
        self.sync_clocks_or_idle()?;
        self.apply(&ACTIVE).await;

        let ctx = StreamContext {
            rate,
            mclk_hz: self.config.clock.mclk_hz,
            has_codec: self.codec.is_some(),
        };
        self.state = LinkState::Streaming(ctx);
        info!(
            "{}: stream started at {} Hz, BCLK {} Hz, MCLK {} Hz",
            self.config.name,
            rate.get(),
            params.bclk_hz().unwrap_or(0),
            ctx.mclk_hz
        );
        Ok(ctx)
    }

    /// Stream stop: mute the codec outputs and return to idle.
    ///
    /// Runs from any state, including after a failed start.
    pub async fn stream_stop(&mut self) {
        info!("{}: stream stop", self.config.name);
        self.apply(&QUIET).await;
        self.state = LinkState::Idle;
    }

    /// Take the link apart again.
    pub fn into_parts(self) -> (Cpu, CodecDai, Option<Codec>) {
        (self.cpu_dai, self.codec_dai, self.codec)
    }

    /// Borrow the CPU DAI.
    pub fn cpu_dai(&self) -> &Cpu {
        &self.cpu_dai
    }

    /// Borrow the codec DAI.
    pub fn codec_dai(&self) -> &CodecDai {
        &self.codec_dai
    }

    /// Borrow the codec control handle.
    pub fn codec(&self) -> Option<&Codec> {
        self.codec.as_ref()
    }

    fn validate(&self, params: &HwParams) -> Result<SampleRateHz, ValidationError> {
        let supported = self.config.rate;
        if params.rate() != Ok(supported) {
            warn!(
                "{}: rejecting rate {} Hz, link runs at {} Hz",
                self.config.name,
                params.rate_hz,
                supported.get()
            );
            return Err(ValidationError::RateMismatch {
                requested: params.rate_hz,
                supported: supported.get(),
            });
        }
        Ok(supported)
    }

    /// A failed sync leaves the MCLK of at least one end unknown, so the
    /// card is no longer up.
    fn sync_clocks_or_idle(&mut self) -> Result<(), ClockError> {
        clock_sync::synchronize(
            &mut self.cpu_dai,
            &mut self.codec_dai,
            &self.config.clock,
            self.config.sysclk_id,
        )
        .map_err(|e| {
            self.state = LinkState::Idle;
            e
        })
    }

    async fn apply(&mut self, profile: &RegisterProfile) {
        match self.codec.as_mut() {
            Some(codec) => apply_profile(codec, profile).await,
            None => trace!("no codec, skipping {} profile", profile.name()),
        }
    }
}
