//! Master clock configuration for a fixed-rate I²S link.
//!
//! # Background
//!
//! Both ends of the link derive sample timing from the same reference
//! oscillator. Neither end negotiates: each is told the one MCLK frequency
//! it will lock to, and the sample rate follows from the MCLK/fs ratio.
//!
//! ```text
//! MCLK = fs × ratio
//! 11 289 600 Hz = 44 100 Hz × 256
//! ```
//!
//! An MCLK/fs ratio of 256 is the ratio every ES83xx codec supports in
//! consumer mode for both the 44.1 kHz and 48 kHz families.

use crate::audio_types::SampleRateHz;

/// A fixed master-clock frequency and the oversampling ratio it implies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ClockConfig {
    /// Master clock frequency in Hz.
    pub mclk_hz: u32,
    /// Expected MCLK/fs oversampling ratio.
    pub mclk_fs: u32,
}

impl ClockConfig {
    /// Build the configuration for `rate` at `mclk_fs` times oversampling.
    ///
    /// Returns `None` if the MCLK frequency would overflow `u32`.
    pub const fn for_rate(rate: SampleRateHz, mclk_fs: u32) -> Option<Self> {
        match rate.get().checked_mul(mclk_fs) {
            Some(mclk_hz) => Some(Self { mclk_hz, mclk_fs }),
            None => None,
        }
    }

    /// Frame (LRCLK) frequency implied by this configuration.
    ///
    /// Returns `None` if `mclk_fs` is zero.
    pub const fn lrclk_hz(&self) -> Option<u32> {
        self.mclk_hz.checked_div(self.mclk_fs)
    }

    /// `true` if this MCLK divides exactly into `rate` at the configured ratio.
    pub const fn matches_rate(&self, rate: SampleRateHz) -> bool {
        match rate.get().checked_mul(self.mclk_fs) {
            Some(mclk_hz) => mclk_hz == self.mclk_hz,
            None => false,
        }
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_cd_rate_at_256fs() {
        let cfg = ClockConfig::for_rate(SampleRateHz::HZ_44100, 256).unwrap();
        assert_eq!(cfg.mclk_hz, 11_289_600);
        assert_eq!(cfg.lrclk_hz(), Some(44_100));
        assert!(cfg.matches_rate(SampleRateHz::HZ_44100));
        assert!(!cfg.matches_rate(SampleRateHz::HZ_48000));
    }

    #[test]
    fn test_zero_ratio_has_no_lrclk() {
        let cfg = ClockConfig {
            mclk_hz: 12_288_000,
            mclk_fs: 0,
        };
        assert_eq!(cfg.lrclk_hz(), None);
    }

    #[test]
    fn test_overflowing_ratio_is_rejected() {
        assert!(ClockConfig::for_rate(SampleRateHz::HZ_48000, u32::MAX).is_none());
    }
}
