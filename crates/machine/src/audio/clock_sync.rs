//! Clock synchronizer for the I²S link.
//!
//! Both DAIs are told the same MCLK frequency, with direction "out": each
//! end outputs / locks to the shared reference from the board oscillator.
//! Neither is the bus clock master in the data-flow sense; BCLK/LRCLK
//! roles come from the link's [`platform::DaiFormat`].
//!
//! Order is fixed: CPU interface first, codec second. A failure on the CPU
//! side means the codec is never asked.

use platform::{ClockConfig, ClockDirection, DaiError, SysclkControl};

/// Which end of the link a clock request was sent to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LinkSide {
    /// The application processor's I2S controller.
    Interface,
    /// The codec.
    Codec,
}

impl LinkSide {
    /// Short name for logs.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Interface => "interface",
            Self::Codec => "codec",
        }
    }
}

impl core::fmt::Display for LinkSide {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A DAI rejected the shared master clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ClockError {
    /// The end that failed.
    pub side: LinkSide,
    /// What it reported.
    pub cause: DaiError,
}

impl core::fmt::Display for ClockError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "cannot set {} MCLK: {}", self.side, self.cause)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ClockError {}

/// Set the shared MCLK on the interface, then on the codec.
///
/// Not retried. The first failure is returned and logged.
pub fn synchronize<Cpu, Codec>(
    cpu_dai: &mut Cpu,
    codec_dai: &mut Codec,
    clock: &ClockConfig,
    clk_id: u32,
) -> Result<(), ClockError>
where
    Cpu: SysclkControl + ?Sized,
    Codec: SysclkControl + ?Sized,
{
    set_side(cpu_dai, LinkSide::Interface, clock.mclk_hz, clk_id)?;
    set_side(codec_dai, LinkSide::Codec, clock.mclk_hz, clk_id)
}

fn set_side<D>(dai: &mut D, side: LinkSide, mclk_hz: u32, clk_id: u32) -> Result<(), ClockError>
where
    D: SysclkControl + ?Sized,
{
    debug!("set {} sysclk {} Hz", side.as_str(), mclk_hz);
    dai.set_sysclk(clk_id, mclk_hz, ClockDirection::Out)
        .map_err(|cause| {
            error!("cannot set {} MCLK: {}", side.as_str(), cause);
            ClockError { side, cause }
        })
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use crate::audio::dai::MockDai;
    use crate::config::CSYS_LINK;

    #[test]
    fn test_both_sides_get_same_mclk_out() {
        let mut cpu = MockDai::new();
        let mut codec = MockDai::new();
        synchronize(&mut cpu, &mut codec, &CSYS_LINK.clock, 0).unwrap();

        for dai in [&cpu, &codec] {
            let calls = dai.calls();
            assert_eq!(calls.len(), 1);
            assert_eq!(calls[0].freq_hz, 11_289_600);
            assert_eq!(calls[0].dir, ClockDirection::Out);
            assert_eq!(calls[0].clk_id, 0);
        }
    }

    #[test]
    fn test_interface_failure_short_circuits() {
        let mut cpu = MockDai::failing(DaiError::Bus);
        let mut codec = MockDai::new();
        let err = synchronize(&mut cpu, &mut codec, &CSYS_LINK.clock, 0).unwrap_err();
        assert_eq!(
            err,
            ClockError {
                side: LinkSide::Interface,
                cause: DaiError::Bus
            }
        );
        assert!(codec.calls().is_empty(), "codec must not be asked");
    }

    #[test]
    fn test_codec_failure_reported_as_codec() {
        let mut cpu = MockDai::new();
        let mut codec = MockDai::failing(DaiError::UnsupportedFrequency(11_289_600));
        let err = synchronize(&mut cpu, &mut codec, &CSYS_LINK.clock, 0).unwrap_err();
        assert_eq!(err.side, LinkSide::Codec);
        assert_eq!(cpu.sysclk_hz(), Some(11_289_600));
    }
}
