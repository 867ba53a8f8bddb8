//! Digital audio link format and per-stream parameters.
//!
//! # Link format
//!
//! The console's link is plain I²S with normal bit-clock and frame polarity.
//! The codec is bit-clock and frame-clock *consumer*: the RK3288 I2S block
//! generates BCLK and LRCLK, while MCLK comes from the shared reference.
//!
//! ```text
//! RK3288 I2S0 ── MCLK  (11.2896 MHz) ──▶ ES8328 MCLK
//!             ── BCLK  (2.8224 MHz)  ──▶ ES8328 SCLK
//!             ── LRCLK (44.1 kHz)    ──▶ ES8328 LRCK
//!             ── SDO                 ──▶ ES8328 DACDAT
//!             ◀─ SDI                 ─── ES8328 ADCDAT
//! ```

use crate::audio_types::{OutOfRangeError, SampleRateHz};

/// Serial data framing of the DAI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DaiInterface {
    /// Philips I²S, MSB one BCLK after the LRCLK edge.
    I2s,
    /// Right justified.
    RightJustified,
    /// Left justified.
    LeftJustified,
    /// DSP mode A (frame pulse, MSB on the second BCLK).
    DspA,
    /// DSP mode B (frame pulse, MSB on the first BCLK).
    DspB,
}

/// Bit-clock / frame-clock polarity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DaiInversion {
    /// Normal bit clock, normal frame.
    NormalBitNormalFrame,
    /// Normal bit clock, inverted frame.
    NormalBitInvertedFrame,
    /// Inverted bit clock, normal frame.
    InvertedBitNormalFrame,
    /// Inverted bit clock, inverted frame.
    InvertedBitInvertedFrame,
}

/// Which side provides BCLK and LRCLK, stated from the codec's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ClockProvider {
    /// Codec provides both bit clock and frame clock.
    CodecProvider,
    /// Codec consumes both bit clock and frame clock.
    CodecConsumer,
}

/// Complete DAI format for one link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DaiFormat {
    /// Framing.
    pub interface: DaiInterface,
    /// Clock polarity.
    pub inversion: DaiInversion,
    /// Clock provider role.
    pub provider: ClockProvider,
}

impl DaiFormat {
    /// I²S, normal polarity, codec is bit-clock and frame consumer.
    pub const I2S_CODEC_CONSUMER: Self = Self {
        interface: DaiInterface::I2s,
        inversion: DaiInversion::NormalBitNormalFrame,
        provider: ClockProvider::CodecConsumer,
    };

    /// Encode as the sound framework's `dai_fmt` bitfield.
    ///
    /// Bits \[3:0\] framing, \[11:8\] inversion, \[15:12\] clock provider.
    pub const fn to_bits(self) -> u32 {
        let format = match self.interface {
            DaiInterface::I2s => 1,
            DaiInterface::RightJustified => 2,
            DaiInterface::LeftJustified => 3,
            DaiInterface::DspA => 4,
            DaiInterface::DspB => 5,
        };
        let inversion = match self.inversion {
            DaiInversion::NormalBitNormalFrame => 0,
            DaiInversion::NormalBitInvertedFrame => 2 << 8,
            DaiInversion::InvertedBitNormalFrame => 3 << 8,
            DaiInversion::InvertedBitInvertedFrame => 4 << 8,
        };
        let provider = match self.provider {
            ClockProvider::CodecProvider => 1 << 12,
            ClockProvider::CodecConsumer => 4 << 12,
        };
        format | inversion | provider
    }
}

/// Stream parameters handed to the machine driver when a stream starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct HwParams {
    /// Requested sample rate in Hz.
    pub rate_hz: u32,
    /// Number of channels (1 = mono, 2 = stereo).
    pub channels: u8,
    /// Bits per sample slot (16, 24 or 32).
    pub sample_bits: u8,
}

impl HwParams {
    /// Stereo, 16-bit stream at `rate_hz`.
    pub const fn stereo_16(rate_hz: u32) -> Self {
        Self {
            rate_hz,
            channels: 2,
            sample_bits: 16,
        }
    }

    /// The requested rate as a validated [`SampleRateHz`].
    pub const fn rate(&self) -> Result<SampleRateHz, OutOfRangeError> {
        SampleRateHz::new(self.rate_hz)
    }

    /// Bit clock in Hz: `sample_bits × channels × rate`, `None` on overflow.
    pub fn bclk_hz(&self) -> Option<u32> {
        u32::from(self.sample_bits)
            .checked_mul(u32::from(self.channels))?
            .checked_mul(self.rate_hz)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_i2s_codec_consumer_bits() {
        // SND_SOC_DAIFMT_I2S | SND_SOC_DAIFMT_NB_NF | SND_SOC_DAIFMT_CBC_CFC
        assert_eq!(DaiFormat::I2S_CODEC_CONSUMER.to_bits(), 0x4001);
    }

    #[test]
    fn test_bclk_for_cd_audio() {
        let params = HwParams::stereo_16(44_100);
        assert_eq!(params.bclk_hz(), Some(1_411_200));
    }

    #[test]
    fn test_rate_out_of_range() {
        let params = HwParams::stereo_16(1_000);
        assert!(params.rate().is_err());
    }
}
