//! Board configuration and constants
//!
//! Everything the machine driver needs to know about the console's audio
//! wiring is fixed at build time. Discovery hands a reference to
//! [`CSYS_LINK`] to the sequencer; nothing here is mutated at runtime.

use platform::{ClockConfig, DaiFormat, SampleRateHz};

/// Device-tree compatible string the driver binds to.
pub const COMPATIBLE: &str = "rockchip,rk3288-chamsys-audio";

/// Platform driver name.
pub const DRIVER_NAME: &str = "rk3288-chamsys-audio";

/// Sound card name as seen by user space.
pub const CARD_NAME: &str = "chamsys-pcm";

/// The card's single DAI link.
pub const LINK_NAME: &str = "Codecs";

/// PCM stream name of the link.
pub const STREAM_NAME: &str = "Audio";

/// DAI name the ES8328 codec driver registers.
pub const CODEC_DAI_NAME: &str = "HiFi";

/// Device-tree property holding the CPU DAI (and PCM platform) phandle.
pub const PROP_AUDIO_CPU: &str = "chamsys,audio-cpu";

/// Device-tree property holding the codec phandle.
pub const PROP_AUDIO_CODEC: &str = "chamsys,audio-codec";

/// Master clock shared by the RK3288 I2S block and the ES8328.
pub const CSYS_AUDIO_MCLK_HZ: u32 = 11_289_600;

/// MCLK/fs oversampling ratio.
pub const CSYS_AUDIO_MCLK_FS: u32 = 256;

/// The one sample rate this hardware profile supports.
pub const CSYS_AUDIO_LRCLK_HZ: u32 = 44_100;

/// System clock id passed to both DAIs.
pub const CSYS_SYSCLK_ID: u32 = 0;

const _: () = assert!(CSYS_AUDIO_MCLK_HZ == CSYS_AUDIO_LRCLK_HZ * CSYS_AUDIO_MCLK_FS);

/// Configuration of one DAI link, fixed for the lifetime of the card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LinkConfig {
    /// Link name.
    pub name: &'static str,
    /// PCM stream name.
    pub stream_name: &'static str,
    /// Link format.
    pub format: DaiFormat,
    /// Single supported sample rate, advertised to the framework for format
    /// negotiation with upstream sources.
    pub rate: SampleRateHz,
    /// Shared master clock.
    pub clock: ClockConfig,
    /// Clock id used for `set_sysclk` on both DAIs.
    pub sysclk_id: u32,
}

/// The console's I²S link: 44.1 kHz, MCLK 256 fs, codec is clock consumer.
pub const CSYS_LINK: LinkConfig = LinkConfig {
    name: LINK_NAME,
    stream_name: STREAM_NAME,
    format: DaiFormat::I2S_CODEC_CONSUMER,
    rate: SampleRateHz::HZ_44100,
    clock: ClockConfig {
        mclk_hz: CSYS_AUDIO_MCLK_HZ,
        mclk_fs: CSYS_AUDIO_MCLK_FS,
    },
    sysclk_id: CSYS_SYSCLK_ID,
};

const _: () = assert!(CSYS_LINK.clock.matches_rate(CSYS_LINK.rate));
const _: () = assert!(CSYS_LINK.rate.get() == CSYS_AUDIO_LRCLK_HZ);
const _: () = assert!(matches!(
    ClockConfig::for_rate(CSYS_LINK.rate, CSYS_AUDIO_MCLK_FS),
    Some(clock) if clock.mclk_hz == CSYS_LINK.clock.mclk_hz
));

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_clock_is_256fs_of_rate() {
        assert_eq!(CSYS_LINK.clock.lrclk_hz(), Some(CSYS_AUDIO_LRCLK_HZ));
        assert_eq!(CSYS_LINK.clock.mclk_hz, 11_289_600);
    }

    #[test]
    fn test_link_format_is_i2s_codec_consumer() {
        assert_eq!(CSYS_LINK.format, DaiFormat::I2S_CODEC_CONSUMER);
    }
}
