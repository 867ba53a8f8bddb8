//! Audio domain newtypes for compile-time safety.
//!
//! - `SampleRateHz`: validates the 8 kHz–192 kHz PCM range of the I²S link

// ── Error type ───────────────────────────────────────────────────────────────

/// Error returned when a value is out of the valid range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct OutOfRangeError {
    /// The value that was out of range.
    pub value: u32,
    /// The inclusive minimum allowed value.
    pub min: u32,
    /// The inclusive maximum allowed value.
    pub max: u32,
}

impl core::fmt::Display for OutOfRangeError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "value {} outside {}..={}",
            self.value, self.min, self.max
        )
    }
}

#[cfg(feature = "std")]
impl std::error::Error for OutOfRangeError {}

// ── SampleRateHz ─────────────────────────────────────────────────────────────

/// PCM sample rate (LRCLK frequency) in Hz.
///
/// Valid range: 8000–192000 Hz, the span an RK3288 I2S controller and an
/// ES83xx codec can both clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(transparent)]
pub struct SampleRateHz(u32);

impl SampleRateHz {
    /// Minimum supported sample rate: 8000 Hz.
    pub const MIN_HZ: u32 = 8_000;

    /// Maximum supported sample rate: 192000 Hz.
    pub const MAX_HZ: u32 = 192_000;

    /// 44.1 kHz, the CD-audio family base rate.
    pub const HZ_44100: Self = Self(44_100);

    /// 48 kHz, the video/pro-audio family base rate.
    pub const HZ_48000: Self = Self(48_000);

    /// Create a `SampleRateHz`, returning an error if out of 8000–192000 Hz.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfRangeError`] if `hz < 8000` or `hz > 192000`.
    pub const fn new(hz: u32) -> Result<Self, OutOfRangeError> {
        if hz < Self::MIN_HZ || hz > Self::MAX_HZ {
            Err(OutOfRangeError {
                value: hz,
                min: Self::MIN_HZ,
                max: Self::MAX_HZ,
            })
        } else {
            Ok(Self(hz))
        }
    }

    /// Return the sample rate in Hz.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl core::fmt::Display for SampleRateHz {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} Hz", self.0)
    }
}
