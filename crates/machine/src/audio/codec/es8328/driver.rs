//! ES8328 control-bus driver
//!
//! Communicates with the chip via I²C. Uses the `embedded_hal_async::i2c::I2c`
//! trait so it is HAL-agnostic while remaining async.
//!
//! The audio samples travel over I²S from the RK3288; that path does not go
//! through this driver. The codec DAI half ([`Es8328Dai`]) only records the
//! MCLK it was told about and which rate family it implies; it never touches
//! the bus.
//!
//! # I²C Address
//!
//! | CE pin | Address |
//! |--------|---------|
//! | GND    | `0x10`  |
//! | VDD    | `0x11`  |

use embedded_hal::i2c::{Error as _, ErrorKind, SevenBitAddress};
use embedded_hal_async::i2c::I2c;
use platform::{ClockDirection, CodecRegisters, DaiError, SampleRateHz, SysclkControl};

/// Default I²C address (CE pin = GND)
pub const I2C_ADDR_CE_LOW: SevenBitAddress = 0x10;

/// Alternate I²C address (CE pin = VDD)
pub const I2C_ADDR_CE_HIGH: SevenBitAddress = 0x11;

/// Errors returned by the ES8328 control-bus driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Es8328Error {
    /// I²C transfer failed.
    I2c(ErrorKind),
}

impl core::fmt::Display for Es8328Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::I2c(kind) => write!(f, "ES8328 I2C error: {kind}"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Es8328Error {}

/// ES8328 codec component driver
pub struct Es8328<I> {
    i2c: I,
    address: SevenBitAddress,
}

impl<I: I2c> Es8328<I> {
    /// Create a driver at the default address (CE pin low).
    ///
    /// `i2c` must be a configured async I²C peripheral pointing at the chip.
    pub fn new(i2c: I) -> Self {
        Self::with_address(i2c, I2C_ADDR_CE_LOW)
    }

    /// Create a driver at an explicit 7-bit address.
    pub fn with_address(i2c: I, address: SevenBitAddress) -> Self {
        Self { i2c, address }
    }

    /// Read a single register.
    pub async fn read_register(&mut self, reg: u8) -> Result<u8, Es8328Error> {
        let mut buf = [0u8; 1];
        self.i2c
            .write_read(self.address, &[reg], &mut buf)
            .await
            .map_err(|e| Es8328Error::I2c(e.kind()))?;
        let [value] = buf;
        Ok(value)
    }

    /// Release the I²C peripheral.
    pub fn release(self) -> I {
        self.i2c
    }
}

impl<I: I2c> CodecRegisters for Es8328<I> {
    type Error = Es8328Error;

    async fn write_register(&mut self, reg: u8, value: u8) -> Result<(), Self::Error> {
        self.i2c
            .write(self.address, &[reg, value])
            .await
            .map_err(|e| Es8328Error::I2c(e.kind()))
    }
}

// ---------------------------------------------------------------------------
// Codec DAI
// ---------------------------------------------------------------------------

/// Sample-rate family an MCLK frequency supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RateFamily {
    /// 11.2896 MHz / 22.5792 MHz: 8.018, 11.025, 22.05, 44.1, 88.2 kHz.
    Hz44100,
    /// 12.288 MHz / 24.576 MHz: 8, 12, 16, 24, 32, 48, 96 kHz.
    Hz48000,
}

impl RateFamily {
    const RATES_44100: [u32; 5] = [8_018, 11_025, 22_050, 44_100, 88_200];
    const RATES_48000: [u32; 7] = [8_000, 12_000, 16_000, 24_000, 32_000, 48_000, 96_000];

    /// Sample rates the codec can run from an MCLK in this family.
    pub fn rates(self) -> &'static [u32] {
        match self {
            Self::Hz44100 => &Self::RATES_44100,
            Self::Hz48000 => &Self::RATES_48000,
        }
    }
}

/// ES8328 codec DAI: accepts the system clock and derives its rate
/// constraints from it.
///
/// This is a constraint model only. `set_sysclk` writes no register; the
/// clock-mode and divider registers are covered by the register profiles
/// applied through [`Es8328`]. What it records is what the link may ask
/// of the codec next: the rate family and whether MCLK must be halved.
///
/// The codec runs as a clock consumer and needs the exact MCLK to pick its
/// dividers, so only [`ClockDirection::Out`] (the rate of the reference
/// clock fed to it) is accepted.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Es8328Dai {
    sysclk_hz: Option<u32>,
    family: Option<RateFamily>,
    mclk_div2: bool,
}

impl Es8328Dai {
    /// Create a DAI with no system clock configured.
    pub const fn new() -> Self {
        Self {
            sysclk_hz: None,
            family: None,
            mclk_div2: false,
        }
    }

    /// Configured MCLK frequency.
    pub fn sysclk_hz(&self) -> Option<u32> {
        self.sysclk_hz
    }

    /// Rate family of the configured MCLK.
    pub fn rate_family(&self) -> Option<RateFamily> {
        self.family
    }

    /// `true` when the MCLK is a doubled rate and the chip must divide it by two.
    pub fn mclk_div2(&self) -> bool {
        self.mclk_div2
    }

    /// `true` if `rate` can be produced from the configured MCLK.
    pub fn supports_rate(&self, rate: SampleRateHz) -> bool {
        self.family
            .is_some_and(|family| family.rates().contains(&rate.get()))
    }
}

impl SysclkControl for Es8328Dai {
    fn set_sysclk(
        &mut self,
        _clk_id: u32,
        freq_hz: u32,
        dir: ClockDirection,
    ) -> Result<(), DaiError> {
        if dir != ClockDirection::Out {
            return Err(DaiError::UnsupportedDirection);
        }
        let (family, div2) = match freq_hz {
            0 => {
                *self = Self::new();
                return Ok(());
            }
            11_289_600 => (RateFamily::Hz44100, false),
            22_579_200 => (RateFamily::Hz44100, true),
            12_288_000 => (RateFamily::Hz48000, false),
            24_576_000 => (RateFamily::Hz48000, true),
            other => return Err(DaiError::UnsupportedFrequency(other)),
        };
        self.sysclk_hz = Some(freq_hz);
        self.family = Some(family);
        self.mclk_div2 = div2;
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_cd_mclk_selects_44k1_family() {
        let mut dai = Es8328Dai::new();
        dai.set_sysclk(0, 11_289_600, ClockDirection::Out).unwrap();
        assert_eq!(dai.rate_family(), Some(RateFamily::Hz44100));
        assert!(!dai.mclk_div2());
        assert!(dai.supports_rate(SampleRateHz::HZ_44100));
        assert!(!dai.supports_rate(SampleRateHz::HZ_48000));
    }

    #[test]
    fn test_doubled_mclk_sets_div2() {
        let mut dai = Es8328Dai::new();
        dai.set_sysclk(0, 24_576_000, ClockDirection::Out).unwrap();
        assert_eq!(dai.rate_family(), Some(RateFamily::Hz48000));
        assert!(dai.mclk_div2());
    }

    #[test]
    fn test_unsupported_mclk_is_rejected_and_state_kept() {
        let mut dai = Es8328Dai::new();
        dai.set_sysclk(0, 11_289_600, ClockDirection::Out).unwrap();
        assert_eq!(
            dai.set_sysclk(0, 10_000_000, ClockDirection::Out),
            Err(DaiError::UnsupportedFrequency(10_000_000))
        );
        assert_eq!(dai.sysclk_hz(), Some(11_289_600));
    }

    #[test]
    fn test_inbound_clock_is_rejected_and_state_kept() {
        let mut dai = Es8328Dai::new();
        dai.set_sysclk(0, 11_289_600, ClockDirection::Out).unwrap();
        assert_eq!(
            dai.set_sysclk(0, 12_288_000, ClockDirection::In),
            Err(DaiError::UnsupportedDirection)
        );
        assert_eq!(dai.rate_family(), Some(RateFamily::Hz44100));
    }

    #[test]
    fn test_zero_clears_constraints() {
        let mut dai = Es8328Dai::new();
        dai.set_sysclk(0, 12_288_000, ClockDirection::Out).unwrap();
        dai.set_sysclk(0, 0, ClockDirection::Out).unwrap();
        assert_eq!(dai, Es8328Dai::new());
        assert!(!dai.supports_rate(SampleRateHz::HZ_48000));
    }
}
