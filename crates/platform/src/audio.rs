//! Digital audio link abstractions
//!
//! The machine driver never talks to chip registers for clocking; it asks
//! each end of the I²S link to accept a system clock, and it writes codec
//! registers one at a time over the control bus. Those two capabilities are
//! the traits in this module.

/// Direction of a DAI system clock pin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ClockDirection {
    /// The DAI sources the clock itself from an internal or crystal
    /// reference. DAIs that can only consume a clock reject it with
    /// [`DaiError::UnsupportedDirection`].
    In,
    /// The clock runs at `freq_hz` on the link: driven by the DAI, or fed to
    /// it when the DAI is a clock consumer.
    Out,
}

/// Errors a DAI may report when asked to accept a system clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DaiError {
    /// The requested frequency is not one this DAI can derive its rates from.
    UnsupportedFrequency(u32),
    /// The clock id does not name a clock on this DAI.
    InvalidClockId(u32),
    /// The DAI cannot drive its clock in the requested direction.
    UnsupportedDirection,
    /// The control bus or clock tree rejected the change.
    Bus,
}

impl core::fmt::Display for DaiError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::UnsupportedFrequency(hz) => write!(f, "unsupported sysclk frequency {hz} Hz"),
            Self::InvalidClockId(id) => write!(f, "invalid clock id {id}"),
            Self::UnsupportedDirection => write!(f, "unsupported clock direction"),
            Self::Bus => write!(f, "clock configuration rejected by hardware"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for DaiError {}

/// One end (CPU interface or codec) of a digital audio link.
///
/// Mirrors the "set sysclk" DAI operation: the caller states which clock,
/// what frequency and which direction, and the DAI either accepts it or
/// reports why not. Implementations must not retry.
pub trait SysclkControl {
    /// Configure system clock `clk_id` to `freq_hz` in direction `dir`.
    fn set_sysclk(&mut self, clk_id: u32, freq_hz: u32, dir: ClockDirection)
        -> Result<(), DaiError>;
}

impl<T: SysclkControl + ?Sized> SysclkControl for &mut T {
    fn set_sysclk(
        &mut self,
        clk_id: u32,
        freq_hz: u32,
        dir: ClockDirection,
    ) -> Result<(), DaiError> {
        T::set_sysclk(self, clk_id, freq_hz, dir)
    }
}

/// Register-level access to an audio codec over its control bus.
///
/// Addresses and values are 8-bit, matching the ES83xx family register map.
pub trait CodecRegisters {
    /// Error type of the underlying bus.
    type Error: core::fmt::Debug;

    /// Write `value` to register `reg`.
    async fn write_register(&mut self, reg: u8, value: u8) -> Result<(), Self::Error>;
}

impl<T: CodecRegisters + ?Sized> CodecRegisters for &mut T {
    type Error = T::Error;

    async fn write_register(&mut self, reg: u8, value: u8) -> Result<(), Self::Error> {
        T::write_register(self, reg, value).await
    }
}
