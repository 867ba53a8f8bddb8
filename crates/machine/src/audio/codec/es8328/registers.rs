//! ES8328 register map
//!
//! Source: Everest Semiconductor ES8328 datasheet, register section.
//!
//! # Notes
//!
//! - All registers are 8-bit and the address space ends at 0x34, so 0xFF
//!   is free to serve as the profile sentinel.
//! - DACCONTROLn lives at `0x17 + n - 1`; the output-level registers the
//!   quiet profile drives to zero are DACCONTROL24..27 (LOUT1/ROUT1/LOUT2/ROUT2).
//! - Output volume registers are 6-bit: 0x00 = −45 dB (effectively silent at
//!   line level), 0x1E = 0 dB, 0x21 = +4.5 dB.

// ---------------------------------------------------------------------------
// Register addresses
// ---------------------------------------------------------------------------

/// Chip control 1: VMID divider, reference, sequencing (ADC+DAC fs control)
pub const CONTROL1: u8 = 0x00;
/// Chip control 2: low-power / reference bias
pub const CONTROL2: u8 = 0x01;
/// Chip power management
pub const CHIPPOWER: u8 = 0x02;
/// ADC power management
pub const ADCPOWER: u8 = 0x03;
/// DAC power management
pub const DACPOWER: u8 = 0x04;
/// Master mode control (bit 6 = MCLK/2)
pub const MASTERMODE: u8 = 0x08;
/// ADC control 1: PGA gain
pub const ADCCONTROL1: u8 = 0x09;
/// ADC control 2: input select
pub const ADCCONTROL2: u8 = 0x0a;
/// ADC control 3: differential / mono mix select
pub const ADCCONTROL3: u8 = 0x0b;
/// ADC control 4: serial format
pub const ADCCONTROL4: u8 = 0x0c;
/// ADC control 8: left ADC digital volume
pub const ADCCONTROL8: u8 = 0x10;
/// ADC control 9: right ADC digital volume
pub const ADCCONTROL9: u8 = 0x11;
/// ADC control 10: ALC enable, max/min PGA gain
pub const ADCCONTROL10: u8 = 0x12;
/// ADC control 11: ALC target / hold time
pub const ADCCONTROL11: u8 = 0x13;
/// ADC control 12: ALC decay / attack time
pub const ADCCONTROL12: u8 = 0x14;
/// ADC control 13: ALC mode, zero cross, window size
pub const ADCCONTROL13: u8 = 0x15;
/// ADC control 14: noise gate
pub const ADCCONTROL14: u8 = 0x16;
/// DAC control 1: serial format
pub const DACCONTROL1: u8 = 0x17;
/// DAC control 3: DAC soft mute, volume ramp
pub const DACCONTROL3: u8 = 0x19;
/// DAC control 4: left DAC digital volume
pub const DACCONTROL4: u8 = 0x1a;
/// DAC control 5: right DAC digital volume
pub const DACCONTROL5: u8 = 0x1b;
/// DAC control 16: left/right mixer input select
pub const DACCONTROL16: u8 = 0x26;
/// DAC control 17: left mixer: DAC→LOUT, LIN→LOUT, LIN gain
pub const DACCONTROL17: u8 = 0x27;
/// DAC control 18: left mixer: RIN→LOUT
pub const DACCONTROL18: u8 = 0x28;
/// DAC control 19: right mixer: LIN→ROUT
pub const DACCONTROL19: u8 = 0x29;
/// DAC control 20: right mixer: DAC→ROUT, RIN→ROUT, RIN gain
pub const DACCONTROL20: u8 = 0x2a;
/// DAC control 24: LOUT1 volume
pub const DACCONTROL24: u8 = 0x2e;
/// DAC control 25: ROUT1 volume
pub const DACCONTROL25: u8 = 0x2f;
/// DAC control 26: LOUT2 volume
pub const DACCONTROL26: u8 = 0x30;
/// DAC control 27: ROUT2 volume
pub const DACCONTROL27: u8 = 0x31;

/// Highest implemented register address.
pub const LAST_REGISTER: u8 = 0x34;

// ---------------------------------------------------------------------------
// Register field values
// ---------------------------------------------------------------------------

/// Output volume: lowest step, line outputs silent.
pub const OUT_VOLUME_MUTE: u8 = 0x00;
