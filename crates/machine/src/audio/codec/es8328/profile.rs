//! ES8328 register profiles for the console line path.
//!
//! - [`ACTIVE`]: full operating state. Line in through ALC to the ADC, DAC
//!   through the output mixers to LOUT1/ROUT1, LOUT2/ROUT2 off.
//! - [`QUIET`]: output-muting overlay. Only the LOUT1/ROUT1 level
//!   registers, driven to zero; everything else keeps its last value.

use super::registers::*;
use crate::audio::register_profile::{RegisterEntry, RegisterProfile};

const ACTIVE_TABLE: [RegisterEntry; 25] = [
    RegisterEntry::new(CONTROL1, 0x35),     // ADC+DAC same fs, play+record seq, 500k VMID, ref
    RegisterEntry::new(ADCPOWER, 0x09),     // ADC power: left/right ADC + PGA up, micbias off
    RegisterEntry::new(ADCCONTROL1, 0x00),  // PGA gain 0 dB
    RegisterEntry::new(ADCCONTROL2, 0x00),  // input select LINPUT1/RINPUT1
    RegisterEntry::new(ADCCONTROL3, 0x00),  // stereo, no differential
    RegisterEntry::new(ADCCONTROL8, 0x00),  // left ADC volume 0 dB
    RegisterEntry::new(ADCCONTROL9, 0x00),  // right ADC volume 0 dB
    RegisterEntry::new(ADCCONTROL10, 0xea), // ALC stereo on, max gain +35.5 dB, min -12 dB
    RegisterEntry::new(ADCCONTROL11, 0xc0), // ALC target, hold 0
    RegisterEntry::new(ADCCONTROL12, 0x05), // ALC decay / attack
    RegisterEntry::new(ADCCONTROL13, 0x06), // ALC mode, window
    RegisterEntry::new(ADCCONTROL14, 0x53), // noise gate on
    RegisterEntry::new(DACCONTROL3, 0x02),  // DAC unmuted, volume ramp on
    RegisterEntry::new(DACCONTROL4, 0x0a),  // left DAC volume -5 dB
    RegisterEntry::new(DACCONTROL5, 0x0a),  // right DAC volume -5 dB
    RegisterEntry::new(DACCONTROL16, 0x12), // mixer inputs LIN1/RIN1
    RegisterEntry::new(DACCONTROL17, 0xb8), // left DAC to left mixer
    RegisterEntry::new(DACCONTROL18, 0x38), // right input off left mixer
    RegisterEntry::new(DACCONTROL19, 0x38), // left input off right mixer
    RegisterEntry::new(DACCONTROL20, 0xb8), // right DAC to right mixer
    RegisterEntry::new(DACCONTROL24, 0x24), // LOUT1 volume
    RegisterEntry::new(DACCONTROL25, 0x24), // ROUT1 volume
    RegisterEntry::new(DACCONTROL26, 0x00), // LOUT2 off
    RegisterEntry::new(DACCONTROL27, 0x00), // ROUT2 off
    RegisterEntry::END,
];

const QUIET_TABLE: [RegisterEntry; 3] = [
    RegisterEntry::new(DACCONTROL24, OUT_VOLUME_MUTE), // LOUT1 volume
    RegisterEntry::new(DACCONTROL25, OUT_VOLUME_MUTE), // ROUT1 volume
    RegisterEntry::END,
];

/// Full operating configuration, applied when a stream starts.
pub const ACTIVE: RegisterProfile = RegisterProfile::new("active", &ACTIVE_TABLE);

/// Output-mute overlay, applied at card init and stream stop.
pub const QUIET: RegisterProfile = RegisterProfile::new("quiet", &QUIET_TABLE);

const _: () = assert!(ACTIVE.is_terminated());
const _: () = assert!(QUIET.is_terminated());

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profiles_only_touch_implemented_registers() {
        for entry in ACTIVE.entries().chain(QUIET.entries()) {
            assert!(
                entry.addr <= LAST_REGISTER,
                "register {:#04x} is outside the ES8328 map",
                entry.addr
            );
        }
        assert!(crate::audio::register_profile::SENTINEL_ADDR > LAST_REGISTER);
    }

    #[test]
    fn test_quiet_is_subset_of_active_addresses() {
        for entry in QUIET.entries() {
            assert!(
                ACTIVE.final_value(entry.addr).is_some(),
                "quiet writes {:#04x} which active never sets",
                entry.addr
            );
        }
    }

    #[test]
    fn test_quiet_mutes_line_out_one() {
        assert_eq!(QUIET.final_value(DACCONTROL24), Some(OUT_VOLUME_MUTE));
        assert_eq!(QUIET.final_value(DACCONTROL25), Some(OUT_VOLUME_MUTE));
        assert_eq!(QUIET.len(), 2);
    }

    #[test]
    fn test_active_unmutes_line_out_one() {
        assert_eq!(ACTIVE.final_value(DACCONTROL24), Some(0x24));
        assert_eq!(ACTIVE.final_value(DACCONTROL25), Some(0x24));
        assert_eq!(ACTIVE.len(), 24);
    }
}
