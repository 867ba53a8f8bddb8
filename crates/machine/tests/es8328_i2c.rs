//! ES8328 bus-level tests: verify the exact I²C traffic the driver emits.
//!
//! Run with: cargo test -p chamsys-audio --test es8328_i2c
// Integration test file: unwrap/expect are intentional test mechanisms.
#![allow(clippy::unwrap_used, clippy::expect_used)]

use chamsys_audio::audio::apply_profile;
use chamsys_audio::audio::codec::es8328::{
    profile::{ACTIVE, QUIET},
    Es8328, Es8328Error, I2C_ADDR_CE_HIGH, I2C_ADDR_CE_LOW,
};
use embedded_hal::i2c::ErrorKind;
use embedded_hal_mock::eh1::i2c::{Mock as I2cMock, Transaction as I2cTransaction};
use platform::CodecRegisters;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// One register write as the ES8328 sees it: `[reg, value]` at `addr`.
fn reg_write(addr: u8, reg: u8, value: u8) -> I2cTransaction {
    I2cTransaction::write(addr, vec![reg, value])
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_quiet_profile_bus_traffic() {
    let expectations = [
        reg_write(I2C_ADDR_CE_LOW, 0x2e, 0x00),
        reg_write(I2C_ADDR_CE_LOW, 0x2f, 0x00),
    ];
    let mut codec = Es8328::new(I2cMock::new(&expectations));

    apply_profile(&mut codec, &QUIET).await;

    codec.release().done();
}

#[tokio::test]
async fn test_active_profile_is_written_in_table_order() {
    let expectations: Vec<_> = ACTIVE
        .entries()
        .map(|e| reg_write(I2C_ADDR_CE_LOW, e.addr, e.value))
        .collect();
    assert_eq!(expectations.len(), 24);
    let mut codec = Es8328::new(I2cMock::new(&expectations));

    apply_profile(&mut codec, &ACTIVE).await;

    codec.release().done();
}

#[tokio::test]
async fn test_alternate_address() {
    let expectations = [reg_write(I2C_ADDR_CE_HIGH, 0x19, 0x02)];
    let mut codec = Es8328::with_address(I2cMock::new(&expectations), I2C_ADDR_CE_HIGH);

    codec.write_register(0x19, 0x02).await.unwrap();

    codec.release().done();
}

#[tokio::test]
async fn test_nack_is_reported_as_i2c_error() {
    let expectations = [reg_write(I2C_ADDR_CE_LOW, 0x2e, 0x00).with_error(ErrorKind::Other)];
    let mut codec = Es8328::new(I2cMock::new(&expectations));

    let err = codec.write_register(0x2e, 0x00).await.unwrap_err();
    assert_eq!(err, Es8328Error::I2c(ErrorKind::Other));

    codec.release().done();
}

#[tokio::test]
async fn test_failed_write_does_not_abort_profile() {
    // First QUIET write fails on the bus; the second must still be sent.
    let expectations = [
        reg_write(I2C_ADDR_CE_LOW, 0x2e, 0x00).with_error(ErrorKind::Other),
        reg_write(I2C_ADDR_CE_LOW, 0x2f, 0x00),
    ];
    let mut codec = Es8328::new(I2cMock::new(&expectations));

    apply_profile(&mut codec, &QUIET).await;

    codec.release().done();
}

#[tokio::test]
async fn test_read_register() {
    let expectations = [I2cTransaction::write_read(
        I2C_ADDR_CE_LOW,
        vec![0x2e],
        vec![0x24],
    )];
    let mut codec = Es8328::new(I2cMock::new(&expectations));

    assert_eq!(codec.read_register(0x2e).await.unwrap(), 0x24);

    codec.release().done();
}
