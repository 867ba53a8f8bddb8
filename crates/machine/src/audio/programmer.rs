//! Register programmer: pushes a [`RegisterProfile`] to a codec.

use platform::CodecRegisters;

use super::register_profile::RegisterProfile;

/// Write every entry of `profile` to `codec`, in table order, stopping at
/// the sentinel.
///
/// Writes are best-effort. A failed write is logged and the remaining
/// entries are still written; nothing is retried or rolled back, and no
/// status is returned. Bus reliability belongs to the bus driver.
///
/// Applying the same profile twice leaves the codec in the same state as
/// applying it once.
pub async fn apply_profile<C>(codec: &mut C, profile: &RegisterProfile)
where
    C: CodecRegisters + ?Sized,
{
    debug!(
        "applying {} codec profile ({} writes)",
        profile.name(),
        profile.len()
    );

    for entry in profile.entries() {
        if codec.write_register(entry.addr, entry.value).await.is_err() {
            warn!(
                "{} profile: write {} -> reg {} failed, continuing",
                profile.name(),
                entry.value,
                entry.addr
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::codec::mock::MockCodec;
    use crate::audio::register_profile::RegisterEntry;

    static TABLE: [RegisterEntry; 5] = [
        RegisterEntry::new(0x00, 0x35),
        RegisterEntry::new(0x19, 0x02),
        RegisterEntry::new(0x00, 0x36),
        RegisterEntry::END,
        RegisterEntry::new(0x2e, 0x24),
    ];

    #[tokio::test]
    async fn test_writes_in_table_order() {
        let mut codec = MockCodec::new();
        apply_profile(&mut codec, &RegisterProfile::new("t", &TABLE)).await;
        assert_eq!(codec.writes(), &[(0x00, 0x35), (0x19, 0x02), (0x00, 0x36)]);
        assert_eq!(codec.register(0x00), Some(0x36));
        assert_eq!(codec.register(0x2e), None);
    }

    #[tokio::test]
    async fn test_failed_write_does_not_stop_profile() {
        let mut codec = MockCodec::new();
        codec.fail_writes_to(0x19);
        apply_profile(&mut codec, &RegisterProfile::new("t", &TABLE)).await;
        assert_eq!(codec.failed_writes(), 1);
        assert_eq!(codec.register(0x19), None);
        assert_eq!(codec.register(0x00), Some(0x36));
    }
}
