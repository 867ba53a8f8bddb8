//! Mock codec for host-side testing
//!
//! Implements [`platform::CodecRegisters`] without any hardware dependency.
//! Keeps a 256-entry register file plus a journal of every accepted write,
//! and can be told to fail writes to chosen registers.

use platform::CodecRegisters;

/// Journal depth. Writes beyond this are applied and counted by
/// [`MockCodec::dropped_writes`] but not journalled.
pub const JOURNAL_DEPTH: usize = 256;

/// Error returned by a write the mock was told to fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MockBusError {
    /// Register the failed write targeted.
    pub reg: u8,
}

/// Mock codec: records all writes for test assertions.
pub struct MockCodec {
    registers: [Option<u8>; 256],
    journal: heapless::Vec<(u8, u8), JOURNAL_DEPTH>,
    dropped: usize,
    failing: heapless::Vec<u8, 8>,
    fail_all: bool,
    failed: usize,
}

impl MockCodec {
    /// Create a mock codec with every register unwritten.
    pub fn new() -> Self {
        Self {
            registers: [None; 256],
            journal: heapless::Vec::new(),
            dropped: 0,
            failing: heapless::Vec::new(),
            fail_all: false,
            failed: 0,
        }
    }

    /// Make every subsequent write to `reg` fail.
    pub fn fail_writes_to(&mut self, reg: u8) {
        if !self.failing.contains(&reg) {
            let _ = self.failing.push(reg);
        }
    }

    /// Make every subsequent write fail, as if the bus were unplugged.
    pub fn fail_all_writes(&mut self) {
        self.fail_all = true;
    }

    /// Last value written to `reg`, `None` if never written.
    pub fn register(&self, reg: u8) -> Option<u8> {
        self.registers.get(usize::from(reg)).copied().flatten()
    }

    /// Complete register file.
    pub fn registers(&self) -> &[Option<u8>; 256] {
        &self.registers
    }

    /// Accepted writes in the order they were issued.
    pub fn writes(&self) -> &[(u8, u8)] {
        &self.journal
    }

    /// Number of writes rejected by failure injection.
    pub fn failed_writes(&self) -> usize {
        self.failed
    }

    /// Accepted writes that arrived after the journal was full.
    pub fn dropped_writes(&self) -> usize {
        self.dropped
    }

    /// Forget the journal, keeping register contents.
    pub fn clear_journal(&mut self) {
        self.journal.clear();
        self.dropped = 0;
        self.failed = 0;
    }
}

impl Default for MockCodec {
    fn default() -> Self {
        Self::new()
    }
}

impl CodecRegisters for MockCodec {
    type Error = MockBusError;

    async fn write_register(&mut self, reg: u8, value: u8) -> Result<(), Self::Error> {
        if self.fail_all || self.failing.contains(&reg) {
            self.failed = self.failed.saturating_add(1);
            return Err(MockBusError { reg });
        }
        if let Some(slot) = self.registers.get_mut(usize::from(reg)) {
            *slot = Some(value);
        }
        if self.journal.push((reg, value)).is_err() {
            self.dropped = self.dropped.saturating_add(1);
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_codec_records_writes() {
        let mut codec = MockCodec::new();
        codec.write_register(0x2e, 0x24).await.unwrap();
        codec.write_register(0x2e, 0x00).await.unwrap();
        assert_eq!(codec.writes(), &[(0x2e, 0x24), (0x2e, 0x00)]);
        assert_eq!(codec.register(0x2e), Some(0x00));
    }

    #[tokio::test]
    async fn test_mock_codec_failure_injection() {
        let mut codec = MockCodec::new();
        codec.fail_writes_to(0x03);
        assert_eq!(
            codec.write_register(0x03, 0x09).await,
            Err(MockBusError { reg: 0x03 })
        );
        codec.write_register(0x04, 0x00).await.unwrap();
        assert_eq!(codec.failed_writes(), 1);
        assert_eq!(codec.writes(), &[(0x04, 0x00)]);
    }

    #[tokio::test]
    async fn test_mock_codec_fail_all() {
        let mut codec = MockCodec::new();
        codec.fail_all_writes();
        assert!(codec.write_register(0x00, 0x35).await.is_err());
        assert!(codec.writes().is_empty());
        assert_eq!(codec.register(0x00), None);
    }

    #[tokio::test]
    async fn test_writes_past_journal_depth_are_counted() {
        let mut codec = MockCodec::new();
        for reg in 0..=u8::MAX {
            codec.write_register(reg, 0x00).await.unwrap();
        }
        assert_eq!(codec.dropped_writes(), 0);

        codec.write_register(0x2e, 0x1e).await.unwrap();
        assert_eq!(codec.writes().len(), JOURNAL_DEPTH);
        assert_eq!(codec.dropped_writes(), 1);
        assert_eq!(codec.register(0x2e), Some(0x1e));

        codec.clear_journal();
        assert_eq!(codec.dropped_writes(), 0);
    }

    #[tokio::test]
    async fn test_clear_journal_keeps_registers() {
        let mut codec = MockCodec::new();
        codec.write_register(0x19, 0x02).await.unwrap();
        codec.clear_journal();
        assert!(codec.writes().is_empty());
        assert_eq!(codec.register(0x19), Some(0x02));
    }
}
