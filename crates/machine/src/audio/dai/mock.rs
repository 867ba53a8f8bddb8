//! Mock DAI for host-side testing
//!
//! Implements [`platform::SysclkControl`] and records every call.

use platform::{ClockDirection, DaiError, SysclkControl};

/// One recorded `set_sysclk` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SysclkCall {
    /// Clock id.
    pub clk_id: u32,
    /// Requested frequency in Hz.
    pub freq_hz: u32,
    /// Requested direction.
    pub dir: ClockDirection,
}

/// Number of calls [`MockDai`] keeps.
pub const CALL_DEPTH: usize = 32;

/// Mock DAI: records all sysclk requests for test assertions.
pub struct MockDai {
    calls: heapless::Vec<SysclkCall, CALL_DEPTH>,
    dropped: usize,
    fail_with: Option<DaiError>,
    sysclk_hz: Option<u32>,
}

impl MockDai {
    /// Create a mock DAI that accepts every clock.
    pub fn new() -> Self {
        Self {
            calls: heapless::Vec::new(),
            dropped: 0,
            fail_with: None,
            sysclk_hz: None,
        }
    }

    /// Create a mock DAI that rejects every clock with `err`.
    pub fn failing(err: DaiError) -> Self {
        Self {
            fail_with: Some(err),
            ..Self::new()
        }
    }

    /// Start or stop rejecting clock requests.
    pub fn set_failure(&mut self, err: Option<DaiError>) {
        self.fail_with = err;
    }

    /// Every request seen, accepted or not, up to [`CALL_DEPTH`].
    pub fn calls(&self) -> &[SysclkCall] {
        &self.calls
    }

    /// Requests that arrived after the call log was full.
    pub fn dropped_calls(&self) -> usize {
        self.dropped
    }

    /// Frequency of the last accepted request.
    pub fn sysclk_hz(&self) -> Option<u32> {
        self.sysclk_hz
    }
}

impl Default for MockDai {
    fn default() -> Self {
        Self::new()
    }
}

impl SysclkControl for MockDai {
    fn set_sysclk(
        &mut self,
        clk_id: u32,
        freq_hz: u32,
        dir: ClockDirection,
    ) -> Result<(), DaiError> {
        let call = SysclkCall {
            clk_id,
            freq_hz,
            dir,
        };
        if self.calls.push(call).is_err() {
            self.dropped = self.dropped.saturating_add(1);
        }
        if let Some(err) = self.fail_with {
            return Err(err);
        }
        self.sysclk_hz = Some(freq_hz);
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_dai_accepts_and_records() {
        let mut dai = MockDai::new();
        dai.set_sysclk(0, 11_289_600, ClockDirection::Out).unwrap();
        assert_eq!(dai.sysclk_hz(), Some(11_289_600));
        assert_eq!(dai.calls().len(), 1);
    }

    #[test]
    fn test_mock_dai_failure_is_recorded() {
        let mut dai = MockDai::failing(DaiError::Bus);
        assert_eq!(
            dai.set_sysclk(0, 11_289_600, ClockDirection::Out),
            Err(DaiError::Bus)
        );
        assert_eq!(dai.sysclk_hz(), None);
        assert_eq!(dai.calls().len(), 1);

        dai.set_failure(None);
        dai.set_sysclk(0, 11_289_600, ClockDirection::Out).unwrap();
        assert_eq!(dai.sysclk_hz(), Some(11_289_600));
    }

    #[test]
    fn test_mock_dai_counts_calls_past_log_depth() {
        let mut dai = MockDai::new();
        for _ in 0..34 {
            dai.set_sysclk(0, 11_289_600, ClockDirection::Out).unwrap();
        }
        assert_eq!(dai.calls().len(), CALL_DEPTH);
        assert_eq!(dai.dropped_calls(), 2);
    }
}
