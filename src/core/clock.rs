//! Clock module - drop and countdown tickers
//!
//! Both tickers are elapsed-time accumulators: each whole interval in
//! the accumulated total emits one synthetic command, and the remainder
//! carries over so no time is lost across ticks. Pause semantics come
//! for free: while the session is not Running it simply never calls
//! `advance`, so the accumulators hold their value until resume.

use crate::types::COUNTDOWN_INTERVAL_MS;

/// Whole intervals emitted by one clock advance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClockBatch {
    /// Synthetic "move down" commands owed
    pub drops: u32,
    /// Synthetic countdown decrements owed (Speed mode)
    pub seconds: u32,
}

/// Elapsed-time accumulator emitting one unit per whole interval
#[derive(Debug, Clone, Copy, Default)]
struct TickAccumulator {
    acc_ms: u32,
}

impl TickAccumulator {
    /// Accumulate `delta_ms` and drain whole intervals, keeping the
    /// remainder (not a hard reset to zero, to avoid drift).
    fn advance(&mut self, delta_ms: u32, interval_ms: u32) -> u32 {
        self.acc_ms += delta_ms;
        let emitted = self.acc_ms / interval_ms;
        self.acc_ms -= emitted * interval_ms;
        emitted
    }
}

/// The session's two periodic generators
#[derive(Debug, Clone, Default)]
pub struct SessionClock {
    drop: TickAccumulator,
    countdown: TickAccumulator,
}

impl SessionClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance both tickers by real elapsed time. The countdown ticker
    /// only runs for modes with a deadline.
    pub fn advance(
        &mut self,
        delta_ms: u32,
        drop_interval_ms: u32,
        countdown_enabled: bool,
    ) -> ClockBatch {
        let drops = self.drop.advance(delta_ms, drop_interval_ms);
        let seconds = if countdown_enabled {
            self.countdown.advance(delta_ms, COUNTDOWN_INTERVAL_MS)
        } else {
            0
        };
        ClockBatch { drops, seconds }
    }
}
