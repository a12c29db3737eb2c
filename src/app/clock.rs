use std::time::{Duration, Instant};

/// Most frames produced by one call; a stalled loop skips ahead instead of
/// fast-forwarding the wheel.
const MAX_CATCH_UP: u32 = 30;

/// Turns wall-clock time into a whole number of fixed-rate physics frames.
#[derive(Debug, Clone)]
pub struct FrameClock {
    frame: Duration,
    last: Instant,
    carry: Duration,
}

impl FrameClock {
    pub fn new(rate: u32, now: Instant) -> Self {
        let rate = rate.max(1);
        Self {
            frame: Duration::from_secs(1) / rate,
            last: now,
            carry: Duration::ZERO,
        }
    }

    /// Frames elapsed since the previous call. The remainder carries over.
    pub fn advance(&mut self, now: Instant) -> u32 {
        let elapsed = now.saturating_duration_since(self.last) + self.carry;
        self.last = now;

        let frame_nanos = self.frame.as_nanos().max(1);
        let frames = elapsed.as_nanos() / frame_nanos;
        if frames > MAX_CATCH_UP as u128 {
            self.carry = Duration::ZERO;
            return MAX_CATCH_UP;
        }

        let frames = frames as u32;
        self.carry = elapsed.saturating_sub(self.frame * frames);
        frames
    }

    /// Forget elapsed time, e.g. while nothing is spinning.
    pub fn reset(&mut self, now: Instant) {
        self.last = now;
        self.carry = Duration::ZERO;
    }
}
