use std::time::{Duration, Instant};

/// Minimum-interval policy between live counter refreshes.
///
/// Keystrokes arrive far faster than token counts are worth recomputing;
/// the host calls [`ready`](RateLimit::ready) per keystroke and only
/// recounts when it returns true.
#[derive(Debug)]
pub struct RateLimit {
    min_interval: Duration,
    last: Option<Instant>,
}

impl RateLimit {
    pub fn new(min_interval: Duration) -> Self {
        Self {
            min_interval,
            last: None,
        }
    }

    /// True when enough time has passed since the last accepted call.
    /// Accepting records the call time.
    pub fn ready(&mut self) -> bool {
        let now = Instant::now();
        match self.last {
            Some(prev) if now.duration_since(prev) < self.min_interval => false,
            _ => {
                self.last = Some(now);
                true
            }
        }
    }
}
