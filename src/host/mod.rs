use std::time::Duration;

mod control;
mod debounce;
mod surface;

#[cfg(test)]
mod tests;

pub use control::SendControl;
pub use debounce::RateLimit;
pub use surface::{ensure_control, Surface};

/// Label shown on the send control when no split is in flight
pub const IDLE_LABEL: &str = "Send";

/// Default minimum interval between live counter refreshes
pub const COUNTER_REFRESH_INTERVAL: Duration = Duration::from_millis(500);
