// Public API exports
pub mod host;
pub mod plan;
pub mod session;
pub mod split;
pub mod token;

// Re-export main types for convenience
pub use host::{
    ensure_control, RateLimit, SendControl, Surface, COUNTER_REFRESH_INTERVAL, IDLE_LABEL,
};

pub use plan::{PlanError, Planner, TokenReport, DEFAULT_TOKEN_BUDGET, FRAMING_INSTRUCTION};

pub use session::SplitSession;

pub use split::{find_separator, segment, Separator, SPLIT_TOLERANCE};

pub use token::{normalize, BpeTokenCounter, TokenCounter, TokenizerError};
