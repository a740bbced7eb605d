mod planner;


pub use planner::{PlanError, Planner, TokenReport};

/// Token ceiling for a single message send
pub const DEFAULT_TOKEN_BUDGET: usize = 3072;

/// Framing message emitted ahead of a multi-part split so the recipient
/// acknowledges each chunk and holds its full reply until the last one
pub const FRAMING_INSTRUCTION: &str = "I will send the next message in several chunks. \
    Reply with \"OK\" after each chunk and hold your full answer until I say FINISH.";
