use std::collections::VecDeque;


/// FIFO queue of the sends remaining from one split.
///
/// Owned explicitly by whoever drives the host surface, never shared:
/// created when a plan produces multiple parts, shrunk by exactly one on
/// each user action, discarded once empty. The total stays fixed so
/// progress can render as `remaining/total`.
#[derive(Debug, Clone)]
pub struct SplitSession {
    queue: VecDeque<String>,
    total: usize,
}

impl SplitSession {
    pub fn new(parts: Vec<String>) -> Self {
        let total = parts.len();
        Self {
            queue: parts.into(),
            total,
        }
    }

    /// Pop exactly one part, front first
    pub fn advance(&mut self) -> Option<String> {
        self.queue.pop_front()
    }

    pub fn remaining(&self) -> usize {
        self.queue.len()
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn is_exhausted(&self) -> bool {
        self.queue.is_empty()
    }

    /// Progress shown on the send control while parts remain
    pub fn progress_label(&self) -> String {
        format!("{}/{}", self.remaining(), self.total)
    }
}
