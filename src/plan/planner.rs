use serde::Serialize;
use thiserror::Error;

use crate::split::segment;
use crate::token::{normalize, BpeTokenCounter, TokenCounter, TokenizerError};

use super::{DEFAULT_TOKEN_BUDGET, FRAMING_INSTRUCTION};

#[derive(Error, Debug)]
pub enum PlanError {
    #[error("Nothing to split: input is empty")]
    EmptyInput,

    #[error("Token count unavailable: {0}")]
    Tokenizer(#[from] TokenizerError),
}

/// Read-only diagnostic behind the live token counter
#[derive(Debug, Clone, Serialize)]
pub struct TokenReport {
    /// Token count of the normalized text
    pub tokens: usize,
    /// Budget the count is measured against
    pub budget: usize,
    /// Whether the count exceeds the budget
    pub over_budget: bool,
}

/// Decides how many parts an input needs and carves it up
pub struct Planner<C> {
    counter: C,
    budget: usize,
}

impl Planner<BpeTokenCounter> {
    /// Planner over the bundled BPE tokenizer with the default budget
    pub fn with_default_tokenizer() -> Result<Self, TokenizerError> {
        Ok(Self::new(BpeTokenCounter::new()?, DEFAULT_TOKEN_BUDGET))
    }
}

impl<C: TokenCounter> Planner<C> {
    /// A zero budget would demand infinitely many parts; it is clamped to 1
    pub fn new(counter: C, budget: usize) -> Self {
        Self {
            counter,
            budget: budget.max(1),
        }
    }

    pub fn budget(&self) -> usize {
        self.budget
    }

    /// Token count of the normalized text plus the threshold flag the host
    /// uses for warning styling
    pub fn report(&self, text: &str) -> Result<TokenReport, TokenizerError> {
        let tokens = self.counter.count(&normalize(text))?;
        Ok(TokenReport {
            tokens,
            budget: self.budget,
            over_budget: tokens > self.budget,
        })
    }

    /// Split `source` into budget-sized sends.
    ///
    /// Within budget the text passes through as a single element. Over
    /// budget it is carved into `ceil(tokens / budget)` parts that
    /// concatenate back to `source` exactly, preceded by
    /// [`FRAMING_INSTRUCTION`](super::FRAMING_INSTRUCTION) as one extra
    /// leading send.
    ///
    /// Token counts are taken over the normalized text; the cuts themselves
    /// always happen against `source`. A failing token count propagates
    /// rather than being approximated.
    pub fn plan(&self, source: &str) -> Result<Vec<String>, PlanError> {
        if source.is_empty() {
            return Err(PlanError::EmptyInput);
        }

        let tokens = self.counter.count(&normalize(source))?;
        let part_count = tokens.div_ceil(self.budget).max(1);

        let mut parts = segment(source, part_count);
        if part_count > 1 {
            parts.insert(0, FRAMING_INSTRUCTION.to_string());
        }

        Ok(parts)
    }
}
