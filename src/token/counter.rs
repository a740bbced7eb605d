use thiserror::Error;
use tiktoken_rs::CoreBPE;

#[derive(Error, Debug)]
pub enum TokenizerError {
    #[error("Tokenizer unavailable: {0}")]
    Unavailable(String),
}

/// Pluggable token counting seam
///
/// Budgets are measured in subword tokens, so every decision the planner
/// makes goes through this trait. Counts must be deterministic for
/// identical input.
pub trait TokenCounter {
    /// Number of subword tokens in `text`
    fn count(&self, text: &str) -> Result<usize, TokenizerError>;
}

/// Token counter backed by the cl100k BPE ranks
pub struct BpeTokenCounter {
    bpe: CoreBPE,
}

impl BpeTokenCounter {
    /// Load the BPE ranks. Fails closed: when the ranks cannot be
    /// constructed the error propagates, and no caller may substitute a
    /// guessed count.
    pub fn new() -> Result<Self, TokenizerError> {
        let bpe =
            tiktoken_rs::cl100k_base().map_err(|e| TokenizerError::Unavailable(e.to_string()))?;
        Ok(Self { bpe })
    }
}

impl TokenCounter for BpeTokenCounter {
    fn count(&self, text: &str) -> Result<usize, TokenizerError> {
        Ok(self.bpe.encode_with_special_tokens(text).len())
    }
}
