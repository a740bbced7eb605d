mod counter;
mod normalize;


pub use counter::{BpeTokenCounter, TokenCounter, TokenizerError};
pub use normalize::normalize;
