//! Text analysis module for plagio.
//!
//! Splits raw lines of text into word tokens. Tokens keep their original
//! case; nothing is stemmed or normalized.

pub mod token;
pub mod tokenizer;

// Re-export commonly used types
pub use token::*;
pub use tokenizer::*;
