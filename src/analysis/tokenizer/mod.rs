//! Tokenizer implementations for text analysis.

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for tokenizers that convert text into tokens.
pub trait Tokenizer: Send + Sync {
    /// Tokenize the given text into a stream of tokens.
    fn tokenize(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this tokenizer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

pub mod regex;

pub use self::regex::{RegexTokenizer, WORD_PATTERN};

/// Split one line into its word tokens using the default word pattern.
///
/// Punctuation and whitespace are dropped; an empty line yields no words.
///
/// ```
/// use plagio::analysis::tokenizer::tokenize;
///
/// assert_eq!(tokenize("go, for a run!"), vec!["go", "for", "a", "run"]);
/// assert_eq!(tokenize("café au lait"), vec!["caf", "au", "lait"]);
/// assert!(tokenize("").is_empty());
/// ```
pub fn tokenize(line: &str) -> Vec<String> {
    RegexTokenizer::default().words(line)
}
