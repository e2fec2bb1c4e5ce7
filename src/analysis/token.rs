//! Token types produced by tokenizers.
//!
//! A [`Token`] is one maximal run of word characters from a line of text,
//! together with where it was found. Tokens are compared case-sensitively
//! and never normalized.
//!
//! # Examples
//!
//! ```
//! use plagio::analysis::token::Token;
//!
//! let token = Token::with_offsets("run", 3, 10, 13);
//! assert_eq!(token.text, "run");
//! assert_eq!(token.position, 3);
//! assert_eq!(token.len(), 3);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single word extracted from a line of text.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Token {
    /// The text content of the token
    pub text: String,

    /// The position of the token within its line (0-based)
    pub position: usize,

    /// The byte offset where this token starts in the original line
    pub start_offset: usize,

    /// The byte offset where this token ends in the original line
    pub end_offset: usize,
}

impl Token {
    /// Create a new token with the given text and position.
    pub fn new<S: Into<String>>(text: S, position: usize) -> Self {
        Token {
            text: text.into(),
            position,
            start_offset: 0,
            end_offset: 0,
        }
    }

    /// Create a new token with text, position, and byte offsets.
    pub fn with_offsets<S: Into<String>>(
        text: S,
        position: usize,
        start_offset: usize,
        end_offset: usize,
    ) -> Self {
        Token {
            text: text.into(),
            position,
            start_offset,
            end_offset,
        }
    }

    /// Get the length of the token text in bytes.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Check if the token is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Consume the token, keeping only its text.
    pub fn into_text(self) -> String {
        self.text
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// A stream of tokens, as produced by a [`Tokenizer`](crate::analysis::tokenizer::Tokenizer).
pub type TokenStream = Box<dyn Iterator<Item = Token> + Send>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_creation() {
        let token = Token::new("hello", 0);
        assert_eq!(token.text, "hello");
        assert_eq!(token.position, 0);
        assert_eq!(token.start_offset, 0);
        assert_eq!(token.end_offset, 0);
        assert!(!token.is_empty());
    }

    #[test]
    fn test_token_display() {
        let token = Token::with_offsets("don't", 1, 4, 9);
        assert_eq!(token.to_string(), "don't");
        assert_eq!(token.into_text(), "don't");
    }
}
