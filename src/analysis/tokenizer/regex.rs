//! Regex-based tokenizer implementation.

use std::sync::Arc;

use lazy_static::lazy_static;
use regex::Regex;

use super::Tokenizer;
use crate::analysis::token::{Token, TokenStream};
use crate::error::{PlagioError, Result};

/// Default word pattern: maximal runs of ASCII word characters (`[a-zA-Z0-9_]`)
/// or apostrophes. Non-ASCII letters end a word.
pub const WORD_PATTERN: &str = r"[[:word:]']+";

lazy_static! {
    static ref WORD_REGEX: Arc<Regex> =
        Arc::new(Regex::new(WORD_PATTERN).expect("Default word pattern should be valid"));
}

/// A regex-based tokenizer that extracts every non-overlapping match as a token.
///
/// With the default pattern, `"don't stop, 2 go"` becomes
/// `["don't", "stop", "2", "go"]`.
#[derive(Clone, Debug)]
pub struct RegexTokenizer {
    /// The regex pattern used to extract tokens
    pattern: Arc<Regex>,
}

impl RegexTokenizer {
    /// Create a new regex tokenizer with the default word pattern.
    pub fn new() -> Self {
        RegexTokenizer {
            pattern: Arc::clone(&WORD_REGEX),
        }
    }

    /// Create a new regex tokenizer with a custom pattern.
    pub fn with_pattern(pattern: &str) -> Result<Self> {
        if pattern == WORD_PATTERN {
            return Ok(Self::new());
        }

        let regex = Regex::new(pattern)
            .map_err(|e| PlagioError::analysis(format!("Invalid regex pattern: {e}")))?;

        Ok(RegexTokenizer {
            pattern: Arc::new(regex),
        })
    }

    /// Get the regex pattern used by this tokenizer.
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    /// Extract the matched words of `text`, left to right.
    pub fn words(&self, text: &str) -> Vec<String> {
        self.pattern
            .find_iter(text)
            .map(|mat| mat.as_str().to_string())
            .collect()
    }
}

impl Default for RegexTokenizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Tokenizer for RegexTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        let tokens: Vec<Token> = self
            .pattern
            .find_iter(text)
            .enumerate()
            .map(|(position, mat)| {
                Token::with_offsets(mat.as_str(), position, mat.start(), mat.end())
            })
            .collect();

        Ok(Box::new(tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "regex"
    }
}
