//! Sliding-window tuple extraction.

use std::sync::Arc;

use crate::analysis::token::Token;
use crate::analysis::tokenizer::{RegexTokenizer, Tokenizer};
use crate::error::{PlagioError, Result};
use crate::tuple::Tuple;

/// Extracts every `tuple_size`-word window from each line of a document.
///
/// Lines are tokenized independently and windows never cross a line
/// boundary, so a line with fewer than `tuple_size` words yields nothing.
///
/// # Examples
///
/// ```
/// use plagio::tuple::TupleExtractor;
///
/// let extractor = TupleExtractor::new(3).unwrap();
/// let tuples = extractor.extract(["go for a run"]).unwrap();
///
/// assert_eq!(tuples.len(), 2);
/// assert_eq!(tuples[0].words(), &["go", "for", "a"]);
/// assert_eq!(tuples[1].words(), &["for", "a", "run"]);
/// ```
#[derive(Clone)]
pub struct TupleExtractor {
    tuple_size: usize,
    tokenizer: Arc<dyn Tokenizer>,
}

impl std::fmt::Debug for TupleExtractor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TupleExtractor")
            .field("tuple_size", &self.tuple_size)
            .field("tokenizer", &self.tokenizer.name())
            .finish()
    }
}

impl TupleExtractor {
    /// Create an extractor using the default word tokenizer.
    pub fn new(tuple_size: usize) -> Result<Self> {
        Self::with_tokenizer(tuple_size, Arc::new(RegexTokenizer::new()))
    }

    /// Create an extractor with a custom tokenizer.
    pub fn with_tokenizer(tuple_size: usize, tokenizer: Arc<dyn Tokenizer>) -> Result<Self> {
        if tuple_size == 0 {
            return Err(PlagioError::invalid_config(
                "tuple size must be at least 1".to_string(),
            ));
        }

        Ok(TupleExtractor {
            tuple_size,
            tokenizer,
        })
    }

    /// The number of words in each extracted tuple.
    pub fn tuple_size(&self) -> usize {
        self.tuple_size
    }

    /// Extract the tuples of a single line, in window-start order.
    pub fn extract_line(&self, line: &str) -> Result<Vec<Tuple>> {
        let words: Vec<String> = self.tokenizer.tokenize(line)?.map(Token::into_text).collect();

        if words.len() < self.tuple_size {
            return Ok(Vec::new());
        }

        words
            .windows(self.tuple_size)
            .map(|window| Tuple::from_words(self.tuple_size, window.iter().cloned()))
            .collect()
    }

    /// Extract the tuples of every line, in line order.
    pub fn extract<I, S>(&self, lines: I) -> Result<Vec<Tuple>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut tuples = Vec::new();
        for line in lines {
            tuples.extend(self.extract_line(line.as_ref())?);
        }
        Ok(tuples)
    }
}

/// Extract all `tuple_size`-word tuples from `lines` with the default tokenizer.
pub fn extract_tuples<S: AsRef<str>>(lines: &[S], tuple_size: usize) -> Result<Vec<Tuple>> {
    TupleExtractor::new(tuple_size)?.extract(lines)
}
