//! Fixed-size word tuples (n-grams) and synonym-aware tuple matching.

pub mod extractor;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{PlagioError, Result};
use crate::synonym::SynonymIndex;

pub use extractor::{TupleExtractor, extract_tuples};

/// An ordered sequence of at most `capacity` words.
///
/// Tuples are filled one word at a time; pushing past the capacity fails with
/// [`PlagioError::CapacityExceeded`]. A tuple holding fewer than `capacity`
/// words is valid but incomplete. Deserialized tuples go through the same
/// check.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawTuple")]
pub struct Tuple {
    capacity: usize,
    words: Vec<String>,
}

/// Wire shape of a [`Tuple`] before its capacity is checked.
#[derive(Deserialize)]
struct RawTuple {
    capacity: usize,
    words: Vec<String>,
}

impl TryFrom<RawTuple> for Tuple {
    type Error = PlagioError;

    fn try_from(raw: RawTuple) -> Result<Self> {
        Tuple::from_words(raw.capacity, raw.words)
    }
}

impl Tuple {
    /// Create an empty tuple that can hold `capacity` words.
    pub fn new(capacity: usize) -> Self {
        Tuple {
            capacity,
            words: Vec::with_capacity(capacity),
        }
    }

    /// Create a tuple of `capacity` from a sequence of words.
    pub fn from_words<I, S>(capacity: usize, words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut tuple = Self::new(capacity);
        for word in words {
            tuple.push(word)?;
        }
        Ok(tuple)
    }

    /// Append a word to the end of the tuple.
    pub fn push<S: Into<String>>(&mut self, word: S) -> Result<()> {
        if self.words.len() == self.capacity {
            return Err(PlagioError::capacity_exceeded(self.capacity));
        }

        self.words.push(word.into());
        Ok(())
    }

    /// The words of the tuple, in order.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// The fixed size of the tuple.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of words currently in the tuple.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check if the tuple has no words.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Check if the tuple holds exactly `capacity` words.
    pub fn is_complete(&self) -> bool {
        self.words.len() == self.capacity
    }

    /// Check whether `other` matches this tuple under `synonyms`.
    ///
    /// Both tuples must have the same length, and at every position the words
    /// must be identical or the word of `other` must belong to the group keyed
    /// by the word of `self`. Only `self`'s words are used as lookup keys, so
    /// `a.matches(b, s)` and `b.matches(a, s)` can disagree.
    pub fn matches(&self, other: &Tuple, synonyms: &SynonymIndex) -> bool {
        if self.words.len() != other.words.len() {
            return false;
        }

        self.words
            .iter()
            .zip(&other.words)
            .all(|(word, other_word)| word == other_word || synonyms.is_synonym(word, other_word))
    }
}

impl fmt::Display for Tuple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.words.join(" "))
    }
}

/// Check whether `b` matches `a` under `synonyms`, with `a` as the lookup side.
pub fn tuples_equal(a: &Tuple, b: &Tuple, synonyms: &SynonymIndex) -> bool {
    a.matches(b, synonyms)
}
