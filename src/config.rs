//! Configuration for plagiarism detection.

use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::analysis::tokenizer::{RegexTokenizer, WORD_PATTERN};
use crate::error::{PlagioError, Result};
use crate::scoring::PlagiarismScorer;
use crate::tuple::TupleExtractor;

/// Tuple size used when the caller does not pick one.
pub const DEFAULT_TUPLE_SIZE: usize = 3;

/// Configuration for a [`PlagiarismDetector`](crate::detector::PlagiarismDetector).
///
/// Loaded from JSON; every field is optional and falls back to its default.
///
/// ```json
/// { "tuple_size": 4, "parallel": true }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectorConfig {
    /// Number of words per tuple.
    pub tuple_size: usize,

    /// Regex matching a single word.
    pub token_pattern: String,

    /// Whether to score comparison tuples on the rayon thread pool.
    pub parallel: bool,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            tuple_size: DEFAULT_TUPLE_SIZE,
            token_pattern: WORD_PATTERN.to_string(),
            parallel: false,
        }
    }
}

impl DetectorConfig {
    /// Create a configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the tuple size.
    pub fn with_tuple_size(mut self, tuple_size: usize) -> Self {
        self.tuple_size = tuple_size;
        self
    }

    /// Set the token pattern.
    pub fn with_token_pattern<S: Into<String>>(mut self, pattern: S) -> Self {
        self.token_pattern = pattern.into();
        self
    }

    /// Enable or disable parallel scoring.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Load a configuration from a JSON file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let config: DetectorConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the configuration can be used.
    pub fn validate(&self) -> Result<()> {
        if self.tuple_size == 0 {
            return Err(PlagioError::invalid_config("tuple size must be at least 1"));
        }
        RegexTokenizer::with_pattern(&self.token_pattern)?;
        Ok(())
    }

    /// Build a tuple extractor for `tuple_size` using this configuration's tokenizer.
    pub fn extractor(&self, tuple_size: usize) -> Result<TupleExtractor> {
        let tokenizer = RegexTokenizer::with_pattern(&self.token_pattern)?;
        TupleExtractor::with_tokenizer(tuple_size, Arc::new(tokenizer))
    }

    /// Build the scorer described by this configuration.
    pub fn scorer(&self) -> PlagiarismScorer {
        PlagiarismScorer::new().parallel(self.parallel)
    }
}
