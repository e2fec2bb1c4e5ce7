//! Plagiarism scoring.
//!
//! The ratio is the number of comparison tuples that match some base tuple,
//! divided by the number of base tuples. Base tuples are not consumed by a
//! match: several comparison tuples may match the same base tuple and each
//! one counts, so the ratio can exceed 1.0.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::{PlagioError, Result};
use crate::synonym::SynonymIndex;
use crate::tuple::Tuple;

/// Match counts from one comparison of two tuple lists.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreReport {
    /// Comparison tuples that matched at least one base tuple
    pub matched_tuples: usize,
    /// Total comparison tuples
    pub comparison_tuples: usize,
    /// Total base tuples (the denominator)
    pub base_tuples: usize,
}

impl ScoreReport {
    /// `matched_tuples / base_tuples`, or [`PlagioError::UndefinedRatio`] when
    /// there are no base tuples.
    pub fn ratio(&self) -> Result<f64> {
        if self.base_tuples == 0 {
            return Err(PlagioError::UndefinedRatio);
        }
        Ok(self.matched_tuples as f64 / self.base_tuples as f64)
    }

    /// The ratio scaled to a percentage.
    pub fn percentage(&self) -> Result<f64> {
        Ok(self.ratio()? * 100.0)
    }
}

/// Compares comparison tuples against base tuples under a synonym index.
#[derive(Clone, Copy, Debug, Default)]
pub struct PlagiarismScorer {
    parallel: bool,
}

impl PlagiarismScorer {
    /// Create a sequential scorer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Spread the comparison tuples across the rayon thread pool.
    ///
    /// The result is identical to the sequential scorer.
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Whether this scorer runs in parallel.
    pub fn is_parallel(&self) -> bool {
        self.parallel
    }

    /// Count the comparison tuples that match at least one base tuple.
    ///
    /// Each base tuple is the lookup side of the match, and scanning stops at
    /// the first base tuple that matches.
    pub fn count_matches(
        &self,
        comparison_tuples: &[Tuple],
        base_tuples: &[Tuple],
        synonyms: &SynonymIndex,
    ) -> usize {
        let matches_any =
            |comparison: &&Tuple| base_tuples.iter().any(|base| base.matches(comparison, synonyms));

        if self.parallel {
            comparison_tuples.par_iter().filter(matches_any).count()
        } else {
            comparison_tuples.iter().filter(matches_any).count()
        }
    }

    /// Compare the two tuple lists and collect the counts.
    pub fn evaluate(
        &self,
        comparison_tuples: &[Tuple],
        base_tuples: &[Tuple],
        synonyms: &SynonymIndex,
    ) -> ScoreReport {
        let matched_tuples = self.count_matches(comparison_tuples, base_tuples, synonyms);

        log::debug!(
            "{} of {} comparison tuples matched against {} base tuples",
            matched_tuples,
            comparison_tuples.len(),
            base_tuples.len()
        );

        ScoreReport {
            matched_tuples,
            comparison_tuples: comparison_tuples.len(),
            base_tuples: base_tuples.len(),
        }
    }

    /// Compute the plagiarism ratio of `comparison_tuples` against `base_tuples`.
    pub fn score(
        &self,
        comparison_tuples: &[Tuple],
        base_tuples: &[Tuple],
        synonyms: &SynonymIndex,
    ) -> Result<f64> {
        if base_tuples.is_empty() {
            return Err(PlagioError::UndefinedRatio);
        }
        self.evaluate(comparison_tuples, base_tuples, synonyms).ratio()
    }
}

/// Compute the plagiarism ratio with a sequential scorer.
pub fn score_plagiarism(
    comparison_tuples: &[Tuple],
    base_tuples: &[Tuple],
    synonyms: &SynonymIndex,
) -> Result<f64> {
    PlagiarismScorer::new().score(comparison_tuples, base_tuples, synonyms)
}
