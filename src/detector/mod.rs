//! Plagiarism detection orchestration.
//!
//! A [`PlagiarismDetector`] pulls its four inputs (synonym declarations, base
//! text, comparison text and tuple size) from an [`InputSource`], then builds
//! the synonym index, extracts tuples from both documents and scores them.

pub mod source;

use serde::{Deserialize, Serialize};

use crate::config::DetectorConfig;
use crate::error::{PlagioError, Result};
use crate::scoring::ScoreReport;
use crate::synonym::SynonymIndex;

pub use source::{FileSource, InMemorySource, InteractiveSource, read_lines};

/// Supplies the raw inputs of one detection run.
///
/// The detector reads them in declaration order: synonyms, base text,
/// comparison text, tuple size.
pub trait InputSource {
    /// Synonym declaration lines, one group per line.
    fn read_synonyms(&mut self) -> Result<Vec<String>>;

    /// Lines of the base (original) document.
    fn read_base_text(&mut self) -> Result<Vec<String>>;

    /// Lines of the document suspected of copying the base.
    fn read_comparison_text(&mut self) -> Result<Vec<String>>;

    /// Number of words per tuple.
    fn read_tuple_size(&mut self) -> Result<usize>;

    /// Get the name of this source (for logging).
    fn name(&self) -> &'static str;
}

/// The raw inputs of one detection run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetectionInput {
    /// Synonym declaration lines, one group per line
    pub synonyms: Vec<String>,
    /// Lines of the base document
    pub base_text: Vec<String>,
    /// Lines of the comparison document
    pub comparison_text: Vec<String>,
    /// Number of words per tuple
    pub tuple_size: usize,
}

impl DetectionInput {
    /// Read every input from `source`.
    pub fn read_from(source: &mut dyn InputSource) -> Result<Self> {
        log::info!("Reading input from {} source", source.name());

        let synonyms = source.read_synonyms()?;
        let base_text = source.read_base_text()?;
        let comparison_text = source.read_comparison_text()?;
        let tuple_size = source.read_tuple_size()?;

        Ok(DetectionInput {
            synonyms,
            base_text,
            comparison_text,
            tuple_size,
        })
    }
}

/// Outcome of one detection run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Detection {
    /// Number of words per tuple
    pub tuple_size: usize,
    /// Words keyed in the synonym index
    pub synonym_words: usize,
    /// Synonym groups in the index
    pub synonym_groups: usize,
    /// Match counts
    pub report: ScoreReport,
    /// Plagiarism ratio, absent when the base text produced no tuples
    pub ratio: Option<f64>,
}

impl Detection {
    /// The plagiarism ratio as a percentage, or
    /// [`PlagioError::UndefinedRatio`] when the base text produced no tuples.
    pub fn percentage(&self) -> Result<f64> {
        self.ratio
            .map(|ratio| ratio * 100.0)
            .ok_or(PlagioError::UndefinedRatio)
    }
}

/// Runs plagiarism detection with a fixed configuration.
///
/// # Examples
///
/// ```
/// use plagio::config::DetectorConfig;
/// use plagio::detector::{InMemorySource, PlagiarismDetector};
///
/// let detector = PlagiarismDetector::new(DetectorConfig::default()).unwrap();
/// let mut source = InMemorySource::new()
///     .with_synonyms(["run sprint jog"])
///     .with_base_text(["go for a jog"])
///     .with_comparison_text(["go for a run"]);
///
/// let detection = detector.execute(&mut source).unwrap();
/// assert_eq!(detection.ratio, Some(1.0));
/// ```
#[derive(Debug, Clone, Default)]
pub struct PlagiarismDetector {
    config: DetectorConfig,
}

impl PlagiarismDetector {
    /// Create a detector, rejecting an invalid configuration.
    pub fn new(config: DetectorConfig) -> Result<Self> {
        config.validate()?;
        Ok(PlagiarismDetector { config })
    }

    /// The configuration this detector runs with.
    pub fn config(&self) -> &DetectorConfig {
        &self.config
    }

    /// Read all inputs from `source` and run detection on them.
    pub fn execute(&self, source: &mut dyn InputSource) -> Result<Detection> {
        let input = DetectionInput::read_from(source)?;
        self.detect(&input)
    }

    /// Run detection on inputs that are already in memory.
    pub fn detect(&self, input: &DetectionInput) -> Result<Detection> {
        let synonyms = SynonymIndex::from_declarations(&input.synonyms);
        let extractor = self.config.extractor(input.tuple_size)?;

        let comparison_tuples = extractor.extract(&input.comparison_text)?;
        let base_tuples = extractor.extract(&input.base_text)?;

        log::info!(
            "Extracted {} base tuples and {} comparison tuples of size {}",
            base_tuples.len(),
            comparison_tuples.len(),
            input.tuple_size
        );

        let report = self
            .config
            .scorer()
            .evaluate(&comparison_tuples, &base_tuples, &synonyms);

        let ratio = match report.ratio() {
            Ok(ratio) => {
                log::info!("Plagiarism ratio: {ratio:.4}");
                Some(ratio)
            }
            Err(e) => {
                log::warn!("{e}");
                None
            }
        };

        Ok(Detection {
            tuple_size: input.tuple_size,
            synonym_words: synonyms.len(),
            synonym_groups: synonyms.group_count(),
            report,
            ratio,
        })
    }
}
