//! # plagio
//!
//! Synonym-aware n-gram plagiarism detection.
//!
//! Two documents are split into fixed-size word tuples, and every tuple of the
//! comparison document is checked against the tuples of the base document,
//! treating declared synonyms as interchangeable. The result is the number of
//! matching comparison tuples divided by the number of base tuples.
//!
//! ## Example
//!
//! ```
//! use plagio::synonym::build_synonym_index;
//! use plagio::tuple::extract_tuples;
//! use plagio::scoring::score_plagiarism;
//!
//! let synonyms = build_synonym_index(&["run sprint jog"]);
//! let base = extract_tuples(&["go for a run"], 3).unwrap();
//! let comparison = extract_tuples(&["go for a jog"], 3).unwrap();
//!
//! let ratio = score_plagiarism(&comparison, &base, &synonyms).unwrap();
//! assert_eq!(ratio, 1.0);
//! ```

pub mod analysis;
pub mod cli;
pub mod config;
pub mod detector;
pub mod error;
pub mod scoring;
pub mod synonym;
pub mod tuple;

pub mod prelude {
    pub use crate::analysis::tokenizer::tokenize;
    pub use crate::config::{DEFAULT_TUPLE_SIZE, DetectorConfig};
    pub use crate::detector::{Detection, InputSource, PlagiarismDetector};
    pub use crate::error::{PlagioError, Result};
    pub use crate::scoring::{PlagiarismScorer, ScoreReport, score_plagiarism};
    pub use crate::synonym::{SynonymIndex, build_synonym_index};
    pub use crate::tuple::{Tuple, TupleExtractor, extract_tuples, tuples_equal};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
