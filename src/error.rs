//! Error types for the plagio library.
//!
//! All fallible operations return [`Result`], whose error side is the
//! [`PlagioError`] enum.
//!
//! # Examples
//!
//! ```
//! use plagio::error::{PlagioError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(PlagioError::invalid_config("tuple size must be at least 1"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for plagio operations.
#[derive(Error, Debug)]
pub enum PlagioError {
    /// I/O errors (reading documents, prompting on the console)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Analysis-related errors (invalid token pattern, etc.)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// A tuple was asked to hold more words than its fixed size.
    ///
    /// Only a caller bug can produce this; the extractor never overfills a tuple.
    #[error("Tuple size is already N({capacity})")]
    CapacityExceeded {
        /// The fixed size of the tuple that overflowed
        capacity: usize,
    },

    /// The base document produced no tuples, so the ratio has no denominator.
    #[error("Undefined ratio: base text produced no tuples")]
    UndefinedRatio,

    /// Invalid configuration values
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Input that could not be understood (e.g. a non-numeric tuple size)
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type alias for operations that may fail with PlagioError.
pub type Result<T> = std::result::Result<T, PlagioError>;

impl PlagioError {
    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        PlagioError::Analysis(msg.into())
    }

    /// Create a new invalid config error.
    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        PlagioError::InvalidConfig(msg.into())
    }

    /// Create a new invalid input error.
    pub fn invalid_input<S: Into<String>>(msg: S) -> Self {
        PlagioError::InvalidInput(msg.into())
    }

    /// Create a capacity error for a tuple of the given size.
    pub fn capacity_exceeded(capacity: usize) -> Self {
        PlagioError::CapacityExceeded { capacity }
    }

    /// Whether this error is the undefined-ratio sentinel rather than a real failure.
    pub fn is_undefined_ratio(&self) -> bool {
        matches!(self, PlagioError::UndefinedRatio)
    }
}
