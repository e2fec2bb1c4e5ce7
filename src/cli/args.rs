//! Command line argument parsing for plagio CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

/// plagio - synonym-aware n-gram plagiarism detection
#[derive(Parser, Debug, Clone)]
#[command(name = "plagio")]
#[command(about = "Estimate how much of a base text reappears in a comparison text")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct PlagioArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl PlagioArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n + 1,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Compare a comparison text against a base text
    Detect(DetectArgs),

    /// Ask for the input files on the console
    Interactive(InteractiveArgs),

    /// Print the tuples extracted from one document
    Tuples(TuplesArgs),
}

/// Arguments for file-based detection
#[derive(Parser, Debug, Clone)]
pub struct DetectArgs {
    /// File with one synonym group per line
    #[arg(short, long, value_name = "SYNONYMS_FILE")]
    pub synonyms: PathBuf,

    /// File with the base (original) text
    #[arg(short, long, value_name = "BASE_FILE")]
    pub base: PathBuf,

    /// File with the text to check against the base
    #[arg(short, long, value_name = "COMPARISON_FILE")]
    pub comparison: PathBuf,

    /// Number of words per tuple (default: 3)
    #[arg(short = 'n', long, value_name = "N")]
    pub tuple_size: Option<usize>,

    /// Configuration file (JSON)
    #[arg(long, value_name = "CONFIG_FILE", env = "PLAGIO_CONFIG")]
    pub config: Option<PathBuf>,

    /// Score comparison tuples in parallel
    #[arg(long)]
    pub parallel: bool,

    /// Read the synonyms file as a JSON array of groups
    #[arg(long)]
    pub json_synonyms: bool,
}

/// Arguments for the interactive dialogue
#[derive(Parser, Debug, Clone)]
pub struct InteractiveArgs {
    /// Configuration file (JSON)
    #[arg(long, value_name = "CONFIG_FILE", env = "PLAGIO_CONFIG")]
    pub config: Option<PathBuf>,
}

/// Arguments for printing tuples
#[derive(Parser, Debug, Clone)]
pub struct TuplesArgs {
    /// Text file to extract tuples from
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Number of words per tuple (default: 3)
    #[arg(short = 'n', long, value_name = "N")]
    pub tuple_size: Option<usize>,

    /// Configuration file (JSON)
    #[arg(long, value_name = "CONFIG_FILE", env = "PLAGIO_CONFIG")]
    pub config: Option<PathBuf>,
}

/// Output formats
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable sentence
    Human,
    /// JSON document
    Json,
}
