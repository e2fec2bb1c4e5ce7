//! Output formatting for CLI commands.

use std::io::Write;

use serde::Serialize;

use crate::cli::args::{OutputFormat, PlagioArgs};
use crate::detector::Detection;
use crate::error::Result;
use crate::tuple::Tuple;

/// Tuples extracted from one document.
#[derive(Debug, Serialize)]
pub struct TupleListing<'a> {
    pub file: String,
    pub tuple_size: usize,
    pub tuples: &'a [Tuple],
}

/// Render a detection as the sentence shown to users.
pub fn format_detection(detection: &Detection) -> String {
    match detection.ratio {
        Some(ratio) => format!("The plagiarism percentage is {:.2}", ratio * 100.0),
        None => {
            "The plagiarism percentage is undefined (base text produced no tuples)".to_string()
        }
    }
}

/// Write a detection in the requested format.
pub fn output_detection<W: Write>(out: &mut W, detection: &Detection, args: &PlagioArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => {
            if args.verbosity() > 1 {
                writeln!(
                    out,
                    "Matched {} of {} comparison tuples against {} base tuples (tuple size {})",
                    detection.report.matched_tuples,
                    detection.report.comparison_tuples,
                    detection.report.base_tuples,
                    detection.tuple_size
                )?;
            }
            writeln!(out, "{}", format_detection(detection))?;
            Ok(())
        }
        OutputFormat::Json => output_json(out, detection, args),
    }
}

/// Write a tuple listing in the requested format.
pub fn output_tuples<W: Write>(out: &mut W, listing: &TupleListing<'_>, args: &PlagioArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => {
            if args.verbosity() > 1 {
                writeln!(
                    out,
                    "{} tuples of size {} in {}",
                    listing.tuples.len(),
                    listing.tuple_size,
                    listing.file
                )?;
            }
            for tuple in listing.tuples {
                writeln!(out, "{}", tuple.words().join(" "))?;
            }
            Ok(())
        }
        OutputFormat::Json => output_json(out, listing, args),
    }
}

fn output_json<W: Write, T: Serialize>(out: &mut W, value: &T, args: &PlagioArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    writeln!(out, "{json}")?;
    Ok(())
}
