//! Command implementations for plagio CLI.

use std::io::{self, BufRead, Write};
use std::path::Path;

use crate::cli::args::*;
use crate::cli::output::*;
use crate::config::DetectorConfig;
use crate::detector::{Detection, FileSource, InteractiveSource, PlagiarismDetector, read_lines};
use crate::error::Result;
use crate::tuple::Tuple;

/// Execute a CLI command.
pub fn execute_command(args: PlagioArgs) -> Result<()> {
    match &args.command {
        Command::Detect(detect_args) => detect(detect_args, &args),
        Command::Interactive(interactive_args) => interactive(interactive_args, &args),
        Command::Tuples(tuples_args) => print_tuples(tuples_args, &args),
    }
}

/// Load the configuration file if one was given, otherwise use defaults.
fn load_config(path: Option<&Path>) -> Result<DetectorConfig> {
    match path {
        Some(path) => {
            log::info!("Loading configuration from {}", path.display());
            DetectorConfig::load_from_file(path)
        }
        None => Ok(DetectorConfig::default()),
    }
}

/// Configuration for `detect`: the config file, then command line flags on top.
fn detect_config(args: &DetectArgs) -> Result<DetectorConfig> {
    let mut config = load_config(args.config.as_deref())?;
    if let Some(tuple_size) = args.tuple_size {
        config = config.with_tuple_size(tuple_size);
    }
    if args.parallel {
        config = config.with_parallel(true);
    }
    Ok(config)
}

/// Run detection on the files named by `args`.
pub fn run_detect(args: &DetectArgs) -> Result<Detection> {
    let config = detect_config(args)?;
    let tuple_size = config.tuple_size;
    let detector = PlagiarismDetector::new(config)?;

    let mut source = FileSource::new(&args.synonyms, &args.base, &args.comparison)
        .with_tuple_size(tuple_size)
        .with_json_synonyms(args.json_synonyms);

    detector.execute(&mut source)
}

/// Compare the files named on the command line.
fn detect(args: &DetectArgs, cli_args: &PlagioArgs) -> Result<()> {
    let detection = run_detect(args)?;

    let stdout = io::stdout();
    output_detection(&mut stdout.lock(), &detection, cli_args)
}

/// Run the console dialogue over `reader` and `writer`, returning the
/// detection and the writer.
pub fn run_interactive<R: BufRead, W: Write>(
    args: &InteractiveArgs,
    reader: R,
    writer: W,
) -> Result<(Detection, W)> {
    let config = load_config(args.config.as_deref())?;
    let default_tuple_size = config.tuple_size;
    let detector = PlagiarismDetector::new(config)?;

    let mut source =
        InteractiveSource::new(reader, writer).with_default_tuple_size(default_tuple_size);
    let detection = detector.execute(&mut source)?;

    Ok((detection, source.into_writer()))
}

/// Run the console dialogue on stdin/stdout.
fn interactive(args: &InteractiveArgs, cli_args: &PlagioArgs) -> Result<()> {
    let stdin = io::stdin();
    let (detection, mut out) = run_interactive(args, stdin.lock(), io::stdout())?;

    writeln!(out)?;
    output_detection(&mut out, &detection, cli_args)
}

/// Extract the tuples of the document named by `args`, returning the tuple
/// size used and the tuples.
pub fn run_tuples(args: &TuplesArgs) -> Result<(usize, Vec<Tuple>)> {
    let config = load_config(args.config.as_deref())?;
    let tuple_size = args.tuple_size.unwrap_or(config.tuple_size);

    let lines = read_lines(&args.file)?;
    let tuples = config.extractor(tuple_size)?.extract(&lines)?;
    Ok((tuple_size, tuples))
}

/// Print the tuples of a single document.
fn print_tuples(args: &TuplesArgs, cli_args: &PlagioArgs) -> Result<()> {
    let (tuple_size, tuples) = run_tuples(args)?;

    let listing = TupleListing {
        file: args.file.display().to_string(),
        tuple_size,
        tuples: &tuples,
    };

    let stdout = io::stdout();
    output_tuples(&mut stdout.lock(), &listing, cli_args)
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;
    use std::path::PathBuf;

    use tempfile::TempDir;

    use super::*;
    use crate::error::PlagioError;

    struct Fixture {
        dir: TempDir,
        synonyms: PathBuf,
        base: PathBuf,
        comparison: PathBuf,
    }

    impl Fixture {
        fn new() -> Self {
            let dir = TempDir::new().unwrap();
            let synonyms = dir.path().join("synonyms.txt");
            let base = dir.path().join("base.txt");
            let comparison = dir.path().join("comparison.txt");

            std::fs::write(&synonyms, "run sprint jog\n").unwrap();
            std::fs::write(&base, "we go for a run every day\n").unwrap();
            std::fs::write(&comparison, "we go for a jog every night\n").unwrap();

            Fixture {
                dir,
                synonyms,
                base,
                comparison,
            }
        }

        fn config(&self, json: &str) -> PathBuf {
            let path = self.dir.path().join("config.json");
            std::fs::write(&path, json).unwrap();
            path
        }

        fn detect_args(&self) -> DetectArgs {
            DetectArgs {
                synonyms: self.synonyms.clone(),
                base: self.base.clone(),
                comparison: self.comparison.clone(),
                tuple_size: None,
                config: None,
                parallel: false,
                json_synonyms: false,
            }
        }
    }

    #[test]
    fn test_detect_defaults() {
        let fixture = Fixture::new();
        let detection = run_detect(&fixture.detect_args()).unwrap();

        // base: [we go for] [go for a] [for a run] [a run every] [run every day]
        // matched: [we go for] [go for a] [for a jog] [a jog every]
        assert_eq!(detection.tuple_size, 3);
        assert_eq!(detection.report.base_tuples, 5);
        assert_eq!(detection.report.matched_tuples, 4);
        assert_eq!(detection.ratio, Some(0.8));
    }

    #[test]
    fn test_detect_uses_config_file() {
        let fixture = Fixture::new();
        let mut args = fixture.detect_args();
        args.config = Some(fixture.config(r#"{ "tuple_size": 4 }"#));

        let detection = run_detect(&args).unwrap();
        assert_eq!(detection.tuple_size, 4);
        assert_eq!(detection.report.base_tuples, 4);
    }

    #[test]
    fn test_tuple_size_flag_overrides_config_file() {
        let fixture = Fixture::new();
        let mut args = fixture.detect_args();
        args.config = Some(fixture.config(r#"{ "tuple_size": 4 }"#));
        args.tuple_size = Some(2);

        let detection = run_detect(&args).unwrap();
        assert_eq!(detection.tuple_size, 2);
        assert_eq!(detection.report.base_tuples, 6);
    }

    #[test]
    fn test_parallel_flag_overrides_config_file() {
        let fixture = Fixture::new();
        let mut args = fixture.detect_args();
        args.config = Some(fixture.config(r#"{ "parallel": false }"#));
        args.parallel = true;

        assert!(detect_config(&args).unwrap().parallel);
        let parallel = run_detect(&args).unwrap();

        args.parallel = false;
        assert!(!detect_config(&args).unwrap().parallel);
        let sequential = run_detect(&args).unwrap();

        assert_eq!(parallel, sequential);
    }

    #[test]
    fn test_detect_zero_tuple_size_flag() {
        let fixture = Fixture::new();
        let mut args = fixture.detect_args();
        args.tuple_size = Some(0);

        assert!(matches!(run_detect(&args), Err(PlagioError::InvalidConfig(_))));
    }

    #[test]
    fn test_detect_missing_file() {
        let fixture = Fixture::new();
        let mut args = fixture.detect_args();
        args.base = fixture.dir.path().join("missing.txt");

        assert!(matches!(run_detect(&args), Err(PlagioError::Io(_))));
    }

    #[test]
    fn test_tuples_flag_overrides_config_file() {
        let fixture = Fixture::new();
        let args = TuplesArgs {
            file: fixture.base.clone(),
            tuple_size: Some(5),
            config: Some(fixture.config(r#"{ "tuple_size": 2 }"#)),
        };

        let (tuple_size, tuples) = run_tuples(&args).unwrap();
        assert_eq!(tuple_size, 5);
        assert_eq!(tuples.len(), 3);
        assert_eq!(tuples[0].words(), &["we", "go", "for", "a", "run"]);
    }

    #[test]
    fn test_tuples_uses_config_file() {
        let fixture = Fixture::new();
        let args = TuplesArgs {
            file: fixture.base.clone(),
            tuple_size: None,
            config: Some(fixture.config(r#"{ "tuple_size": 6 }"#)),
        };

        let (tuple_size, tuples) = run_tuples(&args).unwrap();
        assert_eq!(tuple_size, 6);
        assert_eq!(tuples.len(), 2);
    }

    #[test]
    fn test_interactive_default_tuple_size_from_config() {
        let fixture = Fixture::new();
        let args = InteractiveArgs {
            config: Some(fixture.config(r#"{ "tuple_size": 2 }"#)),
        };
        let answers = format!(
            "{}\n{}\n{}\nn\n",
            fixture.synonyms.display(),
            fixture.base.display(),
            fixture.comparison.display()
        );

        let (detection, prompts) =
            run_interactive(&args, Cursor::new(answers), Vec::new()).unwrap();
        assert_eq!(detection.tuple_size, 2);

        let prompts = String::from_utf8(prompts).unwrap();
        assert!(prompts.ends_with("Would you like to enter tuple size? (y/n) [Default = 2]: "));
    }

    #[test]
    fn test_interactive_entered_tuple_size() {
        let fixture = Fixture::new();
        let args = InteractiveArgs { config: None };
        let answers = format!(
            "{} {} {} y 3\n",
            fixture.synonyms.display(),
            fixture.base.display(),
            fixture.comparison.display()
        );

        let (detection, _) = run_interactive(&args, Cursor::new(answers), Vec::new()).unwrap();
        assert_eq!(detection.tuple_size, 3);
        assert_eq!(detection.ratio, Some(0.8));
    }
}
