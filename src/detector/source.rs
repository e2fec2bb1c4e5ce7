//! Input sources for the detector.

use std::collections::VecDeque;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use crate::config::DEFAULT_TUPLE_SIZE;
use crate::detector::InputSource;
use crate::error::{PlagioError, Result};

/// Read a text file into its lines.
pub fn read_lines<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let path = path.as_ref();
    log::debug!("Reading {}", path.display());
    let content = std::fs::read_to_string(path)?;
    Ok(content.lines().map(str::to_string).collect())
}

/// Inputs held in memory. Used by tests and by library callers that already
/// have the documents loaded.
#[derive(Debug, Clone)]
pub struct InMemorySource {
    synonyms: Vec<String>,
    base_text: Vec<String>,
    comparison_text: Vec<String>,
    tuple_size: usize,
}

impl Default for InMemorySource {
    fn default() -> Self {
        Self {
            synonyms: Vec::new(),
            base_text: Vec::new(),
            comparison_text: Vec::new(),
            tuple_size: DEFAULT_TUPLE_SIZE,
        }
    }
}

fn owned_lines<I, S>(lines: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    lines.into_iter().map(Into::into).collect()
}

impl InMemorySource {
    /// Create an empty source with the default tuple size.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the synonym declaration lines.
    pub fn with_synonyms<I, S>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.synonyms = owned_lines(lines);
        self
    }

    /// Set the base text lines.
    pub fn with_base_text<I, S>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.base_text = owned_lines(lines);
        self
    }

    /// Set the comparison text lines.
    pub fn with_comparison_text<I, S>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.comparison_text = owned_lines(lines);
        self
    }

    /// Set the tuple size.
    pub fn with_tuple_size(mut self, tuple_size: usize) -> Self {
        self.tuple_size = tuple_size;
        self
    }
}

impl InputSource for InMemorySource {
    fn read_synonyms(&mut self) -> Result<Vec<String>> {
        Ok(self.synonyms.clone())
    }

    fn read_base_text(&mut self) -> Result<Vec<String>> {
        Ok(self.base_text.clone())
    }

    fn read_comparison_text(&mut self) -> Result<Vec<String>> {
        Ok(self.comparison_text.clone())
    }

    fn read_tuple_size(&mut self) -> Result<usize> {
        Ok(self.tuple_size)
    }

    fn name(&self) -> &'static str {
        "memory"
    }
}

/// Inputs read from files on disk.
#[derive(Debug, Clone)]
pub struct FileSource {
    synonyms_path: PathBuf,
    base_path: PathBuf,
    comparison_path: PathBuf,
    tuple_size: usize,
    json_synonyms: bool,
}

impl FileSource {
    /// Create a file source using the default tuple size.
    pub fn new<P: Into<PathBuf>>(synonyms_path: P, base_path: P, comparison_path: P) -> Self {
        FileSource {
            synonyms_path: synonyms_path.into(),
            base_path: base_path.into(),
            comparison_path: comparison_path.into(),
            tuple_size: DEFAULT_TUPLE_SIZE,
            json_synonyms: false,
        }
    }

    /// Set the tuple size.
    pub fn with_tuple_size(mut self, tuple_size: usize) -> Self {
        self.tuple_size = tuple_size;
        self
    }

    /// Read the synonyms file as a JSON array of groups instead of plain lines.
    ///
    /// Each group is turned back into a declaration line by joining its words
    /// with single spaces.
    pub fn with_json_synonyms(mut self, json_synonyms: bool) -> Self {
        self.json_synonyms = json_synonyms;
        self
    }
}

impl InputSource for FileSource {
    fn read_synonyms(&mut self) -> Result<Vec<String>> {
        if !self.json_synonyms {
            return read_lines(&self.synonyms_path);
        }

        let content = std::fs::read_to_string(&self.synonyms_path)?;
        let groups: Vec<Vec<String>> = serde_json::from_str(&content)?;
        Ok(groups.iter().map(|group| group.join(" ")).collect())
    }

    fn read_base_text(&mut self) -> Result<Vec<String>> {
        read_lines(&self.base_path)
    }

    fn read_comparison_text(&mut self) -> Result<Vec<String>> {
        read_lines(&self.comparison_path)
    }

    fn read_tuple_size(&mut self) -> Result<usize> {
        Ok(self.tuple_size)
    }

    fn name(&self) -> &'static str {
        "file"
    }
}

/// Console dialogue that asks for three file paths and an optional tuple size.
///
/// Answers are read as whitespace-separated words, so several answers may be
/// given on one line.
pub struct InteractiveSource<R, W> {
    reader: R,
    writer: W,
    pending: VecDeque<String>,
    default_tuple_size: usize,
}

impl<R: BufRead, W: Write> InteractiveSource<R, W> {
    /// Create a dialogue over `reader` and `writer`.
    pub fn new(reader: R, writer: W) -> Self {
        InteractiveSource {
            reader,
            writer,
            pending: VecDeque::new(),
            default_tuple_size: DEFAULT_TUPLE_SIZE,
        }
    }

    /// Set the tuple size used when the user declines to enter one.
    pub fn with_default_tuple_size(mut self, tuple_size: usize) -> Self {
        self.default_tuple_size = tuple_size;
        self
    }

    /// Give back the writer, e.g. to inspect the prompts in tests.
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn prompt(&mut self, message: &str) -> Result<()> {
        write!(self.writer, "{message}")?;
        self.writer.flush()?;
        Ok(())
    }

    fn next_word(&mut self) -> Result<String> {
        while self.pending.is_empty() {
            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Err(PlagioError::invalid_input("unexpected end of input"));
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_string));
        }

        self.pending
            .pop_front()
            .ok_or_else(|| PlagioError::invalid_input("unexpected end of input"))
    }

    fn read_file(&mut self, message: &str) -> Result<Vec<String>> {
        self.prompt(message)?;
        let path = self.next_word()?;
        read_lines(path)
    }
}

impl<R: BufRead, W: Write> InputSource for InteractiveSource<R, W> {
    fn read_synonyms(&mut self) -> Result<Vec<String>> {
        self.read_file("Enter path of the file with list of synonyms: ")
    }

    fn read_base_text(&mut self) -> Result<Vec<String>> {
        self.read_file("Enter path of the file with base text: ")
    }

    fn read_comparison_text(&mut self) -> Result<Vec<String>> {
        self.read_file("Enter path of the file with comparison text: ")
    }

    fn read_tuple_size(&mut self) -> Result<usize> {
        let question = format!(
            "Would you like to enter tuple size? (y/n) [Default = {}]: ",
            self.default_tuple_size
        );
        self.prompt(&question)?;

        if self.next_word()? != "y" {
            return Ok(self.default_tuple_size);
        }

        self.prompt("Tuple size = ")?;
        let answer = self.next_word()?;
        answer
            .parse()
            .map_err(|e| PlagioError::invalid_input(format!("tuple size '{answer}': {e}")))
    }

    fn name(&self) -> &'static str {
        "interactive"
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use tempfile::TempDir;

    use super::*;

    fn write_fixture(dir: &TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_read_lines() {
        let dir = TempDir::new().unwrap();
        let path = write_fixture(&dir, "text.txt", "first line\r\nsecond line\n");
        assert_eq!(read_lines(&path).unwrap(), vec!["first line", "second line"]);
    }

    #[test]
    fn test_read_lines_missing_file() {
        let dir = TempDir::new().unwrap();
        let result = read_lines(dir.path().join("missing.txt"));
        assert!(matches!(result, Err(PlagioError::Io(_))));
    }

    #[test]
    fn test_file_source() {
        let dir = TempDir::new().unwrap();
        let synonyms = write_fixture(&dir, "syns.txt", "run go jog\n");
        let base = write_fixture(&dir, "base.txt", "go for a run\n");
        let comparison = write_fixture(&dir, "cmp.txt", "go for a jog\n");

        let mut source = FileSource::new(synonyms, base, comparison).with_tuple_size(2);
        assert_eq!(source.read_synonyms().unwrap(), vec!["run go jog"]);
        assert_eq!(source.read_base_text().unwrap(), vec!["go for a run"]);
        assert_eq!(source.read_comparison_text().unwrap(), vec!["go for a jog"]);
        assert_eq!(source.read_tuple_size().unwrap(), 2);
    }

    #[test]
    fn test_file_source_json_synonyms() {
        let dir = TempDir::new().unwrap();
        let synonyms = write_fixture(&dir, "syns.json", r#"[["run", "go"], ["big", "large"]]"#);
        let base = write_fixture(&dir, "base.txt", "");
        let comparison = write_fixture(&dir, "cmp.txt", "");

        let mut source = FileSource::new(synonyms, base, comparison).with_json_synonyms(true);
        assert_eq!(source.read_synonyms().unwrap(), vec!["run go", "big large"]);
        assert_eq!(source.read_tuple_size().unwrap(), DEFAULT_TUPLE_SIZE);
    }

    #[test]
    fn test_interactive_source_default_tuple_size() {
        let dir = TempDir::new().unwrap();
        let synonyms = write_fixture(&dir, "syns.txt", "run go jog\n");
        let base = write_fixture(&dir, "base.txt", "go for a run\n");
        let comparison = write_fixture(&dir, "cmp.txt", "go for a jog\n");

        let answers = format!(
            "{}\n{}\n{}\nn\n",
            synonyms.display(),
            base.display(),
            comparison.display()
        );
        let mut source = InteractiveSource::new(Cursor::new(answers), Vec::new());

        assert_eq!(source.read_synonyms().unwrap(), vec!["run go jog"]);
        assert_eq!(source.read_base_text().unwrap(), vec!["go for a run"]);
        assert_eq!(source.read_comparison_text().unwrap(), vec!["go for a jog"]);
        assert_eq!(source.read_tuple_size().unwrap(), 3);

        let prompts = String::from_utf8(source.into_writer()).unwrap();
        assert!(prompts.starts_with("Enter path of the file with list of synonyms: "));
        assert!(prompts.ends_with("Would you like to enter tuple size? (y/n) [Default = 3]: "));
    }

    #[test]
    fn test_interactive_source_custom_tuple_size() {
        let mut source = InteractiveSource::new(Cursor::new("y 4\n"), Vec::new());
        assert_eq!(source.read_tuple_size().unwrap(), 4);

        let prompts = String::from_utf8(source.into_writer()).unwrap();
        assert!(prompts.ends_with("Tuple size = "));
    }

    #[test]
    fn test_interactive_source_bad_tuple_size() {
        let mut source = InteractiveSource::new(Cursor::new("y\nfour\n"), Vec::new());
        assert!(matches!(
            source.read_tuple_size(),
            Err(PlagioError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_interactive_source_eof() {
        let mut source = InteractiveSource::new(Cursor::new(""), Vec::new());
        assert!(matches!(
            source.read_synonyms(),
            Err(PlagioError::InvalidInput(_))
        ));
    }
}
