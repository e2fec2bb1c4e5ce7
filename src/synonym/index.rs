//! Word-to-synonym-group index.
//!
//! Words map to a [`GroupId`], and groups live in a separate table owned by
//! the index. Every word declared on the same line therefore resolves to the
//! very same group, and because the index exposes no mutating methods once it
//! is built, no group can change underneath the words that share it.

use std::path::Path;

use ahash::{AHashMap, AHashSet};
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Identifier of a group in a [`SynonymIndex`]'s group table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GroupId(usize);

impl GroupId {
    /// The index of this group in declaration order.
    pub fn index(&self) -> usize {
        self.0
    }
}

/// A set of words that are interchangeable when matching tuples.
#[derive(Clone, Debug, Default)]
pub struct SynonymGroup {
    words: AHashSet<String>,
}

impl SynonymGroup {
    fn from_words<'a, I>(words: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        SynonymGroup {
            words: words.into_iter().map(str::to_string).collect(),
        }
    }

    /// Check whether `word` belongs to this group.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Number of distinct words in the group.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check if the group has no words.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterate over the words of the group in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    /// The words of the group, sorted. Handy for display and tests.
    pub fn sorted_words(&self) -> Vec<&str> {
        let mut words: Vec<&str> = self.iter().collect();
        words.sort_unstable();
        words
    }
}

/// Immutable mapping from each declared word to its synonym group.
///
/// When a word is declared on more than one line, the first line wins; later
/// lines neither replace nor extend its group.
///
/// # Examples
///
/// ```
/// use plagio::synonym::SynonymIndex;
///
/// let index = SynonymIndex::from_declarations(["run go jog", "go walk"]);
///
/// assert_eq!(index.group_of("go").unwrap().sorted_words(), vec!["go", "jog", "run"]);
/// assert_eq!(index.group_of("walk").unwrap().sorted_words(), vec!["go", "walk"]);
/// assert!(index.is_synonym("run", "jog"));
/// ```
#[derive(Clone, Debug, Default)]
pub struct SynonymIndex {
    /// Word -> position in `groups`
    word_to_group: AHashMap<String, GroupId>,
    /// Groups in declaration order
    groups: Vec<SynonymGroup>,
}

impl SynonymIndex {
    /// Create an empty index. Only identical words match under it.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an index from declaration lines, in order.
    ///
    /// Each line is split on single spaces. Empty pieces (from an empty line
    /// or doubled spaces) are skipped, so an empty line declares nothing.
    pub fn from_declarations<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut index = Self::new();
        for line in lines {
            index.declare(line.as_ref().split(' ').filter(|word| !word.is_empty()));
        }

        log::debug!(
            "Built synonym index: {} words in {} groups",
            index.len(),
            index.group_count()
        );
        index
    }

    /// Build an index from pre-split synonym groups, in order.
    pub fn from_synonym_groups(groups: Vec<Vec<String>>) -> Self {
        let mut index = Self::new();
        for group in &groups {
            index.declare(group.iter().map(String::as_str));
        }
        index
    }

    /// Load an index from a text file with one declaration per line.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Ok(Self::from_declarations(content.lines()))
    }

    /// Load an index from a JSON file holding an array of synonym groups.
    ///
    /// Example format:
    /// ```json
    /// [
    ///   ["run", "go", "jog"],
    ///   ["big", "large"]
    /// ]
    /// ```
    pub fn load_from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let groups: Vec<Vec<String>> = serde_json::from_str(&content)?;
        Ok(Self::from_synonym_groups(groups))
    }

    fn declare<'a, I>(&mut self, words: I)
    where
        I: IntoIterator<Item = &'a str>,
    {
        let group = SynonymGroup::from_words(words);
        let id = GroupId(self.groups.len());

        let mut claimed = false;
        for word in group.iter() {
            if !self.word_to_group.contains_key(word) {
                self.word_to_group.insert(word.to_string(), id);
                claimed = true;
            }
        }

        // A line whose words were all claimed earlier leaves no trace.
        if claimed {
            self.groups.push(group);
        }
    }

    /// Get the group id a word is keyed to, if the word was declared.
    pub fn group_id(&self, word: &str) -> Option<GroupId> {
        self.word_to_group.get(word).copied()
    }

    /// Get a group by id.
    pub fn group(&self, id: GroupId) -> Option<&SynonymGroup> {
        self.groups.get(id.0)
    }

    /// Get the group a word is keyed to, if the word was declared.
    pub fn group_of(&self, word: &str) -> Option<&SynonymGroup> {
        self.group_id(word).and_then(|id| self.group(id))
    }

    /// Check whether `word` is a key of the index.
    pub fn contains_key(&self, word: &str) -> bool {
        self.word_to_group.contains_key(word)
    }

    /// Check whether `other` is in the group keyed by `word`.
    ///
    /// The lookup goes through `word` only: if `word` is not a key this is
    /// false, even when both words sit together in some group.
    pub fn is_synonym(&self, word: &str, other: &str) -> bool {
        self.group_of(word)
            .is_some_and(|group| group.contains(other))
    }

    /// Number of words keyed in the index.
    pub fn len(&self) -> usize {
        self.word_to_group.len()
    }

    /// Check if the index has no keys.
    pub fn is_empty(&self) -> bool {
        self.word_to_group.is_empty()
    }

    /// Number of groups stored in the index.
    pub fn group_count(&self) -> usize {
        self.groups.len()
    }
}

/// Build the word-to-group index from synonym declaration lines.
pub fn build_synonym_index<S: AsRef<str>>(declaration_lines: &[S]) -> SynonymIndex {
    SynonymIndex::from_declarations(declaration_lines)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    #[test]
    fn test_every_word_maps_to_the_whole_group() {
        let index = build_synonym_index(&["run go jog"]);

        for word in ["run", "go", "jog"] {
            assert_eq!(
                index.group_of(word).unwrap().sorted_words(),
                vec!["go", "jog", "run"]
            );
        }
        assert_eq!(index.len(), 3);
        assert_eq!(index.group_count(), 1);
    }

    #[test]
    fn test_words_share_one_group() {
        let index = build_synonym_index(&["run go jog"]);
        let id = index.group_id("run").unwrap();

        assert_eq!(index.group_id("go"), Some(id));
        assert_eq!(index.group_id("jog"), Some(id));
        assert_eq!(id.index(), 0);
    }

    #[test]
    fn test_first_writer_wins() {
        let index = build_synonym_index(&["run go jog", "go walk"]);

        assert_eq!(
            index.group_of("go").unwrap().sorted_words(),
            vec!["go", "jog", "run"]
        );
        assert_eq!(
            index.group_of("walk").unwrap().sorted_words(),
            vec!["go", "walk"]
        );
        assert_ne!(index.group_id("go"), index.group_id("walk"));
    }

    #[test]
    fn test_later_line_does_not_override_existing_key() {
        let index = build_synonym_index(&["walk stroll", "go walk"]);

        assert_eq!(
            index.group_of("walk").unwrap().sorted_words(),
            vec!["stroll", "walk"]
        );
        assert_eq!(
            index.group_of("go").unwrap().sorted_words(),
            vec!["go", "walk"]
        );
    }

    #[test]
    fn test_fully_shadowed_line_adds_no_group() {
        let index = build_synonym_index(&["run go", "go run"]);
        assert_eq!(index.group_count(), 1);
        assert_eq!(index.len(), 2);
    }

    #[test]
    fn test_duplicate_words_collapse() {
        let index = build_synonym_index(&["big big large"]);
        assert_eq!(index.group_of("big").unwrap().len(), 2);
    }

    #[test]
    fn test_single_word_and_empty_lines() {
        let index = build_synonym_index(&["alone", "", "a  b"]);

        assert_eq!(index.group_of("alone").unwrap().sorted_words(), vec!["alone"]);
        assert!(!index.contains_key(""));
        assert_eq!(index.group_of("a").unwrap().sorted_words(), vec!["a", "b"]);
        assert_eq!(index.group_count(), 2);
    }

    #[test]
    fn test_is_synonym_is_keyed_on_first_word() {
        let index = build_synonym_index(&["go run"]);
        assert!(index.is_synonym("go", "run"));
        assert!(index.is_synonym("run", "go"));
        assert!(!index.is_synonym("walk", "go"));
        assert!(!index.is_synonym("go", "walk"));
    }

    #[test]
    fn test_empty_index() {
        let index = SynonymIndex::new();
        assert!(index.is_empty());
        assert!(index.group_of("anything").is_none());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "run go jog").unwrap();
        writeln!(file, "big large").unwrap();

        let index = SynonymIndex::load_from_file(file.path()).unwrap();
        assert!(index.is_synonym("jog", "run"));
        assert!(index.is_synonym("large", "big"));
        assert_eq!(index.group_count(), 2);
    }

    #[test]
    fn test_load_from_json_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"[["run", "go", "jog"], ["go", "walk"]]"#).unwrap();

        let index = SynonymIndex::load_from_json_file(file.path()).unwrap();
        assert_eq!(
            index.group_of("go").unwrap().sorted_words(),
            vec!["go", "jog", "run"]
        );
        assert!(index.is_synonym("walk", "go"));
    }

    #[test]
    fn test_load_from_json_file_rejects_bad_json() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "run go jog").unwrap();

        let result = SynonymIndex::load_from_json_file(file.path());
        assert!(matches!(result, Err(crate::error::PlagioError::Json(_))));
    }
}
