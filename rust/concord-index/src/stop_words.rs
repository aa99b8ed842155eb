//! Stop words: words deliberately left out of the index.
//!
//! Membership is tested by binary search, so the table is always kept sorted.
//! The built-in list is a static table that is already sorted; user-supplied
//! lists are normalized and sorted once, when the table is built.

use std::borrow::Cow;
use std::io::Read;

use concord_common::{Result, error::Error, verify_data};

/// Built-in stop words, in ascending byte order.
pub const DEFAULT_STOP_WORDS: &[&str] = &[
    "a", "an", "and", "are", "as", "at", "be", "but", "by", "for", "if", "in", "into", "is", "it",
    "no", "not", "of", "on", "or", "such", "that", "the", "their", "then", "there", "these",
    "they", "this", "to", "was", "will", "with",
];

/// Sorted, deduplicated set of excluded words.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StopWords {
    words: Vec<Cow<'static, str>>,
}

impl Default for StopWords {
    /// The built-in list.
    fn default() -> Self {
        StopWords {
            words: DEFAULT_STOP_WORDS.iter().map(|&w| Cow::Borrowed(w)).collect(),
        }
    }
}

impl StopWords {
    /// An empty table: nothing is excluded.
    pub fn none() -> StopWords {
        StopWords { words: Vec::new() }
    }

    /// Builds a table from user-supplied words.
    ///
    /// Words are lowercased (ASCII), sorted and deduplicated.
    ///
    /// # Errors
    /// Returns an `InvalidArgument` error if any word is empty.
    pub fn from_words<I, S>(words: I) -> Result<StopWords>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut normalized = Vec::new();
        for word in words {
            let word = word.as_ref().trim();
            if word.is_empty() {
                return Err(Error::invalid_arg("words", "stop word must not be empty"));
            }
            normalized.push(Cow::Owned(word.to_ascii_lowercase()));
        }
        normalized.sort_unstable();
        normalized.dedup();
        Ok(StopWords { words: normalized })
    }

    /// Reads a stop-word list: words separated by whitespace, with `#`
    /// starting a comment that runs to the end of the line.
    ///
    /// # Errors
    /// Returns an `InvalidFormat` error if an entry contains a control
    /// character, which usually means the file is not a text list.
    pub fn from_reader<R: Read>(mut reader: R) -> Result<StopWords> {
        let mut text = String::new();
        reader
            .read_to_string(&mut text)
            .map_err(|e| Error::io("stop word list", e))?;
        let mut words = Vec::new();
        for line in text.lines() {
            let line = line.split('#').next().unwrap_or_default();
            for word in line.split_ascii_whitespace() {
                verify_data!(word, !word.chars().any(char::is_control));
                words.push(word);
            }
        }
        StopWords::from_words(words)
    }

    /// Returns `true` if `word` is excluded. `word` must already be normalized.
    pub fn contains(&self, word: &str) -> bool {
        self.words
            .binary_search_by(|probe| probe.as_ref().cmp(word))
            .is_ok()
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// The excluded words in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(|w| w.as_ref())
    }
}
