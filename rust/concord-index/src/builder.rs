use std::io::BufRead;

use concord_common::Result;

use crate::config::IndexConfig;
use crate::line_list::LineNumber;
use crate::scanner::Scanner;
use crate::stop_words::StopWords;
use crate::word_tree::{InsertOutcome, WordTree};

/// Builds a [`WordTree`] from one or more text sources.
///
/// Sources are treated as a single concatenated stream: line numbering
/// continues from one source to the next.
pub struct IndexBuilder {
    scanner: Scanner,
    tree: WordTree,
    lines_read: LineNumber,
    duplicates: usize,
}

impl IndexBuilder {
    pub fn new(config: IndexConfig) -> Result<IndexBuilder> {
        Ok(IndexBuilder::with_scanner(Scanner::new(config)?))
    }

    /// Uses an already built stop-word table, ignoring `config.stop_words`.
    pub fn with_stop_words(config: IndexConfig, stop_words: StopWords) -> Result<IndexBuilder> {
        config.validate()?;
        Ok(IndexBuilder::with_scanner(Scanner::with_stop_words(
            config, stop_words,
        )))
    }

    fn with_scanner(scanner: Scanner) -> IndexBuilder {
        IndexBuilder {
            scanner,
            tree: WordTree::new(),
            lines_read: 0,
            duplicates: 0,
        }
    }

    pub fn scanner(&self) -> &Scanner {
        &self.scanner
    }

    /// Reads `reader` to the end and indexes its words.
    pub fn add_reader<R: BufRead>(&mut self, reader: R) -> Result<()> {
        let mut occurrences = self.scanner.occurrences_after(reader, self.lines_read);
        for occurrence in occurrences.by_ref() {
            let occurrence = occurrence?;
            if self.tree.insert(&occurrence.word, occurrence.number)? == InsertOutcome::Duplicate {
                self.duplicates += 1;
            }
        }
        self.lines_read = occurrences.line();
        Ok(())
    }

    /// Indexes an in-memory text.
    pub fn add_text(&mut self, text: &str) -> Result<()> {
        self.add_reader(text.as_bytes())
    }

    /// Number of lines consumed across all sources.
    pub fn lines_read(&self) -> LineNumber {
        self.lines_read
    }

    pub fn tree(&self) -> &WordTree {
        &self.tree
    }

    /// Finishes the build and returns the index.
    pub fn finish(self) -> WordTree {
        log::debug!(
            "indexed {} lines: {} words, {} occurrences ({} repeated), tree depth {}",
            self.lines_read,
            self.tree.len(),
            self.tree.occurrence_count(),
            self.duplicates,
            self.tree.depth()
        );
        self.tree
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StopWordList;
    use crate::tokenizers::TokenizerKind;

    #[test]
    fn test_numbering_continues_across_sources() {
        let mut builder = IndexBuilder::new(IndexConfig::default()).unwrap();
        builder.add_text("apple\nbanana\n").unwrap();
        builder.add_text("apple\n").unwrap();
        assert_eq!(builder.lines_read(), 3);

        let tree = builder.finish();
        assert_eq!(tree.get("apple").unwrap().lines().as_slice(), &[1, 3]);
        assert_eq!(tree.get("banana").unwrap().lines().as_slice(), &[2]);
    }

    #[test]
    fn test_with_stop_words() {
        let stop_words = StopWords::from_words(["banana"]).unwrap();
        let config = IndexConfig {
            stop_words: StopWordList::None,
            ..Default::default()
        };
        let mut builder = IndexBuilder::with_stop_words(config, stop_words).unwrap();
        builder.add_text("the banana and the apple").unwrap();
        let words: Vec<&str> = builder.tree().iter().map(|e| e.text()).collect();
        assert_eq!(words, vec!["and", "apple", "the"]);
    }

    #[test]
    fn test_repeated_words_on_a_line() {
        let mut builder = IndexBuilder::new(IndexConfig::default()).unwrap();
        builder.add_text("echo echo ECHO\necho").unwrap();
        assert_eq!(builder.duplicates, 2);
        let tree = builder.finish();
        assert_eq!(tree.get("echo").unwrap().lines().as_slice(), &[1, 2]);
        assert_eq!(tree.occurrence_count(), 2);
    }

    #[test]
    fn test_tiny_max_length_skips_multibyte_terms() {
        let config = IndexConfig {
            tokenizer: TokenizerKind::Whitespace,
            max_term_length: 1,
            ..Default::default()
        };
        let mut builder = IndexBuilder::new(config).unwrap();
        builder.add_text("ok é fine\nélan\n").unwrap();
        assert_eq!(builder.lines_read(), 2);
        let tree = builder.finish();
        let words: Vec<&str> = tree.iter().map(|e| e.text()).collect();
        assert_eq!(words, vec!["f", "o"]);
    }
}
