//! ASCII Word Tokenizer - extracts words made of ASCII letters and digits.

use super::{DEFAULT_MAX_TERM_LENGTH, DEFAULT_MIN_TERM_LENGTH, Tokenizer, truncate_str};
use crate::tokenizers::TokenizerKind;

/// Word Tokenizer - extracts alphanumeric ASCII words from text.
///
/// Candidates are the longest runs of ASCII letters and digits. A run is a
/// word only if it starts with a letter, so plain numbers ("2024") and
/// ordinals ("3rd") are skipped. Every other byte, including non-ASCII text,
/// separates runs.
pub struct AsciiWordTokenizer {
    max_term_length: usize,
    min_term_length: usize,
}

impl AsciiWordTokenizer {
    /// Create a new AsciiWordTokenizer with custom max and min term lengths.
    pub fn with_lengths(max_term_length: usize, min_term_length: usize) -> Self {
        Self {
            max_term_length,
            min_term_length,
        }
    }

    /// Create a new AsciiWordTokenizer with default settings.
    pub fn new() -> Self {
        Self::with_lengths(DEFAULT_MAX_TERM_LENGTH, DEFAULT_MIN_TERM_LENGTH)
    }
}

impl Default for AsciiWordTokenizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator that yields word tokens from a string input.
pub struct WordTokenIterator<'a> {
    input: &'a str,
    pos: usize,
    max_term_length: usize,
    min_term_length: usize,
}

impl<'a> WordTokenIterator<'a> {
    pub fn new(input: &'a str, max_term_length: usize, min_term_length: usize) -> Self {
        Self {
            input,
            pos: 0,
            max_term_length,
            min_term_length,
        }
    }

    /// Returns the byte range of the next alphanumeric run, if any.
    fn next_run(&mut self) -> Option<(usize, usize)> {
        let bytes = self.input.as_bytes();
        while self.pos < bytes.len() && !bytes[self.pos].is_ascii_alphanumeric() {
            self.pos += 1;
        }
        if self.pos == bytes.len() {
            return None;
        }
        let start = self.pos;
        while self.pos < bytes.len() && bytes[self.pos].is_ascii_alphanumeric() {
            self.pos += 1;
        }
        Some((start, self.pos))
    }
}

impl<'a> Iterator for WordTokenIterator<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((start, end)) = self.next_run() {
            let word = &self.input[start..end];
            if !word.as_bytes()[0].is_ascii_alphabetic() || word.len() < self.min_term_length {
                continue;
            }
            let word = truncate_str(word, self.max_term_length);
            if !word.is_empty() {
                return Some(word);
            }
        }
        None
    }
}

impl Tokenizer for AsciiWordTokenizer {
    type TokenIter<'a> = WordTokenIterator<'a>;

    fn tokenize<'a>(&'a self, input: &'a str) -> Self::TokenIter<'a> {
        WordTokenIterator::new(input, self.max_term_length, self.min_term_length)
    }

    fn kind(&self) -> TokenizerKind {
        TokenizerKind::AsciiWord
    }

    fn max_term_length(&self) -> usize {
        self.max_term_length
    }

    fn min_term_length(&self) -> usize {
        self.min_term_length
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_word_tokenizer() {
        let tokenizer = AsciiWordTokenizer::new();

        let terms: Vec<&str> = tokenizer.tokenize("Typically 3-4 levels deep,").collect();
        assert_eq!(terms, vec!["Typically", "levels", "deep"]);

        let terms: Vec<&str> = tokenizer.tokenize("").collect();
        assert_eq!(terms, Vec::<&str>::new());

        let terms: Vec<&str> = tokenizer.tokenize("word").collect();
        assert_eq!(terms, vec!["word"]);

        let terms: Vec<&str> = tokenizer.tokenize("!@#$%^&*()").collect();
        assert_eq!(terms, Vec::<&str>::new());

        assert_eq!(tokenizer.name(), "ascii-word");
    }

    #[test]
    fn test_words_with_digits() {
        let tokenizer = AsciiWordTokenizer::new();

        // Digits continue a word but cannot start one.
        let terms: Vec<&str> = tokenizer
            .tokenize("utf8 and x86_64 on the 3rd of May, 2024")
            .collect();
        assert_eq!(terms, vec!["utf8", "and", "x86", "on", "the", "of", "May"]);
    }

    #[test]
    fn test_punctuation_and_apostrophes() {
        let tokenizer = AsciiWordTokenizer::new();
        let terms: Vec<&str> = tokenizer.tokenize("don't stop--believin'").collect();
        assert_eq!(terms, vec!["don", "t", "stop", "believin"]);
    }

    #[test]
    fn test_non_ascii_separates_words() {
        let tokenizer = AsciiWordTokenizer::new();
        let terms: Vec<&str> = tokenizer.tokenize("café naïve 你好 ok").collect();
        assert_eq!(terms, vec!["caf", "na", "ve", "ok"]);
    }

    #[test]
    fn test_word_length_limits() {
        let tokenizer = AsciiWordTokenizer::with_lengths(3, 1);
        let terms: Vec<&str> = tokenizer.tokenize("cat dog elephant mouse").collect();
        assert_eq!(terms, vec!["cat", "dog", "ele", "mou"]);

        let tokenizer = AsciiWordTokenizer::with_lengths(100, 3);
        let terms: Vec<&str> = tokenizer.tokenize("a bb cat dog elephant").collect();
        assert_eq!(terms, vec!["cat", "dog", "elephant"]);
        assert_eq!(tokenizer.min_term_length(), 3);
        assert_eq!(tokenizer.max_term_length(), 100);
    }
}
