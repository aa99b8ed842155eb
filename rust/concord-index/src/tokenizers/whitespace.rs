//! Whitespace Tokenizer - splits on ASCII whitespace and strips punctuation.

use std::str::SplitAsciiWhitespace;

use super::{DEFAULT_MAX_TERM_LENGTH, DEFAULT_MIN_TERM_LENGTH, Tokenizer, truncate_str};
use crate::tokenizers::TokenizerKind;

/// Whitespace Tokenizer - keeps everything between whitespace as one term.
///
/// Leading and trailing ASCII punctuation is removed from each piece, while
/// inner punctuation is kept, so "well-known," yields "well-known" and
/// "(x86_64)" yields "x86_64". Pieces consisting only of punctuation are
/// dropped.
pub struct WhitespaceTokenizer {
    max_term_length: usize,
    min_term_length: usize,
}

impl WhitespaceTokenizer {
    pub fn with_lengths(max_term_length: usize, min_term_length: usize) -> Self {
        Self {
            max_term_length,
            min_term_length,
        }
    }

    pub fn new() -> Self {
        Self::with_lengths(DEFAULT_MAX_TERM_LENGTH, DEFAULT_MIN_TERM_LENGTH)
    }
}

impl Default for WhitespaceTokenizer {
    fn default() -> Self {
        Self::new()
    }
}

pub struct WhitespaceTokenIterator<'a> {
    pieces: SplitAsciiWhitespace<'a>,
    max_term_length: usize,
    min_term_length: usize,
}

impl<'a> Iterator for WhitespaceTokenIterator<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        for piece in self.pieces.by_ref() {
            let term = piece.trim_matches(|c: char| c.is_ascii_punctuation());
            if term.len() < self.min_term_length {
                continue;
            }
            // A limit shorter than the first character leaves nothing behind.
            let term = truncate_str(term, self.max_term_length);
            if !term.is_empty() {
                return Some(term);
            }
        }
        None
    }
}

impl Tokenizer for WhitespaceTokenizer {
    type TokenIter<'a> = WhitespaceTokenIterator<'a>;

    fn tokenize<'a>(&'a self, input: &'a str) -> Self::TokenIter<'a> {
        WhitespaceTokenIterator {
            pieces: input.split_ascii_whitespace(),
            max_term_length: self.max_term_length,
            min_term_length: self.min_term_length,
        }
    }

    fn kind(&self) -> TokenizerKind {
        TokenizerKind::Whitespace
    }

    fn max_term_length(&self) -> usize {
        self.max_term_length
    }

    fn min_term_length(&self) -> usize {
        self.min_term_length
    }
}
