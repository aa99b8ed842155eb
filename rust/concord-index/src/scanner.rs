//! Turns text into a stream of `(word, number)` occurrences.
//!
//! The scanner reads its source one line at a time, counting lines from 1.
//! Each line is tokenized, each token is normalized (ASCII lowercase unless
//! case folding is disabled) and checked against the stop words, and the
//! surviving words are yielded with the line's number, or with its page
//! number when a page length is configured. The stream ends at end of input.

use std::collections::VecDeque;
use std::io::BufRead;

use concord_common::{Result, error::Error, try_or_ret_some_err};

use crate::config::IndexConfig;
use crate::line_list::LineNumber;
use crate::stop_words::StopWords;
use crate::tokenizers::{Tokenizer, TokenizerType};

/// A normalized word and the number it was seen on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Occurrence {
    pub word: String,
    pub number: LineNumber,
}

impl Occurrence {
    pub fn new(word: impl Into<String>, number: LineNumber) -> Occurrence {
        Occurrence {
            word: word.into(),
            number,
        }
    }
}

/// Tokenizer, normalization and stop-word filter of one build.
pub struct Scanner {
    config: IndexConfig,
    tokenizer: TokenizerType,
    stop_words: StopWords,
}

impl Scanner {
    /// Validates `config` and prepares its tokenizer and stop-word table.
    pub fn new(config: IndexConfig) -> Result<Scanner> {
        config.validate()?;
        let stop_words = config.stop_words.resolve()?;
        Ok(Scanner::with_stop_words(config, stop_words))
    }

    /// Uses an already built stop-word table, ignoring `config.stop_words`.
    pub fn with_stop_words(config: IndexConfig, stop_words: StopWords) -> Scanner {
        Scanner {
            tokenizer: config.create_tokenizer(),
            config,
            stop_words,
        }
    }

    pub fn config(&self) -> &IndexConfig {
        &self.config
    }

    pub fn stop_words(&self) -> &StopWords {
        &self.stop_words
    }

    /// Normalizes a token; `None` if it is empty or a stop word.
    pub fn normalize(&self, token: &str) -> Option<String> {
        if token.is_empty() {
            return None;
        }
        let word = if self.config.fold_case {
            token.to_ascii_lowercase()
        } else {
            token.to_string()
        };
        (!self.stop_words.contains(&word)).then_some(word)
    }

    /// Occurrences of the retained words of one line of text.
    pub fn scan_line<'a>(
        &'a self,
        text: &'a str,
        line: LineNumber,
    ) -> impl Iterator<Item = Occurrence> + 'a {
        let number = self.config.map_line(line);
        self.tokenizer
            .tokenize(text)
            .filter_map(move |token| self.normalize(token))
            .map(move |word| Occurrence { word, number })
    }

    /// Streams the occurrences of `reader`, numbering its first line 1.
    pub fn occurrences<R: BufRead>(&self, reader: R) -> Occurrences<'_, R> {
        self.occurrences_after(reader, 0)
    }

    /// Streams the occurrences of `reader`, numbering its first line
    /// `lines_before + 1`. Used to continue the count across several sources.
    pub fn occurrences_after<R: BufRead>(
        &self,
        reader: R,
        lines_before: LineNumber,
    ) -> Occurrences<'_, R> {
        Occurrences {
            scanner: self,
            reader,
            buf: Vec::new(),
            line: lines_before,
            pending: VecDeque::new(),
        }
    }
}

/// Iterator over the occurrences of a text source.
///
/// Yields `Err` for read failures; `None` marks the end of input. Invalid
/// UTF-8 is replaced rather than rejected, since only ASCII words are
/// indexed by default.
pub struct Occurrences<'s, R> {
    scanner: &'s Scanner,
    reader: R,
    buf: Vec<u8>,
    line: LineNumber,
    pending: VecDeque<Occurrence>,
}

impl<R> Occurrences<'_, R> {
    /// Number of the last line read so far.
    pub fn line(&self) -> LineNumber {
        self.line
    }
}

impl<R: BufRead> Iterator for Occurrences<'_, R> {
    type Item = Result<Occurrence>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(occurrence) = self.pending.pop_front() {
                return Some(Ok(occurrence));
            }

            self.buf.clear();
            let read = try_or_ret_some_err!(
                self.reader
                    .read_until(b'\n', &mut self.buf)
                    .map_err(|e| Error::io("reading input", e))
            );
            if read == 0 {
                return None;
            }
            self.line = try_or_ret_some_err!(
                self.line
                    .checked_add(1)
                    .ok_or_else(|| Error::invalid_operation("line counter overflow"))
            );

            let text = String::from_utf8_lossy(&self.buf);
            self.pending
                .extend(self.scanner.scan_line(&text, self.line));
        }
    }
}

#[cfg(test)]
mod tests {
    use std::num::NonZeroU32;

    use super::*;
    use crate::config::StopWordList;

    fn collect(scanner: &Scanner, text: &str) -> Vec<(String, u32)> {
        scanner
            .occurrences(text.as_bytes())
            .map(|occ| occ.map(|o| (o.word, o.number)))
            .collect::<Result<_>>()
            .unwrap()
    }

    fn pairs(items: &[(&str, u32)]) -> Vec<(String, u32)> {
        items.iter().map(|&(w, n)| (w.to_string(), n)).collect()
    }

    #[test]
    fn test_default_stop_words_and_case_folding() {
        let scanner = Scanner::new(IndexConfig::default()).unwrap();
        assert_eq!(
            collect(&scanner, "A Cat Sat On A Mat"),
            pairs(&[("cat", 1), ("sat", 1), ("mat", 1)])
        );
    }

    #[test]
    fn test_line_counting() {
        let scanner = Scanner::new(IndexConfig::default()).unwrap();
        let text = "quick fox\n\nlazy dog\r\nfox";
        assert_eq!(
            collect(&scanner, text),
            pairs(&[("quick", 1), ("fox", 1), ("lazy", 3), ("dog", 3), ("fox", 4)])
        );
    }

    #[test]
    fn test_keep_case_and_no_stop_words() {
        let config = IndexConfig {
            fold_case: false,
            stop_words: StopWordList::None,
            ..Default::default()
        };
        let scanner = Scanner::new(config).unwrap();
        assert_eq!(
            collect(&scanner, "The Fox"),
            pairs(&[("The", 1), ("Fox", 1)])
        );
    }

    #[test]
    fn test_page_numbers() {
        let config = IndexConfig {
            lines_per_page: NonZeroU32::new(2),
            ..Default::default()
        };
        let scanner = Scanner::new(config).unwrap();
        assert_eq!(
            collect(&scanner, "alpha\nbeta\ngamma\n"),
            pairs(&[("alpha", 1), ("beta", 1), ("gamma", 2)])
        );
    }

    #[test]
    fn test_continued_numbering() {
        let scanner = Scanner::new(IndexConfig::default()).unwrap();
        let mut occurrences = scanner.occurrences_after("one\ntwo\n".as_bytes(), 10);
        let first = occurrences.next().unwrap().unwrap();
        assert_eq!(first, Occurrence::new("one", 11));
        let second = occurrences.next().unwrap().unwrap();
        assert_eq!(second, Occurrence::new("two", 12));
        assert!(occurrences.next().is_none());
        assert_eq!(occurrences.line(), 12);
    }

    #[test]
    fn test_invalid_utf8_is_replaced() {
        let scanner = Scanner::new(IndexConfig::default()).unwrap();
        let bytes: &[u8] = b"caf\xff bar\n";
        let words: Vec<String> = scanner
            .occurrences(bytes)
            .map(|occ| occ.unwrap().word)
            .collect();
        assert_eq!(words, vec!["caf", "bar"]);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = IndexConfig {
            stop_words: StopWordList::Custom(vec![" ".to_string()]),
            ..Default::default()
        };
        assert!(Scanner::new(config).is_err());
    }
}
