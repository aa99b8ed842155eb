//! Tokenizers for extracting candidate words from lines of text.
//!
//! A tokenizer only splits text; case folding and stop-word filtering happen
//! afterwards in the occurrence scanner. Tokenizers return iterators of
//! string slices borrowed from the input, so no allocation happens until a
//! word is actually recorded in the index.
//!
//! Tokenization is ASCII-oriented: bytes outside the ASCII range never form
//! part of a word for the `ascii-word` tokenizer.

pub mod ascii_word;
pub mod whitespace;

use concord_common::{Result, error::Error};
use serde::{Deserialize, Serialize};

pub use ascii_word::AsciiWordTokenizer;
pub use whitespace::WhitespaceTokenizer;

/// Default maximum length of a single term in bytes before truncation
pub const DEFAULT_MAX_TERM_LENGTH: usize = 100;

/// Default minimum length of a single term in bytes
pub const DEFAULT_MIN_TERM_LENGTH: usize = 1;

/// A tokenizer extracts words from a line of text.
///
/// Terms longer than the maximum length are truncated at a character
/// boundary. Terms shorter than the minimum length are skipped.
pub trait Tokenizer: Send + Sync {
    /// The iterator type returned by tokenize.
    type TokenIter<'a>: Iterator<Item = &'a str>
    where
        Self: 'a;

    /// Extract terms from the input string as an iterator of string slices.
    fn tokenize<'a>(&'a self, input: &'a str) -> Self::TokenIter<'a>;

    /// Get the kind of the tokenizer.
    fn kind(&self) -> TokenizerKind;

    /// Get the name of the tokenizer kind as a static string.
    fn name(&self) -> &'static str {
        self.kind().name()
    }

    /// Maximum length of a single term in bytes before truncation.
    fn max_term_length(&self) -> usize;

    /// Minimum length of a single term in bytes.
    fn min_term_length(&self) -> usize;
}

/// Creates a tokenizer of the given kind with the given term length limits.
pub fn create_tokenizer(
    kind: TokenizerKind,
    max_term_length: usize,
    min_term_length: usize,
) -> TokenizerType {
    match kind {
        TokenizerKind::AsciiWord => TokenizerType::AsciiWord(AsciiWordTokenizer::with_lengths(
            max_term_length,
            min_term_length,
        )),
        TokenizerKind::Whitespace => TokenizerType::Whitespace(
            WhitespaceTokenizer::with_lengths(max_term_length, min_term_length),
        ),
    }
}

/// Creates a tokenizer with default length limits from its name.
///
/// # Errors
/// Returns an [`Error::invalid_arg`] if the provided tokenizer name is not recognized.
pub fn create_tokenizer_by_name(name: &str) -> Result<TokenizerType> {
    Ok(create_tokenizer(
        name.try_into()?,
        DEFAULT_MAX_TERM_LENGTH,
        DEFAULT_MIN_TERM_LENGTH,
    ))
}

/// Truncate a string slice to the maximum allowed length at a codepoint boundary.
pub(crate) fn truncate_str(input: &str, max_term_length: usize) -> &str {
    if input.len() <= max_term_length {
        return input;
    }

    let mut boundary = max_term_length;
    while boundary > 0 && !input.is_char_boundary(boundary) {
        boundary -= 1;
    }

    &input[..boundary]
}

/// Identifies a tokenization strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TokenizerKind {
    /// Words start with an ASCII letter and continue with ASCII letters or digits.
    #[default]
    AsciiWord,
    /// Whitespace-separated pieces with surrounding ASCII punctuation removed.
    Whitespace,
}

impl TryFrom<&str> for TokenizerKind {
    type Error = Error;

    fn try_from(name: &str) -> Result<Self> {
        match name {
            "ascii-word" => Ok(TokenizerKind::AsciiWord),
            "whitespace" => Ok(TokenizerKind::Whitespace),
            _ => Err(Error::invalid_arg(
                "name",
                format!("Unrecognized tokenizer: {name}"),
            )),
        }
    }
}

impl TokenizerKind {
    /// Get the name of the tokenizer kind as a static string.
    pub const fn name(&self) -> &'static str {
        match self {
            TokenizerKind::AsciiWord => "ascii-word",
            TokenizerKind::Whitespace => "whitespace",
        }
    }
}

impl std::fmt::Display for TokenizerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Enum that holds all available tokenizer types.
pub enum TokenizerType {
    AsciiWord(AsciiWordTokenizer),
    Whitespace(WhitespaceTokenizer),
}

impl Tokenizer for TokenizerType {
    type TokenIter<'a> = Box<dyn Iterator<Item = &'a str> + 'a>;

    fn tokenize<'a>(&'a self, input: &'a str) -> Self::TokenIter<'a> {
        match self {
            TokenizerType::AsciiWord(tokenizer) => Box::new(tokenizer.tokenize(input)),
            TokenizerType::Whitespace(tokenizer) => Box::new(tokenizer.tokenize(input)),
        }
    }

    fn kind(&self) -> TokenizerKind {
        match self {
            TokenizerType::AsciiWord(tokenizer) => tokenizer.kind(),
            TokenizerType::Whitespace(tokenizer) => tokenizer.kind(),
        }
    }

    fn max_term_length(&self) -> usize {
        match self {
            TokenizerType::AsciiWord(tokenizer) => tokenizer.max_term_length(),
            TokenizerType::Whitespace(tokenizer) => tokenizer.max_term_length(),
        }
    }

    fn min_term_length(&self) -> usize {
        match self {
            TokenizerType::AsciiWord(tokenizer) => tokenizer.min_term_length(),
            TokenizerType::Whitespace(tokenizer) => tokenizer.min_term_length(),
        }
    }
}
