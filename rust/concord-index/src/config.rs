//! Configuration of a cross-reference index build.

use std::num::NonZeroU32;

use concord_common::{Result, error::Error};
use serde::{Deserialize, Serialize};

use crate::stop_words::StopWords;
use crate::tokenizers::{
    DEFAULT_MAX_TERM_LENGTH, DEFAULT_MIN_TERM_LENGTH, TokenizerKind, TokenizerType,
    create_tokenizer,
};

/// Which stop words to exclude from the index.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StopWordList {
    /// The built-in list.
    #[default]
    Default,
    /// No filtering.
    None,
    /// A user-supplied list replacing the built-in one.
    Custom(Vec<String>),
}

impl StopWordList {
    /// Builds the sorted lookup table for this list.
    pub fn resolve(&self) -> Result<StopWords> {
        match self {
            StopWordList::Default => Ok(StopWords::default()),
            StopWordList::None => Ok(StopWords::none()),
            StopWordList::Custom(words) => StopWords::from_words(words),
        }
    }
}

/// Settings of one index build.
///
/// Every field has a default, so a JSON config file only needs to mention
/// the settings it changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct IndexConfig {
    /// Tokenization strategy.
    pub tokenizer: TokenizerKind,
    /// Words shorter than this many bytes are skipped.
    pub min_term_length: usize,
    /// Words longer than this many bytes are truncated.
    pub max_term_length: usize,
    /// Lowercase words (ASCII) before lookup and insertion.
    pub fold_case: bool,
    /// When set, numbers are reported as pages of this many lines instead of
    /// as line numbers.
    pub lines_per_page: Option<NonZeroU32>,
    /// Words excluded from the index.
    pub stop_words: StopWordList,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            tokenizer: TokenizerKind::AsciiWord,
            min_term_length: DEFAULT_MIN_TERM_LENGTH,
            max_term_length: DEFAULT_MAX_TERM_LENGTH,
            fold_case: true,
            lines_per_page: None,
            stop_words: StopWordList::Default,
        }
    }
}

impl IndexConfig {
    /// Validates the configuration and returns an error if invalid.
    pub fn validate(&self) -> Result<()> {
        if self.min_term_length == 0 {
            return Err(Error::invalid_arg(
                "min_term_length",
                "must be greater than 0",
            ));
        }
        if self.max_term_length < self.min_term_length {
            return Err(Error::invalid_arg(
                "max_term_length",
                format!(
                    "{} is less than min_term_length {}",
                    self.max_term_length, self.min_term_length
                ),
            ));
        }
        if let StopWordList::Custom(words) = &self.stop_words
            && words.iter().any(|w| w.trim().is_empty())
        {
            return Err(Error::invalid_arg(
                "stop_words",
                "stop word must not be empty",
            ));
        }
        Ok(())
    }

    /// Parses a configuration from JSON and validates it.
    pub fn from_json(json: &str) -> Result<IndexConfig> {
        let config: IndexConfig =
            serde_json::from_str(json).map_err(|e| Error::json("index config", e))?;
        config.validate()?;
        Ok(config)
    }

    /// Creates the tokenizer described by this configuration.
    pub fn create_tokenizer(&self) -> TokenizerType {
        create_tokenizer(self.tokenizer, self.max_term_length, self.min_term_length)
    }

    /// Maps a 1-based line number to the number reported in the index.
    pub fn map_line(&self, line: u32) -> u32 {
        match self.lines_per_page {
            Some(page_len) => line.saturating_sub(1) / page_len.get() + 1,
            None => line,
        }
    }
}
