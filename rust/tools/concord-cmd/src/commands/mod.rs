//! Command implementations for concord-cmd

use std::fs::{self, File};
use std::io::BufReader;
use std::num::NonZeroU32;

use anyhow::{Context, Result};
use clap::Args;
use concord_index::{IndexConfig, StopWordList, StopWords, TokenizerKind};

use crate::utils::validate_file_exists;

pub mod index;
pub mod stop_words;

/// Options selecting the stop words; at most one may be given.
#[derive(Args, Debug, Default)]
pub struct StopWordOptions {
    /// Exclude these words instead of the built-in list (repeatable, comma-separated)
    #[arg(
        short = 'l',
        long = "exclude",
        value_delimiter = ',',
        conflicts_with_all = ["stop_words_file", "no_stop_words"]
    )]
    pub exclude: Vec<String>,

    /// Read the words to exclude from a file (whitespace-separated, '#' comments)
    #[arg(long, conflicts_with = "no_stop_words")]
    pub stop_words_file: Option<String>,

    /// Index every word, excluding none
    #[arg(long)]
    pub no_stop_words: bool,
}

impl StopWordOptions {
    /// The stop-word list requested on the command line, if any.
    pub fn resolve(&self) -> Result<Option<StopWordList>> {
        if self.no_stop_words {
            return Ok(Some(StopWordList::None));
        }
        if !self.exclude.is_empty() {
            return Ok(Some(StopWordList::Custom(self.exclude.clone())));
        }
        if let Some(path) = &self.stop_words_file {
            validate_file_exists(path)?;
            let file = File::open(path)
                .with_context(|| format!("Failed to open stop word file: {}", path))?;
            let table = StopWords::from_reader(BufReader::new(file))
                .with_context(|| format!("Failed to read stop word file: {}", path))?;
            let words = table.iter().map(String::from).collect();
            return Ok(Some(StopWordList::Custom(words)));
        }
        Ok(None)
    }
}

/// Index build options; flags override values from `--config`.
#[derive(Args, Debug, Default)]
pub struct IndexOptions {
    /// Path to a JSON index configuration
    #[arg(long)]
    pub config: Option<String>,

    /// Tokenizer: "ascii-word" or "whitespace"
    #[arg(long)]
    pub tokenizer: Option<String>,

    /// Keep the original letter case instead of lowercasing words.
    /// Stop words are always lowercase, so they only exclude lowercase spellings
    #[arg(long)]
    pub keep_case: bool,

    /// Report page numbers, counting this many lines per page
    #[arg(long)]
    pub lines_per_page: Option<NonZeroU32>,

    /// Skip words shorter than this many bytes
    #[arg(long)]
    pub min_length: Option<usize>,

    /// Truncate words longer than this many bytes
    #[arg(long)]
    pub max_length: Option<usize>,

    #[command(flatten)]
    pub stop_words: StopWordOptions,
}

impl IndexOptions {
    /// Merges the configuration file (if any) with the command-line flags.
    pub fn resolve_config(&self) -> Result<IndexConfig> {
        let mut config = load_config(self.config.as_deref())?;

        if let Some(name) = &self.tokenizer {
            config.tokenizer = TokenizerKind::try_from(name.as_str())?;
        }
        if self.keep_case {
            config.fold_case = false;
        }
        if let Some(lines_per_page) = self.lines_per_page {
            config.lines_per_page = Some(lines_per_page);
        }
        if let Some(min_length) = self.min_length {
            config.min_term_length = min_length;
        }
        if let Some(max_length) = self.max_length {
            config.max_term_length = max_length;
        }
        if let Some(stop_words) = self.stop_words.resolve()? {
            config.stop_words = stop_words;
        }

        config.validate()?;
        Ok(config)
    }
}

/// Loads a JSON configuration, or the defaults when no path is given.
pub fn load_config(path: Option<&str>) -> Result<IndexConfig> {
    let Some(path) = path else {
        return Ok(IndexConfig::default());
    };
    validate_file_exists(path)?;
    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path))?;
    let config = IndexConfig::from_json(&json)
        .with_context(|| format!("Invalid config file: {}", path))?;
    log::debug!("loaded index config from {path}: {config:?}");
    Ok(config)
}
