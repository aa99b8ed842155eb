//! Cross-reference index of words and the lines they occur on.
//!
//! The heart of the crate is [`WordTree`], an unbalanced binary search tree
//! keyed by word, whose entries each own a [`LineList`]: an ascending,
//! deduplicated list of line numbers that favors appends, because text is
//! scanned from top to bottom.
//!
//! Around it sit the pieces that turn text into index input and the index
//! into a report:
//!
//! - [`tokenizers`] split lines into candidate words;
//! - [`StopWords`] is the sorted table of excluded words;
//! - [`Scanner`] normalizes and filters words and numbers the lines;
//! - [`IndexBuilder`] feeds the occurrences into a [`WordTree`];
//! - [`write_report`] renders the finished index.
//!
//! # Quick Start
//!
//! ```rust
//! use concord_index::{IndexBuilder, IndexConfig};
//!
//! let mut builder = IndexBuilder::new(IndexConfig::default()).unwrap();
//! builder.add_text("The quick fox\nthe lazy dog\nthe fox").unwrap();
//! let index = builder.finish();
//!
//! let fox = index.get("fox").unwrap();
//! assert_eq!(fox.lines().as_slice(), &[1, 3]);
//! // "the" is a default stop word.
//! assert!(index.get("the").is_none());
//! ```

mod builder;
mod config;
mod line_list;
mod report;
mod scanner;
mod stop_words;
pub mod tokenizers;
mod word_tree;

pub use builder::IndexBuilder;
pub use config::{IndexConfig, StopWordList};
pub use line_list::{LineList, LineNumber, Placement};
pub use report::{ReportFormat, report_to_string, write_report};
pub use scanner::{Occurrence, Occurrences, Scanner};
pub use stop_words::{DEFAULT_STOP_WORDS, StopWords};
pub use tokenizers::{Tokenizer, TokenizerKind, create_tokenizer, create_tokenizer_by_name};
pub use word_tree::{InsertOutcome, Iter, WordEntry, WordTree};
