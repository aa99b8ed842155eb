use std::io::{self, Write};

use anyhow::{Context, Result};
use concord_index::StopWords;

use crate::commands::{StopWordOptions, load_config};

pub fn run(config_path: Option<String>, options: StopWordOptions) -> Result<()> {
    let table = resolve_stop_words(config_path.as_deref(), &options)?;

    let mut out = io::stdout().lock();
    for word in table.iter() {
        writeln!(out, "{}", word).with_context(|| "Failed to write stop words")?;
    }
    Ok(())
}

/// Stop words selected by the flags, falling back to the config file and then
/// to the built-in list.
pub fn resolve_stop_words(
    config_path: Option<&str>,
    options: &StopWordOptions,
) -> Result<StopWords> {
    let list = match options.resolve()? {
        Some(list) => list,
        None => load_config(config_path)?.stop_words,
    };
    Ok(list.resolve()?)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use concord_index::DEFAULT_STOP_WORDS;

    use super::*;

    #[test]
    fn test_flags_take_precedence_over_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("concord.json");
        fs::write(&path, r#"{ "stop_words": { "custom": ["Zulu", "alpha"] } }"#).unwrap();
        let config = path.to_str().unwrap();

        let words = resolve_stop_words(Some(config), &StopWordOptions::default()).unwrap();
        assert_eq!(words.iter().collect::<Vec<_>>(), vec!["alpha", "zulu"]);

        let options = StopWordOptions {
            exclude: vec!["fox".to_string()],
            ..Default::default()
        };
        let words = resolve_stop_words(Some(config), &options).unwrap();
        assert_eq!(words.iter().collect::<Vec<_>>(), vec!["fox"]);

        let options = StopWordOptions {
            no_stop_words: true,
            ..Default::default()
        };
        assert!(resolve_stop_words(Some(config), &options).unwrap().is_empty());
    }

    #[test]
    fn test_builtin_list_without_config() {
        let words = resolve_stop_words(None, &StopWordOptions::default()).unwrap();
        assert_eq!(words.iter().collect::<Vec<_>>(), DEFAULT_STOP_WORDS);
        assert!(run(None, StopWordOptions::default()).is_ok());
    }
}
