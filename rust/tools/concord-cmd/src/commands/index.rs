//! Index command implementation

use std::fs::File;
use std::io::{self, BufReader, BufWriter};

use anyhow::{Context, Result};
use concord_index::{IndexBuilder, ReportFormat, WordTree, write_report};

use crate::commands::IndexOptions;
use crate::utils::validate_file_exists;

pub fn run(
    options: IndexOptions,
    files: Vec<String>,
    format: String,
    output: Option<String>,
) -> Result<()> {
    let format = ReportFormat::try_from(format.as_str())?;
    let tree = build_index(&options, &files)?;

    match output {
        Some(output_file) => {
            let file = File::create(&output_file)
                .with_context(|| format!("Failed to create output file: {}", output_file))?;
            write_report(&tree, format, BufWriter::new(file))
                .with_context(|| format!("Failed to write report to file: {}", output_file))?;
            log::info!("report written to {output_file}");
        }
        None => {
            write_report(&tree, format, io::stdout().lock())
                .with_context(|| "Failed to write report")?;
        }
    }
    Ok(())
}

/// Indexes `files` in order, or standard input when the list is empty.
pub fn build_index(options: &IndexOptions, files: &[String]) -> Result<WordTree> {
    let config = options.resolve_config()?;
    let mut builder = IndexBuilder::new(config)?;

    if files.is_empty() {
        builder
            .add_reader(io::stdin().lock())
            .with_context(|| "Failed to index standard input")?;
    } else {
        for path in files {
            validate_file_exists(path)?;
            let file =
                File::open(path).with_context(|| format!("Failed to open file: {}", path))?;
            builder
                .add_reader(BufReader::new(file))
                .with_context(|| format!("Failed to index file: {}", path))?;
            log::info!("indexed {path} (through line {})", builder.lines_read());
        }
    }

    let tree = builder.finish();
    log::info!(
        "{} distinct words, {} occurrences",
        tree.len(),
        tree.occurrence_count()
    );
    Ok(tree)
}
