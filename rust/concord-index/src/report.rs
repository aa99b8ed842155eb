//! Rendering of the finished index.

use std::io::Write;

use concord_common::{Result, error::Error};
use serde::{Deserialize, Serialize};

use crate::line_list::LineNumber;
use crate::word_tree::WordTree;

/// Output format of a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReportFormat {
    /// One `word  1, 5, 9` record per line, words left-aligned in a column.
    #[default]
    Text,
    /// A pretty-printed JSON array of `{ "word": .., "lines": [..] }`.
    Json,
}

impl TryFrom<&str> for ReportFormat {
    type Error = Error;

    fn try_from(name: &str) -> Result<Self> {
        match name {
            "text" => Ok(ReportFormat::Text),
            "json" => Ok(ReportFormat::Json),
            _ => Err(Error::invalid_arg(
                "format",
                format!("Unrecognized report format: {name}"),
            )),
        }
    }
}

#[derive(Serialize)]
struct ReportRecord<'a> {
    word: &'a str,
    lines: &'a [LineNumber],
}

/// Writes the index as a report in ascending word order.
pub fn write_report<W: Write>(tree: &WordTree, format: ReportFormat, writer: W) -> Result<()> {
    match format {
        ReportFormat::Text => write_text(tree, writer),
        ReportFormat::Json => write_json(tree, writer),
    }
}

fn write_text<W: Write>(tree: &WordTree, mut writer: W) -> Result<()> {
    let width = tree.iter().map(|entry| entry.text().len()).max().unwrap_or(0);
    for entry in tree {
        let numbers = entry
            .lines()
            .iter()
            .map(|n| n.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        writeln!(writer, "{:<width$}  {numbers}", entry.text())
            .map_err(|e| Error::io("writing report", e))?;
    }
    writer.flush().map_err(|e| Error::io("writing report", e))
}

fn write_json<W: Write>(tree: &WordTree, mut writer: W) -> Result<()> {
    let records: Vec<ReportRecord<'_>> = tree
        .iter()
        .map(|entry| ReportRecord {
            word: entry.text(),
            lines: entry.lines().as_slice(),
        })
        .collect();
    serde_json::to_writer_pretty(&mut writer, &records)
        .map_err(|e| Error::json("writing report", e))?;
    writeln!(writer).map_err(|e| Error::io("writing report", e))?;
    writer.flush().map_err(|e| Error::io("writing report", e))
}

/// Renders a text report into a string.
pub fn report_to_string(tree: &WordTree) -> Result<String> {
    let mut buf = Vec::new();
    write_text(tree, &mut buf)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}
