use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;
mod utils;

use commands::{IndexOptions, StopWordOptions};

#[derive(Parser)]
#[command(name = "concord")]
#[command(about = "Builds a cross-reference index of the words in a text")]
#[command(version)]
struct Cli {
    /// Log to stderr (-v info, -vv debug, -vvv trace); RUST_LOG overrides the level
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Index text files (or standard input) and print each word with its line numbers
    Index {
        #[command(flatten)]
        options: IndexOptions,

        /// Report format: "text" or "json"
        #[arg(long, default_value = "text")]
        format: String,

        /// Output file for the report (defaults to stdout if not specified)
        #[arg(short, long)]
        output: Option<String>,

        /// Text file(s) to index, read as one stream; standard input if none
        files: Vec<String>,
    },

    /// Print the stop words that would be excluded
    StopWords {
        /// Path to a JSON index configuration
        #[arg(long)]
        config: Option<String>,

        #[command(flatten)]
        stop_words: StopWordOptions,
    },
}

fn init_logging(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::new("off"),
        level => {
            let default_level = match level {
                1 => "info",
                2 => "debug",
                _ => "trace",
            };
            EnvFilter::try_from_default_env().unwrap_or_else(|_| default_level.into())
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Index {
            options,
            format,
            output,
            files,
        } => commands::index::run(options, files, format, output),
        Commands::StopWords { config, stop_words } => {
            commands::stop_words::run(config, stop_words)
        }
    }
}
