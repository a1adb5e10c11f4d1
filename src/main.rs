//! CLI entry point: load one dataset, classify its columns, print the report.

use std::io;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use rust_column_classifier::classify::ColumnClassifier;
use rust_column_classifier::ingestion::{load_from_path, LoadFormat, LoadOptions, TracingObserver};
use rust_column_classifier::report::{write_json, write_text};
use tracing::debug;

/// CLI-compatible input format enum
#[derive(Debug, Clone, Copy, ValueEnum)]
enum CliFormat {
    /// Comma-separated values
    Csv,
    /// Tab-separated values
    Tsv,
    /// JSON array of objects, or newline-delimited JSON
    Json,
}

impl From<CliFormat> for LoadFormat {
    fn from(cli: CliFormat) -> Self {
        match cli {
            CliFormat::Csv => LoadFormat::Csv,
            CliFormat::Tsv => LoadFormat::Tsv,
            CliFormat::Json => LoadFormat::Json,
        }
    }
}

#[derive(Parser, Debug)]
#[command(
    version,
    about = "Infer the semantic type of every column in a dataset",
    long_about = "Labels each column as Date, Price, Telephone Number, Email Address, \
                  Link (URL), Country, City or Name or Text, counts labels, and reports \
                  missing values.\n\n\
                  EXAMPLES:\n  \
                  column-classifier data1.csv\n  \
                  column-classifier export.json --json | jq .type_counts"
)]
struct Args {
    /// Path to the dataset
    #[arg(default_value = "data1.csv")]
    path: PathBuf,

    /// Input format (inferred from the file extension when omitted)
    #[arg(short, long, value_enum)]
    format: Option<CliFormat>,

    /// Print the result as JSON instead of the text report
    #[arg(long)]
    json: bool,

    /// Log level (trace, debug, info, warn, error); RUST_LOG takes precedence
    #[arg(short, long, default_value = "warn")]
    log_level: String,
}

/// Initialize the tracing subscriber. Logs go to stderr so stdout only carries the report.
fn init_logging(level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(&args.log_level);
    debug!(?args, "starting");

    let options = LoadOptions {
        format: args.format.map(Into::into),
        observer: Some(Arc::new(TracingObserver)),
    };
    let dataset = load_from_path(&args.path, &options)
        .with_context(|| format!("failed to load dataset from {}", args.path.display()))?;

    let result = ColumnClassifier::new().classify(&dataset);

    let stdout = io::stdout().lock();
    if args.json {
        write_json(stdout, &result).context("failed to write JSON report")?;
    } else {
        write_text(stdout, &result).context("failed to write report")?;
    }

    Ok(())
}
