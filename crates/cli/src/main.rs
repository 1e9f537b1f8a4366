//! # gridnorm-cli
//!
//! Command-line interface for the gridnorm normalizer.

use anyhow::{Context, Result};
use clap::Parser;
use gridnorm_core::{
    normalize_grid_observed, HeaderOverrides, NormalizeOptions, Normalized, TracingObserver,
};
use std::io::Write;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// gridnorm - turn a CSV or Excel sheet into uniform JSON records
#[derive(Parser)]
#[command(name = "gridnorm")]
#[command(author, version, about = "Normalize CSV and Excel sheets into records", long_about = None)]
struct Cli {
    /// CSV or Excel workbook to normalize
    #[arg(value_name = "FILE")]
    file: PathBuf,

    /// Header overrides as a JSON object of position to label, e.g. '{"0":"Id"}'
    #[arg(short = 'l', long = "header-labels", value_name = "JSON")]
    header_labels: Option<String>,

    /// Treat the first row as data and synthesize every header
    #[arg(long)]
    first_row_as_data: bool,

    /// Trim comma-separated pieces inside every data cell
    #[arg(long)]
    trim_data: bool,

    /// Fill rows shorter than the header row with placeholders
    #[arg(long)]
    pad_rows: bool,

    /// Reject overrides that point past the header row
    #[arg(long)]
    strict_overrides: bool,

    /// Output format (json, pretty, csv)
    #[arg(short = 'f', long = "format", default_value = "json")]
    format: OutputFormat,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

/// Output format for results.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
enum OutputFormat {
    /// Compact JSON array of records (default)
    #[default]
    Json,
    /// Indented JSON array of records
    Pretty,
    /// Header row followed by one line per record
    Csv,
}

impl Cli {
    fn options(&self) -> NormalizeOptions {
        NormalizeOptions::default()
            .with_first_row_as_data(self.first_row_as_data)
            .with_trim_data(self.trim_data)
            .with_pad_rows(self.pad_rows)
    }

    fn overrides(&self) -> Result<HeaderOverrides> {
        match &self.header_labels {
            Some(json) => {
                HeaderOverrides::from_json_str(json).context("Invalid JSON for --header-labels")
            }
            None => Ok(HeaderOverrides::new()),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
            )
            .with_writer(std::io::stderr)
            .init();
    }

    let normalized = run(&cli)?;
    tracing::debug!(format = ?cli.format, records = normalized.len(), "writing output");

    let stdout = std::io::stdout();
    write_output(stdout.lock(), &normalized, cli.format)
}

/// Read, validate and normalize the input file.
fn run(cli: &Cli) -> Result<Normalized> {
    let overrides = cli.overrides()?;

    let grid = gridnorm_sheet::read_path(&cli.file)
        .with_context(|| format!("Failed to read file: {}", cli.file.display()))?;
    tracing::info!(file = %cli.file.display(), rows = grid.row_count(), "read input");

    if cli.strict_overrides {
        let header_count = grid.row(0).map_or(0, <[String]>::len);
        overrides.validate(header_count)?;
        tracing::debug!(header_count, overrides = overrides.len(), "header overrides in range");
    }

    let observer = TracingObserver::with_source(cli.file.display().to_string());
    Ok(normalize_grid_observed(&grid, &overrides, cli.options(), &observer))
}

fn write_output<W: Write>(mut out: W, normalized: &Normalized, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            serde_json::to_writer(&mut out, &normalized.records())?;
            writeln!(out)?;
        }
        OutputFormat::Pretty => {
            serde_json::to_writer_pretty(&mut out, &normalized.records())?;
            writeln!(out)?;
        }
        OutputFormat::Csv => {
            let mut writer = csv::Writer::from_writer(out);
            writer.write_record(normalized.headers())?;
            for record in normalized.records() {
                writer.write_record(record.values())?;
            }
            writer.flush()?;
        }
    }
    Ok(())
}
