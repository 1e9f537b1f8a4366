use crate::error::Result;
use gridnorm_core::Grid;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// CSV reader options
#[derive(Debug, Clone)]
pub struct CsvOptions {
    /// Field delimiter (default: ',')
    pub delimiter: u8,
    /// Quote character (default: '"')
    pub quote: u8,
}

impl Default for CsvOptions {
    fn default() -> Self {
        CsvOptions {
            delimiter: b',',
            quote: b'"',
        }
    }
}

impl CsvOptions {
    /// Create options for TSV (tab-separated values)
    #[must_use]
    pub fn tsv() -> Self {
        CsvOptions {
            delimiter: b'\t',
            ..Default::default()
        }
    }

    /// Set the delimiter
    #[must_use]
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Set the quote character
    #[must_use]
    pub fn with_quote(mut self, quote: u8) -> Self {
        self.quote = quote;
        self
    }
}

/// Read every CSV record as a row of text cells.
///
/// No header handling happens here and rows may have different lengths.
/// Invalid UTF-8 is replaced rather than rejected.
pub fn read_csv<R: Read>(reader: R, options: &CsvOptions) -> Result<Grid> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .delimiter(options.delimiter)
        .quote(options.quote)
        .has_headers(false) // The normalizer decides what the header row is
        .flexible(true)
        .from_reader(reader);

    let mut grid = Grid::new();
    for result in csv_reader.byte_records() {
        let record = result?;
        let row: Vec<String> = record
            .iter()
            .map(|field| String::from_utf8_lossy(field).into_owned())
            .collect();
        grid.push_row(row);
    }

    tracing::debug!(rows = grid.row_count(), "decoded csv");
    Ok(grid)
}

/// Read a CSV string
pub fn read_csv_str(content: &str) -> Result<Grid> {
    read_csv(content.as_bytes(), &CsvOptions::default())
}

/// Read a CSV file
pub fn read_csv_file<P: AsRef<Path>>(path: P, options: &CsvOptions) -> Result<Grid> {
    let file = File::open(path.as_ref())?;
    read_csv(BufReader::new(file), options)
}
