//! # gridnorm-sheet
//!
//! Decoders that turn source files into [`gridnorm_core::Grid`]s of text
//! cells: CSV via the `csv` crate and the first worksheet of an OOXML
//! workbook via `calamine`.
//!
//! ```
//! use gridnorm_sheet::{decode, SourceFormat};
//!
//! let format = SourceFormat::from_path("people.csv").unwrap();
//! let grid = decode(format, b"name,age\nAlice,30\n").unwrap();
//! assert_eq!(grid.row_count(), 2);
//! ```

mod csv;
mod error;
mod format;
mod xlsx;

use gridnorm_core::Grid;
use std::path::Path;

/// Re-export CSV reading.
pub use csv::{read_csv, read_csv_file, read_csv_str, CsvOptions};
/// Re-export sheet error types.
pub use error::{Result, SheetError};
/// Re-export format detection.
pub use format::{SourceFormat, WORKBOOK_EXTENSIONS};
/// Re-export workbook reading.
pub use xlsx::read_workbook;

/// Decode raw file bytes of a known format
pub fn decode(format: SourceFormat, bytes: &[u8]) -> Result<Grid> {
    match format {
        SourceFormat::Csv => read_csv(bytes, &CsvOptions::default()),
        SourceFormat::Workbook => read_workbook(bytes),
    }
}

/// Decode raw bytes, detecting the format from the file name
pub fn decode_named(file_name: &str, bytes: &[u8]) -> Result<Grid> {
    decode(SourceFormat::from_path(file_name)?, bytes)
}

/// Read and decode a file, detecting the format from its extension
pub fn read_path<P: AsRef<Path>>(path: P) -> Result<Grid> {
    let format = SourceFormat::from_path(path.as_ref())?;
    let bytes = std::fs::read(path.as_ref())?;
    decode(format, &bytes)
}
