use crate::error::{Result, SheetError};
use std::path::Path;

/// File extensions decoded as OOXML workbooks (first worksheet only)
pub const WORKBOOK_EXTENSIONS: &[&str] = &["xlam", "xlsm", "xlsx", "xltm", "xltx"];

/// Source file formats the decoders understand
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    /// Comma-separated text
    Csv,
    /// Excel workbook
    Workbook,
}

impl SourceFormat {
    /// Detect the format from a file extension, with or without the leading dot.
    ///
    /// Matching is case-insensitive.
    pub fn from_extension(extension: &str) -> Result<Self> {
        let ext = extension.trim_start_matches('.').to_ascii_lowercase();
        if ext == "csv" {
            Ok(Self::Csv)
        } else if WORKBOOK_EXTENSIONS.contains(&ext.as_str()) {
            Ok(Self::Workbook)
        } else {
            Err(SheetError::UnsupportedFormat {
                extension: extension.to_string(),
            })
        }
    }

    /// Detect the format from a path or file name
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let ext = path
            .as_ref()
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default();
        Self::from_extension(ext)
    }
}
