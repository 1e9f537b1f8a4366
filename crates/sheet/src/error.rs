use thiserror::Error;

/// Errors that can occur while decoding a source file into a grid
#[derive(Error, Debug)]
pub enum SheetError {
    #[error("Unsupported file type: {extension:?}")]
    UnsupportedFormat { extension: String },

    #[error("Workbook error: {0}")]
    Workbook(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SheetError>;
