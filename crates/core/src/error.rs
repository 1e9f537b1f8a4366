//! Error types for gridnorm.
//!
//! Normalization itself never fails. These errors come from the edges of the
//! core: decoding a header-override payload and strict override validation.

use thiserror::Error;

/// Result type for gridnorm core operations.
pub type Result<T> = std::result::Result<T, CoreError>;

/// Errors raised around the normalization core.
#[derive(Debug, Error)]
pub enum CoreError {
    /// An override names a column the header row does not have.
    #[error("Header override at position {index} is out of range (header row has {header_count} columns)")]
    OverrideOutOfRange { index: usize, header_count: usize },

    /// The override payload is not a JSON object of strings.
    #[error("Invalid header overrides: {0}")]
    InvalidOverrides(#[from] serde_json::Error),
}
