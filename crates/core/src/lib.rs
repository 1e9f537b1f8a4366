//! # gridnorm-core
//!
//! Turns a decoded spreadsheet grid into well-formed records.
//!
//! The input is a grid of text cells whose first row holds the column names.
//! Normalization reconciles whatever the grid looks like into one record per
//! data row, keyed by unique, non-empty header names:
//!
//! - blank headers become `header1`, `header2`, ...
//! - repeated headers become `name_dupli1`, `name_dupli2`, ...
//! - cells a short row lacks become `emptyattri1`, `emptyattri2`, ...
//! - non-empty cells past the last known column get a new `header{N}`
//!
//! Everything here is pure: no file decoding and no I/O.
//!
//! # Examples
//!
//! ```
//! use gridnorm_core::{normalize_grid, Grid, HeaderOverrides, NormalizeOptions};
//!
//! let grid = Grid::from_data(vec![
//!     vec![" Name", "Name", ""],
//!     vec!["Alice", "Bob"],
//!     vec!["Carl", "Dan", "Extra"],
//! ]);
//! let overrides = HeaderOverrides::from_json_str(r#"{"2": "City"}"#).unwrap();
//!
//! let result = normalize_grid(&grid, &overrides, NormalizeOptions::default());
//! assert_eq!(result.headers(), &["Name", "Name_dupli1", "City"]);
//!
//! let records = result.records();
//! assert_eq!(records[0]["City"], "emptyattri1");
//! assert_eq!(records[1]["City"], "Extra");
//! ```
//!
//! The two stages can also be driven separately:
//!
//! ```
//! use gridnorm_core::{normalize_rows, resolve_headers, HeaderOverrides};
//!
//! let headers = resolve_headers(&["x", "x", ""], &HeaderOverrides::new());
//! assert_eq!(headers.names(), &["x", "x_dupli1", "header1"]);
//!
//! let (names, rows) = normalize_rows(headers, &[vec!["1", "2", "3", "4"]], false);
//! assert_eq!(names, vec!["x", "x_dupli1", "header1", "header2"]);
//! assert_eq!(rows[0], vec!["1", "2", "3", "4"]);
//! ```

mod cell;
mod error;
mod grid;
mod headers;
mod normalize;
pub mod observer;
mod overrides;
mod rows;

/// Re-export cell cleanup helpers.
pub use cell::{clean_cell, reformat_cell};
/// Re-export core error types.
pub use error::{CoreError, Result};
/// Re-export the grid type.
pub use grid::Grid;
/// Re-export header resolution.
pub use headers::{resolve_headers, HeaderSet, DUPLICATE_INFIX, SYNTHETIC_HEADER_PREFIX};
/// Re-export the normalization entry points.
pub use normalize::{normalize_grid, normalize_grid_observed, NormalizeOptions, Normalized, Record};
/// Re-export observer types.
pub use observer::{NoopObserver, NormalizeObserver, NormalizeSummary, TracingObserver};
/// Re-export header overrides.
pub use overrides::HeaderOverrides;
/// Re-export row normalization.
pub use rows::{normalize_rows, RowNormalizer, PLACEHOLDER_PREFIX};
