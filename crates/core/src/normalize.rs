use crate::grid::Grid;
use crate::headers::resolve_headers;
use crate::observer::{NoopObserver, NormalizeObserver, NormalizeSummary};
use crate::overrides::HeaderOverrides;
use crate::rows::RowNormalizer;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::time::Instant;

/// One normalized row keyed by header name, in header order.
pub type Record = IndexMap<String, String>;

/// Options for [`normalize_grid`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NormalizeOptions {
    /// Treat the first grid row as data and synthesize every header
    pub first_row_as_data: bool,
    /// Normalize comma-separated sub-values inside cells
    pub trim_data: bool,
    /// Widen rows processed before the header list grew to the final width
    pub pad_rows: bool,
}

impl NormalizeOptions {
    /// Set whether the first row is data rather than headers
    #[must_use]
    pub fn with_first_row_as_data(mut self, first_row_as_data: bool) -> Self {
        self.first_row_as_data = first_row_as_data;
        self
    }

    /// Set whether cell sub-values are reformatted
    #[must_use]
    pub fn with_trim_data(mut self, trim_data: bool) -> Self {
        self.trim_data = trim_data;
        self
    }

    /// Set whether early rows are padded to the final header count
    #[must_use]
    pub fn with_pad_rows(mut self, pad_rows: bool) -> Self {
        self.pad_rows = pad_rows;
        self
    }
}

/// Output of a normalization run: final headers plus one row per data row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Normalized {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Normalized {
    /// Final header names
    #[must_use]
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Normalized rows. Without padding, a row is only as wide as the header
    /// list was when that row was processed.
    #[must_use]
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Number of data rows
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether there are no data rows
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Assemble one record per row with an entry for every final header.
    ///
    /// Columns a row never had (because it was processed before the header
    /// list grew) map to the empty string.
    #[must_use]
    pub fn records(&self) -> Vec<Record> {
        self.rows
            .iter()
            .map(|row| {
                self.headers
                    .iter()
                    .enumerate()
                    .map(|(j, header)| (header.clone(), row.get(j).cloned().unwrap_or_default()))
                    .collect()
            })
            .collect()
    }
}

/// Normalize a grid whose first row holds the headers.
///
/// Never fails: blank headers are synthesized, duplicates suffixed, short
/// rows filled with placeholders and overflowing cells given new headers.
/// An empty grid produces an empty result.
pub fn normalize_grid(grid: &Grid, overrides: &HeaderOverrides, options: NormalizeOptions) -> Normalized {
    normalize_grid_observed(grid, overrides, options, &NoopObserver)
}

/// [`normalize_grid`] with an observer notified before and after the run.
pub fn normalize_grid_observed(
    grid: &Grid,
    overrides: &HeaderOverrides,
    options: NormalizeOptions,
    observer: &dyn NormalizeObserver,
) -> Normalized {
    observer.on_start(grid.row_count());
    let started = Instant::now();

    let (normalized, summary) = run(grid, overrides, options);

    observer.on_finish(&summary, started.elapsed());
    normalized
}

fn run(
    grid: &Grid,
    overrides: &HeaderOverrides,
    options: NormalizeOptions,
) -> (Normalized, NormalizeSummary) {
    let Some((first, rest)) = grid.rows().split_first() else {
        return (Normalized::default(), NormalizeSummary::default());
    };

    let (headers, data) = if options.first_row_as_data {
        let blank = vec![""; first.len()];
        (resolve_headers(blank.as_slice(), overrides), grid.rows())
    } else {
        (resolve_headers(first.as_slice(), overrides), rest)
    };

    let mut normalizer = RowNormalizer::new(headers, options.trim_data);
    for row in data {
        normalizer.push_row(row.as_slice());
    }
    if options.pad_rows {
        normalizer.pad_rows();
    }

    let placeholders = normalizer.placeholders();
    let (headers, rows) = normalizer.finish();
    let summary = NormalizeSummary {
        rows: rows.len(),
        headers: headers.len(),
        synthetic_headers: headers.synthesized(),
        placeholders,
    };

    (
        Normalized {
            headers: headers.into_names(),
            rows,
        },
        summary,
    )
}
