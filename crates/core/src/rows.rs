//! Row normalization against a growing header set.

use crate::cell::clean_cell;
use crate::headers::HeaderSet;

/// Prefix of generated values for cells a row does not have (`emptyattri1`, ...).
pub const PLACEHOLDER_PREFIX: &str = "emptyattri";

/// Normalizes data rows one at a time, in input order.
///
/// Each row is sized to the header count at the moment it is pushed. A row
/// carrying non-empty cells past the known columns appends synthetic headers,
/// and every later row is sized to include them. Rows pushed earlier keep
/// their width unless [`RowNormalizer::pad_rows`] is called.
#[derive(Debug)]
pub struct RowNormalizer {
    headers: HeaderSet,
    reformat: bool,
    placeholders: usize,
    rows: Vec<Vec<String>>,
}

impl RowNormalizer {
    /// Start a pass over rows for the given resolved headers.
    ///
    /// `reformat` enables comma sub-value cleanup on in-range cells.
    #[must_use]
    pub fn new(headers: HeaderSet, reformat: bool) -> Self {
        Self {
            headers,
            reformat,
            placeholders: 0,
            rows: Vec::new(),
        }
    }

    /// Normalize one row and append it to the output.
    pub fn push_row<S: AsRef<str>>(&mut self, row: &[S]) {
        let width = self.headers.len();
        let mut out = Vec::with_capacity(width.max(row.len()));
        let mut cells = row.iter();

        for _ in 0..width {
            let value = match cells.next() {
                Some(cell) => clean_cell(cell.as_ref(), self.reformat),
                None => self.next_placeholder(),
            };
            out.push(value);
        }

        // Whatever is left overflows the known columns.
        for extra in cells {
            let value = extra.as_ref().trim();
            if value.is_empty() {
                continue;
            }
            self.headers.push_synthetic();
            out.push(value.to_string());
        }

        self.rows.push(out);
    }

    /// Widen every row to the current header count with further placeholders.
    pub fn pad_rows(&mut self) {
        let width = self.headers.len();
        let mut placeholders = self.placeholders;
        for row in &mut self.rows {
            while row.len() < width {
                placeholders += 1;
                row.push(format!("{PLACEHOLDER_PREFIX}{placeholders}"));
            }
        }
        self.placeholders = placeholders;
    }

    /// Headers as they stand after the rows pushed so far
    #[must_use]
    pub fn headers(&self) -> &HeaderSet {
        &self.headers
    }

    /// Number of placeholder cells generated so far
    #[must_use]
    pub fn placeholders(&self) -> usize {
        self.placeholders
    }

    /// Number of rows pushed so far
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Finish the pass, returning the final headers and normalized rows
    #[must_use]
    pub fn finish(self) -> (HeaderSet, Vec<Vec<String>>) {
        (self.headers, self.rows)
    }

    fn next_placeholder(&mut self) -> String {
        self.placeholders += 1;
        format!("{PLACEHOLDER_PREFIX}{}", self.placeholders)
    }
}

/// Normalize `rows` against `headers` in a single pass.
///
/// Returns the final header names, which may have grown, and the normalized
/// rows. Each row is as wide as the header list was when it was processed.
pub fn normalize_rows<S: AsRef<str>>(
    headers: HeaderSet,
    rows: &[Vec<S>],
    reformat: bool,
) -> (Vec<String>, Vec<Vec<String>>) {
    let mut normalizer = RowNormalizer::new(headers, reformat);
    for row in rows {
        normalizer.push_row(row.as_slice());
    }
    let (headers, rows) = normalizer.finish();
    (headers.into_names(), rows)
}
