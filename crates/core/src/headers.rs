//! Header resolution: overrides, blank-name synthesis and deduplication.

use crate::overrides::HeaderOverrides;
use std::collections::HashMap;

/// Prefix of generated header names (`header1`, `header2`, ...).
pub const SYNTHETIC_HEADER_PREFIX: &str = "header";
/// Infix placed between a repeated header and its occurrence count.
pub const DUPLICATE_INFIX: &str = "_dupli";

/// An ordered set of unique, non-empty column names.
///
/// The set owns the synthetic-name counter, so names generated while rows are
/// processed continue the numbering started while the header row was
/// resolved. Names are only ever appended.
#[derive(Debug, Clone, Default)]
pub struct HeaderSet {
    names: Vec<String>,
    /// Occurrence count per emitted name, used to number repeats.
    occurrences: HashMap<String, usize>,
    synthesized: usize,
}

impl HeaderSet {
    /// Create an empty header set
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty header set with room for `capacity` names
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            names: Vec::with_capacity(capacity),
            occurrences: HashMap::with_capacity(capacity),
            synthesized: 0,
        }
    }

    /// Append a raw header: trimmed, synthesized if blank, suffixed if taken.
    pub fn push(&mut self, raw: &str) {
        let cleaned = raw.trim();
        let base = if cleaned.is_empty() {
            self.next_synthetic()
        } else {
            cleaned.to_string()
        };
        let name = self.unique_name(base);
        self.names.push(name);
    }

    /// Append a generated `header{N}` name.
    pub fn push_synthetic(&mut self) {
        let base = self.next_synthetic();
        let name = self.unique_name(base);
        self.names.push(name);
    }

    /// Resolved names in column order
    #[must_use]
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Consume the set, returning the names in column order
    #[must_use]
    pub fn into_names(self) -> Vec<String> {
        self.names
    }

    /// Number of columns
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether the set has no columns
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Whether `name` is already a column
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.occurrences.contains_key(name)
    }

    /// How many `header{N}` names have been generated so far
    #[must_use]
    pub fn synthesized(&self) -> usize {
        self.synthesized
    }

    fn next_synthetic(&mut self) -> String {
        self.synthesized += 1;
        format!("{SYNTHETIC_HEADER_PREFIX}{}", self.synthesized)
    }

    fn unique_name(&mut self, base: String) -> String {
        let Some(mut count) = self.occurrences.get(&base).copied() else {
            self.occurrences.insert(base.clone(), 1);
            return base;
        };

        // A suffixed name may already exist as a literal header.
        let candidate = loop {
            let candidate = format!("{base}{DUPLICATE_INFIX}{count}");
            count += 1;
            if !self.occurrences.contains_key(&candidate) {
                break candidate;
            }
        };

        self.occurrences.insert(base, count);
        self.occurrences.insert(candidate.clone(), 1);
        candidate
    }
}

/// Resolve a raw header row into unique, non-empty names.
///
/// Overrides replace the text at their position first; positions beyond the
/// header row are ignored. The result has exactly one name per input header.
pub fn resolve_headers<S: AsRef<str>>(headers: &[S], overrides: &HeaderOverrides) -> HeaderSet {
    let mut set = HeaderSet::with_capacity(headers.len());
    for (index, raw) in headers.iter().enumerate() {
        set.push(overrides.get(index).unwrap_or(raw.as_ref()));
    }

    tracing::debug!(
        columns = set.len(),
        synthesized = set.synthesized(),
        overrides = overrides.len(),
        "resolved header row"
    );
    set
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolve(headers: &[&str]) -> Vec<String> {
        resolve_headers(headers, &HeaderOverrides::new()).into_names()
    }

    #[test]
    fn test_clean_headers_unchanged() {
        assert_eq!(resolve(&["a", "b"]), vec!["a", "b"]);
    }

    #[test]
    fn test_trims_headers() {
        assert_eq!(resolve(&["  a ", "\tb"]), vec!["a", "b"]);
    }

    #[test]
    fn test_duplicates_numbered_in_order() {
        assert_eq!(resolve(&["x", "x", "x"]), vec!["x", "x_dupli1", "x_dupli2"]);
    }

    #[test]
    fn test_blank_headers_share_counter() {
        assert_eq!(
            resolve(&["", "", "name"]),
            vec!["header1", "header2", "name"]
        );
        assert_eq!(
            resolve(&["", "name", "  "]),
            vec!["header1", "name", "header2"]
        );
    }

    #[test]
    fn test_synthetic_collides_with_literal() {
        assert_eq!(resolve(&["header1", ""]), vec!["header1", "header1_dupli1"]);
        assert_eq!(resolve(&["", "header1"]), vec!["header1", "header1_dupli1"]);
    }

    #[test]
    fn test_suffix_skips_taken_names() {
        assert_eq!(
            resolve(&["x", "x_dupli1", "x"]),
            vec!["x", "x_dupli1", "x_dupli2"]
        );
        assert_eq!(
            resolve(&["x", "x", "x_dupli1"]),
            vec!["x", "x_dupli1", "x_dupli1_dupli1"]
        );
    }

    #[test]
    fn test_overrides_applied_before_cleaning() {
        let overrides: HeaderOverrides = [(1, "  Renamed  ")].into_iter().collect();
        let names = resolve_headers(&["a", "b"], &overrides).into_names();
        assert_eq!(names, vec!["a", "Renamed"]);
    }

    #[test]
    fn test_blank_override_synthesizes() {
        let overrides: HeaderOverrides = [(0, "   ")].into_iter().collect();
        let names = resolve_headers(&["a", "b"], &overrides).into_names();
        assert_eq!(names, vec!["header1", "b"]);
    }

    #[test]
    fn test_override_out_of_range_ignored() {
        let overrides: HeaderOverrides = [(5, "z")].into_iter().collect();
        let names = resolve_headers(&["a", "b"], &overrides).into_names();
        assert_eq!(names, vec!["a", "b"]);
    }

    #[test]
    fn test_override_can_create_duplicate() {
        let overrides: HeaderOverrides = [(1, "a")].into_iter().collect();
        let names = resolve_headers(&["a", "b"], &overrides).into_names();
        assert_eq!(names, vec!["a", "a_dupli1"]);
    }

    #[test]
    fn test_push_synthetic_continues_numbering() {
        let mut set = resolve_headers(&["", "b"], &HeaderOverrides::new());
        set.push_synthetic();
        set.push_synthetic();
        assert_eq!(set.names(), &["header1", "b", "header2", "header3"]);
        assert_eq!(set.synthesized(), 3);
    }

    #[test]
    fn test_push_synthetic_avoids_literal_name() {
        let mut set = resolve_headers(&["header1"], &HeaderOverrides::new());
        set.push_synthetic();
        assert_eq!(set.names(), &["header1", "header1_dupli1"]);
        assert!(set.contains("header1_dupli1"));
    }

    #[test]
    fn test_empty_header_row() {
        let set = resolve_headers::<&str>(&[], &HeaderOverrides::new());
        assert!(set.is_empty());
    }
}
