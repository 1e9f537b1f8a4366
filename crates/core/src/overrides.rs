//! Caller-supplied header overrides.

use crate::error::{CoreError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Replacement header text keyed by zero-based column position.
///
/// Positions past the end of the header row are ignored when headers are
/// resolved. Call [`HeaderOverrides::validate`] to reject them instead.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HeaderOverrides {
    labels: BTreeMap<usize, String>,
}

impl HeaderOverrides {
    /// Create an empty set of overrides
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse overrides from a JSON object such as `{"0": "Id", "2": "City"}`.
    ///
    /// Keys that are not non-negative integers are skipped with a warning.
    /// `null` means no overrides. Anything other than an object of strings is
    /// an error.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let raw: Option<BTreeMap<String, String>> = serde_json::from_str(json)?;
        let mut overrides = Self::new();
        for (key, label) in raw.unwrap_or_default() {
            match key.trim().parse::<usize>() {
                Ok(index) => overrides.insert(index, label),
                Err(_) => {
                    tracing::warn!(key = %key, "ignoring header override with non-numeric position");
                }
            }
        }
        Ok(overrides)
    }

    /// Set the label for a column. Surrounding whitespace is trimmed.
    pub fn insert(&mut self, index: usize, label: impl AsRef<str>) {
        self.labels.insert(index, label.as_ref().trim().to_string());
    }

    /// Get the label for a column, if one was supplied
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&str> {
        self.labels.get(&index).map(String::as_str)
    }

    /// Number of overrides
    #[must_use]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Whether no overrides were supplied
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Iterate overrides in position order
    pub fn iter(&self) -> impl Iterator<Item = (usize, &str)> {
        self.labels.iter().map(|(i, label)| (*i, label.as_str()))
    }

    /// Reject overrides that point past a header row of `header_count` columns.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::OverrideOutOfRange` for the lowest offending position.
    pub fn validate(&self, header_count: usize) -> Result<()> {
        match self.labels.range(header_count..).next() {
            Some((&index, _)) => Err(CoreError::OverrideOutOfRange {
                index,
                header_count,
            }),
            None => Ok(()),
        }
    }
}

impl<S: AsRef<str>> FromIterator<(usize, S)> for HeaderOverrides {
    fn from_iter<I: IntoIterator<Item = (usize, S)>>(iter: I) -> Self {
        let mut overrides = Self::new();
        for (index, label) in iter {
            overrides.insert(index, label);
        }
        overrides
    }
}
