//! Observation hooks around a normalization run.
//!
//! The algorithm itself never logs or times anything. Callers that want
//! timing pass an observer to
//! [`normalize_grid_observed`](crate::normalize_grid_observed).

use std::time::Duration;

/// Counts describing a finished normalization.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NormalizeSummary {
    /// Data rows produced
    pub rows: usize,
    /// Final header count
    pub headers: usize,
    /// `header{N}` names generated, from the header row or from overflow
    pub synthetic_headers: usize,
    /// `emptyattri{N}` cells generated
    pub placeholders: usize,
}

/// Receives notifications around a normalization run.
pub trait NormalizeObserver {
    /// Called before any work, with the number of grid rows (header row included).
    fn on_start(&self, _grid_rows: usize) {}

    /// Called once the result is ready.
    fn on_finish(&self, _summary: &NormalizeSummary, _elapsed: Duration) {}
}

/// Observer that does nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl NormalizeObserver for NoopObserver {}

/// Observer that reports runs through `tracing`.
#[derive(Debug, Clone, Default)]
pub struct TracingObserver {
    source: Option<String>,
}

impl TracingObserver {
    /// Create an observer without a source label
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Label log events with the name of the input (usually a file name)
    #[must_use]
    pub fn with_source(source: impl Into<String>) -> Self {
        Self {
            source: Some(source.into()),
        }
    }
}

impl NormalizeObserver for TracingObserver {
    fn on_start(&self, grid_rows: usize) {
        tracing::debug!(
            source = self.source.as_deref().unwrap_or("-"),
            grid_rows,
            "normalizing grid"
        );
    }

    fn on_finish(&self, summary: &NormalizeSummary, elapsed: Duration) {
        tracing::info!(
            source = self.source.as_deref().unwrap_or("-"),
            rows = summary.rows,
            headers = summary.headers,
            synthetic_headers = summary.synthetic_headers,
            placeholders = summary.placeholders,
            elapsed_us = elapsed.as_micros() as u64,
            "grid normalized"
        );
    }
}
