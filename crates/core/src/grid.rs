use serde::{Deserialize, Serialize};

/// A decoded table of text cells (row-major, rows may differ in length)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Grid {
    rows: Vec<Vec<String>>,
}

impl Grid {
    /// Create an empty grid
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a grid from row data
    pub fn from_data<T: Into<String>>(data: Vec<Vec<T>>) -> Self {
        data.into_iter()
            .map(|row| row.into_iter().map(Into::into).collect())
            .collect()
    }

    /// Append a row
    pub fn push_row<T: Into<String>>(&mut self, row: Vec<T>) {
        self.rows.push(row.into_iter().map(Into::into).collect());
    }

    /// All rows, header row included
    #[must_use]
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Get a row by index
    #[must_use]
    pub fn row(&self, index: usize) -> Option<&[String]> {
        self.rows.get(index).map(Vec::as_slice)
    }

    /// Number of rows
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Length of the longest row
    #[must_use]
    pub fn max_width(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Whether the grid has no rows
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Consume the grid, returning its rows
    #[must_use]
    pub fn into_rows(self) -> Vec<Vec<String>> {
        self.rows
    }
}

impl From<Vec<Vec<String>>> for Grid {
    fn from(rows: Vec<Vec<String>>) -> Self {
        Self { rows }
    }
}

impl FromIterator<Vec<String>> for Grid {
    fn from_iter<I: IntoIterator<Item = Vec<String>>>(iter: I) -> Self {
        Self {
            rows: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_data() {
        let grid = Grid::from_data(vec![vec!["a", "b"], vec!["1"]]);
        assert_eq!(grid.row_count(), 2);
        assert_eq!(grid.max_width(), 2);
        assert_eq!(grid.row(1), Some(&["1".to_string()][..]));
        assert_eq!(grid.row(2), None);
    }

    #[test]
    fn test_push_row() {
        let mut grid = Grid::new();
        assert!(grid.is_empty());
        grid.push_row(vec!["x"]);
        grid.push_row(vec![String::from("y"), String::from("z")]);
        assert_eq!(grid.into_rows(), vec![vec!["x"], vec!["y", "z"]]);
    }

    #[test]
    fn test_json_shape() {
        let grid: Grid = serde_json::from_str(r#"[["a","b"],["1"]]"#).unwrap();
        assert_eq!(grid, Grid::from_data(vec![vec!["a", "b"], vec!["1"]]));
        assert_eq!(serde_json::to_string(&grid).unwrap(), r#"[["a","b"],["1"]]"#);
    }
}
