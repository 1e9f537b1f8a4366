use crate::error::{Result, SheetError};
use calamine::{Data, Reader, Xlsx};
use gridnorm_core::Grid;
use std::io::Cursor;

/// Render a calamine cell as text
fn data_to_text(data: &Data) -> String {
    match data {
        Data::Empty => String::new(),
        Data::Bool(true) => "TRUE".to_string(),
        Data::Bool(false) => "FALSE".to_string(),
        Data::Int(i) => i.to_string(),
        Data::Float(f) => f.to_string(),
        Data::String(s) => s.clone(),
        // Excel stores dates as days since 1899-12-30
        Data::DateTime(dt) => dt.as_f64().to_string(),
        Data::DateTimeIso(s) => s.clone(),
        Data::DurationIso(s) => s.clone(),
        Data::Error(e) => format!("#ERROR: {e:?}"),
    }
}

/// Read the first worksheet of an OOXML workbook (xlsx, xlsm, xltx, xltm, xlam).
///
/// Cells come back as text. The used range is re-anchored at A1, so blank
/// leading rows and columns stay in the grid, and trailing blank cells of
/// each row are dropped. A workbook without worksheets yields an empty grid.
pub fn read_workbook(bytes: &[u8]) -> Result<Grid> {
    let mut workbook =
        Xlsx::new(Cursor::new(bytes)).map_err(|e| SheetError::Workbook(e.to_string()))?;

    let Some(sheet_name) = workbook.sheet_names().first().cloned() else {
        return Ok(Grid::new());
    };

    let range = workbook
        .worksheet_range(&sheet_name)
        .map_err(|e| SheetError::Workbook(e.to_string()))?;

    let mut grid = Grid::new();
    let Some((start_row, start_col)) = range.start() else {
        return Ok(grid);
    };

    for _ in 0..start_row {
        grid.push_row(Vec::<String>::new());
    }

    for row in range.rows() {
        let mut cells: Vec<String> = std::iter::repeat(String::new())
            .take(start_col as usize)
            .chain(row.iter().map(data_to_text))
            .collect();
        while cells.last().is_some_and(String::is_empty) {
            cells.pop();
        }
        grid.push_row(cells);
    }

    tracing::debug!(sheet = %sheet_name, rows = grid.row_count(), "decoded workbook");
    Ok(grid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_xlsxwriter::Workbook;

    #[test]
    fn test_cell_rendering() {
        assert_eq!(data_to_text(&Data::Empty), "");
        assert_eq!(data_to_text(&Data::Bool(true)), "TRUE");
        assert_eq!(data_to_text(&Data::Int(7)), "7");
        assert_eq!(data_to_text(&Data::Float(42.0)), "42");
        assert_eq!(data_to_text(&Data::Float(3.5)), "3.5");
        assert_eq!(data_to_text(&Data::String("x".to_string())), "x");
    }

    #[test]
    fn test_read_first_sheet_only() {
        let mut workbook = Workbook::new();
        let first = workbook.add_worksheet();
        first.write_string(0, 0, "Name").unwrap();
        first.write_string(1, 0, "Alice").unwrap();
        let second = workbook.add_worksheet();
        second.write_string(0, 0, "Other").unwrap();
        let bytes = workbook.save_to_buffer().unwrap();

        let grid = read_workbook(&bytes).unwrap();
        assert_eq!(grid.into_rows(), vec![vec!["Name"], vec!["Alice"]]);
    }

    #[test]
    fn test_range_reanchored_at_a1() {
        let mut workbook = Workbook::new();
        let sheet = workbook.add_worksheet();
        sheet.write_string(1, 1, "id").unwrap();
        sheet.write_number(2, 1, 5).unwrap();
        let bytes = workbook.save_to_buffer().unwrap();

        let grid = read_workbook(&bytes).unwrap();
        assert_eq!(
            grid.into_rows(),
            vec![vec![], vec!["", "id"], vec!["", "5"]]
        );
    }

    #[test]
    fn test_trailing_blank_cells_dropped() {
        let mut workbook = Workbook::new();
        let sheet = workbook.add_worksheet();
        sheet.write_string(0, 0, "a").unwrap();
        sheet.write_string(0, 1, "b").unwrap();
        sheet.write_string(0, 2, "c").unwrap();
        sheet.write_string(1, 0, "1").unwrap();
        let bytes = workbook.save_to_buffer().unwrap();

        let grid = read_workbook(&bytes).unwrap();
        assert_eq!(grid.rows()[1], vec!["1"]);
    }

    #[test]
    fn test_not_a_workbook() {
        let err = read_workbook(b"name,age\n").unwrap_err();
        assert!(matches!(err, SheetError::Workbook(_)));
    }
}
