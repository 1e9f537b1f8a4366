//! Decode a CSV and a workbook from disk and print the normalized records.
//!
//! Run with: cargo run --example normalize_demo -p gridnorm-sheet

use gridnorm_core::{normalize_grid, HeaderOverrides, NormalizeOptions};
use rust_xlsxwriter::Workbook;
use std::env;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== gridnorm decode demo ===\n");

    let temp_dir = env::temp_dir();

    // CSV with a blank header, a duplicate and a ragged row
    let csv_path = temp_dir.join("gridnorm_demo.csv");
    std::fs::write(&csv_path, " Name,Name,\nAlice,Bob\nCarl,Dan,Extra,More\n")?;

    let grid = gridnorm_sheet::read_path(&csv_path)?;
    println!("CSV grid: {:?}", grid.rows());

    let overrides = HeaderOverrides::from_json_str(r#"{"2":"City"}"#)?;
    let result = normalize_grid(&grid, &overrides, NormalizeOptions::default());
    println!("Headers: {:?}", result.headers());
    println!("{}\n", serde_json::to_string_pretty(&result.records())?);

    // Workbook whose first data row is not a header
    let xlsx_path = temp_dir.join("gridnorm_demo.xlsx");
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.write_string(0, 0, "Oslo")?;
    sheet.write_number(0, 1, 709_000)?;
    sheet.write_string(1, 0, "Bergen, Vestland")?;
    sheet.write_boolean(1, 1, true)?;
    workbook.save(&xlsx_path)?;

    let grid = gridnorm_sheet::read_path(&xlsx_path)?;
    let options = NormalizeOptions::default()
        .with_first_row_as_data(true)
        .with_trim_data(true);
    let result = normalize_grid(&grid, &HeaderOverrides::new(), options);
    println!("Headers: {:?}", result.headers());
    println!("{}", serde_json::to_string_pretty(&result.records())?);

    std::fs::remove_file(&csv_path)?;
    std::fs::remove_file(&xlsx_path)?;
    Ok(())
}
