use gridnorm_core::{
    normalize_grid, reformat_cell, resolve_headers, Grid, HeaderOverrides, NormalizeOptions,
};
use proptest::prelude::*;
use std::collections::HashSet;

fn header_text() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        Just("  ".to_string()),
        Just("x".to_string()),
        Just("x_dupli1".to_string()),
        Just("header1".to_string()),
        Just("header2_dupli1".to_string()),
        "[a-c ]{0,3}",
    ]
}

fn cell_text() -> impl Strategy<Value = String> {
    prop_oneof![Just(String::new()), "[a-z ,]{0,6}"]
}

proptest! {
    #[test]
    fn resolved_headers_are_unique_and_non_empty(
        headers in prop::collection::vec(header_text(), 0..12),
        overrides in prop::collection::btree_map(0usize..16, header_text(), 0..4),
    ) {
        let overrides: HeaderOverrides = overrides.into_iter().collect();
        let resolved = resolve_headers(headers.as_slice(), &overrides);

        prop_assert_eq!(resolved.len(), headers.len());
        let mut seen = HashSet::new();
        for name in resolved.names() {
            prop_assert!(!name.is_empty());
            prop_assert!(seen.insert(name.clone()), "duplicate header {}", name);
        }
    }

    #[test]
    fn every_record_has_one_entry_per_header(
        rows in prop::collection::vec(prop::collection::vec(cell_text(), 0..6), 0..8),
        trim_data in any::<bool>(),
        pad_rows in any::<bool>(),
    ) {
        let grid = Grid::from(rows);
        let options = NormalizeOptions::default()
            .with_trim_data(trim_data)
            .with_pad_rows(pad_rows);
        let result = normalize_grid(&grid, &HeaderOverrides::new(), options);

        let unique: HashSet<&String> = result.headers().iter().collect();
        prop_assert_eq!(unique.len(), result.headers().len());
        prop_assert!(result.headers().iter().all(|h| !h.is_empty()));
        prop_assert_eq!(result.len(), grid.row_count().saturating_sub(1));

        for (row, record) in result.rows().iter().zip(result.records()) {
            prop_assert_eq!(record.len(), result.headers().len());
            prop_assert!(row.len() <= result.headers().len());
            if pad_rows {
                prop_assert_eq!(row.len(), result.headers().len());
            }
        }
    }

    #[test]
    fn reformat_is_idempotent(value in "[a-z ,]{0,12}") {
        let once = reformat_cell(&value);
        prop_assert_eq!(reformat_cell(&once), once.clone());
    }
}
