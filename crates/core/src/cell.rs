//! Cell text cleanup.

/// Separator used for comma-delimited sub-values inside a single cell.
const SUB_VALUE_SEPARATOR: char = ',';

/// Trim a cell and, when `reformat` is set, normalize its comma-separated
/// sub-values as well.
#[must_use]
pub fn clean_cell(value: &str, reformat: bool) -> String {
    let trimmed = value.trim();
    if reformat {
        reformat_cell(trimmed)
    } else {
        trimmed.to_string()
    }
}

/// Trim every comma-separated piece of `value` and join them back with a bare
/// comma, so `"a ,  b,c "` becomes `"a,b,c"`.
///
/// Empty pieces are kept: `"a,,b"` stays `"a,,b"`.
#[must_use]
pub fn reformat_cell(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for (i, part) in value.split(SUB_VALUE_SEPARATOR).enumerate() {
        if i > 0 {
            out.push(SUB_VALUE_SEPARATOR);
        }
        out.push_str(part.trim());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_cell_trims() {
        assert_eq!(clean_cell("  hello  ", false), "hello");
        assert_eq!(clean_cell("\tx\n", false), "x");
    }

    #[test]
    fn test_clean_cell_leaves_sub_values_without_reformat() {
        assert_eq!(clean_cell(" a , b ", false), "a , b");
    }

    #[test]
    fn test_reformat_cell() {
        assert_eq!(reformat_cell("a ,  b,c "), "a,b,c");
        assert_eq!(clean_cell(" a ,  b,c ", true), "a,b,c");
    }

    #[test]
    fn test_reformat_is_idempotent() {
        let once = reformat_cell("a,b,c");
        assert_eq!(once, "a,b,c");
        assert_eq!(reformat_cell(&once), "a,b,c");
    }

    #[test]
    fn test_reformat_keeps_empty_pieces() {
        assert_eq!(reformat_cell("a, ,b,"), "a,,b,");
        assert_eq!(reformat_cell(""), "");
    }
}
