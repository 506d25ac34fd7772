use crate::grid::cell;
use crate::grid::RawGrid;

/// Reads a section heading from the first row of a grid slice.
/// Non-blank cells are trimmed and joined with single spaces; a slice with
/// no rows or no usable cells yields an empty title.
pub fn extract_title(grid: &RawGrid) -> String {
    grid.rows()
        .first()
        .map(|row| {
            row.iter()
                .filter(|value| !cell::is_blank(value.as_ref()))
                .map(|value| cell::coerce(value.as_ref()))
                .collect::<Vec<String>>()
                .join(" ")
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[&str]) -> RawGrid {
        RawGrid::new(vec![cells.iter().map(|value| Some(value.to_string())).collect()])
    }

    #[test]
    fn joins_non_blank_cells() {
        assert_eq!(extract_title(&row(&["  Result ", "", "Summary"])), "Result Summary");
    }

    #[test]
    fn single_cell_title() {
        assert_eq!(extract_title(&row(&["District Totals"])), "District Totals");
    }

    #[test]
    fn empty_inputs() {
        assert_eq!(extract_title(&RawGrid::default()), "");
        assert_eq!(extract_title(&row(&["", "   "])), "");
    }
}
