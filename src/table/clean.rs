use crate::grid::cell;
use crate::grid::RawGrid;
use crate::table::Column;
use crate::table::Table;
use regex::Regex;

/// Prefix given to header cells that arrive blank; columns carrying it are
/// pruned before the table leaves this module.
pub(crate) const PLACEHOLDER_PREFIX: &str = "Unnamed_";

/// Cleans a raw grid slice into a display-ready table.
///
/// Rows whose cells are all blank are dropped first; a grid with fewer
/// than 2 usable rows (header plus one data row) yields the empty table.
/// The first usable row becomes the header, with blank header cells named
/// by position. Data cells are coerced to trimmed strings, rows that end
/// up entirely empty are dropped, and finally placeholder-named columns
/// and columns empty across all rows are removed.
pub fn clean(grid: &RawGrid) -> Table {
    let rows: Vec<&Vec<Option<String>>> = grid
        .rows()
        .iter()
        .filter(|row| row.iter().any(|value| !cell::is_blank(value.as_ref())))
        .collect();
    if rows.len() < 2 {
        return Table::default();
    }

    let header: Vec<String> = rows[0]
        .iter()
        .enumerate()
        .map(|(index, value)| {
            if cell::is_blank(value.as_ref()) {
                format!("{PLACEHOLDER_PREFIX}{index}")
            } else {
                cell::coerce(value.as_ref())
            }
        })
        .collect();

    let data: Vec<Vec<String>> = rows[1..]
        .iter()
        .map(|row| {
            (0..header.len())
                .map(|col| cell::coerce(row.get(col).and_then(|value| value.as_ref())))
                .collect::<Vec<String>>()
        })
        .filter(|row| row.iter().any(|value| !value.is_empty()))
        .collect();

    let placeholder = Regex::new("^Unnamed").expect("Hardcode regex pattern");
    let columns = header
        .into_iter()
        .enumerate()
        .map(|(index, name)| Column {
            name,
            values: data.iter().map(|row| row[index].clone()).collect(),
        })
        .filter(|column| !placeholder.is_match(column.name.as_str()))
        .filter(|column| column.values.iter().any(|value| !value.is_empty()))
        .collect();
    Table::new(columns)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(rows: &[&[&str]]) -> RawGrid {
        RawGrid::new(
            rows.iter()
                .map(|row| row.iter().map(|value| Some(value.to_string())).collect())
                .collect(),
        )
    }

    #[test]
    fn too_few_rows_yields_empty_table() {
        assert!(clean(&RawGrid::default()).is_empty());
        assert!(clean(&grid(&[&["A", "B"]])).is_empty());
        assert!(clean(&grid(&[&["A", "B"], &["", "  "]])).is_empty());
    }

    #[test]
    fn drops_blank_rows_before_counting() {
        let grid = grid(&[&["", ""], &["A", "B"], &["", ""], &["x", "3"]]);
        let table = clean(&grid);

        assert_eq!(table.row_count(), 1);
        assert_eq!(table.column_names(), vec!["A", "B"]);
    }

    #[test]
    fn header_and_data_are_trimmed() {
        let grid = grid(&[&[" Name ", " Votes "], &[" x ", " 3 "]]);
        let table = clean(&grid);

        assert_eq!(table.column_names(), vec!["Name", "Votes"]);
        assert_eq!(table.row(0), vec!["x", "3"]);
    }

    #[test]
    fn missing_cells_become_empty_strings() {
        let rows = vec![
            vec![Some("A".to_owned()), Some("B".to_owned())],
            vec![Some("x".to_owned()), None],
        ];
        let table = clean(&RawGrid::new(rows));

        assert_eq!(table.row(0), vec!["x"]);
        assert_eq!(table.column_names(), vec!["A"]);
    }

    #[test]
    fn prunes_placeholder_and_empty_columns() {
        let grid = grid(&[
            &["A", "", "C", "D"],
            &["x", "1", "", "4"],
            &["y", "2", "", "5"],
        ]);
        let table = clean(&grid);

        // Unnamed second column and all-empty C are gone
        assert_eq!(table.column_names(), vec!["A", "D"]);
        assert_eq!(table.row_count(), 2);
        assert!(table
            .column_names()
            .iter()
            .all(|name| !name.starts_with(PLACEHOLDER_PREFIX)));
    }

    #[test]
    fn cleaning_clean_input_is_a_no_op() {
        let grid = grid(&[&["A", "B"], &["x", "3"], &["y", "7"]]);
        let cleaned = clean(&grid);

        let reserialized = RawGrid::new(
            std::iter::once(cleaned.column_names().iter().map(|name| Some(name.to_string())).collect())
                .chain((0..cleaned.row_count()).map(|row| {
                    cleaned.row(row).iter().map(|value| Some(value.to_string())).collect()
                }))
                .collect(),
        );

        assert_eq!(clean(&reserialized), cleaned);
    }

    #[test]
    fn election_example() {
        let grid = grid(&[
            &["A", "B"],
            &["", ""],
            &["x", "3"],
            &["y", "7"],
            &["z", "7"],
        ]);
        let table = clean(&grid);

        assert_eq!(table.column_names(), vec!["A", "B"]);
        assert_eq!(table.row_count(), 3);
        assert_eq!(table.row(0), vec!["x", "3"]);
    }
}
