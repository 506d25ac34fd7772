use crate::grid::cell;
use crate::table::Column;
use crate::table::Table;
use crate::view::DisplayView;
use std::cmp::Ordering;
use thiserror::Error;

/// Errors raised when a table reaches the ranker in a shape the cleaner
/// never produces. These degrade the output instead of failing a render.
#[derive(Error, Debug)]
pub enum RankError {
    #[error("No key column for {rows} data rows")]
    MissingKeyColumn { rows: usize },

    #[error("Key column '{name}' holds {values} values for {rows} rows")]
    RaggedKeyColumn { name: String, values: usize, rows: usize },
}

/// Name of the derived rank column.
pub const STANDING_COLUMN: &str = "Standing";

/// Sorts a table by the numeric value of its last column and limits the
/// display.
///
/// Tables with 0 or 1 rows pass through unchanged. Otherwise rows are
/// sorted descending (stable, so ties keep source order) with unparseable
/// keys after all numeric ones, and a standing column is inserted at the
/// front: each row's standing is 1 plus the number of rows with a strictly
/// greater key, so ties share a standing and the next one skips.
///
/// If the key column itself is unusable the condition is logged and the
/// table comes back unsorted and unranked; the view is still limited.
pub fn rank_and_limit(table: &Table, max_rows: usize) -> (Table, DisplayView) {
    if table.row_count() <= 1 {
        return (
            table.clone(),
            DisplayView {
                table: table.clone(),
                has_more: false,
            },
        );
    }

    let keys = match numeric_keys(table) {
        Ok(keys) => keys,
        Err(error) => {
            tracing::warn!(%error, "ranking skipped, returning rows unsorted");
            return (table.clone(), limit(table, max_rows));
        }
    };

    let mut order: Vec<usize> = (0..keys.len()).collect();
    order.sort_by(|&left, &right| compare(keys[left], keys[right]));

    let mut full = table.select_rows(&order);
    full.insert_column(
        0,
        Column {
            name: STANDING_COLUMN.to_owned(),
            values: standings(&keys, &order),
        },
    );
    let view = limit(&full, max_rows);
    (full, view)
}

/// Descending order with missing keys after every number.
fn compare(left: Option<f64>, right: Option<f64>) -> Ordering {
    match (left, right) {
        (Some(left), Some(right)) => right.partial_cmp(&left).unwrap_or(Ordering::Equal),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Parses the key column. Per-cell failures become missing keys; a key
/// column that is absent or out of step with the row count is an error.
fn numeric_keys(table: &Table) -> Result<Vec<Option<f64>>, RankError> {
    let column = table.last_column().ok_or(RankError::MissingKeyColumn {
        rows: table.row_count(),
    })?;
    if column.values.len() != table.row_count() {
        return Err(RankError::RaggedKeyColumn {
            name: column.name.clone(),
            values: column.values.len(),
            rows: table.row_count(),
        });
    }
    Ok(column
        .values
        .iter()
        .map(|value| cell::to_number(value))
        .collect())
}

/// Competition standings in sorted order: 1 plus the count of strictly
/// greater keys. Missing keys sit below every number and share a standing.
fn standings(keys: &[Option<f64>], order: &[usize]) -> Vec<String> {
    order
        .iter()
        .map(|&row| {
            let greater = match keys[row] {
                Some(key) => keys
                    .iter()
                    .filter(|other| matches!(other, Some(number) if *number > key))
                    .count(),
                None => keys.iter().filter(|other| other.is_some()).count(),
            };
            (greater + 1).to_string()
        })
        .collect()
}

fn limit(table: &Table, max_rows: usize) -> DisplayView {
    DisplayView {
        table: table.head(max_rows),
        has_more: table.row_count() > max_rows,
    }
}
