//! # Table Module
//!
//! Cleaned, display-ready tables and the transformations that produce
//! them: the grid cleaner, the title extractor, the ranker, and the
//! row highlighter.

pub mod clean;
pub mod highlight;
pub mod rank;
pub mod title;

use serde::Deserialize;
use serde::Serialize;

/// A named column of display-ready string values.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Column {
    /// Column name (from the header row, or derived)
    pub name: String,
    /// One value per data row, already coerced to string form
    pub values: Vec<String>,
}

/// A cleaned table: ordered columns of equal length.
///
/// Produced by [`clean::clean`]; every column name is non-empty and
/// meaningful. An empty table (no columns) is the well-defined result of
/// insufficient input, never an error.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Table {
    columns: Vec<Column>,
}

impl Table {
    /// Creates a table from ordered columns.
    pub fn new(columns: Vec<Column>) -> Self {
        Self { columns }
    }

    /// Returns true if the table has no columns or no rows.
    pub fn is_empty(&self) -> bool {
        self.row_count() == 0
    }

    /// Number of data rows.
    pub fn row_count(&self) -> usize {
        self.columns
            .first()
            .map(|column| column.values.len())
            .unwrap_or(0)
    }

    /// Number of columns.
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Returns all columns in display order.
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Returns the column names in display order.
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|column| column.name.as_str()).collect()
    }

    /// Returns the rightmost column, the one ranking keys on.
    pub fn last_column(&self) -> Option<&Column> {
        self.columns.last()
    }

    /// Returns one row's values in column order.
    pub fn row(&self, index: usize) -> Vec<&str> {
        self.columns
            .iter()
            .filter_map(|column| column.values.get(index))
            .map(|value| value.as_str())
            .collect()
    }

    /// Reorders rows by the given original-row indices.
    pub(crate) fn select_rows(&self, order: &[usize]) -> Table {
        Table {
            columns: self
                .columns
                .iter()
                .map(|column| Column {
                    name: column.name.clone(),
                    values: order
                        .iter()
                        .map(|&row| column.values.get(row).cloned().unwrap_or_default())
                        .collect(),
                })
                .collect(),
        }
    }

    /// Keeps only the first `rows` rows of every column.
    pub(crate) fn head(&self, rows: usize) -> Table {
        Table {
            columns: self
                .columns
                .iter()
                .map(|column| Column {
                    name: column.name.clone(),
                    values: column.values.iter().take(rows).cloned().collect(),
                })
                .collect(),
        }
    }

    /// Inserts a derived column at the given display position.
    pub(crate) fn insert_column(&mut self, index: usize, column: Column) {
        self.columns.insert(index, column);
    }
}
