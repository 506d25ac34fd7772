//! # Grid Module
//!
//! This module holds the raw worksheet data as delivered by the fetch
//! boundary: rows of optional string cells, addressed with Excel-style
//! ranges. Nothing here interprets the data; cleaning and ranking live in
//! the table module.

pub(crate) mod cell;
pub mod range;

use crate::grid::range::Range;
use serde::Deserialize;
use serde::Serialize;

/// A rectangular slice of worksheet cells.
///
/// Rows preserve source order; a cell is `None` when the source had no
/// value at that position. Grids are plain values so snapshots can be
/// cached and shipped across process boundaries.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RawGrid {
    rows: Vec<Vec<Option<String>>>,
}

impl RawGrid {
    /// Creates a grid from rows of optional cells.
    pub fn new(rows: Vec<Vec<Option<String>>>) -> Self {
        Self { rows }
    }

    /// Returns all rows in source order.
    pub fn rows(&self) -> &[Vec<Option<String>>] {
        &self.rows
    }

    /// Returns true if the grid contains no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Extracts the sub-grid covered by an Excel-style range.
    /// Unbounded sides of the range fall back to the grid's own extent;
    /// cells missing inside the window become `None`.
    pub fn slice(&self, range: &Range) -> RawGrid {
        let rows = self
            .rows
            .iter()
            .enumerate()
            .filter(|(index, _)| range.contains_row(*index))
            .map(|(_, row)| {
                let col_lower = range.col_lower_bound.unwrap_or(0);
                let col_upper = range
                    .col_upper_bound
                    .unwrap_or_else(|| row.len().saturating_sub(1));
                (col_lower..=col_upper)
                    .map(|col| row.get(col).cloned().flatten())
                    .collect()
            })
            .collect();
        RawGrid { rows }
    }
}

impl From<Vec<Vec<String>>> for RawGrid {
    /// Wraps an all-present grid, the shape worksheet value APIs return.
    fn from(rows: Vec<Vec<String>>) -> Self {
        Self {
            rows: rows
                .into_iter()
                .map(|row| row.into_iter().map(Some).collect())
                .collect(),
        }
    }
}
