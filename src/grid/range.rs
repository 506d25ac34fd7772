use crate::error::TallyboardError;
use regex::Regex;
use thiserror::Error;

/// Errors related to Excel-style range parsing.
#[derive(Error, Debug)]
pub enum RangeError {
    #[error("Invalid range format '{0}'")]
    FormatError(String),
}

/// Represents an Excel-style cell range with optional boundaries.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Range {
    /// Lower row bound (0-based index), None for unbounded
    pub row_lower_bound: Option<usize>,
    /// Upper row bound (0-based index), None for unbounded
    pub row_upper_bound: Option<usize>,
    /// Lower column bound (0-based index), None for unbounded
    pub col_lower_bound: Option<usize>,
    /// Upper column bound (0-based index), None for unbounded
    pub col_upper_bound: Option<usize>,
}

impl TryFrom<&str> for Range {
    type Error = TallyboardError;

    /// Parses an Excel-style range string (e.g., "A1", "B2:C5", "A", "1:10").
    /// Supports single cells, ranges, and partial ranges (columns or rows only).
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let pattern = Regex::new(r"^([A-Z]*)(\d*)(:([A-Z]*)(\d*))?$").expect("Hardcode regex pattern");
        let value = value.to_ascii_uppercase();
        let captures = pattern
            .captures(value.as_str())
            .ok_or(RangeError::FormatError(value.to_owned()))?;
        Ok(Range {
            col_lower_bound: captures
                .get(1)
                .map(|matcher| matcher.as_str())
                .and_then(col_to_index),
            row_lower_bound: captures
                .get(2)
                .map(|matcher| matcher.as_str())
                .and_then(row_to_index),
            col_upper_bound: captures
                .get(4)
                .map(|matcher| matcher.as_str())
                .and_then(col_to_index),
            row_upper_bound: captures
                .get(5)
                .map(|matcher| matcher.as_str())
                .and_then(row_to_index),
        })
    }
}

impl Default for Range {
    /// Creates an unbounded range (selects the entire grid).
    fn default() -> Self {
        Range {
            row_lower_bound: None,
            row_upper_bound: None,
            col_lower_bound: None,
            col_upper_bound: None,
        }
    }
}

impl Range {
    /// Checks if a 0-based row index falls inside the row bounds.
    pub(crate) fn contains_row(&self, row: usize) -> bool {
        self.row_lower_bound.map(|lower| lower <= row).unwrap_or(true)
            && self.row_upper_bound.map(|upper| row <= upper).unwrap_or(true)
    }
}

/// Converts a column reference ("A", "AB") to a 0-based index.
fn col_to_index(reference: &str) -> Option<usize> {
    if reference.is_empty() {
        return None;
    }
    let mut index = 0usize;
    for character in reference.chars() {
        index = index * 26 + (character as usize - 'A' as usize + 1);
    }
    Some(index - 1)
}

/// Converts a 1-based row reference ("21") to a 0-based index.
fn row_to_index(reference: &str) -> Option<usize> {
    reference
        .parse::<usize>()
        .ok()
        .filter(|row| *row > 0)
        .map(|row| row - 1)
}
