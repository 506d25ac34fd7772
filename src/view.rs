use crate::table::Table;
use serde::Deserialize;
use serde::Serialize;

/// A ranked table restricted to its display limit, plus whether rows were
/// cut off. The renderer shows a toggle only when `has_more` is set.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DisplayView {
    /// The first rows of the ranked table, up to the display limit
    pub table: Table,
    /// True when the full table holds more rows than the view
    pub has_more: bool,
}

/// Resolves the caller's show-all toggle to the rows to render.
/// The toggle only has an effect when rows were actually cut off.
pub fn displayed<'a>(full: &'a Table, view: &'a DisplayView, show_all: bool) -> &'a Table {
    if show_all && view.has_more {
        full
    } else {
        &view.table
    }
}
