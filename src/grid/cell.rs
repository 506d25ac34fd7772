//! Cell-level coercion helpers shared by the cleaner and the ranker.

/// Returns true if the cell is missing, empty, or whitespace only.
pub(crate) fn is_blank(cell: Option<&String>) -> bool {
    cell.map(|value| value.trim().is_empty()).unwrap_or(true)
}

/// Coerces a cell to its trimmed string form; missing cells become "".
pub(crate) fn coerce(cell: Option<&String>) -> String {
    cell.map(|value| value.trim().to_owned()).unwrap_or_default()
}

/// Parses a display value as a rank key.
/// Values that do not parse as finite numbers are missing keys.
pub(crate) fn to_number(value: &str) -> Option<f64> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|number| number.is_finite())
}
