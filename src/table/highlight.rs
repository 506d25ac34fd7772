use serde::Deserialize;
use serde::Serialize;

/// Visual marker attached to each displayed row.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum RowTag {
    Normal,
    BelowCutoff,
}

/// Tags rows at 0-based position >= `cutoff` as below the line.
///
/// Purely positional: two rows sharing a standing across the cutoff get
/// different tags. That is the observed dashboard behavior and is kept
/// as is.
pub fn highlight_below(row_count: usize, cutoff: usize) -> Vec<RowTag> {
    (0..row_count)
        .map(|row| {
            if row < cutoff {
                RowTag::Normal
            } else {
                RowTag::BelowCutoff
            }
        })
        .collect()
}
