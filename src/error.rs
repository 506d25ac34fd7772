use thiserror::Error;

/// Main error type for the tallyboard crate.
/// Aggregates errors from the grid, table, and boundary modules.
#[derive(Error, Debug)]
pub enum TallyboardError {
    #[error("{0}")]
    AnyhowError(#[from] anyhow::Error),

    // Grid module errors
    #[error("{0}")]
    RangeError(#[from] crate::grid::range::RangeError),

    // Table module errors
    #[error("{0}")]
    RankError(#[from] crate::table::rank::RankError),

    // Boundary errors
    #[error("{0}")]
    SheetIdError(#[from] crate::source::SheetIdError),
}
