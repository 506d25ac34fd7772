//! # Tallyboard
//!
//! Data core for a results dashboard backed by a Google Sheets worksheet.
//! The crate slices fixed ranges out of a fetched cell grid, cleans them
//! into named-column tables, ranks rows by the numeric value of the last
//! column, and prepares limited views with below-cutoff row markers for an
//! external renderer.
//!
//! ## Features
//!
//! - **Grid cleaning**: Blank-row filtering, header derivation with
//!   placeholder pruning, and whitespace-safe cell coercion
//! - **Competition ranking**: Stable descending sort on the last column
//!   with shared standings for ties and skipped ranks after them
//! - **Display views**: Row-limited views with a show-all toggle modeled
//!   as a pure function of a caller flag
//! - **Excel-style ranges**: Section positions written as familiar
//!   references such as `A21:G43`
//! - **Snapshot caching**: Fetched grids are reused for a bounded time
//!   window keyed by spreadsheet identity
//! - **Boundary traits**: Fetching and rendering stay outside the crate;
//!   implement [`GridSource`] to plug in a real worksheet client
//!
//! ## Pipeline
//!
//! A page load fetches one [`RawGrid`] (through the cache), slices each
//! section's title and data ranges, and turns every data slice into a
//! [`Section`]: cleaned [`Table`], ranked rows, a limited [`DisplayView`],
//! and per-row [`RowTag`]s. The renderer owns all HTML and styling.

mod cache;
mod dashboard;
mod error;
mod grid;
mod source;
mod table;
mod view;

pub use cache::Snapshot;
pub use cache::SnapshotCache;
pub use dashboard::build_page;
pub use dashboard::Dashboard;
pub use dashboard::Layout;
pub use dashboard::Section;
pub use dashboard::SectionSpec;
pub use error::TallyboardError;
pub use grid::range::Range;
pub use grid::range::RangeError;
pub use grid::RawGrid;
pub use source::GridSource;
pub use source::SheetId;
pub use source::SheetIdError;
pub use table::clean::clean;
pub use table::highlight::highlight_below;
pub use table::highlight::RowTag;
pub use table::rank::rank_and_limit;
pub use table::rank::RankError;
pub use table::rank::STANDING_COLUMN;
pub use table::title::extract_title;
pub use table::Column;
pub use table::Table;
pub use view::displayed;
pub use view::DisplayView;
