//! # Dashboard Module
//!
//! Orchestration layer over the core: a [`Layout`] describes where each
//! section's heading and data live in the source grid, and a
//! [`Dashboard`] ties the fetch boundary, the snapshot cache, and that
//! layout together into display-ready [`Section`]s.

use crate::cache::SnapshotCache;
use crate::error::TallyboardError;
use crate::grid::range::Range;
use crate::grid::RawGrid;
use crate::source::GridSource;
use crate::source::SheetId;
use crate::table::clean::clean;
use crate::table::highlight::highlight_below;
use crate::table::highlight::RowTag;
use crate::table::rank::rank_and_limit;
use crate::table::title::extract_title;
use crate::table::Table;
use crate::view::DisplayView;
use anyhow::Context;
use serde::Deserialize;
use serde::Serialize;

/// Rows shown per section before the show-all toggle kicks in.
const DISPLAY_LIMIT: usize = 8;

/// Where one section's heading and data live in the source grid, and how
/// the section is displayed.
#[derive(Clone, Debug)]
pub struct SectionSpec {
    /// Single-row range holding the section heading
    pub title_range: Range,
    /// Range holding the header row and data rows
    pub data_range: Range,
    /// Rows shown before the show-all toggle
    pub display_limit: usize,
    /// Position from which rows are flagged as below the line
    pub cutoff: usize,
}

/// Page description: an ordered list of sections.
#[derive(Clone, Debug, Default)]
pub struct Layout {
    pub sections: Vec<SectionSpec>,
}

impl Layout {
    /// The fixed results page: five sections, each heading on the row
    /// above its data block. The final section is the long candidate
    /// list and flags from the 15th position instead of the 8th.
    pub fn results_page() -> Self {
        Self {
            sections: vec![
                section("A2:G2", "A3:G4", 8),
                section("A6:G6", "A7:G8", 8),
                section("A10:G10", "A11:G13", 8),
                section("A15:G15", "A16:G18", 8),
                section("A20:G20", "A21:G43", 15),
            ],
        }
    }
}

fn section(title_range: &str, data_range: &str, cutoff: usize) -> SectionSpec {
    SectionSpec {
        title_range: Range::try_from(title_range).expect("Hardcode range"),
        data_range: Range::try_from(data_range).expect("Hardcode range"),
        display_limit: DISPLAY_LIMIT,
        cutoff,
    }
}

/// A display-ready section handed to the renderer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Section {
    /// Section heading, possibly empty
    pub title: String,
    /// The full ranked table
    pub full: Table,
    /// The limited view plus whether more rows exist
    pub view: DisplayView,
    /// One tag per row of the full table; the limited view is a prefix,
    /// so tags line up with either
    pub tags: Vec<RowTag>,
}

impl Section {
    /// True when the section has no usable data; the renderer shows a
    /// notice instead of a table.
    pub fn is_empty(&self) -> bool {
        self.full.is_empty()
    }
}

/// Builds every section of a page from one fetched grid.
pub fn build_page(grid: &RawGrid, layout: &Layout) -> Vec<Section> {
    layout
        .sections
        .iter()
        .map(|spec| {
            let title = extract_title(&grid.slice(&spec.title_range));
            let table = clean(&grid.slice(&spec.data_range));
            let (full, view) = rank_and_limit(&table, spec.display_limit);
            let tags = highlight_below(full.row_count(), spec.cutoff);
            Section {
                title,
                full,
                view,
                tags,
            }
        })
        .collect()
}

/// Ties a fetch boundary, a snapshot cache, and a page layout together.
///
/// Each page load reuses the cached grid when a fresh snapshot exists and
/// fetches through the boundary otherwise. The core transformation always
/// runs on the snapshot, so toggling views never refetches.
pub struct Dashboard<S: GridSource> {
    source: S,
    cache: SnapshotCache,
    layout: Layout,
}

impl<S: GridSource> Dashboard<S> {
    /// Creates a dashboard with the default snapshot lifetime.
    pub fn new(source: S, layout: Layout) -> Self {
        Self {
            source,
            cache: SnapshotCache::default(),
            layout,
        }
    }

    /// Creates a dashboard with an explicitly configured cache.
    pub fn with_cache(source: S, layout: Layout, cache: SnapshotCache) -> Self {
        Self {
            source,
            cache,
            layout,
        }
    }

    /// Produces the sections for one page load, fetching through the
    /// cache.
    pub fn load(&mut self, id: &SheetId) -> Result<Vec<Section>, TallyboardError> {
        let grid = match self.cache.get(id).cloned() {
            Some(grid) => grid,
            None => {
                tracing::debug!(sheet = id.key(), "snapshot missing or expired, fetching");
                let grid = self
                    .source
                    .fetch(id)
                    .with_context(|| format!("Fetch worksheet for '{}'", id.key()))?;
                self.cache.insert(id.clone(), grid.clone());
                grid
            }
        };
        Ok(build_page(&grid, &self.layout))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::rank::STANDING_COLUMN;
    use anyhow::anyhow;
    use std::cell::Cell as StdCell;

    /// Grid shaped like the fixed results page: heading rows above each
    /// data block, one blank spacer row between sections.
    fn page_grid() -> RawGrid {
        let mut rows = vec![vec![String::new(); 7]; 43];
        let set = |rows: &mut Vec<Vec<String>>, index: usize, values: &[&str]| {
            for (col, value) in values.iter().enumerate() {
                rows[index][col] = value.to_string();
            }
        };
        set(&mut rows, 1, &["Mayor", "Results"]);
        set(&mut rows, 2, &["Candidate", "Votes"]);
        set(&mut rows, 3, &["Ada", "120"]);

        set(&mut rows, 5, &["Deputy", "Results"]);
        set(&mut rows, 6, &["Candidate", "Votes"]);
        set(&mut rows, 7, &["Grace", "80"]);

        set(&mut rows, 9, &["Treasurer"]);
        set(&mut rows, 10, &["Candidate", "Votes"]);
        set(&mut rows, 11, &["Edsger", "10"]);
        set(&mut rows, 12, &["Donald", "30"]);

        set(&mut rows, 14, &["Clerk"]);
        set(&mut rows, 15, &["Candidate", "Votes"]);
        set(&mut rows, 16, &["Alan", "5"]);
        set(&mut rows, 17, &["John", "5"]);

        set(&mut rows, 19, &["Council", "At", "Large"]);
        set(&mut rows, 20, &["Candidate", "Votes"]);
        for index in 0..12 {
            set(&mut rows, 21 + index, &["Member", &(index + 1).to_string()]);
        }
        RawGrid::from(rows)
    }

    struct FixedSource {
        grid: RawGrid,
        fetches: StdCell<usize>,
    }

    impl GridSource for FixedSource {
        fn fetch(&self, _id: &SheetId) -> anyhow::Result<RawGrid> {
            self.fetches.set(self.fetches.get() + 1);
            Ok(self.grid.clone())
        }
    }

    struct FailingSource;

    impl GridSource for FailingSource {
        fn fetch(&self, _id: &SheetId) -> anyhow::Result<RawGrid> {
            Err(anyhow!("credentials rejected"))
        }
    }

    #[test]
    fn builds_all_sections_of_the_results_page() {
        let sections = build_page(&page_grid(), &Layout::results_page());

        assert_eq!(sections.len(), 5);
        assert_eq!(sections[0].title, "Mayor Results");
        assert_eq!(sections[4].title, "Council At Large");
    }

    #[test]
    fn sections_are_ranked_and_tagged() {
        let sections = build_page(&page_grid(), &Layout::results_page());

        let treasurer = &sections[2];
        assert_eq!(treasurer.full.column_names(), vec![STANDING_COLUMN, "Candidate", "Votes"]);
        assert_eq!(treasurer.full.row(0), vec!["1", "Donald", "30"]);
        assert_eq!(treasurer.full.row(1), vec!["2", "Edsger", "10"]);
        assert_eq!(treasurer.tags.len(), 2);
        assert!(treasurer.tags.iter().all(|tag| *tag == RowTag::Normal));
    }

    #[test]
    fn long_section_is_limited_and_flagged() {
        let sections = build_page(&page_grid(), &Layout::results_page());

        let council = &sections[4];
        assert_eq!(council.full.row_count(), 12);
        assert_eq!(council.view.table.row_count(), 8);
        assert!(council.view.has_more);
        // 12 votes wins; cutoff at 15 marks nothing in a 12-row table
        assert_eq!(council.full.row(0), vec!["1", "Member", "12"]);
        assert!(council.tags.iter().all(|tag| *tag == RowTag::Normal));
    }

    #[test]
    fn single_data_row_sections_pass_through_unranked() {
        let sections = build_page(&page_grid(), &Layout::results_page());

        let mayor = &sections[0];
        assert_eq!(mayor.full.column_names(), vec!["Candidate", "Votes"]);
        assert_eq!(mayor.full.row_count(), 1);
        assert!(!mayor.view.has_more);
    }

    #[test]
    fn empty_section_is_reported_not_failed() {
        let sections = build_page(&RawGrid::default(), &Layout::results_page());

        assert_eq!(sections.len(), 5);
        assert!(sections.iter().all(Section::is_empty));
        assert!(sections.iter().all(|section| section.title.is_empty()));
    }

    #[test]
    fn load_fetches_once_and_reuses_the_snapshot() {
        let source = FixedSource {
            grid: page_grid(),
            fetches: StdCell::new(0),
        };
        let mut dashboard = Dashboard::new(source, Layout::results_page());
        let id = SheetId::new("abc");

        let first = dashboard.load(&id).unwrap();
        let second = dashboard.load(&id).unwrap();

        assert_eq!(first.len(), 5);
        assert_eq!(first, second);
        assert_eq!(dashboard.source.fetches.get(), 1);
    }

    #[test]
    fn load_surfaces_fetch_failures() {
        let mut dashboard = Dashboard::new(FailingSource, Layout::results_page());

        let error = dashboard.load(&SheetId::new("abc")).unwrap_err();
        assert!(error.to_string().contains("Fetch worksheet for 'abc'"));
    }
}
