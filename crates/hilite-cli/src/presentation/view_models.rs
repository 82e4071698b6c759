use hilite_engine::{HighlightSummary, ScanReport};
use hilite_types::{Highlight, HighlightContext, HighlightFilter, TreeTable};
use serde::Serialize;
use std::fmt;
use std::path::Path;

use super::views::{HighlightListView, InitView, ScanOutputView, SummaryView};

/// Pairs a view model with the plain-text view that renders it
pub trait CreateView {
    fn create_view<'a>(&'a self, colors: bool) -> Box<dyn fmt::Display + 'a>;
}

/// Envelope for every command's JSON output: `{"content": ...}`
#[derive(Debug, Serialize)]
pub struct CommandResultViewModel<T>
where
    T: Serialize,
{
    pub content: T,
}

impl<T> CommandResultViewModel<T>
where
    T: Serialize,
{
    pub fn new(content: T) -> Self {
        Self { content }
    }
}

// --------------------------------------------------------
// init
// --------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct InitViewModel {
    pub database: String,
    pub schema_version: i32,
}

impl InitViewModel {
    pub fn new(database: &Path, schema_version: i32) -> Self {
        Self {
            database: database.display().to_string(),
            schema_version,
        }
    }
}

impl CreateView for InitViewModel {
    fn create_view<'a>(&'a self, _colors: bool) -> Box<dyn fmt::Display + 'a> {
        Box::new(InitView::new(self))
    }
}

// --------------------------------------------------------
// show
// --------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct HighlightListViewModel {
    pub item_id: i64,
    pub tree: TreeTable,
    #[serde(skip_serializing_if = "HighlightFilter::is_empty")]
    pub filter: HighlightFilter,
    pub highlights: Vec<Highlight>,
}

impl HighlightListViewModel {
    pub fn new(ctx: &HighlightContext, highlights: Vec<Highlight>) -> Self {
        Self {
            item_id: ctx.location.item_id,
            tree: ctx.location.tree.clone(),
            filter: ctx.filter,
            highlights,
        }
    }
}

impl CreateView for HighlightListViewModel {
    fn create_view<'a>(&'a self, colors: bool) -> Box<dyn fmt::Display + 'a> {
        Box::new(HighlightListView::new(self, colors))
    }
}

// --------------------------------------------------------
// summary
// --------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct SummaryViewModel {
    pub item_id: i64,
    pub tree: TreeTable,
    #[serde(flatten)]
    pub summary: HighlightSummary,
}

impl SummaryViewModel {
    pub fn new(ctx: &HighlightContext, summary: HighlightSummary) -> Self {
        Self {
            item_id: ctx.location.item_id,
            tree: ctx.location.tree.clone(),
            summary,
        }
    }
}

impl CreateView for SummaryViewModel {
    fn create_view<'a>(&'a self, colors: bool) -> Box<dyn fmt::Display + 'a> {
        Box::new(SummaryView::new(self, colors))
    }
}

// --------------------------------------------------------
// scan-output
// --------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct ScanOutputViewModel {
    pub reports: Vec<ScanReport>,
}

impl CreateView for ScanOutputViewModel {
    fn create_view<'a>(&'a self, colors: bool) -> Box<dyn fmt::Display + 'a> {
        Box::new(ScanOutputView::new(self, colors))
    }
}
