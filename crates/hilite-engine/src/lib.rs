// Engine module - turns stored records and scanner text into highlight spans
// This layer sits between storage (index) and whatever renders the file

pub mod aggregate;
pub mod error;
pub mod scanner;
pub mod source;
pub mod store;
pub mod summary;

#[cfg(test)]
mod testing;

pub use aggregate::Aggregator;
pub use error::{Error, Result};
pub use scanner::{ScanReport, parse_block, parse_output};
pub use source::{
    BulkPolarity, BulkSource, DiffSource, HighlightSource, KeywordSource, SourceKind, SourceSet,
};
pub use store::HighlightStore;
pub use summary::{HighlightSummary, summarize};

use hilite_types::{Highlight, HighlightContext};

// Façade API - stable entry points for the CLI layer

/// All structured highlights for a context: diff, then keyword, then bulk
pub fn collect_highlights<S: HighlightStore + ?Sized>(
    store: &S,
    ctx: &HighlightContext,
) -> Result<Vec<Highlight>> {
    Aggregator::new(store).aggregate(ctx)
}

/// Highlights from free-text scanner output, one report per file
pub fn highlights_from_scanner_output(text: &str) -> Vec<ScanReport> {
    scanner::parse_output(text)
}
