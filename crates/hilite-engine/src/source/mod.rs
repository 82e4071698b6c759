// Structured highlight sources
// Each source turns one kind of stored record into highlights; none of them
// writes to storage or reorders rows.

mod bulk;
mod diff;
mod keyword;

pub use bulk::{BulkPolarity, BulkSource};
pub use diff::DiffSource;
pub use keyword::KeywordSource;

use hilite_types::{Highlight, HighlightContext};
use serde::Serialize;
use std::fmt;

use crate::Result;

/// Structured sources, in aggregation order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceKind {
    Diff,
    Keyword,
    Bulk,
}

impl SourceKind {
    /// Fixed emission order: later spans may paint over earlier ones
    pub const ORDER: [SourceKind; 3] = [SourceKind::Diff, SourceKind::Keyword, SourceKind::Bulk];

    pub fn as_str(&self) -> &'static str {
        match self {
            SourceKind::Diff => "diff",
            SourceKind::Keyword => "keyword",
            SourceKind::Bulk => "bulk",
        }
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Which structured sources take part in an aggregation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceSet {
    diff: bool,
    keyword: bool,
    bulk: bool,
}

impl Default for SourceSet {
    fn default() -> Self {
        Self::all()
    }
}

impl SourceSet {
    pub fn all() -> Self {
        Self {
            diff: true,
            keyword: true,
            bulk: true,
        }
    }

    pub fn none() -> Self {
        Self {
            diff: false,
            keyword: false,
            bulk: false,
        }
    }

    pub fn with(mut self, kind: SourceKind) -> Self {
        *self.slot(kind) = true;
        self
    }

    pub fn without(mut self, kind: SourceKind) -> Self {
        *self.slot(kind) = false;
        self
    }

    pub fn contains(&self, kind: SourceKind) -> bool {
        match kind {
            SourceKind::Diff => self.diff,
            SourceKind::Keyword => self.keyword,
            SourceKind::Bulk => self.bulk,
        }
    }

    fn slot(&mut self, kind: SourceKind) -> &mut bool {
        match kind {
            SourceKind::Diff => &mut self.diff,
            SourceKind::Keyword => &mut self.keyword,
            SourceKind::Bulk => &mut self.bulk,
        }
    }
}

/// One independent producer of highlights for a request
pub trait HighlightSource {
    fn kind(&self) -> SourceKind;

    /// All highlights of this source for the context, in source order.
    ///
    /// Fails on the first bad record; nothing already built is returned.
    fn fetch(&self, ctx: &HighlightContext) -> Result<Vec<Highlight>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_set_toggles() {
        let set = SourceSet::all().without(SourceKind::Keyword);
        assert!(set.contains(SourceKind::Diff));
        assert!(!set.contains(SourceKind::Keyword));
        assert!(set.contains(SourceKind::Bulk));

        let set = SourceSet::none().with(SourceKind::Bulk);
        let active: Vec<_> = SourceKind::ORDER
            .into_iter()
            .filter(|k| set.contains(*k))
            .collect();
        assert_eq!(active, vec![SourceKind::Bulk]);
    }
}
