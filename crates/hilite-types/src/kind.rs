use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::{Error, Result};

/// Highlight classification by what the span means to a reviewer
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HighlightKind {
    /// Text identical to the reference license text
    Match,
    /// Text present in the file but not in the reference
    Added,
    /// Reference text missing from the file
    Deleted,
    /// Text replaced relative to the reference
    Changed,
    /// License signature region
    Signature,
    /// Keyword hit
    Keyword,
    /// Bulk reuse match
    Bulk,
}

impl HighlightKind {
    pub const ALL: [HighlightKind; 7] = [
        HighlightKind::Match,
        HighlightKind::Added,
        HighlightKind::Deleted,
        HighlightKind::Changed,
        HighlightKind::Signature,
        HighlightKind::Keyword,
        HighlightKind::Bulk,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            HighlightKind::Match => "match",
            HighlightKind::Added => "added",
            HighlightKind::Deleted => "deleted",
            HighlightKind::Changed => "changed",
            HighlightKind::Signature => "signature",
            HighlightKind::Keyword => "keyword",
            HighlightKind::Bulk => "bulk",
        }
    }

    /// Kinds produced by comparing file text against a reference text
    pub fn is_diff(&self) -> bool {
        matches!(
            self,
            HighlightKind::Match
                | HighlightKind::Added
                | HighlightKind::Deleted
                | HighlightKind::Changed
        )
    }
}

impl fmt::Display for HighlightKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Map a raw storage type code onto its kind.
///
/// Codes are stored in fixed-width columns, so trailing padding is ignored:
/// `"M "` and `"M"` are the same code. Anything outside the known vocabulary
/// is rejected rather than dropped.
pub fn classify(raw_code: &str) -> Result<HighlightKind> {
    match raw_code.trim_end_matches(' ') {
        "M" | "M0" => Ok(HighlightKind::Match),
        "M+" => Ok(HighlightKind::Added),
        "M-" => Ok(HighlightKind::Deleted),
        "MR" => Ok(HighlightKind::Changed),
        "L" => Ok(HighlightKind::Signature),
        "K" => Ok(HighlightKind::Keyword),
        _ => Err(Error::UnknownTypeCode(raw_code.to_string())),
    }
}

/// Parses kind names as printed by `Display`; raw storage codes go through
/// [`classify`]
impl FromStr for HighlightKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| Error::UnknownTypeCode(s.to_string()))
    }
}
