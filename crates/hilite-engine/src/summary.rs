use hilite_types::{Highlight, HighlightKind, LicenseId, LicenseRef};
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

/// What a highlight set says about a file: span counts per kind and the
/// licenses the spans are attributed to
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct HighlightSummary {
    pub total: usize,
    pub by_kind: BTreeMap<HighlightKind, usize>,
    pub license_ids: BTreeSet<LicenseId>,
    pub license_names: BTreeSet<String>,
}

impl HighlightSummary {
    pub fn count(&self, kind: HighlightKind) -> usize {
        self.by_kind.get(&kind).copied().unwrap_or(0)
    }
}

pub fn summarize(highlights: &[Highlight]) -> HighlightSummary {
    let mut summary = HighlightSummary {
        total: highlights.len(),
        ..Default::default()
    };

    for hl in highlights {
        *summary.by_kind.entry(hl.kind()).or_insert(0) += 1;
        match hl.license() {
            Some(LicenseRef::Id(id)) => {
                summary.license_ids.insert(*id);
            }
            Some(LicenseRef::Name(name)) => {
                summary.license_names.insert(name.clone());
            }
            None => {}
        }
    }

    summary
}
