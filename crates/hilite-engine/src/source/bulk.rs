use hilite_index::{BulkRow, BulkRowFilter};
use hilite_types::{AgentId, Highlight, HighlightContext, HighlightFilter, LicenseId, Range};
use serde::{Deserialize, Serialize};

use super::{HighlightSource, SourceKind};
use crate::{Result, store::HighlightStore};

/// Maps the agent filter onto the `removing` flag of bulk definitions.
///
/// Bulk matches are not produced by scan agents. Callers instead pass the
/// agent id of the removal pass: the flag compared is
/// `agent != removal_agent`, applied as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BulkPolarity {
    pub removal_agent: i64,
}

impl Default for BulkPolarity {
    fn default() -> Self {
        Self { removal_agent: 2 }
    }
}

impl BulkPolarity {
    pub fn removing_flag(&self, agent: Option<AgentId>) -> Option<bool> {
        agent.map(|agent| agent.get() != self.removal_agent)
    }

    pub fn row_filter(&self, filter: &HighlightFilter) -> BulkRowFilter {
        BulkRowFilter {
            license: filter.license,
            removing: self.removing_flag(filter.agent),
            clearing_event: filter.highlight,
        }
    }
}

/// Bulk reuse matches on the item's content
pub struct BulkSource<'a, S: HighlightStore + ?Sized> {
    store: &'a S,
    polarity: BulkPolarity,
}

impl<'a, S: HighlightStore + ?Sized> BulkSource<'a, S> {
    pub fn new(store: &'a S, polarity: BulkPolarity) -> Self {
        Self { store, polarity }
    }
}

impl<S: HighlightStore + ?Sized> HighlightSource for BulkSource<'_, S> {
    fn kind(&self) -> SourceKind {
        SourceKind::Bulk
    }

    fn fetch(&self, ctx: &HighlightContext) -> Result<Vec<Highlight>> {
        let filter = self.polarity.row_filter(&ctx.filter);
        let rows = self.store.bulk_rows(&ctx.location, &filter)?;
        rows.into_iter().map(highlight_from_row).collect()
    }
}

fn highlight_from_row(row: BulkRow) -> Result<Highlight> {
    let range = Range::from_row(row.start, row.len)?;
    Ok(Highlight::bulk(range, row.license_ref.and_then(LicenseId::new)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use hilite_types::{HighlightId, HighlightKind};

    #[test]
    fn test_removing_flag_follows_sentinel() {
        let polarity = BulkPolarity::default();
        assert_eq!(polarity.removing_flag(None), None);
        assert_eq!(polarity.removing_flag(AgentId::new(2)), Some(false));
        assert_eq!(polarity.removing_flag(AgentId::new(5)), Some(true));

        let custom = BulkPolarity { removal_agent: 5 };
        assert_eq!(custom.removing_flag(AgentId::new(5)), Some(false));
    }

    #[test]
    fn test_row_filter_passes_license_and_event_through() {
        let filter = HighlightFilter::from_raw(Some(4), Some(2), Some(31));
        let rows = BulkPolarity::default().row_filter(&filter);

        assert_eq!(rows.license, LicenseId::new(4));
        assert_eq!(rows.removing, Some(false));
        assert_eq!(rows.clearing_event, HighlightId::new(31));
    }

    #[test]
    fn test_bulk_highlight_has_no_reference() {
        let hl = highlight_from_row(BulkRow {
            clearing_event: 1,
            start: 40,
            len: 8,
            license_ref: Some(6),
            removing: false,
        })
        .unwrap();

        assert_eq!(hl.kind(), HighlightKind::Bulk);
        assert_eq!((hl.start(), hl.end()), (40, 48));
        assert_eq!(hl.license_id().map(|id| id.get()), Some(6));
        assert_eq!(hl.reference(), None);
    }
}
