// In-memory store for unit tests

use hilite_index::{BulkRow, BulkRowFilter, DiffRow, KeywordRow};
use hilite_types::{HighlightContext, HighlightFilter, ItemLocation, TreeTable};
use std::cell::RefCell;

use crate::store::HighlightStore;

#[derive(Default)]
pub struct MemoryStore {
    pub diff: Vec<DiffRow>,
    pub keyword: Vec<KeywordRow>,
    pub bulk: Vec<BulkRow>,
    /// Fail the keyword fetch
    pub keyword_fails: bool,
    /// Filters seen by the bulk fetch
    pub bulk_filters: RefCell<Vec<BulkRowFilter>>,
    /// Filters seen by the diff fetch
    pub diff_filters: RefCell<Vec<HighlightFilter>>,
}

impl HighlightStore for MemoryStore {
    fn diff_rows(
        &self,
        _location: &ItemLocation,
        filter: &HighlightFilter,
    ) -> hilite_index::Result<Vec<DiffRow>> {
        self.diff_filters.borrow_mut().push(*filter);
        Ok(self.diff.clone())
    }

    fn keyword_rows(&self, _location: &ItemLocation) -> hilite_index::Result<Vec<KeywordRow>> {
        if self.keyword_fails {
            return Err(rusqlite::Error::InvalidQuery.into());
        }
        Ok(self.keyword.clone())
    }

    fn bulk_rows(
        &self,
        _location: &ItemLocation,
        filter: &BulkRowFilter,
    ) -> hilite_index::Result<Vec<BulkRow>> {
        self.bulk_filters.borrow_mut().push(*filter);
        Ok(self.bulk.clone())
    }
}

pub fn context(item_id: i64) -> HighlightContext {
    HighlightContext::new(ItemLocation::new(item_id, TreeTable::default()))
}

pub fn diff_row(
    code: &str,
    start: i64,
    len: i64,
    license: Option<i64>,
    ref_start: i64,
    ref_len: i64,
) -> DiffRow {
    DiffRow {
        start,
        len,
        type_code: code.to_string(),
        license_ref: license,
        ref_start: Some(ref_start),
        ref_len: Some(ref_len),
    }
}

pub fn keyword_row(start: i64, len: i64) -> KeywordRow {
    KeywordRow { start, len }
}

pub fn bulk_row(start: i64, len: i64, license: i64) -> BulkRow {
    BulkRow {
        clearing_event: 1,
        start,
        len,
        license_ref: Some(license),
        removing: false,
    }
}
