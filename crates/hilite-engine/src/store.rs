use hilite_index::{BulkRow, BulkRowFilter, Database, DiffRow, KeywordRow};
use hilite_types::{HighlightFilter, ItemLocation};

/// Read-only row supplier behind the structured sources.
///
/// Implementations hand back fully collected rows; any cursor they open is
/// closed before returning.
pub trait HighlightStore {
    fn diff_rows(
        &self,
        location: &ItemLocation,
        filter: &HighlightFilter,
    ) -> hilite_index::Result<Vec<DiffRow>>;

    fn keyword_rows(&self, location: &ItemLocation) -> hilite_index::Result<Vec<KeywordRow>>;

    fn bulk_rows(
        &self,
        location: &ItemLocation,
        filter: &BulkRowFilter,
    ) -> hilite_index::Result<Vec<BulkRow>>;
}

impl HighlightStore for Database {
    fn diff_rows(
        &self,
        location: &ItemLocation,
        filter: &HighlightFilter,
    ) -> hilite_index::Result<Vec<DiffRow>> {
        Database::diff_rows(self, location, filter)
    }

    fn keyword_rows(&self, location: &ItemLocation) -> hilite_index::Result<Vec<KeywordRow>> {
        Database::keyword_rows(self, location)
    }

    fn bulk_rows(
        &self,
        location: &ItemLocation,
        filter: &BulkRowFilter,
    ) -> hilite_index::Result<Vec<BulkRow>> {
        Database::bulk_rows(self, location, filter)
    }
}
