use hilite_types::{HighlightId, LicenseId};

/// Diff or signature span joined with its license match.
///
/// Columns are kept as stored; validation happens when the row becomes a
/// highlight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffRow {
    pub start: i64,
    pub len: i64,
    /// Raw type code, possibly space padded (`"M "`, `"L"`, `"MR"`)
    pub type_code: String,
    /// License record of the owning match; `None` or zero when unattributed.
    pub license_ref: Option<i64>,
    pub ref_start: Option<i64>,
    pub ref_len: Option<i64>,
}

/// Keyword hit on a file's content
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordRow {
    pub start: i64,
    pub len: i64,
}

/// Bulk reuse span joined with its bulk license definition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BulkRow {
    pub clearing_event: i64,
    pub start: i64,
    pub len: i64,
    pub license_ref: Option<i64>,
    pub removing: bool,
}

/// Resolved predicates for the bulk query.
///
/// The polarity flag is computed by the caller; this layer only compares it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BulkRowFilter {
    pub license: Option<LicenseId>,
    pub removing: Option<bool>,
    pub clearing_event: Option<HighlightId>,
}

/// Upload tree entry pointing at file content.
#[derive(Debug, Clone)]
pub struct TreeItemRecord {
    pub item_id: i64,
    pub pfile_id: i64,
}

/// License match of one agent on one file content.
#[derive(Debug, Clone)]
pub struct LicenseFileRecord {
    pub id: i64,
    pub license_id: Option<i64>,
    pub agent_id: i64,
    pub pfile_id: i64,
}

/// Highlight span stored for a license match.
#[derive(Debug, Clone)]
pub struct HighlightRecord {
    pub license_file_id: i64,
    pub type_code: String,
    pub start: i64,
    pub len: i64,
    pub ref_start: i64,
    pub ref_len: i64,
}

#[derive(Debug, Clone)]
pub struct KeywordRecord {
    pub pfile_id: i64,
    pub start: i64,
    pub len: i64,
}

/// Bulk license definition: adds or removes a license wherever its text occurs.
#[derive(Debug, Clone)]
pub struct BulkLicenseRecord {
    pub id: i64,
    pub license_id: Option<i64>,
    pub removing: bool,
}

#[derive(Debug, Clone)]
pub struct BulkHighlightRecord {
    pub clearing_event_id: i64,
    pub bulk_license_id: i64,
    pub pfile_id: i64,
    pub start: i64,
    pub len: i64,
}
