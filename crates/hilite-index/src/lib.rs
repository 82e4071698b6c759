// SQLite access layer for highlight sources
// Read paths are parameterized and side-effect free; write paths exist for fixtures and `init`

mod db;
pub mod error;
mod queries;
mod records;
mod schema;

// Public API
pub use db::Database;
pub use error::{Error, Result};
pub use records::{
    BulkHighlightRecord, BulkLicenseRecord, BulkRow, BulkRowFilter, DiffRow, HighlightRecord,
    KeywordRecord, KeywordRow, LicenseFileRecord, TreeItemRecord,
};
pub use schema::SCHEMA_VERSION;
