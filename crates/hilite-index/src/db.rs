use hilite_types::{HighlightFilter, ItemLocation, TreeTable};
use rusqlite::{Connection, OpenFlags};
use std::path::Path;

use crate::{
    Result,
    queries::{bulk, diff, keyword, tree},
    records::{
        BulkHighlightRecord, BulkLicenseRecord, BulkRow, BulkRowFilter, DiffRow, HighlightRecord,
        KeywordRecord, KeywordRow, LicenseFileRecord, TreeItemRecord,
    },
    schema,
};

/// Handle to a scan database.
///
/// Every read method runs one prepared statement and collects its rows
/// before returning, so no cursor outlives the call.
pub struct Database {
    conn: Connection,
}

impl Database {
    pub fn open(db_path: &Path) -> Result<Self> {
        let conn = Connection::open(db_path)?;
        let db = Self { conn };
        db.init_schema()?;
        Ok(db)
    }

    /// Open an existing scan database for reading only.
    ///
    /// No schema is created or stamped; a table the database lacks shows up
    /// as a schema-mismatch error on the first query that needs it.
    pub fn open_read_only(db_path: &Path) -> Result<Self> {
        let conn = Connection::open_with_flags(
            db_path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )?;
        Ok(Self { conn })
    }

    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let db = Self { conn };
        db.init_schema()?;
        Ok(db)
    }

    pub fn init_schema(&self) -> Result<()> {
        schema::init_schema(&self.conn)
    }

    pub fn create_tree_table(&self, tree: &TreeTable) -> Result<()> {
        schema::create_tree_table(&self.conn, tree)
    }

    // Read paths

    /// File content id behind a tree item, if the item exists
    pub fn content_id(&self, location: &ItemLocation) -> Result<Option<i64>> {
        tree::content_id(&self.conn, &location.tree, location.item_id)
    }

    pub fn diff_rows(
        &self,
        location: &ItemLocation,
        filter: &HighlightFilter,
    ) -> Result<Vec<DiffRow>> {
        diff::list(&self.conn, location, filter)
    }

    pub fn keyword_rows(&self, location: &ItemLocation) -> Result<Vec<KeywordRow>> {
        match self.content_id(location)? {
            Some(pfile_id) => keyword::list_by_content(&self.conn, pfile_id),
            None => Ok(Vec::new()),
        }
    }

    pub fn bulk_rows(
        &self,
        location: &ItemLocation,
        filter: &BulkRowFilter,
    ) -> Result<Vec<BulkRow>> {
        match self.content_id(location)? {
            Some(pfile_id) => bulk::list_by_content(&self.conn, pfile_id, filter),
            None => Ok(Vec::new()),
        }
    }

    // Write paths, used to seed databases

    pub fn insert_tree_item(&self, tree: &TreeTable, item: &TreeItemRecord) -> Result<()> {
        tree::insert(&self.conn, tree, item)
    }

    pub fn insert_license_file(&self, record: &LicenseFileRecord) -> Result<()> {
        diff::insert_license_file(&self.conn, record)
    }

    pub fn insert_highlight(&self, record: &HighlightRecord) -> Result<()> {
        diff::insert_highlight(&self.conn, record)
    }

    pub fn insert_keyword(&self, record: &KeywordRecord) -> Result<()> {
        keyword::insert(&self.conn, record)
    }

    pub fn insert_bulk_license(&self, record: &BulkLicenseRecord) -> Result<()> {
        bulk::insert_license(&self.conn, record)
    }

    pub fn insert_bulk_highlight(&self, record: &BulkHighlightRecord) -> Result<()> {
        bulk::insert_highlight(&self.conn, record)
    }
}
