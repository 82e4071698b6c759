//! Scan database fixtures.
//!
//! Provides:
//! - A fluent builder for throwaway on-disk scan databases
//! - A canned sample with every highlight source populated

use hilite_index::{
    BulkHighlightRecord, BulkLicenseRecord, Database, HighlightRecord, KeywordRecord,
    LicenseFileRecord, TreeItemRecord,
};
use hilite_types::{ItemLocation, TreeTable};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Item of the sample database
pub const SAMPLE_ITEM: i64 = 1;
/// File content behind `SAMPLE_ITEM`
pub const SAMPLE_PFILE: i64 = 100;
/// Agent that produced the sample's license 7 match
pub const SAMPLE_AGENT: i64 = 3;

/// One stored diff/signature span: `(type code, start, len, ref_start, ref_len)`
pub type SpanSpec<'a> = (&'a str, i64, i64, i64, i64);

/// Builder for a scan database in a temporary directory.
///
/// # Example
/// ```no_run
/// use hilite_testing::FixtureDb;
///
/// let fixture = FixtureDb::new()
///     .with_item(1, 100)
///     .with_match(100, Some(7), 3, &[("M ", 0, 10, 0, 10)])
///     .with_keyword(100, 2, 3);
/// ```
pub struct FixtureDb {
    temp_dir: TempDir,
    path: PathBuf,
    db: Database,
    next_license_file: i64,
    next_bulk_license: i64,
}

impl Default for FixtureDb {
    fn default() -> Self {
        Self::new()
    }
}

impl FixtureDb {
    /// Create an empty database with the schema in place.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("scan.db");
        let db = Database::open(&path).expect("Failed to open fixture database");

        Self {
            temp_dir,
            path,
            db,
            next_license_file: 1,
            next_bulk_license: 1,
        }
    }

    /// Sample used across the engine and CLI tests.
    ///
    /// Item 1 (content 100) carries:
    /// - license file 1 (license 7, agent 3): `M ` [0,10), `M+` [10,15), `L` [30,36)
    /// - license file 2 (license 8, agent 4): `MR` [50,54)
    /// - keywords [2,5) and [31,33)
    /// - bulk event 900 adding license 7 at [60,68), event 901 removing license 9 at [70,74)
    pub fn sample() -> Self {
        Self::new()
            .with_item(SAMPLE_ITEM, SAMPLE_PFILE)
            .with_match(
                SAMPLE_PFILE,
                Some(7),
                SAMPLE_AGENT,
                &[
                    ("M ", 0, 10, 0, 10),
                    ("M+", 10, 5, 10, 0),
                    ("L", 30, 6, 200, 6),
                ],
            )
            .with_match(SAMPLE_PFILE, Some(8), 4, &[("MR", 50, 4, 40, 7)])
            .with_keyword(SAMPLE_PFILE, 2, 3)
            .with_keyword(SAMPLE_PFILE, 31, 2)
            .with_bulk(SAMPLE_PFILE, 900, Some(7), false, 60, 8)
            .with_bulk(SAMPLE_PFILE, 901, Some(9), true, 70, 4)
    }

    /// Path of the database file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Temp directory holding the database.
    pub fn dir(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn db(&self) -> &Database {
        &self.db
    }

    /// Location of an item in the default tree table.
    pub fn location(&self, item_id: i64) -> ItemLocation {
        ItemLocation::new(item_id, TreeTable::default())
    }

    /// Add a tree item in the default tree table.
    pub fn with_item(self, item_id: i64, pfile_id: i64) -> Self {
        self.with_item_in(TreeTable::DEFAULT_NAME, item_id, pfile_id)
    }

    /// Add a tree item in a named tree table, creating the table if needed.
    pub fn with_item_in(self, tree: &str, item_id: i64, pfile_id: i64) -> Self {
        let tree = TreeTable::new(tree).expect("Invalid tree table name");
        self.db
            .create_tree_table(&tree)
            .expect("Failed to create tree table");
        self.db
            .insert_tree_item(&tree, &TreeItemRecord { item_id, pfile_id })
            .expect("Failed to insert tree item");
        self
    }

    /// Add a license match with its highlight spans.
    ///
    /// License file ids are assigned from 1 in call order.
    pub fn with_match(
        mut self,
        pfile_id: i64,
        license_id: Option<i64>,
        agent_id: i64,
        spans: &[SpanSpec<'_>],
    ) -> Self {
        let id = self.next_license_file;
        self.next_license_file += 1;

        self.db
            .insert_license_file(&LicenseFileRecord {
                id,
                license_id,
                agent_id,
                pfile_id,
            })
            .expect("Failed to insert license file");

        for &(code, start, len, ref_start, ref_len) in spans {
            self.db
                .insert_highlight(&HighlightRecord {
                    license_file_id: id,
                    type_code: code.to_string(),
                    start,
                    len,
                    ref_start,
                    ref_len,
                })
                .expect("Failed to insert highlight");
        }

        self
    }

    pub fn with_keyword(self, pfile_id: i64, start: i64, len: i64) -> Self {
        self.db
            .insert_keyword(&KeywordRecord {
                pfile_id,
                start,
                len,
            })
            .expect("Failed to insert keyword");
        self
    }

    /// Add a bulk definition and one span it produced.
    pub fn with_bulk(
        mut self,
        pfile_id: i64,
        clearing_event_id: i64,
        license_id: Option<i64>,
        removing: bool,
        start: i64,
        len: i64,
    ) -> Self {
        let id = self.next_bulk_license;
        self.next_bulk_license += 1;

        self.db
            .insert_bulk_license(&BulkLicenseRecord {
                id,
                license_id,
                removing,
            })
            .expect("Failed to insert bulk license");
        self.db
            .insert_bulk_highlight(&BulkHighlightRecord {
                clearing_event_id,
                bulk_license_id: id,
                pfile_id,
                start,
                len,
            })
            .expect("Failed to insert bulk highlight");
        self
    }
}
