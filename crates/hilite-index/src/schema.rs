use hilite_types::TreeTable;
use rusqlite::Connection;

use crate::Result;

// Schema version stamped into fresh databases
pub const SCHEMA_VERSION: i32 = 1;

// NOTE: Layout mirrors the scan database the highlights are read from.
// Tables are only ever created when missing; an existing database is never
// altered or dropped because the scanner, not this crate, owns its rows.
//
// - license_file: one row per (file content, license) match found by an agent
// - highlight: diff/signature spans of a license_file match, with reference offsets
// - highlight_keyword: keyword hits per file content
// - license_ref_bulk + highlight_bulk: bulk reuse definitions and their spans

pub fn init_schema(conn: &Connection) -> Result<()> {
    let current_version: i32 = conn.query_row("PRAGMA user_version", [], |row| row.get(0))?;

    create_tree_table(conn, &TreeTable::default())?;

    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS license_file (
            fl_pk INTEGER PRIMARY KEY,
            rf_fk INTEGER,
            agent_fk INTEGER NOT NULL,
            pfile_fk INTEGER NOT NULL
        );

        CREATE TABLE IF NOT EXISTS highlight (
            hl_pk INTEGER PRIMARY KEY AUTOINCREMENT,
            fl_fk INTEGER NOT NULL,
            type TEXT NOT NULL,
            start INTEGER NOT NULL,
            len INTEGER NOT NULL,
            rf_start INTEGER,
            rf_len INTEGER,
            FOREIGN KEY (fl_fk) REFERENCES license_file(fl_pk)
        );

        CREATE TABLE IF NOT EXISTS highlight_keyword (
            hk_pk INTEGER PRIMARY KEY AUTOINCREMENT,
            pfile_fk INTEGER NOT NULL,
            start INTEGER NOT NULL,
            len INTEGER NOT NULL
        );

        CREATE TABLE IF NOT EXISTS license_ref_bulk (
            lrb_pk INTEGER PRIMARY KEY,
            rf_fk INTEGER,
            removing BOOLEAN NOT NULL DEFAULT 0
        );

        CREATE TABLE IF NOT EXISTS highlight_bulk (
            hb_pk INTEGER PRIMARY KEY AUTOINCREMENT,
            clearing_event_fk INTEGER NOT NULL,
            lrb_fk INTEGER NOT NULL,
            pfile_fk INTEGER NOT NULL,
            start INTEGER NOT NULL,
            len INTEGER NOT NULL,
            FOREIGN KEY (lrb_fk) REFERENCES license_ref_bulk(lrb_pk)
        );

        CREATE INDEX IF NOT EXISTS idx_license_file_pfile ON license_file(pfile_fk);
        CREATE INDEX IF NOT EXISTS idx_highlight_fl ON highlight(fl_fk);
        CREATE INDEX IF NOT EXISTS idx_keyword_pfile ON highlight_keyword(pfile_fk);
        CREATE INDEX IF NOT EXISTS idx_bulk_pfile ON highlight_bulk(pfile_fk);
        "#,
    )?;

    if current_version == 0 {
        conn.execute(&format!("PRAGMA user_version = {}", SCHEMA_VERSION), [])?;
    } else if current_version != SCHEMA_VERSION {
        log::warn!(
            "Database reports schema version {} (expected {}); reading it as-is",
            current_version,
            SCHEMA_VERSION
        );
    }

    Ok(())
}

/// Create an upload-tree table if it does not exist yet.
pub fn create_tree_table(conn: &Connection, tree: &TreeTable) -> Result<()> {
    // `TreeTable` only admits `uploadtree[_suffix]` names
    conn.execute_batch(&format!(
        r#"
        CREATE TABLE IF NOT EXISTS {table} (
            uploadtree_pk INTEGER PRIMARY KEY,
            pfile_fk INTEGER NOT NULL
        );
        CREATE INDEX IF NOT EXISTS idx_{table}_pfile ON {table}(pfile_fk);
        "#,
        table = tree.as_str()
    ))?;
    Ok(())
}
