//! `show` and `summary` read scan databases they do not own.

use hilite_testing::{TestWorld, assertions};
use std::path::{Path, PathBuf};

/// Database as a scanner leaves it: only the diff tables, no schema version
fn external_scan_db(world: &TestWorld) -> PathBuf {
    let path = world.data_dir().join("external.db");
    let conn = rusqlite::Connection::open(&path).unwrap();
    conn.execute_batch(
        r#"
        CREATE TABLE uploadtree (uploadtree_pk INTEGER PRIMARY KEY, pfile_fk INTEGER NOT NULL);
        CREATE TABLE license_file (
            fl_pk INTEGER PRIMARY KEY, rf_fk INTEGER,
            agent_fk INTEGER NOT NULL, pfile_fk INTEGER NOT NULL
        );
        CREATE TABLE highlight (
            hl_pk INTEGER PRIMARY KEY AUTOINCREMENT, fl_fk INTEGER NOT NULL,
            type TEXT NOT NULL, start INTEGER NOT NULL, len INTEGER NOT NULL,
            rf_start INTEGER, rf_len INTEGER
        );
        INSERT INTO uploadtree VALUES (1, 100);
        INSERT INTO license_file VALUES (1, 7, 3, 100);
        INSERT INTO highlight (fl_fk, type, start, len, rf_start, rf_len) VALUES (1, 'M ', 0, 10, 0, 10);
        INSERT INTO highlight (fl_fk, type, start, len, rf_start, rf_len) VALUES (1, 'L', 30, 6, 200, 6);
        "#,
    )
    .unwrap();
    path
}

fn schema_state(path: &Path) -> (i64, i64) {
    let conn = rusqlite::Connection::open(path).unwrap();
    let objects = conn
        .query_row("SELECT COUNT(*) FROM sqlite_master", [], |row| row.get(0))
        .unwrap();
    let version = conn
        .query_row("PRAGMA user_version", [], |row| row.get(0))
        .unwrap();
    (objects, version)
}

#[test]
fn test_show_and_summary_leave_the_database_untouched() {
    let world = TestWorld::new();
    let path = external_scan_db(&world);
    let db = path.to_str().unwrap();
    let before = schema_state(&path);

    let result = world
        .run(&[
            "show", "--db", db, "--item", "1", "--skip", "keyword", "--skip", "bulk", "--format",
            "json",
        ])
        .unwrap();
    assert!(result.success(), "stderr: {}", result.stderr());
    assertions::assert_kind_sequence(&result.json().unwrap(), &["match", "signature"]).unwrap();

    let result = world
        .run(&[
            "summary", "--db", db, "--item", "1", "--skip", "keyword", "--skip", "bulk",
        ])
        .unwrap();
    assert!(result.success(), "stderr: {}", result.stderr());

    assert_eq!(schema_state(&path), before);
    assert_eq!(before.1, 0);
}

#[test]
fn test_missing_source_table_is_reported_not_created() {
    let world = TestWorld::new();
    let path = external_scan_db(&world);
    let before = schema_state(&path);

    let result = world
        .run(&["show", "--db", path.to_str().unwrap(), "--item", "1"])
        .unwrap();

    assert!(!result.success());
    assert!(result.stderr().contains("Database schema mismatch"));
    assert_eq!(schema_state(&path), before);
}
