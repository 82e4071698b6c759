use rusqlite::{Connection, params};

use crate::{
    Result,
    records::{KeywordRecord, KeywordRow},
};

pub fn insert(conn: &Connection, record: &KeywordRecord) -> Result<()> {
    conn.execute(
        r#"
        INSERT INTO highlight_keyword (pfile_fk, start, len)
        VALUES (?1, ?2, ?3)
        "#,
        params![record.pfile_id, record.start, record.len],
    )?;

    Ok(())
}

pub fn list_by_content(conn: &Connection, pfile_id: i64) -> Result<Vec<KeywordRow>> {
    let mut stmt = conn.prepare(
        r#"
        SELECT start, len
        FROM highlight_keyword
        WHERE pfile_fk = ?1
        ORDER BY hk_pk
        "#,
    )?;

    let rows = stmt
        .query_map([pfile_id], |row| {
            Ok(KeywordRow {
                start: row.get(0)?,
                len: row.get(1)?,
            })
        })?
        .collect::<std::result::Result<Vec<_>, rusqlite::Error>>()?;

    Ok(rows)
}
