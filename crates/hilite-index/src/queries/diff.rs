use hilite_types::{HighlightFilter, ItemLocation};
use rusqlite::{Connection, params};

use super::predicates::Predicates;
use crate::{
    Result,
    records::{DiffRow, HighlightRecord, LicenseFileRecord},
};

pub fn insert_license_file(conn: &Connection, record: &LicenseFileRecord) -> Result<()> {
    conn.execute(
        r#"
        INSERT INTO license_file (fl_pk, rf_fk, agent_fk, pfile_fk)
        VALUES (?1, ?2, ?3, ?4)
        ON CONFLICT(fl_pk) DO UPDATE SET
            rf_fk = ?2,
            agent_fk = ?3,
            pfile_fk = ?4
        "#,
        params![
            record.id,
            record.license_id,
            record.agent_id,
            record.pfile_id
        ],
    )?;

    Ok(())
}

pub fn insert_highlight(conn: &Connection, record: &HighlightRecord) -> Result<()> {
    conn.execute(
        r#"
        INSERT INTO highlight (fl_fk, type, start, len, rf_start, rf_len)
        VALUES (?1, ?2, ?3, ?4, ?5, ?6)
        "#,
        params![
            record.license_file_id,
            &record.type_code,
            record.start,
            record.len,
            record.ref_start,
            record.ref_len
        ],
    )?;

    Ok(())
}

/// Diff-family and signature spans of an item, in storage order.
///
/// `GLOB` keeps the code match case-sensitive; `rtrim` accepts the padded
/// single-letter codes of fixed-width columns.
pub fn list(
    conn: &Connection,
    location: &ItemLocation,
    filter: &HighlightFilter,
) -> Result<Vec<DiffRow>> {
    let mut preds = Predicates::new();
    preds
        .bind("ut.uploadtree_pk = ?", location.item_id)
        .always("(h.type GLOB 'M?' OR rtrim(h.type) IN ('M', 'L'))")
        .bind_opt("lf.rf_fk = ?", filter.license.map(|id| id.get()))
        .bind_opt("lf.agent_fk = ?", filter.agent.map(|id| id.get()))
        .bind_opt("lf.fl_pk = ?", filter.highlight.map(|id| id.get()));

    let query = format!(
        r#"
        SELECT h.start, h.len, h.type, lf.rf_fk, h.rf_start, h.rf_len
        FROM license_file lf
        INNER JOIN highlight h ON lf.fl_pk = h.fl_fk
        INNER JOIN {} ut ON ut.pfile_fk = lf.pfile_fk
        WHERE {}
        ORDER BY h.hl_pk
        "#,
        location.tree.as_str(),
        preds.where_clause()
    );

    let mut stmt = conn.prepare(&query)?;
    let rows = stmt
        .query_map(preds.params().as_slice(), |row| {
            Ok(DiffRow {
                start: row.get(0)?,
                len: row.get(1)?,
                type_code: row.get(2)?,
                license_ref: row.get(3)?,
                ref_start: row.get(4)?,
                ref_len: row.get(5)?,
            })
        })?
        .collect::<std::result::Result<Vec<_>, rusqlite::Error>>()?;

    Ok(rows)
}
