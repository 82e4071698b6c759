use rusqlite::{Connection, params};

use super::predicates::Predicates;
use crate::{
    Result,
    records::{BulkHighlightRecord, BulkLicenseRecord, BulkRow, BulkRowFilter},
};

pub fn insert_license(conn: &Connection, record: &BulkLicenseRecord) -> Result<()> {
    conn.execute(
        r#"
        INSERT INTO license_ref_bulk (lrb_pk, rf_fk, removing)
        VALUES (?1, ?2, ?3)
        ON CONFLICT(lrb_pk) DO UPDATE SET
            rf_fk = ?2,
            removing = ?3
        "#,
        params![record.id, record.license_id, record.removing],
    )?;

    Ok(())
}

pub fn insert_highlight(conn: &Connection, record: &BulkHighlightRecord) -> Result<()> {
    conn.execute(
        r#"
        INSERT INTO highlight_bulk (clearing_event_fk, lrb_fk, pfile_fk, start, len)
        VALUES (?1, ?2, ?3, ?4, ?5)
        "#,
        params![
            record.clearing_event_id,
            record.bulk_license_id,
            record.pfile_id,
            record.start,
            record.len
        ],
    )?;

    Ok(())
}

pub fn list_by_content(
    conn: &Connection,
    pfile_id: i64,
    filter: &BulkRowFilter,
) -> Result<Vec<BulkRow>> {
    let mut preds = Predicates::new();
    preds
        .bind("hb.pfile_fk = ?", pfile_id)
        .bind_opt("lrb.rf_fk = ?", filter.license.map(|id| id.get()))
        .bind_opt("lrb.removing = ?", filter.removing)
        .bind_opt(
            "hb.clearing_event_fk = ?",
            filter.clearing_event.map(|id| id.get()),
        );

    let query = format!(
        r#"
        SELECT hb.clearing_event_fk, hb.start, hb.len, lrb.rf_fk, lrb.removing
        FROM highlight_bulk hb
        INNER JOIN license_ref_bulk lrb ON lrb.lrb_pk = hb.lrb_fk
        WHERE {}
        ORDER BY hb.hb_pk
        "#,
        preds.where_clause()
    );

    let mut stmt = conn.prepare(&query)?;
    let rows = stmt
        .query_map(preds.params().as_slice(), |row| {
            Ok(BulkRow {
                clearing_event: row.get(0)?,
                start: row.get(1)?,
                len: row.get(2)?,
                license_ref: row.get(3)?,
                removing: row.get(4)?,
            })
        })?
        .collect::<std::result::Result<Vec<_>, rusqlite::Error>>()?;

    Ok(rows)
}
