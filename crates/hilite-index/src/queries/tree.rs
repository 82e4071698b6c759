use hilite_types::TreeTable;
use rusqlite::{Connection, OptionalExtension, params};

use crate::{Result, records::TreeItemRecord};

pub fn insert(conn: &Connection, tree: &TreeTable, item: &TreeItemRecord) -> Result<()> {
    conn.execute(
        &format!(
            r#"
            INSERT INTO {} (uploadtree_pk, pfile_fk)
            VALUES (?1, ?2)
            ON CONFLICT(uploadtree_pk) DO UPDATE SET pfile_fk = ?2
            "#,
            tree.as_str()
        ),
        params![item.item_id, item.pfile_id],
    )?;

    Ok(())
}

/// Resolve the file content behind a tree item
pub fn content_id(conn: &Connection, tree: &TreeTable, item_id: i64) -> Result<Option<i64>> {
    let pfile = conn
        .query_row(
            &format!(
                "SELECT pfile_fk FROM {} WHERE uploadtree_pk = ?1",
                tree.as_str()
            ),
            [item_id],
            |row| row.get(0),
        )
        .optional()?;

    Ok(pfile)
}
