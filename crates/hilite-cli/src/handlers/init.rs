use anyhow::Result;
use hilite_index::{Database, SCHEMA_VERSION};
use std::path::Path;

use crate::presentation::{CommandResultViewModel, ConsoleRenderer, InitViewModel};

/// Create the database file and any missing table. Existing tables and
/// their rows are left as they are.
pub fn handle(db_path: &Path, renderer: &ConsoleRenderer) -> Result<()> {
    if let Some(parent) = db_path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }

    // Opening for writing runs the schema setup
    Database::open(db_path)?;
    log::info!("Initialized schema in {}", db_path.display());

    let view_model = InitViewModel::new(db_path, SCHEMA_VERSION);
    renderer.render(CommandResultViewModel::new(view_model))
}
