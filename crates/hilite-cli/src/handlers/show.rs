use anyhow::Result;
use hilite_index::Database;

use crate::args::TargetArgs;
use crate::config::Config;
use crate::presentation::{CommandResultViewModel, ConsoleRenderer, HighlightListViewModel};

pub fn handle(
    db: &Database,
    config: &Config,
    target: &TargetArgs,
    renderer: &ConsoleRenderer,
) -> Result<()> {
    let (ctx, highlights) = super::collect(db, config, target)?;

    let view_model = HighlightListViewModel::new(&ctx, highlights);
    renderer.render(CommandResultViewModel::new(view_model))
}
