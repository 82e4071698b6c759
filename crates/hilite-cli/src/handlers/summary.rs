use anyhow::Result;
use hilite_engine::summarize;
use hilite_index::Database;

use crate::args::TargetArgs;
use crate::config::Config;
use crate::presentation::{CommandResultViewModel, ConsoleRenderer, SummaryViewModel};

pub fn handle(
    db: &Database,
    config: &Config,
    target: &TargetArgs,
    renderer: &ConsoleRenderer,
) -> Result<()> {
    let (ctx, highlights) = super::collect(db, config, target)?;

    let view_model = SummaryViewModel::new(&ctx, summarize(&highlights));
    renderer.render(CommandResultViewModel::new(view_model))
}
