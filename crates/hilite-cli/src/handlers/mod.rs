pub mod init;
pub mod scan_output;
pub mod show;
pub mod summary;

use anyhow::{Context, Result};
use hilite_engine::Aggregator;
use hilite_index::Database;
use hilite_types::{Highlight, HighlightContext};

use crate::args::TargetArgs;
use crate::config::Config;

/// Run the aggregator for a command's target, shared by `show` and `summary`
fn collect(
    db: &Database,
    config: &Config,
    target: &TargetArgs,
) -> Result<(HighlightContext, Vec<Highlight>)> {
    let ctx = target.context()?;

    if db.content_id(&ctx.location)?.is_none() {
        log::warn!("Item {} not found in the scan database", ctx.location);
    }

    let highlights = Aggregator::new(db)
        .with_sources(target.sources())
        .with_polarity(config.bulk)
        .aggregate(&ctx)
        .with_context(|| format!("Failed to collect highlights for {}", ctx.location))?;

    Ok((ctx, highlights))
}
