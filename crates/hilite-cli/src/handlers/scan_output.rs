use anyhow::{Context, Result};
use hilite_engine::highlights_from_scanner_output;
use std::io::Read;
use std::path::Path;

use crate::presentation::{CommandResultViewModel, ConsoleRenderer, ScanOutputViewModel};

pub fn handle(file: Option<&Path>, renderer: &ConsoleRenderer) -> Result<()> {
    let text = match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read scanner output {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read scanner output from stdin")?;
            buf
        }
    };

    let reports = highlights_from_scanner_output(&text);
    log::debug!("Parsed {} scanner block(s)", reports.len());

    renderer.render(CommandResultViewModel::new(ScanOutputViewModel { reports }))
}
