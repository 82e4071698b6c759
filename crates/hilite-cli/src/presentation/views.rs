use hilite_types::{Highlight, HighlightFilter, HighlightKind};
use owo_colors::OwoColorize;
use std::fmt;

use super::view_models::{
    HighlightListViewModel, InitViewModel, ScanOutputViewModel, SummaryViewModel,
};

const KIND_WIDTH: usize = 10;
const RANGE_WIDTH: usize = 14;
const LICENSE_WIDTH: usize = 12;

/// Pad first so escape codes do not count toward the column width
fn kind_label(kind: HighlightKind, colors: bool) -> String {
    let label = format!("{:<width$}", kind.as_str(), width = KIND_WIDTH);
    if !colors {
        return label;
    }
    match kind {
        HighlightKind::Match => label.green().to_string(),
        HighlightKind::Added => label.cyan().to_string(),
        HighlightKind::Deleted => label.red().to_string(),
        HighlightKind::Changed => label.yellow().to_string(),
        HighlightKind::Signature => label.magenta().to_string(),
        HighlightKind::Keyword => label.blue().to_string(),
        HighlightKind::Bulk => label.bright_black().to_string(),
    }
}

fn write_span(f: &mut fmt::Formatter, hl: &Highlight, colors: bool) -> fmt::Result {
    let license = hl
        .license()
        .map(|l| l.to_string())
        .unwrap_or_else(|| "-".to_string());
    let reference = hl
        .reference()
        .map(|r| r.to_string())
        .unwrap_or_else(|| "-".to_string());

    writeln!(
        f,
        "  {} {:<rw$} {:<lw$} {}",
        kind_label(hl.kind(), colors),
        hl.range().to_string(),
        license,
        reference,
        rw = RANGE_WIDTH,
        lw = LICENSE_WIDTH,
    )
}

fn describe_filter(filter: &HighlightFilter) -> String {
    let mut parts = Vec::new();
    if let Some(license) = filter.license {
        parts.push(format!("license {}", license.get()));
    }
    if let Some(agent) = filter.agent {
        parts.push(format!("agent {}", agent.get()));
    }
    if let Some(highlight) = filter.highlight {
        parts.push(format!("highlight {}", highlight.get()));
    }
    parts.join(", ")
}

// --------------------------------------------------------
// Init View
// --------------------------------------------------------

pub struct InitView<'a> {
    data: &'a InitViewModel,
}

impl<'a> InitView<'a> {
    pub fn new(data: &'a InitViewModel) -> Self {
        Self { data }
    }
}

impl fmt::Display for InitView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(
            f,
            "Scan database ready: {} (schema version {})",
            self.data.database, self.data.schema_version
        )
    }
}

// --------------------------------------------------------
// Highlight List View
// --------------------------------------------------------

pub struct HighlightListView<'a> {
    data: &'a HighlightListViewModel,
    colors: bool,
}

impl<'a> HighlightListView<'a> {
    pub fn new(data: &'a HighlightListViewModel, colors: bool) -> Self {
        Self { data, colors }
    }
}

impl fmt::Display for HighlightListView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let data = self.data;
        writeln!(
            f,
            "{}#{}: {} highlight(s)",
            data.tree,
            data.item_id,
            data.highlights.len()
        )?;
        if !data.filter.is_empty() {
            writeln!(f, "Filter: {}", describe_filter(&data.filter))?;
        }

        if data.highlights.is_empty() {
            return Ok(());
        }

        writeln!(
            f,
            "  {:<kw$} {:<rw$} {:<lw$} REFERENCE",
            "KIND",
            "RANGE",
            "LICENSE",
            kw = KIND_WIDTH,
            rw = RANGE_WIDTH,
            lw = LICENSE_WIDTH,
        )?;
        for hl in &data.highlights {
            write_span(f, hl, self.colors)?;
        }
        Ok(())
    }
}

// --------------------------------------------------------
// Summary View
// --------------------------------------------------------

pub struct SummaryView<'a> {
    data: &'a SummaryViewModel,
    colors: bool,
}

impl<'a> SummaryView<'a> {
    pub fn new(data: &'a SummaryViewModel, colors: bool) -> Self {
        Self { data, colors }
    }
}

impl fmt::Display for SummaryView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let summary = &self.data.summary;
        writeln!(
            f,
            "{}#{}: {} highlight(s)",
            self.data.tree, self.data.item_id, summary.total
        )?;

        for (kind, count) in &summary.by_kind {
            writeln!(f, "  {} {}", kind_label(*kind, self.colors), count)?;
        }

        let licenses: Vec<String> = summary
            .license_ids
            .iter()
            .map(|id| format!("#{}", id))
            .chain(summary.license_names.iter().cloned())
            .collect();
        if licenses.is_empty() {
            writeln!(f, "Licenses: none")
        } else {
            writeln!(f, "Licenses: {}", licenses.join(", "))
        }
    }
}

// --------------------------------------------------------
// Scan Output View
// --------------------------------------------------------

pub struct ScanOutputView<'a> {
    data: &'a ScanOutputViewModel,
    colors: bool,
}

impl<'a> ScanOutputView<'a> {
    pub fn new(data: &'a ScanOutputViewModel, colors: bool) -> Self {
        Self { data, colors }
    }
}

impl fmt::Display for ScanOutputView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.data.reports.is_empty() {
            return writeln!(f, "No scanner output.");
        }

        for (i, report) in self.data.reports.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            // Unparsed blocks carry their raw text as the summary
            match &report.file {
                Some(file) => writeln!(f, "{}: {}", file, report.summary)?,
                None => writeln!(f, "{}", report.summary)?,
            }
            for hl in &report.highlights {
                write_span(f, hl, self.colors)?;
            }
        }
        Ok(())
    }
}
