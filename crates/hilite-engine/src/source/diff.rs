use hilite_index::DiffRow;
use hilite_types::{Highlight, HighlightContext, LicenseId, LicenseRef, Range, classify};

use super::{HighlightSource, SourceKind};
use crate::{Result, store::HighlightStore};

/// Stored license matches: diff-family and signature spans with reference
/// offsets
pub struct DiffSource<'a, S: HighlightStore + ?Sized> {
    store: &'a S,
}

impl<'a, S: HighlightStore + ?Sized> DiffSource<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }
}

impl<S: HighlightStore + ?Sized> HighlightSource for DiffSource<'_, S> {
    fn kind(&self) -> SourceKind {
        SourceKind::Diff
    }

    fn fetch(&self, ctx: &HighlightContext) -> Result<Vec<Highlight>> {
        let rows = self.store.diff_rows(&ctx.location, &ctx.filter)?;
        rows.into_iter().map(highlight_from_row).collect()
    }
}

fn highlight_from_row(row: DiffRow) -> Result<Highlight> {
    let kind = classify(&row.type_code)?;
    let range = Range::from_row(row.start, row.len)?;
    // NULL reference columns read as zero
    let reference = Range::from_row(row.ref_start.unwrap_or(0), row.ref_len.unwrap_or(0))?;
    let license = row.license_ref.and_then(LicenseId::new).map(LicenseRef::Id);

    Ok(Highlight::with_reference(range, kind, reference).licensed(license))
}
