use hilite_types::{Highlight, HighlightContext, Range};

use super::{HighlightSource, SourceKind};
use crate::{Result, store::HighlightStore};

/// Keyword hits on the item's content. Keyword records are not tied to a
/// license or agent, so the context filters do not apply.
pub struct KeywordSource<'a, S: HighlightStore + ?Sized> {
    store: &'a S,
}

impl<'a, S: HighlightStore + ?Sized> KeywordSource<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }
}

impl<S: HighlightStore + ?Sized> HighlightSource for KeywordSource<'_, S> {
    fn kind(&self) -> SourceKind {
        SourceKind::Keyword
    }

    fn fetch(&self, ctx: &HighlightContext) -> Result<Vec<Highlight>> {
        let rows = self.store.keyword_rows(&ctx.location)?;
        rows.into_iter()
            .map(|row| -> Result<Highlight> {
                Ok(Highlight::keyword(Range::from_row(row.start, row.len)?))
            })
            .collect()
    }
}
