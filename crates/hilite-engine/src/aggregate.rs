use hilite_types::{Highlight, HighlightContext};

use crate::{
    Result,
    source::{
        BulkPolarity, BulkSource, DiffSource, HighlightSource, KeywordSource, SourceKind,
        SourceSet,
    },
    store::HighlightStore,
};

/// Concatenates the structured sources for one request.
///
/// Output order is diff, then keyword, then bulk highlights, each in the
/// order its source produced them. Nothing is merged, deduplicated or
/// re-sorted; overlapping spans of different kinds are expected. A failing
/// source fails the whole aggregation.
pub struct Aggregator<'a, S: HighlightStore + ?Sized> {
    store: &'a S,
    sources: SourceSet,
    polarity: BulkPolarity,
}

impl<'a, S: HighlightStore + ?Sized> Aggregator<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self {
            store,
            sources: SourceSet::all(),
            polarity: BulkPolarity::default(),
        }
    }

    pub fn with_sources(mut self, sources: SourceSet) -> Self {
        self.sources = sources;
        self
    }

    pub fn with_polarity(mut self, polarity: BulkPolarity) -> Self {
        self.polarity = polarity;
        self
    }

    pub fn aggregate(&self, ctx: &HighlightContext) -> Result<Vec<Highlight>> {
        let mut highlights = Vec::new();

        for kind in SourceKind::ORDER {
            if !self.sources.contains(kind) {
                continue;
            }
            match kind {
                SourceKind::Diff => {
                    collect_into(&DiffSource::new(self.store), ctx, &mut highlights)?
                }
                SourceKind::Keyword => {
                    collect_into(&KeywordSource::new(self.store), ctx, &mut highlights)?
                }
                SourceKind::Bulk => collect_into(
                    &BulkSource::new(self.store, self.polarity),
                    ctx,
                    &mut highlights,
                )?,
            }
        }

        log::debug!(
            "Aggregated {} highlights for {}",
            highlights.len(),
            ctx.location
        );
        Ok(highlights)
    }
}

fn collect_into<H: HighlightSource>(
    source: &H,
    ctx: &HighlightContext,
    out: &mut Vec<Highlight>,
) -> Result<()> {
    let highlights = source.fetch(ctx).inspect_err(|err| {
        log::debug!("{} source failed for {}: {}", source.kind(), ctx.location, err);
    })?;
    log::debug!(
        "{} source returned {} highlights for {}",
        source.kind(),
        highlights.len(),
        ctx.location
    );
    out.extend(highlights);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use crate::testing::{MemoryStore, bulk_row, context, diff_row, keyword_row};
    use hilite_types::{HighlightFilter, HighlightKind};

    fn full_store() -> MemoryStore {
        MemoryStore {
            diff: vec![
                diff_row("M", 50, 10, Some(4), 0, 10),
                diff_row("M+", 0, 3, Some(4), 10, 0),
            ],
            keyword: vec![keyword_row(52, 2)],
            bulk: vec![bulk_row(1, 1, 9)],
            ..Default::default()
        }
    }

    #[test]
    fn test_order_is_diff_keyword_bulk() {
        let store = full_store();
        let spans = Aggregator::new(&store).aggregate(&context(1)).unwrap();

        let kinds: Vec<_> = spans.iter().map(|s| s.kind()).collect();
        assert_eq!(
            kinds,
            vec![
                HighlightKind::Match,
                HighlightKind::Added,
                HighlightKind::Keyword,
                HighlightKind::Bulk
            ]
        );
        // Source order kept even though the second diff span starts earlier
        assert_eq!(spans[0].start(), 50);
        assert_eq!(spans[1].start(), 0);
        // Overlap is allowed
        assert!(spans[0].range().contains(&spans[2].range()));
    }

    #[test]
    fn test_empty_sources_yield_empty_result() {
        let store = MemoryStore::default();
        let spans = Aggregator::new(&store).aggregate(&context(1)).unwrap();
        assert!(spans.is_empty());
    }

    #[test]
    fn test_inactive_sources_are_skipped() {
        let store = full_store();
        let spans = Aggregator::new(&store)
            .with_sources(SourceSet::all().without(SourceKind::Diff))
            .aggregate(&context(1))
            .unwrap();

        let kinds: Vec<_> = spans.iter().map(|s| s.kind()).collect();
        assert_eq!(kinds, vec![HighlightKind::Keyword, HighlightKind::Bulk]);
        assert!(store.diff_filters.borrow().is_empty());
    }

    #[test]
    fn test_failing_source_fails_aggregation() {
        let store = MemoryStore {
            keyword_fails: true,
            ..full_store()
        };

        let err = Aggregator::new(&store).aggregate(&context(1)).unwrap_err();
        assert!(matches!(err, Error::DataSourceUnavailable(_)));
    }

    #[test]
    fn test_filters_reach_every_filtered_source() {
        let store = full_store();
        let filter = HighlightFilter::from_raw(Some(4), Some(7), Some(12));
        let ctx = context(1).with_filter(filter);

        Aggregator::new(&store)
            .with_polarity(BulkPolarity { removal_agent: 7 })
            .aggregate(&ctx)
            .unwrap();

        assert_eq!(store.diff_filters.borrow().as_slice(), &[filter]);
        let bulk = store.bulk_filters.borrow();
        assert_eq!(bulk.len(), 1);
        assert_eq!(bulk[0].license, filter.license);
        assert_eq!(bulk[0].removing, Some(false));
        assert_eq!(bulk[0].clearing_event, filter.highlight);
    }

    #[test]
    fn test_aggregation_is_repeatable() {
        let store = full_store();
        let aggregator = Aggregator::new(&store);
        let first = aggregator.aggregate(&context(1)).unwrap();
        let second = aggregator.aggregate(&context(1)).unwrap();
        assert_eq!(first, second);
    }
}
