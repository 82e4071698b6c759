use super::enums::SourceArg;
use clap::{Args, Subcommand};
use hilite_engine::{SourceKind, SourceSet};
use hilite_types::{HighlightContext, HighlightFilter, ItemLocation, TreeTable};
use std::path::PathBuf;

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Create the highlight tables in the scan database")]
    Init,

    #[command(about = "Print the highlights of one file in emission order")]
    Show {
        #[command(flatten)]
        target: TargetArgs,
    },

    #[command(about = "Count highlights per kind and list the licenses they point at")]
    Summary {
        #[command(flatten)]
        target: TargetArgs,
    },

    #[command(about = "Parse free-text scanner output from a file or stdin")]
    ScanOutput {
        /// Scanner output file; reads stdin when omitted
        file: Option<PathBuf>,
    },
}

/// Which item to look at and how to narrow its highlights
#[derive(Args, Debug, Clone)]
pub struct TargetArgs {
    /// Item id in the upload tree
    #[arg(long)]
    pub item: i64,

    /// Upload tree table holding the item
    #[arg(long, default_value = TreeTable::DEFAULT_NAME)]
    pub tree: String,

    /// Only highlights attributed to this license id
    #[arg(long)]
    pub license: Option<i64>,

    /// Only highlights produced by this agent id
    #[arg(long)]
    pub agent: Option<i64>,

    /// Only this license-file match or clearing event
    #[arg(long)]
    pub highlight: Option<i64>,

    /// Leave a source out (repeatable)
    #[arg(long, value_name = "SOURCE")]
    pub skip: Vec<SourceArg>,
}

impl TargetArgs {
    pub fn context(&self) -> hilite_types::Result<HighlightContext> {
        let tree = TreeTable::new(self.tree.as_str())?;
        let filter = HighlightFilter::from_raw(self.license, self.agent, self.highlight);
        Ok(HighlightContext::new(ItemLocation::new(self.item, tree)).with_filter(filter))
    }

    pub fn sources(&self) -> SourceSet {
        self.skip
            .iter()
            .fold(SourceSet::all(), |set, skip| set.without(SourceKind::from(*skip)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Cli;
    use clap::Parser;

    fn target(args: &[&str]) -> TargetArgs {
        let cli = Cli::try_parse_from(args).unwrap();
        match cli.command {
            Commands::Show { target } | Commands::Summary { target } => target,
            _ => panic!("expected a target command"),
        }
    }

    #[test]
    fn test_target_defaults() {
        let target = target(&["hilite", "show", "--item", "5"]);
        let ctx = target.context().unwrap();

        assert_eq!(ctx.location.item_id, 5);
        assert_eq!(ctx.location.tree, TreeTable::default());
        assert!(ctx.filter.is_empty());
        assert_eq!(target.sources(), SourceSet::all());
    }

    #[test]
    fn test_zero_ids_mean_unset() {
        let target = target(&[
            "hilite", "summary", "--item", "5", "--license", "0", "--agent", "3",
        ]);
        let ctx = target.context().unwrap();

        assert_eq!(ctx.filter.license, None);
        assert_eq!(ctx.filter.agent.map(|a| a.get()), Some(3));
    }

    #[test]
    fn test_skip_is_repeatable() {
        let target = target(&[
            "hilite", "show", "--item", "1", "--skip", "diff", "--skip", "bulk",
        ]);
        let sources = target.sources();

        assert!(!sources.contains(SourceKind::Diff));
        assert!(sources.contains(SourceKind::Keyword));
        assert!(!sources.contains(SourceKind::Bulk));
    }

    #[test]
    fn test_bad_tree_name_is_rejected() {
        let target = target(&["hilite", "show", "--item", "1", "--tree", "users"]);
        assert!(target.context().is_err());
    }
}
