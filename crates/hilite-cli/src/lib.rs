// Highlight lookups for one file of a scanned upload.
//
// Spans come from three stored sources (diff matches, keywords, bulk
// reuse) plus free-text scanner output. The CLI never reads the scanned
// file itself; it only reports offsets.

mod args;
mod commands;
pub mod config;
mod handlers;
pub mod presentation;

pub use args::{Cli, Commands, LogLevel, OutputFormat, SourceArg, TargetArgs};
pub use commands::run;
