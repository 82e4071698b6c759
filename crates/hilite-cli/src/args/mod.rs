mod commands;
mod enums;

pub use commands::*;
pub use enums::*;

use clap::Parser;

#[derive(Parser)]
#[command(name = "hilite")]
#[command(about = "Show license-scan highlights for a file", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Config file (defaults to config.toml in the data directory)
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// Scan database (overrides the config file)
    #[arg(long, global = true)]
    pub db: Option<String>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[arg(long, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Commands,
}
