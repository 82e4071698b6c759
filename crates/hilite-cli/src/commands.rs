use super::args::{Cli, Commands};
use super::handlers;
use crate::config::{self, CONFIG_FILE, Config};
use crate::presentation::ConsoleRenderer;
use anyhow::Result;
use hilite_index::Database;
use std::path::PathBuf;

pub fn run(cli: Cli) -> Result<()> {
    init_logging(&cli);

    let config_path = match &cli.config {
        Some(path) => config::expand_tilde(path),
        None => config::resolve_workspace_path()?.join(CONFIG_FILE),
    };
    let config = Config::load_from(&config_path)?;
    let data_dir = config_path
        .parent()
        .map(PathBuf::from)
        .unwrap_or_default();
    let db_path = config.database_path(cli.db.as_deref(), &data_dir);
    log::debug!("Using database {}", db_path.display());

    let renderer = ConsoleRenderer::new(cli.format);

    match cli.command {
        Commands::Init => handlers::init::handle(&db_path, &renderer),

        Commands::Show { target } => {
            let db = open_existing(&db_path)?;
            handlers::show::handle(&db, &config, &target, &renderer)
        }

        Commands::Summary { target } => {
            let db = open_existing(&db_path)?;
            handlers::summary::handle(&db, &config, &target, &renderer)
        }

        Commands::ScanOutput { file } => handlers::scan_output::handle(file.as_deref(), &renderer),
    }
}

fn init_logging(cli: &Cli) {
    // RUST_LOG still wins over --log-level
    let mut builder = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(cli.log_level.to_string()),
    );
    let _ = builder.target(env_logger::Target::Stderr).try_init();
}

fn open_existing(db_path: &std::path::Path) -> Result<Database> {
    if !db_path.exists() {
        anyhow::bail!(
            "Database not found: {}\nRun `hilite init` or point --db at a scan database.",
            db_path.display()
        );
    }
    Ok(Database::open_read_only(db_path)?)
}
