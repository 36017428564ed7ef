//! Load a brand/models JSON catalog into the cars table.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::info;

use autosalon_core::logging::init_tracing;
use autosalon_core::AutosalonConfig;
use autosalon_storage::import::import_file;
use autosalon_storage::AutosalonStorageEngine;

#[derive(Parser, Debug)]
#[command(name = "import-cars", version, about)]
struct Cli {
    /// JSON file: `[{name, models: [{id, name, class, year-from, cyrillic-name}]}]`
    path: PathBuf,

    #[arg(short, long, env = "AUTOSALON_CONFIG")]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let config = AutosalonConfig::load(cli.config.as_deref())?;

    let engine = AutosalonStorageEngine::open(&config.storage)
        .with_context(|| format!("opening database {}", config.storage.db_path.display()))?;
    let inserted = import_file(&cli.path, &engine)
        .with_context(|| format!("importing {}", cli.path.display()))?;

    info!(inserted, path = %cli.path.display(), "import finished");
    println!("Imported {inserted} cars");
    Ok(())
}
