use std::path::PathBuf;

use clap::Parser;

use autosalon_core::logging::init_tracing;
use autosalon_core::AutosalonConfig;

/// Car dealership catalog and ordering API.
#[derive(Parser, Debug)]
#[command(name = "autosalon", version, about)]
struct Cli {
    /// TOML config file. Environment variables override its values.
    #[arg(short, long, env = "AUTOSALON_CONFIG")]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let config = AutosalonConfig::load(cli.config.as_deref())?;
    autosalon_server::serve(config).await
}
