//! lakestats CLI - collection runs and lake management for the lake
//! monitoring store.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "lakestats",
    version,
    about = "Lake level monitoring toolkit"
)]
struct Cli {
    #[command(subcommand)]
    command: lakestats_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    lakestats_cmd::run(cli.command).await
}
