use clap::Parser;

mod args;
mod commands;
mod output;

use args::Cli;

fn main() -> anyhow::Result<()> {
    craftledger_observability::init();

    let cli = Cli::parse();
    let config = cli.store_config();
    tracing::debug!(path = %config.products_path().display(), "using product file");

    commands::run(cli.command, &config)
}
