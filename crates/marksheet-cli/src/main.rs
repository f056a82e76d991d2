mod cli;
mod cli_utils;
mod commands;

use anyhow::Result;
use clap::Parser;
use cli::{Args, Command};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging (defaults to warn when RUST_LOG is unset)
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("marksheet=warn,marksheet_core=warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let config = cli_utils::load_config(&args.config, args.no_color);

    match args.command {
        Some(Command::Grade { percentage }) => commands::grade::run(percentage, &config),
        Some(Command::Calc {
            entries,
            file,
            format,
            output,
        }) => commands::calc::run(
            entries,
            file.as_deref(),
            format,
            output.as_deref(),
            &config,
        ),
        Some(Command::Sheet) | None => commands::sheet::run(&config),
    }
}
