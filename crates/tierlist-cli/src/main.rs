mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;
use cli::{Args, Command};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let args = Args::parse();

    // Logs go to stderr so --json output stays clean
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("tierlist=warn,tierlist_core=warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let overrides = commands::StoreOverrides {
        url: args.url,
        api_key: args.api_key,
    };

    match args.command {
        Command::Leaderboard { mode, moves, json } => {
            commands::leaderboard::run(&args.config, &overrides, mode, moves, json)
        }
        Command::History {
            limit,
            expand,
            json,
        } => commands::history::run(&args.config, &overrides, limit, expand, json),
        Command::Tiers { json } => commands::tiers::run(&args.config, json),
        Command::Init { force } => commands::init::run(&args.config, force),
    }
}
