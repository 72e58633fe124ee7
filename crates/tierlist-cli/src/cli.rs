//! CLI argument definitions for tierlist.

use clap::{Parser, Subcommand};
use tierlist_core::FilterMode;

#[derive(Parser)]
#[command(name = "tierlist")]
#[command(about = "Minecraft PvP tier list leaderboard", version)]
pub struct Args {
    /// Config file path
    #[arg(long, value_name = "FILE", default_value = "tierlist.toml")]
    pub config: String,

    /// Record store URL
    #[arg(long, env = "TIERLIST_STORE_URL")]
    pub url: Option<String>,

    /// Record store API key
    #[arg(long, env = "TIERLIST_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Show the ranked leaderboard
    Leaderboard {
        /// Ranking filter (overall, axe, sword, mace, smp, uhc, nethop, vanilla, diapot)
        #[arg(long, short, default_value = "overall")]
        mode: FilterMode,
        /// Show how rows moved relative to the overall board
        #[arg(long)]
        moves: bool,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show the tier test history, newest first
    History {
        /// Maximum number of entries to show
        #[arg(long, short)]
        limit: Option<usize>,
        /// Expand the fights of the N-th listed entry (1-based)
        #[arg(long, value_name = "N")]
        expand: Option<usize>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show point values per tier
    Tiers {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Write a commented config template
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}
