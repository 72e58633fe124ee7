//! CLI argument parsing tests.
//!
//! These tests verify that command-line arguments are parsed correctly
//! without actually executing the commands (which would require a record store).

use clap::Parser;
use tierlist_core::{FilterMode, ModeKey};

// Re-create Args structure for testing since it's not publicly exported
#[derive(Parser)]
#[command(name = "tierlist")]
struct Args {
    #[arg(long, value_name = "FILE", default_value = "tierlist.toml")]
    config: String,

    #[arg(long)]
    url: Option<String>,

    #[arg(long)]
    api_key: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand)]
enum Command {
    Leaderboard {
        #[arg(long, short, default_value = "overall")]
        mode: FilterMode,
        #[arg(long)]
        moves: bool,
        #[arg(long)]
        json: bool,
    },
    History {
        #[arg(long, short)]
        limit: Option<usize>,
        #[arg(long, value_name = "N")]
        expand: Option<usize>,
        #[arg(long)]
        json: bool,
    },
    Tiers {
        #[arg(long)]
        json: bool,
    },
    Init {
        #[arg(long)]
        force: bool,
    },
}

#[test]
fn test_parse_requires_subcommand() {
    assert!(Args::try_parse_from(["tierlist"]).is_err());
}

#[test]
fn test_parse_leaderboard_defaults() {
    let args = Args::try_parse_from(["tierlist", "leaderboard"]).unwrap();
    assert_eq!(args.config, "tierlist.toml");
    assert!(args.url.is_none());
    match args.command {
        Command::Leaderboard { mode, moves, json } => {
            assert_eq!(mode, FilterMode::Overall);
            assert!(!moves);
            assert!(!json);
        }
        _ => panic!("Expected Leaderboard command"),
    }
}

#[test]
fn test_parse_leaderboard_mode() {
    let args =
        Args::try_parse_from(["tierlist", "leaderboard", "--mode", "Axe", "--moves"]).unwrap();
    match args.command {
        Command::Leaderboard { mode, moves, .. } => {
            assert_eq!(mode, FilterMode::Mode(ModeKey::Axe));
            assert!(moves);
        }
        _ => panic!("Expected Leaderboard command"),
    }
}

#[test]
fn test_parse_leaderboard_short_mode() {
    let args = Args::try_parse_from(["tierlist", "leaderboard", "-m", "diapot", "--json"]).unwrap();
    match args.command {
        Command::Leaderboard { mode, json, .. } => {
            assert_eq!(mode, FilterMode::Mode(ModeKey::Diapot));
            assert!(json);
        }
        _ => panic!("Expected Leaderboard command"),
    }
}

#[test]
fn test_parse_leaderboard_unknown_mode() {
    assert!(Args::try_parse_from(["tierlist", "leaderboard", "--mode", "bedwars"]).is_err());
}

#[test]
fn test_parse_history() {
    let args =
        Args::try_parse_from(["tierlist", "history", "-l", "20", "--expand", "3"]).unwrap();
    match args.command {
        Command::History {
            limit,
            expand,
            json,
        } => {
            assert_eq!(limit, Some(20));
            assert_eq!(expand, Some(3));
            assert!(!json);
        }
        _ => panic!("Expected History command"),
    }
}

#[test]
fn test_parse_history_invalid_limit() {
    assert!(Args::try_parse_from(["tierlist", "history", "--limit", "ten"]).is_err());
}

#[test]
fn test_parse_tiers_json() {
    let args = Args::try_parse_from(["tierlist", "tiers", "--json"]).unwrap();
    assert!(matches!(args.command, Command::Tiers { json: true }));
}

#[test]
fn test_parse_global_options() {
    let args = Args::try_parse_from([
        "tierlist",
        "--config",
        "custom.toml",
        "--url",
        "https://example.supabase.co",
        "--api-key",
        "anon",
        "init",
        "--force",
    ])
    .unwrap();
    assert_eq!(args.config, "custom.toml");
    assert_eq!(args.url.as_deref(), Some("https://example.supabase.co"));
    assert_eq!(args.api_key.as_deref(), Some("anon"));
    assert!(matches!(args.command, Command::Init { force: true }));
}
