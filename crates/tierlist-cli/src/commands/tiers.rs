//! Tiers command: point values per tier.

use anyhow::Result;
use tierlist_core::export::{format_tier_info_console, tier_info_json};
use tracing::warn;

use super::{load_config, print_json};

pub fn run(config_path: &str, json: bool) -> Result<()> {
    let config = load_config(config_path)?;
    let table = config.scoring.score_table()?;

    if !table.is_monotonic() {
        warn!("Point table is not monotonic: a better tier scores less than a worse one");
    }

    if json {
        return print_json(&tier_info_json(&table));
    }
    println!("{}", format_tier_info_console(&table));
    Ok(())
}
