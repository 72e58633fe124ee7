//! Leaderboard command.

use std::collections::{BTreeMap, HashMap};

use anyhow::{Context, Result};
use tierlist_core::export::{format_leaderboard_console, leaderboard_json};
use tierlist_core::{
    Animation, FilterMode, LayoutProvider, LeaderboardController, Rect, RowKey,
};
use tracing::debug;

use super::{StoreOverrides, load_config, open_store, print_json};

/// Terminal rows: one line per player, in display order.
struct LineLayout {
    lines: HashMap<RowKey, usize>,
    order: Vec<RowKey>,
}

impl LineLayout {
    fn new(order: Vec<RowKey>) -> Self {
        let lines = order
            .iter()
            .enumerate()
            .map(|(line, key)| (key.clone(), line))
            .collect();
        Self { lines, order }
    }
}

impl LayoutProvider for LineLayout {
    fn row_keys(&self) -> Vec<RowKey> {
        self.order.clone()
    }

    fn rect(&self, key: &str) -> Option<Rect> {
        self.lines
            .get(key)
            .map(|&line| Rect::new(line as f64, 0.0, 1.0, 1.0))
    }
}

pub fn run(
    config_path: &str,
    overrides: &StoreOverrides,
    filter: FilterMode,
    moves: bool,
    json: bool,
) -> Result<()> {
    let config = load_config(config_path)?;
    let table = config.scoring.score_table()?;
    let store = open_store(&config, overrides)?;

    let mut view = LeaderboardController::new(table);
    view.load(&store).context("Failed to load players")?;

    let overall = LineLayout::new(view.row_order());
    let animations = match view.request_filter(filter, &overall) {
        Some(ticket) => {
            let ranked = LineLayout::new(view.row_order());
            view.on_layout_committed(ticket, &ranked)
        }
        None => BTreeMap::new(),
    };
    debug!("{} rows moved switching to {}", animations.len(), filter);

    if json {
        return print_json(&leaderboard_json(view.entries(), view.filter()));
    }

    println!("{}", format_leaderboard_console(view.entries(), view.filter()));
    if moves {
        print_moves(&view, &animations);
    }
    Ok(())
}

fn print_moves(view: &LeaderboardController, animations: &BTreeMap<RowKey, Animation>) {
    if animations.is_empty() {
        println!("No position changes from the overall board");
        return;
    }
    println!("Moves from the overall board:");
    for entry in view.entries() {
        let Some(animation) = animations.get(&entry.row_key()) else {
            continue;
        };
        // positive dy: the row moved up
        let lines = animation.delta.dy.round() as i64;
        let arrow = if lines > 0 { "▲" } else { "▼" };
        println!(
            "  {} {:>3}  #{} {}",
            arrow,
            lines.abs(),
            entry.rank,
            entry.player.username
        );
    }
}
