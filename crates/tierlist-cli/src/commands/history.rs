//! History command.

use anyhow::{Context, Result, bail};
use tierlist_core::HistoryController;
use tierlist_core::export::{format_history_console, history_json};

use super::{StoreOverrides, load_config, open_store, print_json};

pub fn run(
    config_path: &str,
    overrides: &StoreOverrides,
    limit: Option<usize>,
    expand: Option<usize>,
    json: bool,
) -> Result<()> {
    let config = load_config(config_path)?;
    let store = open_store(&config, overrides)?;

    let mut view = HistoryController::new();
    view.load(&store).context("Failed to load history")?;

    let shown = limit.unwrap_or(usize::MAX).min(view.entries().len());

    if let Some(n) = expand {
        if n == 0 || n > shown {
            bail!("--expand must be between 1 and {}", shown);
        }
        let key = view.entries()[n - 1].key();
        view.toggle_expanded(&key);
    }

    let Some(data) = view.state().ready() else {
        bail!("History is not loaded");
    };
    let entries = &data.entries[..shown];

    if json {
        return print_json(&history_json(entries));
    }

    if entries.is_empty() {
        println!("No history yet");
        return Ok(());
    }
    println!(
        "{}",
        format_history_console(entries, &data.directory, view.expanded())
    );
    Ok(())
}
