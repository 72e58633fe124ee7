//! Console output formatting with colored display

use std::fmt::Write as _;

use owo_colors::{OwoColorize, Rgb};

use crate::history::{HistoryEntry, PlayerDirectory, TierOutcome};
use crate::mode::{FilterMode, ModeKey};
use crate::ranking::RankedEntry;
use crate::tier::{Tier, TierScoreTable};

const NAME_WIDTH: usize = 20;
const TIER_WIDTH: usize = 7;

/// Parse a `#rrggbb` code. Anything malformed renders white.
pub fn hex_to_rgb(code: &str) -> Rgb {
    let hex = code.trim_start_matches('#');
    let channel = |i: usize| {
        hex.get(i..i + 2)
            .and_then(|s| u8::from_str_radix(s, 16).ok())
            .unwrap_or(255)
    };
    if hex.len() != 6 {
        return Rgb(255, 255, 255);
    }
    Rgb(channel(0), channel(2), channel(4))
}

/// Tier label padded to the column width, colored by tier. Unranked is blank.
fn format_colored_tier(tier: Tier, width: usize) -> String {
    if !tier.is_ranked() {
        return " ".repeat(width);
    }
    let label = format!("{:<width$}", tier.short_name(), width = width);
    match tier {
        Tier::Ht1 => label.color(hex_to_rgb(tier.color_code())).bold().to_string(),
        _ => label.color(hex_to_rgb(tier.color_code())).to_string(),
    }
}

/// Mode column header in the mode's accent color.
fn format_mode_header(mode: ModeKey) -> String {
    let label = format!("{:<width$}", mode.key(), width = TIER_WIDTH);
    label.color(hex_to_rgb(mode.color_code())).to_string()
}

fn format_colored_outcome(outcome: TierOutcome) -> String {
    let label = outcome.label();
    match outcome {
        TierOutcome::InitialTierSet => label.dimmed().to_string(),
        _ => label.color(hex_to_rgb(outcome.color_code())).to_string(),
    }
}

/// Leaderboard table: rank, name, points and one column per mode.
pub fn format_leaderboard_console(entries: &[RankedEntry], filter: FilterMode) -> String {
    let mut output = String::new();

    let title = match filter {
        FilterMode::Overall => "OVERALL".to_string(),
        FilterMode::Mode(mode) => mode.key().to_uppercase(),
    };
    let border = "━".repeat(40 + ModeKey::all().count() * TIER_WIDTH);

    let _ = writeln!(output, "{}", border.dimmed());
    let _ = writeln!(output, "  {} ({} players)", title.bold(), entries.len());
    let _ = writeln!(output, "{}", border.dimmed());

    let header = format!(
        "  {:<6}{:<name_width$}{:>8}  ",
        "#",
        "PLAYER",
        "POINTS",
        name_width = NAME_WIDTH
    );
    let _ = write!(output, "{}", header.dimmed());
    for mode in ModeKey::all() {
        let _ = write!(output, "{}", format_mode_header(mode));
    }
    let _ = writeln!(output);

    for entry in entries {
        let player = &entry.player;
        let mut line = format!(
            "  {:<6}{:<name_width$}{:>8}  ",
            format!("#{}", entry.rank),
            player.username,
            player.points,
            name_width = NAME_WIDTH
        );
        for mode in ModeKey::all() {
            let tier = player.tier(mode);
            let cell = format_colored_tier(tier, TIER_WIDTH);
            // highlight the filtered column
            if filter.mode() == Some(mode) && tier.is_ranked() {
                line.push_str(&cell.underline().to_string());
            } else {
                line.push_str(&cell);
            }
        }
        let _ = writeln!(output, "{}", line.trim_end());
    }

    if entries.is_empty() {
        let _ = writeln!(output, "  {}", "No players".dimmed());
    }
    let _ = write!(output, "{}", border.dimmed());
    output
}

/// Score per tier, best first.
pub fn format_tier_info_console(table: &TierScoreTable) -> String {
    let mut output = String::new();
    let _ = writeln!(output, "  {}", "Score per tier".bold());
    for (tier, points) in table.entries() {
        let _ = writeln!(
            output,
            "  {}  {}",
            format_colored_tier(tier, 4),
            format!("+{}", points).color(hex_to_rgb(tier.color_code()))
        );
    }
    let _ = write!(output, "  {}", "Lower → Higher skill".dimmed());
    output
}

/// Compact one-line-per-test history listing. Expanded entries also list
/// each fight.
pub fn format_history_console(
    entries: &[HistoryEntry],
    directory: &PlayerDirectory,
    expanded: Option<&str>,
) -> String {
    let mut output = String::new();

    for entry in entries {
        let date = entry.time.format("%b %-d, %Y · %H:%M");
        let mode = entry.mode.to_lowercase();

        if entry.is_high_test() {
            let status = if entry.is_success() {
                "✓ SUCCESS".green().to_string()
            } else {
                "✗ FAILED".red().to_string()
            };
            let _ = writeln!(
                output,
                "★ {} {} {}  tested by {} · {} · {}",
                entry.tested.bold(),
                format_colored_tier(entry.new_tier(), 3),
                status,
                entry.tester,
                mode,
                date
            );
        } else {
            let _ = writeln!(
                output,
                "  {} → {} {} {}  {} · {}",
                entry.tester,
                entry.tested.bold(),
                format_colored_tier(entry.new_tier(), 3),
                format_colored_outcome(entry.outcome()),
                mode,
                date
            );
        }

        if expanded == Some(entry.key().as_str()) {
            format_history_details(&mut output, entry, directory);
        }
    }

    if entries.is_empty() {
        let _ = writeln!(output, "  {}", "No tests recorded".dimmed());
    }
    output
}

fn format_history_details(output: &mut String, entry: &HistoryEntry, directory: &PlayerDirectory) {
    let change = if entry.has_old_tier() {
        format!("{} → {}", entry.old_tier(), entry.new_tier())
    } else {
        entry.new_tier().to_string()
    };
    let _ = writeln!(output, "      {}: {}", entry.mode.to_lowercase(), change);
    let _ = writeln!(output, "      avatar: {}", directory.avatar_url(&entry.tested));
    if let Some(tier) = entry.tester_tier_at_test() {
        let _ = writeln!(output, "      tester tier at test: {}", tier);
    }
    let _ = writeln!(output, "      tested tier at test: {}", entry.tested_tier_at_test());

    for (i, fight) in entry.fights().iter().enumerate() {
        let _ = writeln!(
            output,
            "      #{} {} ({}) {} — {} {} ({})",
            i + 1,
            fight.player1,
            fight.tier1(),
            fight.score1,
            fight.score2,
            fight.player2,
            fight.tier2()
        );
    }
}
