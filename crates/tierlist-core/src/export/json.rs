use serde_json::{Map, Value as JsonValue, json};

use crate::history::HistoryEntry;
use crate::mode::{FilterMode, ModeKey};
use crate::ranking::RankedEntry;
use crate::tier::{Tier, TierScoreTable};

/// Leaderboard as JSON, tiers normalized.
pub fn leaderboard_json(entries: &[RankedEntry], filter: FilterMode) -> JsonValue {
    let players: Vec<JsonValue> = entries
        .iter()
        .map(|entry| {
            let player = &entry.player;
            let tiers: Map<String, JsonValue> = ModeKey::all()
                .map(|mode| (mode.key().to_string(), json!(player.tier(mode))))
                .collect();
            json!({
                "rank": entry.rank,
                "uuid": player.uuid,
                "username": player.username,
                "points": player.points,
                "tiers": tiers,
            })
        })
        .collect();

    json!({
        "filter": filter,
        "players": players,
    })
}

pub fn tier_info_json(table: &TierScoreTable) -> JsonValue {
    let tiers: Vec<JsonValue> = table
        .entries()
        .map(|(tier, points)| {
            json!({
                "tier": tier,
                "points": points,
                "color": tier.color_code(),
            })
        })
        .collect();
    json!({ "tiers": tiers, "unranked": table.points(Tier::Unranked) })
}

/// History as JSON with the derived classification alongside each record.
pub fn history_json(entries: &[HistoryEntry]) -> JsonValue {
    let entries: Vec<JsonValue> = entries
        .iter()
        .map(|entry| {
            json!({
                "time": entry.time,
                "tester": entry.tester,
                "tested": entry.tested,
                "mode": entry.mode_key(),
                "old_tier": entry.has_old_tier().then(|| entry.old_tier()),
                "new_tier": entry.new_tier(),
                "outcome": entry.outcome(),
                "high_test": entry.is_high_test(),
                "success": entry.is_success(),
                "fights": entry.fights(),
            })
        })
        .collect();
    json!({ "entries": entries })
}
