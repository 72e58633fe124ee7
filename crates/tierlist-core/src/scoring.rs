//! Aggregate points per player.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::mode::ModeKey;
use crate::player::Player;
use crate::tier::TierScoreTable;

/// A player with its points total, computed once per fetch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoredPlayer {
    #[serde(flatten)]
    pub player: Player,
    pub points: u32,
}

impl ScoredPlayer {
    pub fn new(player: Player, table: &TierScoreTable) -> Self {
        let points = compute_points(&player, table);
        Self { player, points }
    }
}

impl std::ops::Deref for ScoredPlayer {
    type Target = Player;

    fn deref(&self) -> &Player {
        &self.player
    }
}

/// Sum of the table value of every mode's tier.
///
/// Absent, empty and unrecognized labels count as `Unranked` and contribute
/// whatever the table assigns to it.
pub fn compute_points(player: &Player, table: &TierScoreTable) -> u32 {
    ModeKey::all()
        .map(|mode| table.points(player.tier(mode)))
        .fold(0u32, u32::saturating_add)
}

/// Score a freshly fetched list, keeping the input order.
pub fn score_players(players: Vec<Player>, table: &TierScoreTable) -> Vec<ScoredPlayer> {
    players
        .into_iter()
        .map(|player| {
            for (mode, label) in player.unrecognized_labels() {
                debug!(
                    "Unrecognized {} tier {:?} for {}, treating as unranked",
                    mode, label, player.username
                );
            }
            ScoredPlayer::new(player, table)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tier::{PointScheme, Tier};

    fn sample() -> Player {
        Player::new("a", "Alpha")
            .with_tier(ModeKey::Axe, "HT1")
            .with_tier(ModeKey::Sword, "lt3")
            .with_tier(ModeKey::Mace, "")
            .with_tier(ModeKey::Uhc, "bogus")
    }

    #[test]
    fn test_compute_points_classic() {
        let table = TierScoreTable::classic();
        assert_eq!(compute_points(&sample(), &table), 1000 + 10);
    }

    #[test]
    fn test_unranked_player_scores_zero() {
        let table = TierScoreTable::classic();
        assert_eq!(compute_points(&Player::new("x", "X"), &table), 0);
    }

    #[test]
    fn test_unranked_uses_table_entry() {
        let table = TierScoreTable::classic().with_overrides([(Tier::Unranked, 1)]);
        // 6 unranked modes (mace empty, uhc bogus and four absent) plus HT1 and LT3
        assert_eq!(compute_points(&sample(), &table), 1000 + 10 + 6);
    }

    #[test]
    fn test_compute_points_is_deterministic() {
        let table = TierScoreTable::from_scheme(PointScheme::Exponential);
        let player = sample();
        assert_eq!(compute_points(&player, &table), compute_points(&player, &table));
    }

    /// Monotonic but with plateaus, including unranked equal to LT6.
    fn plateau_table() -> TierScoreTable {
        TierScoreTable::from_points([
            (Tier::Ht1, 40),
            (Tier::Lt1, 40),
            (Tier::Ht2, 30),
            (Tier::Lt2, 30),
            (Tier::Ht3, 30),
            (Tier::Lt3, 12),
            (Tier::Ht4, 12),
            (Tier::Lt4, 5),
            (Tier::Ht5, 5),
            (Tier::Lt5, 2),
            (Tier::Ht6, 2),
            (Tier::Lt6, 1),
            (Tier::Unranked, 1),
        ])
    }

    #[test]
    fn test_upgrading_a_tier_never_decreases_points() {
        let tables: Vec<(String, TierScoreTable)> = [
            PointScheme::Classic,
            PointScheme::Linear,
            PointScheme::Exponential,
            PointScheme::Quadratic,
        ]
        .into_iter()
        .map(|scheme| (format!("{:?}", scheme), TierScoreTable::from_scheme(scheme)))
        .chain(std::iter::once(("plateau".to_string(), plateau_table())))
        .collect();

        // best first, so tiers[i] is strictly better than tiers[i + 1]
        let tiers: Vec<Tier> = Tier::ranked().chain(std::iter::once(Tier::Unranked)).collect();

        for (name, table) in &tables {
            assert!(table.is_monotonic(), "{}", name);
            for mode in ModeKey::all() {
                for pair in tiers.windows(2) {
                    let worse = sample().with_tier(mode, pair[1].short_name());
                    let better = sample().with_tier(mode, pair[0].short_name());
                    assert!(
                        compute_points(&better, table) >= compute_points(&worse, table),
                        "{} {} {} vs {}",
                        name,
                        mode,
                        pair[0],
                        pair[1]
                    );
                }
            }
        }
    }

    #[test]
    fn test_score_players_keeps_order() {
        let table = TierScoreTable::classic();
        let scored = score_players(
            vec![
                Player::new("b", "B").with_tier(ModeKey::Smp, "HT2"),
                Player::new("a", "A").with_tier(ModeKey::Smp, "HT1"),
            ],
            &table,
        );
        assert_eq!(scored[0].uuid, "b");
        assert_eq!(scored[0].points, 100);
        assert_eq!(scored[1].points, 1000);
    }

    #[test]
    fn test_scored_player_serializes_flat() {
        let scored = ScoredPlayer::new(
            Player::new("a", "A").with_tier(ModeKey::Axe, "HT2"),
            &TierScoreTable::classic(),
        );
        let value = serde_json::to_value(&scored).unwrap();
        assert_eq!(value["uuid"], "a");
        assert_eq!(value["axe"], "HT2");
        assert_eq!(value["points"], 100);
    }
}
