//! Tie-aware leaderboard ordering.
//!
//! Ranking is a stable sort by a per-filter comparison key followed by a
//! rank walk: the first entry is rank 1, an entry whose key equals its
//! predecessor's shares that rank, any other entry takes its 1-indexed
//! position.

use std::cmp::Reverse;

use serde::Serialize;

use crate::mode::FilterMode;
use crate::player::RowKey;
use crate::scoring::ScoredPlayer;
use crate::tier::Tier;

/// Comparison key for one player under one filter. Smaller sorts first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RankKey {
    /// Overall ranking: points, descending.
    Points(Reverse<u32>),
    /// Mode ranking: tier order (best first), then points descending.
    Tier(Tier, Reverse<u32>),
}

impl RankKey {
    pub fn for_player(player: &ScoredPlayer, filter: FilterMode) -> Self {
        match filter {
            FilterMode::Overall => Self::Points(Reverse(player.points)),
            FilterMode::Mode(mode) => Self::Tier(player.tier(mode), Reverse(player.points)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankedEntry {
    pub rank: u32,
    #[serde(flatten)]
    pub player: ScoredPlayer,
}

impl RankedEntry {
    pub fn row_key(&self) -> RowKey {
        self.player.row_key()
    }
}

/// Order `players` for `filter` and assign display ranks.
pub fn rank(players: &[ScoredPlayer], filter: FilterMode) -> Vec<RankedEntry> {
    let mut keyed: Vec<(RankKey, &ScoredPlayer)> = players
        .iter()
        .map(|p| (RankKey::for_player(p, filter), p))
        .collect();
    // sort_by_key is stable: equal keys keep their fetch order
    keyed.sort_by_key(|(key, _)| *key);

    let ranks = assign_ranks(keyed.iter().map(|(key, _)| key));

    keyed
        .into_iter()
        .zip(ranks)
        .map(|((_, player), rank)| RankedEntry {
            rank,
            player: player.clone(),
        })
        .collect()
}

/// Rank numbers for an already sorted key sequence.
pub fn assign_ranks<'a, K>(sorted_keys: impl IntoIterator<Item = &'a K>) -> Vec<u32>
where
    K: PartialEq + 'a,
{
    let mut ranks = Vec::new();
    let mut prev: Option<&K> = None;
    for (i, key) in sorted_keys.into_iter().enumerate() {
        let rank = match (prev, ranks.last()) {
            (Some(p), Some(&last)) if p == key => last,
            _ => i as u32 + 1,
        };
        ranks.push(rank);
        prev = Some(key);
    }
    ranks
}

/// Row keys of a ranking, in display order.
pub fn row_order(entries: &[RankedEntry]) -> Vec<RowKey> {
    entries.iter().map(RankedEntry::row_key).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mode::ModeKey;
    use crate::player::Player;
    use crate::tier::TierScoreTable;

    fn scored(uuid: &str, points: u32, axe: Option<&str>) -> ScoredPlayer {
        let mut player = Player::new(uuid, uuid.to_uppercase());
        player.axe = axe.map(str::to_string);
        ScoredPlayer { player, points }
    }

    fn uuids(entries: &[RankedEntry]) -> Vec<&str> {
        entries.iter().map(|e| e.player.uuid.as_str()).collect()
    }

    fn ranks(entries: &[RankedEntry]) -> Vec<u32> {
        entries.iter().map(|e| e.rank).collect()
    }

    #[test]
    fn test_empty_input() {
        assert!(rank(&[], FilterMode::Overall).is_empty());
        assert!(rank(&[], FilterMode::Mode(ModeKey::Axe)).is_empty());
    }

    #[test]
    fn test_overall_orders_by_points() {
        let players = vec![
            scored("a", 1000, Some("HT1")),
            scored("b", 100, Some("HT2")),
            scored("c", 900, Some("HT1")),
        ];
        let ranked = rank(&players, FilterMode::Overall);
        assert_eq!(uuids(&ranked), ["a", "c", "b"]);
        assert_eq!(ranks(&ranked), [1, 2, 3]);
    }

    #[test]
    fn test_mode_ties_share_rank() {
        let table = TierScoreTable::from_points([(Tier::Ht1, 1000), (Tier::Ht2, 100)]);
        let players: Vec<ScoredPlayer> = [("a", "HT1"), ("b", "HT2"), ("c", "HT1")]
            .into_iter()
            .map(|(uuid, tier)| {
                ScoredPlayer::new(Player::new(uuid, uuid).with_tier(ModeKey::Axe, tier), &table)
            })
            .collect();

        let ranked = rank(&players, FilterMode::Mode(ModeKey::Axe));
        assert_eq!(uuids(&ranked), ["a", "c", "b"]);
        assert_eq!(ranks(&ranked), [1, 1, 3]);
    }

    #[test]
    fn test_mode_sub_sorts_by_points() {
        let players = vec![
            scored("a", 1000, Some("HT1")),
            scored("b", 100, Some("HT2")),
            scored("c", 1250, Some("HT1")),
        ];
        let ranked = rank(&players, FilterMode::Mode(ModeKey::Axe));
        assert_eq!(uuids(&ranked), ["c", "a", "b"]);
        assert_eq!(ranks(&ranked), [1, 2, 3]);
    }

    #[test]
    fn test_unranked_and_unknown_sort_last_together() {
        let players = vec![
            scored("x", 5, Some("nonsense")),
            scored("y", 5, None),
            scored("z", 1, Some("LT6")),
        ];
        let ranked = rank(&players, FilterMode::Mode(ModeKey::Axe));
        assert_eq!(uuids(&ranked), ["z", "x", "y"]);
        assert_eq!(ranks(&ranked), [1, 2, 2]);
    }

    #[test]
    fn test_tier_label_case_does_not_break_ties() {
        let players = vec![scored("a", 10, Some("ht3")), scored("b", 10, Some("HT3"))];
        let ranked = rank(&players, FilterMode::Mode(ModeKey::Axe));
        assert_eq!(ranks(&ranked), [1, 1]);
    }

    #[test]
    fn test_equal_keys_keep_input_order() {
        let players = vec![
            scored("d", 50, None),
            scored("a", 50, None),
            scored("c", 50, None),
            scored("b", 50, None),
        ];
        let ranked = rank(&players, FilterMode::Overall);
        assert_eq!(uuids(&ranked), ["d", "a", "c", "b"]);
        assert_eq!(ranks(&ranked), [1, 1, 1, 1]);
    }

    #[test]
    fn test_rank_after_tie_group_skips() {
        let players = vec![
            scored("a", 30, None),
            scored("b", 20, None),
            scored("c", 20, None),
            scored("d", 20, None),
            scored("e", 10, None),
        ];
        let ranked = rank(&players, FilterMode::Overall);
        assert_eq!(ranks(&ranked), [1, 2, 2, 2, 5]);
    }

    #[test]
    fn test_ranking_is_idempotent() {
        let players = vec![
            scored("a", 3, Some("LT2")),
            scored("b", 3, Some("LT2")),
            scored("c", 7, Some("HT5")),
        ];
        for filter in FilterMode::all() {
            assert_eq!(rank(&players, filter), rank(&players, filter));
        }
    }

    #[test]
    fn test_assign_ranks_law() {
        let keys = [1, 1, 2, 3, 3, 3, 4];
        let ranks = assign_ranks(keys.iter());
        assert_eq!(ranks, [1, 1, 3, 4, 4, 4, 7]);
        for i in 0..keys.len() - 1 {
            if keys[i] == keys[i + 1] {
                assert_eq!(ranks[i + 1], ranks[i]);
            } else {
                assert_eq!(ranks[i + 1], i as u32 + 2);
            }
        }
    }

    #[test]
    fn test_row_order() {
        let mut nameless = scored("", 2, None);
        nameless.player.username = "Steve".to_string();
        let players = vec![scored("a", 1, None), nameless];
        let ranked = rank(&players, FilterMode::Overall);
        // empty uuid falls back to username
        assert_eq!(row_order(&ranked), ["Steve", "a"]);
    }
}
