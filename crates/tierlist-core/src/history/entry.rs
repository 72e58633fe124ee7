use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use strum::IntoStaticStr;

use crate::mode::ModeKey;
use crate::serde_util::null_as_default;
use crate::tier::Tier;

/// One fight within a tier test. Tiers are the ones each player held when
/// the test was run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestFight {
    #[serde(default, deserialize_with = "null_as_default")]
    pub player1: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub player2: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub score1: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub score2: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tier1: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tier2: Option<String>,
}

impl TestFight {
    pub fn tier1(&self) -> Tier {
        Tier::normalize(self.tier1.as_deref())
    }

    pub fn tier2(&self) -> Tier {
        Tier::normalize(self.tier2.as_deref())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    #[serde(deserialize_with = "deserialize_time")]
    pub time: DateTime<Utc>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tester: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tested: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub mode: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub old_tier: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub new_tier: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub test_array: Vec<TestFight>,
}

/// How a test changed the tested player's tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, IntoStaticStr)]
pub enum TierOutcome {
    #[strum(serialize = "Initial tier set")]
    InitialTierSet,
    Promoted,
    Demoted,
    Retained,
}

impl TierOutcome {
    pub fn label(&self) -> &'static str {
        self.into()
    }

    pub fn color_code(&self) -> &'static str {
        match self {
            Self::Promoted => "#4ade80",
            Self::Demoted => "#ff5555",
            Self::Retained => "#ffcc55",
            Self::InitialTierSet => "#8c8c8c",
        }
    }
}

impl std::fmt::Display for TierOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl HistoryEntry {
    pub fn mode_key(&self) -> Option<ModeKey> {
        self.mode.trim().parse().ok()
    }

    pub fn old_tier(&self) -> Tier {
        Tier::normalize(Some(&self.old_tier))
    }

    pub fn new_tier(&self) -> Tier {
        Tier::normalize(Some(&self.new_tier))
    }

    /// False for a first placement, where no previous tier was recorded.
    pub fn has_old_tier(&self) -> bool {
        !self.old_tier.trim().is_empty()
    }

    /// Tests ending at HT3 or above go through the promotion system.
    pub fn is_high_test(&self) -> bool {
        self.new_tier().is_high()
    }

    pub fn outcome(&self) -> TierOutcome {
        if !self.has_old_tier() {
            return TierOutcome::InitialTierSet;
        }
        // None (unranked) sorts below every ranked tier
        let old = self.old_tier().scale_index();
        let new = self.new_tier().scale_index();
        match new.cmp(&old) {
            std::cmp::Ordering::Greater => TierOutcome::Promoted,
            std::cmp::Ordering::Less => TierOutcome::Demoted,
            std::cmp::Ordering::Equal => TierOutcome::Retained,
        }
    }

    /// A high test succeeds when it ends strictly above where it started.
    pub fn is_success(&self) -> bool {
        self.new_tier().scale_index() > self.old_tier().scale_index()
    }

    pub fn fights(&self) -> &[TestFight] {
        &self.test_array
    }

    /// Tier the tested player held when the test ran.
    ///
    /// High tests list the tested player first in every fight, placement
    /// tests list the tester first.
    pub fn tested_tier_at_test(&self) -> Tier {
        match self.test_array.first() {
            Some(fight) if self.is_high_test() => fight.tier1(),
            Some(fight) => fight.tier2(),
            None => Tier::Unranked,
        }
    }

    /// Tier the tester held when the test ran. Only placement tests record it.
    pub fn tester_tier_at_test(&self) -> Option<Tier> {
        if self.is_high_test() {
            return None;
        }
        self.test_array.first().map(TestFight::tier1)
    }

    /// Stable identifier used to expand a single entry in the history view.
    pub fn key(&self) -> String {
        self.time.to_rfc3339()
    }
}

/// Order entries newest first. Entries with equal timestamps keep their order.
pub fn sort_newest_first(entries: &mut [HistoryEntry]) {
    entries.sort_by(|a, b| b.time.cmp(&a.time));
}

// Accepts RFC 3339 as well as timestamps without an offset, read as UTC.
fn deserialize_time<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    if let Ok(time) = DateTime::parse_from_rfc3339(&raw) {
        return Ok(time.with_timezone(&Utc));
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(&raw, fmt).ok())
        .map(|naive| naive.and_utc())
        .ok_or_else(|| serde::de::Error::custom(format!("invalid timestamp: {}", raw)))
}
