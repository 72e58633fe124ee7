//! Player records as stored in the remote `tiers` table.

use serde::{Deserialize, Serialize};

use crate::mode::ModeKey;
use crate::serde_util::null_as_default;
use crate::tier::Tier;

/// Stable key identifying a leaderboard row across re-renders.
pub type RowKey = String;

const AVATAR_BASE_URL: &str = "https://mc-heads.net/avatar";

/// A player row. Tier labels are kept raw; use [`Player::tier`] to read a
/// normalized value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    #[serde(default, deserialize_with = "null_as_default")]
    pub uuid: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub username: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub axe: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub smp: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sword: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mace: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uhc: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nethop: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vanilla: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diapot: Option<String>,
}

impl Player {
    pub fn new(uuid: impl Into<String>, username: impl Into<String>) -> Self {
        Self {
            uuid: uuid.into(),
            username: username.into(),
            ..Default::default()
        }
    }

    /// Builder-style setter used by fixtures and tests.
    pub fn with_tier(mut self, mode: ModeKey, label: impl Into<String>) -> Self {
        *self.label_slot(mode) = Some(label.into());
        self
    }

    /// Raw label for a mode, as fetched.
    pub fn tier_label(&self, mode: ModeKey) -> Option<&str> {
        match mode {
            ModeKey::Axe => self.axe.as_deref(),
            ModeKey::Smp => self.smp.as_deref(),
            ModeKey::Sword => self.sword.as_deref(),
            ModeKey::Mace => self.mace.as_deref(),
            ModeKey::Uhc => self.uhc.as_deref(),
            ModeKey::Nethop => self.nethop.as_deref(),
            ModeKey::Vanilla => self.vanilla.as_deref(),
            ModeKey::Diapot => self.diapot.as_deref(),
        }
    }

    pub fn tier(&self, mode: ModeKey) -> Tier {
        Tier::normalize(self.tier_label(mode))
    }

    /// Labels that are present but not a known tier.
    pub fn unrecognized_labels(&self) -> impl Iterator<Item = (ModeKey, &str)> {
        ModeKey::all().filter_map(|mode| {
            let label = self.tier_label(mode)?;
            let trimmed = label.trim();
            (!trimmed.is_empty() && trimmed.parse::<Tier>().is_err()).then_some((mode, label))
        })
    }

    /// The uuid, or the username when the record has no uuid.
    pub fn row_key(&self) -> RowKey {
        if self.uuid.is_empty() {
            self.username.clone()
        } else {
            self.uuid.clone()
        }
    }

    pub fn avatar_url(&self) -> String {
        avatar_url(&self.row_key())
    }

    fn label_slot(&mut self, mode: ModeKey) -> &mut Option<String> {
        match mode {
            ModeKey::Axe => &mut self.axe,
            ModeKey::Smp => &mut self.smp,
            ModeKey::Sword => &mut self.sword,
            ModeKey::Mace => &mut self.mace,
            ModeKey::Uhc => &mut self.uhc,
            ModeKey::Nethop => &mut self.nethop,
            ModeKey::Vanilla => &mut self.vanilla,
            ModeKey::Diapot => &mut self.diapot,
        }
    }
}

/// Head render for a uuid or username.
pub fn avatar_url(id: &str) -> String {
    format!("{}/{}", AVATAR_BASE_URL, id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_partial_record() {
        let json = r#"{"uuid":"abc","username":"Steve","axe":"ht1","sword":null}"#;
        let player: Player = serde_json::from_str(json).unwrap();
        assert_eq!(player.uuid, "abc");
        assert_eq!(player.tier_label(ModeKey::Axe), Some("ht1"));
        assert_eq!(player.tier(ModeKey::Axe), Tier::Ht1);
        assert_eq!(player.tier(ModeKey::Sword), Tier::Unranked);
        assert_eq!(player.tier(ModeKey::Mace), Tier::Unranked);
    }

    #[test]
    fn test_deserialize_null_identity_columns() {
        let json = r#"[
            {"uuid":"abc","username":null,"axe":"HT2"},
            {"uuid":null,"username":"Alex"}
        ]"#;
        let players: Vec<Player> = serde_json::from_str(json).unwrap();
        assert_eq!(players.len(), 2);
        assert_eq!(players[0].username, "");
        assert_eq!(players[0].tier(ModeKey::Axe), Tier::Ht2);
        assert_eq!(players[1].uuid, "");
        assert_eq!(players[1].row_key(), "Alex");
    }

    #[test]
    fn test_row_key_fallback() {
        assert_eq!(Player::new("abc", "Steve").row_key(), "abc");
        assert_eq!(Player::new("", "Steve").row_key(), "Steve");
    }

    #[test]
    fn test_unrecognized_labels() {
        let player = Player::new("a", "A")
            .with_tier(ModeKey::Axe, "HT1")
            .with_tier(ModeKey::Mace, "")
            .with_tier(ModeKey::Uhc, "HT9");
        let bad: Vec<(ModeKey, &str)> = player.unrecognized_labels().collect();
        assert_eq!(bad, vec![(ModeKey::Uhc, "HT9")]);
    }

    #[test]
    fn test_avatar_url() {
        assert_eq!(
            Player::new("abc", "Steve").avatar_url(),
            "https://mc-heads.net/avatar/abc"
        );
    }
}
