use std::collections::HashMap;

use crate::player::{Player, avatar_url};

/// Players indexed by lowercase username.
///
/// History records only carry names, so this resolves them back to full
/// player records (and uuids for avatars).
#[derive(Debug, Clone, Default)]
pub struct PlayerDirectory {
    players: HashMap<String, Player>,
}

impl PlayerDirectory {
    pub fn new(players: impl IntoIterator<Item = Player>) -> Self {
        let players = players
            .into_iter()
            .map(|p| (p.username.to_lowercase(), p))
            .collect();
        Self { players }
    }

    pub fn get(&self, username: &str) -> Option<&Player> {
        self.players.get(&username.to_lowercase())
    }

    /// Avatar by uuid when the player is known, by name otherwise.
    pub fn avatar_url(&self, username: &str) -> String {
        match self.get(username) {
            Some(player) if !player.uuid.is_empty() => avatar_url(&player.uuid),
            _ => avatar_url(username),
        }
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_insensitive_lookup() {
        let dir = PlayerDirectory::new([Player::new("u-1", "ChosusQT")]);
        assert_eq!(dir.get("chosusqt").map(|p| p.uuid.as_str()), Some("u-1"));
        assert_eq!(dir.get("CHOSUSQT").map(|p| p.uuid.as_str()), Some("u-1"));
        assert!(dir.get("someone").is_none());
    }

    #[test]
    fn test_avatar_fallback() {
        let dir = PlayerDirectory::new([Player::new("u-1", "Known")]);
        assert_eq!(dir.avatar_url("known"), "https://mc-heads.net/avatar/u-1");
        assert_eq!(dir.avatar_url("Stranger"), "https://mc-heads.net/avatar/Stranger");
    }
}
