//! Combat modes and the leaderboard filter.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::{EnumCount, EnumIter, EnumString, IntoEnumIterator, IntoStaticStr};

use crate::error::{Error, Result};

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    EnumCount,
    EnumIter,
    EnumString,
    IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ModeKey {
    Axe,
    Smp,
    Sword,
    Mace,
    Uhc,
    Nethop,
    Vanilla,
    Diapot,
}

impl ModeKey {
    /// All modes in display order.
    pub fn all() -> impl Iterator<Item = ModeKey> {
        Self::iter()
    }

    pub fn key(&self) -> &'static str {
        self.into()
    }

    pub fn color_code(&self) -> &'static str {
        match self {
            Self::Axe | Self::Sword => "#4aa3ff",
            Self::Smp => "#8b5a2b",
            Self::Mace => "#ffffff",
            Self::Uhc => "#ff9933",
            Self::Nethop => "#c49a6c",
            Self::Vanilla => "#b56bff",
            Self::Diapot => "#ff4444",
        }
    }
}

impl std::fmt::Display for ModeKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// Active leaderboard filter: the overall points ranking or a single mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum FilterMode {
    #[default]
    Overall,
    Mode(ModeKey),
}

impl FilterMode {
    pub const OVERALL: &'static str = "overall";

    pub fn mode(&self) -> Option<ModeKey> {
        match self {
            Self::Overall => None,
            Self::Mode(m) => Some(*m),
        }
    }

    /// Every selectable filter, overall first.
    pub fn all() -> impl Iterator<Item = FilterMode> {
        std::iter::once(Self::Overall).chain(ModeKey::all().map(Self::Mode))
    }
}

impl From<ModeKey> for FilterMode {
    fn from(mode: ModeKey) -> Self {
        Self::Mode(mode)
    }
}

impl FromStr for FilterMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.eq_ignore_ascii_case(Self::OVERALL) {
            return Ok(Self::Overall);
        }
        ModeKey::from_str(s)
            .map(Self::Mode)
            .map_err(|_| Error::InvalidFilter(s.to_string()))
    }
}

impl TryFrom<String> for FilterMode {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl From<FilterMode> for String {
    fn from(filter: FilterMode) -> Self {
        filter.to_string()
    }
}

impl std::fmt::Display for FilterMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Overall => write!(f, "{}", Self::OVERALL),
            Self::Mode(m) => write!(f, "{}", m),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_count_and_order() {
        assert_eq!(ModeKey::COUNT, 8);
        let keys: Vec<&str> = ModeKey::all().map(|m| m.key()).collect();
        assert_eq!(
            keys,
            ["axe", "smp", "sword", "mace", "uhc", "nethop", "vanilla", "diapot"]
        );
    }

    #[test]
    fn test_filter_parse() {
        assert_eq!("overall".parse::<FilterMode>().ok(), Some(FilterMode::Overall));
        assert_eq!("OVERALL".parse::<FilterMode>().ok(), Some(FilterMode::Overall));
        assert_eq!(
            "axe".parse::<FilterMode>().ok(),
            Some(FilterMode::Mode(ModeKey::Axe))
        );
        assert_eq!(
            "DiaPot".parse::<FilterMode>().ok(),
            Some(FilterMode::Mode(ModeKey::Diapot))
        );
        assert!(matches!(
            "bow".parse::<FilterMode>(),
            Err(Error::InvalidFilter(_))
        ));
    }

    #[test]
    fn test_filter_display_round_trip() {
        for filter in FilterMode::all() {
            assert_eq!(filter.to_string().parse::<FilterMode>().ok(), Some(filter));
        }
        assert_eq!(FilterMode::all().count(), 9);
    }

    #[test]
    fn test_filter_serde() {
        let json = serde_json::to_string(&FilterMode::Mode(ModeKey::Uhc)).unwrap();
        assert_eq!(json, "\"uhc\"");
        let parsed: FilterMode = serde_json::from_str("\"overall\"").unwrap();
        assert_eq!(parsed, FilterMode::Overall);
    }
}
