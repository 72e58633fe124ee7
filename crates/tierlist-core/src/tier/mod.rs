//! Tier labels and point tables.
//!
//! This module contains:
//! - `Tier` - the 12 ranked tiers plus the unranked sentinel, in rank order
//! - `TierScoreTable` - configurable tier -> points lookup
//! - `PointScheme` - built-in point tables

mod table;

pub use table::*;

use serde::{Deserialize, Serialize};
use strum::{EnumCount, EnumIter, EnumString, IntoEnumIterator, IntoStaticStr};

/// A tier label.
///
/// Variants are declared best first, so the derived `Ord` is the per-mode
/// ranking order (`HT1 < LT1 < ... < LT6 < U`).
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
    Default,
    EnumCount,
    EnumIter,
    EnumString,
    IntoStaticStr,
)]
#[strum(ascii_case_insensitive)]
#[repr(u8)]
pub enum Tier {
    #[strum(serialize = "HT1")]
    #[serde(rename = "HT1")]
    Ht1 = 1,
    #[strum(serialize = "LT1")]
    #[serde(rename = "LT1")]
    Lt1 = 2,
    #[strum(serialize = "HT2")]
    #[serde(rename = "HT2")]
    Ht2 = 3,
    #[strum(serialize = "LT2")]
    #[serde(rename = "LT2")]
    Lt2 = 4,
    #[strum(serialize = "HT3")]
    #[serde(rename = "HT3")]
    Ht3 = 5,
    #[strum(serialize = "LT3")]
    #[serde(rename = "LT3")]
    Lt3 = 6,
    #[strum(serialize = "HT4")]
    #[serde(rename = "HT4")]
    Ht4 = 7,
    #[strum(serialize = "LT4")]
    #[serde(rename = "LT4")]
    Lt4 = 8,
    #[strum(serialize = "HT5")]
    #[serde(rename = "HT5")]
    Ht5 = 9,
    #[strum(serialize = "LT5")]
    #[serde(rename = "LT5")]
    Lt5 = 10,
    #[strum(serialize = "HT6")]
    #[serde(rename = "HT6")]
    Ht6 = 11,
    #[strum(serialize = "LT6")]
    #[serde(rename = "LT6")]
    Lt6 = 12,
    #[default]
    #[strum(serialize = "U")]
    #[serde(rename = "U")]
    Unranked = 13,
}

impl Tier {
    /// Number of ranked tiers (everything but `Unranked`).
    pub const RANKED_COUNT: usize = Self::COUNT - 1;

    /// Normalize a raw label from a record.
    ///
    /// Absent, empty and unrecognized labels all become `Unranked`.
    pub fn normalize(label: Option<&str>) -> Self {
        match label.map(str::trim) {
            Some(s) if !s.is_empty() => s.parse().unwrap_or(Self::Unranked),
            _ => Self::Unranked,
        }
    }

    /// Position in the per-mode ranking order, 1 (HT1) through 13 (U).
    pub fn order_index(&self) -> u8 {
        *self as u8
    }

    /// Position on the ascending skill scale, 0 (LT6) through 11 (HT1).
    pub fn scale_index(&self) -> Option<usize> {
        match self {
            Self::Unranked => None,
            tier => Some(Self::RANKED_COUNT - tier.order_index() as usize),
        }
    }

    pub fn is_ranked(&self) -> bool {
        *self != Self::Unranked
    }

    /// HT3 and above are tested through the promotion system rather than placement.
    pub fn is_high(&self) -> bool {
        self.is_ranked() && *self <= Self::Ht3
    }

    /// Ranked tiers, best first.
    pub fn ranked() -> impl Iterator<Item = Tier> {
        Self::iter().filter(Tier::is_ranked)
    }

    pub fn short_name(&self) -> &'static str {
        self.into()
    }

    pub fn color_code(&self) -> &'static str {
        match self {
            Self::Lt6 => "#444444",
            Self::Ht6 => "#777777",
            Self::Lt5 => "#aaaaaa",
            Self::Ht5 => "#00ff00",
            Self::Lt4 => "#00ffff",
            Self::Ht4 => "#5588ff",
            Self::Lt3 => "#ff00ff",
            Self::Ht3 => "#ffcc55",
            Self::Lt2 => "#ff7575",
            Self::Ht2 => "#ff0000",
            Self::Lt1 => "#8b0000",
            Self::Ht1 => "#ffffff",
            Self::Unranked => "#333333",
        }
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.short_name())
    }
}
