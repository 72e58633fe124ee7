use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use strum::{EnumString, IntoStaticStr};

use super::Tier;

/// Built-in point schemes.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    EnumString,
    IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum PointScheme {
    /// The table the tier list ships with (1, 2, 3, 4, 5, 7, 10, 25, 50, 100, 250, 1000).
    #[default]
    Classic,
    /// LT6 = 1 up to HT1 = 12.
    Linear,
    /// LT6 = 1, doubling per tier.
    Exponential,
    /// (scale index + 1) squared.
    Quadratic,
}

/// Points awarded per tier, ascending skill order (LT6 first).
const CLASSIC_POINTS: [u32; Tier::RANKED_COUNT] = [1, 2, 3, 4, 5, 7, 10, 25, 50, 100, 250, 1000];

/// Tier -> points lookup.
///
/// `Unranked` is part of the table like any other tier. Every built-in
/// scheme maps it to 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TierScoreTable {
    points: BTreeMap<Tier, u32>,
}

impl TierScoreTable {
    pub fn from_scheme(scheme: PointScheme) -> Self {
        let points = Tier::ranked()
            .map(|tier| {
                let i = tier.scale_index().unwrap_or_default();
                let value = match scheme {
                    PointScheme::Classic => CLASSIC_POINTS[i],
                    PointScheme::Linear => i as u32 + 1,
                    PointScheme::Exponential => 1u32 << i,
                    PointScheme::Quadratic => (i as u32 + 1).pow(2),
                };
                (tier, value)
            })
            .chain(std::iter::once((Tier::Unranked, 0)))
            .collect();
        Self { points }
    }

    pub fn classic() -> Self {
        Self::from_scheme(PointScheme::Classic)
    }

    /// Build a table from explicit values. Tiers missing from `points` score 0.
    pub fn from_points(points: impl IntoIterator<Item = (Tier, u32)>) -> Self {
        let mut table = Self {
            points: Tier::ranked()
                .chain(std::iter::once(Tier::Unranked))
                .map(|t| (t, 0))
                .collect(),
        };
        table.points.extend(points);
        table
    }

    /// Replace individual entries, keeping the rest.
    pub fn with_overrides(mut self, overrides: impl IntoIterator<Item = (Tier, u32)>) -> Self {
        self.points.extend(overrides);
        self
    }

    pub fn points(&self, tier: Tier) -> u32 {
        self.points.get(&tier).copied().unwrap_or(0)
    }

    /// True when a better tier never scores less than a worse one.
    pub fn is_monotonic(&self) -> bool {
        let ordered: Vec<u32> = Tier::ranked()
            .chain(std::iter::once(Tier::Unranked))
            .map(|t| self.points(t))
            .collect();
        ordered.windows(2).all(|w| w[0] >= w[1])
    }

    /// Ranked tiers with their point values, best first.
    pub fn entries(&self) -> impl Iterator<Item = (Tier, u32)> + '_ {
        Tier::ranked().map(|t| (t, self.points(t)))
    }
}

impl Default for TierScoreTable {
    fn default() -> Self {
        Self::classic()
    }
}
